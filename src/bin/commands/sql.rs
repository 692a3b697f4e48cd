use futures::future::join_all;
use std::path::Path;
use wiki_discography::{DiscographyService, SqlScriptBuilder, TrackService};

/// Handle the sql command
///
/// Tracklists of all albums are fetched concurrently; an album whose tracklist
/// cannot be extracted still gets its album row.
pub async fn handle_sql(
    discography_service: &DiscographyService,
    track_service: &TrackService,
    artist: &str,
    band_id: u64,
    first_album_pk: u64,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = discography_service.search_discography(artist).await;
    let Some(discography) = result.data() else {
        return Err(result.message().into());
    };

    log::info!(
        "Fetching tracklists for {} albums of '{artist}'",
        discography.albums.len()
    );
    let track_results = join_all(
        discography
            .albums
            .iter()
            .map(|album| track_service.search_tracks(&album.reference)),
    )
    .await;

    let mut script = SqlScriptBuilder::new(band_id, first_album_pk);
    for (album, tracks) in discography.albums.iter().zip(track_results) {
        let album_pk = script.add_album(album);
        match tracks.data() {
            Some(track_list) => script.add_tracks(album_pk, &track_list.tracks),
            None => eprintln!("⚠️  {}: {}", album.reference, tracks.message()),
        }
    }

    log::info!(
        "Generated {} album rows and {} song rows",
        script.album_count(),
        script.song_count()
    );

    let sql = script.build();
    match output {
        Some(path) => {
            std::fs::write(path, format!("{sql}\n"))?;
            println!("✅ Wrote {}", path.display());
        }
        None => println!("{sql}"),
    }

    Ok(())
}
