use wiki_discography::TrackService;

/// Handle the tracks command
pub async fn handle_tracks(
    service: &TrackService,
    album: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Looking up tracklist for '{album}'");
    let result = service.search_tracks(album).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    let Some(track_list) = result.data() else {
        return Err(result.message().into());
    };

    if json {
        return Ok(());
    }

    println!("{}", track_list.page_details);
    for track in &track_list.tracks {
        println!("  {track}");
    }

    let total = track_list.total_duration_seconds();
    println!(
        "{} tracks, {}:{:02} total",
        track_list.tracks.len(),
        total / 60,
        total % 60
    );

    if !track_list.musicians.is_empty() {
        println!("\nPersonnel:");
        for musician in &track_list.musicians {
            println!("  {musician}");
        }
    }

    Ok(())
}
