use wiki_discography::{AlbumEntry, DiscographyService};

/// Handle the albums command
pub async fn handle_albums(
    service: &DiscographyService,
    artist: &str,
    json: bool,
    chronological: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Looking up studio albums for '{artist}'");
    let result = service.search_discography(artist).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    let Some(discography) = result.data() else {
        return Err(result.message().into());
    };

    if json {
        return Ok(());
    }

    println!("{}", discography.page_details);
    if let Some(link) = &discography.external_link {
        println!("MusicBrainz: {link}");
    }

    let albums: Vec<&AlbumEntry> = if chronological {
        discography.albums_chronological()
    } else {
        discography.albums.iter().collect()
    };

    if albums.is_empty() {
        println!("No studio albums listed");
    }
    for (index, album) in albums.iter().enumerate() {
        println!("{:3}. {album}", index + 1);
    }

    Ok(())
}
