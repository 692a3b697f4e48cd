pub mod albums;
pub mod sql;
pub mod tracks;

use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;
use wiki_discography::{DiscographyService, TrackService, WikipediaClient, WikipediaConfig};

#[derive(Subcommand)]
pub enum Commands {
    /// List the studio albums of an artist
    ///
    /// Usage examples:
    /// # List albums in document order
    /// wiki-discography albums "The Offspring"
    ///
    /// # Oldest first, as JSON
    /// wiki-discography albums "AC/DC" --chronological --json
    Albums {
        /// Artist name or page title
        artist: String,

        /// Print the full result envelope as JSON
        #[arg(long)]
        json: bool,

        /// Order albums by release date instead of page order
        #[arg(long)]
        chronological: bool,
    },

    /// List the tracks and personnel of an album
    ///
    /// Usage examples:
    /// wiki-discography tracks "Highway to Hell"
    /// wiki-discography tracks "Smash_(The_Offspring_album)" --json
    Tracks {
        /// Album page title
        album: String,

        /// Print the full result envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate SQL inserts for an artist's albums and their songs
    ///
    /// Usage examples:
    /// wiki-discography sql "AC/DC" --band-id 1
    /// wiki-discography sql "The Offspring" --band-id 2 --first-album-pk 20 --output offspring.sql
    Sql {
        /// Artist name or page title
        artist: String,

        /// Value of the band_id column
        #[arg(long)]
        band_id: u64,

        /// Primary key of the first album row
        #[arg(long, default_value = "1")]
        first_album_pk: u64,

        /// Write the script to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Run a subcommand against a fresh Wikipedia client.
pub async fn execute_command(
    command: Commands,
    config: WikipediaConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let http_client = http_client::native::NativeClient::new();
    let fetcher = Arc::new(WikipediaClient::with_config(Box::new(http_client), config));

    match command {
        Commands::Albums {
            artist,
            json,
            chronological,
        } => {
            let service = DiscographyService::new(fetcher);
            albums::handle_albums(&service, &artist, json, chronological).await
        }
        Commands::Tracks { album, json } => {
            let service = TrackService::new(fetcher);
            tracks::handle_tracks(&service, &album, json).await
        }
        Commands::Sql {
            artist,
            band_id,
            first_album_pk,
            output,
        } => {
            let discography = DiscographyService::new(fetcher.clone());
            let tracks = TrackService::new(fetcher);
            sql::handle_sql(
                &discography,
                &tracks,
                &artist,
                band_id,
                first_album_pk,
                output.as_deref(),
            )
            .await
        }
    }
}
