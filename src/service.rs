//! Orchestrators that fetch a page and assemble result envelopes.
//!
//! These are the only components that talk to a [`PageFetcher`]. Every failure,
//! whether a missing page, a missing section or an upstream error, becomes the
//! `message` of the returned envelope; nothing here returns `Err`.

use crate::fetch::{FetchedPage, PageFetcher};
use crate::parsing::WikiParser;
use crate::{Discography, DiscographyResult, TrackList, TrackListResult};
use scraper::Html;
use std::sync::Arc;

/// Outcome of asking the fetcher for a page.
enum Lookup {
    Found(FetchedPage),
    Failed(String),
}

async fn lookup(fetcher: &dyn PageFetcher, title: &str, not_found: String) -> Lookup {
    match fetcher.fetch_page(title).await {
        Ok(Some(page)) => {
            log::debug!("Fetched page {}", page.metadata);
            Lookup::Found(page)
        }
        Ok(None) => {
            log::debug!("{not_found}");
            Lookup::Failed(not_found)
        }
        Err(e) => {
            log::warn!("Fetching '{title}' failed: {e}");
            Lookup::Failed(e.to_string())
        }
    }
}

/// Looks up an artist page and extracts its studio albums.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use wiki_discography::{DiscographyService, WikipediaClient};
///
/// # tokio_test::block_on(async {
/// let client = WikipediaClient::new(Box::new(http_client::native::NativeClient::new()));
/// let service = DiscographyService::new(Arc::new(client));
///
/// let result = service.search_discography("The Offspring").await;
/// if let Some(discography) = result.data() {
///     for album in &discography.albums {
///         println!("{album}");
///     }
/// } else {
///     eprintln!("{}", result.message());
/// }
/// # });
/// ```
#[derive(Clone)]
pub struct DiscographyService {
    fetcher: Arc<dyn PageFetcher>,
    parser: WikiParser,
}

impl DiscographyService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_parser(fetcher, WikiParser::new())
    }

    pub fn with_parser(fetcher: Arc<dyn PageFetcher>, parser: WikiParser) -> Self {
        Self { fetcher, parser }
    }

    /// Find the artist page for `artist` and extract its discography.
    ///
    /// A page without a studio albums section is still a successful result,
    /// with an empty album list.
    pub async fn search_discography(&self, artist: &str) -> DiscographyResult {
        let not_found = format!("No artist found for {artist}");
        let page = match lookup(self.fetcher.as_ref(), artist, not_found).await {
            Lookup::Found(page) => page,
            Lookup::Failed(message) => return DiscographyResult::failure(message),
        };

        let document = Html::parse_document(&page.markup);
        let parsed = self.parser.parse_discography_page(&document);

        DiscographyResult::ok(Discography {
            page_details: page.metadata,
            albums: parsed.albums,
            external_link: parsed.external_link,
        })
    }
}

/// Looks up an album page and extracts its tracklist and personnel.
#[derive(Clone)]
pub struct TrackService {
    fetcher: Arc<dyn PageFetcher>,
    parser: WikiParser,
}

impl TrackService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_parser(fetcher, WikiParser::new())
    }

    pub fn with_parser(fetcher: Arc<dyn PageFetcher>, parser: WikiParser) -> Self {
        Self { fetcher, parser }
    }

    /// Find the album page for `album` and extract its tracks and musicians.
    pub async fn search_tracks(&self, album: &str) -> TrackListResult {
        let not_found = format!("No album found for {album}");
        let page = match lookup(self.fetcher.as_ref(), album, not_found).await {
            Lookup::Found(page) => page,
            Lookup::Failed(message) => return TrackListResult::failure(message),
        };

        let document = Html::parse_document(&page.markup);
        let parsed = self.parser.parse_album_page(&document);

        if parsed.table_count == 0 {
            log::debug!("No tracklist tables on '{}'", page.metadata.title);
            return TrackListResult::failure(format!("No tables found for {album}"));
        }

        TrackListResult::ok(TrackList {
            page_details: page.metadata,
            tracks: parsed.tracks,
            musicians: parsed.musicians,
        })
    }
}
