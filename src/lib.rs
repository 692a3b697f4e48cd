pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod parsing;
pub mod service;
pub mod sql;
pub mod types;
pub mod wikipedia;

pub use config::WikipediaConfig;
pub use error::DiscographyError;
#[cfg(feature = "mock")]
pub use fetch::MockPageFetcher;
pub use fetch::{FetchedPage, PageFetcher};
pub use parsing::{parse_duration, WikiParser};
pub use service::{DiscographyService, TrackService};
pub use sql::SqlScriptBuilder;
pub use types::{
    AlbumEntry, Discography, DiscographyResult, LookupResult, Musician, PageMetadata, Side,
    TrackEntry, TrackList, TrackListResult, OK_MESSAGE,
};
pub use wikipedia::WikipediaClient;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, DiscographyError>;
