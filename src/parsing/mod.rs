//! HTML extraction for Wikipedia discography and album pages.
//!
//! Each submodule holds one extraction rule written against the
//! [`MarkupNode`](crate::dom::MarkupNode) query trait. [`WikiParser`] ties them
//! together over a parsed [`Html`] document. All of it is pure: nothing here
//! performs I/O or keeps state between calls.

pub mod albums;
pub mod duration;
pub mod links;
pub mod personnel;
pub mod title;
pub mod tracks;

use crate::{AlbumEntry, Musician, TrackEntry};
use scraper::Html;

pub use albums::extract_albums;
pub use duration::parse_duration;
pub use links::{resolve_external_link, MUSICBRAINZ_DOMAIN};
pub use personnel::extract_musicians;
pub use title::normalize_title;
pub use tracks::{extract_tracks, find_tracklist_tables};

/// Albums and external link read from an artist page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscographyPage {
    pub albums: Vec<AlbumEntry>,
    pub external_link: Option<String>,
}

/// Tracks and credits read from an album page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPage {
    /// Number of tracklist tables found; zero means the page has no tracklist
    pub table_count: usize,
    pub tracks: Vec<TrackEntry>,
    pub musicians: Vec<Musician>,
}

/// Parser for Wikipedia artist and album pages.
///
/// Stateless: the same document always yields the same result.
#[derive(Debug, Clone)]
pub struct WikiParser {
    link_domain: String,
}

impl WikiParser {
    /// Create a parser that resolves MusicBrainz links.
    pub fn new() -> Self {
        Self::with_link_domain(MUSICBRAINZ_DOMAIN)
    }

    /// Create a parser that resolves links to another metadata service.
    pub fn with_link_domain(domain: impl Into<String>) -> Self {
        Self {
            link_domain: domain.into(),
        }
    }

    /// Parse the studio albums and external link of an artist page.
    pub fn parse_discography_page(&self, document: &Html) -> DiscographyPage {
        let root = document.root_element();
        DiscographyPage {
            albums: extract_albums(root),
            external_link: resolve_external_link(root, &self.link_domain),
        }
    }

    /// Parse the tracklist tables and personnel of an album page.
    pub fn parse_album_page(&self, document: &Html) -> AlbumPage {
        let root = document.root_element();
        let tables = find_tracklist_tables(root);
        AlbumPage {
            table_count: tables.len(),
            tracks: extract_tracks(&tables),
            musicians: extract_musicians(root),
        }
    }
}

impl Default for WikiParser {
    fn default() -> Self {
        Self::new()
    }
}
