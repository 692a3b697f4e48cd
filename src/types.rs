//! Data types for extracted discography records and result envelopes.
//!
//! Every record here is a read-only projection of a single fetched page. They are
//! created fresh by the extractors on each call and carry no identity beyond
//! their field values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status message carried by every successful result envelope.
pub const OK_MESSAGE: &str = "OK";

// ================================================================================================
// PAGE METADATA
// ================================================================================================

/// Identifies the source wiki page a result was extracted from.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use wiki_discography::PageMetadata;
///
/// let page = PageMetadata {
///     id: 8426694,
///     title: "The Offspring".to_string(),
///     last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
///     summary: None,
/// };
///
/// assert_eq!(page.to_string(), "The Offspring (#8426694)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Numeric page id assigned by the wiki
    pub id: u64,
    /// Canonical page title after redirects
    pub title: String,
    /// When the page was last touched
    pub last_modified: DateTime<Utc>,
    /// Plain-text introduction of the page, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl fmt::Display for PageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

// ================================================================================================
// EXTRACTED RECORDS
// ================================================================================================

/// One row of a "Studio albums" table.
///
/// `release_date` is kept as the free text found in the page; it is not
/// guaranteed to be a valid calendar date. Use [`AlbumEntry::parsed_release_date`]
/// for a best-effort conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumEntry {
    /// Page key of the album article (e.g. `Ixnay_on_the_Hombre`)
    pub reference: String,
    /// Display title of the album
    pub title: String,
    /// Release date text with the "Released:" label removed
    pub release_date: String,
}

impl AlbumEntry {
    /// Parse the release date as `day month-name year`, ignoring trailing text
    /// such as a country annotation.
    ///
    /// ```rust
    /// use wiki_discography::AlbumEntry;
    ///
    /// let album = AlbumEntry {
    ///     reference: "Smash_(The_Offspring_album)".to_string(),
    ///     title: "Smash".to_string(),
    ///     release_date: "8 April 1994 (US)".to_string(),
    /// };
    /// let date = album.parsed_release_date().unwrap();
    /// assert_eq!(date.to_string(), "1994-04-08");
    /// ```
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_and_remainder(self.release_date.trim(), "%d %B %Y")
            .ok()
            .map(|(date, _)| date)
    }
}

impl fmt::Display for AlbumEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_date)
    }
}

/// One face of a dual-sided physical medium.
///
/// Serialized as its number (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The side number as printed in the output (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Side::A => 1,
            Side::B => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl Serialize for Side {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(Side::A),
            2 => Ok(Side::B),
            other => Err(serde::de::Error::custom(format!(
                "side must be 1 or 2, got {other}"
            ))),
        }
    }
}

/// One song of a release's tracklist.
///
/// # Examples
///
/// ```rust
/// use wiki_discography::{Side, TrackEntry};
///
/// let track = TrackEntry {
///     position: 10,
///     title: "Night Prowler".to_string(),
///     side: Some(Side::B),
///     duration_seconds: 373,
/// };
///
/// assert_eq!(track.to_string(), "[B] 10. Night Prowler (6:13)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEntry {
    /// Track number after renumbering, unique within one extraction
    pub position: u32,
    /// Song title without quote characters
    pub title: String,
    /// Side of the medium; only set when the page has several tracklists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Track length in seconds
    pub duration_seconds: u32,
}

impl TrackEntry {
    /// Track length formatted back as `m:ss`.
    pub fn duration_display(&self) -> String {
        format!(
            "{}:{:02}",
            self.duration_seconds / 60,
            self.duration_seconds % 60
        )
    }
}

impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.side {
            write!(f, "[{side}] ")?;
        }
        write!(
            f,
            "{}. {} ({})",
            self.position,
            self.title,
            self.duration_display()
        )
    }
}

/// A personnel credit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Musician {
    pub name: String,
    pub role: String,
}

impl fmt::Display for Musician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.name, self.role)
    }
}

// ================================================================================================
// RESULT ENVELOPES
// ================================================================================================

/// Payload of a successful discography lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discography {
    pub page_details: PageMetadata,
    pub albums: Vec<AlbumEntry>,
    /// Normalized MusicBrainz link of the artist, if the page has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl Discography {
    /// Albums ordered by parsed release date, earliest first.
    ///
    /// Albums whose date cannot be parsed go last. Ties keep document order.
    pub fn albums_chronological(&self) -> Vec<&AlbumEntry> {
        let mut albums: Vec<&AlbumEntry> = self.albums.iter().collect();
        albums.sort_by_key(|album| match album.parsed_release_date() {
            Some(date) => (0, Some(date)),
            None => (1, None),
        });
        albums
    }
}

/// Payload of a successful tracklist lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackList {
    pub page_details: PageMetadata,
    pub tracks: Vec<TrackEntry>,
    pub musicians: Vec<Musician>,
}

impl TrackList {
    /// Sum of all track durations in seconds.
    pub fn total_duration_seconds(&self) -> u32 {
        self.tracks.iter().map(|t| t.duration_seconds).sum()
    }
}

/// Result envelope shared by every public lookup.
///
/// The message is [`OK_MESSAGE`] exactly when data is present; any other
/// message explains why data is absent. The envelope can only be built through
/// [`LookupResult::ok`] and [`LookupResult::failure`], which keeps the two in sync.
///
/// ```rust
/// use wiki_discography::TrackListResult;
///
/// let result = TrackListResult::failure("No tables found for Foo");
/// assert!(!result.is_ok());
/// assert_eq!(result.message(), "No tables found for Foo");
/// assert!(result.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult<T> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> LookupResult<T> {
    /// Successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            message: OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// Result without data, explaining why. `message` must not be [`OK_MESSAGE`].
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert_ne!(message, OK_MESSAGE, "a failure cannot carry the OK message");
        Self {
            message,
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.data.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Outcome of [`DiscographyService::search_discography`](crate::DiscographyService::search_discography).
pub type DiscographyResult = LookupResult<Discography>;

/// Outcome of [`TrackService::search_tracks`](crate::TrackService::search_tracks).
pub type TrackListResult = LookupResult<TrackList>;
