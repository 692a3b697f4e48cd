use crate::{PageMetadata, Result};
use async_trait::async_trait;

/// Raw markup of a wiki page with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub markup: String,
    pub metadata: PageMetadata,
}

/// Capability to retrieve a page's markup by title or search query.
///
/// The services depend on this trait only, so extraction can be exercised
/// against canned markup without any network access.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockPageFetcher`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait PageFetcher {
    /// Fetch the page for `title`.
    ///
    /// Returns `Ok(None)` when the title resolves to no page, and `Err` when the
    /// upstream service itself fails.
    async fn fetch_page(&self, title: &str) -> Result<Option<FetchedPage>>;
}
