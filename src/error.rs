use thiserror::Error;

/// Error types for page fetching and markup extraction.
///
/// Extraction itself never fails as a whole: malformed rows are skipped and
/// missing sections yield empty lists. These errors surface from the page-fetch
/// collaborator and from the micro-parsers ([`parse_duration`](crate::parse_duration))
/// whose callers decide to skip the offending row.
///
/// The orchestrators ([`DiscographyService`](crate::DiscographyService),
/// [`TrackService`](crate::TrackService)) convert every error into the
/// `message` of a result envelope, so callers of those services never see
/// this type directly.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use wiki_discography::{DiscographyError, PageFetcher, WikipediaClient};
///
/// #[tokio::main]
/// async fn main() {
///     let client = WikipediaClient::new(Box::new(http_client::native::NativeClient::new()));
///
///     match client.fetch_page("The Offspring").await {
///         Ok(Some(page)) => println!("Fetched {}", page.metadata.title),
///         Ok(None) => println!("No such page"),
///         Err(DiscographyError::Api { code, info }) => eprintln!("API error {code}: {info}"),
///         Err(DiscographyError::Http(msg)) => eprintln!("Network error: {msg}"),
///         Err(e) => eprintln!("Other error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum DiscographyError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors and non-success
    /// status codes returned by the wiki API.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a response body or a micro-data token.
    ///
    /// Raised for unexpected JSON shapes from the wiki API and for malformed
    /// tokens such as a duration without a colon.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The wiki API answered with an `error` payload.
    #[error("Wiki API error {code}: {info}")]
    Api {
        /// Machine-readable error code (e.g. `missingtitle`)
        code: String,
        /// Human-readable explanation
        info: String,
    },

    /// A request URL could not be built from the configured API endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
