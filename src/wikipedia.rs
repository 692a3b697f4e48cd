//! [`PageFetcher`] backed by the MediaWiki action API.
//!
//! A page is resolved in two requests: `action=query` for the page id, canonical
//! title, touch timestamp and optional intro extract, then `action=parse` for the
//! rendered HTML. When the title does not exist, a one-hit full-text search
//! picks the closest article instead.

use crate::config::WikipediaConfig;
use crate::fetch::{FetchedPage, PageFetcher};
use crate::{DiscographyError, PageMetadata, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use serde::Deserialize;

/// Wikipedia client implementing [`PageFetcher`] over any [`HttpClient`].
///
/// # Examples
///
/// ```rust,no_run
/// use wiki_discography::{PageFetcher, WikipediaClient, WikipediaConfig};
///
/// # tokio_test::block_on(async {
/// let config = WikipediaConfig::from_env().with_summary(false);
/// let client = WikipediaClient::with_config(
///     Box::new(http_client::native::NativeClient::new()),
///     config,
/// );
///
/// if let Some(page) = client.fetch_page("Highway to Hell").await? {
///     println!("{} ({} bytes of markup)", page.metadata, page.markup.len());
/// }
/// # Ok::<(), wiki_discography::DiscographyError>(())
/// # });
/// ```
pub struct WikipediaClient {
    client: Box<dyn HttpClient>,
    config: WikipediaConfig,
}

impl WikipediaClient {
    /// Create a client for English Wikipedia with default settings.
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self::with_config(client, WikipediaConfig::default())
    }

    pub fn with_config(client: Box<dyn HttpClient>, config: WikipediaConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &WikipediaConfig {
        &self.config
    }

    /// Look up a page by exact title, following redirects.
    pub async fn page_info(&self, title: &str) -> Result<Option<PageMetadata>> {
        let prop = if self.config.include_summary {
            "info|extracts&exintro=1&explaintext=1"
        } else {
            "info"
        };
        let url = self.api_url(&format!(
            "action=query&redirects=1&prop={prop}&titles={}",
            urlencoding::encode(title)
        ));
        let body = self.get(&url).await?;
        parse_page_info_response(&body)
    }

    /// Title of the best full-text search hit for `query`.
    pub async fn search_title(&self, query: &str) -> Result<Option<String>> {
        let url = self.api_url(&format!(
            "action=query&list=search&srlimit=1&srsearch={}",
            urlencoding::encode(query)
        ));
        let body = self.get(&url).await?;
        parse_search_response(&body)
    }

    /// Rendered HTML of the page with the given id.
    pub async fn page_markup(&self, page_id: u64) -> Result<String> {
        let url = self.api_url(&format!("action=parse&prop=text&pageid={page_id}"));
        let body = self.get(&url).await?;
        parse_markup_response(&body)
    }

    fn api_url(&self, query: &str) -> String {
        format!(
            "{}?format=json&formatversion=2&{query}",
            self.config.api_url
        )
    }

    async fn get(&self, url: &str) -> Result<String> {
        let url = url
            .parse::<Url>()
            .map_err(|e| DiscographyError::InvalidUrl(format!("{url}: {e}")))?;
        log::debug!("GET {url}");

        let mut request = Request::new(Method::Get, url);
        let _ = request.insert_header("User-Agent", self.config.user_agent.as_str());
        let _ = request.insert_header("Accept", "application/json");

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| DiscographyError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DiscographyError::Http(format!(
                "Wiki API returned status {}",
                response.status()
            )));
        }

        response
            .body_string()
            .await
            .map_err(|e| DiscographyError::Http(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PageFetcher for WikipediaClient {
    async fn fetch_page(&self, title: &str) -> Result<Option<FetchedPage>> {
        let mut metadata = self.page_info(title).await?;

        if metadata.is_none() && self.config.search_fallback {
            if let Some(found) = self.search_title(title).await? {
                log::debug!("No page titled '{title}', using search hit '{found}'");
                metadata = self.page_info(&found).await?;
            }
        }

        let Some(metadata) = metadata else {
            log::debug!("No page found for '{title}'");
            return Ok(None);
        };

        let markup = self.page_markup(metadata.id).await?;
        Ok(Some(FetchedPage { markup, metadata }))
    }
}

// =============================================================================
// API response shapes
// =============================================================================

#[derive(Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Deserialize)]
struct ApiQueryResponse<Q> {
    error: Option<ApiError>,
    query: Option<Q>,
}

#[derive(Deserialize)]
struct ApiPages {
    #[serde(default)]
    pages: Vec<ApiPage>,
}

#[derive(Deserialize)]
struct ApiPage {
    pageid: Option<u64>,
    title: String,
    touched: Option<DateTime<Utc>>,
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
}

#[derive(Deserialize)]
struct ApiSearch {
    #[serde(default)]
    search: Vec<ApiSearchHit>,
}

#[derive(Deserialize)]
struct ApiSearchHit {
    title: String,
}

#[derive(Deserialize)]
struct ApiParseResponse {
    error: Option<ApiError>,
    parse: Option<ApiParsedPage>,
}

#[derive(Deserialize)]
struct ApiParsedPage {
    text: String,
}

fn api_error(error: ApiError) -> DiscographyError {
    DiscographyError::Api {
        code: error.code,
        info: error.info,
    }
}

fn decode<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| DiscographyError::Parse(e.to_string()))
}

/// Metadata of the first existing page in an `action=query&prop=info` response.
pub fn parse_page_info_response(json: &str) -> Result<Option<PageMetadata>> {
    let response: ApiQueryResponse<ApiPages> = decode(json)?;
    if let Some(error) = response.error {
        return Err(api_error(error));
    }

    let Some(page) = response
        .query
        .into_iter()
        .flat_map(|query| query.pages)
        .find(|page| !page.missing && !page.invalid)
    else {
        return Ok(None);
    };

    let id = page
        .pageid
        .ok_or_else(|| DiscographyError::Parse(format!("Page '{}' has no id", page.title)))?;
    let last_modified = page.touched.ok_or_else(|| {
        DiscographyError::Parse(format!("Page '{}' has no touched timestamp", page.title))
    })?;

    Ok(Some(PageMetadata {
        id,
        title: page.title,
        last_modified,
        summary: page.extract.filter(|extract| !extract.trim().is_empty()),
    }))
}

/// Title of the first hit in an `action=query&list=search` response.
pub fn parse_search_response(json: &str) -> Result<Option<String>> {
    let response: ApiQueryResponse<ApiSearch> = decode(json)?;
    if let Some(error) = response.error {
        return Err(api_error(error));
    }
    Ok(response
        .query
        .and_then(|query| query.search.into_iter().next())
        .map(|hit| hit.title))
}

/// Rendered HTML of an `action=parse&prop=text` response.
pub fn parse_markup_response(json: &str) -> Result<String> {
    let response: ApiParseResponse = decode(json)?;
    if let Some(error) = response.error {
        return Err(api_error(error));
    }
    response
        .parse
        .map(|parsed| parsed.text)
        .ok_or_else(|| DiscographyError::Parse("Parse response has no text".to_string()))
}
