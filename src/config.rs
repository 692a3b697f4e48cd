use std::env;

/// Default MediaWiki API endpoint (English Wikipedia).
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// User agent sent with every API request, as asked by the Wikimedia API etiquette.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wiki-discography/",
    env!("CARGO_PKG_VERSION"),
    " (https://www.mediawiki.org/wiki/API:Etiquette)"
);

/// Environment variable overriding [`WikipediaConfig::api_url`].
pub const API_URL_VAR: &str = "WIKI_DISCOGRAPHY_API_URL";
/// Environment variable overriding [`WikipediaConfig::user_agent`].
pub const USER_AGENT_VAR: &str = "WIKI_DISCOGRAPHY_USER_AGENT";
/// Environment variable toggling [`WikipediaConfig::include_summary`].
pub const SUMMARY_VAR: &str = "WIKI_DISCOGRAPHY_SUMMARY";

/// Configuration of the [`WikipediaClient`](crate::WikipediaClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikipediaConfig {
    /// MediaWiki `api.php` endpoint
    pub api_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Request the plain-text page introduction as the page summary
    pub include_summary: bool,
    /// Fall back to a full-text search when the title matches no page
    pub search_fallback: bool,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            include_summary: true,
            search_fallback: true,
        }
    }
}

impl WikipediaConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the `WIKI_DISCOGRAPHY_*` environment variables,
    /// using defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_url) = env::var(API_URL_VAR) {
            config.api_url = api_url;
        }
        if let Ok(user_agent) = env::var(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        if let Ok(summary) = env::var(SUMMARY_VAR) {
            config.include_summary = parse_flag(&summary);
        }
        config
    }

    /// Set a custom API endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable/disable fetching the page summary
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.include_summary = enabled;
        self
    }

    /// Enable/disable the search fallback for unknown titles
    pub fn with_search_fallback(mut self, enabled: bool) -> Self {
        self.search_fallback = enabled;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_english_wikipedia() {
        let config = WikipediaConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.include_summary);
        assert!(config.search_fallback);
        assert!(config.user_agent.starts_with("wiki-discography/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = WikipediaConfig::new()
            .with_api_url("http://localhost:8080/w/api.php")
            .with_summary(false)
            .with_search_fallback(false);
        assert_eq!(config.api_url, "http://localhost:8080/w/api.php");
        assert!(!config.include_summary);
        assert!(!config.search_fallback);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(" False "));
    }
}
