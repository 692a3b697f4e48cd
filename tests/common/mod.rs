#![allow(dead_code)]
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use wiki_discography::{
    DiscographyError, DiscographyService, FetchedPage, PageFetcher, PageMetadata, Result,
    TrackService,
};

pub const THE_OFFSPRING: &str = include_str!("../fixtures/the_offspring.html");
pub const HIGHWAY_TO_HELL: &str = include_str!("../fixtures/highway_to_hell.html");
pub const SMASH: &str = include_str!("../fixtures/smash.html");
pub const NO_TRACKLIST: &str = include_str!("../fixtures/no_tracklist.html");

/// Metadata for a canned page
pub fn metadata(id: u64, title: &str) -> PageMetadata {
    PageMetadata {
        id,
        title: title.to_string(),
        last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        summary: None,
    }
}

/// Fetcher serving canned markup keyed by the requested title
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, FetchedPage>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, title: &str, id: u64, markup: &str) -> Self {
        self.pages.insert(
            title.to_string(),
            FetchedPage {
                markup: markup.to_string(),
                metadata: metadata(id, &title.replace('_', " ")),
            },
        );
        self
    }
}

#[async_trait(?Send)]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, title: &str) -> Result<Option<FetchedPage>> {
        Ok(self.pages.get(title).cloned())
    }
}

/// Fetcher that always fails like an unreachable API
pub struct FailingFetcher;

#[async_trait(?Send)]
impl PageFetcher for FailingFetcher {
    async fn fetch_page(&self, _title: &str) -> Result<Option<FetchedPage>> {
        Err(DiscographyError::Http("connection refused".to_string()))
    }
}

/// Fetcher with every fixture page registered
pub fn fixture_fetcher() -> Arc<StaticFetcher> {
    Arc::new(
        StaticFetcher::new()
            .with_page("The Offspring", 8426694, THE_OFFSPRING)
            .with_page("Highway_to_Hell", 1234567, HIGHWAY_TO_HELL)
            .with_page("Smash_(The_Offspring_album)", 172936, SMASH)
            .with_page("Untitled_Demo", 42, NO_TRACKLIST),
    )
}

pub fn discography_service() -> DiscographyService {
    DiscographyService::new(fixture_fetcher())
}

pub fn track_service() -> TrackService {
    TrackService::new(fixture_fetcher())
}
