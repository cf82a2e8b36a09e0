use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::formatting::{truncate_description, truncate_title, truncate_url};

/// A validated query, sent to the back-end as a form body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub hits: NonZeroU64,
    pub start: u64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, start: u64, hits: NonZeroU64) -> SearchRequest {
        SearchRequest {
            query: query.into(),
            hits,
            start,
        }
    }
}

/// Body returned by the back-end's `/search` endpoint. Both fields are required.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub total: u64,
    pub results: Vec<ResultItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Percent-encoded, as the back-end stored it.
    #[serde(default)]
    pub url: String,
}

/// A result item shortened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub title: String,
    pub description: String,
    pub display_url: String,
    /// Link target; the untouched back-end URL.
    pub href: String,
}

impl From<&ResultItem> for DisplayResult {
    fn from(item: &ResultItem) -> Self {
        DisplayResult {
            title: truncate_title(&item.title),
            description: truncate_description(&item.description),
            display_url: truncate_url(&item.url),
            href: item.url.clone(),
        }
    }
}
