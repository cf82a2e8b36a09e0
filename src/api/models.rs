use serde::Deserialize;
use std::num::NonZeroU64;

use crate::data_models::SearchRequest;
use crate::error::SearchError;
use crate::render::DEFAULT_HITS;

/// Raw query string of `GET /`.
///
/// Numbers arrive as text; anything that does not parse falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub start: Option<String>,
    pub hits: Option<String>,
}

fn parse_int(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

impl SearchParams {
    pub fn start(&self) -> i64 {
        parse_int(self.start.as_deref(), 0)
    }

    pub fn hits(&self) -> i64 {
        parse_int(self.hits.as_deref(), DEFAULT_HITS as i64)
    }

    /// Check the parameters before anything is sent to the back-end.
    ///
    /// `Ok(None)` means there is no query and the landing page should be shown.
    pub fn validate(self) -> Result<Option<SearchRequest>, SearchError> {
        let (start, hits) = (self.start(), self.hits());
        if start < 0 || hits < 0 {
            return Err(SearchError::negative_parameter());
        }
        let hits = NonZeroU64::new(hits as u64).ok_or_else(SearchError::zero_hits)?;

        Ok(self
            .query
            .filter(|query| !query.is_empty())
            .map(|query| SearchRequest::new(query, start as u64, hits)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: Option<&str>, start: Option<&str>, hits: Option<&str>) -> SearchParams {
        SearchParams {
            query: query.map(str::to_string),
            start: start.map(str::to_string),
            hits: hits.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let request = params(Some("rust"), None, None).validate().unwrap().unwrap();
        assert_eq!(request.start, 0);
        assert_eq!(request.hits.get(), 10);
        assert_eq!(request.query, "rust");
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let request = params(Some("rust"), Some("abc"), Some(" 25 "))
            .validate()
            .unwrap()
            .unwrap();
        assert_eq!(request.start, 0);
        assert_eq!(request.hits.get(), 25);
    }

    #[test]
    fn test_no_query_is_landing() {
        assert!(params(None, None, None).validate().unwrap().is_none());
        assert!(params(Some(""), Some("10"), None).validate().unwrap().is_none());
    }

    #[test]
    fn test_negative_rejected_even_without_query() {
        assert!(matches!(
            params(None, Some("-1"), None).validate(),
            Err(SearchError::InvalidParameter(_))
        ));
        assert!(matches!(
            params(Some("rust"), None, Some("-5")).validate(),
            Err(SearchError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_hits_rejected() {
        let err = params(Some("rust"), None, Some("0")).validate().unwrap_err();
        assert_eq!(err.user_message(), "Error, hits must be greater than zero");
    }
}
