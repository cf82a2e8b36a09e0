use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::client::SearchClient;
use crate::data_models::DisplayResult;
use crate::error::SearchError;
use crate::pagination::compute_window;
use crate::render::{self, ResultsPage};

use super::models::SearchParams;

pub async fn search_handler(
    State(client): State<Arc<SearchClient>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, SearchError> {
    let Some(request) = params.validate()? else {
        return Ok(Html(render::landing_page()));
    };

    let outcome = client.search(&request).await?;
    let window = compute_window(request.start, request.hits, outcome.response.total);

    tracing::info!(
        query = %request.query,
        start = request.start,
        hits = request.hits.get(),
        total = outcome.response.total,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "served search"
    );

    let results: Vec<DisplayResult> = outcome
        .response
        .results
        .iter()
        .map(DisplayResult::from)
        .collect();

    let page = ResultsPage {
        query: request.query,
        hits: request.hits,
        start: request.start,
        total: outcome.response.total,
        response_time: outcome.elapsed,
        window,
        results,
    };

    Ok(Html(render::results_page(&page)))
}
