use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};
use sift_core::{CandidateFilter, FilterRequest, SearchOutcome};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

const MAX_QUERY_LEN: usize = 500;

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageRequest {
    pub query: String,
}

impl NaturalLanguageRequest {
    fn validate(&self) -> Result<&str, ApiError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(ApiError::Query("Query must not be empty".to_string()));
        }
        if query.chars().count() > MAX_QUERY_LEN {
            return Err(ApiError::Query(format!(
                "Query must be at most {MAX_QUERY_LEN} characters"
            )));
        }
        Ok(query)
    }
}

#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Candidate Filter API is running" }))
}

#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Validate a filter request and echo it back normalized.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn filter_candidate(
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<CandidateFilter>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(request.into_echo()?))
}

pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<SearchOutcome>, ApiError> {
    let Json(request) = payload?;
    let criteria = request.into_criteria()?;

    let store = state.store.clone();
    let outcome = tokio::task::spawn_blocking(move || store.search(criteria))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Direct search matched {} candidates", outcome.total_candidates);
    Ok(Json(outcome))
}

pub async fn natural_language_search(
    State(state): State<AppState>,
    payload: Result<Json<NaturalLanguageRequest>, JsonRejection>,
) -> Result<Json<SearchOutcome>, ApiError> {
    let Json(request) = payload?;
    let query = request.validate()?.to_string();

    let AppState { store, interpreter } = state;
    let outcome = tokio::task::spawn_blocking(move || store.search_text(&interpreter, &query))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(
        "Free-text search matched {} candidates ({})",
        outcome.total_candidates,
        outcome.parsed_query.as_deref().unwrap_or_default()
    );
    Ok(Json(outcome))
}
