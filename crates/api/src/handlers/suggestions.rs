//! Handler for the mock AI suggestion endpoint.

use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tasknest_core::suggestion::suggest_for_task;

use crate::error::AppResult;

/// Request body for `POST /ai-suggestions/`. Missing fields are treated as
/// empty strings; the endpoint never rejects a payload.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// POST /ai-suggestions/
///
/// Pure function, no persistence: returns the canned suggestion for any
/// input. 200 regardless.
pub async fn suggest(Json(input): Json<SuggestionRequest>) -> AppResult<impl IntoResponse> {
    let suggestion = suggest_for_task(&input.title, &input.description);

    Ok(Json(suggestion))
}
