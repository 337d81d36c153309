//! Handlers for the `/contexts/` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasknest_db::models::context_entry::CreateContextEntry;
use tasknest_db::repositories::ContextEntryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validate::validate_create_context;

/// GET /contexts/
///
/// List all context entries, newest first.
pub async fn list_contexts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = ContextEntryRepo::list(&state.pool).await?;

    Ok(Json(entries))
}

/// POST /contexts/
///
/// Persist a free-text note with a server-assigned timestamp.
pub async fn create_context(
    State(state): State<AppState>,
    Json(input): Json<CreateContextEntry>,
) -> AppResult<impl IntoResponse> {
    validate_create_context(&input).map_err(AppError::FieldValidation)?;

    // Both fields were just checked for presence.
    let (Some(content), Some(source)) = (&input.content, &input.source) else {
        return Err(AppError::InternalError(
            "validated payload missing fields".to_string(),
        ));
    };

    let entry = ContextEntryRepo::create(&state.pool, content, source).await?;

    tracing::info!(entry_id = entry.id, source = %entry.source, "Context entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}
