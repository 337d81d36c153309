//! Handlers for the `/categories/` resource. Read-only over HTTP;
//! categories are managed directly in the store.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tasknest_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /categories/
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(categories))
}
