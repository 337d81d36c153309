//! Route definitions for context entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::contexts;
use crate::state::AppState;

/// ```text
/// GET  /contexts/  -> list_contexts
/// POST /contexts/  -> create_context
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/contexts/",
        get(contexts::list_contexts).post(contexts::create_context),
    )
}
