//! Route definition for the mock AI suggestion endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// ```text
/// POST /ai-suggestions/  -> suggest
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ai-suggestions/", post(suggestions::suggest))
}
