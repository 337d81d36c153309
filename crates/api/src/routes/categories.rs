//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// GET /categories/  -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/categories/", get(categories::list_categories))
}
