pub mod categories;
pub mod contexts;
pub mod health;
pub mod register;
pub mod suggestions;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Every collection and item path ends in a trailing slash, which the
/// frontend depends on, so each module declares its routes with absolute
/// paths and the routers are merged rather than nested.
///
/// ```text
/// POST   /register/           register
///
/// GET    /tasks/?user_id=     list (optionally owner-filtered)
/// POST   /tasks/              create
/// GET    /tasks/{id}/         get
/// PUT    /tasks/{id}/         update
/// DELETE /tasks/{id}/         delete
///
/// GET    /contexts/           list
/// POST   /contexts/           create
///
/// GET    /categories/         list
///
/// POST   /ai-suggestions/     mock suggestion
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(register::router())
        .merge(tasks::router())
        .merge(contexts::router())
        .merge(categories::router())
        .merge(suggestions::router())
}
