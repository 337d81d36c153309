//! Route definitions for the task resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// ```text
/// GET    /tasks/        -> list_tasks
/// POST   /tasks/        -> create_task
/// GET    /tasks/{id}/   -> get_task
/// PUT    /tasks/{id}/   -> update_task
/// DELETE /tasks/{id}/   -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}/",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
}
