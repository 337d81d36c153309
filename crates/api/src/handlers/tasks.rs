//! Handlers for the `/tasks/` resource.
//!
//! Stateless pass-throughs from request to the tasks table. There is no
//! caller identity: anyone who knows a task id may read or mutate it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasknest_core::error::CoreError;
use tasknest_core::types::DbId;
use tasknest_db::models::task::{CreateTask, TaskListParams, UpdateTask};
use tasknest_db::repositories::{TaskRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validate::{validate_create_task, validate_update_task, FieldErrors};

/// GET /tasks/?user_id=
///
/// List tasks newest-first, optionally restricted to one owner.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<impl IntoResponse> {
    let tasks = TaskRepo::list(&state.pool, params.user_id).await?;

    Ok(Json(tasks))
}

/// POST /tasks/
///
/// Validate the payload against the task schema, then persist with
/// server-assigned id and timestamps.
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    let user_id = validate_create_task(&input).map_err(AppError::FieldValidation)?;
    ensure_user_exists(&state, user_id).await?;

    let task = TaskRepo::create(&state.pool, &input, user_id).await?;

    tracing::info!(task_id = task.id, user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id}/
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    Ok(Json(task))
}

/// PUT /tasks/{id}/
///
/// Partial update with the same validation rules as create; omitted fields
/// keep their stored values.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    validate_update_task(&input).map_err(AppError::FieldValidation)?;
    if let Some(user_id) = input.user_id {
        ensure_user_exists(&state, user_id).await?;
    }

    let task = TaskRepo::update(&state.pool, task_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;

    tracing::info!(task_id, "Task updated");

    Ok(Json(task))
}

/// DELETE /tasks/{id}/
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TaskRepo::delete(&state.pool, task_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }));
    }

    tracing::info!(task_id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// A task must reference an existing user; report a missing one the same
/// way schema validation does, as a per-field message.
async fn ensure_user_exists(state: &AppState, user_id: DbId) -> AppResult<()> {
    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        let mut errors = FieldErrors::new();
        errors.push("user", format!("Invalid pk \"{user_id}\" - object does not exist."));
        return Err(AppError::FieldValidation(errors));
    }
    Ok(())
}
