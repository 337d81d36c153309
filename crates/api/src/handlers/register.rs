//! Handler for the `/register/` endpoint.
//!
//! The only account surface in this system: no login, sessions, or token
//! issuance follow registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tasknest_core::error::CoreError;
use tasknest_core::types::DbId;
use tasknest_db::models::user::CreateUser;
use tasknest_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /register/`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Success body for `POST /register/`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// POST /register/
///
/// Create a user account from email + password. The username is the email;
/// the password is stored as an Argon2id hash.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = match (&input.email, &input.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Email and password are required".to_string(),
            )))
        }
    };

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".to_string(),
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: email.clone(),
            email: email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            id: user.id,
        }),
    ))
}
