//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use tasknest_core::types::{DbId, Timestamp};

/// Deserialize a field that distinguishes "absent" (outer `None`) from an
/// explicit JSON `null` (`Some(None)`), so updates can clear nullable
/// columns. Pair with `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A row from the `tasks` table.
///
/// The foreign-key columns serialize as `category` and `user` (plain primary
/// keys), which is the wire contract the frontend consumes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    pub priority: String,
    pub deadline: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub status: String,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task.
///
/// Everything except `user` is optional; missing fields fall back to the
/// model defaults (`''`, `Medium`, `Pending`, NULL). Enum membership and the
/// non-negative duration rule are checked by the handler before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    pub priority: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub status: Option<String>,
    #[serde(rename = "user")]
    pub user_id: Option<DbId>,
}

/// DTO for updating a task. Omitted fields keep their stored values. The
/// nullable columns (`category`, `deadline`, `duration_minutes`) use a
/// double `Option` so an explicit `null` in the payload clears them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, rename = "category", deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub deadline: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration_minutes: Option<Option<i32>>,
    pub status: Option<String>,
    #[serde(rename = "user")]
    pub user_id: Option<DbId>,
}

/// Query parameters for `GET /tasks/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListParams {
    /// Restrict the listing to tasks owned by this user.
    pub user_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_null_from_absent() {
        let explicit_null: UpdateTask =
            serde_json::from_str(r#"{"category": null, "deadline": null, "duration_minutes": null}"#)
                .unwrap();
        assert_eq!(explicit_null.category_id, Some(None));
        assert_eq!(explicit_null.deadline, Some(None));
        assert_eq!(explicit_null.duration_minutes, Some(None));

        let absent: UpdateTask = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.category_id, None);
        assert_eq!(absent.deadline, None);
        assert_eq!(absent.duration_minutes, None);
    }

    #[test]
    fn update_accepts_concrete_values() {
        let update: UpdateTask =
            serde_json::from_str(r#"{"category": 7, "duration_minutes": 45}"#).unwrap();
        assert_eq!(update.category_id, Some(Some(7)));
        assert_eq!(update.duration_minutes, Some(Some(45)));
        assert_eq!(update.deadline, None);
    }
}
