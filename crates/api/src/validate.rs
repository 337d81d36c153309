//! Explicit per-endpoint validation schemas.
//!
//! Each create/update payload is checked against a statically declared rule
//! set; failures accumulate into a `field -> [messages]` map that becomes
//! the 400 response body. Enum membership comes from the core enumerations,
//! so the allowed sets live in exactly one place.

use serde::Serialize;
use std::collections::BTreeMap;
use tasknest_core::enums::{ContextSource, Priority, TaskStatus};
use tasknest_core::types::DbId;
use tasknest_db::models::context_entry::CreateContextEntry;
use tasknest_db::models::task::{CreateTask, UpdateTask};

/// Accumulated per-field validation messages, serialized verbatim as the
/// 400 response body.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no messages were recorded, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Character bound carried over from the task schema.
const TITLE_MAX_CHARS: usize = 255;

fn check_choice(errors: &mut FieldErrors, field: &str, value: Option<&str>, allowed: &[&str]) {
    if let Some(value) = value {
        if !allowed.contains(&value) {
            errors.push(field, format!("\"{value}\" is not a valid choice."));
        }
    }
}

fn check_duration(errors: &mut FieldErrors, duration_minutes: Option<i32>) {
    if let Some(minutes) = duration_minutes {
        if minutes < 0 {
            errors.push(
                "duration_minutes",
                "Ensure this value is greater than or equal to 0.",
            );
        }
    }
}

fn check_title_length(errors: &mut FieldErrors, title: Option<&str>) {
    if let Some(title) = title {
        if title.chars().count() > TITLE_MAX_CHARS {
            errors.push(
                "title",
                format!("Ensure this field has no more than {TITLE_MAX_CHARS} characters."),
            );
        }
    }
}

/// Validate a task create payload, returning the owner id on success.
///
/// `user` is the one required field (the row cannot exist without an owner);
/// everything else is optional and falls back to the model defaults.
pub fn validate_create_task(input: &CreateTask) -> Result<DbId, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.user_id.is_none() {
        errors.push("user", "This field is required.");
    }
    check_title_length(&mut errors, input.title.as_deref());
    check_choice(&mut errors, "priority", input.priority.as_deref(), Priority::ALL);
    check_choice(&mut errors, "status", input.status.as_deref(), TaskStatus::ALL);
    check_duration(&mut errors, input.duration_minutes);

    match input.user_id {
        Some(user_id) if errors.is_empty() => Ok(user_id),
        _ => Err(errors),
    }
}

/// Validate a task update payload. Same rules as create, except `user` may
/// be omitted (the existing owner is kept).
pub fn validate_update_task(input: &UpdateTask) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    check_title_length(&mut errors, input.title.as_deref());
    check_choice(&mut errors, "priority", input.priority.as_deref(), Priority::ALL);
    check_choice(&mut errors, "status", input.status.as_deref(), TaskStatus::ALL);
    check_duration(&mut errors, input.duration_minutes.flatten());

    errors.into_result()
}

/// Validate a context entry payload: `content` and `source` are required,
/// `content` may not be blank, and `source` must name a known channel.
pub fn validate_create_context(input: &CreateContextEntry) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    match input.content.as_deref() {
        None => errors.push("content", "This field is required."),
        Some("") => errors.push("content", "This field may not be blank."),
        Some(_) => {}
    }
    match input.source.as_deref() {
        None => errors.push("source", "This field is required."),
        Some(source) => check_choice(&mut errors, "source", Some(source), ContextSource::ALL),
    }

    errors.into_result()
}
