//! Context entry model and DTOs.
//!
//! Free-text notes tagged with a source channel. Deliberately unrelated to
//! tasks and users -- entries are orphaned records with only a timestamp.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasknest_core::types::{DbId, Timestamp};

/// A row from the `context_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContextEntry {
    pub id: DbId,
    pub content: String,
    /// One of `WhatsApp`, `Email`, `Note`.
    pub source: String,
    pub timestamp: Timestamp,
}

/// DTO for creating a context entry. Both fields are required; the handler
/// validates presence and source membership before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContextEntry {
    pub content: Option<String>,
    pub source: Option<String>,
}
