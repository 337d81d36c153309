//! Repository for the `context_entries` table.

use sqlx::PgPool;

use crate::models::context_entry::ContextEntry;

/// Column list for context entry queries. `timestamp` is quoted because it
/// collides with the SQL keyword.
const COLUMNS: &str = "id, content, source, \"timestamp\"";

/// Provides list/create operations for context entries. Entries are never
/// updated or deleted through the API surface.
pub struct ContextEntryRepo;

impl ContextEntryRepo {
    /// List all context entries, newest first (id as tiebreak).
    pub async fn list(pool: &PgPool) -> Result<Vec<ContextEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM context_entries ORDER BY \"timestamp\" DESC, id DESC"
        );
        sqlx::query_as::<_, ContextEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new entry with a server-assigned timestamp, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        content: &str,
        source: &str,
    ) -> Result<ContextEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO context_entries (content, source)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContextEntry>(&query)
            .bind(content)
            .bind(source)
            .fetch_one(pool)
            .await
    }
}
