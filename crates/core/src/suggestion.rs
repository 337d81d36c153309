//! Mock AI suggestion for a task.
//!
//! There is no model behind this: the endpoint contract is a fixed literal
//! response with the description echoed back plus a fixed suffix. Kept as a
//! pure function so the handler stays a thin pass-through.

use serde::Serialize;

/// Suffix appended to the caller-supplied description.
const DESCRIPTION_SUFFIX: &str = " (Don't forget to break it into subtasks)";

/// Fixed suggestion payload returned by `POST /ai-suggestions/`.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub priority: &'static str,
    pub suggested_deadline: &'static str,
    pub category: &'static str,
    pub enhanced_description: String,
}

/// Produce the canned suggestion for a task. The title is accepted for
/// interface parity but does not influence the response.
pub fn suggest_for_task(_title: &str, description: &str) -> Suggestion {
    Suggestion {
        priority: "High",
        suggested_deadline: "2025-07-10",
        category: "Work",
        enhanced_description: format!("{description}{DESCRIPTION_SUFFIX}"),
    }
}
