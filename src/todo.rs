//! Domain types for to-do records

use serde::{Deserialize, Serialize};

/// A persisted to-do item, as stored and as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    /// Assigned by the database on insert, never reused
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Free text, no enumerated values enforced
    pub status: String,
}

/// Input shape for create and update requests
///
/// Carries everything a `ToDo` has except the id. Update is full
/// replacement: all three fields overwrite the stored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToDoDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

impl ToDo {
    /// Attach an id to a draft, producing the persisted representation
    pub fn from_draft(id: i64, draft: &ToDoDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
        }
    }
}
