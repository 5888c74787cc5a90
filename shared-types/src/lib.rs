use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored text submission.
///
/// `id` is assigned by the datastore on insert and is strictly increasing in
/// insertion order; `created_at` is the datastore's insertion timestamp. Rows
/// are append-only: nothing in the system updates or deletes a `TextEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TextEntry {
    pub fn new(id: i64, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
        }
    }
}
