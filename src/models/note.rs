use serde::{Deserialize, Serialize};

/// A pinned note on the admin overview board.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    /// Unix epoch milliseconds
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct NoteInput {
    pub text: String,
}
