use serde::{Deserialize, Serialize};

/// Column names, in output order
pub const HEADER: [&str; 8] = [
    "course",
    "name",
    "type",
    "url",
    "due date PST",
    "due date CST",
    "unlock date PST",
    "unlock date CST",
];

/// One row of the export. Every field is always present, even if empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub course: String,
    pub name: String,
    /// Submission types for assignments, quiz type for quizzes, discussion type for discussions
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(rename = "due date PST")]
    pub due_pacific: String,
    #[serde(rename = "due date CST")]
    pub due_central: String,
    #[serde(rename = "unlock date PST")]
    pub unlock_pacific: String,
    #[serde(rename = "unlock date CST")]
    pub unlock_central: String,
}
