use serde::Deserialize;

use crate::{Client, Result};

/// A course, as returned by `GET /courses`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    /// Missing or null for courses the user can no longer access
    pub name: Option<String>,
}

impl Course {
    /// The display name, or an empty string if Canvas didn't give one
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Client {
    /// Get every course visible to the token, in the order the API gives them.
    ///
    /// Unlike per-course resources, a non-200 response here is an error.
    pub fn courses(&self) -> Result<Vec<Course>> {
        self.get_collection("courses")
    }
}
