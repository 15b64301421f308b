use canvas_client::{Client, Course, Resource, Result};

/// Somewhere courses and their resources come from.
///
/// Implemented by [`Client`]; tests swap in canned responses.
pub trait Source {
    /// Every course visible to the credential
    fn courses(&self) -> Result<Vec<Course>>;

    /// All of a course's items of one resource type, or `None` if the server had nothing for us
    fn course_resources<R: Resource>(&self, course_id: u64) -> Result<Option<Vec<R>>>;
}

impl Source for Client {
    fn courses(&self) -> Result<Vec<Course>> {
        Client::courses(self)
    }

    fn course_resources<R: Resource>(&self, course_id: u64) -> Result<Option<Vec<R>>> {
        Client::course_resources(self, course_id)
    }
}
