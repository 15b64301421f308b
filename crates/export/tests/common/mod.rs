use std::{cell::RefCell, collections::HashMap};

use canvas_client::{Course, Resource, Result};
use canvas_export::Source;
use serde_json::Value;

/// Serves canned JSON. Resources with no entry behave like a non-200 response.
#[derive(Default)]
pub struct FakeSource {
    courses: Value,
    resources: HashMap<(u64, &'static str), Value>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new(courses: Value) -> Self {
        Self {
            courses,
            ..Default::default()
        }
    }

    pub fn with(mut self, course_id: u64, endpoint: &'static str, items: Value) -> Self {
        self.resources.insert((course_id, endpoint), items);
        self
    }
}

impl Source for FakeSource {
    fn courses(&self) -> Result<Vec<Course>> {
        self.requests.borrow_mut().push("courses".to_string());
        Ok(serde_json::from_value(self.courses.clone())?)
    }

    fn course_resources<R: Resource>(&self, course_id: u64) -> Result<Option<Vec<R>>> {
        self.requests
            .borrow_mut()
            .push(format!("courses/{}/{}", course_id, R::ENDPOINT));

        match self.resources.get(&(course_id, R::ENDPOINT)) {
            Some(items) => Ok(Some(serde_json::from_value(items.clone())?)),
            None => Ok(None),
        }
    }
}
