//! The per-course collections we export.
//!
//! Canvas isn't consistent about field names across these: assignments carry their title in
//! `name`, while quizzes and discussions use `title`, and each has its own "type" field.
use log::debug;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{Client, Error, Result};

/// A collection of items hanging off a course
pub trait Resource: DeserializeOwned {
    /// Path segment after `courses/:id/`
    const ENDPOINT: &'static str;
    /// Plural human name, used in log output
    const NOUN: &'static str;

    fn title(&self) -> Option<&str>;
    fn kind(&self) -> Option<&Kind>;
    fn html_url(&self) -> Option<&str>;
    fn due_at(&self) -> Option<&str>;
    fn unlock_at(&self) -> Option<&str>;
}

/// A "type" field, which is a single string for most resources but a list for assignments'
/// `submission_types`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Kind {
    One(String),
    Many(Vec<String>),
}

impl Kind {
    /// Render as a single string, joining lists with `sep`
    pub fn join(&self, sep: &str) -> String {
        match self {
            Kind::One(s) => s.clone(),
            Kind::Many(v) => v.join(sep),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub name: Option<String>,
    pub submission_types: Option<Kind>,
    pub html_url: Option<String>,
    pub due_at: Option<String>,
    pub unlock_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Quiz {
    pub title: Option<String>,
    pub quiz_type: Option<Kind>,
    pub html_url: Option<String>,
    pub due_at: Option<String>,
    pub unlock_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DiscussionTopic {
    pub title: Option<String>,
    pub discussion_type: Option<Kind>,
    pub html_url: Option<String>,
    /// Only set on graded discussions, and some instances leave it out entirely.
    pub due_at: Option<String>,
    pub unlock_at: Option<String>,
}

impl Resource for Assignment {
    const ENDPOINT: &'static str = "assignments";
    const NOUN: &'static str = "assignments";

    fn title(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<&Kind> {
        self.submission_types.as_ref()
    }

    fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    fn due_at(&self) -> Option<&str> {
        self.due_at.as_deref()
    }

    fn unlock_at(&self) -> Option<&str> {
        self.unlock_at.as_deref()
    }
}

impl Resource for Quiz {
    const ENDPOINT: &'static str = "quizzes";
    const NOUN: &'static str = "quizzes";

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn kind(&self) -> Option<&Kind> {
        self.quiz_type.as_ref()
    }

    fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    fn due_at(&self) -> Option<&str> {
        self.due_at.as_deref()
    }

    fn unlock_at(&self) -> Option<&str> {
        self.unlock_at.as_deref()
    }
}

impl Resource for DiscussionTopic {
    const ENDPOINT: &'static str = "discussion_topics";
    const NOUN: &'static str = "topics";

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn kind(&self) -> Option<&Kind> {
        self.discussion_type.as_ref()
    }

    fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    fn due_at(&self) -> Option<&str> {
        self.due_at.as_deref()
    }

    fn unlock_at(&self) -> Option<&str> {
        self.unlock_at.as_deref()
    }
}

impl Client {
    /// Get all of a course's items of one resource type.
    ///
    /// Returns `Ok(None)` if Canvas responds with anything other than 200 OK. That covers
    /// disabled tabs, missing permissions and server errors alike.
    pub fn course_resources<R: Resource>(&self, course_id: u64) -> Result<Option<Vec<R>>> {
        match self.get_collection(&format!("courses/{}/{}", course_id, R::ENDPOINT)) {
            Ok(items) => Ok(Some(items)),
            Err(Error::BadStatus { url, status }) => {
                debug!("no {} at {} ({})", R::NOUN, url, status);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
