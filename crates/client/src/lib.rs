//! A small blocking client for the Canvas LMS REST API.
//!
//! Only the read-only collection endpoints needed for exporting course work are covered:
//! the courses visible to a token, and each course's assignments, quizzes and discussion topics.
use std::time::Duration;

use log::{debug, warn};
use reqwest::{
    blocking,
    header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
    StatusCode,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod course;
mod pagination;
pub mod resource;
mod token;

pub use course::Course;
pub use resource::{Assignment, DiscussionTopic, Kind, Quiz, Resource};
pub use token::Token;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const CANVAS_BASE: &str = "https://canvas.uw.edu/api/v1";

/// Canvas defaults to 10 items per page, which is rarely enough.
pub const DEFAULT_PER_PAGE: u32 = 50;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no API token was given")]
    MissingToken,

    #[error("API token can't be sent as a header: {}", .0)]
    BadToken(#[from] InvalidHeaderValue),

    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),

    #[error("{} responded with {}", .url, .status)]
    BadStatus { url: String, status: StatusCode },
}

/// Knobs for how collections are requested
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Value of the `per_page` query parameter sent with every collection request
    pub per_page: u32,
    /// Applies to each request as a whole, including reading the body
    pub timeout: Duration,
    /// Follow `rel="next"` links. When off, collections are truncated to their first page.
    pub follow_pages: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(30),
            follow_pages: true,
        }
    }
}

/// A client, for using the canvas API with a bearer token
pub struct Client {
    base: String,
    options: ClientOptions,
    http: blocking::Client,
}

impl Client {
    pub fn new(base: &str, token: &Token, options: ClientOptions) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::MissingToken);
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let http = blocking::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Client {
            base: base.trim_end_matches('/').to_string(),
            options,
            http,
        })
    }

    /// The full URL of the first page of a collection
    pub fn collection_url(&self, path: &str) -> String {
        format!(
            "{}/{}?per_page={}",
            self.base,
            path.trim_start_matches('/'),
            self.options.per_page
        )
    }

    /// Get every item in a collection, following pagination links if enabled.
    ///
    /// A non-200 response to the first page is [`Error::BadStatus`]. A non-200 response to a later
    /// page ends pagination early, keeping the items fetched so far.
    pub(crate) fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(self.collection_url(path));
        let mut pages = 0;

        while let Some(url) = next.take() {
            debug!("GET {}", url);
            let resp = self.http.get(&url).send()?;

            let status = resp.status();
            if status != StatusCode::OK {
                if pages == 0 {
                    return Err(Error::BadStatus { url, status });
                }
                warn!("{} responded with {}, keeping {} items", url, status, items.len());
                break;
            }

            let link = pagination::next_link_in(resp.headers());

            let page: Vec<T> = if log::log_enabled!(log::Level::Debug) {
                let s = resp.text()?;
                debug!("response: {}", s);
                serde_json::from_str(&s)?
            } else {
                resp.json()?
            };
            items.extend(page);
            pages += 1;

            if self.options.follow_pages {
                next = link;
            }
        }

        debug!("{}: {} items over {} pages", path, items.len(), pages);
        Ok(items)
    }
}
