use canvas_client::{Course, Result};
use log::debug;

use crate::source::Source;

/// Get courses from `source`, minus any whose id is in `excluded`. API order is kept.
pub fn list_courses<S: Source>(source: &S, excluded: &[u64]) -> Result<Vec<Course>> {
    let courses = source.courses()?;
    let total = courses.len();

    let courses: Vec<_> = courses
        .into_iter()
        .filter(|c| !excluded.contains(&c.id))
        .collect();

    debug!("{} courses, {} after exclusions", total, courses.len());

    Ok(courses)
}
