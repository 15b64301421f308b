//! Export due dates for everything in your Canvas courses to a spreadsheet.
//!
//! Courses are processed one at a time. Each course's assignments, quizzes, then discussion
//! topics are flattened into [`ExportRecord`]s, and the whole lot is written out at the end.
use canvas_client::{Assignment, DiscussionTopic, Quiz, Result};
use log::debug;

pub mod config;
pub mod courses;
pub mod export;
pub mod extract;
pub mod record;
pub mod source;
pub mod timestamp;

pub use config::Config;
pub use export::{Export, WriteError};
pub use extract::{extract, ExtractOptions};
pub use record::{ExportRecord, HEADER};
pub use source::Source;

/// How much was found during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub courses: usize,
    pub assignments: usize,
    pub quizzes: usize,
    pub discussions: usize,
}

/// Fetch everything for every non-excluded course
pub fn run<S: Source>(source: &S, config: &Config) -> Result<(Export, Summary)> {
    let courses = courses::list_courses(source, &config.excluded_courses)?;
    let options = config.extract_options();

    let mut export = Export::new();
    let mut summary = Summary {
        courses: courses.len(),
        ..Default::default()
    };

    for course in &courses {
        debug!("processing {} ({})", course.name(), course.id);
        summary.assignments += extract::<Assignment, _>(source, course, &options, &mut export)?;
        summary.quizzes += extract::<Quiz, _>(source, course, &options, &mut export)?;
        summary.discussions +=
            extract::<DiscussionTopic, _>(source, course, &options, &mut export)?;
    }

    Ok((export, summary))
}
