//! Turning resource items into rows.
use canvas_client::{Course, Resource, Result};
use log::{info, warn};

use crate::{
    export::Export,
    record::ExportRecord,
    source::Source,
    timestamp::{self, Zoned},
};

/// How items are flattened into records
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Joins list-shaped type fields, like assignments' `submission_types`
    pub type_separator: String,
    /// Fill the unlock columns from `due_at` rather than `unlock_at`, like older exports did
    pub mirror_due_into_unlock: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            type_separator: ", ".to_string(),
            mirror_due_into_unlock: false,
        }
    }
}

/// Fetch one resource type for `course` and append a record per item to `export`.
///
/// Returns how many records were added. A course with no data for this resource is not an error.
pub fn extract<R: Resource, S: Source>(
    source: &S,
    course: &Course,
    options: &ExtractOptions,
    export: &mut Export,
) -> Result<usize> {
    let items = match source.course_resources::<R>(course.id)? {
        Some(items) if !items.is_empty() => items,
        _ => {
            info!("no {} for course {}", R::NOUN, course.name());
            return Ok(0);
        }
    };

    info!("found {} {}", items.len(), R::NOUN);
    for item in &items {
        export.push(to_record(course, item, options));
    }

    Ok(items.len())
}

/// Flatten a single item
pub fn to_record<R: Resource>(course: &Course, item: &R, options: &ExtractOptions) -> ExportRecord {
    let title = item.title().unwrap_or_default();

    let unlock_at = if options.mirror_due_into_unlock {
        item.due_at()
    } else {
        item.unlock_at()
    };
    let due = zoned_or_blank(item.due_at(), "due date", title);
    let unlock = zoned_or_blank(unlock_at, "unlock date", title);

    ExportRecord {
        course: course.name().to_string(),
        name: title.to_string(),
        kind: item
            .kind()
            .map(|k| k.join(&options.type_separator))
            .unwrap_or_default(),
        url: item.html_url().unwrap_or_default().to_string(),
        due_pacific: due.pacific,
        due_central: due.central,
        unlock_pacific: unlock.pacific,
        unlock_central: unlock.central,
    }
}

/// Unparseable timestamps leave their cells blank rather than failing the whole run
fn zoned_or_blank(raw: Option<&str>, field: &str, title: &str) -> Zoned {
    timestamp::normalize(raw).unwrap_or_else(|e| {
        warn!("leaving {} of {:?} blank: {}", field, title, e);
        Zoned::default()
    })
}
