use chrono::NaiveDate;
use tracing::debug;

use crate::editing::filter::filter_experience;
use crate::errors::EngineError;
use crate::markdown::parser::parse_document;
use crate::markdown::serializer::{serialize_document, RenderOptions};

/// Renders a stored resume for export, keeping only experience inside the date window.
///
/// The result is a view for display or download and is not run through the write gate;
/// the stored document is never modified.
pub fn render_for_export(
    markdown: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    options: &RenderOptions,
) -> Result<String, EngineError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(EngineError::validation(format!(
                "filter start {start} is after filter end {end}"
            )));
        }
    }

    let mut doc = parse_document(markdown)?;
    doc.experience = filter_experience(&doc.experience, start, end);
    debug!("Rendering export view: {:?}", doc.summary());
    Ok(serialize_document(&doc, options))
}
