// Edits and views over a stored resume.
// Phase 1: section merge + replacement acceptance, both behind the write gate.
// Phase 2: date-window filtering for export (read-only view).

pub mod export;
pub mod filter;
pub mod gate;
pub mod merge;

pub use export::render_for_export;
pub use filter::filter_experience;
pub use gate::validate_for_write;
pub use merge::{accept_replacement, merge_document, ReplacementTarget, SectionReplacements};
