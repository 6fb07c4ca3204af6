//! Resume document engine.
//!
//! A resume is stored as Markdown in a fixed dialect (see [`markdown::grammar`]). Every
//! operation parses that text into the typed model in [`models`], works on the model,
//! and serializes back; nothing is cached between calls. Writes go through
//! [`editing::validate_for_write`] so only re-parseable Markdown reaches persistence.

pub mod config;
pub mod editing;
pub mod errors;
pub mod markdown;
pub mod models;

pub use editing::{
    accept_replacement, filter_experience, merge_document, render_for_export,
    validate_for_write, ReplacementTarget, SectionReplacements,
};
pub use errors::EngineError;
pub use markdown::{parse_document, parse_sections, serialize_document, RenderOptions};
pub use models::ResumeDocument;
