use tracing::error;

use crate::errors::EngineError;
use crate::markdown::parser::parse_document;
use crate::models::ResumeDocument;

/// Re-parses a freshly serialized document before it is handed to persistence.
///
/// A failure here means the engine produced Markdown it cannot read back, so it is
/// reported as a round-trip error regardless of what the parser complained about.
pub fn validate_for_write(candidate: &str) -> Result<ResumeDocument, EngineError> {
    parse_document(candidate).map_err(|e| {
        error!("Serialized resume failed to re-parse: {e}");
        EngineError::RoundTrip(format!("serialized resume failed to re-parse: {e}"))
    })
}
