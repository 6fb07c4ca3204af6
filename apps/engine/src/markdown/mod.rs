// Resume Markdown dialect: grammar, extraction (Markdown -> model) and serialization
// (model -> Markdown). Every operation re-parses from text; nothing is cached.

pub mod grammar;
pub mod parser;
pub mod serializer;
pub mod text;

pub use grammar::SectionKind;
pub use parser::{parse_document, parse_sections};
pub use serializer::{serialize_document, NotRelevantRolePolicy, RenderOptions};
