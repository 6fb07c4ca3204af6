//! Reconstruction: rebuild a whole resume from an original plus replacement sections.
//!
//! Works at whole-section granularity. Sections not being replaced are re-extracted from
//! the original and go through parse/serialize, so their values survive but their
//! whitespace is normalized.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::editing::gate::validate_for_write;
use crate::errors::EngineError;
use crate::markdown::grammar::{heading_of, outline, SectionKind};
use crate::markdown::parser::{parse_document, parse_sections};
use crate::markdown::serializer::{serialize_document, RenderOptions};
use crate::models::{
    CertificationsInfo, EducationInfo, ExperienceInfo, PersonalInfo, ResumeDocument, Validate,
};

/// Zero or more sections supplied by the caller (typically as JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionReplacements {
    pub personal: Option<PersonalInfo>,
    pub education: Option<EducationInfo>,
    pub certifications: Option<CertificationsInfo>,
    pub experience: Option<ExperienceInfo>,
}

impl SectionReplacements {
    pub fn contains(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Personal => self.personal.is_some(),
            SectionKind::Education => self.education.is_some(),
            SectionKind::Certifications => self.certifications.is_some(),
            SectionKind::Experience => self.experience.is_some(),
        }
    }

    /// Sections that must be taken from the original document.
    pub fn missing(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|k| !self.contains(*k))
            .collect()
    }

    /// Moves one section out of a parsed document into the replacement set.
    pub fn take_section(&mut self, kind: SectionKind, doc: ResumeDocument) {
        match kind {
            SectionKind::Personal => self.personal = Some(doc.personal),
            SectionKind::Education => self.education = Some(doc.education),
            SectionKind::Certifications => self.certifications = Some(doc.certifications),
            SectionKind::Experience => self.experience = Some(doc.experience),
        }
    }

    fn apply_to(self, doc: &mut ResumeDocument) {
        if let Some(personal) = self.personal {
            doc.personal = personal;
        }
        if let Some(education) = self.education {
            doc.education = education;
        }
        if let Some(certifications) = self.certifications {
            doc.certifications = certifications;
        }
        if let Some(experience) = self.experience {
            doc.experience = experience;
        }
    }
}

impl Validate for SectionReplacements {
    fn validate(&self) -> Result<(), EngineError> {
        if let Some(personal) = &self.personal {
            personal.validate()?;
        }
        if let Some(education) = &self.education {
            education.validate()?;
        }
        if let Some(certifications) = &self.certifications {
            certifications.validate()?;
        }
        if let Some(experience) = &self.experience {
            experience.validate()?;
        }
        Ok(())
    }
}

/// Rebuilds a complete resume from `current_markdown` and the supplied sections.
///
/// Replacements are validated first, omitted sections are extracted from the original,
/// and the serialized result must pass the validation gate before it is returned.
/// A blank `current_markdown` is read as a resume with no sections yet.
pub fn merge_document(
    current_markdown: &str,
    replacements: SectionReplacements,
    options: &RenderOptions,
) -> Result<String, EngineError> {
    replacements.validate()?;

    let missing = replacements.missing();
    let mut doc = if missing.is_empty() || current_markdown.trim().is_empty() {
        ResumeDocument::default()
    } else {
        parse_sections(current_markdown, &missing)?
    };
    debug!("Merging resume; sections kept from original: {missing:?}");

    replacements.apply_to(&mut doc);
    write_checked(&doc, options)
}

/// Where an externally produced Markdown replacement should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementTarget {
    Personal,
    Education,
    Certifications,
    Experience,
    /// Replace the whole document; no merging.
    FullDocument,
}

impl ReplacementTarget {
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            ReplacementTarget::Personal => Some(SectionKind::Personal),
            ReplacementTarget::Education => Some(SectionKind::Education),
            ReplacementTarget::Certifications => Some(SectionKind::Certifications),
            ReplacementTarget::Experience => Some(SectionKind::Experience),
            ReplacementTarget::FullDocument => None,
        }
    }
}

/// Accepts Markdown produced elsewhere (e.g. a refined section) into the resume.
///
/// For a section target the replacement text must parse on its own; a fragment without
/// any top-level header is read as the body of the target section. Other sections come
/// from `current_markdown`. Nothing is serialized if the replacement fails to parse.
pub fn accept_replacement(
    current_markdown: &str,
    target: ReplacementTarget,
    replacement_markdown: &str,
    options: &RenderOptions,
) -> Result<String, EngineError> {
    let Some(kind) = target.section() else {
        let doc = parse_document(replacement_markdown)?;
        return write_checked(&doc, options);
    };

    let fragment = as_section_fragment(kind, replacement_markdown);
    let present: Vec<SectionKind> = outline(&fragment)?.into_iter().map(|s| s.kind).collect();
    if !present.contains(&kind) {
        return Err(EngineError::grammar(format!(
            "replacement does not contain a '# {}' section",
            kind.title()
        )));
    }
    if present.len() > 1 {
        warn!(
            "Replacement for '{}' also carries {:?}; only the target section is used",
            kind.title(),
            present.iter().filter(|k| **k != kind).collect::<Vec<_>>()
        );
    }

    let parsed = parse_sections(&fragment, &[kind])?;
    let mut replacements = SectionReplacements::default();
    replacements.take_section(kind, parsed);
    merge_document(current_markdown, replacements, options)
}

/// Prefixes the target's top-level header when the fragment has no recognized one.
fn as_section_fragment(kind: SectionKind, replacement: &str) -> String {
    let has_section_header = replacement.lines().any(|line| {
        matches!(heading_of(line), Some((1, title)) if SectionKind::from_title(title).is_some())
    });
    if has_section_header {
        replacement.to_string()
    } else {
        format!("# {}\n\n{}", kind.title(), replacement)
    }
}

/// Serializes and gates a document for persistence.
fn write_checked(doc: &ResumeDocument, options: &RenderOptions) -> Result<String, EngineError> {
    let markdown = serialize_document(doc, options);
    if markdown.is_empty() {
        return Err(EngineError::validation(
            "resume would be empty: every section is blank or omitted",
        ));
    }
    validate_for_write(&markdown)?;
    Ok(markdown)
}
