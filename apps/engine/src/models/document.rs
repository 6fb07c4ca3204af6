use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::certifications::CertificationsInfo;
use crate::models::education::EducationInfo;
use crate::models::experience::ExperienceInfo;
use crate::models::personal::PersonalInfo;
use crate::models::validation::Validate;

/// A whole resume. Sections are always assembled and written in this field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub education: EducationInfo,
    pub certifications: CertificationsInfo,
    pub experience: ExperienceInfo,
}

impl ResumeDocument {
    pub fn is_empty(&self) -> bool {
        self.personal.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
            && self.experience.is_empty()
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            has_personal: !self.personal.is_empty(),
            degrees: self.education.degrees.len(),
            certifications: self.certifications.certifications.len(),
            projects: self.experience.projects.len(),
            roles: self.experience.roles.len(),
        }
    }
}

impl Validate for ResumeDocument {
    fn validate(&self) -> Result<(), EngineError> {
        self.personal.validate()?;
        self.education.validate()?;
        self.certifications.validate()?;
        self.experience.validate()
    }
}

/// Which sections a document carries and how many records each holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub has_personal: bool,
    pub degrees: usize,
    pub certifications: usize,
    pub projects: usize,
    pub roles: usize,
}
