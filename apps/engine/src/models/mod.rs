// Resume document model: typed value objects rebuilt on every parse.
// Field-level validation lives here so parsed and JSON-supplied sections share one rule set.

pub mod certifications;
pub mod document;
pub mod education;
pub mod experience;
pub mod personal;
pub mod validation;

pub use certifications::{Certification, CertificationsInfo};
pub use document::{DocumentSummary, ResumeDocument};
pub use education::{Degree, EducationInfo};
pub use experience::{
    ExperienceInfo, InclusionStatus, Project, ProjectOverview, Role, RoleBasics,
};
pub use personal::PersonalInfo;
pub use validation::Validate;
