use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::validation::{check_line, check_text, Validate};

/// Contact details, web presence, visa status and two free-text blocks.
/// Every field is optional; an instance with nothing set is omitted from the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub work_authorization: Option<String>,
    /// `None` means the resume does not say.
    pub require_sponsorship: Option<bool>,
    pub banner: Option<String>,
    pub note: Option<String>,
}

impl PersonalInfo {
    pub fn has_contact(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some() || self.location.is_some()
    }

    pub fn has_websites(&self) -> bool {
        self.website.is_some()
            || self.github.is_some()
            || self.linkedin.is_some()
            || self.twitter.is_some()
    }

    pub fn has_visa_status(&self) -> bool {
        self.work_authorization.is_some() || self.require_sponsorship.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_contact()
            && !self.has_websites()
            && !self.has_visa_status()
            && self.banner.is_none()
            && self.note.is_none()
    }
}

impl Validate for PersonalInfo {
    fn validate(&self) -> Result<(), EngineError> {
        let line_fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Location", &self.location),
            ("Website", &self.website),
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Work Authorization", &self.work_authorization),
        ];
        for (label, value) in line_fields {
            check_line(label, value.as_deref())?;
        }
        check_text("Banner", self.banner.as_deref())?;
        check_text("Note", self.note.as_deref())
    }
}
