use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::validation::{
    check_date, check_line, require_non_empty, require_ordered, Validate,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issued: Option<NaiveDate>,
    pub expires: Option<NaiveDate>,
    pub certification_id: Option<String>,
}

impl Certification {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.issuer.is_none()
            && self.issued.is_none()
            && self.expires.is_none()
            && self.certification_id.is_none()
    }
}

impl Validate for Certification {
    fn validate(&self) -> Result<(), EngineError> {
        require_non_empty("Certification name", self.name.as_deref())?;
        check_line("Issuer", self.issuer.as_deref())?;
        check_line("Certification ID", self.certification_id.as_deref())?;
        check_date("Issued", self.issued)?;
        check_date("Expires", self.expires)?;
        require_ordered("Issued", self.issued, "Expires", self.expires)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationsInfo {
    pub certifications: Vec<Certification>,
}

impl CertificationsInfo {
    pub fn is_empty(&self) -> bool {
        self.certifications.is_empty()
    }
}

impl Validate for CertificationsInfo {
    fn validate(&self) -> Result<(), EngineError> {
        self.certifications.validate()
    }
}
