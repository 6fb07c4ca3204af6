use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::validation::{
    check_date, check_line, require_non_empty, require_ordered, Validate,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    /// Required. Kept as `Option` so a degree block missing it can be reported, not guessed.
    pub school: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<String>,
}

impl Degree {
    pub fn is_empty(&self) -> bool {
        self.school.is_none()
            && self.degree.is_none()
            && self.major.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.gpa.is_none()
    }
}

impl Validate for Degree {
    fn validate(&self) -> Result<(), EngineError> {
        require_non_empty("Degree school", self.school.as_deref())?;
        check_line("Degree", self.degree.as_deref())?;
        check_line("Major", self.major.as_deref())?;
        check_line("GPA", self.gpa.as_deref())?;
        check_date("Start date", self.start_date)?;
        check_date("End date", self.end_date)?;
        require_ordered("Start date", self.start_date, "End date", self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationInfo {
    pub degrees: Vec<Degree>,
}

impl EducationInfo {
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

impl Validate for EducationInfo {
    fn validate(&self) -> Result<(), EngineError> {
        self.degrees.validate()
    }
}
