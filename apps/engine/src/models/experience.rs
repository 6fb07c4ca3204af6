use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::validation::{check_date, check_line, check_text, require_ordered, Validate};

/// How much of a role or project is rendered.
///
/// Never written to Markdown; it only decides which blocks the serializer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionStatus {
    #[default]
    Include,
    NotRelevant,
    Omit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleBasics {
    pub company: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub agency_name: Option<String>,
    pub job_category: Option<String>,
    pub employment_type: Option<String>,
    pub reason_for_change: Option<String>,
    pub inclusion_status: InclusionStatus,
}

impl RoleBasics {
    /// Inclusion status is not a field, so it does not count.
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.title.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.location.is_none()
            && self.agency_name.is_none()
            && self.job_category.is_none()
            && self.employment_type.is_none()
            && self.reason_for_change.is_none()
    }
}

impl Validate for RoleBasics {
    fn validate(&self) -> Result<(), EngineError> {
        let line_fields = [
            ("Company", &self.company),
            ("Title", &self.title),
            ("Location", &self.location),
            ("Agency", &self.agency_name),
            ("Job category", &self.job_category),
            ("Employment type", &self.employment_type),
            ("Reason for change", &self.reason_for_change),
        ];
        for (label, value) in line_fields {
            check_line(label, value.as_deref())?;
        }
        check_date("Start date", self.start_date)?;
        check_date("End date", self.end_date)?;
        require_ordered("Start date", self.start_date, "End date", self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub basics: Option<RoleBasics>,
    pub summary: Option<String>,
    pub responsibilities: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl Role {
    pub fn inclusion_status(&self) -> InclusionStatus {
        self.basics
            .as_ref()
            .map(|b| b.inclusion_status)
            .unwrap_or_default()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.basics.as_ref().and_then(|b| b.start_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.basics.as_ref().and_then(|b| b.end_date)
    }

    pub fn is_empty(&self) -> bool {
        self.basics.as_ref().map_or(true, RoleBasics::is_empty)
            && self.summary.is_none()
            && self.responsibilities.is_none()
            && self.skills.as_ref().map_or(true, Vec::is_empty)
    }
}

impl Validate for Role {
    fn validate(&self) -> Result<(), EngineError> {
        if let Some(basics) = &self.basics {
            basics.validate()?;
        }
        check_text("Summary", self.summary.as_deref())?;
        check_text("Responsibilities", self.responsibilities.as_deref())?;
        validate_skills(self.skills.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOverview {
    pub title: Option<String>,
    pub url: Option<String>,
    pub url_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub inclusion_status: InclusionStatus,
}

impl ProjectOverview {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.url_description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

impl Validate for ProjectOverview {
    fn validate(&self) -> Result<(), EngineError> {
        check_line("Title", self.title.as_deref())?;
        check_line("URL", self.url.as_deref())?;
        check_line("URL Description", self.url_description.as_deref())?;
        check_date("Start date", self.start_date)?;
        check_date("End date", self.end_date)?;
        require_ordered("Start date", self.start_date, "End date", self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub overview: Option<ProjectOverview>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl Project {
    pub fn inclusion_status(&self) -> InclusionStatus {
        self.overview
            .as_ref()
            .map(|o| o.inclusion_status)
            .unwrap_or_default()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.overview.as_ref().and_then(|o| o.start_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.overview.as_ref().and_then(|o| o.end_date)
    }

    pub fn is_empty(&self) -> bool {
        self.overview.as_ref().map_or(true, ProjectOverview::is_empty)
            && self.description.is_none()
            && self.skills.as_ref().map_or(true, Vec::is_empty)
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), EngineError> {
        if let Some(overview) = &self.overview {
            overview.validate()?;
        }
        check_text("Description", self.description.as_deref())?;
        validate_skills(self.skills.as_deref())
    }
}

fn validate_skills(skills: Option<&[String]>) -> Result<(), EngineError> {
    let Some(skills) = skills else {
        return Ok(());
    };
    for skill in skills {
        if skill.trim().is_empty() {
            return Err(EngineError::validation("Skills must not contain blank entries"));
        }
        if skill.contains('\n') {
            return Err(EngineError::validation(format!(
                "Skill '{}' must fit on one line",
                skill.lines().next().unwrap_or_default()
            )));
        }
    }
    Ok(())
}

/// Projects and roles are ordered independently; projects always render first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceInfo {
    pub roles: Vec<Role>,
    pub projects: Vec<Project>,
}

impl ExperienceInfo {
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.projects.is_empty()
    }
}

impl Validate for ExperienceInfo {
    fn validate(&self) -> Result<(), EngineError> {
        self.projects.validate()?;
        self.roles.validate()
    }
}
