//! Serializer: deterministic model to Markdown writer, the inverse of the parser.
//!
//! # Layout rules
//! - An entity with nothing populated writes nothing, and its parent drops the header.
//! - Fields appear in grammar order; absent fields get no `Label:` line.
//! - Every header and every block is followed by one blank line.
//! - Sections are joined with a blank line; output ends with a single newline.
//!
//! # Inclusion status
//! - `Omit`: the role or project is skipped entirely.
//! - `Include`: everything populated is written.
//! - `NotRelevant`: Basics/Overview is written in full. Projects lose Description and
//!   Skills; roles follow [`NotRelevantRolePolicy`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::markdown::grammar::{BlockKind, FieldLabel, SectionKind};
use crate::markdown::text::{format_month_year, format_yes_no, normalize_text};
use crate::models::{
    Certification, CertificationsInfo, Degree, EducationInfo, ExperienceInfo, InclusionStatus,
    PersonalInfo, Project, ResumeDocument, Role,
};

pub const DEFAULT_NOT_RELEVANT_PLACEHOLDER: &str =
    "Details omitted as not relevant to this position.";

/// What a `NotRelevant` role keeps besides its Basics block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotRelevantRolePolicy {
    /// Basics only.
    #[default]
    DropContent,
    /// Basics, Summary and Skills; Responsibilities replaced by the placeholder.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub not_relevant_roles: NotRelevantRolePolicy,
    pub not_relevant_placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            not_relevant_roles: NotRelevantRolePolicy::default(),
            not_relevant_placeholder: DEFAULT_NOT_RELEVANT_PLACEHOLDER.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Writer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MarkdownWriter {
    out: String,
}

impl MarkdownWriter {
    fn heading(&mut self, level: u8, title: &str) {
        self.out.push_str(&"#".repeat(level as usize));
        self.out.push(' ');
        self.out.push_str(title);
        self.out.push_str("\n\n");
    }

    fn block(&mut self, kind: BlockKind) {
        self.heading(kind.level(), kind.title());
    }

    fn field(&mut self, label: FieldLabel, value: Option<&str>) {
        if let Some(value) = value {
            self.out.push_str(label.label());
            self.out.push_str(": ");
            self.out.push_str(value.trim());
            self.out.push('\n');
        }
    }

    fn date(&mut self, label: FieldLabel, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.field(label, Some(&format_month_year(date)));
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(text) = normalize_text(text) {
            self.out.push_str(&text);
            self.out.push('\n');
        }
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            self.out.push_str("* ");
            self.out.push_str(item.trim());
            self.out.push('\n');
        }
    }

    fn end_block(&mut self) {
        self.out.push('\n');
    }

    /// Appends an already-rendered child block.
    fn raw(&mut self, rendered: &str) {
        self.out.push_str(rendered);
        self.out.push_str("\n\n");
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// Writes a whole resume. Empty sections are omitted.
pub fn serialize_document(doc: &ResumeDocument, options: &RenderOptions) -> String {
    let sections: Vec<String> = SectionKind::ALL
        .iter()
        .map(|kind| serialize_section(doc, *kind, options))
        .filter(|s| !s.is_empty())
        .collect();

    if sections.is_empty() {
        return String::new();
    }
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Writes one section of a document, without a trailing newline.
pub fn serialize_section(doc: &ResumeDocument, kind: SectionKind, options: &RenderOptions) -> String {
    match kind {
        SectionKind::Personal => serialize_personal(&doc.personal),
        SectionKind::Education => serialize_education(&doc.education),
        SectionKind::Certifications => serialize_certifications(&doc.certifications),
        SectionKind::Experience => serialize_experience(&doc.experience, options),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn serialize_personal(personal: &PersonalInfo) -> String {
    let banner = personal.banner.as_deref().filter(|t| !t.trim().is_empty());
    let note = personal.note.as_deref().filter(|t| !t.trim().is_empty());
    if !personal.has_contact()
        && !personal.has_websites()
        && !personal.has_visa_status()
        && banner.is_none()
        && note.is_none()
    {
        return String::new();
    }

    let mut w = MarkdownWriter::default();
    w.heading(1, SectionKind::Personal.title());

    if personal.has_contact() {
        w.block(BlockKind::ContactInformation);
        w.field(FieldLabel::Name, personal.name.as_deref());
        w.field(FieldLabel::Email, personal.email.as_deref());
        w.field(FieldLabel::Phone, personal.phone.as_deref());
        w.field(FieldLabel::Location, personal.location.as_deref());
        w.end_block();
    }
    if personal.has_websites() {
        w.block(BlockKind::Websites);
        w.field(FieldLabel::Website, personal.website.as_deref());
        w.field(FieldLabel::GitHub, personal.github.as_deref());
        w.field(FieldLabel::LinkedIn, personal.linkedin.as_deref());
        w.field(FieldLabel::Twitter, personal.twitter.as_deref());
        w.end_block();
    }
    if personal.has_visa_status() {
        w.block(BlockKind::VisaStatus);
        w.field(
            FieldLabel::WorkAuthorization,
            personal.work_authorization.as_deref(),
        );
        w.field(
            FieldLabel::RequireSponsorship,
            personal.require_sponsorship.map(format_yes_no),
        );
        w.end_block();
    }
    if let Some(banner) = banner {
        w.block(BlockKind::Banner);
        w.text(banner);
        w.end_block();
    }
    if let Some(note) = note {
        w.block(BlockKind::Note);
        w.text(note);
        w.end_block();
    }

    w.finish()
}

pub fn serialize_education(education: &EducationInfo) -> String {
    let degrees: Vec<String> = education
        .degrees
        .iter()
        .filter(|d| !d.is_empty())
        .map(serialize_degree)
        .collect();
    if degrees.is_empty() {
        return String::new();
    }

    let mut w = MarkdownWriter::default();
    w.heading(1, SectionKind::Education.title());
    w.block(BlockKind::Degrees);
    for degree in &degrees {
        w.raw(degree);
    }
    w.finish()
}

pub fn serialize_degree(degree: &Degree) -> String {
    let mut w = MarkdownWriter::default();
    w.block(BlockKind::Degree);
    w.field(FieldLabel::School, degree.school.as_deref());
    w.field(FieldLabel::Degree, degree.degree.as_deref());
    w.field(FieldLabel::Major, degree.major.as_deref());
    w.date(FieldLabel::StartDate, degree.start_date);
    w.date(FieldLabel::EndDate, degree.end_date);
    w.field(FieldLabel::Gpa, degree.gpa.as_deref());
    w.finish()
}

pub fn serialize_certifications(certifications: &CertificationsInfo) -> String {
    let blocks: Vec<String> = certifications
        .certifications
        .iter()
        .filter(|c| !c.is_empty())
        .map(serialize_certification)
        .collect();
    if blocks.is_empty() {
        return String::new();
    }

    let mut w = MarkdownWriter::default();
    w.heading(1, SectionKind::Certifications.title());
    for block in &blocks {
        w.raw(block);
    }
    w.finish()
}

pub fn serialize_certification(cert: &Certification) -> String {
    let mut w = MarkdownWriter::default();
    w.block(BlockKind::Certification);
    w.field(FieldLabel::Name, cert.name.as_deref());
    w.field(FieldLabel::Issuer, cert.issuer.as_deref());
    w.date(FieldLabel::Issued, cert.issued);
    w.date(FieldLabel::Expires, cert.expires);
    w.field(FieldLabel::CertificationId, cert.certification_id.as_deref());
    w.finish()
}

pub fn serialize_experience(experience: &ExperienceInfo, options: &RenderOptions) -> String {
    let projects: Vec<String> = experience
        .projects
        .iter()
        .filter_map(serialize_project)
        .collect();
    let roles: Vec<String> = experience
        .roles
        .iter()
        .filter_map(|r| serialize_role(r, options))
        .collect();
    if projects.is_empty() && roles.is_empty() {
        return String::new();
    }

    let mut w = MarkdownWriter::default();
    w.heading(1, SectionKind::Experience.title());
    if !projects.is_empty() {
        w.block(BlockKind::Projects);
        for project in &projects {
            w.raw(project);
        }
    }
    if !roles.is_empty() {
        w.block(BlockKind::Roles);
        for role in &roles {
            w.raw(role);
        }
    }
    w.finish()
}

/// `None` when the project is omitted or nothing of it would be written.
pub fn serialize_project(project: &Project) -> Option<String> {
    let (description, skills) = match project.inclusion_status() {
        InclusionStatus::Omit => return None,
        InclusionStatus::Include => (project.description.as_deref(), project.skills.as_deref()),
        InclusionStatus::NotRelevant => (None, None),
    };

    let mut w = MarkdownWriter::default();
    w.block(BlockKind::Project);
    let mut wrote_any = false;

    if let Some(overview) = project.overview.as_ref().filter(|o| !o.is_empty()) {
        w.block(BlockKind::Overview);
        w.field(FieldLabel::Title, overview.title.as_deref());
        w.field(FieldLabel::Url, overview.url.as_deref());
        w.field(FieldLabel::UrlDescription, overview.url_description.as_deref());
        w.date(FieldLabel::StartDate, overview.start_date);
        w.date(FieldLabel::EndDate, overview.end_date);
        w.end_block();
        wrote_any = true;
    }
    if let Some(description) = description.filter(|t| !t.trim().is_empty()) {
        w.block(BlockKind::Description);
        w.text(description);
        w.end_block();
        wrote_any = true;
    }
    if let Some(skills) = skills.filter(|s| !s.is_empty()) {
        w.block(BlockKind::Skills);
        w.bullets(skills);
        w.end_block();
        wrote_any = true;
    }

    wrote_any.then(|| w.finish())
}

/// `None` when the role is omitted or nothing of it would be written.
pub fn serialize_role(role: &Role, options: &RenderOptions) -> Option<String> {
    let (summary, responsibilities, skills) = match role.inclusion_status() {
        InclusionStatus::Omit => return None,
        InclusionStatus::Include => (
            role.summary.as_deref(),
            role.responsibilities.as_deref(),
            role.skills.as_deref(),
        ),
        InclusionStatus::NotRelevant => match options.not_relevant_roles {
            NotRelevantRolePolicy::DropContent => (None, None, None),
            NotRelevantRolePolicy::Placeholder => (
                role.summary.as_deref(),
                role.responsibilities
                    .as_ref()
                    .map(|_| options.not_relevant_placeholder.as_str()),
                role.skills.as_deref(),
            ),
        },
    };

    let mut w = MarkdownWriter::default();
    w.block(BlockKind::Role);
    let mut wrote_any = false;

    if let Some(basics) = role.basics.as_ref().filter(|b| !b.is_empty()) {
        w.block(BlockKind::Basics);
        w.field(FieldLabel::Company, basics.company.as_deref());
        w.field(FieldLabel::Title, basics.title.as_deref());
        w.date(FieldLabel::StartDate, basics.start_date);
        w.date(FieldLabel::EndDate, basics.end_date);
        w.field(FieldLabel::Location, basics.location.as_deref());
        w.field(FieldLabel::Agency, basics.agency_name.as_deref());
        w.field(FieldLabel::JobCategory, basics.job_category.as_deref());
        w.field(FieldLabel::EmploymentType, basics.employment_type.as_deref());
        w.field(FieldLabel::ReasonForChange, basics.reason_for_change.as_deref());
        w.end_block();
        wrote_any = true;
    }
    for (kind, text) in [
        (BlockKind::Summary, summary),
        (BlockKind::Responsibilities, responsibilities),
    ] {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            w.block(kind);
            w.text(text);
            w.end_block();
            wrote_any = true;
        }
    }
    if let Some(skills) = skills.filter(|s| !s.is_empty()) {
        w.block(BlockKind::Skills);
        w.bullets(skills);
        w.end_block();
        wrote_any = true;
    }

    wrote_any.then(|| w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parser::parse_document;
    use crate::models::{ProjectOverview, RoleBasics};

    fn ym(y: i32, m: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, 1)
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn role(company: &str, status: InclusionStatus) -> Role {
        Role {
            basics: Some(RoleBasics {
                company: s(company),
                title: s("Engineer"),
                start_date: ym(2019, 6),
                end_date: ym(2020, 6),
                inclusion_status: status,
                ..Default::default()
            }),
            summary: s("Led the platform team."),
            responsibilities: s("Ran on-call.\nReviewed designs."),
            skills: Some(vec!["Rust".to_string(), "Kafka".to_string()]),
        }
    }

    fn project(title: &str, status: InclusionStatus) -> Project {
        Project {
            overview: Some(ProjectOverview {
                title: s(title),
                url: s("https://example.com"),
                start_date: ym(2021, 1),
                inclusion_status: status,
                ..Default::default()
            }),
            description: s("A compiler for resumes."),
            skills: Some(vec!["Parsing".to_string()]),
        }
    }

    fn sample_document() -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                name: s("Ada Lovelace"),
                email: s("ada@example.com"),
                github: s("https://github.com/ada"),
                require_sponsorship: Some(true),
                banner: s("Engine programmer.\nMathematician."),
                ..Default::default()
            },
            education: EducationInfo {
                degrees: vec![Degree {
                    school: s("University of London"),
                    degree: s("BSc"),
                    start_date: ym(2010, 9),
                    end_date: ym(2014, 6),
                    ..Default::default()
                }],
            },
            certifications: CertificationsInfo {
                certifications: vec![Certification {
                    name: s("CKA"),
                    issued: ym(2022, 3),
                    ..Default::default()
                }],
            },
            experience: ExperienceInfo {
                roles: vec![role("Acme", InclusionStatus::Include)],
                projects: vec![project("Resume compiler", InclusionStatus::Include)],
            },
        }
    }

    #[test]
    fn test_exact_output_layout() {
        let doc = ResumeDocument {
            personal: PersonalInfo {
                name: s("A"),
                ..Default::default()
            },
            education: EducationInfo {
                degrees: vec![
                    Degree {
                        school: s("MIT"),
                        start_date: ym(2010, 9),
                        ..Default::default()
                    },
                    Degree {
                        school: s("CMU"),
                        ..Default::default()
                    },
                ],
            },
            ..Default::default()
        };
        let expected = "# Personal\n\n## Contact Information\n\nName: A\n\n\
# Education\n\n## Degrees\n\n### Degree\n\nSchool: MIT\nStart date: 09/2010\n\n\
### Degree\n\nSchool: CMU\n";
        assert_eq!(serialize_document(&doc, &RenderOptions::default()), expected);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let doc = sample_document();
        let options = RenderOptions::default();
        assert_eq!(
            serialize_document(&doc, &options),
            serialize_document(&doc, &options)
        );
    }

    #[test]
    fn test_round_trip_of_canonical_document() {
        let doc = sample_document();
        let markdown = serialize_document(&doc, &RenderOptions::default());
        let parsed = parse_document(&markdown).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_round_trip_with_every_field_set() {
        let doc = ResumeDocument {
            personal: PersonalInfo {
                name: s("Ada Lovelace"),
                email: s("ada@example.com"),
                phone: s("+44 20 0000 0000"),
                location: s("London, UK"),
                website: s("https://ada.dev"),
                github: s("https://github.com/ada"),
                linkedin: s("https://linkedin.com/in/ada"),
                twitter: s("@ada"),
                work_authorization: s("UK Citizen"),
                require_sponsorship: Some(false),
                banner: s("Engine programmer."),
                note: s("Available from 01/2025."),
            },
            education: EducationInfo {
                degrees: vec![Degree {
                    school: s("University of London"),
                    degree: s("BSc"),
                    major: s("Mathematics"),
                    start_date: ym(2010, 9),
                    end_date: ym(2014, 6),
                    gpa: s("3.9/4.0"),
                }],
            },
            certifications: CertificationsInfo {
                certifications: vec![Certification {
                    name: s("CKA"),
                    issuer: s("CNCF"),
                    issued: ym(2022, 3),
                    expires: ym(2025, 3),
                    certification_id: s("LF-123: A"),
                }],
            },
            experience: ExperienceInfo {
                projects: vec![Project {
                    overview: Some(ProjectOverview {
                        title: s("Resume compiler"),
                        url: s("https://example.com/rc"),
                        url_description: s("Source"),
                        start_date: ym(2021, 1),
                        end_date: ym(2021, 8),
                        inclusion_status: InclusionStatus::Include,
                    }),
                    description: s("A compiler for resumes.\nWritten in Rust."),
                    skills: Some(vec!["Parsing".to_string(), "Rust".to_string()]),
                }],
                roles: vec![Role {
                    basics: Some(RoleBasics {
                        company: s("Acme"),
                        title: s("Staff Engineer"),
                        start_date: ym(2019, 6),
                        end_date: ym(2023, 2),
                        location: s("Remote"),
                        agency_name: s("Talent Co"),
                        job_category: s("Engineering"),
                        employment_type: s("Contract"),
                        reason_for_change: s("Relocation"),
                        inclusion_status: InclusionStatus::Include,
                    }),
                    summary: s("Led the platform team."),
                    responsibilities: s("Ran on-call.\nReviewed designs."),
                    skills: Some(vec!["Kafka".to_string()]),
                }],
            },
        };

        let markdown = serialize_document(&doc, &RenderOptions::default());
        for label in [
            "Phone:", "LinkedIn:", "Twitter:", "Work Authorization:", "Major:", "GPA:",
            "Issuer:", "Expires:", "Certification ID:", "URL Description:", "Agency:",
            "Job category:", "Employment type:", "Reason for change:",
        ] {
            assert!(markdown.contains(label), "missing {label}");
        }
        assert_eq!(parse_document(&markdown).unwrap(), doc);
    }

    #[test]
    fn test_blank_free_text_writes_no_block() {
        let personal = PersonalInfo {
            name: s("Ada"),
            banner: s("   "),
            note: s("\n\n"),
            ..Default::default()
        };
        assert_eq!(
            serialize_personal(&personal),
            "# Personal\n\n## Contact Information\n\nName: Ada"
        );

        let only_blank = PersonalInfo {
            banner: s(" \n "),
            ..Default::default()
        };
        assert_eq!(serialize_personal(&only_blank), "");

        let mut p = project("Side thing", InclusionStatus::Include);
        p.description = s("  \n  ");
        let md = serialize_project(&p).unwrap();
        assert!(!md.contains("#### Description"));
        assert!(md.contains("#### Skills"));
    }

    #[test]
    fn test_empty_entities_serialize_to_empty_string() {
        assert_eq!(serialize_personal(&PersonalInfo::default()), "");
        assert_eq!(serialize_education(&EducationInfo::default()), "");
        assert_eq!(serialize_certifications(&CertificationsInfo::default()), "");
        assert_eq!(
            serialize_experience(&ExperienceInfo::default(), &RenderOptions::default()),
            ""
        );
        assert_eq!(
            serialize_document(&ResumeDocument::default(), &RenderOptions::default()),
            ""
        );
    }

    #[test]
    fn test_empty_section_header_is_omitted() {
        let doc = ResumeDocument {
            education: sample_document().education,
            ..Default::default()
        };
        let md = serialize_document(&doc, &RenderOptions::default());
        assert!(md.starts_with("# Education"));
        assert!(!md.contains("# Personal"));
        assert!(!md.contains("# Experience"));
    }

    #[test]
    fn test_absent_fields_have_no_label_line() {
        let md = serialize_personal(&PersonalInfo {
            name: s("Ada"),
            ..Default::default()
        });
        assert!(!md.contains("Email:"));
        assert!(!md.contains("## Websites"));
    }

    #[test]
    fn test_sponsorship_renders_yes_no() {
        let md = serialize_personal(&PersonalInfo {
            require_sponsorship: Some(false),
            ..Default::default()
        });
        assert!(md.contains("## Visa Status\n\nRequire sponsorship: No"));
    }

    #[test]
    fn test_projects_render_before_roles() {
        let md = serialize_document(&sample_document(), &RenderOptions::default());
        let projects = md.find("## Projects").unwrap();
        let roles = md.find("## Roles").unwrap();
        assert!(projects < roles);
    }

    #[test]
    fn test_omit_leaves_no_trace() {
        let exp = ExperienceInfo {
            roles: vec![
                role("Hidden Corp", InclusionStatus::Omit),
                role("Visible Inc", InclusionStatus::Include),
            ],
            projects: vec![project("Secret project", InclusionStatus::Omit)],
        };
        let md = serialize_experience(&exp, &RenderOptions::default());
        assert!(!md.contains("Hidden Corp"));
        assert!(!md.contains("Secret project"));
        assert!(md.contains("Visible Inc"));
        assert!(!md.contains("## Projects"));
    }

    #[test]
    fn test_all_omitted_experience_is_empty() {
        let exp = ExperienceInfo {
            roles: vec![role("Hidden Corp", InclusionStatus::Omit)],
            projects: vec![],
        };
        assert_eq!(serialize_experience(&exp, &RenderOptions::default()), "");
    }

    #[test]
    fn test_not_relevant_project_keeps_overview_only() {
        let md = serialize_project(&project("Side thing", InclusionStatus::NotRelevant)).unwrap();
        assert!(md.contains("#### Overview"));
        assert!(md.contains("Title: Side thing"));
        assert!(!md.contains("#### Description"));
        assert!(!md.contains("#### Skills"));
    }

    #[test]
    fn test_not_relevant_role_drop_content_policy() {
        let options = RenderOptions::default();
        let md = serialize_role(&role("Acme", InclusionStatus::NotRelevant), &options).unwrap();
        assert!(md.contains("#### Basics"));
        assert!(md.contains("Company: Acme"));
        assert!(md.contains("End date: 06/2020"));
        assert!(!md.contains("#### Summary"));
        assert!(!md.contains("#### Responsibilities"));
        assert!(!md.contains("#### Skills"));
    }

    #[test]
    fn test_not_relevant_role_placeholder_policy() {
        let options = RenderOptions {
            not_relevant_roles: NotRelevantRolePolicy::Placeholder,
            not_relevant_placeholder: "Not relevant.".to_string(),
        };
        let md = serialize_role(&role("Acme", InclusionStatus::NotRelevant), &options).unwrap();
        assert!(md.contains("#### Summary\n\nLed the platform team."));
        assert!(md.contains("#### Responsibilities\n\nNot relevant."));
        assert!(!md.contains("Ran on-call."));
        assert!(md.contains("#### Skills\n\n* Rust\n* Kafka"));
    }

    #[test]
    fn test_placeholder_not_invented_without_responsibilities() {
        let options = RenderOptions {
            not_relevant_roles: NotRelevantRolePolicy::Placeholder,
            ..Default::default()
        };
        let mut r = role("Acme", InclusionStatus::NotRelevant);
        r.responsibilities = None;
        let md = serialize_role(&r, &options).unwrap();
        assert!(!md.contains("#### Responsibilities"));
    }

    #[test]
    fn test_inclusion_status_is_never_written() {
        let md = serialize_document(&sample_document(), &RenderOptions::default());
        assert!(!md.to_lowercase().contains("include"));
        assert!(!md.to_lowercase().contains("inclusion"));
    }

    #[test]
    fn test_free_text_is_normalized_on_write() {
        let md = serialize_personal(&PersonalInfo {
            note: s("\n\nLine one\n\n\nLine two  \n"),
            ..Default::default()
        });
        assert_eq!(md, "# Personal\n\n## Note\n\nLine one\nLine two");
    }

    #[test]
    fn test_empty_records_are_not_written() {
        let edu = EducationInfo {
            degrees: vec![Degree::default()],
        };
        assert_eq!(serialize_education(&edu), "");
    }
}
