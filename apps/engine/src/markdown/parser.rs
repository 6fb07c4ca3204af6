//! Extraction: walks the grammar outline and builds the document model directly.

use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::markdown::grammar::{
    outline, BlockKind, FieldLabel, Heading, OutlineNode, SectionKind, SectionOutline,
    BASICS_FIELDS, CERTIFICATIONS_BLOCKS, CERTIFICATION_FIELDS, CONTACT_FIELDS, DEGREES_BLOCKS,
    DEGREE_FIELDS, EDUCATION_BLOCKS, EXPERIENCE_BLOCKS, OVERVIEW_FIELDS, PERSONAL_BLOCKS,
    PROJECTS_BLOCKS, PROJECT_BLOCKS, ROLES_BLOCKS, ROLE_BLOCKS, VISA_FIELDS, WEBSITE_FIELDS,
};
use crate::markdown::text::{clean_value, normalize_block, parse_month_year, parse_yes_no};
use crate::models::{
    Certification, CertificationsInfo, Degree, EducationInfo, ExperienceInfo, PersonalInfo,
    Project, ProjectOverview, ResumeDocument, Role, RoleBasics, Validate,
};

/// Parses a complete resume.
pub fn parse_document(markdown: &str) -> Result<ResumeDocument, EngineError> {
    parse_sections(markdown, &SectionKind::ALL)
}

/// Parses only the requested sections; the others are left empty.
///
/// The whole outline is still checked, so a resume with no recognized section fails
/// even when nothing is requested from it.
pub fn parse_sections(
    markdown: &str,
    kinds: &[SectionKind],
) -> Result<ResumeDocument, EngineError> {
    let sections = outline(markdown)?;
    let mut doc = ResumeDocument::default();

    for section in sections.iter().filter(|s| kinds.contains(&s.kind)) {
        apply_section(&mut doc, section)?;
    }

    debug!(
        "Parsed {} section(s): {:?}",
        sections.len(),
        doc.summary()
    );
    Ok(doc)
}

fn apply_section(doc: &mut ResumeDocument, section: &SectionOutline) -> Result<(), EngineError> {
    match section.kind {
        SectionKind::Personal => doc.personal = parse_personal(&section.node)?,
        SectionKind::Education => doc.education = parse_education(&section.node)?,
        SectionKind::Certifications => {
            doc.certifications = parse_certifications(&section.node)?
        }
        SectionKind::Experience => doc.experience = parse_experience(&section.node)?,
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_personal(node: &OutlineNode) -> Result<PersonalInfo, EngineError> {
    let mut personal = PersonalInfo::default();

    for (kind, child) in resolve_children(node, PERSONAL_BLOCKS, true)? {
        match kind {
            BlockKind::ContactInformation => {
                for (label, value) in read_fields(child, CONTACT_FIELDS)? {
                    match label {
                        FieldLabel::Name => personal.name = Some(value),
                        FieldLabel::Email => personal.email = Some(value),
                        FieldLabel::Phone => personal.phone = Some(value),
                        FieldLabel::Location => personal.location = Some(value),
                        _ => {}
                    }
                }
            }
            BlockKind::Websites => {
                for (label, value) in read_fields(child, WEBSITE_FIELDS)? {
                    match label {
                        FieldLabel::Website => personal.website = Some(value),
                        FieldLabel::GitHub => personal.github = Some(value),
                        FieldLabel::LinkedIn => personal.linkedin = Some(value),
                        FieldLabel::Twitter => personal.twitter = Some(value),
                        _ => {}
                    }
                }
            }
            BlockKind::VisaStatus => {
                for (label, value) in read_fields(child, VISA_FIELDS)? {
                    match label {
                        FieldLabel::WorkAuthorization => {
                            personal.work_authorization = Some(value)
                        }
                        FieldLabel::RequireSponsorship => {
                            personal.require_sponsorship = Some(
                                parse_yes_no(label.label(), &value)
                                    .map_err(|e| at_line(&child.heading, e))?,
                            )
                        }
                        _ => {}
                    }
                }
            }
            BlockKind::Banner => personal.banner = read_text(child)?,
            BlockKind::Note => personal.note = read_text(child)?,
            _ => {}
        }
    }

    personal
        .validate()
        .map_err(|e| at_line(&node.heading, e))?;
    Ok(personal)
}

pub fn parse_education(node: &OutlineNode) -> Result<EducationInfo, EngineError> {
    let mut education = EducationInfo::default();

    for (_, group) in resolve_children(node, EDUCATION_BLOCKS, true)? {
        for (_, block) in resolve_children(group, DEGREES_BLOCKS, false)? {
            if let Some(degree) = parse_degree(block)? {
                education.degrees.push(degree);
            }
        }
    }

    Ok(education)
}

fn parse_degree(node: &OutlineNode) -> Result<Option<Degree>, EngineError> {
    let mut degree = Degree::default();

    for (label, value) in read_fields(node, DEGREE_FIELDS)? {
        match label {
            FieldLabel::School => degree.school = Some(value),
            FieldLabel::Degree => degree.degree = Some(value),
            FieldLabel::Major => degree.major = Some(value),
            FieldLabel::StartDate => degree.start_date = Some(date_field(node, label, &value)?),
            FieldLabel::EndDate => degree.end_date = Some(date_field(node, label, &value)?),
            FieldLabel::Gpa => degree.gpa = Some(value),
            _ => {}
        }
    }

    finish_record(node, degree, Degree::is_empty)
}

pub fn parse_certifications(node: &OutlineNode) -> Result<CertificationsInfo, EngineError> {
    let mut certifications = CertificationsInfo::default();

    for (_, block) in resolve_children(node, CERTIFICATIONS_BLOCKS, false)? {
        let mut cert = Certification::default();
        for (label, value) in read_fields(block, CERTIFICATION_FIELDS)? {
            match label {
                FieldLabel::Name => cert.name = Some(value),
                FieldLabel::Issuer => cert.issuer = Some(value),
                FieldLabel::Issued => cert.issued = Some(date_field(block, label, &value)?),
                FieldLabel::Expires => cert.expires = Some(date_field(block, label, &value)?),
                FieldLabel::CertificationId => cert.certification_id = Some(value),
                _ => {}
            }
        }
        if let Some(cert) = finish_record(block, cert, Certification::is_empty)? {
            certifications.certifications.push(cert);
        }
    }

    Ok(certifications)
}

pub fn parse_experience(node: &OutlineNode) -> Result<ExperienceInfo, EngineError> {
    let mut experience = ExperienceInfo::default();

    for (kind, group) in resolve_children(node, EXPERIENCE_BLOCKS, true)? {
        match kind {
            BlockKind::Projects => {
                for (_, block) in resolve_children(group, PROJECTS_BLOCKS, false)? {
                    if let Some(project) = parse_project(block)? {
                        experience.projects.push(project);
                    }
                }
            }
            BlockKind::Roles => {
                for (_, block) in resolve_children(group, ROLES_BLOCKS, false)? {
                    if let Some(role) = parse_role(block)? {
                        experience.roles.push(role);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(experience)
}

fn parse_project(node: &OutlineNode) -> Result<Option<Project>, EngineError> {
    let mut project = Project::default();

    for (kind, child) in resolve_children(node, PROJECT_BLOCKS, true)? {
        match kind {
            BlockKind::Overview => {
                let mut overview = ProjectOverview::default();
                for (label, value) in read_fields(child, OVERVIEW_FIELDS)? {
                    match label {
                        FieldLabel::Title => overview.title = Some(value),
                        FieldLabel::Url => overview.url = Some(value),
                        FieldLabel::UrlDescription => overview.url_description = Some(value),
                        FieldLabel::StartDate => {
                            overview.start_date = Some(date_field(child, label, &value)?)
                        }
                        FieldLabel::EndDate => {
                            overview.end_date = Some(date_field(child, label, &value)?)
                        }
                        _ => {}
                    }
                }
                if !overview.is_empty() {
                    project.overview = Some(overview);
                }
            }
            BlockKind::Description => project.description = read_text(child)?,
            BlockKind::Skills => project.skills = read_bullets(child)?,
            _ => {}
        }
    }

    finish_record(node, project, Project::is_empty)
}

fn parse_role(node: &OutlineNode) -> Result<Option<Role>, EngineError> {
    let mut role = Role::default();

    for (kind, child) in resolve_children(node, ROLE_BLOCKS, true)? {
        match kind {
            BlockKind::Basics => {
                let mut basics = RoleBasics::default();
                for (label, value) in read_fields(child, BASICS_FIELDS)? {
                    match label {
                        FieldLabel::Company => basics.company = Some(value),
                        FieldLabel::Title => basics.title = Some(value),
                        FieldLabel::StartDate => {
                            basics.start_date = Some(date_field(child, label, &value)?)
                        }
                        FieldLabel::EndDate => {
                            basics.end_date = Some(date_field(child, label, &value)?)
                        }
                        FieldLabel::Location => basics.location = Some(value),
                        FieldLabel::Agency => basics.agency_name = Some(value),
                        FieldLabel::JobCategory => basics.job_category = Some(value),
                        FieldLabel::EmploymentType => basics.employment_type = Some(value),
                        FieldLabel::ReasonForChange => basics.reason_for_change = Some(value),
                        _ => {}
                    }
                }
                if !basics.is_empty() {
                    role.basics = Some(basics);
                }
            }
            BlockKind::Summary => role.summary = read_text(child)?,
            BlockKind::Responsibilities => role.responsibilities = read_text(child)?,
            BlockKind::Skills => role.skills = read_bullets(child)?,
            _ => {}
        }
    }

    finish_record(node, role, Role::is_empty)
}

// ────────────────────────────────────────────────────────────────────────────
// Block helpers
// ────────────────────────────────────────────────────────────────────────────

/// Matches every child header against the blocks allowed under `node`.
///
/// Body text directly under a grouping header, an unknown header, and (when `unique`)
/// a repeated block are all grammar errors.
fn resolve_children<'a>(
    node: &'a OutlineNode,
    allowed: &[BlockKind],
    unique: bool,
) -> Result<Vec<(BlockKind, &'a OutlineNode)>, EngineError> {
    if node.has_body_text() {
        return Err(EngineError::grammar(format!(
            "line {}: unexpected text under '{}' before any sub-header",
            node.heading.line,
            display_heading(&node.heading)
        )));
    }

    let mut resolved: Vec<(BlockKind, &OutlineNode)> = Vec::with_capacity(node.children.len());
    for child in &node.children {
        let kind = BlockKind::resolve(&child.heading, allowed).ok_or_else(|| {
            EngineError::grammar(format!(
                "line {}: unexpected header '{}' under '{}' (expected one of: {})",
                child.heading.line,
                display_heading(&child.heading),
                display_heading(&node.heading),
                allowed
                    .iter()
                    .map(|b| format!("{} {}", "#".repeat(b.level() as usize), b.title()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        if unique && resolved.iter().any(|(k, _)| *k == kind) {
            return Err(EngineError::grammar(format!(
                "line {}: '{}' appears more than once under '{}'",
                child.heading.line,
                display_heading(&child.heading),
                display_heading(&node.heading)
            )));
        }
        resolved.push((kind, child));
    }
    Ok(resolved)
}

/// Leaf blocks carry body lines only.
fn ensure_leaf(node: &OutlineNode) -> Result<(), EngineError> {
    match node.children.first() {
        Some(child) => Err(EngineError::grammar(format!(
            "line {}: unexpected header '{}' inside '{}'",
            child.heading.line,
            display_heading(&child.heading),
            display_heading(&node.heading)
        ))),
        None => Ok(()),
    }
}

/// Reads `Label: value` lines. Unknown labels and label-less lines are skipped.
fn read_fields(
    node: &OutlineNode,
    allowed: &[FieldLabel],
) -> Result<Vec<(FieldLabel, String)>, EngineError> {
    ensure_leaf(node)?;

    let mut fields = Vec::new();
    for line in node.body.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let Some((label, value)) = line.split_once(':') else {
            warn!(
                "Ignoring line without a label in '{}': {line}",
                node.heading.title
            );
            continue;
        };
        match FieldLabel::resolve(label, allowed) {
            Some(field) => {
                if let Some(value) = clean_value(value) {
                    fields.push((field, value));
                }
            }
            None => warn!(
                "Ignoring unknown field '{}' in '{}'",
                label.trim(),
                node.heading.title
            ),
        }
    }
    Ok(fields)
}

fn read_text(node: &OutlineNode) -> Result<Option<String>, EngineError> {
    ensure_leaf(node)?;
    Ok(normalize_block(&node.body))
}

/// Reads `* item` (or `- item`) lines; an empty list is `None`.
fn read_bullets(node: &OutlineNode) -> Result<Option<Vec<String>>, EngineError> {
    ensure_leaf(node)?;

    let mut items = Vec::new();
    for line in node.body.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let item = line
            .strip_prefix('*')
            .or_else(|| line.strip_prefix('-'))
            .and_then(clean_value);
        match item {
            Some(item) => items.push(item),
            None => warn!("Ignoring non-bullet line in '{}': {line}", node.heading.title),
        }
    }

    Ok(if items.is_empty() { None } else { Some(items) })
}

fn date_field(
    node: &OutlineNode,
    label: FieldLabel,
    value: &str,
) -> Result<chrono::NaiveDate, EngineError> {
    parse_month_year(label.label(), value).map_err(|e| at_line(&node.heading, e))
}

/// Drops records with nothing populated; validates the rest.
fn finish_record<T: Validate>(
    node: &OutlineNode,
    record: T,
    is_empty: fn(&T) -> bool,
) -> Result<Option<T>, EngineError> {
    if is_empty(&record) {
        debug!(
            "Dropping empty '{}' block at line {}",
            node.heading.title, node.heading.line
        );
        return Ok(None);
    }
    record.validate().map_err(|e| at_line(&node.heading, e))?;
    Ok(Some(record))
}

fn at_line(heading: &Heading, err: EngineError) -> EngineError {
    match err {
        EngineError::FieldValidation(msg) => EngineError::FieldValidation(format!(
            "line {} ('{}'): {msg}",
            heading.line,
            display_heading(heading)
        )),
        other => other,
    }
}

fn display_heading(heading: &Heading) -> String {
    format!("{} {}", "#".repeat(heading.level as usize), heading.title)
}
