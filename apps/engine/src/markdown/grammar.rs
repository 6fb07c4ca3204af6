//! Resume Markdown grammar: header vocabulary and the line outline the parser walks.
//!
//! # Shape
//! ```text
//! # Personal         ## Contact Information | Websites | Visa Status | Banner | Note
//! # Education        ## Degrees > ### Degree
//! # Certifications   ## Certification
//! # Experience       ## Projects > ### Project > #### Overview | Description | Skills
//!                    ## Roles    > ### Role    > #### Basics | Summary | Responsibilities | Skills
//! ```
//! Header titles match case-insensitively. Anything outside this vocabulary is a
//! grammar error once the first recognized section has started.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

// ────────────────────────────────────────────────────────────────────────────
// Header vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// The four top-level resume divisions, in canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Personal,
    Education,
    Certifications,
    Experience,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Personal,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Experience,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Personal => "Personal",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
            SectionKind::Experience => "Experience",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.title().eq_ignore_ascii_case(title.trim()))
    }
}

/// Field-group and container headers below the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    ContactInformation,
    Websites,
    VisaStatus,
    Banner,
    Note,
    Degrees,
    Degree,
    Certification,
    Projects,
    Project,
    Overview,
    Description,
    Roles,
    Role,
    Basics,
    Summary,
    Responsibilities,
    Skills,
}

impl BlockKind {
    pub fn title(&self) -> &'static str {
        match self {
            BlockKind::ContactInformation => "Contact Information",
            BlockKind::Websites => "Websites",
            BlockKind::VisaStatus => "Visa Status",
            BlockKind::Banner => "Banner",
            BlockKind::Note => "Note",
            BlockKind::Degrees => "Degrees",
            BlockKind::Degree => "Degree",
            BlockKind::Certification => "Certification",
            BlockKind::Projects => "Projects",
            BlockKind::Project => "Project",
            BlockKind::Overview => "Overview",
            BlockKind::Description => "Description",
            BlockKind::Roles => "Roles",
            BlockKind::Role => "Role",
            BlockKind::Basics => "Basics",
            BlockKind::Summary => "Summary",
            BlockKind::Responsibilities => "Responsibilities",
            BlockKind::Skills => "Skills",
        }
    }

    /// Header depth at which this block is legal.
    pub fn level(&self) -> u8 {
        match self {
            BlockKind::ContactInformation
            | BlockKind::Websites
            | BlockKind::VisaStatus
            | BlockKind::Banner
            | BlockKind::Note
            | BlockKind::Degrees
            | BlockKind::Certification
            | BlockKind::Projects
            | BlockKind::Roles => 2,
            BlockKind::Degree | BlockKind::Project | BlockKind::Role => 3,
            BlockKind::Overview
            | BlockKind::Description
            | BlockKind::Basics
            | BlockKind::Summary
            | BlockKind::Responsibilities
            | BlockKind::Skills => 4,
        }
    }

    /// Resolves a header against the blocks allowed at one position in the grammar.
    pub fn resolve(heading: &Heading, allowed: &[BlockKind]) -> Option<BlockKind> {
        allowed
            .iter()
            .copied()
            .find(|b| b.level() == heading.level && b.title().eq_ignore_ascii_case(&heading.title))
    }
}

pub const PERSONAL_BLOCKS: &[BlockKind] = &[
    BlockKind::ContactInformation,
    BlockKind::Websites,
    BlockKind::VisaStatus,
    BlockKind::Banner,
    BlockKind::Note,
];
pub const EDUCATION_BLOCKS: &[BlockKind] = &[BlockKind::Degrees];
pub const DEGREES_BLOCKS: &[BlockKind] = &[BlockKind::Degree];
pub const CERTIFICATIONS_BLOCKS: &[BlockKind] = &[BlockKind::Certification];
pub const EXPERIENCE_BLOCKS: &[BlockKind] = &[BlockKind::Projects, BlockKind::Roles];
pub const PROJECTS_BLOCKS: &[BlockKind] = &[BlockKind::Project];
pub const PROJECT_BLOCKS: &[BlockKind] =
    &[BlockKind::Overview, BlockKind::Description, BlockKind::Skills];
pub const ROLES_BLOCKS: &[BlockKind] = &[BlockKind::Role];
pub const ROLE_BLOCKS: &[BlockKind] = &[
    BlockKind::Basics,
    BlockKind::Summary,
    BlockKind::Responsibilities,
    BlockKind::Skills,
];

// ────────────────────────────────────────────────────────────────────────────
// Field labels
// ────────────────────────────────────────────────────────────────────────────

/// Every `Label: value` line the grammar knows, grouped by the block that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    Name,
    Email,
    Phone,
    Location,
    Website,
    GitHub,
    LinkedIn,
    Twitter,
    WorkAuthorization,
    RequireSponsorship,
    School,
    Degree,
    Major,
    StartDate,
    EndDate,
    Gpa,
    Issuer,
    Issued,
    Expires,
    CertificationId,
    Title,
    Url,
    UrlDescription,
    Company,
    Agency,
    JobCategory,
    EmploymentType,
    ReasonForChange,
}

impl FieldLabel {
    pub fn label(&self) -> &'static str {
        match self {
            FieldLabel::Name => "Name",
            FieldLabel::Email => "Email",
            FieldLabel::Phone => "Phone",
            FieldLabel::Location => "Location",
            FieldLabel::Website => "Website",
            FieldLabel::GitHub => "GitHub",
            FieldLabel::LinkedIn => "LinkedIn",
            FieldLabel::Twitter => "Twitter",
            FieldLabel::WorkAuthorization => "Work Authorization",
            FieldLabel::RequireSponsorship => "Require sponsorship",
            FieldLabel::School => "School",
            FieldLabel::Degree => "Degree",
            FieldLabel::Major => "Major",
            FieldLabel::StartDate => "Start date",
            FieldLabel::EndDate => "End date",
            FieldLabel::Gpa => "GPA",
            FieldLabel::Issuer => "Issuer",
            FieldLabel::Issued => "Issued",
            FieldLabel::Expires => "Expires",
            FieldLabel::CertificationId => "Certification ID",
            FieldLabel::Title => "Title",
            FieldLabel::Url => "URL",
            FieldLabel::UrlDescription => "URL Description",
            FieldLabel::Company => "Company",
            FieldLabel::Agency => "Agency",
            FieldLabel::JobCategory => "Job category",
            FieldLabel::EmploymentType => "Employment type",
            FieldLabel::ReasonForChange => "Reason for change",
        }
    }

    pub fn resolve(label: &str, allowed: &[FieldLabel]) -> Option<FieldLabel> {
        allowed
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
    }
}

pub const CONTACT_FIELDS: &[FieldLabel] = &[
    FieldLabel::Name,
    FieldLabel::Email,
    FieldLabel::Phone,
    FieldLabel::Location,
];
pub const WEBSITE_FIELDS: &[FieldLabel] = &[
    FieldLabel::Website,
    FieldLabel::GitHub,
    FieldLabel::LinkedIn,
    FieldLabel::Twitter,
];
pub const VISA_FIELDS: &[FieldLabel] =
    &[FieldLabel::WorkAuthorization, FieldLabel::RequireSponsorship];
pub const DEGREE_FIELDS: &[FieldLabel] = &[
    FieldLabel::School,
    FieldLabel::Degree,
    FieldLabel::Major,
    FieldLabel::StartDate,
    FieldLabel::EndDate,
    FieldLabel::Gpa,
];
pub const CERTIFICATION_FIELDS: &[FieldLabel] = &[
    FieldLabel::Name,
    FieldLabel::Issuer,
    FieldLabel::Issued,
    FieldLabel::Expires,
    FieldLabel::CertificationId,
];
pub const OVERVIEW_FIELDS: &[FieldLabel] = &[
    FieldLabel::Title,
    FieldLabel::Url,
    FieldLabel::UrlDescription,
    FieldLabel::StartDate,
    FieldLabel::EndDate,
];
pub const BASICS_FIELDS: &[FieldLabel] = &[
    FieldLabel::Company,
    FieldLabel::Title,
    FieldLabel::StartDate,
    FieldLabel::EndDate,
    FieldLabel::Location,
    FieldLabel::Agency,
    FieldLabel::JobCategory,
    FieldLabel::EmploymentType,
    FieldLabel::ReasonForChange,
];

// ────────────────────────────────────────────────────────────────────────────
// Outline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub title: String,
    /// 1-based source line, for error messages.
    pub line: usize,
}

/// A header with the body lines that directly follow it and its nested headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub heading: Heading,
    pub body: Vec<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn new(heading: Heading) -> Self {
        Self {
            heading,
            body: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn has_body_text(&self) -> bool {
        self.body.iter().any(|l| !l.trim().is_empty())
    }
}

/// One recognized top-level section of a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutline {
    pub kind: SectionKind,
    pub node: OutlineNode,
}

/// Returns `(level, title)` when the line is an ATX header (`#` at column 0, then a space).
pub fn heading_of(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() {
        return Some((hashes as u8, ""));
    }
    if !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

/// Splits a resume into its recognized top-level sections.
///
/// Lines before the first recognized `#` header are a discarded preamble. After that,
/// every header nests under the closest preceding header of a lower level; an
/// unrecognized `#` header is an error, as is a recognized section appearing twice.
pub fn outline(markdown: &str) -> Result<Vec<SectionOutline>, EngineError> {
    let mut sections: Vec<SectionOutline> = Vec::new();
    // Open path of nodes under the current section, root first.
    let mut stack: Vec<OutlineNode> = Vec::new();
    let mut current_kind: Option<SectionKind> = None;
    let mut preamble_lines = 0usize;

    for (idx, raw) in markdown.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        let Some((level, title)) = heading_of(line) else {
            match stack.last_mut() {
                Some(node) => node.body.push(line.to_string()),
                None => {
                    if !line.trim().is_empty() {
                        preamble_lines += 1;
                    }
                }
            }
            continue;
        };

        let heading = Heading {
            level,
            title: title.to_string(),
            line: line_no,
        };

        if level == 1 {
            match SectionKind::from_title(title) {
                Some(kind) => {
                    if let Some(prev) = current_kind.take() {
                        sections.push(SectionOutline {
                            kind: prev,
                            node: collapse(&mut stack),
                        });
                    }
                    if sections.iter().any(|s| s.kind == kind) {
                        return Err(EngineError::grammar(format!(
                            "line {line_no}: section '{}' appears more than once",
                            kind.title()
                        )));
                    }
                    current_kind = Some(kind);
                    stack.push(OutlineNode::new(heading));
                }
                None if current_kind.is_none() => {
                    preamble_lines += 1;
                }
                None => {
                    return Err(EngineError::grammar(format!(
                        "line {line_no}: unknown section '# {title}'"
                    )));
                }
            }
            continue;
        }

        if current_kind.is_none() {
            preamble_lines += 1;
            continue;
        }

        // Close every open node at this level or deeper, then open the new one.
        while stack.len() > 1 && stack.last().map_or(false, |n| n.heading.level >= level) {
            close_top(&mut stack);
        }
        stack.push(OutlineNode::new(heading));
    }

    if let Some(kind) = current_kind {
        sections.push(SectionOutline {
            kind,
            node: collapse(&mut stack),
        });
    }

    if preamble_lines > 0 {
        tracing::warn!("Discarded {preamble_lines} line(s) outside any recognized section");
    }

    if sections.is_empty() {
        return Err(EngineError::grammar(
            "no recognized section (expected one of Personal, Education, Certifications, Experience)",
        ));
    }

    Ok(sections)
}

fn close_top(stack: &mut Vec<OutlineNode>) {
    if let Some(node) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
        }
    }
}

fn collapse(stack: &mut Vec<OutlineNode>) -> OutlineNode {
    while stack.len() > 1 {
        close_top(stack);
    }
    // The section root is always present while a section is open.
    stack.pop().unwrap_or_else(|| {
        OutlineNode::new(Heading {
            level: 1,
            title: String::new(),
            line: 0,
        })
    })
}
