use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::info;

use resume_engine::editing::{
    accept_replacement, merge_document, render_for_export, validate_for_write, ReplacementTarget,
    SectionReplacements,
};
use resume_engine::errors::EngineError;
use resume_engine::markdown::{parse_document, serialize_document, RenderOptions};

#[derive(Parser)]
#[command(name = "resume-engine")]
#[command(about = "Parse, merge, validate and filter Markdown resumes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a resume parses and passes validation
    Validate {
        /// Resume Markdown file
        file: String,
    },

    /// Re-serialize a resume in canonical form
    Normalize {
        /// Resume Markdown file
        file: String,
    },

    /// Replace whole sections with JSON payloads and rebuild the resume
    Merge {
        /// Resume Markdown file (may be empty for a new resume)
        file: String,

        /// PersonalInfo JSON
        #[arg(long)]
        personal: Option<String>,

        /// EducationInfo JSON
        #[arg(long)]
        education: Option<String>,

        /// CertificationsInfo JSON
        #[arg(long)]
        certifications: Option<String>,

        /// ExperienceInfo JSON
        #[arg(long)]
        experience: Option<String>,
    },

    /// Accept a Markdown replacement for one section or the whole resume
    Accept {
        /// Resume Markdown file
        file: String,

        /// Section the replacement belongs to
        #[arg(short, long, value_enum)]
        target: TargetArg,

        /// Replacement Markdown file
        #[arg(short, long)]
        replacement: String,
    },

    /// Render the resume keeping only experience inside a date window
    Filter {
        /// Resume Markdown file
        file: String,

        /// Window start (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Window end (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<NaiveDate>,
    },

    /// Print the parsed resume as JSON
    Export {
        /// Resume Markdown file
        file: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Personal,
    Education,
    Certifications,
    Experience,
    Full,
}

impl From<TargetArg> for ReplacementTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Personal => ReplacementTarget::Personal,
            TargetArg::Education => ReplacementTarget::Education,
            TargetArg::Certifications => ReplacementTarget::Certifications,
            TargetArg::Experience => ReplacementTarget::Experience,
            TargetArg::Full => ReplacementTarget::FullDocument,
        }
    }
}

/// Runs one command and returns the text to emit.
pub fn run(command: &Commands, options: &RenderOptions) -> Result<String, EngineError> {
    match command {
        Commands::Validate { file } => {
            let doc = validate_for_write(&read_markdown(file)?)?;
            info!("{file} is valid");
            let body = json!({ "valid": true, "summary": doc.summary() });
            Ok(serde_json::to_string_pretty(&body)?)
        }
        Commands::Normalize { file } => {
            let doc = parse_document(&read_markdown(file)?)?;
            Ok(serialize_document(&doc, options))
        }
        Commands::Merge {
            file,
            personal,
            education,
            certifications,
            experience,
        } => {
            let replacements = SectionReplacements {
                personal: read_optional_json(personal.as_deref())?,
                education: read_optional_json(education.as_deref())?,
                certifications: read_optional_json(certifications.as_deref())?,
                experience: read_optional_json(experience.as_deref())?,
            };
            merge_document(&read_markdown(file)?, replacements, options)
        }
        Commands::Accept {
            file,
            target,
            replacement,
        } => accept_replacement(
            &read_markdown(file)?,
            (*target).into(),
            &read_markdown(replacement)?,
            options,
        ),
        Commands::Filter { file, start, end } => {
            render_for_export(&read_markdown(file)?, *start, *end, options)
        }
        Commands::Export { file } => {
            let doc = parse_document(&read_markdown(file)?)?;
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}

/// Writes `text` to `path`, or to stdout when no path is given.
pub fn emit(path: Option<&str>, text: &str) -> Result<(), EngineError> {
    match path {
        Some(path) => {
            fs::write(path, ensure_newline(text))?;
            info!("Wrote {} bytes to {path}", text.len());
        }
        None => print!("{}", ensure_newline(text)),
    }
    Ok(())
}

fn ensure_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

fn read_markdown(path: impl AsRef<Path>) -> Result<String, EngineError> {
    Ok(fs::read_to_string(path)?)
}

fn read_optional_json<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, EngineError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}
