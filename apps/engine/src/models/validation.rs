use chrono::{Datelike, NaiveDate};

use crate::errors::EngineError;
use crate::markdown::grammar::heading_of;
use crate::markdown::text::{format_month_year, MAX_YEAR, MIN_YEAR};

/// Field-level checks shared by every model entity.
///
/// The parser runs these as each record is built; replacement sections that arrive
/// as JSON go through the same checks before they are merged.
pub trait Validate {
    fn validate(&self) -> Result<(), EngineError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), EngineError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Rejects a missing or whitespace-only required value.
pub fn require_non_empty(label: &str, value: Option<&str>) -> Result<(), EngineError> {
    match value {
        Some(v) if !v.trim().is_empty() => check_line(label, Some(v)),
        _ => Err(EngineError::validation(format!("{label} is required"))),
    }
}

/// Single-line field: present values must be non-blank and fit on one line.
pub fn check_line(label: &str, value: Option<&str>) -> Result<(), EngineError> {
    let Some(v) = value else {
        return Ok(());
    };
    if v.trim().is_empty() {
        return Err(EngineError::validation(format!(
            "{label} must not be blank when present"
        )));
    }
    if v.contains('\n') {
        return Err(EngineError::validation(format!(
            "{label} must fit on one line"
        )));
    }
    Ok(())
}

/// Free-text block: present values must be non-blank, and no line may read as a header.
pub fn check_text(label: &str, value: Option<&str>) -> Result<(), EngineError> {
    let Some(v) = value else {
        return Ok(());
    };
    if v.trim().is_empty() {
        return Err(EngineError::validation(format!(
            "{label} must not be blank when present"
        )));
    }
    if let Some(line) = v.lines().find(|l| heading_of(l.trim_end()).is_some()) {
        return Err(EngineError::validation(format!(
            "{label}: line '{line}' would be read as a section header"
        )));
    }
    Ok(())
}

/// Dates must have a four-digit year to be written as `MM/YYYY`.
pub fn check_date(label: &str, value: Option<NaiveDate>) -> Result<(), EngineError> {
    match value {
        Some(date) if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) => {
            Err(EngineError::validation(format!(
                "{label}: year {} is outside {MIN_YEAR}-{MAX_YEAR}",
                date.year()
            )))
        }
        _ => Ok(()),
    }
}

/// `later >= earlier` whenever both are present.
pub fn require_ordered(
    earlier_label: &str,
    earlier: Option<NaiveDate>,
    later_label: &str,
    later: Option<NaiveDate>,
) -> Result<(), EngineError> {
    match (earlier, later) {
        (Some(e), Some(l)) if l < e => Err(EngineError::validation(format!(
            "{later_label} ({}) is before {earlier_label} ({})",
            format_month_year(l),
            format_month_year(e)
        ))),
        _ => Ok(()),
    }
}
