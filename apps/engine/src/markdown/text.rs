//! Shared text primitives: free-text block normalization, `MM/YYYY` dates and yes/no flags.

use chrono::{Datelike, NaiveDate};

use crate::errors::EngineError;

/// Normalizes a free-text block (banner, note, summary, description, responsibilities).
///
/// Trailing whitespace is trimmed from every line and purely blank lines are dropped,
/// which also collapses leading and trailing blank lines. Returns `None` when nothing
/// is left.
pub fn normalize_block<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    let kept: Vec<&str> = lines
        .iter()
        .map(|l| l.as_ref().trim_end())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("\n"))
    }
}

/// Same normalization applied to a value that arrives as one string (e.g. from JSON).
pub fn normalize_text(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    normalize_block(&lines)
}

/// Trims a single-line value; empty values are treated as absent.
pub fn clean_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Years a `MM/YYYY` date can carry.
pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Parses `MM/YYYY` into the first day of that month.
pub fn parse_month_year(label: &str, value: &str) -> Result<NaiveDate, EngineError> {
    let value = value.trim();
    let (month, year) = value.split_once('/').ok_or_else(|| {
        EngineError::validation(format!("{label}: expected MM/YYYY, got '{value}'"))
    })?;

    let month: u32 = month.trim().parse().map_err(|_| {
        EngineError::validation(format!("{label}: invalid month in '{value}'"))
    })?;
    let year: i32 = year.trim().parse().map_err(|_| {
        EngineError::validation(format!("{label}: invalid year in '{value}'"))
    })?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(EngineError::validation(format!(
            "{label}: year must have four digits, got '{value}'"
        )));
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::validation(format!("{label}: month out of range in '{value}'"))
    })
}

/// Renders a date as `MM/YYYY`.
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{:02}/{:04}", date.month(), date.year())
}

/// Parses a case-insensitive `yes`/`no` literal.
pub fn parse_yes_no(label: &str, value: &str) -> Result<bool, EngineError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(EngineError::validation(format!(
            "{label}: expected 'Yes' or 'No', got '{other}'"
        ))),
    }
}

pub fn format_yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_block_collapses_blank_lines() {
        let lines = ["", "  ", "First line  ", "", "Second line", "", ""];
        assert_eq!(
            normalize_block(&lines),
            Some("First line\nSecond line".to_string())
        );
    }

    #[test]
    fn test_normalize_block_keeps_indentation() {
        let lines = ["  indented", "flush"];
        assert_eq!(
            normalize_block(&lines),
            Some("  indented\nflush".to_string())
        );
    }

    #[test]
    fn test_normalize_block_all_blank_is_none() {
        let lines = ["", "   ", "\t"];
        assert_eq!(normalize_block(&lines), None);
    }

    #[test]
    fn test_normalize_text_matches_block_rule() {
        assert_eq!(
            normalize_text("\n\nBuilt things.\n\n\nShipped things.\n"),
            Some("Built things.\nShipped things.".to_string())
        );
    }

    #[test]
    fn test_parse_month_year() {
        let d = parse_month_year("Start date", "03/2021").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        let d = parse_month_year("Start date", " 7/2019 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap());
    }

    #[test]
    fn test_parse_month_year_rejects_garbage() {
        assert!(parse_month_year("Start date", "March 2021").is_err());
        assert!(parse_month_year("Start date", "13/2021").is_err());
        assert!(parse_month_year("Start date", "00/2021").is_err());
        assert!(parse_month_year("Start date", "03/21").is_err());
        assert!(parse_month_year("Start date", "2021-03").is_err());
    }

    #[test]
    fn test_format_month_year_pads() {
        let d = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap();
        assert_eq!(format_month_year(d), "07/2019");
    }

    #[test]
    fn test_yes_no() {
        assert!(parse_yes_no("Require sponsorship", "YES").unwrap());
        assert!(!parse_yes_no("Require sponsorship", "no").unwrap());
        let err = parse_yes_no("Require sponsorship", "maybe").unwrap_err();
        assert!(matches!(err, EngineError::FieldValidation(_)));
        assert_eq!(format_yes_no(true), "Yes");
    }
}
