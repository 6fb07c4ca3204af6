use anyhow::{bail, Context, Result};

use crate::markdown::serializer::{
    NotRelevantRolePolicy, RenderOptions, DEFAULT_NOT_RELEVANT_PLACEHOLDER,
};

/// Engine configuration loaded from environment variables.
/// Invalid values fail startup rather than falling back silently.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub not_relevant_roles: NotRelevantRolePolicy,
    pub not_relevant_placeholder: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let not_relevant_roles = match lookup("NOT_RELEVANT_ROLE_POLICY") {
            Some(raw) => parse_policy(&raw)
                .with_context(|| format!("Invalid NOT_RELEVANT_ROLE_POLICY '{raw}'"))?,
            None => NotRelevantRolePolicy::default(),
        };

        let not_relevant_placeholder = match lookup("NOT_RELEVANT_PLACEHOLDER") {
            Some(text) => single_line("NOT_RELEVANT_PLACEHOLDER", text)?,
            None => DEFAULT_NOT_RELEVANT_PLACEHOLDER.to_string(),
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            not_relevant_roles,
            not_relevant_placeholder,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            not_relevant_roles: self.not_relevant_roles,
            not_relevant_placeholder: self.not_relevant_placeholder.clone(),
        }
    }
}

fn parse_policy(raw: &str) -> Result<NotRelevantRolePolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "drop" | "drop_content" => Ok(NotRelevantRolePolicy::DropContent),
        "placeholder" => Ok(NotRelevantRolePolicy::Placeholder),
        other => bail!("expected 'drop' or 'placeholder', got '{other}'"),
    }
}

// The placeholder is written as a Responsibilities body, so it must stay one plain line.
fn single_line(key: &str, text: String) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('\n') || trimmed.starts_with('#') {
        bail!("{key} must be a single non-empty line that does not start with '#'");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.not_relevant_roles, NotRelevantRolePolicy::DropContent);
        assert_eq!(
            config.render_options().not_relevant_placeholder,
            DEFAULT_NOT_RELEVANT_PLACEHOLDER
        );
    }

    #[test]
    fn test_placeholder_policy() {
        let config = config_from(&[
            ("NOT_RELEVANT_ROLE_POLICY", "Placeholder"),
            ("NOT_RELEVANT_PLACEHOLDER", "  Omitted.  "),
        ])
        .unwrap();
        let options = config.render_options();
        assert_eq!(options.not_relevant_roles, NotRelevantRolePolicy::Placeholder);
        assert_eq!(options.not_relevant_placeholder, "Omitted.");
    }

    #[test]
    fn test_invalid_policy_fails() {
        let err = config_from(&[("NOT_RELEVANT_ROLE_POLICY", "hide")]).unwrap_err();
        assert!(format!("{err:#}").contains("NOT_RELEVANT_ROLE_POLICY"));
    }

    #[test]
    fn test_header_like_placeholder_fails() {
        assert!(config_from(&[("NOT_RELEVANT_PLACEHOLDER", "# Hidden")]).is_err());
        assert!(config_from(&[("NOT_RELEVANT_PLACEHOLDER", "a\nb")]).is_err());
    }
}
