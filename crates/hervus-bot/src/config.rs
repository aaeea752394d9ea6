//! Bot settings loaded from TOML.

use anyhow::{bail, Context, Result};
use hervus_logic::config::{validate_config, NavigationConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "hervus.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Name sent to the engine during the handshake.
    pub name: String,
    /// `env_logger` filter, overridden by `RUST_LOG`.
    pub log_level: String,
    pub navigation: NavigationConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "hervus3".to_string(),
            log_level: "info".to_string(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl BotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Explicit path if given, else `hervus.toml` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let errors = validate_config(&self.navigation);
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("invalid navigation config: {joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: BotConfig = toml::from_str(
            r#"
            name = "tester"

            [navigation]
            max_speed = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "tester");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.navigation.max_speed, 5);
        assert_eq!(
            config.navigation.max_navigation_corrections,
            NavigationConfig::default().max_navigation_corrections
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_navigation_is_rejected() {
        let mut config = BotConfig::default();
        config.navigation.max_speed = 0;
        config.navigation.max_navigation_corrections = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.starts_with("invalid navigation config"));
        assert!(err.contains("; "));
    }

    #[test]
    fn unknown_field_types_fail_to_parse() {
        assert!(toml::from_str::<BotConfig>("name = 3").is_err());
    }
}
