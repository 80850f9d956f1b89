//! # Backend Configuration
//!
//! Household policies loaded from a small YAML file.
//!
//! ## YAML Format
//!
//! ```yaml
//! seed: demo              # demo | empty
//! xp_debit_policy: floor  # floor | reject
//! max_name_length: 100
//! ```
//!
//! Keys that are left out fall back to [`BackendConfig::default`].

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What happens when un-completing a chore would take a child below 0 XP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XpDebitPolicy {
    /// Clamp the balance at zero
    #[default]
    Floor,
    /// Refuse the change with `InsufficientXp`
    Reject,
}

/// Initial contents of the household. Nothing is persisted, so every start
/// reloads this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// The fixed demo household
    #[default]
    Demo,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub seed: SeedMode,
    pub xp_debit_policy: XpDebitPolicy,
    /// Upper bound (in characters) for child names, chore titles and reward names
    pub max_name_length: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            seed: SeedMode::Demo,
            xp_debit_policy: XpDebitPolicy::Floor,
            max_name_length: 100,
        }
    }
}

impl BackendConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: BackendConfig =
            serde_yaml::from_str(yaml).context("Failed to parse backend config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading backend config from {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Reject values no household could work with
    pub fn validate(&self) -> Result<()> {
        if self.max_name_length == 0 {
            return Err(anyhow::anyhow!("max_name_length must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.seed, SeedMode::Demo);
        assert_eq!(config.xp_debit_policy, XpDebitPolicy::Floor);
        assert_eq!(config.max_name_length, 100);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = "seed: demo\nxp_debit_policy: reject\nmax_name_length: 40\n";
        let config = BackendConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            BackendConfig {
                seed: SeedMode::Demo,
                xp_debit_policy: XpDebitPolicy::Reject,
                max_name_length: 40,
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = BackendConfig::from_yaml_str("seed: empty\n").unwrap();
        assert_eq!(config.seed, SeedMode::Empty);
        assert_eq!(config.xp_debit_policy, XpDebitPolicy::Floor);
        assert_eq!(config.max_name_length, 100);
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(BackendConfig::from_yaml_str("xp_debit_policy: sometimes\n").is_err());
        assert!(BackendConfig::from_yaml_str("max_name_length: 0\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed: demo").unwrap();
        writeln!(file, "xp_debit_policy: reject").unwrap();

        let config = BackendConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, SeedMode::Demo);
        assert_eq!(config.xp_debit_policy, XpDebitPolicy::Reject);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BackendConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
