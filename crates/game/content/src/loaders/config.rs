//! Balance table loader.

use std::path::Path;

use anyhow::Context;
use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ArenaConfig`] from TOML files.
///
/// Sections and fields missing from the file keep their defaults, so a file
/// only needs to name what it overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid arena config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "arena config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig =
            toml::from_str(content).context("Failed to parse arena config TOML")?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ArenaConfig::default());
    }

    #[test]
    fn partial_sections_override_single_fields() {
        let config = ConfigLoader::parse(
            r#"
            [economy]
            starting_money = 500

            [contract]
            auto_renew = false
            "#,
        )
        .unwrap();
        assert_eq!(config.economy.starting_money, 500);
        assert_eq!(config.economy.daily_upkeep, 10);
        assert!(!config.contract.auto_renew);
        assert_eq!(config.contract.daily_wage, 5);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = ConfigLoader::parse("[injury]\nwinner_chance = 2.0\n").unwrap_err();
        assert!(err.to_string().contains("winner_chance"));
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(ConfigLoader::parse("[combat\n").is_err());
    }
}
