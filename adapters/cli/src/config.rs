use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use hive_planner_catalog::Catalog;
use hive_planner_core::Level;
use hive_planner_system_history::DEFAULT_MAX_HISTORY;
use serde::Deserialize;

/// Configuration file consulted when `--config` is not supplied.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "hive-planner.toml";
const DEFAULT_STORAGE_DIR: &str = ".hive-planner";

/// Settings loaded from the optional TOML configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PlannerConfig {
    /// Undo steps retained by the session.
    pub(crate) max_history: usize,
    /// Level given to newly placed bees, clamped into the valid range.
    pub(crate) default_level: i64,
    /// Whether newly placed bees start gifted.
    pub(crate) place_as_gifted: bool,
    /// Directory holding the live layout and saved configurations.
    pub(crate) storage_dir: PathBuf,
    /// Optional JSON document replacing the bundled bee catalog.
    pub(crate) catalog: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            default_level: i64::from(Level::DEFAULT.get()),
            place_as_gifted: false,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            catalog: None,
        }
    }
}

impl PlannerConfig {
    /// Loads the configuration from `explicit`, or from the default file when it exists.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    log::debug!("no configuration file found, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }

    /// Level assigned to palette drops.
    pub(crate) fn level(&self) -> Level {
        Level::clamped(self.default_level)
    }

    /// Builds the bee catalog, reading the configured override when present.
    pub(crate) fn catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::builtin());
        };

        let document = fs::read_to_string(path)
            .with_context(|| format!("failed to read bee catalog at {}", path.display()))?;
        let catalog = Catalog::from_json(&document)
            .with_context(|| format!("invalid bee catalog in {}", path.display()))?;
        log::debug!("loaded {} bees from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PlannerConfig::parse("").expect("empty config parses");
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.max_history, 50);
        assert_eq!(config.level(), Level::DEFAULT);
        assert_eq!(config.storage_dir, PathBuf::from(".hive-planner"));
    }

    #[test]
    fn partial_document_overrides_selected_keys() {
        let config = PlannerConfig::parse(
            r#"
                max_history = 5
                default_level = 40
                place_as_gifted = true
                catalog = "bees.json"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.max_history, 5);
        assert_eq!(config.level(), Level::clamped(25));
        assert!(config.place_as_gifted);
        assert_eq!(config.catalog, Some(PathBuf::from("bees.json")));
        assert_eq!(config.storage_dir, PathBuf::from(".hive-planner"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PlannerConfig::parse("max_histroy = 3").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = Path::new("definitely-missing-hive-planner.toml");
        assert!(PlannerConfig::load(Some(missing)).is_err());
    }
}
