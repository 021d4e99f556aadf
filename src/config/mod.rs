//! Configuration management for `quest_journal`.
//!
//! Configuration is layered, later layers winning:
//! - Built-in defaults (`quests.json`, priority Medium)
//! - YAML config file (`--config` / `QUEST_CONFIG`, else `.quest.yaml`)
//! - `--file` / `QUEST_FILE` for the journal path

use std::fs;
use std::path::{Path, PathBuf};

use quest_lib::Priority;
use serde::Deserialize;
use tracing::debug;

use crate::error::{QuestError, Result};

/// Journal file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "quests.json";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".quest.yaml";

/// Values taken from command-line flags (or their environment variables).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// On-disk config layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    file: Option<PathBuf>,
    default_priority: Option<String>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub default_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_priority: Priority::default(),
        }
    }
}

/// Resolve configuration relative to the working directory.
///
/// # Errors
///
/// Returns `Config` if a config file is named but missing, cannot be parsed,
/// or holds an invalid value.
pub fn load(overrides: &CliOverrides) -> Result<Config> {
    load_in(Path::new("."), overrides)
}

/// Resolve configuration, looking for the default config file in `base_dir`.
///
/// # Errors
///
/// See [`load`].
pub fn load_in(base_dir: &Path, overrides: &CliOverrides) -> Result<Config> {
    let mut config = Config {
        data_file: base_dir.join(DEFAULT_DATA_FILE),
        ..Config::default()
    };

    let config_path = match overrides.config {
        Some(ref explicit) => {
            if !explicit.is_file() {
                return Err(QuestError::config(format!(
                    "config file not found: {}",
                    explicit.display()
                )));
            }
            Some(explicit.clone())
        }
        None => Some(base_dir.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    };

    if let Some(path) = config_path {
        apply_file(&mut config, &path)?;
    }

    if let Some(ref file) = overrides.file {
        config.data_file.clone_from(file);
    }

    debug!(
        "Using journal {} (default priority {})",
        config.data_file.display(),
        config.default_priority
    );
    Ok(config)
}

fn apply_file(config: &mut Config, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(());
    }

    let parsed: ConfigFile = serde_yaml::from_str(&content)
        .map_err(|e| QuestError::config(format!("{}: {e}", path.display())))?;

    if let Some(file) = parsed.file {
        config.data_file = match path.parent() {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file,
        };
    }

    if let Some(priority) = parsed.default_priority {
        config.default_priority = priority
            .parse()
            .map_err(|e| QuestError::config(format!("default_priority: {e}")))?;
    }

    debug!("Loaded config from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_in(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.data_file, dir.path().join("quests.json"));
        assert_eq!(config.default_priority, Priority::Medium);
    }

    #[test]
    fn test_default_config_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "file: journal/quests.json\ndefault_priority: high\n",
        )
        .unwrap();

        let config = load_in(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.data_file, dir.path().join("journal/quests.json"));
        assert_eq!(config.default_priority, Priority::High);
    }

    #[test]
    fn test_file_override_beats_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "file: a.json\n").unwrap();

        let overrides = CliOverrides {
            file: Some(PathBuf::from("/tmp/b.json")),
            ..Default::default()
        };
        let config = load_in(dir.path(), &overrides).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/b.json"));
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "\n").unwrap();
        let config = load_in(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.default_priority, Priority::Medium);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliOverrides {
            config: Some(dir.path().join("nope.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            load_in(dir.path(), &overrides),
            Err(QuestError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_priority_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "default_priority: urgent\n",
        )
        .unwrap();
        let err = load_in(dir.path(), &CliOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("default_priority"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "colour: red\n").unwrap();
        assert!(load_in(dir.path(), &CliOverrides::default()).is_err());
    }
}
