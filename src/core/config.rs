//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.streamlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::page::HOME_PATH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StreamListConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "streamlist.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const PATH_ENV_VAR: &str = "STREAMLIST_PATH";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub initial_path: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Deferred Diagnostics
// ============================================================================

/// Log lines raised while loading config.
///
/// The logger's file and level come from the config itself, so these are
/// held until `main` has initialized it and then flushed.
#[derive(Debug, Default)]
pub struct ConfigNotes(Vec<(Level, String)>);

impl ConfigNotes {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, level: Level, message: String) {
        self.0.push((level, message));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.0
    }

    /// Forward every held line to the `log` facade, oldest first.
    pub fn flush(self) {
        for (level, message) in self.0 {
            log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.streamlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".streamlist").join("config.toml"))
}

/// Load config from `~/.streamlist/config.toml`.
pub fn load_config(notes: &mut ConfigNotes) -> Result<StreamListConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, notes),
        None => {
            notes.push(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            Ok(StreamListConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StreamListConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(
    path: &Path,
    notes: &mut ConfigNotes,
) -> Result<StreamListConfig, ConfigError> {
    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notes);
        return Ok(StreamListConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: StreamListConfig = toml::from_str(&contents)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut ConfigNotes) {
    let default_content = r#"# StreamList Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_path = "/"                 # Or set STREAMLIST_PATH, or pass --path

# [logging]
# file = "streamlist.log"
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {}", e));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(Level::Warn, format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_path` is the `--path` flag (None = not specified).
pub fn resolve(
    config: &StreamListConfig,
    cli_path: Option<&str>,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    resolve_with_env(config, cli_path, std::env::var(PATH_ENV_VAR).ok(), notes)
}

fn resolve_with_env(
    config: &StreamListConfig,
    cli_path: Option<&str>,
    env_path: Option<String>,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    // Initial path: CLI → env → config → default
    let initial_path = cli_path
        .map(|s| s.to_string())
        .or(env_path)
        .or_else(|| config.general.initial_path.clone())
        .unwrap_or_else(|| HOME_PATH.to_string());

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = match config.logging.level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            notes.push(
                Level::Warn,
                format!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL),
            );
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        initial_path,
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = StreamListConfig::default();
        assert!(config.general.initial_path.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = StreamListConfig::default();
        let resolved = resolve_with_env(&config, None, None, &mut ConfigNotes::new());
        assert_eq!(resolved.initial_path, "/");
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = StreamListConfig {
            general: GeneralConfig {
                initial_path: Some("/movies".to_string()),
            },
            logging: LoggingConfig {
                file: Some("/tmp/sl.log".to_string()),
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, None, None, &mut ConfigNotes::new());
        assert_eq!(resolved.initial_path, "/movies");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/sl.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = StreamListConfig {
            general: GeneralConfig {
                initial_path: Some("/movies".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(
            &config,
            None,
            Some("/cart".to_string()),
            &mut ConfigNotes::new(),
        );
        assert_eq!(resolved.initial_path, "/cart");
    }

    #[test]
    fn test_resolve_cli_path_wins() {
        let config = StreamListConfig {
            general: GeneralConfig {
                initial_path: Some("/movies".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(
            &config,
            Some("/about"),
            Some("/cart".to_string()),
            &mut ConfigNotes::new(),
        );
        assert_eq!(resolved.initial_path, "/about");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = StreamListConfig {
            logging: LoggingConfig {
                level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut notes = ConfigNotes::new();
        let resolved = resolve_with_env(&config, None, None, &mut notes);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(notes.entries().len(), 1);
        assert_eq!(notes.entries()[0].0, Level::Warn);
        assert!(notes.entries()[0].1.contains("loud"));
    }

    #[test]
    fn test_toml_full_file() {
        let toml_str = r#"
[general]
initial_path = "/cart"

[logging]
file = "custom.log"
level = "info"
"#;
        let config: StreamListConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.initial_path.as_deref(), Some("/cart"));
        assert_eq!(config.logging.file.as_deref(), Some("custom.log"));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[logging]
level = "trace"
"#;
        let config: StreamListConfig = toml::from_str(toml_str).unwrap();
        assert!(config.general.initial_path.is_none());
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut notes = ConfigNotes::new();
        let config = load_config_from(&path, &mut notes).unwrap();
        assert!(config.general.initial_path.is_none());
        assert!(path.exists());

        // The generated file is fully commented out, so it parses back to defaults
        let reloaded = load_config_from(&path, &mut notes).unwrap();
        assert!(reloaded.general.initial_path.is_none());
        assert!(reloaded.logging.level.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\ninitial_path = ").unwrap();

        let err = load_config_from(&path, &mut ConfigNotes::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_load_notes_held_until_flushed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut notes = ConfigNotes::new();
        load_config_from(&path, &mut notes).unwrap();
        assert_eq!(notes.entries().len(), 1);
        assert_eq!(notes.entries()[0].0, Level::Info);
        assert!(notes.entries()[0].1.contains("generating default"));

        load_config_from(&path, &mut notes).unwrap();
        let messages: Vec<&str> = notes.entries().iter().map(|(_, m)| m.as_str()).collect();
        assert!(messages[1].starts_with("Loaded config from"));
        assert!(messages[2].starts_with("Config: "));

        // No logger installed in tests; flushing must still be safe
        notes.flush();
    }
}
