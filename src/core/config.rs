//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wayfinder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StartScreen;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WayfinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<StartScreen>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub sort_by_distance: Option<bool>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_screen: Option<StartScreen>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE_NAME: &str = "logs.txt";
/// Used when there is no home directory to put the log under.
pub const FALLBACK_LOG_FILE: &str = "wayfinder.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: StartScreen,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub sort_by_distance: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.wayfinder/`.
pub fn wayfinder_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wayfinder"))
}

/// Returns the path to `~/.wayfinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    wayfinder_dir().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from. Loading runs before the logger is
/// installed, so callers log this afterwards with [`ConfigSource::log`].
#[derive(Debug)]
pub enum ConfigSource {
    NoHome,
    Loaded(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::NoHome => warn!("Could not determine home directory, using default config"),
            ConfigSource::Loaded(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
        }
    }
}

/// Load config from `~/.wayfinder/config.toml`.
pub fn load_config() -> Result<(WayfinderConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((WayfinderConfig::default(), ConfigSource::NoHome)),
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WayfinderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<(WayfinderConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed(path.to_path_buf(), e),
        };
        return Ok((WayfinderConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigSource::Loaded(path.to_path_buf())))
}

pub fn parse_config(contents: &str) -> Result<WayfinderConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Wayfinder Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "welcome"           # "welcome", "dashboard" or "search"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "/home/me/.wayfinder/logs.txt"

# [search]
# sort_by_distance = false           # start the search screen sorted nearest-first
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WayfinderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &WayfinderConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let start_screen = cli
        .start_screen
        .or_else(|| {
            env("WAYFINDER_START_SCREEN").and_then(|s| StartScreen::from_str(&s, true).ok())
        })
        .or(config.general.start_screen)
        .unwrap_or_default();

    // Log level: env → config → default. Unparseable values are ignored.
    let log_level = env("WAYFINDER_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → ~/.wayfinder/logs.txt
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("WAYFINDER_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_log_file);

    ResolvedConfig {
        start_screen,
        log_level,
        log_file,
        sort_by_distance: config.search.sort_by_distance.unwrap_or(false),
    }
}

fn default_log_file() -> PathBuf {
    wayfinder_dir()
        .map(|d| d.join(DEFAULT_LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("wayfinder-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = WayfinderConfig::default();
        assert!(config.general.start_screen.is_none());
        assert!(config.search.sort_by_distance.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&WayfinderConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_screen, StartScreen::Welcome);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert!(!resolved.sort_by_distance);
        assert!(
            resolved.log_file.ends_with(DEFAULT_LOG_FILE_NAME)
                || resolved.log_file.ends_with(FALLBACK_LOG_FILE)
        );
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WayfinderConfig {
            general: GeneralConfig {
                start_screen: Some(StartScreen::Search),
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/wayfinder-test.log".to_string()),
            },
            search: SearchConfig {
                sort_by_distance: Some(true),
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_screen, StartScreen::Search);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/wayfinder-test.log"));
        assert!(resolved.sort_by_distance);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = WayfinderConfig {
            general: GeneralConfig {
                start_screen: Some(StartScreen::Search),
                log_file: Some("/tmp/from-config.log".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            start_screen: Some(StartScreen::Dashboard),
            log_file: Some(PathBuf::from("/tmp/from-cli.log")),
        };
        let resolved = resolve_with(&config, &cli, no_env);
        assert_eq!(resolved.start_screen, StartScreen::Dashboard);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/from-cli.log"));
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = WayfinderConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
start_screen = "dashboard"
log_level = "info"

[search]
sort_by_distance = true
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.start_screen, Some(StartScreen::Dashboard));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert!(config.general.log_file.is_none());
        assert_eq!(config.search.sort_by_distance, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // One key set, everything else stays unset
        let config = parse_config("[search]\nsort_by_distance = false\n").unwrap();
        assert!(config.general.start_screen.is_none());
        assert_eq!(config.search.sort_by_distance, Some(false));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nstart_screen = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_unknown_start_screen_is_parse_error() {
        let err = parse_config("[general]\nstart_screen = \"lobby\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_config_but_not_cli() {
        let config = WayfinderConfig {
            general: GeneralConfig {
                start_screen: Some(StartScreen::Search),
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/from-config.log".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "WAYFINDER_START_SCREEN" => Some("Dashboard".to_string()),
            "WAYFINDER_LOG_LEVEL" => Some("trace".to_string()),
            "WAYFINDER_LOG_FILE" => Some("/tmp/from-env.log".to_string()),
            _ => None,
        };

        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_screen, StartScreen::Dashboard);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/from-env.log"));

        let cli = CliOverrides {
            start_screen: Some(StartScreen::Welcome),
            log_file: Some(PathBuf::from("/tmp/from-cli.log")),
        };
        let resolved = resolve_with(&config, &cli, env);
        assert_eq!(resolved.start_screen, StartScreen::Welcome);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/from-cli.log"));
    }

    #[test]
    fn test_unparseable_env_start_screen_is_ignored() {
        let env = |key: &str| (key == "WAYFINDER_START_SCREEN").then(|| "lobby".to_string());
        let resolved = resolve_with(&WayfinderConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.start_screen, StartScreen::Welcome);
    }

    #[test]
    fn test_first_load_generates_then_loads() {
        let path = scratch_path("first-run/config.toml");
        let _ = fs::remove_file(&path);

        let (config, source) = load_config_from(&path).unwrap();
        assert!(matches!(source, ConfigSource::Generated(ref p) if *p == path));
        assert!(config.general.start_screen.is_none());

        // Generated file is all comments, so it parses back to defaults
        let (config, source) = load_config_from(&path).unwrap();
        assert!(matches!(source, ConfigSource::Loaded(ref p) if *p == path));
        assert!(config.general.log_level.is_none());
        assert!(config.search.sort_by_distance.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = scratch_path("malformed/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_location_reports_generate_failure() {
        // A regular file standing where the config directory should be
        let blocker = scratch_path("blocker");
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let (config, source) = load_config_from(&path).unwrap();
        assert!(matches!(source, ConfigSource::GenerateFailed(..)));
        assert!(config.general.start_screen.is_none());
        let _ = fs::remove_file(&blocker);
    }
}
