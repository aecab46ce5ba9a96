//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub reveal_stagger_ms: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Delay between successive card reveals on startup.
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 150;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None = use the built-in featured list.
    pub catalog_file: Option<PathBuf>,
    pub reveal_stagger_ms: u64,
    pub log_level: LevelFilter,
}

/// Values taken from command-line flags (None/false = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub catalog: Option<&'a Path>,
    pub no_animation: bool,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FolioConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "books.json"      # JSON list of books; relative to ~/.folio/
# reveal_stagger_ms = 150          # Delay between card reveals, 0 disables
# log_level = "debug"              # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config (relative to ~/.folio/) → built-in
    let catalog_file = cli
        .catalog
        .map(Path::to_path_buf)
        .or_else(|| env("FOLIO_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog_file.as_deref().map(config_relative));

    // Stagger: --no-animation → env → config → default
    let reveal_stagger_ms = if cli.no_animation {
        0
    } else {
        env("FOLIO_REVEAL_STAGGER_MS")
            .and_then(|v| match v.parse() {
                Ok(ms) => Some(ms),
                Err(e) => {
                    warn!("Ignoring FOLIO_REVEAL_STAGGER_MS={:?}: {}", v, e);
                    None
                }
            })
            .or(config.general.reveal_stagger_ms)
            .unwrap_or(DEFAULT_REVEAL_STAGGER_MS)
    };

    // Log level: env → config → default
    let log_level = env("FOLIO_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}", level);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        catalog_file,
        reveal_stagger_ms,
        log_level,
    }
}

/// Relative catalog paths in the config file are anchored at `~/.folio/`.
fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".folio").join(path),
        None => path,
    }
}
