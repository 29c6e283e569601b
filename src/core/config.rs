//! # Configuration
//!
//! Settings for the `tabnav` host with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tabnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The navigation core itself takes no configuration; this only decides
//! which tabs the host registers and how it logs.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TabnavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub show_tabs: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TabEntry {
    pub id: String,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "tabnav.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_ICON: &str = "•";

fn default_tabs() -> Vec<TabEntry> {
    [
        ("Home", "⌂", "Start here. Press Enter to open a detail screen."),
        ("Search", "⌕", "Each tab keeps its own history. Switch away and back to see it."),
        ("Profile", "☺", "Press r to forward a result to the screen on top."),
    ]
    .into_iter()
    .map(|(id, icon, body)| TabEntry {
        id: id.to_string(),
        icon: Some(icon.to_string()),
        title: None,
        body: Some(body.to_string()),
    })
    .collect()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedTab {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub show_tabs: bool,
    pub tabs: Vec<ResolvedTab>,
}

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub hide_tabs: bool,
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

/// Returns the path to `~/.tabnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tabnav").join("config.toml"))
}

/// Load config from `~/.tabnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TabnavConfig::default()`.
pub fn load_config() -> Result<TabnavConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TabnavConfig::default())
        }
    }
}

/// Load config from an explicit path, generating the template if it is missing.
pub fn load_config_from(path: &Path) -> Result<TabnavConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TabnavConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TabnavConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tabnav Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "tabnav.log"            # Or set TABNAV_LOG_FILE
# log_level = "debug"                # off, error, warn, info, debug, trace (TABNAV_LOG_LEVEL)
# show_tabs = true                   # TABNAV_HIDE_TABS=1 or --hide-tabs hides the strip

# Tabs are shown in the order declared. The first one is active on start.
# [[tabs]]
# id = "Home"
# icon = "⌂"
# title = "Welcome"
# body = "Press Enter to open a detail screen."

# [[tabs]]
# id = "Search"
# icon = "⌕"
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
pub fn resolve(config: &TabnavConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading `TABNAV_*` variables through `env`.
pub fn resolve_with_env(
    config: &TabnavConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log file: env → config → default
    let log_file = env("TABNAV_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("TABNAV_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Tab strip: CLI flag or env hides it, otherwise config → default
    let env_hides = env("TABNAV_HIDE_TABS")
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "yes"));
    let show_tabs = !cli.hide_tabs && !env_hides && config.general.show_tabs.unwrap_or(true);

    let tabs = if config.tabs.is_empty() {
        default_tabs()
    } else {
        config.tabs.clone()
    };

    ResolvedConfig {
        log_file: PathBuf::from(log_file),
        log_level,
        show_tabs,
        tabs: tabs.into_iter().map(resolve_tab).collect(),
    }
}

fn resolve_tab(tab: TabEntry) -> ResolvedTab {
    ResolvedTab {
        icon: tab.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        title: tab.title.unwrap_or_else(|| tab.id.clone()),
        body: tab.body.unwrap_or_default(),
        id: tab.id,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', using default", level);
            None
        }
    }
}
