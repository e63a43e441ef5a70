//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$CALC_CONFIG` environment variable
//! 2. `~/.config/calc/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub server: ServerConfig,
}

/// How results are entered and shown on the command line.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit of the operand given to sin/cos/tan. The engine itself only
    /// understands radians; degrees are converted before the request is built.
    pub angle_unit: AngleUnit,
    /// Print the full JSON response instead of the formatted value.
    pub json: bool,
}

/// JSON-RPC server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    /// Overrides the name reported in `initialize`.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Rad,
    Deg,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rad => write!(f, "rad"),
            Self::Deg => write!(f, "deg"),
        }
    }
}

// --- Defaults ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            name: None,
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) => load_config_from(&p),
        None => Ok(Config::default()),
    }
}

/// Load config from an explicit path. A missing file means defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("CALC_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/calc/config.toml
    if let Some(home) = dirs_home() {
        let p = home.join(".config").join("calc").join("config.toml");
        return Some(p);
    }

    None
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Show the active config path (for `calc config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
