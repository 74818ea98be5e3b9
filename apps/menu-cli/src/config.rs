//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --max 50 --format json                                             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MENU_MAX_SOLUTIONS=50   (0 or "unbounded" = no limit)              │
//! │     MENU_COUNT_ONLY=true                                               │
//! │     MENU_FORMAT=json                                                   │
//! │     MENU_INCLUDE_TREE=true                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, else                                                │
//! │     ~/.config/menu-knapsack/config.toml (Linux)                        │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     max 500, full enumeration, text output                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! max_solutions = 500   # 0 = unbounded
//! count_only = false
//! format = "text"       # text | json
//! include_tree = false
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use menu_core::DEFAULT_MAX_SOLUTIONS;

use crate::error::ConfigError;

// =============================================================================
// Output Format
// =============================================================================

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,

    /// The SolveResult as pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Largest acceptable number of combinations. 0 means unbounded.
    pub max_solutions: u64,

    /// Report counts only.
    pub count_only: bool,

    pub format: OutputFormat,

    /// Attach the partition tree to JSON output.
    pub include_tree: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            count_only: false,
            format: OutputFormat::Text,
            include_tree: false,
        }
    }
}

impl CliConfig {
    /// Loads defaults, then the config file, then environment overrides.
    ///
    /// An explicit `config_path` must exist; the default path is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `MENU_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(max) = lookup("MENU_MAX_SOLUTIONS") {
            self.max_solutions = parse_limit(&max)
                .ok_or_else(|| ConfigError::InvalidValue("MENU_MAX_SOLUTIONS".to_string()))?;
            debug!(max = self.max_solutions, "Overriding max solutions from environment");
        }

        if let Some(flag) = lookup("MENU_COUNT_ONLY") {
            self.count_only = parse_flag(&flag)
                .ok_or_else(|| ConfigError::InvalidValue("MENU_COUNT_ONLY".to_string()))?;
        }

        if let Some(format) = lookup("MENU_FORMAT") {
            self.format = format
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MENU_FORMAT".to_string()))?;
        }

        if let Some(flag) = lookup("MENU_INCLUDE_TREE") {
            self.include_tree = parse_flag(&flag)
                .ok_or_else(|| ConfigError::InvalidValue("MENU_INCLUDE_TREE".to_string()))?;
        }

        Ok(())
    }

    /// The limit as solver options expect it.
    pub fn max(&self) -> Option<u64> {
        (self.max_solutions != 0).then_some(self.max_solutions)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "menu-knapsack")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// `0`, `unbounded` and `none` all mean no limit.
fn parse_limit(value: &str) -> Option<u64> {
    match value.trim().to_lowercase().as_str() {
        "unbounded" | "none" => Some(0),
        other => other.parse().ok(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
