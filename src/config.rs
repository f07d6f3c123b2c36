//! Configuration management for spacey-steps.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. `<config dir>/spacey-steps/config.toml`
//! 2. `.spacey-steps.toml` in the working directory
//! 3. `SPACEY_STEPS_*` environment variables
//! 4. Command line flags

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".spacey-steps.toml";

const ENV_PREFIX: &str = "SPACEY_STEPS_";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format for analysis results
    pub format: OutputFormat,

    /// Whether output is colored
    pub color: bool,

    /// Default tracing filter
    pub log_level: String,

    /// Number of REPL history entries kept
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            log_level: "warn".to_string(),
            history_size: 1000,
        }
    }
}

/// One configuration file; every key is optional and unknown keys are errors.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    format: Option<OutputFormat>,
    color: Option<bool>,
    log_level: Option<String>,
    history_size: Option<usize>,
}

impl Config {
    /// Load configuration from every layer, finishing with `cli`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = global_config_path() {
            if path.exists() {
                config.merge_from_file(&path)?;
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            config.merge_from_file(&local)?;
        }

        config.load_from_env(std::env::vars())?;
        config.apply_cli(cli);

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Merge settings from a TOML file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;

        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(log_level) = file.log_level {
            self.log_level = log_level;
        }
        if let Some(history_size) = file.history_size {
            self.history_size = history_size;
        }

        Ok(())
    }

    /// Apply `SPACEY_STEPS_*` variables from `vars`.
    pub fn load_from_env(&mut self, vars: impl IntoIterator<Item = (String, String)>) -> Result<()> {
        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                self.set(&name.to_ascii_lowercase(), &value)?;
            }
        }
        Ok(())
    }

    /// Set a configuration value from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "format" => {
                self.format = value
                    .parse()
                    .map_err(|e: String| CliError::config_value(key, e))?;
            }
            "color" => self.color = parse_bool(value).ok_or_else(|| {
                CliError::config_value(key, format!("expected a boolean, got '{}'", value))
            })?,
            "log_level" => self.log_level = value.to_string(),
            "history_size" => {
                self.history_size = value.trim().parse().map_err(|_| {
                    CliError::config_value(key, format!("expected a number, got '{}'", value))
                })?;
            }
            _ => return Err(CliError::config_value(key, "unknown configuration key")),
        }
        Ok(())
    }

    /// Apply command line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_color {
            self.color = false;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get the user config path.
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("spacey-steps").join("config.toml"))
}
