//! Persisted settings
//!
//! Read from an optional TOML file; command-line flags win over file values.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use inspector_lib::tree::DEFAULT_EXPAND_LEVEL;
use inspector_lib::ExpandPaths;
use log::{LevelFilter, debug};
use serde::Deserialize;

use crate::cli::Cli;
use crate::paths;

/// Settings-related errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which inspector shows the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Object,
    Dom,
    Table,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mode: Mode,
    pub name: Option<String>,
    pub expand_level: i32,
    pub expand_paths: ExpandPaths,
    pub show_non_enumerable: bool,
    pub sort_keys: bool,
    pub columns: Option<Vec<String>>,
    pub theme: ThemeChoice,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            name: None,
            expand_level: DEFAULT_EXPAND_LEVEL,
            expand_paths: ExpandPaths::none(),
            show_non_enumerable: false,
            sort_keys: false,
            columns: None,
            theme: ThemeChoice::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match paths::config_file() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        debug!("Loading settings from {}", path.display());

        let text = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text).map_err(|source| SettingsError::Parse { path, source })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Override file values with the flags given on the command line.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(name) = &cli.name {
            self.name = Some(name.clone());
        }
        if let Some(level) = cli.expand_level {
            self.expand_level = level;
        }
        for path in &cli.expand_paths {
            self.expand_paths.push(path.clone());
        }
        self.show_non_enumerable |= cli.show_non_enumerable;
        self.sort_keys |= cli.sort_keys;
        if let Some(columns) = &cli.columns {
            self.columns = Some(columns.clone());
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }
}
