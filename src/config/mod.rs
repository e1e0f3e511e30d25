//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! theme preference, form validation mode and the session flag that picks
//! the initial screen.

mod error;

pub use error::ConfigError;

use crate::form::{FormOptions, ValidationMode};
use crate::ui::Theme;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/ledger-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub validation_mode: ValidationMode,
    pub authenticated: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    theme_name: String,
    #[serde(default)]
    validation_mode: ValidationMode,
    #[serde(default)]
    authenticated: bool,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default settings.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            validation_mode: ValidationMode::default(),
            authenticated: false,
            file_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default directory otherwise. A missing file is created with the
    /// current settings; failing to create it is logged, not fatal.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), ConfigError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            debug!("Reading configuration from {}", file_path.display());
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            self.apply_yaml(&contents)?;
        } else {
            info!("Creating configuration file at {}", file_path.display());
            if let Err(e) = self.save() {
                error!("Failed to save config: {}", e);
            }
        }
        Ok(())
    }

    /// Overwrite the settings with those found in a YAML document. Missing
    /// keys fall back to their defaults.
    ///
    fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = if contents.trim().is_empty() {
            serde_yaml::from_str("{}")
        } else {
            serde_yaml::from_str(contents)
        }
        .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.validation_mode = data.validation_mode;
        self.authenticated = data.authenticated;
        Ok(())
    }

    /// Serialize the configuration and write it to the loaded file path.
    ///
    pub fn save(&self) -> Result<(), ConfigError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            validation_mode: self.validation_mode,
            authenticated: self.authenticated,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content)
            .and_then(|_| file.flush())
            .map_err(|e| ConfigError::SaveFailed {
                path: file_path.clone(),
                source: e,
            })?;
        Ok(())
    }

    /// Resolve the configured theme name.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name).ok_or_else(|| ConfigError::UnknownTheme {
            name: self.theme_name.clone(),
            available: Theme::available_themes().join(", "),
        })
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            validation_mode: self.validation_mode,
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
