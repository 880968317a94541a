// barky Settings Engine
// Loads and saves user settings as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::Settings;

/// Environment variable that replaces `database_path` when set.
pub const DB_PATH_ENV: &str = "BARKY_DB_PATH";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<Settings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &Settings;
    fn set_settings(&mut self, settings: Settings) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: Settings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Applies environment overrides on top of the loaded settings.
    ///
    /// `var` looks up a variable by name; `main` passes `std::env::var`.
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            info!(path = %path, "database path overridden by {}", DB_PATH_ENV);
            self.settings.database_path = path;
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults. Fields absent from the file keep their
    /// default values, as does a blank `database_path`; malformed JSON is a
    /// serialization error.
    fn load(&mut self) -> Result<Settings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = Settings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        if settings.database_path.trim().is_empty() {
            warn!(path = %self.config_path, "blank database_path, using default");
            settings.database_path = Settings::default().database_path;
        }
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file, creating parent
    /// directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings and saves them to disk immediately.
    fn set_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
