use serde::{Deserialize, Serialize};

use crate::platform;

/// User-level settings for barky, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Path of the SQLite file holding the bookmarks.
    pub database_path: String,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: platform::get_data_dir()
                .join("bookmarks.db")
                .to_string_lossy()
                .to_string(),
            log_level: "warn".to_string(),
        }
    }
}
