//! barky — a terminal bookmark manager backed by SQLite.
//!
//! Entry point: loads settings, opens the bookmarks database, creates the
//! bookmarks table and runs the interactive menu on stdin/stdout.

use std::fs;
use std::io;
use std::path::Path;

use barky::commands::{Command, CreateBookmarksTableCommand};
use barky::database::Database;
use barky::menu::{self, Menu};
use barky::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    let load_result = settings_engine.load();
    settings_engine.apply_env_overrides(|key| std::env::var(key).ok());
    let settings = settings_engine.get_settings().clone();

    init_logging(&settings.log_level);
    if let Err(e) = load_result {
        tracing::warn!(error = %e, "falling back to default settings");
    }

    let db_path = Path::new(&settings.database_path);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let db = Database::open(db_path)?;
    info!(path = %settings.database_path, "database ready");

    CreateBookmarksTableCommand::new(&db).execute(None)?;

    let options = Menu::bookmarks(&db);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu::run(&options, &mut input, &mut out)?;
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` or else the configured level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("barky={}", default_level)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
