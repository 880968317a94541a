//! barky — a terminal bookmark manager backed by SQLite.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod commands;
pub mod database;
pub mod menu;
pub mod platform;
pub mod services;
pub mod types;
