// barky services
// Long-lived components that are not commands: settings persistence.

pub mod settings_engine;
