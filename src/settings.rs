/// Runtime settings for the status service.
///
/// Loaded from an optional `settings.toml`; every field has a default so
/// the file may be absent entirely. The `TEIDE_LOG_LEVEL` environment
/// variable takes precedence over the configured log level. Nothing in
/// here affects what is fetched or how it is derived — settings cover the
/// ambient concerns only.

use serde::Deserialize;
use std::env;
use std::error::Error;
use std::path::Path;

use crate::logging::{parse_level, LogLevel};

/// Default settings file, looked up next to the working directory.
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// Minimum log level: error | warn | info | debug.
    pub log_level: Option<String>,
    /// Append log entries to this file in addition to the console.
    pub log_file: Option<String>,
}

impl Settings {
    /// Load settings from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Resolve the effective log level: environment variable first, then
    /// the settings file, then `Info`. Unrecognised names fall back to the
    /// default rather than failing startup.
    pub fn resolved_log_level(&self) -> LogLevel {
        env::var("TEIDE_LOG_LEVEL")
            .ok()
            .as_deref()
            .or(self.log_level.as_deref())
            .and_then(parse_level)
            .unwrap_or(LogLevel::Info)
    }
}
