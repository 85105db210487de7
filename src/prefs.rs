/// Persisted UI preferences.
///
/// A single boolean — dark theme on or off — survives across sessions in a
/// small JSON file under the user's config directory. It is read once at
/// startup and written back whenever the user toggles the theme. Nothing
/// in the fetch/derive pipeline depends on it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    /// Location of the preference file, created on demand.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("teide_status");
        fs::create_dir_all(&path).ok();
        path.push("prefs.json");
        path
    }

    /// Load persisted preferences from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path, falling back to defaults when the file
    /// is missing or unreadable. A corrupt preference file is not worth
    /// failing startup over.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Persist to the default location.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}
