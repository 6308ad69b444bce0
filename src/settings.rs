//! Persistence model and configuration IO.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Settings persisted to `settings.json`. The theme preference is the only
/// durable state the app keeps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Selected UI theme.
    pub theme: ThemeMode,
}

/// Build the settings path and ensure the directory exists.
fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "cv_viewer", "cv_viewer")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(SETTINGS_FILE))
}

/// Load settings from disk, returning defaults when missing or unreadable.
pub fn load() -> AppSettings {
    match settings_path() {
        Ok(path) => load_from(&path),
        Err(_) => AppSettings::default(),
    }
}

fn load_from(path: &Path) -> AppSettings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return AppSettings::default(),
    };
    serde_json::from_str(&contents).unwrap_or_default()
}

/// Persist settings to disk as pretty JSON.
pub fn save(settings: &AppSettings) -> Result<()> {
    save_to(&settings_path()?, settings)
}

fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_dark_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_from(&dir.path().join("absent.json"));
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_from(&path).theme, ThemeMode::Dark);
    }

    #[test]
    fn theme_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = AppSettings {
            theme: ThemeMode::Light,
        };
        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path).theme, ThemeMode::Light);
    }

    #[test]
    fn double_toggle_round_trips_the_persisted_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let mut settings = AppSettings::default();
        let original = settings.theme;
        for _ in 0..2 {
            settings.theme = settings.theme.toggled();
            save_to(&path, &settings).unwrap();
        }
        assert_eq!(load_from(&path).theme, original);
    }
}
