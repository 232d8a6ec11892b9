use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn default_ui_scale() -> f32 {
    1.0
}

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

/// App chrome configuration stored on disk. Session state (active tab,
/// open modal) is deliberately not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Auto,
            ui_scale: 1.0,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(|appdata| {
                PathBuf::from(appdata).join("ComicFolio").join("config.json")
            })
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("comic-folio")
                    .join("config.json")
            })
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(&path, json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui_scale, 1.0);
    }

    #[test]
    fn test_theme_mode_parses_lowercase() {
        let config: AppConfig =
            serde_json::from_str(r#"{"theme_mode": "dark", "ui_scale": 1.25}"#).unwrap();
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert_eq!(config.ui_scale, 1.25);
    }
}
