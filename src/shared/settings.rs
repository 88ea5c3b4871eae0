use crate::shared::error::{AppError, AppResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPreferences {
    pub default_source_lang: String,
    pub default_target_lang: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_source_lang: "en".to_string(),
                default_target_lang: "es".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "langslate", "langslate")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_ui_state() {
        let settings = AppSettings::default();
        assert_eq!(settings.preferences.default_source_lang, "en");
        assert_eq!(settings.preferences.default_target_lang, "es");
    }

    #[test]
    fn settings_round_trip_json() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.preferences.default_target_lang,
            settings.preferences.default_target_lang
        );
    }
}
