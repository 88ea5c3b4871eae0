//! Recently used languages
//!
//! Ordered most-recent-first, deduplicated, capped. The front-end keeps
//! this in browser local storage; here it lives next to the settings
//! file in the project data dir.

use crate::shared::error::{AppError, AppResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Maximum number of recent languages to remember
const MAX_RECENT: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentLanguages {
    codes: Vec<String>,
}

impl RecentLanguages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a language as most recently used. Re-adding an existing
    /// code moves it to the front without duplicating it.
    pub fn add(&mut self, code: impl Into<String>) {
        let code = code.into();
        self.codes.retain(|c| *c != code);
        self.codes.insert(0, code);
        self.codes.truncate(MAX_RECENT);
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Disk persistence for the recent-languages list.
pub struct RecentStore;

impl RecentStore {
    fn path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "langslate", "langslate")
            .map(|dirs| dirs.data_dir().join("recent-languages.json"))
            .ok_or_else(|| AppError::Io("Failed to determine data directory".to_string()))
    }

    pub async fn load() -> AppResult<RecentLanguages> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(RecentLanguages::new());
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(recent: &RecentLanguages) -> AppResult<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string(recent)?;
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut recent = RecentLanguages::new();
        recent.add("en");
        recent.add("fr");
        assert_eq!(recent.codes(), ["fr", "en"]);
    }

    #[test]
    fn re_adding_moves_to_front_without_duplicate() {
        let mut recent = RecentLanguages::new();
        recent.add("en");
        recent.add("fr");
        recent.add("en");
        assert_eq!(recent.codes(), ["en", "fr"]);
    }

    #[test]
    fn adding_same_code_twice_keeps_single_entry() {
        let mut recent = RecentLanguages::new();
        recent.add("de");
        recent.add("de");
        assert_eq!(recent.codes(), ["de"]);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut recent = RecentLanguages::new();
        for code in ["en", "es", "fr", "de", "it", "pt", "ru"] {
            recent.add(code);
        }
        assert_eq!(recent.codes().len(), 5);
        assert_eq!(recent.codes(), ["ru", "pt", "it", "de", "fr"]);
    }

    #[test]
    fn round_trips_as_json() {
        let mut recent = RecentLanguages::new();
        recent.add("ja");
        recent.add("ko");
        let json = serde_json::to_string(&recent).unwrap();
        let parsed: RecentLanguages = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.codes(), recent.codes());
    }
}
