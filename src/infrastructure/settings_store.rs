// SPDX-License-Identifier: MPL-2.0
//! [`PreferenceStore`] adapter backed by the `settings.toml` config file.
//!
//! The store only answers for the theme preference key; any other key reads
//! as absent. Read and write failures degrade to "no saved preference" and
//! a skipped save respectively, matching the storage-unavailability policy.

use crate::application::port::PreferenceStore;
use crate::config::{self, Config};
use crate::theme::THEME_STORAGE_KEY;
use std::path::PathBuf;

/// File-backed preference store.
///
/// With no path override it reads and writes the platform config location;
/// tests construct it with [`SettingsStore::at_path`] instead.
#[derive(Debug, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store reading and writing a specific file instead of the platform
    /// config directory.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn load(&self) -> Config {
        let result = match &self.path {
            Some(path) if path.exists() => config::load_from_path(path),
            Some(_) => Ok(Config::default()),
            None => config::load(),
        };
        result.unwrap_or_default()
    }

    fn save(&self, cfg: &Config) {
        let result = match &self.path {
            Some(path) => config::save_to_path(cfg, path),
            None => config::save(cfg),
        };
        if let Err(error) = result {
            eprintln!("Failed to save config: {:?}", error);
        }
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        if key != THEME_STORAGE_KEY {
            return None;
        }
        self.load().theme
    }

    fn set(&mut self, key: &str, value: &str) {
        if key != THEME_STORAGE_KEY {
            return;
        }
        let mut cfg = self.load();
        cfg.theme = Some(value.to_string());
        self.save(&cfg);
    }
}
