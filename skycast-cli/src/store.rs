use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use skycast_core::SearchCompletion;

/// Locations the user has saved from search results, with an optional
/// default. Stored on disk as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavedLocations {
    /// Queried when the user does not name a place on the command line.
    pub default: Option<SearchCompletion>,

    /// Everything ever saved, in save order.
    pub saved: Vec<SearchCompletion>,
}

impl SavedLocations {
    /// Load the store from disk, or return an empty one if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::store_file_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no store file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read location store: {}", path.display()))?;

        let store: SavedLocations = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse location store: {}", path.display()))?;

        Ok(store)
    }

    /// Save the store to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_file_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize the location store")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write location store: {}", path.display()))?;

        Ok(())
    }

    /// Path to the store file.
    pub fn store_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("locations.json"))
    }

    /// Add a completion; saving an already-known id is a no-op.
    pub fn add(&mut self, completion: SearchCompletion) -> bool {
        if self.saved.iter().any(|c| c.id == completion.id) {
            return false;
        }
        self.saved.push(completion);
        true
    }

    /// Remove saved locations by name, case-insensitively. A default that
    /// pointed at a removed entry is cleared too. Returns how many entries
    /// went away.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.saved.len();
        self.saved.retain(|c| !c.name.eq_ignore_ascii_case(name));

        if self
            .default
            .as_ref()
            .is_some_and(|d| d.name.eq_ignore_ascii_case(name))
        {
            self.default = None;
        }

        before - self.saved.len()
    }

    /// Make a completion the default, saving it as well if it's new.
    pub fn set_default(&mut self, completion: SearchCompletion) {
        self.add(completion.clone());
        self.default = Some(completion);
    }
}
