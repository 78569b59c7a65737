use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use log::warn;

use crate::models::Plant;

/// The single JSON file holding the full plant list. Every save rewrites the
/// whole collection.
pub struct PlantFile {
    path: PathBuf,
}

impl PlantFile {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data directory {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read and decode the file. A missing file is an empty list; any other
    /// failure is surfaced.
    pub fn load(&self) -> Result<Vec<Plant>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read plants from {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to decode plants from {}", self.path.display()))
    }

    /// The degrade-to-empty policy: unreadable or corrupt files log a warning
    /// and start the list clean instead of failing store construction.
    pub fn load_or_default(&self) -> Vec<Plant> {
        match self.load() {
            Ok(plants) => plants,
            Err(err) => {
                warn!("starting with an empty plant list: {err:#}");
                Vec::new()
            }
        }
    }

    /// Serialize the full list and swap it into place via a temp sibling, so
    /// a crash mid-write leaves the previous file intact.
    pub fn save(&self, plants: &[Plant]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(plants)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)
            .with_context(|| format!("failed to write plants to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))
    }
}

/// Default location of the plant file, under the per-user data directory.
pub fn default_plant_file() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("no user data directory available"))?;
    Ok(data_dir.join("sprout").join("plants.json"))
}
