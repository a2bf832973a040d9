//! Grid settings loaded from a JSON file.
//!
//! The settings file lives at `<config dir>/dotbox/settings.json`:
//!
//! ```json
//! { "columns": 8, "rows": 8, "mode": "press-release" }
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::error::GridResult;
use crate::geometry::GridGeometry;
use crate::grid::DotGrid;
use crate::selection::InteractionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    pub columns: i32,
    pub rows: i32,
    pub mode: InteractionMode,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            mode: InteractionMode::default(),
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dotbox").join("settings.json"))
}

impl GridSettings {
    /// Load from the default path, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(?path, "No settings file, using defaults");
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!(?path, "Failed to load settings, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> GridResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> GridResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn geometry(&self) -> GridResult<GridGeometry> {
        GridGeometry::new(self.columns, self.rows)
    }

    /// Build a grid instance from these settings.
    pub fn build_grid(&self) -> GridResult<DotGrid> {
        Ok(DotGrid::new(self.geometry()?, self.mode))
    }
}
