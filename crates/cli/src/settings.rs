use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use facecluster_core::clustering::infrastructure::clusterer_factory::ClusterMethod;
use facecluster_core::shared::constants::{
    DEFAULT_DISTANCE_THRESHOLD, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED,
};

/// Clustering defaults persisted as JSON. Missing fields fall back to the
/// built-in defaults, so a settings file may set only what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub distance_threshold: f64,
    pub max_iterations: usize,
    pub method: ClusterMethod,
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            method: ClusterMethod::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("facecluster").join("settings.json"))
    }

    /// Loads from the platform config directory, silently using defaults
    /// when the file is absent or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Loads an explicitly named settings file; unlike [`Settings::load`]
    /// a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read settings {}: {e}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .map_err(|e| format!("Invalid settings {}: {e}", path.display()))?;
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        threshold: Option<f64>,
        method: Option<ClusterMethod>,
        iterations: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(t) = threshold {
            self.distance_threshold = t;
        }
        if let Some(m) = method {
            self.method = m;
        }
        if let Some(k) = iterations {
            self.max_iterations = k;
        }
        if let Some(s) = seed {
            self.seed = s;
        }
        self
    }
}
