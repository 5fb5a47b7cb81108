//! Game settings and preferences
//!
//! Stored as JSON. Every field has a default, so a partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::error::{Error, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Silence every cue
    pub muted: bool,
    /// Ring the terminal bell on sound cues
    pub terminal_bell: bool,

    // === Loop ===
    /// Target tick rate; 0 runs unthrottled
    pub fps: u32,
    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,

    // === Records ===
    /// Where best levels are kept; records are not persisted when absent
    pub records_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            terminal_bell: false,

            fps: FPS,
            seed: None,

            records_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings = serde_json::from_str(&json).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
