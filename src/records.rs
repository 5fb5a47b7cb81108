//! Best-levels table
//!
//! Keeps the top 10 runs by level reached (ties broken by survival time)
//! and persists them as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of records to keep
pub const MAX_RECORDS: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Level the run ended on
    pub level: u32,
    /// Ticks survived in that run
    pub ticks: u64,
    /// Seed of the session the run belonged to
    pub seed: u64,
}

impl LevelRecord {
    /// Whether `self` ranks strictly above `other`
    fn beats(&self, other: &LevelRecord) -> bool {
        (self.level, self.ticks) > (other.level, other.ticks)
    }
}

/// Leaderboard of best runs, sorted best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelRecords {
    pub entries: Vec<LevelRecord>,
}

impl LevelRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank a run would achieve (1-indexed), None if it doesn't qualify
    pub fn potential_rank(&self, record: &LevelRecord) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| record.beats(e))
            .unwrap_or(self.entries.len());
        (pos < MAX_RECORDS).then_some(pos + 1)
    }

    /// Insert a run if it qualifies, returning its rank
    pub fn add(&mut self, record: LevelRecord) -> Option<usize> {
        let rank = self.potential_rank(&record)?;
        self.entries.insert(rank - 1, record);
        self.entries.truncate(MAX_RECORDS);
        Some(rank)
    }

    pub fn best_level(&self) -> Option<u32> {
        self.entries.first().map(|e| e.level)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load records from `path`. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No records found, starting fresh");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Self = serde_json::from_str(&json).map_err(|source| Error::Records {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded {} records", records.entries.len());
        Ok(records)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Encode {
            what: "records",
            source,
        })?;
        fs::write(path, json)?;
        log::info!("Records saved ({} entries)", self.entries.len());
        Ok(())
    }
}
