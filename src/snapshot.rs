//! Periodic population snapshots.
//!
//! Every `interval` ticks the writer drops a small JSON document with the
//! per-species live counts into `<output_dir>/<scenario>/tick_NNNNNN.json`.
//! This is run reporting, not state persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::simulator::{SpeciesCount, TickSummary};

#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Zero disables snapshots.
    pub interval: u64,
    pub output_dir: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            interval: 50,
            output_dir: PathBuf::from("snapshots"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SnapshotDoc<'a> {
    scenario: &'a str,
    tick: u64,
    counts: &'a [SpeciesCount],
}

pub struct SnapshotWriter {
    config: SnapshotConfig,
}

impl SnapshotWriter {
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    /// Write a snapshot if this tick falls on the configured interval.
    /// Returns the path written, if any.
    pub fn maybe_write(
        &self,
        scenario_name: &str,
        summary: &TickSummary,
    ) -> Result<Option<PathBuf>, SnapshotError> {
        if self.config.interval == 0 || summary.tick % self.config.interval != 0 {
            return Ok(None);
        }
        let dir = Path::new(&self.config.output_dir).join(scenario_name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("tick_{:06}.json", summary.tick));
        let doc = SnapshotDoc {
            scenario: scenario_name,
            tick: summary.tick,
            counts: &summary.counts,
        };
        fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
        Ok(Some(path))
    }
}
