//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the generation state after each phase so the intermediate
//! entity descriptors and specs can be inspected.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use serde::Serialize;

use super::{Diagnostic, EntityRecord, GenerationContext, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Entities with their status, descriptor and artifacts so far.
    pub entities: Vec<EntityRecord>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(format!("{}.json", self.phase)), json)?;
        Ok(())
    }
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `smith bake --visualize`.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".smith/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    /// Collected snapshots.
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Output directory for snapshots.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to a directory, one `<phase>.json` each.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            snapshot.write(dir.as_ref())?;
        }
        Ok(())
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            entities: ctx.entities.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        // If output directory is configured, write immediately
        if let Some(dir) = &self.output_dir {
            snapshot.write(dir)?;
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{pipeline::Pipeline, testing};

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshot_plugin_writes_phases() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".smith").join("debug");

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(&dir))
            .run(testing::hr_manifest())
            .unwrap();

        let extract = fs::read_to_string(dir.join("extract.json")).unwrap();
        let build = fs::read_to_string(dir.join("build.json")).unwrap();
        let extract: serde_json::Value = serde_json::from_str(&extract).unwrap();
        let build: serde_json::Value = serde_json::from_str(&build).unwrap();

        assert_eq!(extract["phase"], "extract");
        assert_eq!(extract["entities"][0]["status"], "extracted");
        assert_eq!(build["entities"][0]["status"], "emitted");
        assert_eq!(build["entities"][0]["artifacts"][0]["spec"]["kind"], "dto");
    }
}
