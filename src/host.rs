//! Host channels: cross-phase state and named outputs.
//!
//! The run and cleanup phases execute as two separate, non-overlapping
//! invocations of the same program, so the temp-dir path crosses the
//! process boundary through a small persisted state document rather than
//! any in-memory global. Both channels are plain files whose paths the
//! host supplies (`DRYDOCK_STATE`, `DRYDOCK_OUTPUT`); the transports are
//! treated as opaque and host-owned.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted state document shared between the run and cleanup phases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateDoc {
    /// Temp directory allocated by the run phase, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tmp_dir: Option<PathBuf>,
}

/// File-backed single-slot state store.
///
/// The slot is written once during the run phase and spent on first read
/// during cleanup; a missing or empty file behaves as an empty slot.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateFile { path: path.into() }
    }

    /// Fallback state location when the host does not supply one, so the
    /// bake and cleanup invocations still agree on a slot.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("drydock-state.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StateDoc> {
        if !self.path.exists() {
            return Ok(StateDoc::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read state file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(StateDoc::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("malformed state file: {}", self.path.display()))
    }

    fn save(&self, doc: &StateDoc) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            crate::util::fs::ensure_dir(parent)?;
        }
        let content = serde_json::to_string(doc)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write state file: {}", self.path.display()))
    }

    /// Record the run phase's temp directory into the slot.
    pub fn set_tmp_dir(&self, dir: &Path) -> Result<()> {
        let mut doc = self.load()?;
        doc.tmp_dir = Some(dir.to_path_buf());
        self.save(&doc)
    }

    /// Read and clear the slot. Returns `None` when the slot is empty,
    /// including on every read after the first.
    pub fn take_tmp_dir(&self) -> Result<Option<PathBuf>> {
        let mut doc = self.load()?;
        let taken = doc.tmp_dir.take();
        if taken.is_some() {
            self.save(&doc)?;
        }
        Ok(taken)
    }
}

/// Output channel for named host-visible values.
///
/// Values are appended as `name<<EOF` heredoc blocks so multiline content
/// (the metadata document is JSON) survives the line-oriented format.
/// Without a configured path, values are only logged.
#[derive(Debug, Clone)]
pub struct Outputs {
    path: Option<PathBuf>,
}

impl Outputs {
    pub fn new(path: Option<PathBuf>) -> Self {
        Outputs { path }
    }

    /// Publish one named value.
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        tracing::info!("{}={}", name, value);

        let Some(ref path) = self.path else {
            return Ok(());
        };
        let mut content = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read output file: {}", path.display()))?
        } else {
            String::new()
        };
        content.push_str(&format!("{}<<EOF\n{}\nEOF\n", name, value));
        fs::write(path, content)
            .with_context(|| format!("failed to write output file: {}", path.display()))
    }
}
