//! Implementation of `drydock cleanup` (the deferred cleanup phase).

use anyhow::Result;

use crate::bake::BakeError;
use crate::host::StateFile;

/// Remove the temp directory recorded by an earlier run phase.
///
/// Idempotent: an empty slot (no run phase, or cleanup already performed)
/// is a no-op. The slot is spent by the read, so a second invocation never
/// attempts a second deletion.
pub fn cleanup(state: &StateFile) -> Result<()> {
    let Some(tmp_dir) = state.take_tmp_dir()? else {
        tracing::debug!("no temp folder recorded, nothing to clean up");
        return Ok(());
    };

    tracing::info!("Removing temp folder {}", tmp_dir.display());
    if tmp_dir.exists() {
        std::fs::remove_dir_all(&tmp_dir).map_err(|source| BakeError::Cleanup {
            path: tmp_dir.display().to_string(),
            source,
        })?;
    }
    Ok(())
}
