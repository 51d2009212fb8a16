//! Implementation of `drydock bake` (the run phase).
//!
//! Strictly sequential: docker diagnostics, availability probe, temp-dir
//! allocation, version query, argument synthesis, a print-mode dry run,
//! the real run, outcome classification, metadata extraction, and output
//! publication. Each subprocess call blocks until its child exits.

use std::path::Path;

use anyhow::{bail, Result};

use crate::bake::{classify, synthesize, BakeError, BakeInputs, ExecutionResult, Outcome};
use crate::buildx;
use crate::host::{Outputs, StateFile};
use crate::util::fs::create_run_tmp_dir;
use crate::util::process::{find_docker, ProcessBuilder};

/// Options for the bake command.
#[derive(Debug, Clone)]
pub struct BakeRunOptions {
    /// Build inputs, immutable for the whole run.
    pub inputs: BakeInputs,

    /// Cross-phase state slot shared with the later cleanup invocation.
    pub state: StateFile,

    /// Named output channel back to the host.
    pub outputs: Outputs,
}

/// Run one bake attempt and publish its outcome. No retries.
pub fn bake_run(options: BakeRunOptions) -> Result<()> {
    buildx::log_docker_diagnostics();

    if !buildx::is_available() {
        bail!(BakeError::ToolUnavailable);
    }

    // Recorded before the first bake call; cleanup must find the staging
    // directory even when the run fails.
    let tmp_dir = create_run_tmp_dir("drydock-bake")?;
    record_tmp_dir(&options.state, &tmp_dir);
    let metadata_file = tmp_dir.join("metadata.json");

    let version = buildx::get_version()?;
    tracing::info!("buildx version {}", version);

    let args = synthesize(&options.inputs, &version, Some(&metadata_file));

    print_definition(&options.inputs, &args)?;

    let result = execute(&options.inputs, &args)?;
    match classify(&result) {
        Outcome::Failure { message } => bail!(BakeError::BakeFailed { message }),
        Outcome::Success => {}
    }

    tracing::info!("Setting outputs");
    if let Some(metadata) = buildx::get_metadata(&metadata_file)? {
        options.outputs.set("metadata", &metadata)?;
    }

    Ok(())
}

/// Record the temp dir into the state slot. A state-channel error is
/// logged, not propagated; the build itself proceeds.
fn record_tmp_dir(state: &StateFile, tmp_dir: &Path) {
    if let Err(e) = state.set_tmp_dir(tmp_dir) {
        tracing::warn!("failed to record temp dir for cleanup: {:#}", e);
    }
}

/// Render the fully resolved bake definition to the user's terminal.
///
/// Informational only: the exit code does not affect control flow.
fn print_definition(inputs: &BakeInputs, args: &[String]) -> Result<()> {
    tracing::info!("Bake definition");

    let cmd = bake_command(inputs, args)?.arg("--print");
    tracing::debug!("running {}", cmd.display_command());
    let status = cmd.exec_streamed()?;
    if !status.success() {
        tracing::debug!("print-mode run exited with {:?}", status.code());
    }
    Ok(())
}

/// The real bake run, with both streams captured for classification.
fn execute(inputs: &BakeInputs, args: &[String]) -> Result<ExecutionResult> {
    let cmd = bake_command(inputs, args)?;
    tracing::debug!("running {}", cmd.display_command());
    let output = cmd.exec()?;
    Ok(ExecutionResult::from_output(&output))
}

fn bake_command(inputs: &BakeInputs, args: &[String]) -> Result<ProcessBuilder> {
    let docker = find_docker().ok_or(BakeError::ToolUnavailable)?;
    let mut cmd = ProcessBuilder::new(docker).args(args);
    if let Some(ref workdir) = inputs.workdir {
        cmd = cmd.cwd(workdir);
    }
    Ok(cmd)
}
