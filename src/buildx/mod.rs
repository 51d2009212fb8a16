//! buildx subsystem probing.
//!
//! Flag availability is version-gated, so presence and version of the
//! buildx plugin must be known before any bake arguments are synthesized.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use semver::Version;

use crate::bake::BakeError;
use crate::util::process::{find_docker, ProcessBuilder};

/// Check whether the buildx subsystem is installed.
///
/// Attempts a lightweight `docker buildx version` call; any failure to
/// spawn or a non-zero exit is treated as "unavailable", never as an error.
pub fn is_available() -> bool {
    let Some(docker) = find_docker() else {
        return false;
    };
    ProcessBuilder::new(docker)
        .args(["buildx", "version"])
        .exec()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Query the buildx plugin version.
pub fn get_version() -> Result<Version> {
    let docker = find_docker().ok_or(BakeError::ToolUnavailable)?;
    let output = ProcessBuilder::new(docker)
        .args(["buildx", "version"])
        .exec_and_check()
        .context("failed to query buildx version")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_version(stdout.trim())
}

/// Extract a semantic version from buildx's version line.
///
/// Expected shape: `github.com/docker/buildx v0.10.4 c513d34`.
pub fn parse_version(stdout: &str) -> Result<Version> {
    let re = Regex::new(r"\bv?([0-9]+\.[0-9]+\.[0-9]+)").unwrap();
    let captures = re.captures(stdout).ok_or_else(|| BakeError::VersionParse {
        output: stdout.to_string(),
    })?;
    Version::parse(&captures[1]).map_err(|_| {
        BakeError::VersionParse {
            output: stdout.to_string(),
        }
        .into()
    })
}

/// Read the structured build-result document from a finished bake run.
///
/// The run points buildx at `path` via `--metadata-file`; whether the tool
/// actually writes it depends on the build configuration, so a missing
/// file is a valid state, not an error. Content is surfaced verbatim.
pub fn get_metadata(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata file: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}

/// Log docker engine diagnostics before the run.
///
/// Informational only; a failure here does not stop the run (the
/// availability probe is the real precondition check).
pub fn log_docker_diagnostics() {
    let Some(docker) = find_docker() else {
        tracing::debug!("docker not found, skipping diagnostics");
        return;
    };

    tracing::info!("Docker info");
    for args in [["version"], ["info"]] {
        match ProcessBuilder::new(&docker).args(args).exec() {
            Ok(output) => {
                let text = String::from_utf8_lossy(&output.stdout);
                for line in text.lines() {
                    tracing::debug!("{}", line);
                }
            }
            Err(e) => tracing::debug!("docker {} failed: {}", args[0], e),
        }
    }
}
