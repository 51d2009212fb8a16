//! Bake error types.

use thiserror::Error;

/// Error during a bake run or its deferred cleanup.
#[derive(Debug, Error)]
pub enum BakeError {
    /// The buildx subsystem is not installed; no process was spawned.
    #[error("docker buildx is required. See https://github.com/docker/setup-buildx-action to set up buildx.")]
    ToolUnavailable,

    /// The tool's self-reported version did not match the expected shape.
    #[error("could not parse buildx version from `{output}`")]
    VersionParse { output: String },

    /// The execute-mode run was classified as failed.
    #[error("buildx bake failed with: {message}")]
    BakeFailed { message: String },

    /// Removing the temp directory tree during the cleanup phase failed.
    #[error("failed to remove temp folder {path}: {source}")]
    Cleanup {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
