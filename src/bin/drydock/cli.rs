//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Drydock - drives multi-target docker buildx bake builds
#[derive(Parser)]
#[command(name = "drydock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// State file shared between the bake and cleanup phases
    #[arg(long, global = true, env = "DRYDOCK_STATE")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one buildx bake build and publish its outcome
    Bake(BakeArgs),

    /// Remove temp files left behind by an earlier bake run
    Cleanup(CleanupArgs),
}

#[derive(Args)]
pub struct BakeArgs {
    /// Bake target names (defaults to the `default` target)
    pub targets: Vec<String>,

    /// Bake definition files
    #[arg(short, long)]
    pub file: Vec<String>,

    /// Build-argument override, NAME=VALUE (repeatable)
    #[arg(long = "build-arg", value_name = "NAME=VALUE")]
    pub build_args: Vec<String>,

    /// Load build results into the local image store
    #[arg(long)]
    pub load: bool,

    /// Push build results to the registry
    #[arg(long)]
    pub push: bool,

    /// Generate provenance attestation (e.g. `true`, `mode=max`)
    #[arg(long, value_name = "VALUE")]
    pub provenance: Option<String>,

    /// Generate SBOM attestation (e.g. `true`)
    #[arg(long, value_name = "VALUE")]
    pub sbom: Option<String>,

    /// Working directory for the bake invocations
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// File to append named outputs to (host output channel)
    #[arg(long, env = "DRYDOCK_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanupArgs {}
