//! `drydock cleanup` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::CleanupArgs;
use drydock::ops::cleanup;
use drydock::StateFile;

pub fn execute(_args: CleanupArgs, state_file: PathBuf) -> Result<()> {
    cleanup(&StateFile::new(state_file))
}
