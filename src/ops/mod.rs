//! High-level operations.
//!
//! This module contains the implementation of drydock commands.

pub mod bake_run;
pub mod cleanup;

pub use bake_run::{bake_run, BakeRunOptions};
pub use cleanup::cleanup;
