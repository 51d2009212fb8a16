//! Drydock - a CLI driver for multi-target docker buildx bake builds
//!
//! This crate provides the core library functionality for drydock:
//! buildx capability probing, bake argument synthesis, process execution
//! with heuristic outcome classification, and the run/cleanup lifecycle.

pub mod bake;
pub mod buildx;
pub mod host;
pub mod ops;
pub mod util;

pub use bake::{classify, synthesize, BakeError, BakeInputs, ExecutionResult, Outcome};
pub use host::{Outputs, StateFile};
