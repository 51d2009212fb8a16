//! Command implementations

pub mod bake;
pub mod cleanup;
