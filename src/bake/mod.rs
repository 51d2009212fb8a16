//! Bake invocation model: inputs, argument synthesis, and outcome
//! classification.

pub mod args;
pub mod error;
pub mod inputs;
pub mod outcome;

pub use args::synthesize;
pub use error::BakeError;
pub use inputs::BakeInputs;
pub use outcome::{classify, ExecutionResult, Outcome};
