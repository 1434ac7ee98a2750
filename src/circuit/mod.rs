//! Circuit model representation and validation.
//!
//! This module holds the network as the ingestion layer describes it.
//! The [`CircuitModel`] struct collects resistors, the voltage source, the
//! ground node and probe requests; it does no solving of its own.

mod model;
mod types;
mod validate;

pub use model::CircuitModel;
pub use types::*;
pub use validate::validate_circuit;
