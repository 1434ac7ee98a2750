//! Component models for the resistive network.
//!
//! The network is built from two kinds of elements:
//! - Linear: Resistor
//! - Sources: the single ideal Voltage Source
//!
//! Ground is not a component; it is a node designation held by the
//! [`CircuitModel`](crate::circuit::CircuitModel).

mod linear;
mod sources;

pub use linear::Resistor;
pub use sources::VoltageSource;
