//! # Nodal Core
//!
//! A DC solver for resistive networks.
//!
//! This library provides:
//! - An in-memory circuit model of resistors, one voltage source and one ground
//! - Nodal analysis that solves every node potential in one dense LU solve
//! - Probes for resistor voltage/current and node-to-node voltage
//! - A line-oriented netlist reader and a text report writer
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit model and validation
//! - [`components`] - Resistor and voltage source records
//! - [`solver`] - Matrix assembly, numerical solving, results
//! - [`netlist`] - Parser for the circuit description format
//! - [`report`] - Result formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodal divider.cir        # writes divider.out
//! nodal divider --stdout
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::{CircuitModel, NodalSolver};
//!
//! let mut model = CircuitModel::new();
//! model.add_resistor("R1", "A", "GND", 100.0);
//! model.set_voltage_source("A", 5.0);
//! model.set_ground("GND");
//! model.add_component_probe("IR1", "R1");
//!
//! let results = NodalSolver::new().solve(&model).unwrap();
//! assert!((results.totals.rt - 100.0).abs() < 1e-9);
//! assert!((results.probe("IR1").unwrap().current().unwrap() - 0.05).abs() < 1e-12);
//! ```
//!
//! ## Solution Method
//!
//! 1. Sort node labels and number them, so the system is reproducible
//! 2. Stamp each resistor's conductance into G
//! 3. Replace the source row with v = Vt and the ground row with v = 0
//! 4. Solve G·v = i by LU decomposition with partial pivoting
//! 5. Sum the current leaving the source to get It and Rt = Vt / It

pub mod circuit;
pub mod components;
pub mod error;
pub mod netlist;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::CircuitModel;
pub use error::{NodalError, Result};
pub use solver::{NodalSolver, ResultSet, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNodalSolver;
