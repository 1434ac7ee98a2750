//! Nodal analysis solver.
//!
//! This module provides the numerical engine for the DC solve.
//!
//! ## Nodal Analysis
//!
//! The solver assembles a system of equations G·v = i where:
//! - v contains the potential of every node
//! - G is the conductance matrix built from resistor stamps
//! - i is the source vector
//!
//! The source node and the ground node do not get a KCL equation. Their
//! rows are replaced by fixed-potential constraints:
//! ```text
//! row(source): v[source] = Vt
//! row(ground): v[ground] = 0
//! ```
//! This formulation supports exactly one ideal source and one ground.
//!
//! After solving, the current leaving the source node gives It, and
//! Rt = Vt / It is the resistance seen by the source.

mod mna;
mod nodal;
mod results;

pub use mna::{stamp_resistors, MnaMatrix};
pub use nodal::{NodalSolver, SolverConfig};
pub use results::{NetworkTotals, ProbeResult, ResultSet, ResultValue, RESERVED_KEYS};

/// Default relative pivot threshold: a pivot smaller than this fraction of
/// its column's largest entry marks the system as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
