//! Error types for the nodal solver.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! all error conditions that can occur during netlist parsing, circuit
//! validation, and solving.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all nodal solver operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Netlist Parsing Errors ============
    /// Malformed netlist statement
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Numeric field that could not be read
    #[error("Invalid value '{text}' at line {line}")]
    InvalidValue { line: usize, text: String },

    // ============ Model Errors ============
    /// Probe declared with zero or more than two targets
    #[error("Probe '{name}' must have one or two targets, got {targets}")]
    InvalidProbe { name: String, targets: usize },

    // ============ Circuit Validation Errors ============
    /// No voltage source defined
    #[error("Circuit has no voltage source")]
    MissingSource,

    /// No ground node defined
    #[error("Circuit has no ground node")]
    MissingGround,

    /// Source and ground share one node
    #[error("Voltage source and ground are both on node '{node}'")]
    SourceGroundCollision { node: String },

    /// Probe references a node that no element touches
    #[error("Probe '{probe}' references unknown node '{node}'")]
    UnknownNode { probe: String, node: String },

    /// Source voltage is NaN or infinite
    #[error("Voltage source has non-finite voltage {voltage}")]
    NonFiniteSource { voltage: f64 },

    /// Resistor with zero or negative resistance
    #[error("Resistor '{name}' has non-positive resistance {resistance}")]
    NonPositiveResistance { name: String, resistance: f64 },

    /// Probe named like one of the aggregate result keys
    #[error("Probe name '{name}' collides with a reserved result key")]
    ReservedProbeName { name: String },

    // ============ Solve Errors ============
    /// Matrix is singular and cannot be solved
    #[error("Singular matrix - network may be disconnected or floating")]
    SingularSystem,

    /// No current leaves the source, so Rt is undefined
    #[error("Total source current is zero - equivalent resistance is undefined")]
    ZeroSourceCurrent,

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the result report
    #[error("Failed to write report '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl NodalError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(line: usize, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            line,
            text: text.into(),
        }
    }

    /// Create an unknown node error
    pub fn unknown_node(probe: impl Into<String>, node: impl Into<String>) -> Self {
        Self::UnknownNode {
            probe: probe.into(),
            node: node.into(),
        }
    }
}
