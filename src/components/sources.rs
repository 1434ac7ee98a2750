//! Voltage sources.

/// The ideal voltage source of the network.
///
/// The source fixes the potential of one node relative to ground:
/// V[node] = voltage. Only one may exist per circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    pub node: String,
    pub voltage: f64,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(node: impl Into<String>, voltage: f64) -> Self {
        Self {
            node: node.into(),
            voltage,
        }
    }
}
