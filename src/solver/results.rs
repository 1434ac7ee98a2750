//! Solve results.

use indexmap::IndexMap;

/// Result keys reserved for the whole-network quantities.
pub const RESERVED_KEYS: [&str; 3] = ["Rt", "Vt", "It"];

/// The network as seen from the voltage source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkTotals {
    /// Equivalent resistance Vt / It
    pub rt: f64,
    /// Source voltage
    pub vt: f64,
    /// Total current leaving the source node
    pub it: f64,
}

/// The reading of one probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Voltage drop and current of a resistor
    Branch { voltage: f64, current: f64 },
    /// Voltage difference between two nodes
    NodePair { voltage: f64 },
    /// No resistor matched the probe target
    NotFound,
}

impl ProbeResult {
    /// The reported voltage, if any.
    pub fn voltage(&self) -> Option<f64> {
        match *self {
            ProbeResult::Branch { voltage, .. } | ProbeResult::NodePair { voltage } => Some(voltage),
            ProbeResult::NotFound => None,
        }
    }

    /// The reported current, if any. Only branch probes carry one.
    pub fn current(&self) -> Option<f64> {
        match *self {
            ProbeResult::Branch { current, .. } => Some(current),
            _ => None,
        }
    }
}

/// A value looked up by result name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultValue<'a> {
    /// One of `Rt`, `Vt`, `It`
    Scalar(f64),
    /// A probe reading
    Probe(&'a ProbeResult),
}

/// Everything one solve produced.
///
/// The set owns its data and does not borrow the circuit it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub totals: NetworkTotals,
    /// Probe readings keyed by probe name, in declaration order
    pub probes: IndexMap<String, ProbeResult>,
    /// Solved node potentials keyed by label, in index order
    pub node_voltages: IndexMap<String, f64>,
}

impl ResultSet {
    /// Look up a result by name.
    pub fn get(&self, name: &str) -> Option<ResultValue<'_>> {
        match name {
            "Rt" => Some(ResultValue::Scalar(self.totals.rt)),
            "Vt" => Some(ResultValue::Scalar(self.totals.vt)),
            "It" => Some(ResultValue::Scalar(self.totals.it)),
            _ => self.probes.get(name).map(ResultValue::Probe),
        }
    }

    /// Get a probe reading by name.
    pub fn probe(&self, name: &str) -> Option<&ProbeResult> {
        self.probes.get(name)
    }

    /// Get the solved potential of a node.
    pub fn node_voltage(&self, label: &str) -> Option<f64> {
        self.node_voltages.get(label).copied()
    }
}
