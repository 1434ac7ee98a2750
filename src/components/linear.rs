//! Linear passive components.

/// A two-terminal resistor between two labelled nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// Name as declared (lookup is case-insensitive)
    pub name: String,
    pub nodes: [String; 2], // [start, end]
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    ///
    /// The resistance is stored as given; non-positive values are rejected
    /// when the circuit is validated, not here.
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        resistance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            nodes: [start.into(), end.into()],
            resistance,
        }
    }

    /// Label of the start node.
    pub fn start(&self) -> &str {
        &self.nodes[0]
    }

    /// Label of the end node.
    pub fn end(&self) -> &str {
        &self.nodes[1]
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }

    /// Check whether either terminal sits on `node`.
    pub fn touches(&self, node: &str) -> bool {
        self.start() == node || self.end() == node
    }

    /// Key used for case-insensitive identity.
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_conductance() {
        let r = Resistor::new("R1", "A", "GND", 1000.0);
        assert!((r.conductance() - 0.001).abs() < 1e-10);
    }

    #[test]
    fn test_resistor_touches() {
        let r = Resistor::new("R1", "A", "B", 10.0);
        assert!(r.touches("A"));
        assert!(r.touches("B"));
        assert!(!r.touches("a"));
        assert_eq!(r.key(), "r1");
    }
}
