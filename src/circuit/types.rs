//! Core types for circuit representation.

use std::collections::BTreeSet;
use std::fmt;

/// Index of a node in the solution vector of one solve.
///
/// Indices follow the lexicographic order of node labels, so the same
/// circuit always assembles the same system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// What a probe measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeTarget {
    /// Voltage drop and current of one resistor, looked up by name.
    /// Stored lowercased.
    Component(String),
    /// Voltage difference between two node labels.
    Nodes(String, String),
}

/// A named request for a quantity to report after solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub name: String,
    pub target: ProbeTarget,
}

impl Probe {
    /// Probe the voltage drop and current of a resistor.
    pub fn component(name: impl Into<String>, resistor: &str) -> Self {
        Self {
            name: name.into(),
            target: ProbeTarget::Component(resistor.to_ascii_lowercase()),
        }
    }

    /// Probe the voltage difference between two nodes.
    pub fn nodes(name: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ProbeTarget::Nodes(a.into(), b.into()),
        }
    }
}

/// Sorted node labels with their assigned [`NodeId`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMap {
    labels: Vec<String>,
}

impl NodeMap {
    /// Build the map from any collection of labels; duplicates collapse.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let set: BTreeSet<&str> = labels.into_iter().collect();
        Self {
            labels: set.into_iter().map(str::to_string).collect(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Find the id of a node label.
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .ok()
            .map(NodeId)
    }

    /// Get the label of a node.
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.0]
    }

    /// Iterate over `(id, label)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (NodeId(i), l.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_map_sorted_and_deduplicated() {
        let map = NodeMap::from_labels(["b", "GND", "a", "b"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("GND"), Some(NodeId(0)));
        assert_eq!(map.get("a"), Some(NodeId(1)));
        assert_eq!(map.get("b"), Some(NodeId(2)));
        assert_eq!(map.get("c"), None);
        assert_eq!(map.label(NodeId(2)), "b");
    }

    #[test]
    fn test_component_probe_lowercases_target() {
        let probe = Probe::component("P1", "R_Load");
        assert_eq!(probe.target, ProbeTarget::Component("r_load".to_string()));
    }
}
