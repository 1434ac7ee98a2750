//! The mutable circuit description handed to the solver.

use indexmap::IndexMap;
use log::{debug, trace};

use super::types::{NodeMap, Probe, ProbeTarget};
use crate::components::{Resistor, VoltageSource};
use crate::error::{NodalError, Result};

/// A resistive network with one source, one ground and a list of probes.
///
/// The model is append-only: mutators insert or replace, nothing is
/// removed. It is read-only once passed to
/// [`NodalSolver::solve`](crate::solver::NodalSolver::solve).
#[derive(Debug, Clone, Default)]
pub struct CircuitModel {
    /// Resistors keyed by lowercased name, in order of first declaration
    resistors: IndexMap<String, Resistor>,

    /// Probe requests in declaration order
    probes: Vec<Probe>,

    /// The single voltage source, if set
    source: Option<VoltageSource>,

    /// The ground node label, if set
    ground: Option<String>,
}

impl CircuitModel {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resistor, replacing any resistor with the same
    /// case-insensitive name.
    ///
    /// A replaced resistor keeps its original position in iteration order.
    pub fn add_resistor(
        &mut self,
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        resistance: f64,
    ) {
        let resistor = Resistor::new(name, start, end, resistance);
        trace!(
            "resistor {} {} -> {} ({} ohm)",
            resistor.name,
            resistor.start(),
            resistor.end(),
            resistor.resistance
        );
        if let Some(old) = self.resistors.insert(resistor.key(), resistor) {
            debug!("resistor '{}' redefined", old.name);
        }
    }

    /// Register a probe from raw targets.
    ///
    /// One target asks for a resistor's voltage drop and current, two
    /// targets ask for the voltage difference between two nodes.
    pub fn add_probe<S: AsRef<str>>(&mut self, name: impl Into<String>, targets: &[S]) -> Result<()> {
        let name = name.into();
        let probe = match targets {
            [component] => Probe::component(name, component.as_ref()),
            [a, b] => Probe::nodes(name, a.as_ref(), b.as_ref()),
            _ => {
                return Err(NodalError::InvalidProbe {
                    name,
                    targets: targets.len(),
                })
            }
        };
        self.probes.push(probe);
        Ok(())
    }

    /// Register a probe on one resistor.
    pub fn add_component_probe(&mut self, name: impl Into<String>, resistor: &str) {
        self.probes.push(Probe::component(name, resistor));
    }

    /// Register a probe on the voltage between two nodes.
    pub fn add_node_probe(
        &mut self,
        name: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) {
        self.probes.push(Probe::nodes(name, a, b));
    }

    /// Set the voltage source. The last call wins.
    pub fn set_voltage_source(&mut self, node: impl Into<String>, voltage: f64) {
        let source = VoltageSource::new(node, voltage);
        if let Some(old) = self.source.replace(source) {
            debug!("voltage source on '{}' replaced", old.node);
        }
    }

    /// Set the ground node. The last call wins.
    pub fn set_ground(&mut self, node: impl Into<String>) {
        if let Some(old) = self.ground.replace(node.into()) {
            debug!("ground '{}' replaced", old);
        }
    }

    /// All resistors in iteration order.
    pub fn resistors(&self) -> impl Iterator<Item = &Resistor> {
        self.resistors.values()
    }

    /// Number of resistors.
    pub fn num_resistors(&self) -> usize {
        self.resistors.len()
    }

    /// Look up a resistor by case-insensitive name.
    pub fn resistor(&self, name: &str) -> Option<&Resistor> {
        self.resistors.get(&name.to_ascii_lowercase())
    }

    /// Resolve a component-probe target.
    ///
    /// An exact (case-insensitive) name match wins. Otherwise, with
    /// `suffix_match`, the first resistor in iteration order whose name
    /// ends with the target is returned.
    pub fn find_resistor(&self, target: &str, suffix_match: bool) -> Option<&Resistor> {
        let target = target.to_ascii_lowercase();
        if let Some(r) = self.resistors.get(&target) {
            return Some(r);
        }
        if !suffix_match {
            return None;
        }
        self.resistors
            .iter()
            .find(|(key, _)| key.ends_with(&target))
            .map(|(_, r)| r)
    }

    /// Probe requests in declaration order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// The voltage source, if set.
    pub fn voltage_source(&self) -> Option<&VoltageSource> {
        self.source.as_ref()
    }

    /// The ground node label, if set.
    pub fn ground(&self) -> Option<&str> {
        self.ground.as_deref()
    }

    /// Labels referenced by resistors, the source and ground.
    ///
    /// Probe targets are not part of the topology and are not included.
    pub fn node_labels(&self) -> impl Iterator<Item = &str> {
        self.resistors
            .values()
            .flat_map(|r| r.nodes.iter().map(String::as_str))
            .chain(self.source.as_ref().map(|s| s.node.as_str()))
            .chain(self.ground.as_deref())
    }

    /// Build the sorted node index for solving.
    pub fn node_map(&self) -> NodeMap {
        NodeMap::from_labels(self.node_labels())
    }

    /// Check whether a label is part of the topology.
    pub fn contains_node(&self, label: &str) -> bool {
        self.node_labels().any(|l| l == label)
    }

    /// Node labels referenced by probes, paired with the probe name.
    pub(crate) fn probed_nodes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.probes.iter().flat_map(|p| {
            let nodes: Vec<&str> = match &p.target {
                ProbeTarget::Nodes(a, b) => vec![a.as_str(), b.as_str()],
                ProbeTarget::Component(_) => Vec::new(),
            };
            nodes.into_iter().map(move |n| (p.name.as_str(), n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_overwrite_is_case_insensitive() {
        let mut model = CircuitModel::new();
        model.add_resistor("R1", "A", "B", 10.0);
        model.add_resistor("R2", "B", "GND", 20.0);
        model.add_resistor("r1", "A", "GND", 5.0);

        assert_eq!(model.num_resistors(), 2);
        let first = model.resistors().next().unwrap();
        assert_eq!(first.name, "r1");
        assert_eq!(first.resistance, 5.0);
        assert_eq!(model.resistor("R1").unwrap().end(), "GND");
    }

    #[test]
    fn test_node_set_follows_current_topology() {
        let mut model = CircuitModel::new();
        model.add_resistor("R1", "A", "OLD", 10.0);
        model.add_resistor("R1", "A", "GND", 10.0);
        model.set_voltage_source("A", 5.0);
        model.set_ground("GND");

        let map = model.node_map();
        assert_eq!(map.len(), 2);
        assert!(!model.contains_node("OLD"));
    }

    #[test]
    fn test_add_probe_target_count() {
        let mut model = CircuitModel::new();
        assert!(model.add_probe("P1", &["R1"]).is_ok());
        assert!(model.add_probe("P2", &["A", "B"]).is_ok());
        assert!(matches!(
            model.add_probe("P3", &["A", "B", "C"]),
            Err(NodalError::InvalidProbe { targets: 3, .. })
        ));
        assert!(matches!(
            model.add_probe::<&str>("P4", &[]),
            Err(NodalError::InvalidProbe { targets: 0, .. })
        ));
        assert_eq!(model.probes().len(), 2);
        assert_eq!(
            model.probes()[1].target,
            ProbeTarget::Nodes("A".to_string(), "B".to_string())
        );
    }

    #[test]
    fn test_find_resistor_prefers_exact_then_first_suffix() {
        let mut model = CircuitModel::new();
        model.add_resistor("R11", "A", "B", 1.0);
        model.add_resistor("R21", "B", "C", 2.0);
        model.add_resistor("R1", "C", "D", 3.0);

        assert_eq!(model.find_resistor("r1", true).unwrap().name, "R1");
        assert_eq!(model.find_resistor("1", true).unwrap().name, "R11");
        assert_eq!(model.find_resistor("21", true).unwrap().name, "R21");
        assert!(model.find_resistor("21", false).is_none());
        assert!(model.find_resistor("R9", true).is_none());
    }

    #[test]
    fn test_source_and_ground_last_write_wins() {
        let mut model = CircuitModel::new();
        model.set_voltage_source("A", 1.0);
        model.set_voltage_source("B", 9.0);
        model.set_ground("G1");
        model.set_ground("G2");

        assert_eq!(model.voltage_source(), Some(&VoltageSource::new("B", 9.0)));
        assert_eq!(model.ground(), Some("G2"));
    }
}
