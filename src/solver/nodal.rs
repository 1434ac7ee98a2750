//! Nodal solver interface.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::circuit::{validate_circuit, CircuitModel, NodeId, NodeMap, ProbeTarget};
use crate::error::{NodalError, Result};

use super::mna::{stamp_resistors, MnaMatrix};
use super::results::{NetworkTotals, ProbeResult, ResultSet};
use super::DEFAULT_PIVOT_TOLERANCE;

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Smallest LU pivot accepted, relative to the largest entry of its
    /// column, before the system is reported as singular.
    pub pivot_tolerance: f64,
    /// Whether a component probe may fall back to a name-suffix match.
    pub suffix_match: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            suffix_match: true,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singular pivot threshold.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    /// Enable or disable the suffix fallback for component probes.
    ///
    /// With suffix matching on (the default), a probe on `1` finds `R1`
    /// when no resistor is named `1`. Among several suffix matches the
    /// first resistor in declaration order wins.
    pub fn with_suffix_match(mut self, suffix_match: bool) -> Self {
        self.suffix_match = suffix_match;
        self
    }
}

/// DC solver for a resistive network with one source and one ground.
///
/// The solver holds only configuration. Each call to [`solve`](Self::solve)
/// allocates its own system, so one solver may serve any number of
/// independent circuits.
#[derive(Debug, Clone, Default)]
pub struct NodalSolver {
    config: SolverConfig,
}

impl NodalSolver {
    /// Create a solver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the circuit for node potentials, source totals and probes.
    ///
    /// The source node is held at the source voltage and the ground node at
    /// 0V; every other node gets a KCL row built from resistor stamps.
    pub fn solve(&self, circuit: &CircuitModel) -> Result<ResultSet> {
        validate_circuit(circuit)?;
        let source = circuit.voltage_source().ok_or(NodalError::MissingSource)?;
        let ground = circuit.ground().ok_or(NodalError::MissingGround)?;

        let nodes = circuit.node_map();
        if nodes.is_empty() {
            return Err(NodalError::SingularSystem);
        }
        let source_id = lookup(&nodes, &source.node)?;
        let ground_id = lookup(&nodes, ground)?;
        debug!(
            "assembling {}x{} system for {} resistors",
            nodes.len(),
            nodes.len(),
            circuit.num_resistors()
        );

        let mut matrix = MnaMatrix::new(nodes.len());
        stamp_resistors(circuit, &nodes, &mut matrix);
        matrix.fix_potential(source_id, source.voltage);
        matrix.fix_potential(ground_id, 0.0);

        matrix.factor(self.config.pivot_tolerance)?;
        matrix.solve()?;

        // Current leaving the source through every resistor attached to it
        let mut it = 0.0;
        for r in circuit.resistors().filter(|r| r.touches(&source.node)) {
            let drop = matrix.voltage_drop(lookup(&nodes, r.start())?, lookup(&nodes, r.end())?);
            it += drop / r.resistance;
        }
        if it == 0.0 {
            return Err(NodalError::ZeroSourceCurrent);
        }

        let vt = source.voltage;
        let totals = NetworkTotals { rt: vt / it, vt, it };
        debug!("Rt={} Vt={} It={}", totals.rt, totals.vt, totals.it);

        let mut probes = IndexMap::with_capacity(circuit.probes().len());
        for probe in circuit.probes() {
            let result = match &probe.target {
                ProbeTarget::Component(target) => {
                    match circuit.find_resistor(target, self.config.suffix_match) {
                        Some(r) => {
                            let voltage = matrix
                                .voltage_drop(lookup(&nodes, r.start())?, lookup(&nodes, r.end())?);
                            ProbeResult::Branch {
                                voltage,
                                current: voltage / r.resistance,
                            }
                        }
                        None => {
                            warn!("probe '{}': no resistor matches '{}'", probe.name, target);
                            ProbeResult::NotFound
                        }
                    }
                }
                ProbeTarget::Nodes(a, b) => ProbeResult::NodePair {
                    voltage: matrix.voltage_drop(lookup(&nodes, a)?, lookup(&nodes, b)?),
                },
            };
            if probes.insert(probe.name.clone(), result).is_some() {
                warn!("probe '{}' declared more than once, keeping the last", probe.name);
            }
        }

        let node_voltages = nodes
            .iter()
            .map(|(id, label)| (label.to_string(), matrix.voltage(id)))
            .collect();

        Ok(ResultSet {
            totals,
            probes,
            node_voltages,
        })
    }
}

fn lookup(nodes: &NodeMap, label: &str) -> Result<NodeId> {
    nodes
        .get(label)
        .ok_or_else(|| NodalError::unknown_node("", label))
}
