//! Circuit validation.

use crate::error::{NodalError, Result};
use crate::solver::RESERVED_KEYS;

use super::CircuitModel;

/// Validate a circuit for solving.
///
/// Checks, in order:
/// - A voltage source and a ground node are defined
/// - Source and ground are different nodes
/// - The source voltage is finite
/// - Every resistance is strictly positive
/// - No probe is named like a reserved result key
/// - Every node probed by name exists in the topology
pub fn validate_circuit(circuit: &CircuitModel) -> Result<()> {
    let source = circuit.voltage_source().ok_or(NodalError::MissingSource)?;
    let ground = circuit.ground().ok_or(NodalError::MissingGround)?;

    if source.node == ground {
        return Err(NodalError::SourceGroundCollision {
            node: source.node.clone(),
        });
    }

    if !source.voltage.is_finite() {
        return Err(NodalError::NonFiniteSource {
            voltage: source.voltage,
        });
    }

    // Written as a negated comparison so that NaN is rejected too
    if let Some(r) = circuit.resistors().find(|r| !(r.resistance > 0.0)) {
        return Err(NodalError::NonPositiveResistance {
            name: r.name.clone(),
            resistance: r.resistance,
        });
    }

    if let Some(p) = circuit
        .probes()
        .iter()
        .find(|p| RESERVED_KEYS.contains(&p.name.as_str()))
    {
        return Err(NodalError::ReservedProbeName {
            name: p.name.clone(),
        });
    }

    if let Some((probe, node)) = circuit
        .probed_nodes()
        .find(|(_, node)| !circuit.contains_node(node))
    {
        return Err(NodalError::unknown_node(probe, node));
    }

    Ok(())
}
