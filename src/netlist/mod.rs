//! Netlist reader for resistive circuit descriptions.
//!
//! The format is line-oriented with whitespace-separated fields. Each line
//! is classified by its first field.
//!
//! # Statements
//!
//! | Statement | Description | Syntax |
//! |-----------|-------------|--------|
//! | R | Resistor | `R<name> <start> <end> <value>` |
//! | Probe | Resistor probe | `Probe <name> <resistor>` |
//! | Probe | Node voltage probe | `Probe <name> <node> <node>` |
//! | P | Voltage source | `P<name> <node> <voltage>` |
//! | G | Ground | `G<name> <node>` |
//!
//! Lines starting with `#`, `;` or `*` are comments. Values take SI
//! suffixes (`p n u m k M G`).
//!
//! # Example
//!
//! ```text
//! # Voltage divider
//! R1   in   mid  1k
//! R2   mid  gnd  2k
//! P1   in   9
//! G1   gnd
//! Probe VMID mid gnd
//! Probe IR1  R1
//! ```

mod ast;
mod parser;
mod value;

pub use ast::{Line, Statement};
pub use parser::Parser;
pub use value::parse_value;

use crate::circuit::CircuitModel;
use crate::error::Result;

/// Parse netlist text into a circuit model.
pub fn parse(input: &str) -> Result<CircuitModel> {
    Parser::new(input).parse_model()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitModel> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{NodalSolver, ProbeResult};
    use approx::assert_relative_eq;

    #[test]
    fn test_ladder_demo() {
        let model = parse(include_str!("../../demos/ladder.cir")).unwrap();
        let results = NodalSolver::new().solve(&model).unwrap();

        assert_relative_eq!(results.totals.rt, 2000.0, max_relative = 1e-12);
        assert_relative_eq!(results.totals.it, 0.005, max_relative = 1e-12);
        assert_relative_eq!(results.node_voltage("A").unwrap(), 5.0, max_relative = 1e-12);

        let vb = results.probe("VB").unwrap().voltage().unwrap();
        assert_relative_eq!(vb, 2.5, max_relative = 1e-12);

        match results.probe("I5") {
            Some(ProbeResult::Branch { voltage, current }) => {
                assert_relative_eq!(*voltage, 2.5, max_relative = 1e-12);
                assert_relative_eq!(*current, 0.00125, max_relative = 1e-12);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
