//! Statement types for the netlist format.

/// One parsed netlist line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `R<name> <start> <end> <value>`
    Resistor {
        name: String,
        start: String,
        end: String,
        resistance: f64,
    },
    /// `Probe <name> <target> [<target>]`
    Probe { name: String, targets: Vec<String> },
    /// `P... <node> <voltage>`
    Source { node: String, voltage: f64 },
    /// `G... <node>`
    Ground { node: String },
}

/// A statement with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub statement: Statement,
}
