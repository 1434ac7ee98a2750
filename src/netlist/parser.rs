//! Line parser for the netlist format.

use log::warn;

use super::ast::{Line, Statement};
use super::value::parse_value;
use crate::circuit::CircuitModel;
use crate::error::{NodalError, Result};

/// Parser for netlist text.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given text.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse every statement, skipping blanks, comments and unknown lines.
    pub fn parse(&self) -> Result<Vec<Line>> {
        let mut lines = Vec::new();
        for (idx, raw) in self.input.lines().enumerate() {
            let number = idx + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();
            let Some(&head) = fields.first() else {
                continue;
            };
            if head.starts_with(['#', ';', '*']) {
                continue;
            }
            match parse_statement(number, &fields)? {
                Some(statement) => lines.push(Line { number, statement }),
                None => warn!("line {}: skipping unrecognized statement '{}'", number, head),
            }
        }
        Ok(lines)
    }

    /// Parse and feed every statement into a fresh [`CircuitModel`].
    pub fn parse_model(&self) -> Result<CircuitModel> {
        let mut model = CircuitModel::new();
        for line in self.parse()? {
            apply(&mut model, line)?;
        }
        Ok(model)
    }
}

fn parse_statement(line: usize, fields: &[&str]) -> Result<Option<Statement>> {
    let head = fields[0];

    // Checked before the source prefix: "Probe" also starts with 'P'
    if head.eq_ignore_ascii_case("probe") {
        let name = field(line, fields, 1, "probe name")?;
        let targets: Vec<String> = fields[2..].iter().map(|t| t.to_string()).collect();
        if targets.is_empty() {
            return Err(NodalError::parse(line, format!("probe '{}' has no target", name)));
        }
        return Ok(Some(Statement::Probe {
            name: name.to_string(),
            targets,
        }));
    }

    let statement = match head.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('R') => Statement::Resistor {
            name: head.to_string(),
            start: field(line, fields, 1, "start node")?.to_string(),
            end: field(line, fields, 2, "end node")?.to_string(),
            resistance: number(line, field(line, fields, 3, "resistance")?)?,
        },
        Some('P') => Statement::Source {
            node: field(line, fields, 1, "source node")?.to_string(),
            voltage: number(line, field(line, fields, 2, "source voltage")?)?,
        },
        Some('G') => Statement::Ground {
            node: field(line, fields, 1, "ground node")?.to_string(),
        },
        _ => return Ok(None),
    };
    Ok(Some(statement))
}

fn field<'f>(line: usize, fields: &[&'f str], index: usize, what: &str) -> Result<&'f str> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| NodalError::parse(line, format!("'{}' is missing the {}", fields[0], what)))
}

fn number(line: usize, text: &str) -> Result<f64> {
    parse_value(text).ok_or_else(|| NodalError::invalid_value(line, text))
}

fn apply(model: &mut CircuitModel, line: Line) -> Result<()> {
    match line.statement {
        Statement::Resistor {
            name,
            start,
            end,
            resistance,
        } => model.add_resistor(name, start, end, resistance),
        Statement::Probe { name, targets } => model
            .add_probe(name, targets.as_slice())
            .map_err(|e| NodalError::parse(line.number, e.to_string()))?,
        Statement::Source { node, voltage } => model.set_voltage_source(node, voltage),
        Statement::Ground { node } => model.set_ground(node),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ProbeTarget;

    #[test]
    fn test_parse_resistor() {
        let lines = Parser::new("R1 in out 10k").parse().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 1);
        assert_eq!(
            lines[0].statement,
            Statement::Resistor {
                name: "R1".to_string(),
                start: "in".to_string(),
                end: "out".to_string(),
                resistance: 10_000.0,
            }
        );
    }

    #[test]
    fn test_probe_is_not_a_source() {
        let lines = Parser::new("Probe VR1 R1\nP1 A 5").parse().unwrap();
        assert!(matches!(lines[0].statement, Statement::Probe { .. }));
        assert_eq!(
            lines[1].statement,
            Statement::Source {
                node: "A".to_string(),
                voltage: 5.0
            }
        );
    }

    #[test]
    fn test_parse_model() {
        let input = "# divider\nR1 A B 100\nR2 B GND 100\n\nP1 A 10\nG1 GND\nProbe VB B GND\nProbe IR1 R1\n";
        let model = Parser::new(input).parse_model().unwrap();
        assert_eq!(model.num_resistors(), 2);
        assert_eq!(model.voltage_source().unwrap().voltage, 10.0);
        assert_eq!(model.ground(), Some("GND"));
        assert_eq!(model.probes().len(), 2);
        assert_eq!(
            model.probes()[0].target,
            ProbeTarget::Nodes("B".to_string(), "GND".to_string())
        );
    }

    #[test]
    fn test_unknown_lines_are_skipped() {
        let lines = Parser::new("C1 A B 1u\n; note\n* spice comment\nR1 A B 1").parse().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 4);
    }

    #[test]
    fn test_missing_field_reports_line() {
        match Parser::new("R1 A B 1\nR2 A").parse() {
            Err(NodalError::ParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_bad_number() {
        match Parser::new("P1 A five").parse() {
            Err(NodalError::InvalidValue { line, text }) => {
                assert_eq!(line, 1);
                assert_eq!(text, "five");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_probe_with_three_targets_fails() {
        assert!(matches!(
            Parser::new("Probe X A B C").parse_model(),
            Err(NodalError::ParseError { line: 1, .. })
        ));
    }
}
