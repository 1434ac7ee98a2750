//! Text report of a solve.
//!
//! The first line carries the network totals, then one line per probe in
//! declaration order:
//!
//! ```text
//! Rt=300.00		Vt=9.0		It=0.0300
//! IR1	V=3.0000	I=0.030000
//! VMID	V=6.0000
//! ```

use crate::solver::{ProbeResult, ResultSet};

/// Render the result set as report text.
pub fn format_report(results: &ResultSet) -> String {
    let t = &results.totals;
    let mut out = format!("Rt={:.2}\t\tVt={:.1}\t\tIt={:.4}\n", t.rt, t.vt, t.it);
    for (name, probe) in &results.probes {
        let line = match probe {
            ProbeResult::Branch { voltage, current } => {
                format!("{}\tV={:.4}\tI={:.6}\n", name, voltage, current)
            }
            ProbeResult::NodePair { voltage } => format!("{}\tV={:.4}\n", name, voltage),
            ProbeResult::NotFound => format!("{}\tV=none\tI=none\n", name),
        };
        out.push_str(&line);
    }
    out
}

/// Write the report to a file.
#[cfg(feature = "cli")]
pub fn write_report(path: &std::path::Path, results: &ResultSet) -> crate::error::Result<()> {
    std::fs::write(path, format_report(results)).map_err(|e| crate::error::NodalError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist;
    use crate::solver::NodalSolver;

    #[test]
    fn test_format_report() {
        let input = "R1 in mid 100\nR2 mid gnd 200\nP1 in 9\nG1 gnd\nProbe IR1 R1\nProbe VMID mid gnd\nProbe NONE R7\n";
        let model = netlist::parse(input).unwrap();
        let results = NodalSolver::new().solve(&model).unwrap();

        let report = format_report(&results);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Rt=300.00\t\tVt=9.0\t\tIt=0.0300");
        assert_eq!(lines[1], "IR1\tV=3.0000\tI=0.030000");
        assert_eq!(lines[2], "VMID\tV=6.0000");
        assert_eq!(lines[3], "NONE\tV=none\tI=none");
        assert_eq!(lines.len(), 4);
    }
}
