//! Nodal matrix assembly and solving.

use log::trace;

use crate::circuit::{CircuitModel, NodeId, NodeMap};
use crate::error::{NodalError, Result};

/// Nodal system G·v = i.
#[derive(Debug)]
pub struct MnaMatrix {
    /// Conductance matrix G (row-major)
    pub a: Vec<f64>,
    /// Current vector i
    pub z: Vec<f64>,
    /// Solution vector v (node potentials)
    pub x: Vec<f64>,
    /// Matrix dimension
    pub size: usize,
    /// LU decomposition of G
    pub lu: Vec<f64>,
    /// Pivot indices for LU decomposition
    pub pivots: Vec<usize>,
}

impl MnaMatrix {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            pivots: vec![0; size],
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] = value;
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: NodeId, n2: NodeId, g: f64) {
        let (i, j) = (n1.0, n2.0);
        self.add(i, i, g);
        self.add(j, j, g);
        self.add(i, j, -g);
        self.add(j, i, -g);
    }

    /// Replace the KCL row of `node` with the constraint V[node] = value.
    pub fn fix_potential(&mut self, node: NodeId, value: f64) {
        let row = node.0;
        let n = self.size;
        self.a[row * n..(row + 1) * n].fill(0.0);
        self.set(row, row, 1.0);
        self.z[row] = value;
    }

    /// Largest magnitude in each column of the assembled matrix.
    fn column_scales(&self) -> Vec<f64> {
        let n = self.size;
        (0..n)
            .map(|col| (0..n).map(|row| self.get(row, col).abs()).fold(0.0, f64::max))
            .collect()
    }

    /// Perform LU decomposition with partial pivoting.
    ///
    /// `tolerance` is relative: a pivot must exceed `tolerance` times the
    /// largest entry of its column in the assembled matrix, so the test
    /// does not depend on the magnitude of the conductances.
    pub fn factor(&mut self, tolerance: f64) -> Result<()> {
        let n = self.size;
        if n == 0 {
            return Err(NodalError::SingularSystem);
        }
        let scales = self.column_scales();
        self.lu.copy_from_slice(&self.a);

        for (i, p) in self.pivots.iter_mut().enumerate() {
            *p = i;
        }

        for k in 0..n {
            let (max_row, max_val) = (k..n)
                .map(|i| (i, self.lu[i * n + k].abs()))
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .unwrap_or((k, 0.0));

            // Negated so a NaN pivot or an all-zero column also fails
            if !(max_val > tolerance * scales[k]) {
                return Err(NodalError::SingularSystem);
            }

            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    self.lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    self.lu[i * n + j] -= factor * self.lu[k * n + j];
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    pub fn solve(&mut self) -> Result<()> {
        let n = self.size;

        // Apply pivot permutation to z
        for i in 0..n {
            self.x[i] = self.z[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
            self.x[i] /= self.lu[i * n + i];
        }

        if self.x.iter().any(|v| !v.is_finite()) {
            return Err(NodalError::SingularSystem);
        }

        Ok(())
    }

    /// Get the solved potential of a node.
    pub fn voltage(&self, node: NodeId) -> f64 {
        self.x[node.0]
    }

    /// Absolute potential difference between two nodes.
    pub fn voltage_drop(&self, a: NodeId, b: NodeId) -> f64 {
        (self.voltage(a) - self.voltage(b)).abs()
    }
}

/// Stamp every resistor of the circuit into the matrix.
///
/// Node labels missing from `nodes` are skipped; the map is built from the
/// same circuit so this does not happen in practice.
pub fn stamp_resistors(circuit: &CircuitModel, nodes: &NodeMap, matrix: &mut MnaMatrix) {
    for r in circuit.resistors() {
        if let (Some(i), Some(j)) = (nodes.get(r.start()), nodes.get(r.end())) {
            trace!(
                "stamp {} g={} between {} ({}) and {} ({})",
                r.name,
                r.conductance(),
                nodes.label(i),
                i,
                nodes.label(j),
                j
            );
            matrix.stamp_conductance(i, j, r.conductance());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conductance_stamp_is_symmetric() {
        let mut m = MnaMatrix::new(2);
        m.stamp_conductance(NodeId(0), NodeId(1), 0.5);
        assert_eq!(m.get(0, 0), 0.5);
        assert_eq!(m.get(1, 1), 0.5);
        assert_eq!(m.get(0, 1), -0.5);
        assert_eq!(m.get(1, 0), -0.5);
    }

    #[test]
    fn test_unconstrained_network_is_singular() {
        let mut m = MnaMatrix::new(2);
        m.stamp_conductance(NodeId(0), NodeId(1), 1.0);
        assert!(matches!(m.factor(1e-12), Err(NodalError::SingularSystem)));
    }

    #[test]
    fn test_high_ohm_divider_is_not_singular() {
        // 0 = A (source), 1 = B, 2 = GND; 1e16 ohm per leg
        let g = 1e-16;
        let mut m = MnaMatrix::new(3);
        m.stamp_conductance(NodeId(0), NodeId(1), g);
        m.stamp_conductance(NodeId(1), NodeId(2), g);
        m.fix_potential(NodeId(0), 10.0);
        m.fix_potential(NodeId(2), 0.0);
        m.factor(1e-12).unwrap();
        m.solve().unwrap();
        assert_relative_eq!(m.voltage(NodeId(1)), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_high_ohm_floating_island_is_singular() {
        // 0 = A (source), 1 = GND, 2/3 = island
        let g = 1e-16;
        let mut m = MnaMatrix::new(4);
        m.stamp_conductance(NodeId(0), NodeId(1), g);
        m.stamp_conductance(NodeId(2), NodeId(3), g * 3.0);
        m.fix_potential(NodeId(0), 10.0);
        m.fix_potential(NodeId(1), 0.0);
        assert!(matches!(m.factor(1e-12), Err(NodalError::SingularSystem)));
    }

    #[test]
    fn test_empty_system_is_singular() {
        let mut m = MnaMatrix::new(0);
        assert!(matches!(m.factor(1e-12), Err(NodalError::SingularSystem)));
    }

    #[test]
    fn test_fixed_potentials_solve_divider() {
        // 0 = ground, 1 = middle, 2 = source; two equal resistors
        let mut m = MnaMatrix::new(3);
        m.stamp_conductance(NodeId(2), NodeId(1), 1.0);
        m.stamp_conductance(NodeId(1), NodeId(0), 1.0);
        m.fix_potential(NodeId(2), 10.0);
        m.fix_potential(NodeId(0), 0.0);
        m.factor(1e-12).unwrap();
        m.solve().unwrap();

        assert_relative_eq!(m.voltage(NodeId(0)), 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.voltage(NodeId(1)), 5.0, epsilon = 1e-12);
        assert_relative_eq!(m.voltage(NodeId(2)), 10.0, epsilon = 1e-12);
        assert_relative_eq!(m.voltage_drop(NodeId(0), NodeId(2)), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pivoting_handles_zero_leading_entry() {
        let mut m = MnaMatrix::new(2);
        m.set(0, 1, 1.0);
        m.set(1, 0, 1.0);
        m.z = vec![3.0, 4.0];
        m.factor(1e-12).unwrap();
        m.solve().unwrap();
        assert_relative_eq!(m.x[0], 4.0);
        assert_relative_eq!(m.x[1], 3.0);
    }
}
