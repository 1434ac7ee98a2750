//! WASM bindings for Nodal Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNodalSolver } from 'nodal_core';
//!
//! await init();
//!
//! const solver = new WasmNodalSolver(`
//!   R1 in mid 1k
//!   R2 mid gnd 1k
//!   P1 in 5
//!   G1 gnd
//!   Probe VMID mid gnd
//! `);
//! const report = solver.solve();
//! const vmid = solver.nodeVoltage('mid');
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::CircuitModel;
use crate::error::NodalError;
use crate::netlist;
use crate::report::format_report;
use crate::solver::{NodalSolver, ResultSet};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible wrapper around a parsed circuit and its last solution.
#[wasm_bindgen]
pub struct WasmNodalSolver {
    model: CircuitModel,
    results: Option<ResultSet>,
}

#[wasm_bindgen]
impl WasmNodalSolver {
    /// Create a solver from netlist text.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist_text: &str) -> Result<WasmNodalSolver, JsValue> {
        let model = netlist::parse(netlist_text).map_err(to_js)?;
        Ok(Self {
            model,
            results: None,
        })
    }

    /// Solve the circuit and return the text report.
    #[wasm_bindgen]
    pub fn solve(&mut self) -> Result<String, JsValue> {
        let results = NodalSolver::new().solve(&self.model).map_err(to_js)?;
        let report = format_report(&results);
        self.results = Some(results);
        Ok(report)
    }

    /// Solved potential of a node, if the last solve succeeded and the node exists.
    #[wasm_bindgen(js_name = nodeVoltage)]
    pub fn node_voltage(&self, label: &str) -> Option<f64> {
        self.results.as_ref()?.node_voltage(label)
    }

    /// Equivalent resistance from the last solve.
    #[wasm_bindgen(js_name = equivalentResistance)]
    pub fn equivalent_resistance(&self) -> Result<f64, JsValue> {
        self.results
            .as_ref()
            .map(|r| r.totals.rt)
            .ok_or_else(|| {
                to_js(NodalError::WasmError {
                    message: "solve() has not succeeded yet".to_string(),
                })
            })
    }
}

fn to_js(err: NodalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
