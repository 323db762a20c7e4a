//! Circuit descriptions and their construction from the bomb history.
//!
//! Each player's grid is a register of `GRID_SIZE` independent qubits. A bomb
//! landing on a ship rotates that ship's qubit towards |1>; measuring the
//! register estimates how far each ship has been pushed.

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt::Write;

use log::debug;

use crate::bombs::BombHistory;
use crate::common::{Cell, PlayerId};
use crate::config::GRID_SIZE;
use crate::layout::ShipLayout;

/// A single instruction in a circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Generic single-qubit rotation U3(theta, phi, lambda).
    U3 {
        qubit: usize,
        theta: f64,
        phi: f64,
        lambda: f64,
    },
    /// Measure `qubit` into classical bit `clbit`.
    Measure { qubit: usize, clbit: usize },
}

/// An ordered list of gates over a fixed register, as submitted to an
/// executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    name: String,
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Empty circuit with `num_qubits` qubits and as many classical bits.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            gates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn u3(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) -> &mut Self {
        self.gates.push(Gate::U3 {
            qubit,
            theta,
            phi,
            lambda,
        });
        self
    }

    pub fn measure(&mut self, qubit: usize, clbit: usize) -> &mut Self {
        self.gates.push(Gate::Measure { qubit, clbit });
        self
    }

    /// Measure every qubit into the classical bit with the same index.
    pub fn measure_all(&mut self) -> &mut Self {
        for q in 0..self.num_qubits {
            self.measure(q, q);
        }
        self
    }

    /// Render as an OpenQASM 2.0 program.
    pub fn to_qasm(&self) -> String {
        let mut out = String::new();
        let n = self.num_qubits;
        // Writing into a String cannot fail.
        let _ = writeln!(out, "OPENQASM 2.0;");
        let _ = writeln!(out, "include \"qelib1.inc\";");
        let _ = writeln!(out, "qreg q[{n}];");
        let _ = writeln!(out, "creg c[{n}];");
        for gate in &self.gates {
            let _ = match *gate {
                Gate::U3 {
                    qubit,
                    theta,
                    phi,
                    lambda,
                } => writeln!(out, "u3({theta},{phi},{lambda}) q[{qubit}];"),
                Gate::Measure { qubit, clbit } => {
                    writeln!(out, "measure q[{qubit}] -> c[{clbit}];")
                }
            };
        }
        out
    }
}

/// Build the circuit for `player`'s grid from every bomb the opponent has
/// dropped so far. Bombs on empty cells have no effect; each bomb on a ship
/// adds a rotation of `strength * PI` to that ship's qubit.
pub fn build_player_circuit(player: PlayerId, layout: &ShipLayout, history: &BombHistory) -> Circuit {
    let mut circuit = Circuit::new(alloc::format!("grid_p{}", player.index() + 1), GRID_SIZE);
    for cell in Cell::all() {
        let Some(ship) = layout.ship_at(cell) else {
            continue;
        };
        let frac = ShipLayout::strength(ship);
        for _ in 0..history.hits_against(player, cell) {
            circuit.u3(cell.index(), frac * PI, 0.0, 0.0);
        }
    }
    circuit.measure_all();
    debug!(
        "built {} with {} gates",
        circuit.name(),
        circuit.gates().len()
    );
    circuit
}

/// Total rotation applied to `cell` of `player`'s grid, in units of PI.
/// Grows linearly with the number of hits.
pub fn accumulated_fraction(
    player: PlayerId,
    layout: &ShipLayout,
    history: &BombHistory,
    cell: Cell,
) -> f64 {
    match layout.ship_at(cell) {
        Some(ship) => ShipLayout::strength(ship) * history.hits_against(player, cell) as f64,
        None => 0.0,
    }
}

/// Probability of measuring 1 after rotating |0> by `fraction * PI` about Y.
pub fn flip_probability(fraction: f64) -> f64 {
    let s = libm::sin(fraction * PI / 2.0);
    s * s
}
