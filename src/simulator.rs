#![cfg(feature = "std")]
//! Local state-vector execution of circuits.
//!
//! The full register is evolved as `2^n` complex amplitudes. Device backends
//! are emulated by applying the profile's readout error to every measured
//! bit before sampling.

use log::debug;
use num_complex::Complex64;
use num_traits::Zero;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::circuit::{Circuit, Gate};
use crate::executor::{Backend, ExecutionError, Executor, MAX_SIMULATED_QUBITS};
use crate::outcome::{format_bits, OutcomeDistribution};

type Matrix2 = [[Complex64; 2]; 2];

enum Sampling {
    /// Draw every shot at random.
    Shots(SmallRng),
    /// Report expected counts, rounded so they still sum to the shot count.
    Exact,
}

/// In-process [`Executor`].
pub struct StatevectorSimulator {
    sampling: Sampling,
}

impl StatevectorSimulator {
    /// Sampling simulator drawing from `rng`.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            sampling: Sampling::Shots(rng),
        }
    }

    /// Sampling simulator with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Simulator without sampling error: counts are the rounded expectations.
    pub fn exact() -> Self {
        Self {
            sampling: Sampling::Exact,
        }
    }

    /// Probability of each classical register value after running
    /// `circuit`. Index `k` of the result is the register reading `k`.
    pub fn register_probabilities(
        circuit: &Circuit,
        readout_error: f64,
    ) -> Result<Vec<f64>, ExecutionError> {
        let n = circuit.num_qubits();
        if n > MAX_SIMULATED_QUBITS {
            return Err(ExecutionError::TooManyQubits {
                requested: n,
                available: MAX_SIMULATED_QUBITS,
            });
        }
        let dim = 1usize << n;

        let mut state = vec![Complex64::zero(); dim];
        state[0] = Complex64::new(1.0, 0.0);
        let mut measured: Vec<Option<usize>> = vec![None; n];

        for gate in circuit.gates() {
            match *gate {
                Gate::U3 {
                    qubit,
                    theta,
                    phi,
                    lambda,
                } => {
                    check_index("qubit", qubit, n)?;
                    if measured[qubit].is_some() {
                        return Err(ExecutionError::InvalidCircuit(format!(
                            "gate on qubit {qubit} after it was measured"
                        )));
                    }
                    apply_single_qubit(&mut state, qubit, &u3_matrix(theta, phi, lambda));
                }
                Gate::Measure { qubit, clbit } => {
                    check_index("qubit", qubit, n)?;
                    check_index("classical bit", clbit, n)?;
                    measured[qubit] = Some(clbit);
                }
            }
        }

        let mut register = vec![0.0f64; dim];
        for (k, amp) in state.iter().enumerate() {
            let mut value = 0usize;
            for (q, clbit) in measured.iter().enumerate() {
                if let Some(cb) = clbit {
                    if (k >> q) & 1 == 1 {
                        value |= 1 << cb;
                    }
                }
            }
            register[value] += amp.norm_sqr();
        }

        if readout_error > 0.0 {
            for cb in measured.iter().flatten() {
                apply_readout_error(&mut register, *cb, readout_error);
            }
        }
        Ok(register)
    }

    fn run(
        &mut self,
        circuit: &Circuit,
        readout_error: f64,
        shots: u32,
    ) -> Result<OutcomeDistribution, ExecutionError> {
        let probs = Self::register_probabilities(circuit, readout_error)?;
        let counts = match &mut self.sampling {
            Sampling::Shots(rng) => sample_counts(&probs, shots, rng),
            Sampling::Exact => expected_counts(&probs, shots),
        };
        let width = circuit.num_qubits();
        Ok(OutcomeDistribution::from_counts(
            counts
                .into_iter()
                .enumerate()
                .filter(|(_, c)| *c > 0)
                .map(|(value, c)| (format_bits(value, width), c)),
        ))
    }
}

impl Executor for StatevectorSimulator {
    fn execute(
        &mut self,
        circuits: &[Circuit],
        backend: &Backend,
        shots: u32,
    ) -> Result<Vec<OutcomeDistribution>, ExecutionError> {
        backend.validate(circuits, shots)?;
        debug!(
            "running {} circuit(s) on {} with {} shots",
            circuits.len(),
            backend,
            shots
        );
        let readout_error = backend.readout_error();
        circuits
            .iter()
            .map(|c| self.run(c, readout_error, shots))
            .collect()
    }
}

fn check_index(what: &str, index: usize, n: usize) -> Result<(), ExecutionError> {
    if index < n {
        Ok(())
    } else {
        Err(ExecutionError::InvalidCircuit(format!(
            "{what} {index} out of range for a {n}-qubit circuit"
        )))
    }
}

fn u3_matrix(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [Complex64::new(c, 0.0), -Complex64::from_polar(s, lambda)],
        [Complex64::from_polar(s, phi), Complex64::from_polar(c, phi + lambda)],
    ]
}

fn apply_single_qubit(state: &mut [Complex64], target: usize, m: &Matrix2) {
    let mask = 1usize << target;
    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let (a0, a1) = (state[i], state[j]);
            state[i] = m[0][0] * a0 + m[0][1] * a1;
            state[j] = m[1][0] * a0 + m[1][1] * a1;
        }
    }
}

/// Symmetric bit-flip channel on classical bit `bit`.
fn apply_readout_error(register: &mut [f64], bit: usize, p: f64) {
    let mask = 1usize << bit;
    for i in 0..register.len() {
        if i & mask == 0 {
            let j = i | mask;
            let (p0, p1) = (register[i], register[j]);
            register[i] = (1.0 - p) * p0 + p * p1;
            register[j] = p * p0 + (1.0 - p) * p1;
        }
    }
}

fn sample_counts(probs: &[f64], shots: u32, rng: &mut SmallRng) -> Vec<u64> {
    let mut cumulative = Vec::with_capacity(probs.len());
    let mut total = 0.0;
    for p in probs {
        total += p;
        cumulative.push(total);
    }
    let mut counts = vec![0u64; probs.len()];
    for _ in 0..shots {
        let r = rng.random::<f64>() * total;
        let idx = cumulative
            .partition_point(|&c| c <= r)
            .min(probs.len() - 1);
        counts[idx] += 1;
    }
    counts
}

/// Largest-remainder rounding of `probs * shots`.
fn expected_counts(probs: &[f64], shots: u32) -> Vec<u64> {
    let total: f64 = probs.iter().sum();
    let scaled: Vec<f64> = probs
        .iter()
        .map(|p| p / total * f64::from(shots))
        .collect();
    let mut counts: Vec<u64> = scaled.iter().map(|x| x.floor() as u64).collect();
    let assigned: u64 = counts.iter().sum();
    let mut order: Vec<usize> = (0..probs.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = scaled[a] - scaled[a].floor();
        let fb = scaled[b] - scaled[b].floor();
        fb.total_cmp(&fa).then(a.cmp(&b))
    });
    let remaining = u64::from(shots).saturating_sub(assigned) as usize;
    for &idx in order.iter().take(remaining) {
        counts[idx] += 1;
    }
    counts
}
