//! The boundary to whatever actually runs circuits.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::circuit::Circuit;
use crate::outcome::OutcomeDistribution;

/// Largest register the local simulator accepts.
pub const MAX_SIMULATED_QUBITS: usize = 20;
/// Shot cap for simulated jobs.
pub const MAX_SIMULATED_SHOTS: u32 = 1_000_000;

/// Characteristics of a named quantum device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub name: String,
    pub num_qubits: usize,
    pub max_shots: u32,
    /// Probability that a measured bit is reported flipped.
    pub readout_error: f64,
}

impl DeviceProfile {
    /// Look up one of the known devices.
    pub fn named(name: &str) -> Option<Self> {
        let (num_qubits, max_shots, readout_error) = match name {
            "ibmq_5_tenerife" | "ibmqx4" => (5, 8192, 0.06),
            "ibmqx2" => (5, 8192, 0.04),
            "ibmq_16_melbourne" => (14, 8192, 0.08),
            _ => return None,
        };
        Some(Self {
            name: String::from(name),
            num_qubits,
            max_shots,
            readout_error,
        })
    }
}

/// Where a batch of circuits runs. Chosen once per match.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Simulator,
    Device(DeviceProfile),
}

impl Backend {
    /// Backend for a named device.
    pub fn device(name: &str) -> Result<Self, ExecutionError> {
        DeviceProfile::named(name)
            .map(Backend::Device)
            .ok_or_else(|| ExecutionError::UnknownDevice(String::from(name)))
    }

    pub fn name(&self) -> &str {
        match self {
            Backend::Simulator => "qasm_simulator",
            Backend::Device(profile) => &profile.name,
        }
    }

    pub fn is_simulator(&self) -> bool {
        matches!(self, Backend::Simulator)
    }

    pub fn num_qubits(&self) -> usize {
        match self {
            Backend::Simulator => MAX_SIMULATED_QUBITS,
            Backend::Device(profile) => profile.num_qubits,
        }
    }

    pub fn max_shots(&self) -> u32 {
        match self {
            Backend::Simulator => MAX_SIMULATED_SHOTS,
            Backend::Device(profile) => profile.max_shots,
        }
    }

    pub fn readout_error(&self) -> f64 {
        match self {
            Backend::Simulator => 0.0,
            Backend::Device(profile) => profile.readout_error,
        }
    }

    /// Reject a job this backend cannot run.
    pub fn validate(&self, circuits: &[Circuit], shots: u32) -> Result<(), ExecutionError> {
        if shots == 0 {
            return Err(ExecutionError::NoShots);
        }
        if shots > self.max_shots() {
            return Err(ExecutionError::TooManyShots {
                requested: shots,
                max: self.max_shots(),
            });
        }
        for circuit in circuits {
            if circuit.num_qubits() > self.num_qubits() {
                return Err(ExecutionError::TooManyQubits {
                    requested: circuit.num_qubits(),
                    available: self.num_qubits(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failures of the execution service. None of these are recoverable within
/// a match.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionError {
    NoShots,
    TooManyShots { requested: u32, max: u32 },
    TooManyQubits { requested: usize, available: usize },
    UnknownDevice(String),
    InvalidCircuit(String),
    /// The service answered with a different number of results than circuits.
    MissingResults { expected: usize, received: usize },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::NoShots => write!(f, "Shot count must be at least 1"),
            ExecutionError::TooManyShots { requested, max } => {
                write!(f, "Requested {requested} shots but the backend allows at most {max}")
            }
            ExecutionError::TooManyQubits {
                requested,
                available,
            } => write!(
                f,
                "Circuit needs {requested} qubits but the backend has {available}"
            ),
            ExecutionError::UnknownDevice(name) => write!(f, "Unknown device '{name}'"),
            ExecutionError::InvalidCircuit(msg) => write!(f, "Invalid circuit: {msg}"),
            ExecutionError::MissingResults { expected, received } => write!(
                f,
                "Expected {expected} results from the backend, received {received}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecutionError {}

/// Runs a batch of circuits and reports one histogram per circuit, in the
/// order submitted. Each histogram sums to `shots`.
pub trait Executor {
    fn execute(
        &mut self,
        circuits: &[Circuit],
        backend: &Backend,
        shots: u32,
    ) -> Result<Vec<OutcomeDistribution>, ExecutionError>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn execute(
        &mut self,
        circuits: &[Circuit],
        backend: &Backend,
        shots: u32,
    ) -> Result<Vec<OutcomeDistribution>, ExecutionError> {
        (**self).execute(circuits, backend, shots)
    }
}
