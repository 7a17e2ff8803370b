/// Circuit execution backend.
///
/// `Simulator` runs a validated `Circuit` against a fresh |0...0⟩
/// register and produces one of two result forms:
///   - `statevector(...)` — the exact final state; rejects circuits
///     containing measurements
///   - `counts(...)` — sampled measurement frequencies over a number of
///     shots, with projective collapse at each measurement op
///
/// Sampling is reproducible when the simulator carries a seed: every
/// `counts` call restarts the generator, so repeated calls agree.
use super::gates::{self, apply_cx, apply_cz, apply_mcx, apply_single_qubit_gate};
use super::state::StateVector;
use crate::circuit::{Circuit, Op};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt;

// ── Errors ────────────────────────────────────────────────────────────────

/// Rejected simulation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The statevector path was handed an op it cannot execute.
    UnsupportedInstruction { mnemonic: &'static str },
    /// `counts` was requested for a circuit that never measures.
    NoMeasurements,
    /// `counts` was requested with zero shots.
    NoShots,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedInstruction { mnemonic } =>
                write!(f, "Statevector backend cannot execute {mnemonic}; remove measurements before requesting a statevector"),
            Self::NoMeasurements =>
                write!(f, "Counts requested for a circuit with no measurements"),
            Self::NoShots =>
                write!(f, "Shot count must be at least 1"),
        }
    }
}

impl std::error::Error for SimulationError {}

// ── Simulator ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Simulator {
    /// Fixed seed for deterministic sampling; `None` seeds from entropy.
    seed: Option<u64>,
}

impl Simulator {
    /// Simulator with entropy-seeded sampling.
    pub fn new() -> Self {
        Simulator { seed: None }
    }

    /// Simulator with reproducible sampling. Every `counts` call restarts
    /// the generator from `seed`, so two identical calls return identical
    /// tables.
    pub fn with_seed(seed: u64) -> Self {
        Simulator { seed: Some(seed) }
    }

    /// Run all gate ops and return the exact final state.
    ///
    /// Measurement ops are unsupported on this path: collapse would turn
    /// the exact state into one random branch. Circuits that measure must
    /// go through [`Simulator::counts`].
    pub fn statevector(&self, circuit: &Circuit) -> Result<StateVector, SimulationError> {
        if let Some(op) = circuit.ops().iter().find(|op| op.is_measurement()) {
            return Err(SimulationError::UnsupportedInstruction { mnemonic: op.mnemonic() });
        }

        let mut state = StateVector::new(circuit.num_qubits());
        for op in circuit.ops() {
            apply_gate(&mut state, op);
        }
        Ok(state)
    }

    /// Basis-state probabilities of the exact final state.
    pub fn probabilities(&self, circuit: &Circuit) -> Result<Vec<f64>, SimulationError> {
        Ok(self.statevector(circuit)?.probabilities())
    }

    /// Execute the circuit once per shot and tally measured bitstrings.
    ///
    /// Each shot starts from |0...0⟩ with cleared classical bits and
    /// collapses the state at every measurement op.
    pub fn counts(&self, circuit: &Circuit, shots: u32) -> Result<Counts, SimulationError> {
        if shots == 0 {
            return Err(SimulationError::NoShots);
        }
        if !circuit.has_measurements() {
            return Err(SimulationError::NoMeasurements);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut counts = Counts::new();
        for _ in 0..shots {
            counts.record(run_one_shot(circuit, &mut rng));
        }
        Ok(counts)
    }
}

/// One full circuit execution with projective measurement.
/// Returns the classical register as a label (qubit 0 rightmost).
fn run_one_shot(circuit: &Circuit, rng: &mut StdRng) -> String {
    let num_qubits = circuit.num_qubits();
    let mut state = StateVector::new(num_qubits);
    let mut bits = vec![false; num_qubits];

    for op in circuit.ops() {
        match op {
            Op::Measure(qubit) => {
                bits[*qubit] = state.collapse(*qubit, rng.gen::<f64>());
            }
            Op::MeasureAll => {
                for qubit in 0..num_qubits {
                    bits[qubit] = state.collapse(qubit, rng.gen::<f64>());
                }
            }
            _ => apply_gate(&mut state, op),
        }
    }

    let mut label = String::with_capacity(num_qubits);
    for qubit in (0..num_qubits).rev() {
        label.push(if bits[qubit] { '1' } else { '0' });
    }
    label
}

/// Dispatch one gate op onto the state.
///
/// Measurement ops never reach here (both execution paths intercept
/// them); `Barrier` has no quantum effect.
fn apply_gate(state: &mut StateVector, op: &Op) {
    match op {
        Op::H(q) => apply_single_qubit_gate(state, &gates::hadamard(), *q),
        Op::X(q) => apply_single_qubit_gate(state, &gates::pauli_x(), *q),
        Op::Y(q) => apply_single_qubit_gate(state, &gates::pauli_y(), *q),
        Op::Z(q) => apply_single_qubit_gate(state, &gates::pauli_z(), *q),
        Op::S(q) => apply_single_qubit_gate(state, &gates::s_gate(), *q),
        Op::T(q) => apply_single_qubit_gate(state, &gates::t_gate(), *q),
        Op::Cx { control, target } => apply_cx(state, *control, *target),
        Op::Cz { control, target } => apply_cz(state, *control, *target),
        Op::Ccx { control0, control1, target } => apply_mcx(state, &[*control0, *control1], *target),
        Op::Mcx { controls, target } => apply_mcx(state, controls, *target),
        Op::Measure(_) | Op::MeasureAll | Op::Barrier => {}
    }
}

// ── Counts ────────────────────────────────────────────────────────────────

/// Frequency table of measured bitstrings.
///
/// Labels follow the register convention: qubit 0 is the rightmost
/// character. Only measured qubits set their classical bit; positions
/// never measured read 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    shots: u64,
    table: BTreeMap<String, u64>,
}

impl Counts {
    pub(crate) fn new() -> Self {
        Counts::default()
    }

    pub(crate) fn record(&mut self, label: String) {
        *self.table.entry(label).or_insert(0) += 1;
        self.shots += 1;
    }

    /// Shots that produced `label` (zero for labels never observed).
    pub fn get(&self, label: &str) -> u64 {
        self.table.get(label).copied().unwrap_or(0)
    }

    /// Total shots recorded.
    pub fn total(&self) -> u64 {
        self.shots
    }

    /// Observed frequency of `label` as a fraction of all shots.
    pub fn probability_of(&self, label: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get(label) as f64 / self.shots as f64
    }

    /// The most often observed label and its count.
    /// Ties resolve toward the lexicographically last label.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.table
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(label, &count)| (label.as_str(), count))
    }

    /// Observed labels with their frequencies, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.table.iter().map(|(label, &count)| (label.as_str(), count))
    }

    /// Number of distinct labels observed.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "counts ({} shots):", self.shots)?;
        for (label, count) in self.iter() {
            writeln!(f, "  {label}  {count:>8}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
