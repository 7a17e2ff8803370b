/// Quantum gate definitions and application logic.
///
/// Gates are represented as unitary matrices.
/// Single-qubit gates are 2×2 complex matrices.
/// Multi-qubit gates operate on tensor product spaces.
///
/// Application strategy: iterate over all 2^n basis states,
/// pair up states that differ only in the target qubit, then
/// apply the 2×2 gate matrix to each pair — O(2^n) per gate.
use super::state::StateVector;
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// A 2×2 complex unitary matrix representing a single-qubit gate.
/// Row-major: matrix[row][col]
pub type Matrix2x2 = [[Complex64; 2]; 2];

// ── Standard Gate Matrices ─────────────────────────────────────────────────

/// Hadamard gate — creates superposition from a basis state.
/// H = (1/√2) * [[1, 1], [1, -1]]
pub fn hadamard() -> Matrix2x2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let neg_h = Complex64::new(-FRAC_1_SQRT_2, 0.0);
    [
        [h, h],
        [h, neg_h],
    ]
}

/// Pauli-X gate — quantum NOT, flips |0⟩ ↔ |1⟩.
/// X = [[0, 1], [1, 0]]
pub fn pauli_x() -> Matrix2x2 {
    [
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
    ]
}

/// Pauli-Y gate — bit + phase flip.
/// Y = [[0, -i], [i, 0]]
pub fn pauli_y() -> Matrix2x2 {
    [
        [Complex64::new(0.0, 0.0), -Complex64::i()],
        [Complex64::i(),           Complex64::new(0.0, 0.0)],
    ]
}

/// Pauli-Z gate — phase flip, |1⟩ → -|1⟩.
/// Z = [[1, 0], [0, -1]]
pub fn pauli_z() -> Matrix2x2 {
    [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)],
    ]
}

/// S gate — π/2 phase gate.
/// S = [[1, 0], [0, i]]
pub fn s_gate() -> Matrix2x2 {
    [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::i()],
    ]
}

/// T gate — π/4 phase gate.
/// T = [[1, 0], [0, e^(iπ/4)]]
pub fn t_gate() -> Matrix2x2 {
    let phase = Complex64::from_polar(1.0, PI / 4.0);
    [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), phase],
    ]
}

// ── Gate Application ───────────────────────────────────────────────────────

/// Apply a single-qubit gate to `target` qubit in the state vector.
///
/// Walks the amplitude vector once, updating each (target=0, target=1)
/// pair with the 2×2 matrix.
pub fn apply_single_qubit_gate(state: &mut StateVector, gate: &Matrix2x2, target: usize) {
    assert!(target < state.num_qubits(), "target qubit out of range");

    let dim = state.dim();
    let mask = 1usize << target;
    let amps = state.amplitudes_mut();

    for i in 0..dim {
        if i & mask == 0 {
            let j = i | mask; // partner state with target bit set
            let a = amps[i];
            let b = amps[j];
            amps[i] = gate[0][0] * a + gate[0][1] * b;
            amps[j] = gate[1][0] * a + gate[1][1] * b;
        }
    }
}

/// Apply CX (controlled-NOT) gate.
///
/// Flips `target` qubit when `control` qubit is |1⟩.
/// Implements quantum entanglement when combined with Hadamard.
pub fn apply_cx(state: &mut StateVector, control: usize, target: usize) {
    assert!(control < state.num_qubits(), "control qubit out of range");
    assert!(target < state.num_qubits(), "target qubit out of range");
    assert_ne!(control, target, "control and target must be different qubits");

    let dim = state.dim();
    let control_mask = 1 << control;
    let target_mask = 1 << target;
    let amps = state.amplitudes_mut();

    for i in 0..dim {
        // Only act on basis states where control = 1 and target = 0
        if (i & control_mask != 0) && (i & target_mask == 0) {
            let j = i | target_mask; // flip the target bit
            amps.swap(i, j);
        }
    }
}

/// Apply CZ (controlled-Z) gate.
///
/// Phase-flips the |11⟩ component of the pair; symmetric in its
/// operands.
pub fn apply_cz(state: &mut StateVector, control: usize, target: usize) {
    assert!(control < state.num_qubits(), "control qubit out of range");
    assert!(target < state.num_qubits(), "target qubit out of range");
    assert_ne!(control, target, "control and target must be different qubits");

    let dim = state.dim();
    let control_mask = 1 << control;
    let target_mask = 1 << target;
    let amps = state.amplitudes_mut();

    for i in 0..dim {
        if (i & control_mask != 0) && (i & target_mask != 0) {
            amps[i] = -amps[i];
        }
    }
}

/// Apply a multi-controlled X — flips `target` when every control is |1⟩.
///
/// One control is CX, two controls the Toffoli; any higher control count
/// uses the same mask test.
pub fn apply_mcx(state: &mut StateVector, controls: &[usize], target: usize) {
    assert!(!controls.is_empty(), "MCX needs at least one control");
    assert!(target < state.num_qubits(), "target qubit out of range");

    let mut control_mask = 0usize;
    for &control in controls {
        assert!(control < state.num_qubits(), "control qubit out of range");
        assert_ne!(control, target, "controls and target must be different qubits");
        control_mask |= 1 << control;
    }

    let dim = state.dim();
    let target_mask = 1 << target;
    let amps = state.amplitudes_mut();

    for i in 0..dim {
        if (i & control_mask == control_mask) && (i & target_mask == 0) {
            let j = i | target_mask;
            amps.swap(i, j);
        }
    }
}
