/// Grover's search on two qubits.
///
/// The textbook instance: among N = 4 basis states one is marked, and a
/// single round of amplitude amplification takes the uniform
/// superposition to the marked state with certainty.
///
/// The building blocks are ordinary circuit fragments:
///   - `initialize_s` puts every listed qubit into |+⟩, preparing
///     |s⟩ = ½(|00⟩ + |01⟩ + |10⟩ + |11⟩) from |00⟩
///   - `oracle` phase-flips the marked state. Marking |11⟩ makes the
///     whole oracle a bare CZ: it negates exactly the |11⟩ amplitude
///   - `diffuser` reflects every amplitude about the mean (H and X on
///     both qubits wrapped around a CZ)
///
/// One oracle + diffuser round rotates the state by 2θ toward the
/// marked axis, where sin θ = 1/√N. With N = 4, θ = π/6, so after one
/// round the amplitude is sin(3θ) = sin(π/2) = 1: the walk lands
/// exactly on |11⟩ (the usual ⌊(π/4)·√N⌋ = 1 estimate agrees). Running
/// further rounds rotates past the target; see `success_probability`.
use crate::circuit::{Circuit, CircuitError};

/// Width of the fixed search instance.
pub const NUM_QUBITS: usize = 2;

/// Basis index of the marked state |11⟩.
pub const MARKED_STATE: usize = 3;

/// [`MARKED_STATE`] as a measurement label (qubit 0 rightmost).
pub const MARKED_LABEL: &str = "11";

/// Oracle + diffuser rounds that reach certainty for N = 4.
pub const ITERATIONS: usize = 1;

/// Apply an H to every listed qubit.
///
/// On |0...0⟩ this prepares the uniform superposition |s⟩ the search
/// starts from.
pub fn initialize_s(circuit: &mut Circuit, qubits: &[usize]) -> Result<(), CircuitError> {
    for &qubit in qubits {
        circuit.h(qubit)?;
    }
    Ok(())
}

/// Phase-flip the marked state |11⟩.
///
/// CZ sends |11⟩ to −|11⟩ and leaves the other basis states alone,
/// which is the whole job of the oracle for this marking.
pub fn oracle(circuit: &mut Circuit) -> Result<(), CircuitError> {
    circuit.cz(0, 1)?;
    Ok(())
}

/// Reflect all amplitudes about their mean.
///
/// H conjugation turns a phase flip on |00⟩ into a reflection about
/// |s⟩, and the X layer moves the flip from |11⟩ to |00⟩. Any amplitude
/// above the average shrinks, anything below it grows; after the oracle
/// has pushed |11⟩ below the mean, this is what amplifies it.
pub fn diffuser(circuit: &mut Circuit) -> Result<(), CircuitError> {
    circuit
        .h(0)?
        .h(1)?
        .x(0)?
        .x(1)?
        .cz(0, 1)?
        .x(0)?
        .x(1)?
        .h(0)?
        .h(1)?;
    Ok(())
}

/// The full search circuit: state preparation, one oracle query, one
/// diffusion. No measurements; callers append `measure_all` to sample.
pub fn grover_circuit() -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::new(NUM_QUBITS)?;
    initialize_s(&mut circuit, &[0, 1])?;
    oracle(&mut circuit)?;
    diffuser(&mut circuit)?;
    Ok(circuit)
}

/// Probability of measuring |11⟩ after `iterations` rounds, from the
/// closed form sin²((2k+1)·θ) with sin θ = 1/√N.
///
/// For N = 4: zero rounds leave the uniform 0.25, one round reaches
/// 1.0, and a second round falls back to 0.25.
pub fn success_probability(iterations: u32) -> f64 {
    let theta = (0.5f64).asin(); // sin θ = 1/√4
    (((2 * iterations + 1) as f64) * theta).sin().powi(2)
}
