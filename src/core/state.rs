/// Quantum state vector representation.
///
/// An n-qubit register has 2^n basis states; the state vector holds one
/// complex amplitude per basis state and must satisfy Σ|αᵢ|² = 1.
///
/// Qubit 0 is the least-significant bit of the basis index, so basis
/// labels read with qubit 0 as the rightmost character: on two qubits,
/// index 3 is |11⟩ and index 1 is |01⟩.
use crate::circuit::MAX_QUBITS;
use num_complex::Complex64;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩.
    /// All amplitude is concentrated in the all-zeros basis state.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits >= 1, "at least one qubit required");
        assert!(
            num_qubits <= MAX_QUBITS,
            "num_qubits > {} would exceed the statevector memory cap",
            MAX_QUBITS
        );

        let dim = 1 << num_qubits; // 2^n
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[0] = Complex64::new(1.0, 0.0); // |0...0⟩ state

        Self { num_qubits, amplitudes }
    }

    #[inline(always)]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space: 2^n
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitude of basis state `index`.
    #[inline(always)]
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// All amplitudes, in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable amplitude access for gate application. Callers are
    /// responsible for keeping the state normalized.
    #[inline(always)]
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Probability of measuring basis state `index`: |αᵢ|²
    #[inline(always)]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Probabilities for every basis state, in basis-index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Total probability (should be ≈ 1.0 after normalization)
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Re-normalize the state vector to unit length.
    /// Used after measurement collapse and numerical drift.
    ///
    /// Panics if the state has collapsed to zero, which no unitary or
    /// projective update in this crate can produce.
    pub fn normalize(&mut self) {
        let total = self.total_probability();
        if total < 1e-12 {
            panic!("cannot normalize a zero state vector");
        }
        let inv_norm = 1.0 / total.sqrt();
        for amp in self.amplitudes.iter_mut() {
            *amp = amp.scale(inv_norm);
        }
    }

    /// Reset to |0...0⟩
    pub fn reset(&mut self) {
        for amp in self.amplitudes.iter_mut() {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Check if this qubit's bit is set in basis state index `basis_idx`.
    /// Qubit 0 is the least-significant bit.
    #[inline(always)]
    pub fn qubit_bit(basis_idx: usize, qubit: usize) -> bool {
        (basis_idx >> qubit) & 1 == 1
    }

    /// Render basis state `index` as the inside of a ket: "010...".
    /// Qubit 0 is rightmost (LSB convention).
    pub fn basis_label(&self, index: usize) -> String {
        let mut s = String::with_capacity(self.num_qubits);
        for q in (0..self.num_qubits).rev() {
            s.push(if Self::qubit_bit(index, q) { '1' } else { '0' });
        }
        s
    }

    /// Probability of measuring qubit `qubit` in state |1⟩,
    /// marginalized over all other qubits.
    pub fn marginal_probability_one(&self, qubit: usize) -> f64 {
        assert!(qubit < self.num_qubits, "qubit {} out of range", qubit);
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| Self::qubit_bit(*i, qubit))
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Perform projective measurement collapse on qubit `qubit`, given a
    /// uniform sample from [0, 1).
    ///
    /// Returns `true` if the qubit measured as |1⟩, `false` for |0⟩.
    /// The state vector is collapsed and re-normalized in place.
    pub fn collapse(&mut self, qubit: usize, sample: f64) -> bool {
        let prob_one = self.marginal_probability_one(qubit);
        let outcome = sample < prob_one;

        // Zero out amplitudes inconsistent with the measurement outcome
        for i in 0..self.dim() {
            if Self::qubit_bit(i, qubit) != outcome {
                self.amplitudes[i] = Complex64::new(0.0, 0.0);
            }
        }

        self.normalize();
        outcome
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateVector ({} qubits, dim={}):", self.num_qubits, self.dim())?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob > 1e-12 {
                writeln!(
                    f,
                    "  |{}⟩  amplitude: {:.4}  probability: {:.4}",
                    self.basis_label(i),
                    amp,
                    prob
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sv = StateVector::new(2);
        assert_eq!(sv.dim(), 4);
        assert_eq!(sv.amplitude(0), Complex64::new(1.0, 0.0));
        for i in 1..4 {
            assert_eq!(sv.amplitude(i), Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_total_probability_initial() {
        let sv = StateVector::new(3);
        assert!((sv.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize() {
        let mut sv = StateVector::new(1);
        // Manually scale to break normalization
        sv.amplitudes_mut()[0] = Complex64::new(2.0, 0.0);
        sv.amplitudes_mut()[1] = Complex64::new(0.0, 0.0);
        sv.normalize();
        assert!((sv.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_qubit_bit() {
        // basis index 5 = 0b101: qubit 0 = 1, qubit 1 = 0, qubit 2 = 1
        assert!(StateVector::qubit_bit(5, 0));
        assert!(!StateVector::qubit_bit(5, 1));
        assert!(StateVector::qubit_bit(5, 2));
    }

    #[test]
    fn test_basis_label_orientation() {
        let sv = StateVector::new(3);
        assert_eq!(sv.basis_label(0), "000");
        assert_eq!(sv.basis_label(1), "001");
        assert_eq!(sv.basis_label(5), "101");
        assert_eq!(sv.basis_label(7), "111");
    }

    #[test]
    fn test_marginal_probability() {
        let mut sv = StateVector::new(1);
        // Equal superposition: |0⟩ and |1⟩ with equal amplitude
        let amp = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
        sv.amplitudes_mut()[0] = amp;
        sv.amplitudes_mut()[1] = amp;
        let p = sv.marginal_probability_one(0);
        assert!((p - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_collapse_forces_outcome() {
        let mut sv = StateVector::new(1);
        let amp = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
        sv.amplitudes_mut()[0] = amp;
        sv.amplitudes_mut()[1] = amp;

        // P(|1⟩) = 0.5 and the sample is above it: outcome must be |0⟩
        let outcome = sv.collapse(0, 0.9);
        assert!(!outcome);
        assert!((sv.probability(0) - 1.0).abs() < 1e-10);
        assert!(sv.probability(1) < 1e-12);
        assert!((sv.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_collapse_renormalizes_surviving_branch() {
        let mut sv = StateVector::new(2);
        // (|00⟩ + |11⟩)/√2, then measure qubit 0 as |1⟩
        let amp = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
        sv.amplitudes_mut()[0] = amp;
        sv.amplitudes_mut()[3] = amp;

        let outcome = sv.collapse(0, 0.1);
        assert!(outcome);
        assert!((sv.probability(3) - 1.0).abs() < 1e-10);
        assert!((sv.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_probabilities_vector() {
        let sv = StateVector::new(2);
        let probs = sv.probabilities();
        assert_eq!(probs.len(), 4);
        assert!((probs[0] - 1.0).abs() < 1e-10);
        assert!(probs[1].abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut sv = StateVector::new(2);
        sv.amplitudes_mut()[0] = Complex64::new(0.0, 0.0);
        sv.amplitudes_mut()[3] = Complex64::new(1.0, 0.0);
        sv.reset();
        assert_eq!(sv.amplitude(0), Complex64::new(1.0, 0.0));
        assert_eq!(sv.amplitude(3), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_display_filters_negligible_states() {
        let mut sv = StateVector::new(2);
        sv.amplitudes_mut()[0] = Complex64::new(0.0, 0.0);
        sv.amplitudes_mut()[3] = Complex64::new(1.0, 0.0);
        let rendered = sv.to_string();
        assert!(rendered.contains("|11⟩"));
        assert!(!rendered.contains("|00⟩"));
    }
}
