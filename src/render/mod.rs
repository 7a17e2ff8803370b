/// Text-mode result rendering.
///
/// Terminal counterparts of the usual result plots: a horizontal bar
/// histogram for sampled counts and a full amplitude table for exact
/// statevectors.
use crate::core::{Counts, StateVector};

/// Width of a full histogram bar, in characters.
const BAR_WIDTH: u64 = 40;

/// Horizontal bar chart of measured counts.
///
/// Bars scale to the most frequent label; every observed label gets at
/// least one bar segment. Labels render qubit 0 rightmost, matching the
/// counts table.
pub fn histogram(counts: &Counts) -> String {
    let mut out = format!("measurement histogram ({} shots)\n", counts.total());

    let max = counts.iter().map(|(_, count)| count).max().unwrap_or(0);
    if max == 0 {
        out.push_str("  (no samples)\n");
        return out;
    }

    for (label, count) in counts.iter() {
        let filled = ((count * BAR_WIDTH) / max).max(1) as usize;
        let bar = "█".repeat(filled);
        let percent = 100.0 * count as f64 / counts.total() as f64;
        out.push_str(&format!(
            "  {}  {:<width$}  {:>6}  {:>5.1}%\n",
            label,
            bar,
            count,
            percent,
            width = BAR_WIDTH as usize
        ));
    }
    out
}

/// Every basis state with amplitude and probability, including the
/// negligible ones (`StateVector`'s `Display` filters those out).
pub fn amplitude_table(state: &StateVector) -> String {
    let mut out = String::from("  state   amplitude            probability\n");
    for index in 0..state.dim() {
        let amp = state.amplitude(index);
        out.push_str(&format!(
            "  |{}⟩   {:+.4} {:+.4}i     {:.4}\n",
            state.basis_label(index),
            amp.re,
            amp.im,
            state.probability(index)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Circuit;
    use crate::core::Simulator;

    fn sample_counts() -> Counts {
        let mut counts = Counts::new();
        for _ in 0..30 {
            counts.record("00".to_string());
        }
        for _ in 0..10 {
            counts.record("11".to_string());
        }
        counts
    }

    #[test]
    fn test_histogram_scales_to_max() {
        let rendered = histogram(&sample_counts());
        assert!(rendered.contains("40 shots"));
        // The dominant label owns a full-width bar
        assert!(rendered.contains(&"█".repeat(40)));
        assert!(rendered.contains("75.0%"));
        assert!(rendered.contains("25.0%"));
    }

    #[test]
    fn test_histogram_observed_labels_always_visible() {
        let mut counts = Counts::new();
        for _ in 0..1000 {
            counts.record("0".to_string());
        }
        counts.record("1".to_string());
        let rendered = histogram(&counts);
        // A single shot out of a thousand still draws one segment
        for line in rendered.lines().filter(|l| l.trim_start().starts_with('1')) {
            assert!(line.contains('█'));
        }
    }

    #[test]
    fn test_histogram_empty_counts() {
        let rendered = histogram(&Counts::new());
        assert!(rendered.contains("(no samples)"));
    }

    #[test]
    fn test_amplitude_table_lists_every_state() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(0).unwrap();
        let state = Simulator::new().statevector(&circuit).unwrap();
        let rendered = amplitude_table(&state);
        for label in ["|00⟩", "|01⟩", "|10⟩", "|11⟩"] {
            assert!(rendered.contains(label), "missing row {label}");
        }
        // Header plus one row per basis state
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_amplitude_table_shows_signs() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.x(0).unwrap().z(0).unwrap();
        let state = Simulator::new().statevector(&circuit).unwrap();
        let rendered = amplitude_table(&state);
        assert!(rendered.contains("-1.0000"));
    }
}
