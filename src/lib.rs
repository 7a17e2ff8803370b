//! # groverlab
//!
//! Grover's quantum search on two qubits, on top of a compact
//! statevector toolkit.
//!
//! ## Quick Start
//!
//! ```rust
//! use groverlab::core::Simulator;
//! use groverlab::grover;
//!
//! // State prep, the |11⟩ oracle, and one diffusion round
//! let circuit = grover::grover_circuit().unwrap();
//!
//! // Exact result: the marked state is certain after one round
//! let state = Simulator::new().statevector(&circuit).unwrap();
//! assert!((state.probability(grover::MARKED_STATE) - 1.0).abs() < 1e-10);
//!
//! // Sampled result: append measurements and count bitstrings
//! let mut sampled = circuit.clone();
//! sampled.measure_all().unwrap();
//! let counts = Simulator::with_seed(7).counts(&sampled, 1024).unwrap();
//! assert_eq!(counts.get(grover::MARKED_LABEL), 1024);
//! ```

pub mod circuit;
pub mod core;
pub mod grover;
pub mod render;
