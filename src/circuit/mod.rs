/// Programmatic circuit construction.
///
/// A `Circuit` is a flat, ordered sequence of `Op`s over a fixed qubit
/// register. It is the canonical form the simulator backend executes.
///
/// Design principles:
///   - One enum variant per operation — no string dispatch at runtime
///   - Qubit indices as usize — validated when the op is appended
///   - A successfully built circuit never fails bounds checks downstream
///   - Appenders return `&mut Self` so construction chains with `?`
use std::collections::BTreeMap;

/// Widest register the statevector backend accepts. A 2^30-amplitude
/// state already spans 16 GiB; anything wider is a construction error.
pub const MAX_QUBITS: usize = 30;

// ── Errors ────────────────────────────────────────────────────────────────

/// Rejected circuit constructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// A circuit needs at least one qubit.
    NoQubits,
    /// Requested width exceeds [`MAX_QUBITS`].
    TooManyQubits { requested: usize },
    /// An op referenced a qubit the register does not have.
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    /// A multi-qubit op named the same qubit more than once.
    OverlappingOperands { mnemonic: &'static str },
    /// MCX was given an empty control list.
    NoControls,
}

impl std::fmt::Display for CircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoQubits =>
                write!(f, "Circuit must have at least one qubit"),
            Self::TooManyQubits { requested } =>
                write!(f, "Circuit width {requested} exceeds the {MAX_QUBITS}-qubit statevector limit"),
            Self::QubitOutOfRange { qubit, num_qubits } =>
                write!(f, "Qubit index {qubit} out of range for a {num_qubits}-qubit circuit"),
            Self::OverlappingOperands { mnemonic } =>
                write!(f, "{mnemonic} requires distinct qubits"),
            Self::NoControls =>
                write!(f, "MCX requires at least one control qubit"),
        }
    }
}

impl std::error::Error for CircuitError {}

// ── Op ────────────────────────────────────────────────────────────────────

/// A single circuit operation.
///
/// Gate ops name their qubits explicitly. `MeasureAll` and `Barrier` act
/// on the whole register and therefore name none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ── Single-qubit gates ──────────────────────────────────────────────
    H(usize),
    X(usize),
    Y(usize),
    Z(usize),
    S(usize),
    T(usize),

    // ── Multi-qubit gates ───────────────────────────────────────────────
    Cx  { control: usize, target: usize },
    Cz  { control: usize, target: usize },
    Ccx { control0: usize, control1: usize, target: usize },
    /// Multi-controlled X: flips `target` where every control is |1⟩.
    /// One control degenerates to CX, two to CCX.
    Mcx { controls: Vec<usize>, target: usize },

    // ── Measurement ─────────────────────────────────────────────────────
    Measure(usize),
    MeasureAll,

    // ── Structural (no quantum effect) ──────────────────────────────────
    Barrier,
}

impl Op {
    /// Mnemonic name used in listings and diagnostics.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::H(_)          => "H",
            Self::X(_)          => "X",
            Self::Y(_)          => "Y",
            Self::Z(_)          => "Z",
            Self::S(_)          => "S",
            Self::T(_)          => "T",
            Self::Cx { .. }     => "CX",
            Self::Cz { .. }     => "CZ",
            Self::Ccx { .. }    => "CCX",
            Self::Mcx { .. }    => "MCX",
            Self::Measure(_)    => "MEASURE",
            Self::MeasureAll    => "MEASURE_ALL",
            Self::Barrier       => "BARRIER",
        }
    }

    /// True if this op applies a quantum gate.
    pub fn is_gate(&self) -> bool {
        !matches!(self, Self::Measure(_) | Self::MeasureAll | Self::Barrier)
    }

    /// True if this op is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::Measure(_) | Self::MeasureAll)
    }

    /// Qubit indices named by this op, controls before targets.
    /// Empty for `MeasureAll` and `Barrier` (they touch every qubit).
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Self::H(q) | Self::X(q) | Self::Y(q) | Self::Z(q)
            | Self::S(q) | Self::T(q) | Self::Measure(q)    => vec![*q],
            Self::Cx { control, target }
            | Self::Cz { control, target }                  => vec![*control, *target],
            Self::Ccx { control0, control1, target }        => vec![*control0, *control1, *target],
            Self::Mcx { controls, target } => {
                let mut qs = controls.clone();
                qs.push(*target);
                qs
            }
            Self::MeasureAll | Self::Barrier                => vec![],
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::H(q)                                  => write!(f, "H {q}"),
            Self::X(q)                                  => write!(f, "X {q}"),
            Self::Y(q)                                  => write!(f, "Y {q}"),
            Self::Z(q)                                  => write!(f, "Z {q}"),
            Self::S(q)                                  => write!(f, "S {q}"),
            Self::T(q)                                  => write!(f, "T {q}"),
            Self::Cx  { control, target }               => write!(f, "CX {control} {target}"),
            Self::Cz  { control, target }               => write!(f, "CZ {control} {target}"),
            Self::Ccx { control0, control1, target }    => write!(f, "CCX {control0} {control1} {target}"),
            Self::Mcx { controls, target } => {
                let args: Vec<String> = controls.iter().map(|q| q.to_string()).collect();
                write!(f, "MCX {} {target}", args.join(" "))
            }
            Self::Measure(q)                            => write!(f, "MEASURE {q}"),
            Self::MeasureAll                            => write!(f, "MEASURE_ALL"),
            Self::Barrier                               => write!(f, "BARRIER"),
        }
    }
}

// ── Circuit ───────────────────────────────────────────────────────────────

/// An ordered list of operations on a `num_qubits`-wide register.
#[derive(Debug, Clone)]
pub struct Circuit {
    num_qubits: usize,
    ops: Vec<Op>,
}

impl Circuit {
    /// Empty circuit over `num_qubits` qubits (1..=[`MAX_QUBITS`]).
    pub fn new(num_qubits: usize) -> Result<Self, CircuitError> {
        if num_qubits == 0 {
            return Err(CircuitError::NoQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(CircuitError::TooManyQubits { requested: num_qubits });
        }
        Ok(Circuit { num_qubits, ops: Vec::new() })
    }

    /// Validate and record an op. All named appenders funnel through here,
    /// so every stored op is known to be in bounds with distinct operands.
    pub fn push(&mut self, op: Op) -> Result<&mut Self, CircuitError> {
        if let Op::Mcx { controls, .. } = &op {
            if controls.is_empty() {
                return Err(CircuitError::NoControls);
            }
        }
        let operands = op.qubits();
        for &qubit in &operands {
            if qubit >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
            }
        }
        for i in 0..operands.len() {
            for j in i + 1..operands.len() {
                if operands[i] == operands[j] {
                    return Err(CircuitError::OverlappingOperands { mnemonic: op.mnemonic() });
                }
            }
        }
        self.ops.push(op);
        Ok(self)
    }

    // ── Gate appenders ──────────────────────────────────────────────────

    /// Hadamard on `qubit`.
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::H(qubit))
    }

    /// Pauli-X (NOT) on `qubit`.
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::X(qubit))
    }

    /// Pauli-Y on `qubit`.
    pub fn y(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Y(qubit))
    }

    /// Pauli-Z on `qubit`.
    pub fn z(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Z(qubit))
    }

    /// S gate (√Z) on `qubit`.
    pub fn s(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::S(qubit))
    }

    /// T gate (√S) on `qubit`.
    pub fn t(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::T(qubit))
    }

    /// Controlled-X.
    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Cx { control, target })
    }

    /// Controlled-Z. Symmetric in its operands: the |11⟩ component of the
    /// pair picks up a phase of −1, whichever qubit is called the control.
    pub fn cz(&mut self, control: usize, target: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Cz { control, target })
    }

    /// Toffoli (CCX).
    pub fn ccx(&mut self, control0: usize, control1: usize, target: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Ccx { control0, control1, target })
    }

    /// Multi-controlled X over any positive number of controls.
    pub fn mcx(&mut self, controls: &[usize], target: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Mcx { controls: controls.to_vec(), target })
    }

    /// Measure one qubit into its classical bit.
    pub fn measure(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.push(Op::Measure(qubit))
    }

    /// Measure every qubit, in register order.
    pub fn measure_all(&mut self) -> Result<&mut Self, CircuitError> {
        self.push(Op::MeasureAll)
    }

    /// Timing fence: synchronizes all qubit worldlines without adding depth.
    pub fn barrier(&mut self) -> Result<&mut Self, CircuitError> {
        self.push(Op::Barrier)
    }

    // ── Introspection ───────────────────────────────────────────────────

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of gate ops (measurements and barriers excluded).
    pub fn gate_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_gate()).count()
    }

    /// True if any op is a measurement.
    pub fn has_measurements(&self) -> bool {
        self.ops.iter().any(|op| op.is_measurement())
    }

    /// Per-mnemonic op histogram, in mnemonic order.
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut histogram = BTreeMap::new();
        for op in &self.ops {
            *histogram.entry(op.mnemonic()).or_insert(0) += 1;
        }
        histogram
    }

    /// Circuit depth: the longest qubit worldline when ops that share no
    /// qubit run in the same layer. Multi-qubit ops synchronize their
    /// operands; `MeasureAll` occupies one layer across the register;
    /// `Barrier` aligns all worldlines without occupying a layer.
    pub fn depth(&self) -> usize {
        let mut frontier = vec![0usize; self.num_qubits];
        for op in &self.ops {
            match op {
                Op::Barrier => {
                    let level = frontier.iter().copied().max().unwrap_or(0);
                    for slot in &mut frontier {
                        *slot = level;
                    }
                }
                Op::MeasureAll => {
                    let level = frontier.iter().copied().max().unwrap_or(0) + 1;
                    for slot in &mut frontier {
                        *slot = level;
                    }
                }
                _ => {
                    let qubits = op.qubits();
                    let level = qubits.iter().map(|&q| frontier[q]).max().unwrap_or(0) + 1;
                    for &q in &qubits {
                        frontier[q] = level;
                    }
                }
            }
        }
        frontier.into_iter().max().unwrap_or(0)
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "circuit: {} qubit(s), {} op(s), depth {}",
            self.num_qubits,
            self.ops.len(),
            self.depth()
        )?;
        for op in &self.ops {
            writeln!(f, "  {op}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
