/// groverlab Criterion benchmark suite.
///
/// Covers:
///   - Single-qubit gate throughput (H layer on n-qubit registers)
///   - Multi-controlled gate throughput (MCX fan-in)
///   - The full Grover circuit on the statevector backend
///   - Seeded sampling (counts) at notebook-scale shot counts
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use groverlab::circuit::Circuit;
use groverlab::core::Simulator;
use groverlab::grover;

// ── Gate throughput ───────────────────────────────────────────────────────

fn bench_hadamard_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_layer");
    for n in [4usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("H", n), &n, |b, &n| {
            let mut circuit = Circuit::new(n).unwrap();
            for q in 0..n {
                circuit.h(q).unwrap();
            }
            let sim = Simulator::new();
            b.iter(|| sim.statevector(black_box(&circuit)).unwrap());
        });
    }
    group.finish();
}

fn bench_mcx_fan_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcx_fan_in");
    for n in [4usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("MCX", n), &n, |b, &n| {
            let mut circuit = Circuit::new(n).unwrap();
            let controls: Vec<usize> = (0..n - 1).collect();
            for q in 0..n {
                circuit.h(q).unwrap();
            }
            circuit.mcx(&controls, n - 1).unwrap();
            let sim = Simulator::new();
            b.iter(|| sim.statevector(black_box(&circuit)).unwrap());
        });
    }
    group.finish();
}

// ── Grover pipeline ───────────────────────────────────────────────────────

fn bench_grover_statevector(c: &mut Criterion) {
    let circuit = grover::grover_circuit().unwrap();
    let sim = Simulator::new();
    c.bench_function("grover_statevector", |b| {
        b.iter(|| {
            let state = sim.statevector(black_box(&circuit)).unwrap();
            // The search must stay exact while we measure its speed
            assert!((state.probability(grover::MARKED_STATE) - 1.0).abs() < 1e-10);
            state
        })
    });
}

fn bench_grover_sampling(c: &mut Criterion) {
    let mut circuit = grover::grover_circuit().unwrap();
    circuit.measure_all().unwrap();
    let sim = Simulator::with_seed(0xA5A5);
    c.bench_function("grover_sampling_1024", |b| {
        b.iter(|| sim.counts(black_box(&circuit), black_box(1024)).unwrap())
    });
}

// ── Groups ────────────────────────────────────────────────────────────────

criterion_group!(gate_benches, bench_hadamard_layer, bench_mcx_fan_in);
criterion_group!(grover_benches, bench_grover_statevector, bench_grover_sampling);

criterion_main!(gate_benches, grover_benches);
