use std::error::Error;

use groverlab::circuit::Circuit;
use groverlab::core::Simulator;
use groverlab::grover;
use groverlab::render;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    print_banner();

    let outcome = match args.get(1).map(String::as_str) {
        None | Some("demo")           => run_all_demos(),
        Some("state")                 => demo_one_iteration(),
        Some("sample")                => cli_sample(args.get(2).map(String::as_str), args.get(3).map(String::as_str)),
        Some("help") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown command '{}'. Run 'groverlab help' for usage.", unknown);
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────

fn cli_sample(shots: Option<&str>, seed: Option<&str>) -> Result<(), Box<dyn Error>> {
    let shots = match shots {
        Some(raw) => raw.parse::<u32>().map_err(|_| format!("Invalid shot count '{raw}'"))?,
        None => 1024,
    };
    let seed = match seed {
        Some(raw) => Some(raw.parse::<u64>().map_err(|_| format!("Invalid seed '{raw}'"))?),
        None => None,
    };
    demo_sampling(shots, seed)
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║          groverlab v0.1.0                    ║");
    println!("║  Two-Qubit Grover Search on a Statevector    ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
}

fn print_help() {
    println!("Usage: groverlab [command]");
    println!();
    println!("Commands:");
    println!("  demo                   Run the full walkthrough (default)");
    println!("  state                  Exact statevector of one Grover iteration");
    println!("  sample [shots] [seed]  Sample measurement counts (default 1024 shots)");
    println!("  help                   Show this message");
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_all_demos() -> Result<(), Box<dyn Error>> {
    demo_superposition()?;
    demo_oracle()?;
    demo_one_iteration()?;
    demo_sampling(1024, None)?;
    demo_iteration_sweep()
}

fn demo_superposition() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 1: Uniform Superposition ━━━━━━━━━━━━━━━");
    println!("H on both qubits maps |00⟩ to |s⟩: weight ¼ on every state.\n");

    let mut circuit = Circuit::new(grover::NUM_QUBITS)?;
    grover::initialize_s(&mut circuit, &[0, 1])?;
    let state = Simulator::new().statevector(&circuit)?;
    print!("{}", render::amplitude_table(&state));
    println!();
    Ok(())
}

fn demo_oracle() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 2: Oracle Phase Flip ━━━━━━━━━━━━━━━━━━━");
    println!("CZ negates the |11⟩ amplitude. The probabilities don't move;");
    println!("the flip only becomes visible once the diffuser acts on it.\n");

    let mut circuit = Circuit::new(grover::NUM_QUBITS)?;
    grover::initialize_s(&mut circuit, &[0, 1])?;
    grover::oracle(&mut circuit)?;
    let state = Simulator::new().statevector(&circuit)?;
    print!("{}", render::amplitude_table(&state));
    println!();
    Ok(())
}

fn demo_one_iteration() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 3: One Grover Iteration ━━━━━━━━━━━━━━━━");
    println!("Preparation, oracle, diffuser:\n");

    let circuit = grover::grover_circuit()?;
    print!("{circuit}");
    println!();

    let state = Simulator::new().statevector(&circuit)?;
    print!("{}", render::amplitude_table(&state));
    println!();
    println!("P(|11⟩) = {:.4}. One round is enough for N = 4.", state.probability(grover::MARKED_STATE));
    println!();
    Ok(())
}

fn demo_sampling(shots: u32, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 4: Sampling the Search ━━━━━━━━━━━━━━━━━");
    println!("Appending MEASURE_ALL and sampling {shots} shot(s).\n");

    let mut circuit = grover::grover_circuit()?;
    circuit.measure_all()?;
    let sim = match seed {
        Some(s) => Simulator::with_seed(s),
        None => Simulator::new(),
    };
    let counts = sim.counts(&circuit, shots)?;
    print!("{}", render::histogram(&counts));

    if let Some((label, count)) = counts.most_frequent() {
        println!("\nMost frequent outcome: |{label}⟩ ({count} of {} shots)", counts.total());
    }
    println!();
    Ok(())
}

fn demo_iteration_sweep() -> Result<(), Box<dyn Error>> {
    println!("━━━ Demo 5: Why Exactly One Iteration ━━━━━━━━━━━");
    println!("P(|11⟩) after k rounds, from the closed form sin²((2k+1)·π/6):\n");

    for k in 0..4 {
        let p = grover::success_probability(k);
        let marker = if k as usize == grover::ITERATIONS { "  ← stop here" } else { "" };
        println!("  k = {k}   P = {p:.4}{marker}");
    }
    println!();
    Ok(())
}
