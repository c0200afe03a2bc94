//! Performance benchmark comparing serial and parallel passes per topology

use std::time::Instant;
use life_automaton::{Algorithm, Automaton, AutomatonConfig, FillMode, RuleSet, SeedPolicy, Topology};

fn benchmark(size: usize, topology: Topology, algorithm: Algorithm, iterations: u32) -> life_automaton::Result<f64> {
    let config = AutomatonConfig::new(size, size)
        .with_rules(RuleSet::conway().with_topology(topology))
        .with_seed_policy(SeedPolicy::new(FillMode::Random, 0)?)
        .with_algorithm(algorithm)
        .with_rng_seed(0);
    let mut automaton = Automaton::new(config)?;

    let start = Instant::now();
    for _ in 0..iterations {
        automaton.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> life_automaton::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== Cellular Automaton Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 5000];
    let iterations = 20;

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Size", "Topology", "Serial", "Parallel", "Speedup");
    println!("{:-<58}", "");

    for size in sizes {
        for topology in Topology::all() {
            let serial_ms = benchmark(size, topology, Algorithm::Serial, iterations)?;
            let parallel_ms = benchmark(size, topology, Algorithm::Parallel, iterations)?;

            println!(
                "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                topology,
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }

    println!("\n=== Throughput at 5000x5000 (moore, parallel) ===\n");

    let cells = 5000 * 5000;
    let ms = benchmark(5000, Topology::Moore, Algorithm::Parallel, iterations)?;
    println!("{:.2} ms/gen, {:.1}M cells/sec", ms, (cells as f64) / (ms / 1000.0) / 1_000_000.0);

    Ok(())
}
