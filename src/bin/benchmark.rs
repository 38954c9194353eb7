//! Headless generation throughput, including the column commit pass.

use rand::SeedableRng;
use rand::rngs::StdRng;
use skyline_life::GridSimulation;
use std::time::Instant;

fn benchmark_generations(size: usize, iterations: u32) -> f64 {
    let mut grid = GridSimulation::new(size, size, 15).expect("benchmark grid is large enough");
    grid.randomize(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_animation(size: usize, iterations: u32) -> f64 {
    let mut grid = GridSimulation::new(size, size, 15).expect("benchmark grid is large enough");
    grid.randomize(&mut StdRng::seed_from_u64(size as u64));
    grid.step();

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_animation(0.2);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Skyline Life Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512, 1024];
    let iterations = 50;

    println!("{:>10} {:>14} {:>14} {:>16}", "Size", "Step (ms)", "Ease (ms)", "Cells/sec");
    println!("{:-<58}", "");

    for size in sizes {
        let step_ms = benchmark_generations(size, iterations);
        let ease_ms = benchmark_animation(size, iterations);
        let cells_per_sec = (size * size) as f64 / (step_ms / 1000.0);
        println!(
            "{:>10} {:>14.3} {:>14.3} {:>15.1}M",
            format!("{}x{}", size, size),
            step_ms,
            ease_ms,
            cells_per_sec / 1_000_000.0
        );
    }
}
