//! One fixed-parameter estimation run
//!
//! Draws a million samples in [0,1]^10, conditions on the one-group coarse
//! test and reports how often the ten-group fine test is violated.

use deviation_sim::DeviationSimulator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let estimate = DeviationSimulator::new(1_000_000, 10, 1, 10)
        .with_seed(1)
        .run()
        .unwrap();

    println!("Number of coarse-valid samples: {}", estimate.coarse_valid);
    println!("Conditional violation probability: {}", estimate.probability);
}
