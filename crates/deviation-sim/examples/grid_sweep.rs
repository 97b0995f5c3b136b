//! Sweep of (coarse, fine) group-count pairs at fixed dimensionality
//!
//! Runs the estimator for every ordered pair of group counts from a small
//! grid, skipping the diagonal, and prints the results as an aligned table.

use deviation_sim::estimate;

const N_SAMPLES: usize = 1_000_000;
const DIMENSION: usize = 5;
const GROUP_COUNTS: [usize; 4] = [1, 2, 3, 5];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!(
        "{:>4} {:>7} {:>5} {:>12} {:>13}",
        "N", "coarse", "fine", "probability", "coarse-valid"
    );

    for coarse in GROUP_COUNTS {
        for fine in GROUP_COUNTS {
            if coarse == fine {
                continue;
            }
            let est = estimate(N_SAMPLES, DIMENSION, coarse, fine, Some(1)).unwrap();
            println!(
                "{:>4} {:>7} {:>5} {:>12.4} {:>13}",
                DIMENSION, coarse, fine, est.probability, est.coarse_valid
            );
        }
    }
}
