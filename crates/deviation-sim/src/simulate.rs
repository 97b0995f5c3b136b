//! The two-stage simulation estimator
//!
//! Draws a batch of paired uniform samples, filters it through the ordering
//! condition and the coarse grouped test, and measures how often the fine
//! grouped test is violated among the survivors.

use crate::batch::SampleBatch;
use crate::types::Estimate;
use deviation_core::{partition, Error, GroupSet, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Monte Carlo estimator for the conditional fine-violation probability
///
/// Configuration follows the builder style: construct with the mandatory
/// parameters, then chain `with_*` calls.
///
/// ```rust
/// use deviation_sim::DeviationSimulator;
///
/// let estimate = DeviationSimulator::new(10_000, 10, 1, 10)
///     .with_seed(1)
///     .run()
///     .unwrap();
/// assert!((0.0..=1.0).contains(&estimate.probability));
/// ```
#[derive(Debug, Clone)]
pub struct DeviationSimulator {
    n_samples: usize,
    dimension: usize,
    coarse_groups: usize,
    fine_groups: usize,
    seed: Option<u64>,
}

impl DeviationSimulator {
    /// Create a new simulator
    ///
    /// `n_samples` draws of dimension-`dimension` vector pairs, tested
    /// against a `coarse_groups`-way and a `fine_groups`-way partition.
    pub fn new(
        n_samples: usize,
        dimension: usize,
        coarse_groups: usize,
        fine_groups: usize,
    ) -> Self {
        Self {
            n_samples,
            dimension,
            coarse_groups,
            fine_groups,
            seed: None,
        }
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_samples == 0 {
            return Err(Error::non_positive("n_samples", self.n_samples));
        }
        if self.dimension == 0 {
            return Err(Error::non_positive("dimension", self.dimension));
        }
        if self.coarse_groups == 0 {
            return Err(Error::non_positive("coarse_groups", self.coarse_groups));
        }
        if self.fine_groups == 0 {
            return Err(Error::non_positive("fine_groups", self.fine_groups));
        }
        Ok(())
    }

    /// Run the simulation with an internally owned generator
    ///
    /// Seeds a [`StdRng`] from the configured seed, or from entropy when no
    /// seed was given. Results are reproducible exactly when a seed is set.
    pub fn run(&self) -> Result<Estimate> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Run the simulation, drawing from a caller-owned generator
    ///
    /// The generator is the only state shared with the caller; the
    /// computation itself is pure, single-threaded and `O(n_samples *
    /// dimension)`.
    #[instrument(skip(self, rng),
                 fields(n_samples = self.n_samples, dimension = self.dimension,
                        coarse = self.coarse_groups, fine = self.fine_groups))]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Estimate> {
        self.validate()?;

        let coarse = partition(self.dimension, self.coarse_groups)?;
        let fine = partition(self.dimension, self.fine_groups)?;

        let batch = SampleBatch::draw(self.n_samples, self.dimension, rng);

        // Stage 0: keep rows with b_y > b_x; d = b_y - b_x is positive on
        // every survivor.
        let mask = batch.ordering_mask();
        let batch = batch.select(&mask);
        debug!("Ordering filter retained {} of {} draws", batch.rows(), self.n_samples);

        // Coarse test: every coarse group within d, i.e. the largest group
        // gap is within d.
        let mask = threshold_mask(&batch, &coarse, |gap, d| gap <= d);
        let batch = batch.select(&mask);
        let support = batch.rows();
        debug!("Coarse test retained {} draws", support);

        if support == 0 {
            // Undefined conditional probability, reported as 0.0 by
            // convention; see Estimate::has_support.
            return Ok(Estimate::degenerate());
        }

        // Fine test: a violation is at least one fine group at or beyond d,
        // i.e. the largest group gap at or beyond d.
        let violations = threshold_mask(&batch, &fine, |gap, d| gap >= d)
            .into_iter()
            .filter(|&v| v)
            .count();
        debug!("Fine test violated on {} of {} draws", violations, support);

        Ok(Estimate {
            probability: violations as f64 / support as f64,
            coarse_valid: support,
        })
    }
}

/// Evaluate `pred(max_mean_gap, d)` for every row of the batch
fn threshold_mask<P>(batch: &SampleBatch, groups: &GroupSet, pred: P) -> Vec<bool>
where
    P: Fn(f64, f64) -> bool,
{
    (0..batch.rows())
        .map(|i| {
            let (x, y) = batch.row(i);
            pred(groups.max_mean_gap(x, y), batch.gap(i))
        })
        .collect()
}

/// One-shot convenience wrapper around [`DeviationSimulator`]
///
/// Mirrors the simulator's parameters as a flat argument list; `seed` is
/// optional exactly as in the builder form.
pub fn estimate(
    n_samples: usize,
    dimension: usize,
    coarse_groups: usize,
    fine_groups: usize,
    seed: Option<u64>,
) -> Result<Estimate> {
    let mut simulator = DeviationSimulator::new(n_samples, dimension, coarse_groups, fine_groups);
    if let Some(seed) = seed {
        simulator = simulator.with_seed(seed);
    }
    simulator.run()
}
