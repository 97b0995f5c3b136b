//! Owned storage for one batch of simulation draws
//!
//! A batch holds every random quantity of one simulation call in dense,
//! row-major arrays: two `rows x dimension` vector blocks and two scalar
//! bound columns. Filtering never mutates a batch in place; each stage
//! computes a boolean mask and copy-selects the surviving rows into a new
//! batch, so intermediate results stay immutable.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// One batch of paired draws: vectors `x`, `y` in `[0,1]^dimension` and
/// scalar bounds `b_x`, `b_y` in `[0,1]` per row.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    dimension: usize,
    /// Row-major, `rows * dimension` entries
    x: Vec<f64>,
    /// Row-major, `rows * dimension` entries
    y: Vec<f64>,
    bx: Vec<f64>,
    by: Vec<f64>,
}

impl SampleBatch {
    /// Draw a fresh batch of `rows` samples, every coordinate and bound
    /// independently uniform on `[0, 1)`.
    pub fn draw<R: Rng + ?Sized>(rows: usize, dimension: usize, rng: &mut R) -> Self {
        let unit = Uniform::new(0.0, 1.0);

        let mut x = Vec::with_capacity(rows * dimension);
        let mut y = Vec::with_capacity(rows * dimension);
        let mut bx = Vec::with_capacity(rows);
        let mut by = Vec::with_capacity(rows);

        for _ in 0..rows {
            x.extend((0..dimension).map(|_| unit.sample(rng)));
            y.extend((0..dimension).map(|_| unit.sample(rng)));
            bx.push(unit.sample(rng));
            by.push(unit.sample(rng));
        }

        Self {
            dimension,
            x,
            y,
            bx,
            by,
        }
    }

    /// Number of rows currently in the batch
    pub fn rows(&self) -> usize {
        self.bx.len()
    }

    /// Vector dimensionality
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether the batch has been filtered down to nothing
    pub fn is_empty(&self) -> bool {
        self.bx.is_empty()
    }

    /// The `x` and `y` vectors of row `i`
    pub fn row(&self, i: usize) -> (&[f64], &[f64]) {
        let span = i * self.dimension..(i + 1) * self.dimension;
        (&self.x[span.clone()], &self.y[span])
    }

    /// The scalar bounds `(b_x, b_y)` of row `i`
    pub fn bounds(&self, i: usize) -> (f64, f64) {
        (self.bx[i], self.by[i])
    }

    /// Per-row threshold `d = b_y - b_x`; strictly positive on rows that
    /// survived [`ordering_mask`](Self::ordering_mask) selection.
    pub fn gap(&self, i: usize) -> f64 {
        self.by[i] - self.bx[i]
    }

    /// Stage-0 acceptance mask: `b_y > b_x` per row
    pub fn ordering_mask(&self) -> Vec<bool> {
        self.bx
            .iter()
            .zip(&self.by)
            .map(|(&bx, &by)| by > bx)
            .collect()
    }

    /// Copy-select the rows where `mask` is true into a new batch.
    ///
    /// `mask` must have one entry per row.
    pub fn select(&self, mask: &[bool]) -> SampleBatch {
        debug_assert_eq!(mask.len(), self.rows());

        let keep = mask.iter().filter(|&&m| m).count();
        let mut x = Vec::with_capacity(keep * self.dimension);
        let mut y = Vec::with_capacity(keep * self.dimension);
        let mut bx = Vec::with_capacity(keep);
        let mut by = Vec::with_capacity(keep);

        for (i, _) in mask.iter().enumerate().filter(|(_, &m)| m) {
            let (xr, yr) = self.row(i);
            x.extend_from_slice(xr);
            y.extend_from_slice(yr);
            bx.push(self.bx[i]);
            by.push(self.by[i]);
        }

        SampleBatch {
            dimension: self.dimension,
            x,
            y,
            bx,
            by,
        }
    }
}
