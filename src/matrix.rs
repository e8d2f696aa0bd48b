//! Owned square distance matrices.

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{cell_count, try_filled, Error, Result};

/// Weight range of the benchmark inputs
pub const DEFAULT_WEIGHT_RANGE: Range<f32> = 1.0..20.0;

/// Square n * n matrix of f32 edge weights in row-major order.
///
/// `f32::INFINITY` marks a missing edge. By convention the diagonal is 0.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f32>,
}

impl DistanceMatrix {
    /// Allocate an n * n matrix filled with zeros.
    pub fn new(n: usize) -> Result<Self> {
        let cells = cell_count(n)?;
        Ok(Self { n, data: try_filled(cells, 0.0)? })
    }

    /// Take ownership of a row-major buffer of exactly n * n cells.
    pub fn from_vec(n: usize, data: Vec<f32>) -> Result<Self> {
        let expected = cell_count(n)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch { expected, actual: data.len() });
        }
        Ok(Self { n, data })
    }

    /// Every off-diagonal cell set to `value`, diagonal set to 0.
    pub fn filled(n: usize, value: f32) -> Result<Self> {
        let mut m = Self::new(n)?;
        m.fill_off_diagonal(|| value);
        Ok(m)
    }

    /// Off-diagonal cells drawn uniformly from `range` and rounded to two decimals,
    /// diagonal set to 0.
    pub fn random<R: Rng>(n: usize, range: Range<f32>, rng: &mut R) -> Result<Self> {
        let mut m = Self::new(n)?;
        m.fill_off_diagonal(|| (rng.gen_range(range.clone()) * 100.0).round() / 100.0);
        Ok(m)
    }

    /// Same as [`DistanceMatrix::random`] with a reproducible `StdRng`.
    pub fn random_seeded(n: usize, range: Range<f32>, seed: u64) -> Result<Self> {
        Self::random(n, range, &mut StdRng::seed_from_u64(seed))
    }

    fn fill_off_diagonal<F: FnMut() -> f32>(&mut self, mut value: F) {
        let n = self.n;
        for (i, row) in self.data.chunks_exact_mut(n).enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = if i == j { 0.0 } else { value() };
            }
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.n * i + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: f32) {
        self.data[self.n * i + j] = v;
    }

    /// Row i as a slice of n cells
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[self.n * i..self.n * (i + 1)]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.n)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.data[self.n * i + j]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.data[self.n * i + j]
    }
}

/// Fixed two-decimal layout, one row per line
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for x in row {
                write!(f, "{:6.2} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
