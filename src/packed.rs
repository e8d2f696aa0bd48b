//! Rows packed into 8-lane vectors with infinity padding.
//!
//! Row i of a packed matrix holds `blocks = ceil(n / 8)` vectors. Lane `b` of vector `c`
//! holds logical column `8 * c + b`, and every lane with a column index >= n holds
//! `f32::INFINITY`. Since both operands of a step are padded, every padded lane
//! contributes `inf + x = inf` and never wins a minimum.

use itertools::izip;
#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*;
use tools::simd::{self, f32x8};

use crate::error::{cell_count, try_filled, Result};

#[derive(Clone, Debug)]
pub struct PackedLaneMatrix {
    n: usize,
    blocks: usize,
    vecs: Vec<f32x8>,
}

impl PackedLaneMatrix {
    /// Amount of vectors needed for one row of n elements
    pub fn blocks_for(n: usize) -> usize {
        (n + simd::f32x8_LENGTH - 1) / simd::f32x8_LENGTH
    }

    /// Pack the rows of the n * n matrix `d`.
    pub fn pack(d: &[f32], n: usize) -> Result<Self> {
        Ok(Self::pack_pair(d, n)?.0)
    }

    /// Pack the rows of the transpose of `d`, i.e. the columns of `d`.
    pub fn pack_transposed(d: &[f32], n: usize) -> Result<Self> {
        Ok(Self::pack_pair(d, n)?.1)
    }

    /// Pack `d` and its transpose in one pass over the rows.
    pub fn pack_pair(d: &[f32], n: usize) -> Result<(Self, Self)> {
        let cells = cell_count(n)?;
        debug_assert_eq!(d.len(), cells);
        let blocks = Self::blocks_for(n);
        let mut vd = try_filled(n * blocks, simd::f32x8_infty())?;
        let mut vt = try_filled(n * blocks, simd::f32x8_infty())?;
        debug_assert!(vd.iter().all(simd::is_aligned));
        debug_assert!(vt.iter().all(simd::is_aligned));
        // Function: for row i, copy row i of d into vd and column i of d into vt
        let pack_row = |(i, (vd_row, vt_row)): (usize, (&mut [f32x8], &mut [f32x8]))| {
            for (col, vx, vy) in izip!(0.., vd_row.iter_mut(), vt_row.iter_mut()) {
                // Build 8 element arrays for vd and vt, with infinity padding
                let mut d_tmp = [f32::INFINITY; simd::f32x8_LENGTH];
                let mut t_tmp = [f32::INFINITY; simd::f32x8_LENGTH];
                for (b, (x, y)) in d_tmp.iter_mut().zip(t_tmp.iter_mut()).enumerate() {
                    let j = col * simd::f32x8_LENGTH + b;
                    if j < n {
                        *x = d[n * i + j];
                        *y = d[n * j + i];
                    }
                }
                *vx = simd::from_slice(&d_tmp);
                *vy = simd::from_slice(&t_tmp);
            }
        };
        #[cfg(not(feature = "no-multi-thread"))]
        vd.par_chunks_mut(blocks)
            .zip(vt.par_chunks_mut(blocks))
            .enumerate()
            .for_each(pack_row);
        #[cfg(feature = "no-multi-thread")]
        vd.chunks_mut(blocks)
            .zip(vt.chunks_mut(blocks))
            .enumerate()
            .for_each(pack_row);
        tracing::trace!(n, blocks, "packed rows and columns into f32x8 lanes");
        Ok((Self { n, blocks, vecs: vd }, Self { n, blocks, vecs: vt }))
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Vectors of row i
    pub fn row(&self, i: usize) -> &[f32x8] {
        &self.vecs[self.blocks * i..self.blocks * (i + 1)]
    }

    /// All vectors, row after row
    pub fn as_vectors(&self) -> &[f32x8] {
        &self.vecs
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32x8> {
        self.vecs.chunks_exact(self.blocks)
    }

    /// Logical element at (i, k), where k may run up to `blocks * 8` into the padding
    pub fn lane(&self, i: usize, k: usize) -> f32 {
        let v = self.row(i)[k / simd::f32x8_LENGTH];
        simd::extract(v, (k % simd::f32x8_LENGTH) as u8)
    }
}
