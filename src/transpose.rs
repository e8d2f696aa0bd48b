//! Column-major mirrors of distance matrices.
//!
//! Reading column j of `d` means striding n cells per step, so the kernels read row j
//! of the transpose instead and keep both operands at unit stride.

#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*;

use crate::error::{try_filled, Result};
use crate::matrix::DistanceMatrix;

/// Return `t` such that `t[i][j] == d[j][i]`.
pub fn transpose(d: &DistanceMatrix) -> Result<DistanceMatrix> {
    let n = d.n();
    let mut t = DistanceMatrix::new(n)?;
    transpose_into(t.as_mut_slice(), d.as_slice(), n);
    Ok(t)
}

/// Write the transpose of the n * n matrix `src` into `dst`.
pub fn transpose_into(dst: &mut [f32], src: &[f32], n: usize) {
    for (i, t_row) in dst.chunks_exact_mut(n).enumerate() {
        for (j, x) in t_row.iter_mut().enumerate() {
            *x = src[n * j + i];
        }
    }
}

/// Same as [`transpose_into`], but each row of `dst` is written by whichever thread picks it up
pub fn par_transpose_into(dst: &mut [f32], src: &[f32], n: usize) {
    let transpose_row = |(i, t_row): (usize, &mut [f32])| {
        for (j, x) in t_row.iter_mut().enumerate() {
            *x = src[n * j + i];
        }
    };
    #[cfg(not(feature = "no-multi-thread"))]
    dst.par_chunks_mut(n).enumerate().for_each(transpose_row);
    #[cfg(feature = "no-multi-thread")]
    dst.chunks_mut(n).enumerate().for_each(transpose_row);
}

/// Allocate and fill the transpose of the n * n slice `d`.
pub(crate) fn transposed(d: &[f32], n: usize, parallel: bool) -> Result<Vec<f32>> {
    let mut t = try_filled(d.len(), 0.0)?;
    if parallel {
        par_transpose_into(&mut t, d, n);
    } else {
        transpose_into(&mut t, d, n);
    }
    Ok(t)
}
