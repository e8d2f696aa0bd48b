//! Linear reading with several independent accumulators per result.
//!
//! Accumulator `m` folds every k with `k % P == m`, so the P minimums carry no data
//! dependency on each other inside the k loop. The k values past the last full block
//! are folded into the first accumulators before the final reduction.

use crate::error::{check_step_args, Error, Result};
use crate::transpose::transposed;

/// Accumulator counts with a compiled kernel
pub const SUPPORTED_WIDTHS: [usize; 6] = [1, 2, 4, 8, 12, 16];

/// Computes one row of results from one row of d and all rows of the transpose t
pub(crate) type RowKernel = fn(&mut [f32], &[f32], &[f32], usize);

pub(crate) fn row_kernel(width: usize) -> Result<RowKernel> {
    match width {
        1 => Ok(step_row::<1>),
        2 => Ok(step_row::<2>),
        4 => Ok(step_row::<4>),
        8 => Ok(step_row::<8>),
        12 => Ok(step_row::<12>),
        16 => Ok(step_row::<16>),
        _ => Err(Error::UnsupportedIlpWidth(width)),
    }
}

#[inline]
fn step_row<const P: usize>(r_row: &mut [f32], d_row: &[f32], t: &[f32], n: usize) {
    for (res, t_row) in r_row.iter_mut().zip(t.chunks_exact(n)) {
        // Accumulate results in blocks of P
        let d_blocks = d_row.chunks_exact(P);
        let t_blocks = t_row.chunks_exact(P);
        let (d_tail, t_tail) = (d_blocks.remainder(), t_blocks.remainder());
        let mut w = [f32::INFINITY; P];
        for (d_block, t_block) in d_blocks.zip(t_blocks) {
            for (acc, (&x, &y)) in w.iter_mut().zip(d_block.iter().zip(t_block)) {
                let z = x + y;
                *acc = if z < *acc { z } else { *acc };
            }
        }
        // Less than P values remain
        for (acc, (&x, &y)) in w.iter_mut().zip(d_tail.iter().zip(t_tail)) {
            let z = x + y;
            *acc = if z < *acc { z } else { *acc };
        }
        // Fold block values into a single minimum and assign to final result
        *res = w.iter().fold(f32::INFINITY, |acc, &x| if x < acc { x } else { acc });
    }
}

/// Single-threaded step with `width` accumulators per result.
pub fn step(r: &mut [f32], d: &[f32], n: usize, width: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    let kernel = row_kernel(width)?;
    let t = transposed(d, n, false)?;
    r.chunks_exact_mut(n)
        .zip(d.chunks_exact(n))
        .for_each(|(r_row, d_row)| kernel(r_row, d_row, &t, n));
    Ok(())
}

/// Same as [`step`] with a transpose of `d` computed by the caller.
pub fn step_transposed(r: &mut [f32], d: &[f32], t: &[f32], n: usize, width: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    if t.len() != d.len() {
        return Err(Error::DimensionMismatch { expected: d.len(), actual: t.len() });
    }
    let kernel = row_kernel(width)?;
    r.chunks_exact_mut(n)
        .zip(d.chunks_exact(n))
        .for_each(|(r_row, d_row)| kernel(r_row, d_row, t, n));
    Ok(())
}
