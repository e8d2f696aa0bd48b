// OpenMP does not support Rust, but the Rayon library comes close with its parallel iterators
#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*; // Parallel chunks iterator

use super::v2_instr_level_parallelism::row_kernel;
use crate::error::{check_step_args, Result};
use crate::transpose::transposed;

/// ILP step with the rows of r partitioned across the current rayon pool.
///
/// Every row of r depends only on d and its transpose, which are shared read-only,
/// so the rows can be computed in any order.
pub fn step(r: &mut [f32], d: &[f32], n: usize, width: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    let kernel = row_kernel(width)?;
    let t = transposed(d, n, true)?;
    let step_row = |(r_row, d_row): (&mut [f32], &[f32])| kernel(r_row, d_row, &t, n);
    // Partition r and d into slices, each containing a single row of r and d,
    // and apply the function on the row pairs
    #[cfg(not(feature = "no-multi-thread"))]
    r.par_chunks_mut(n).zip(d.par_chunks(n)).for_each(step_row);
    #[cfg(feature = "no-multi-thread")]
    r.chunks_mut(n).zip(d.chunks(n)).for_each(step_row);
    Ok(())
}
