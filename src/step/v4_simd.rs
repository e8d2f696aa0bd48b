#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*; // Parallel chunks iterator

use tools::simd::{self, f32x8}; // Custom SIMD helpers

use crate::error::{check_step_args, Result};
use crate::packed::PackedLaneMatrix;

/// Pack d and its transpose into f32x8 vectors padded with infinity,
/// then compute every result as a vector-wide min(add) fold followed by a horizontal min.
pub fn step(r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    let (vd, vt) = PackedLaneMatrix::pack_pair(d, n)?;
    let blocks = vd.blocks();

    // Function: for row i of vd and all rows of vt, compute all results for row i of r
    let step_row = |(r_row, vd_row): (&mut [f32], &[f32x8])| {
        for (res, vt_row) in r_row.iter_mut().zip(vt.rows()) {
            let mut tmp = simd::f32x8_infty();
            for (&x, &y) in vd_row.iter().zip(vt_row) {
                let z = simd::add(x, y);
                tmp = simd::min(tmp, z);
            }
            *res = simd::horizontal_min(tmp);
        }
    };
    #[cfg(not(feature = "no-multi-thread"))]
    r.par_chunks_mut(n)
        .zip(vd.as_vectors().par_chunks(blocks))
        .for_each(step_row);
    #[cfg(feature = "no-multi-thread")]
    r.chunks_mut(n)
        .zip(vd.as_vectors().chunks(blocks))
        .for_each(step_row);
    Ok(())
}
