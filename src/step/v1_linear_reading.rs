use crate::error::{check_step_args, Error, Result};
use crate::transpose::transposed;

/// Transpose `d` first so that the inner loop reads both operands linearly.
pub fn step(r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    let t = transposed(d, n, false)?;
    step_rows(r, d, &t, n);
    Ok(())
}

/// Same as [`step`] with a transpose of `d` computed by the caller.
pub fn step_transposed(r: &mut [f32], d: &[f32], t: &[f32], n: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    if t.len() != d.len() {
        return Err(Error::DimensionMismatch { expected: d.len(), actual: t.len() });
    }
    step_rows(r, d, t, n);
    Ok(())
}

fn step_rows(r: &mut [f32], d: &[f32], t: &[f32], n: usize) {
    // Function: for some row i in d (d_row) and all rows t (t_rows), compute n results into a row in r (r_row)
    let step_row = |(r_row, d_row): (&mut [f32], &[f32])| {
        for (res, t_row) in r_row.iter_mut().zip(t.chunks_exact(n)) {
            let mut v = f32::INFINITY;
            for (&x, &y) in d_row.iter().zip(t_row.iter()) {
                let z = x + y;
                v = if v < z { v } else { z };
            }
            *res = v;
        }
    };
    r.chunks_exact_mut(n).zip(d.chunks_exact(n)).for_each(step_row);
}
