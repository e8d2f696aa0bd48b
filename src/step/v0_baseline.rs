use crate::error::{check_step_args, Result};

/// Direct triple loop: `d[n*k + j]` strides n cells per step of k.
pub fn step(r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
    check_step_args(r, d, n)?;
    for (i, r_row) in r.chunks_exact_mut(n).enumerate() {
        for (j, res) in r_row.iter_mut().enumerate() {
            let mut v = f32::INFINITY;
            for k in 0..n {
                let x = d[n * i + k];
                let y = d[n * k + j];
                let z = x + y;
                v = if z < v { z } else { v };
            }
            *res = v;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_node_example() {
        let d = vec![0., 8., 2., 1., 0., 9., 4., 5., 0.];
        let mut r = vec![0.0; 9];
        step(&mut r, &d, 3).unwrap();
        assert_eq!(r, vec![0., 7., 2., 1., 0., 3., 4., 5., 0.]);
    }

    #[test]
    fn missing_edges_stay_infinite() {
        let inf = f32::INFINITY;
        // Node 2 has no edges at all
        let d = vec![0., 1., inf, 1., 0., inf, inf, inf, 0.];
        let mut r = vec![0.0; 9];
        step(&mut r, &d, 3).unwrap();
        assert_eq!(r, vec![0., 1., inf, 1., 0., inf, inf, inf, 0.]);
    }

    #[test]
    fn rejects_wrong_sizes() {
        let mut r = vec![0.0; 4];
        assert!(step(&mut r, &[0.0; 3], 2).is_err());
        assert!(step(&mut [], &[], 0).is_err());
    }
}
