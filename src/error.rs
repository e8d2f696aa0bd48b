//! Error types for shortcut kernels.

use thiserror::Error;

/// Errors that can occur while preparing or running a step.
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix with no rows was requested.
    #[error("matrix dimension must be at least 1")]
    ZeroDimension,

    /// A buffer does not hold exactly n * n cells.
    #[error("dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The buffer for `cells` f32 values could not be obtained.
    #[error("cannot allocate a buffer of {cells} cells")]
    Allocation { cells: usize },

    /// No ILP kernel is compiled for this accumulator count.
    #[error("unsupported ILP width {0}, expected one of 1, 2, 4, 8, 12, 16")]
    UnsupportedIlpWidth(usize),

    /// A strategy name could not be parsed.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    /// A dedicated rayon pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for shortcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Number of cells in an n * n matrix, rejecting 0 and overflow.
pub(crate) fn cell_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::ZeroDimension);
    }
    n.checked_mul(n).ok_or(Error::Allocation { cells: usize::MAX })
}

/// Allocate `cells` copies of `value` without aborting on allocation failure.
pub(crate) fn try_filled<T: Clone>(cells: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells).map_err(|_| Error::Allocation { cells })?;
    buf.resize(cells, value);
    Ok(buf)
}

/// Check that both step buffers hold n * n cells.
pub(crate) fn check_step_args(r: &[f32], d: &[f32], n: usize) -> Result<()> {
    let expected = cell_count(n)?;
    for actual in [d.len(), r.len()] {
        if actual != expected {
            return Err(Error::DimensionMismatch { expected, actual });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_rejects_degenerate_sizes() {
        assert!(matches!(cell_count(0), Err(Error::ZeroDimension)));
        assert!(matches!(cell_count(usize::MAX), Err(Error::Allocation { .. })));
        assert_eq!(cell_count(7).unwrap(), 49);
    }

    #[test]
    fn step_args_must_be_square() {
        let d = vec![0.0; 9];
        let r = vec![0.0; 8];
        let err = check_step_args(&r, &d, 3).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 9, actual: 8 }));
        assert_eq!(err.to_string(), "dimension mismatch: expected 9 cells, got 8");
        assert!(check_step_args(&d, &d, 3).is_ok());
    }

    #[test]
    fn huge_allocations_fail_gracefully() {
        let err = try_filled(usize::MAX / 2, 0.0f32).unwrap_err();
        assert!(matches!(err, Error::Allocation { .. }));
    }
}
