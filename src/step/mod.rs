//! The shortcut step: `r[i][j] = min over k of (d[i][k] + d[k][j])`.
//!
//! Every version computes exactly the same values, only additions and minimums are
//! involved so the order of evaluation never changes a result. The step is evaluated
//! once; it is not iterated towards all-pairs shortest paths.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::StepConfig;
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

pub mod v0_baseline;
pub mod v1_linear_reading;
pub mod v2_instr_level_parallelism;
pub mod v3_multi_thread;
pub mod v4_simd;

/// Accumulator count used when a strategy name does not specify one
pub const DEFAULT_ILP_WIDTH: usize = 4;

/// Selects one of the interchangeable step implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Triple loop with a strided read of d, single-threaded
    Baseline,
    /// Reads d and its transpose linearly, single-threaded
    Transposed,
    /// `width` independent accumulators per result, single-threaded
    Ilp { width: usize },
    /// The ILP kernel with rows spread over rayon worker threads
    Parallel { width: usize },
    /// 8-lane vectors padded with infinity, rows spread over rayon worker threads
    Simd,
}

impl Strategy {
    /// Every strategy, with the default ILP width where one applies
    pub const ALL: [Strategy; 5] = [
        Strategy::Baseline,
        Strategy::Transposed,
        Strategy::Ilp { width: DEFAULT_ILP_WIDTH },
        Strategy::Parallel { width: DEFAULT_ILP_WIDTH },
        Strategy::Simd,
    ];

    pub fn is_multi_threaded(&self) -> bool {
        matches!(self, Strategy::Parallel { .. } | Strategy::Simd)
    }

    /// Run this strategy on raw row-major buffers of n * n cells.
    pub fn step(&self, r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
        match *self {
            Strategy::Baseline => v0_baseline::step(r, d, n),
            Strategy::Transposed => v1_linear_reading::step(r, d, n),
            Strategy::Ilp { width } => v2_instr_level_parallelism::step(r, d, n, width),
            Strategy::Parallel { width } => v3_multi_thread::step(r, d, n, width),
            Strategy::Simd => v4_simd::step(r, d, n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Baseline => write!(f, "baseline"),
            Strategy::Transposed => write!(f, "transposed"),
            Strategy::Ilp { width } => write!(f, "ilp:{}", width),
            Strategy::Parallel { width } => write!(f, "parallel:{}", width),
            Strategy::Simd => write!(f, "simd"),
        }
    }
}

/// Parses `baseline`, `transposed`, `ilp[:P]`, `parallel[:P]` and `simd`
impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, width) = match s.trim().split_once(':') {
            Some((name, width)) => {
                let width = width
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidStrategy(s.to_string()))?;
                (name, Some(width))
            }
            None => (s.trim(), None),
        };
        let ilp_width = || {
            let width = width.unwrap_or(DEFAULT_ILP_WIDTH);
            if !v2_instr_level_parallelism::SUPPORTED_WIDTHS.contains(&width) {
                return Err(Error::UnsupportedIlpWidth(width));
            }
            Ok(width)
        };
        match (name.to_ascii_lowercase().as_str(), width) {
            ("baseline", None) => Ok(Strategy::Baseline),
            ("transposed", None) => Ok(Strategy::Transposed),
            ("simd", None) => Ok(Strategy::Simd),
            ("ilp", _) => Ok(Strategy::Ilp { width: ilp_width()? }),
            ("parallel", _) => Ok(Strategy::Parallel { width: ilp_width()? }),
            _ => Err(Error::InvalidStrategy(s.to_string())),
        }
    }
}

/// Compute the shortcut step of `d` on the rayon global pool.
pub fn compute(d: &DistanceMatrix, strategy: Strategy) -> Result<DistanceMatrix> {
    compute_with(d, strategy, &StepConfig::default())
}

/// Compute the shortcut step of `d` with an explicit thread configuration.
pub fn compute_with(d: &DistanceMatrix, strategy: Strategy, config: &StepConfig) -> Result<DistanceMatrix> {
    let n = d.n();
    let mut r = DistanceMatrix::new(n)?;
    debug!(%strategy, n, threads = ?config.threads, "computing shortcut step");
    config.install(|| strategy.step(r.as_mut_slice(), d.as_slice(), n))??;
    Ok(r)
}
