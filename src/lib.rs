//! The shortcut problem: for an n * n matrix `d` of edge weights, compute
//!
//! ```text
//! r[i][j] = min over k of (d[i][k] + d[k][j])
//! ```
//!
//! i.e. the cheapest way from i to j using at most one intermediate node. This is one
//! round of a (min, +) matrix product. Missing edges are `f32::INFINITY`.
//!
//! Five interchangeable versions compute the same result:
//!
//! - `v0_baseline`: the triple loop
//! - `v1_linear_reading`: reads the transpose of d for linear memory access
//! - `v2_instr_level_parallelism`: several independent accumulators per result
//! - `v3_multi_thread`: the ILP version with rows spread over rayon threads
//! - `v4_simd`: 8-lane vectors padded with infinity, rows spread over rayon threads
//!
//! ```
//! use shortcut::{compute, DistanceMatrix, Strategy};
//!
//! let d = DistanceMatrix::from_vec(3, vec![
//!     0., 8., 2.,
//!     1., 0., 9.,
//!     4., 5., 0.,
//! ]).unwrap();
//! let r = compute(&d, Strategy::Simd).unwrap();
//! assert_eq!(r.as_slice(), &[0., 7., 2., 1., 0., 3., 4., 5., 0.]);
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod matrix;
pub mod packed;
pub mod step;
pub mod transpose;

pub use config::StepConfig;
pub use error::{Error, Result};
pub use matrix::{DistanceMatrix, DEFAULT_WEIGHT_RANGE};
pub use packed::PackedLaneMatrix;
pub use step::{compute, compute_with, Strategy, DEFAULT_ILP_WIDTH};
pub use transpose::transpose;
