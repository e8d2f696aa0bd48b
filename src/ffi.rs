//! C interface for timing the steps from an external harness.
//!
//! Each function takes `(r, d, n)` where `r` and `d` point to n * n f32s in row-major
//! order, and returns `tools::STEP_OK`, `tools::STEP_INVALID` or `tools::STEP_PANICKED`.

use tools::create_extern_c_wrapper;

use crate::error::Result;
use crate::step::{
    v0_baseline, v1_linear_reading, v2_instr_level_parallelism, v3_multi_thread, v4_simd,
    DEFAULT_ILP_WIDTH,
};

fn step_ilp(r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
    v2_instr_level_parallelism::step(r, d, n, DEFAULT_ILP_WIDTH)
}

fn step_multi_thread(r: &mut [f32], d: &[f32], n: usize) -> Result<()> {
    v3_multi_thread::step(r, d, n, DEFAULT_ILP_WIDTH)
}

create_extern_c_wrapper!(shortcut_step_baseline, v0_baseline::step);
create_extern_c_wrapper!(shortcut_step_transposed, v1_linear_reading::step);
create_extern_c_wrapper!(shortcut_step_ilp, step_ilp);
create_extern_c_wrapper!(shortcut_step_parallel, step_multi_thread);
create_extern_c_wrapper!(shortcut_step_simd, v4_simd::step);

#[cfg(test)]
mod tests {
    use super::*;

    type RawStep = unsafe extern "C" fn(*mut f32, *const f32, i32) -> i32;

    const STEPS: [RawStep; 5] = [
        shortcut_step_baseline,
        shortcut_step_transposed,
        shortcut_step_ilp,
        shortcut_step_parallel,
        shortcut_step_simd,
    ];

    #[test]
    fn raw_steps_write_results() {
        let d: Vec<f32> = vec![0., 8., 2., 1., 0., 9., 4., 5., 0.];
        for raw_step in STEPS {
            let mut r = vec![-1.0f32; 9];
            let status = unsafe { raw_step(r.as_mut_ptr(), d.as_ptr(), 3) };
            assert_eq!(status, tools::STEP_OK);
            assert_eq!(r, vec![0., 7., 2., 1., 0., 3., 4., 5., 0.]);
        }
    }

    #[test]
    fn raw_steps_reject_bad_arguments() {
        let d = vec![0.0f32; 4];
        let mut r = vec![0.0f32; 4];
        for raw_step in STEPS {
            unsafe {
                assert_eq!(raw_step(std::ptr::null_mut(), d.as_ptr(), 2), tools::STEP_INVALID);
                assert_eq!(raw_step(r.as_mut_ptr(), std::ptr::null(), 2), tools::STEP_INVALID);
                assert_eq!(raw_step(r.as_mut_ptr(), d.as_ptr(), 0), tools::STEP_INVALID);
                assert_eq!(raw_step(r.as_mut_ptr(), d.as_ptr(), -3), tools::STEP_INVALID);
            }
        }
    }
}
