pub mod simd;
pub mod timer;

#[doc(hidden)]
pub use tracing;

/// Status returned by a wrapped step-function that completed normally
pub const STEP_OK: i32 = 0;
/// Status returned when the arguments were rejected or the step-function returned an error
pub const STEP_INVALID: i32 = 1;
/// Status returned when the step-function panicked
pub const STEP_PANICKED: i32 = 2;

/// Macro for wrapping a Rust step-function inside an extern C function.
///
/// The wrapped function must have the signature
/// `fn(&mut [f32], &[f32], usize) -> Result<(), E>` where `E: Display`.
/// The generated function returns one of `STEP_OK`, `STEP_INVALID` or `STEP_PANICKED`.
#[macro_export]
macro_rules! create_extern_c_wrapper {
    ($extern_func:ident, $wrapped_func:path) => {
        /// C interface that accepts raw C pointers as arguments.
        ///
        /// # Safety
        ///
        /// `r_raw` must point to `n * n` writable f32s and `d_raw` to `n * n` readable f32s,
        /// and the two ranges must not overlap.
        #[no_mangle]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $extern_func(r_raw: *mut f32, d_raw: *const f32, n: i32) -> i32 {
            if r_raw.is_null() || d_raw.is_null() || n <= 0 {
                $crate::tracing::error!(func = stringify!($extern_func), n, "rejected step arguments");
                return $crate::STEP_INVALID;
            }
            let n = n as usize;
            let len = match n.checked_mul(n) {
                Some(len) => len,
                None => return $crate::STEP_INVALID,
            };
            // Catch any unwinding panics so that they won't propagate over the ABI to the calling program, which would be undefined behaviour
            let result = std::panic::catch_unwind(|| {
                // Wrap raw pointers into 'not unsafe' Rust slices with a well defined size
                let d = unsafe { std::slice::from_raw_parts(d_raw, len) };
                let r = unsafe { std::slice::from_raw_parts_mut(r_raw, len) };
                $wrapped_func(r, d, n)
            });
            match result {
                Ok(Ok(())) => $crate::STEP_OK,
                Ok(Err(err)) => {
                    $crate::tracing::error!(func = stringify!($extern_func), %err, "step failed");
                    $crate::STEP_INVALID
                }
                Err(_) => {
                    $crate::tracing::error!(func = stringify!($extern_func), "rust panicked");
                    $crate::STEP_PANICKED
                }
            }
        }
    };
}
