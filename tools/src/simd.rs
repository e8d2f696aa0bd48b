//! Fixed-width vectors of 8 f32 lanes.
//!
//! When the crate is compiled with AVX enabled (e.g. `-C target-cpu=native` on x86_64),
//! every operation maps to a single 256-bit intrinsic. Otherwise the same operations
//! are written over plain arrays, which the compiler is free to autovectorize.
//! Both backends have identical semantics, including `min` returning the second
//! operand whenever the first one is not strictly smaller.

/// 8 f32 values packed into a 32-byte aligned vector, aka __m256
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(32))]
pub struct f32x8(pub [f32; 8]);

/// Amount of f32 elements in a f32x8
#[allow(non_upper_case_globals)]
pub const f32x8_LENGTH: usize = 8;

/// Return a vector containing 8 infinity values
#[inline(always)]
pub fn f32x8_infty() -> f32x8 {
    f32x8([f32::INFINITY; f32x8_LENGTH])
}

/// Create a vector from a f32 slice of length 8
#[inline]
pub fn from_slice(row: &[f32]) -> f32x8 {
    let mut v = [0.0; f32x8_LENGTH];
    v.copy_from_slice(&row[..f32x8_LENGTH]);
    f32x8(v)
}

/// Create a vector from at most 8 f32s, filling the lanes past the end of `row` with infinity
#[inline]
pub fn from_slice_padded(row: &[f32]) -> f32x8 {
    let mut v = f32x8_infty();
    let len = row.len().min(f32x8_LENGTH);
    v.0[..len].copy_from_slice(&row[..len]);
    v
}

/// Return the element at lane `i`
#[inline(always)]
pub fn extract(v: f32x8, i: u8) -> f32 {
    v.0[i as usize]
}

pub fn is_aligned(v: &f32x8) -> bool {
    (v as *const f32x8 as usize) % std::mem::align_of::<f32x8>() == 0
}

/// Return the smallest element from a vector
/// v              = [0, 1, 2, 3, 4, 5, 6, 7]
/// swap(v, 1)     = [1, 0, 3, 2, 5, 4, 7, 6]
/// min_1          = [0, 0, 2, 2, 4, 4, 6, 6]
/// swap(min_1, 2) = [2, 2, 0, 0, 6, 6, 4, 4]
/// min_2          = [0, 0, 0, 0, 4, 4, 4, 4]
/// swap(min_2, 4) = [4, 4, 4, 4, 0, 0, 0, 0]
/// min_4          = [0, 0, 0, 0, 0, 0, 0, 0]
///
#[inline]
pub fn horizontal_min(v: f32x8) -> f32 {
    let min_1 = min(swap(v, 1), v);
    let min_2 = min(swap(min_1, 2), min_1);
    let min_4 = min(swap(min_2, 4), min_2);
    // All elements of min_4 are the minimum of v
    extract(min_4, 0)
}

pub use backend::{add, min, swap};

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
mod backend {
    use super::f32x8;
    use std::arch::x86_64::*; // Intel SIMD intrinsic mappings

    #[inline(always)]
    fn load(v: f32x8) -> __m256 {
        // f32x8 is 32-byte aligned
        unsafe { _mm256_load_ps(v.0.as_ptr()) }
    }

    #[inline(always)]
    fn store(x: __m256) -> f32x8 {
        let mut v = f32x8([0.0; super::f32x8_LENGTH]);
        unsafe { _mm256_store_ps(v.0.as_mut_ptr(), x) };
        v
    }

    #[inline(always)]
    pub fn add(v: f32x8, w: f32x8) -> f32x8 {
        store(unsafe { _mm256_add_ps(load(v), load(w)) })
    }

    #[inline(always)]
    pub fn min(v: f32x8, w: f32x8) -> f32x8 {
        store(unsafe { _mm256_min_ps(load(v), load(w)) })
    }

    /// Permute 1, 2, or 4 element ranges with their neighbors.
    ///
    /// To make sense of the 8-bit shuffle control, read it in binary from right to left
    /// e.g. for width 1, control is 10110001.
    /// Reading from right to left in 2 bit chunks we get (1, 0, 3, 2),
    /// and (5, 4, 7, 6) for the 2nd 128-bit lane.
    #[inline(always)]
    pub fn swap(v: f32x8, width: i8) -> f32x8 {
        let x = load(v);
        let swapped = match width {
            1 => unsafe { _mm256_shuffle_ps::<0b_10_11_00_01>(x, x) },
            2 => unsafe { _mm256_shuffle_ps::<0b_01_00_11_10>(x, x) },
            4 => unsafe { _mm256_permute2f128_ps::<1>(x, x) },
            _ => panic!("Invalid shuffle control for 256-bit vector, must be 1, 2, or 4"),
        };
        store(swapped)
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
mod backend {
    use super::f32x8;

    #[inline(always)]
    pub fn add(v: f32x8, w: f32x8) -> f32x8 {
        let mut z = v;
        for (z, &y) in z.0.iter_mut().zip(w.0.iter()) {
            *z += y;
        }
        z
    }

    /// Lane-wise `if v < w { v } else { w }`, which is what `_mm256_min_ps` computes
    #[inline(always)]
    pub fn min(v: f32x8, w: f32x8) -> f32x8 {
        let mut z = w;
        for (z, &x) in z.0.iter_mut().zip(v.0.iter()) {
            if x < *z {
                *z = x;
            }
        }
        z
    }

    /// Permute 1, 2, or 4 element ranges with their neighbors.
    /// E.g.
    /// swap([0, 1, 2, 3, 4, 5, 6, 7], 1) == [1, 0, 3, 2, 5, 4, 7, 6]
    /// swap([0, 1, 2, 3, 4, 5, 6, 7], 2) == [2, 3, 0, 1, 6, 7, 4, 5]
    /// swap([0, 1, 2, 3, 4, 5, 6, 7], 4) == [4, 5, 6, 7, 0, 1, 2, 3]
    #[inline(always)]
    pub fn swap(v: f32x8, width: i8) -> f32x8 {
        let w = match width {
            1 | 2 | 4 => width as usize,
            _ => panic!("Invalid shuffle control for 256-bit vector, must be 1, 2, or 4"),
        };
        let mut z = v;
        for (i, z) in z.0.iter_mut().enumerate() {
            *z = v.0[i ^ w];
        }
        z
    }
}
