//! Packed half-precision pairs for elementwise tensor kernels
//!
//! [`Half2`] stores two IEEE 754 binary16 lanes and applies `+ - * /`,
//! negation and equality to both at once. On `x86_64` builds with the `f16c`
//! target feature (and the default `simd` cargo feature) the pair is a
//! packed register image driven by F16C/SSE instructions; everywhere else it
//! is two software [`Half`] lanes. The choice is made by `build.rs` and is
//! fixed for the whole binary. Both representations give the same lane
//! values.
//!
//! ```
//! use packed_half::{Half, Half2};
//!
//! let mut acc = Half2::from_i32(1);
//! acc += Half2::from_i32(2);
//! assert!(acc == Half2::from_i32(3));
//!
//! acc *= Half::from_f32(0.5);
//! assert_eq!(acc.lo().to_f32(), 1.5);
//! ```
//!
//! The [`kernels`] module applies the pair operators over `Half` buffers.

pub mod error;
pub mod half;
pub mod half2;
pub mod kernels;

pub use error::{PackedHalfError, Result};
pub use half::Half;
pub use half2::Half2;
#[cfg(half2_native)]
pub use half2::NativeHalf2;
