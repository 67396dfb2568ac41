//! Capability gate
//!
//! `build.rs` sets the `half2_native` cfg when all of these hold for the
//! build:
//!
//! - the target is `x86_64`;
//! - the `f16c` target feature is enabled crate-wide (e.g.
//!   `RUSTFLAGS="-C target-cpu=haswell"`);
//! - the `simd` cargo feature is on;
//! - rustc is at least 1.68, where the F16C intrinsics are stable.
//!
//! The decision is made once per build. Every `Half2` constructor and
//! operator is compiled from exactly one backend; nothing branches on it at
//! run time.

/// Whether the packed F16C representation was compiled in.
pub(crate) const HALF2_NATIVE: bool = cfg!(half2_native);

/// Short backend name for diagnostics.
pub(crate) const BACKEND: &str = if HALF2_NATIVE { "f16c" } else { "portable" };
