//! F16C backend: one packed 32-bit register image per pair.
//!
//! x86 has no half-precision ALU, so each operator widens both pairs to f32
//! with `vcvtph2ps`, runs one SSE instruction, and narrows back with
//! `vcvtps2ph`. A single f32 rounding followed by round-to-nearest-even
//! narrowing is a correctly rounded binary16 result, which is also what the
//! scalar [`Half`] operators produce.
//!
//! Only compiled when the capability gate enabled `half2_native`, which
//! implies `target_feature = "f16c"` (and SSE2) for the whole build.

use super::Half2;
use crate::half::Half;
use std::arch::x86_64::{
    __m128, _mm_add_ps, _mm_cmpeq_ps, _mm_cvtph_ps, _mm_cvtps_ph, _mm_cvtsi128_si32,
    _mm_cvtsi32_si128, _mm_div_ps, _mm_movemask_ps, _mm_mul_ps, _mm_set1_ps, _mm_sub_ps,
    _MM_FROUND_TO_NEAREST_INT, _MM_FROUND_TO_ZERO,
};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Hardware image of a half pair: lane 0 in bits 0..16, lane 1 in 16..32.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct NativeHalf2(u32);

impl NativeHalf2 {
    /// Wrap a packed image as-is.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }
}

// -- Primitives ---------------------------------------------------------------
//
// The `unsafe` blocks below call `std::arch` intrinsics whose target features
// (sse, sse2, f16c) are enabled crate-wide by the gate. Newer compilers treat
// such calls as safe, hence `unused_unsafe`.

#[inline(always)]
#[allow(unused_unsafe)]
fn widen(h: NativeHalf2) -> __m128 {
    // Safety: f16c/sse2 enabled for the build; lanes 2 and 3 widen from zero.
    unsafe { _mm_cvtph_ps(_mm_cvtsi32_si128(h.0 as i32)) }
}

#[inline(always)]
#[allow(unused_unsafe)]
fn narrow_nearest(v: __m128) -> NativeHalf2 {
    // Safety: f16c/sse2 enabled for the build.
    NativeHalf2(unsafe { _mm_cvtsi128_si32(_mm_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(v)) } as u32)
}

#[inline(always)]
#[allow(unused_unsafe)]
fn narrow_toward_zero(v: __m128) -> NativeHalf2 {
    // Safety: f16c/sse2 enabled for the build.
    NativeHalf2(unsafe { _mm_cvtsi128_si32(_mm_cvtps_ph::<_MM_FROUND_TO_ZERO>(v)) } as u32)
}

/// Broadcast an integer, round-toward-zero.
///
/// `i32 -> f32` is exact up to 2^24, and everything at or above 65536
/// saturates to ±65504 under round-toward-zero, so the intermediate f32
/// rounding never changes the result.
#[inline(always)]
#[allow(unused_unsafe)]
fn h2_from_int(value: i32) -> NativeHalf2 {
    // Safety: sse enabled for the build.
    narrow_toward_zero(unsafe { _mm_set1_ps(value as f32) })
}

#[inline(always)]
fn hneg2(a: NativeHalf2) -> NativeHalf2 {
    NativeHalf2(a.0 ^ 0x8000_8000)
}

#[inline(always)]
#[allow(unused_unsafe)]
fn hadd2(a: NativeHalf2, b: NativeHalf2) -> NativeHalf2 {
    // Safety: sse enabled for the build.
    narrow_nearest(unsafe { _mm_add_ps(widen(a), widen(b)) })
}

#[inline(always)]
#[allow(unused_unsafe)]
fn hsub2(a: NativeHalf2, b: NativeHalf2) -> NativeHalf2 {
    // Safety: sse enabled for the build.
    narrow_nearest(unsafe { _mm_sub_ps(widen(a), widen(b)) })
}

#[inline(always)]
#[allow(unused_unsafe)]
fn hmul2(a: NativeHalf2, b: NativeHalf2) -> NativeHalf2 {
    // Safety: sse enabled for the build.
    narrow_nearest(unsafe { _mm_mul_ps(widen(a), widen(b)) })
}

#[inline(always)]
#[allow(unused_unsafe)]
fn h2div(a: NativeHalf2, b: NativeHalf2) -> NativeHalf2 {
    // Safety: sse enabled for the build. Lanes 2 and 3 compute 0/0 and are
    // discarded by the narrowing.
    narrow_nearest(unsafe { _mm_div_ps(widen(a), widen(b)) })
}

/// True iff both lanes compare equal (IEEE: NaN unequal, -0 == +0).
#[inline(always)]
#[allow(unused_unsafe)]
fn hbeq2(a: NativeHalf2, b: NativeHalf2) -> bool {
    // Safety: sse enabled for the build.
    let mask = unsafe { _mm_movemask_ps(_mm_cmpeq_ps(widen(a), widen(b))) };
    mask & 0b11 == 0b11
}

// -- Half2 on top of the primitives -------------------------------------------

impl Half2 {
    /// Wrap a hardware pair without conversion.
    pub fn from_native(native: NativeHalf2) -> Self {
        Self { native }
    }

    /// The underlying hardware pair.
    pub fn native(self) -> NativeHalf2 {
        self.native
    }

    pub(crate) fn from_lanes(lo: Half, hi: Half) -> Self {
        Self::from_bits(lo.to_bits() as u32 | (hi.to_bits() as u32) << 16)
    }

    pub(super) fn broadcast_i32(value: i32) -> Self {
        Self::from_native(h2_from_int(value))
    }

    /// Both lanes, in order.
    pub fn lanes(self) -> (Half, Half) {
        let bits = self.native.0;
        (Half::from_bits(bits as u16), Half::from_bits((bits >> 16) as u16))
    }

    /// Build from the packed image: lane 0 in bits 0..16, lane 1 in 16..32.
    pub fn from_bits(bits: u32) -> Self {
        Self::from_native(NativeHalf2::from_bits(bits))
    }

    /// The packed image: lane 0 in bits 0..16, lane 1 in 16..32.
    pub fn to_bits(self) -> u32 {
        self.native.to_bits()
    }
}

impl Neg for Half2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_native(hneg2(self.native))
    }
}

impl Add for Half2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_native(hadd2(self.native, rhs.native))
    }
}

impl Sub for Half2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_native(hsub2(self.native, rhs.native))
    }
}

impl Mul for Half2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_native(hmul2(self.native, rhs.native))
    }
}

impl Div for Half2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_native(h2div(self.native, rhs.native))
    }
}

impl PartialEq for Half2 {
    fn eq(&self, other: &Self) -> bool {
        hbeq2(self.native, other.native)
    }
}
