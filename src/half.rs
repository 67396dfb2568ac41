//! Half-precision (fp16) scalar
//!
//! Software IEEE 754 binary16 value used for the lanes of [`Half2`]. Arithmetic
//! widens to f32, computes once, and narrows with round-to-nearest-even. For
//! `+ - * /` this is bit-identical to a correctly rounded binary16 operation,
//! which is what the F16C-backed pair path produces as well.
//!
//! [`Half2`]: crate::Half2

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IEEE 754 half-precision floating-point (binary16)
///
/// Layout: 1 sign bit, 5 exponent bits, 10 mantissa bits.
/// Range: ±65504, smallest normal: 6.1×10⁻⁵, precision: ~3 decimal digits.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Half {
    bits: u16,
}

impl Half {
    /// Zero constant
    pub const ZERO: Self = Self { bits: 0x0000 };
    /// One constant
    pub const ONE: Self = Self { bits: 0x3C00 };
    /// Negative one
    pub const NEG_ONE: Self = Self { bits: 0xBC00 };
    /// Positive infinity
    pub const INFINITY: Self = Self { bits: 0x7C00 };
    /// Negative infinity
    pub const NEG_INFINITY: Self = Self { bits: 0xFC00 };
    /// Quiet NaN
    pub const NAN: Self = Self { bits: 0x7E00 };
    /// Maximum finite value (65504)
    pub const MAX: Self = Self { bits: 0x7BFF };
    /// Minimum finite value (-65504)
    pub const MIN: Self = Self { bits: 0xFBFF };
    /// Minimum positive normal value
    pub const MIN_POSITIVE: Self = Self { bits: 0x0400 };
    /// Machine epsilon (2⁻¹⁰ ≈ 9.77×10⁻⁴)
    pub const EPSILON: Self = Self { bits: 0x1400 };

    /// Create from raw bits
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// Get the raw bits
    pub const fn to_bits(self) -> u16 {
        self.bits
    }

    /// Convert from f32, rounding to nearest (ties to even)
    pub fn from_f32(value: f32) -> Self {
        Self { bits: f32_to_f16(value) }
    }

    /// Convert to f32 (exact)
    pub fn to_f32(self) -> f32 {
        f16_to_f32(self.bits)
    }

    /// Convert from f64 to half-precision
    ///
    /// Goes through f32, so a value sitting exactly between two halves after
    /// the first rounding may land on the other neighbour. Integer inputs
    /// and anything already representable in f32 convert exactly.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    /// Convert to f64 (exact)
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }

    /// Convert from an integer, rounding toward zero.
    ///
    /// Magnitudes above 65504 saturate to [`Half::MAX`] / [`Half::MIN`]
    /// rather than overflowing to infinity.
    pub const fn from_i32(value: i32) -> Self {
        Self { bits: i32_to_f16_rz(value) }
    }

    /// Convert to an integer, truncating toward zero.
    ///
    /// Infinities saturate to `i32::MIN`/`i32::MAX`; NaN maps to 0.
    pub fn to_i32(self) -> i32 {
        self.to_f32() as i32
    }

    /// Check if NaN
    pub fn is_nan(self) -> bool {
        (self.bits & 0x7C00) == 0x7C00 && (self.bits & 0x03FF) != 0
    }

    /// Check if infinite
    pub fn is_infinite(self) -> bool {
        (self.bits & 0x7FFF) == 0x7C00
    }

    /// Check if finite
    pub fn is_finite(self) -> bool {
        (self.bits & 0x7C00) != 0x7C00
    }

    /// Check if normal (not zero, subnormal, infinity, or NaN)
    pub fn is_normal(self) -> bool {
        let exp = self.bits & 0x7C00;
        exp != 0 && exp != 0x7C00
    }

    /// Check if zero (positive or negative)
    pub fn is_zero(self) -> bool {
        (self.bits & 0x7FFF) == 0
    }

    /// Check if sign bit is set
    pub fn is_sign_negative(self) -> bool {
        (self.bits & 0x8000) != 0
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        Self { bits: self.bits & 0x7FFF }
    }
}

// -- Conversion functions (IEEE 754 bit manipulation) -------------------------

/// Convert f32 to f16 bits, round-to-nearest-even
fn f32_to_f16(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xFF) as i32;
    let mantissa = bits & 0x007F_FFFF;

    if exp == 0xFF {
        if mantissa == 0 {
            return sign | 0x7C00; // Infinity
        }
        // NaN: keep the top payload bits, force quiet
        return sign | 0x7E00 | (mantissa >> 13) as u16;
    }

    let unbiased_exp = exp - 127;

    if unbiased_exp > 15 {
        // Overflow -> infinity
        return sign | 0x7C00;
    }

    if unbiased_exp >= -14 {
        // Normal. A carry out of the mantissa bumps the exponent, and out of
        // the largest exponent lands exactly on infinity.
        let mut out = (((unbiased_exp + 15) as u32) << 10) | (mantissa >> 13);
        let rest = mantissa & 0x1FFF;
        if rest > 0x1000 || (rest == 0x1000 && out & 1 == 1) {
            out += 1;
        }
        return sign | out as u16;
    }

    if unbiased_exp < -25 {
        // Below half the smallest subnormal (also covers f32 zero/subnormals)
        return sign;
    }

    // Subnormal: value = m * 2^(unbiased_exp - 23), target unit is 2^-24
    let m = mantissa | 0x0080_0000;
    let shift = (-1 - unbiased_exp) as u32; // 14..=24
    let mut out = m >> shift;
    let rest = m & ((1 << shift) - 1);
    let halfway = 1 << (shift - 1);
    if rest > halfway || (rest == halfway && out & 1 == 1) {
        out += 1;
    }
    sign | out as u16
}

/// Convert f16 bits to f32
fn f16_to_f32(bits: u16) -> f32 {
    let sign = ((bits & 0x8000) as u32) << 16;
    let exp = ((bits >> 10) & 0x1F) as u32;
    let mantissa = (bits & 0x03FF) as u32;

    if exp == 0x1F {
        // Infinity or NaN
        let f32_bits = sign | 0x7F80_0000 | (mantissa << 13);
        return f32::from_bits(f32_bits);
    }

    if exp == 0 {
        if mantissa == 0 {
            return f32::from_bits(sign);
        }
        // Subnormal -> normalize
        let mut m = mantissa;
        let mut e: i32 = -14;
        while (m & 0x0400) == 0 {
            m <<= 1;
            e -= 1;
        }
        m &= 0x03FF;
        let f32_exp = ((e + 127) as u32) << 23;
        return f32::from_bits(sign | f32_exp | (m << 13));
    }

    let f32_exp = ((exp as i32 - 15 + 127) as u32) << 23;
    f32::from_bits(sign | f32_exp | (mantissa << 13))
}

/// Convert an integer to f16 bits, round-toward-zero, saturating
const fn i32_to_f16_rz(value: i32) -> u16 {
    let sign: u16 = if value < 0 { 0x8000 } else { 0 };
    let magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return 0;
    }

    let msb = 31 - magnitude.leading_zeros();
    if msb > 15 {
        return sign | 0x7BFF;
    }

    // Integers are never subnormal; drop the implicit bit, truncate the rest.
    let mantissa = (if msb > 10 {
        magnitude >> (msb - 10)
    } else {
        magnitude << (10 - msb)
    }) & 0x03FF;
    sign | (((msb + 15) << 10) | mantissa) as u16
}

// -- Operator implementations -------------------------------------------------

impl Add for Half {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() + rhs.to_f32())
    }
}

impl Sub for Half {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() - rhs.to_f32())
    }
}

impl Mul for Half {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() * rhs.to_f32())
    }
}

impl Div for Half {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() / rhs.to_f32())
    }
}

impl Neg for Half {
    type Output = Self;
    fn neg(self) -> Self {
        Self { bits: self.bits ^ 0x8000 }
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Default for Half {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({})", self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl From<f32> for Half {
    fn from(v: f32) -> Self {
        Self::from_f32(v)
    }
}

impl From<i32> for Half {
    fn from(v: i32) -> Self {
        Self::from_i32(v)
    }
}

impl From<Half> for f32 {
    fn from(v: Half) -> Self {
        v.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(v: Half) -> Self {
        v.to_f64()
    }
}

/// Convert a slice of f32 to half-precision
pub fn f32_to_half_slice(src: &[f32]) -> Vec<Half> {
    src.iter().map(|&v| Half::from_f32(v)).collect()
}

/// Convert a slice of half-precision to f32
pub fn half_to_f32_slice(src: &[Half]) -> Vec<f32> {
    src.iter().map(|v| v.to_f32()).collect()
}
