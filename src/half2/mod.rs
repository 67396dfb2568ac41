//! Packed pair of half-precision values
//!
//! [`Half2`] holds two [`Half`] lanes and does arithmetic on both at once.
//! Its storage and operator bodies come from one of two backends, picked
//! when the crate is built (see [`gate`]):
//!
//! - `native`: the pair lives in one packed 32-bit register image and every
//!   operator is a single F16C/SSE sequence.
//! - `portable`: the pair is `[Half; 2]` and operators run per lane.
//!
//! Both produce the same lane values for the same inputs. Everything in this
//! file is shared by the two backends.

pub(crate) mod gate;

#[cfg(half2_native)]
mod native;
#[cfg(not(half2_native))]
mod portable;

#[cfg(half2_native)]
pub use native::NativeHalf2;

use crate::half::Half;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Two half-precision lanes treated as one value.
///
/// Lane 0 and lane 1 keep their positions through copies, negation and
/// arithmetic. The packed bit image ([`Half2::to_bits`]) always has lane 0
/// in the low 16 bits.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Half2 {
    #[cfg(half2_native)]
    native: NativeHalf2,
    #[cfg(not(half2_native))]
    lanes: [Half; 2],
}

impl Half2 {
    /// Broadcast an integer into both lanes.
    ///
    /// The integer is converted with round-toward-zero (see
    /// [`Half::from_i32`]), so both backends agree bit for bit.
    pub fn from_i32(value: i32) -> Self {
        Self::broadcast_i32(value)
    }

    /// Broadcast one scalar into both lanes.
    pub fn splat(value: Half) -> Self {
        Self::from_lanes(value, value)
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self
    }

    /// Lane 0
    pub fn lo(self) -> Half {
        self.lanes().0
    }

    /// Lane 1
    pub fn hi(self) -> Half {
        self.lanes().1
    }

    /// Copy both lanes of `src` into `self`.
    ///
    /// Evaluates to `src`, not to the previous value of `self`. After the
    /// copy the two are lane-for-lane identical, so chained assignment
    /// (`a.assign(b.assign(c))`) sees the right-hand value.
    pub fn assign(&mut self, src: Half2) -> Half2 {
        *self = src;
        src
    }

    /// `self = self OP rhs`, shared by every compound-assignment operator.
    fn compound<T: Into<Half2>>(&mut self, rhs: T, op: fn(Half2, Half2) -> Half2) -> Half2 {
        let result = op(*self, rhs.into());
        self.assign(result)
    }
}

impl Default for Half2 {
    /// The zero pair.
    fn default() -> Self {
        Self::from_bits(0)
    }
}

impl From<i32> for Half2 {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<Half> for Half2 {
    fn from(value: Half) -> Self {
        Self::splat(value)
    }
}

impl<T: Into<Half2>> AddAssign<T> for Half2 {
    fn add_assign(&mut self, rhs: T) {
        self.compound(rhs, |a, b| a + b);
    }
}

impl<T: Into<Half2>> SubAssign<T> for Half2 {
    fn sub_assign(&mut self, rhs: T) {
        self.compound(rhs, |a, b| a - b);
    }
}

impl<T: Into<Half2>> MulAssign<T> for Half2 {
    fn mul_assign(&mut self, rhs: T) {
        self.compound(rhs, |a, b| a * b);
    }
}

impl<T: Into<Half2>> DivAssign<T> for Half2 {
    fn div_assign(&mut self, rhs: T) {
        self.compound(rhs, |a, b| a / b);
    }
}

impl fmt::Debug for Half2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.lanes();
        write!(f, "Half2({}, {})", lo, hi)
    }
}

impl fmt::Display for Half2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.lanes();
        write!(f, "({}, {})", lo, hi)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Half2 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.lanes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Half2 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (lo, hi) = <(Half, Half) as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_lanes(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes_f32(v: Half2) -> (f32, f32) {
        let (lo, hi) = v.lanes();
        (lo.to_f32(), hi.to_f32())
    }

    #[test]
    fn test_add_scenario() {
        assert_eq!(lanes_f32(Half2::from_i32(3) + Half2::from_i32(4)), (7.0, 7.0));
    }

    #[test]
    fn test_negate_scenario() {
        assert_eq!(lanes_f32(-Half2::from_i32(3)), (-3.0, -3.0));
    }

    #[test]
    fn test_mul_scenario() {
        assert_eq!(lanes_f32(Half2::from_i32(2) * Half2::from_i32(5)), (10.0, 10.0));
    }

    #[test]
    fn test_compound_add_scenario() {
        let mut a = Half2::from_i32(1);
        a += Half2::from_i32(2);
        assert!(a == Half2::from_i32(3));
    }

    #[test]
    fn test_div_scenario() {
        assert_eq!(lanes_f32(Half2::from_i32(6) / Half2::from_i32(3)), (2.0, 2.0));
    }

    #[test]
    fn test_equality_scenario() {
        assert!(Half2::from_i32(5) == Half2::from_i32(5));
        assert!(!(Half2::from_i32(5) == Half2::from_i32(4)));
    }

    #[test]
    fn test_default_is_zero_pair() {
        assert_eq!(Half2::default().to_bits(), 0);
    }

    #[test]
    fn test_pos_is_identity() {
        let v = Half2::from_bits(0xC500_3C00);
        assert_eq!(v.pos().to_bits(), v.to_bits());
    }

    #[test]
    fn test_lane_order() {
        // lane 0 = 1.0 (0x3C00), lane 1 = -5.0 (0xC500)
        let v = Half2::from_bits(0xC500_3C00);
        assert_eq!(v.lo().to_f32(), 1.0);
        assert_eq!(v.hi().to_f32(), -5.0);
        let n = -v;
        assert_eq!(lanes_f32(n), (-1.0, 5.0));
        assert_eq!(lanes_f32(v + Half2::from_i32(1)), (2.0, -4.0));
    }

    #[test]
    fn test_splat_and_from_half() {
        let v: Half2 = Half::from_f32(0.5).into();
        assert_eq!(lanes_f32(v), (0.5, 0.5));
        assert_eq!(Half2::splat(Half::ONE).to_bits(), 0x3C00_3C00);
    }

    #[test]
    fn test_compound_with_integer_operand() {
        let mut a = Half2::from_i32(10);
        a -= 4;
        assert_eq!(lanes_f32(a), (6.0, 6.0));
        a *= 3;
        assert_eq!(lanes_f32(a), (18.0, 18.0));
        a /= 2;
        assert_eq!(lanes_f32(a), (9.0, 9.0));
        a += Half::from_f32(0.5);
        assert_eq!(lanes_f32(a), (9.5, 9.5));
    }

    #[test]
    fn test_assign_returns_source() {
        let mut x = Half2::from_i32(1);
        let y = Half2::from_i32(9);
        let r = x.assign(y);
        assert!(r == y);
        assert!(!(r == Half2::from_i32(1)));
        assert!(x == y);
    }

    #[test]
    fn test_chained_assign() {
        let mut a = Half2::default();
        let mut b = Half2::default();
        let c = Half2::from_i32(7);
        let r = a.assign(b.assign(c));
        assert!(a == c && b == c && r == c);
    }

    #[test]
    fn test_formatting() {
        let v = Half2::from_bits(0xC500_3C00);
        assert_eq!(format!("{:?}", v), "Half2(1, -5)");
        assert_eq!(format!("{}", v), "(1, -5)");
    }

    #[test]
    fn test_nan_lane_never_equal() {
        let v = Half2::from_bits(((Half::NAN.to_bits() as u32) << 16) | Half::ONE.to_bits() as u32);
        assert!(!(v == v));
    }

    #[test]
    fn test_signed_zero_pairs_equal() {
        let pos = Half2::from_i32(0);
        assert!(pos == -pos);
        assert_ne!(pos.to_bits(), (-pos).to_bits());
    }
}
