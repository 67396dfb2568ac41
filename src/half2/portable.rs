//! Portable backend: two independent scalar lanes.

use super::Half2;
use crate::half::Half;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Half2 {
    /// Pair two scalars: lane 0 = `lo`, lane 1 = `hi`.
    pub fn new(lo: Half, hi: Half) -> Self {
        Self { lanes: [lo, hi] }
    }

    pub(crate) fn from_lanes(lo: Half, hi: Half) -> Self {
        Self::new(lo, hi)
    }

    pub(super) fn broadcast_i32(value: i32) -> Self {
        let h = Half::from_i32(value);
        Self { lanes: [h, h] }
    }

    /// Both lanes, in order.
    pub fn lanes(self) -> (Half, Half) {
        (self.lanes[0], self.lanes[1])
    }

    /// Build from the packed image: lane 0 in bits 0..16, lane 1 in 16..32.
    pub fn from_bits(bits: u32) -> Self {
        Self::new(Half::from_bits(bits as u16), Half::from_bits((bits >> 16) as u16))
    }

    /// The packed image: lane 0 in bits 0..16, lane 1 in 16..32.
    pub fn to_bits(self) -> u32 {
        self.lanes[0].to_bits() as u32 | (self.lanes[1].to_bits() as u32) << 16
    }
}

impl Neg for Half2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.lanes[0], -self.lanes[1])
    }
}

impl Add for Half2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.lanes[0] + rhs.lanes[0], self.lanes[1] + rhs.lanes[1])
    }
}

impl Sub for Half2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.lanes[0] - rhs.lanes[0], self.lanes[1] - rhs.lanes[1])
    }
}

impl Mul for Half2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.lanes[0] * rhs.lanes[0], self.lanes[1] * rhs.lanes[1])
    }
}

impl Div for Half2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.lanes[0] / rhs.lanes[0], self.lanes[1] / rhs.lanes[1])
    }
}

impl PartialEq for Half2 {
    fn eq(&self, other: &Self) -> bool {
        self.lanes[0] == other.lanes[0] && self.lanes[1] == other.lanes[1]
    }
}
