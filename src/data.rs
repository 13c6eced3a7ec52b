// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Token placement library — simple data types

use smallvec::SmallVec;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector
///
/// Used both for sizes (width, height) and for positions (x, y), in pixels.
/// Positions are relative to the top-left corner of the container.
///
/// Values are not required to be finite or positive: placement never
/// validates its input, it only avoids panicking.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2(pub f64, pub f64);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2(0.0, 0.0);

    /// Positive infinity
    pub const INFINITY: Vec2 = Vec2(f64::INFINITY, f64::INFINITY);

    /// Construct with both components equal to `value`
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Vec2(value, value)
    }

    /// Round both components to the nearest integer
    #[inline]
    pub fn round(self) -> Self {
        Vec2(self.0.round(), self.1.round())
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self.0 - other.0).hypot(self.1 - other.1)
    }

    /// True if both components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

/// Token positions, in placement order
//
// NOTE: boards rarely hold more than a couple of dozen tokens, so most lists
// fit inline.
pub type Coordinates = SmallVec<[Vec2; 16]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops() {
        let a = Vec2(1.0, 2.0);
        let b = Vec2(4.0, 6.0);
        assert_eq!(a + b, Vec2(5.0, 8.0));
        assert_eq!(b - a, Vec2(3.0, 4.0));
        assert_eq!(a * 2.0, Vec2(2.0, 4.0));
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn round() {
        assert_eq!(Vec2(399.6, 300.4).round(), Vec2(400.0, 300.0));
        assert!(!Vec2::INFINITY.is_finite());
        assert!(Vec2::splat(3.0).is_finite());
    }
}
