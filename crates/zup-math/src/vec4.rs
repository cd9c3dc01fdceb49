//! 4-lane SIMD vector.
//!
//! [`Vec4`] wraps [`wide::f32x4`] so every builder in this crate runs one
//! portable vectorized path on stable Rust. It supplies the lane-level
//! primitives the view, projection and rotation builders are written in:
//!
//! - arithmetic and fused [`mul_add`](Vec4::mul_add)
//! - 3-lane [`dot3`](Vec4::dot3), [`cross3`](Vec4::cross3), [`normalize3`](Vec4::normalize3)
//! - lane [`select`](Vec4::select) and two-source [`permute`](Vec4::permute)
//! - simultaneous [`sin_cos`](Vec4::sin_cos)
//!
//! # Example
//!
//! ```rust
//! use zup_math::{Vec4, PERMUTE_0X, PERMUTE_1Y, PERMUTE_0Z, PERMUTE_1W};
//!
//! let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
//! let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
//! let p = Vec4::permute::<PERMUTE_0X, PERMUTE_1Y, PERMUTE_0Z, PERMUTE_1W>(a, b);
//! assert_eq!(p.to_array(), [1.0, 6.0, 3.0, 8.0]);
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use wide::f32x4;

use crate::Vec3;

/// Lane 0 of the first permute source.
pub const PERMUTE_0X: usize = 0;
/// Lane 1 of the first permute source.
pub const PERMUTE_0Y: usize = 1;
/// Lane 2 of the first permute source.
pub const PERMUTE_0Z: usize = 2;
/// Lane 3 of the first permute source.
pub const PERMUTE_0W: usize = 3;
/// Lane 0 of the second permute source.
pub const PERMUTE_1X: usize = 4;
/// Lane 1 of the second permute source.
pub const PERMUTE_1Y: usize = 5;
/// Lane 2 of the second permute source.
pub const PERMUTE_1Z: usize = 6;
/// Lane 3 of the second permute source.
pub const PERMUTE_1W: usize = 7;

/// Select mask taking x, y, z from the second operand and w from the first.
pub const SELECT_XYZ: [bool; 4] = [true, true, true, false];

/// A 4-lane `f32` vector backed by a SIMD register.
///
/// Also used as the storage for quaternions (`x, y, z, w`) and as the row
/// type of [`Mat4`](crate::Mat4).
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
#[repr(transparent)]
pub struct Vec4(f32x4);

impl Vec4 {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(f32x4::new([x, y, z, w]))
    }

    /// All lanes zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Creates a vector with all lanes set to the same value.
    #[inline]
    pub fn splat(v: f32) -> Self {
        Self(f32x4::splat(v))
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(f32x4::from(a))
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Lane 0.
    #[inline]
    pub fn x(self) -> f32 {
        self.to_array()[0]
    }

    /// Lane 1.
    #[inline]
    pub fn y(self) -> f32 {
        self.to_array()[1]
    }

    /// Lane 2.
    #[inline]
    pub fn z(self) -> f32 {
        self.to_array()[2]
    }

    /// Lane 3.
    #[inline]
    pub fn w(self) -> f32 {
        self.to_array()[3]
    }

    /// Returns lane `i` (0..4).
    #[inline]
    pub fn lane(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    /// Drops the w lane.
    #[inline]
    pub fn truncate(self) -> Vec3 {
        let [x, y, z, _] = self.to_array();
        Vec3::new(x, y, z)
    }

    /// Fused multiply-add: `self * m + a`.
    #[inline]
    pub fn mul_add(self, m: Self, a: Self) -> Self {
        Self(self.0.mul_add(m.0, a.0))
    }

    /// Lane-wise choice: lanes where `mask` is set come from `b`, others from `a`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zup_math::{Vec4, SELECT_XYZ};
    ///
    /// let basis = Vec4::new(1.0, 0.0, 0.0, 9.0);
    /// let offset = Vec4::splat(-4.0);
    /// let row = Vec4::select(offset, basis, SELECT_XYZ);
    /// assert_eq!(row.to_array(), [1.0, 0.0, 0.0, -4.0]);
    /// ```
    #[inline]
    pub fn select(a: Self, b: Self, mask: [bool; 4]) -> Self {
        let bits = mask.map(|set| if set { f32::from_bits(u32::MAX) } else { 0.0 });
        Self(f32x4::from(bits).blend(b.0, a.0))
    }

    /// Gathers one lane per output slot from `a` (indices 0-3) or `b` (4-7).
    ///
    /// Use the `PERMUTE_*` constants for the indices.
    #[inline]
    pub fn permute<const X: usize, const Y: usize, const Z: usize, const W: usize>(
        a: Self,
        b: Self,
    ) -> Self {
        const { assert!(X < 8 && Y < 8 && Z < 8 && W < 8, "permute index out of range") };
        let sources = [a.to_array(), b.to_array()];
        let pick = |i: usize| sources[i >> 2][i & 3];
        Self::new(pick(X), pick(Y), pick(Z), pick(W))
    }

    /// Sine and cosine of every lane, evaluated together.
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (sin, cos) = self.0.sin_cos();
        (Self(sin), Self(cos))
    }

    /// Dot product of the x, y, z lanes.
    #[inline]
    pub fn dot3(self, other: Self) -> f32 {
        let [x, y, z, _] = (self.0 * other.0).to_array();
        x + y + z
    }

    /// Cross product of the x, y, z lanes; w is zero.
    #[inline]
    pub fn cross3(self, other: Self) -> Self {
        let [ax, ay, az, _] = self.to_array();
        let [bx, by, bz, _] = other.to_array();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx, 0.0)
    }

    /// Length of the x, y, z lanes.
    #[inline]
    pub fn length3(self) -> f32 {
        self.dot3(self).sqrt()
    }

    /// Scales all lanes by the reciprocal of the 3-lane length.
    ///
    /// Returns zero vector if length is zero.
    #[inline]
    pub fn normalize3(self) -> Self {
        let len = self.length3();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::zero()
        }
    }

    /// Returns true if the x, y, z lanes are exactly zero.
    #[inline]
    pub fn is_zero3(self) -> bool {
        self.truncate().is_zero()
    }

    /// Returns true if any of the x, y, z lanes is infinite.
    #[inline]
    pub fn is_infinite3(self) -> bool {
        self.truncate().is_infinite()
    }

    /// Returns true if all lanes are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Returns true if every lane is within `epsilon` of `other`.
    #[inline]
    pub fn near_equal(self, other: Self, epsilon: f32) -> bool {
        let diff = (self.0 - other.0).abs().to_array();
        diff.iter().all(|d| *d <= epsilon)
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::from_array(self.to_array())
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vec4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        f.debug_tuple("Vec4").field(&x).field(&y).field(&z).field(&w).finish()
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Vec4 * Vec4 (lane-wise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * f32x4::splat(rhs))
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}
