//! Rotation quaternion.
//!
//! [`Quat`] is an `(x, y, z, w)` unit quaternion. It is produced by
//! [`quat_rotation_roll_pitch_yaw`](crate::quat_rotation_roll_pitch_yaw) and
//! turned into a matrix by [`Mat4::from_quat`](crate::Mat4::from_quat).

use std::ops::Mul;

use zup_core::Axis;

use crate::{Vec3, Vec4};

/// A rotation quaternion `(x, y, z, w)`.
///
/// # Example
///
/// ```rust
/// use zup_math::{Quat, Vec3};
/// use zup_math::Axis;
///
/// let yaw = Quat::from_axis_rotation(Axis::Up, std::f32::consts::FRAC_PI_2);
/// let turned = yaw.rotate_vector(Vec3::FORWARD);
/// assert!(turned.near_equal(Vec3::RIGHT, 1e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// Vector part, x
    pub x: f32,
    /// Vector part, y
    pub y: f32,
    /// Vector part, z
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its components.
    #[inline]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Reinterprets a [`Vec4`] as `(x, y, z, w)`.
    #[inline]
    pub fn from_vec4(v: Vec4) -> Self {
        let [x, y, z, w] = v.to_array();
        Self::from_xyzw(x, y, z, w)
    }

    /// Returns the components as a [`Vec4`].
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Rotation of `angle` radians about a single axis.
    ///
    /// Positive angles follow the right-hand rule.
    #[inline]
    pub fn from_axis_rotation(axis: Axis, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        let mut v = [0.0; 3];
        v[axis.index()] = sin;
        Self::from_xyzw(v[0], v[1], v[2], cos)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length of the quaternion.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns true if the length is within `1e-4` of one.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (self.length() - 1.0).abs() <= 1e-4
    }

    /// Inverse rotation of a unit quaternion.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product `self * rhs`: applies `rhs` first, then `self`.
    #[inline]
    pub fn mul_quat(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::from_xyzw(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Rotates a vector by this (unit) quaternion.
    #[inline]
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Returns true if every component is within `epsilon` of `other`.
    ///
    /// `q` and `-q` encode the same rotation but do not compare equal here.
    #[inline]
    pub fn near_equal(self, other: Self, epsilon: f32) -> bool {
        self.to_vec4().near_equal(other.to_vec4(), epsilon)
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_quat(rhs)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_quat_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate_vector(v), v);
        assert!(Quat::IDENTITY.is_normalized());
    }

    #[test]
    fn test_quat_axis_rotations() {
        // roll: right -> up
        let roll = Quat::from_axis_rotation(Axis::Forward, FRAC_PI_2);
        assert!(roll.rotate_vector(Vec3::RIGHT).near_equal(Vec3::UP, 1e-6));

        // pitch: up -> forward
        let pitch = Quat::from_axis_rotation(Axis::Right, FRAC_PI_2);
        assert!(pitch.rotate_vector(Vec3::UP).near_equal(Vec3::FORWARD, 1e-6));

        // yaw: forward -> right
        let yaw = Quat::from_axis_rotation(Axis::Up, FRAC_PI_2);
        assert!(yaw.rotate_vector(Vec3::FORWARD).near_equal(Vec3::RIGHT, 1e-6));
    }

    #[test]
    fn test_quat_mul_order() {
        let roll = Quat::from_axis_rotation(Axis::Forward, FRAC_PI_2);
        let yaw = Quat::from_axis_rotation(Axis::Up, FRAC_PI_2);

        // roll first, then yaw: right -> up -> up
        let combined = yaw * roll;
        assert!(combined.rotate_vector(Vec3::RIGHT).near_equal(Vec3::UP, 1e-6));

        // yaw first, then roll: right -> -forward -> -forward
        let combined = roll * yaw;
        assert!(
            combined
                .rotate_vector(Vec3::RIGHT)
                .near_equal(-Vec3::FORWARD, 1e-6)
        );
    }

    #[test]
    fn test_quat_matches_glam() {
        let ours = Quat::from_axis_rotation(Axis::Right, 0.7);
        let theirs = glam::Quat::from_rotation_y(0.7);
        assert!(ours.near_equal(Quat::from_glam(theirs), 1e-6));
    }

    #[test]
    fn test_quat_conjugate_undoes_rotation() {
        let q = Quat::from_axis_rotation(Axis::Up, 1.2) * Quat::from_axis_rotation(Axis::Forward, -0.4);
        let v = Vec3::new(0.3, -2.0, 5.0);
        let back = q.conjugate().rotate_vector(q.rotate_vector(v));
        assert!(back.near_equal(v, 1e-5));
    }
}
