//! 4x4 matrix type for view, projection and rotation transforms.
//!
//! # Convention
//!
//! Matrices are stored as four **rows** and transform **row vectors**:
//!
//! ```text
//!                   | r0 |
//! [x y z w]    *    | r1 |    =   x*r0 + y*r1 + z*r2 + w*r3
//!                   | r2 |
//!                   | r3 |
//! ```
//!
//! `A * B` therefore applies `A` first, then `B`. The memory layout equals a
//! column-major, column-vector `glam::Mat4` whose columns are these rows, so
//! [`Mat4::to_glam`] is a plain copy.
//!
//! In the Z-up frame the first three rows of a rotation are the images of the
//! forward, right and up axes. The named accessors
//! ([`forward_row`](Mat4::forward_row), [`right_row`](Mat4::right_row),
//! [`up_row`](Mat4::up_row)) and [`Mat4::from_basis_rows`] resolve those rows
//! through [`Axis`] so no builder hard-codes a row index.
//!
//! # Usage
//!
//! ```rust
//! use zup_math::{Mat4, Vec3};
//!
//! let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
//! let p = m.transform_point(Vec3::ZERO);
//! assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
//! ```

use std::ops::{Index, Mul};

use zup_core::Axis;

use crate::{Quat, Vec3, Vec4};

/// A 4x4 matrix of row vectors.
///
/// # Example
///
/// ```rust
/// use zup_math::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(v * Mat4::IDENTITY, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements as rows: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from [`Vec4`] rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Places one row per semantic axis, plus the homogeneous row 3.
    ///
    /// This is the only place the Z-up axis order decides where a basis row
    /// lands.
    #[inline]
    pub fn from_basis_rows(forward: Vec4, right: Vec4, up: Vec4, w: Vec4) -> Self {
        let mut m = [[0.0; 4]; 4];
        m[Axis::Forward.index()] = forward.to_array();
        m[Axis::Right.index()] = right.to_array();
        m[Axis::Up.index()] = up.to_array();
        m[3] = w.to_array();
        Self::from_rows(m)
    }

    /// Translation by `t`.
    #[inline]
    pub const fn translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// Roll: rotation about the forward (X) axis.
    ///
    /// Positive angles turn right toward up.
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, sin, 0.0],
            [0.0, -sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pitch: rotation about the right (Y) axis.
    ///
    /// Positive angles turn up toward forward.
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, 0.0, -sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Yaw: rotation about the up (Z) axis.
    ///
    /// Positive angles turn forward toward right.
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, sin, 0.0, 0.0],
            [-sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Single-axis rotation about a semantic axis.
    #[inline]
    pub fn rotation_axis(axis: Axis, angle: f32) -> Self {
        match axis {
            Axis::Forward => Self::rotation_x(angle),
            Axis::Right => Self::rotation_y(angle),
            Axis::Up => Self::rotation_z(angle),
        }
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// Row `i` is the image of basis vector `i`.
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Self::from_rows([
            [1.0 - yy - zz, xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - xx - zz, yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - xx - yy, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns row `i` as a [`Vec4`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns column `i` as a [`Vec4`].
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Row belonging to a semantic axis.
    #[inline]
    pub fn basis_row(&self, axis: Axis) -> Vec4 {
        self.row(axis.index())
    }

    /// Row holding the forward (depth) basis.
    #[inline]
    pub fn forward_row(&self) -> Vec4 {
        self.basis_row(Axis::Forward)
    }

    /// Row holding the right basis.
    #[inline]
    pub fn right_row(&self) -> Vec4 {
        self.basis_row(Axis::Right)
    }

    /// Row holding the up basis.
    #[inline]
    pub fn up_row(&self) -> Vec4 {
        self.basis_row(Axis::Up)
    }

    /// Homogeneous row (translation for affine matrices).
    #[inline]
    pub fn w_row(&self) -> Vec4 {
        self.row(3)
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_row_vecs(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Computes `v * self`.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let [x, y, z, w] = v.to_array();
        let acc = self.row(3) * w;
        let acc = self.row(2).mul_add(Vec4::splat(z), acc);
        let acc = self.row(1).mul_add(Vec4::splat(y), acc);
        self.row(0).mul_add(Vec4::splat(x), acc)
    }

    /// Transforms a point (w = 1) and divides by the resulting w.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let out = self.transform_vec4(p.extend(1.0));
        out.truncate() / out.w()
    }

    /// Transforms a direction (w = 0); translation is ignored.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.transform_vec4(v.extend(0.0)).truncate()
    }

    /// Multiplies two matrices; `self` is applied first.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_row_vecs(
            other.transform_vec4(self.row(0)),
            other.transform_vec4(self.row(1)),
            other.transform_vec4(self.row(2)),
            other.transform_vec4(self.row(3)),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Returns true if every element is within `epsilon` of `other`.
    #[inline]
    pub fn near_equal(&self, other: &Self, epsilon: f32) -> bool {
        (0..4).all(|i| self.row(i).near_equal(other.row(i), epsilon))
    }

    /// Converts to glam Mat4 (column-major, column vectors).
    ///
    /// Rows here become glam columns; both describe the same transform.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_rows(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Vec4 * Mat4
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Vec4 {
        rhs.transform_vec4(self)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_mat4_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::IDENTITY.transform_point(v), v);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_transpose() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = m.transpose();
        assert_eq!(t.m[0][1], 5.0);
        assert_eq!(t.m[3][0], 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat4_translation() {
        let m = Mat4::translation(Vec3::new(10.0, 20.0, 30.0));
        let p = m.transform_point(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vec3::new(11.0, 22.0, 33.0));
        // Directions ignore translation
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat4_basis_rows() {
        let f = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let r = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let u = Vec4::new(0.0, 0.0, 1.0, 0.0);
        let w = Vec4::new(0.0, 0.0, 0.0, 1.0);
        let m = Mat4::from_basis_rows(f, r, u, w);
        assert_eq!(m, Mat4::IDENTITY);
        assert_eq!(m.forward_row(), f);
        assert_eq!(m.right_row(), r);
        assert_eq!(m.up_row(), u);
        assert_eq!(m.w_row(), w);
    }

    #[test]
    fn test_mat4_axis_rotations() {
        let roll = Mat4::rotation_x(FRAC_PI_2);
        assert!(roll.transform_vector(Vec3::RIGHT).near_equal(Vec3::UP, EPSILON));

        let pitch = Mat4::rotation_y(FRAC_PI_2);
        assert!(pitch.transform_vector(Vec3::UP).near_equal(Vec3::FORWARD, EPSILON));

        let yaw = Mat4::rotation_z(FRAC_PI_2);
        assert!(yaw.transform_vector(Vec3::FORWARD).near_equal(Vec3::RIGHT, EPSILON));
    }

    #[test]
    fn test_mat4_multiplication_order() {
        // Scale then translate: (1,0,0) -> (2,0,0) -> (12,0,0)
        let scale = Mat4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let translate = Mat4::translation(Vec3::new(10.0, 0.0, 0.0));
        let combined = scale * translate;
        let p = combined.transform_point(Vec3::X);
        assert!((p.x - 12.0).abs() < EPSILON, "Expected 12.0, got {}", p.x);
    }

    #[test]
    fn test_mat4_from_quat_matches_axis_rotation() {
        for axis in Axis::ALL {
            let from_quat = Mat4::from_quat(Quat::from_axis_rotation(axis, 0.8));
            let direct = Mat4::rotation_axis(axis, 0.8);
            assert!(from_quat.near_equal(&direct, EPSILON), "axis {axis}");
        }
    }

    #[test]
    fn test_mat4_glam_roundtrip_transform() {
        let m = Mat4::rotation_z(0.3) * Mat4::translation(Vec3::new(1.0, -2.0, 0.5));
        let p = Vec3::new(0.25, 4.0, -1.0);
        let ours = m.transform_point(p);
        let theirs = Vec3::from_glam(m.to_glam().transform_point3(p.to_glam()));
        assert!(ours.near_equal(theirs, EPSILON));
        assert_eq!(Mat4::from_glam(m.to_glam()), m);
    }
}
