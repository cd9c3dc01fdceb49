//! Euler-angle rotations.
//!
//! Angles are packed one lane per axis, in axis order:
//!
//! | Lane | Axis | Angle |
//! |------|------|-------|
//! | 0 | forward (X) | roll |
//! | 1 | right (Y) | pitch |
//! | 2 | up (Z) | yaw |
//! | 3 | - | ignored |
//!
//! The composite rotation applies roll first, then pitch, then yaw, each
//! about the fixed world axes. As a quaternion product that is
//! `yaw * pitch * roll`.
//!
//! # Example
//!
//! ```rust
//! use zup_math::{rotation_roll_pitch_yaw, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! // Quarter yaw turns forward into right
//! let m = rotation_roll_pitch_yaw(0.0, 0.0, FRAC_PI_2);
//! assert!(m.transform_vector(Vec3::FORWARD).near_equal(Vec3::RIGHT, 1e-6));
//! ```

use crate::{
    Mat4, Quat, Vec4, PERMUTE_0X, PERMUTE_0Y, PERMUTE_0Z, PERMUTE_1X, PERMUTE_1Y, PERMUTE_1Z,
};

/// Rotation matrix for `roll`, then `pitch`, then `yaw` (radians).
#[inline]
pub fn rotation_roll_pitch_yaw(roll: f32, pitch: f32, yaw: f32) -> Mat4 {
    rotation_roll_pitch_yaw_from_vector(Vec4::new(roll, pitch, yaw, 0.0))
}

/// Rotation matrix for packed `(roll, pitch, yaw, _)` angles.
#[inline]
pub fn rotation_roll_pitch_yaw_from_vector(angles: Vec4) -> Mat4 {
    Mat4::from_quat(quat_rotation_roll_pitch_yaw_from_vector(angles))
}

/// Quaternion for `roll`, then `pitch`, then `yaw` (radians).
///
/// Takes its arguments as `(pitch, yaw, roll)`; the packed vector form
/// still uses axis order.
#[inline]
pub fn quat_rotation_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Quat {
    quat_rotation_roll_pitch_yaw_from_vector(Vec4::new(roll, pitch, yaw, 0.0))
}

/// Quaternion for packed `(roll, pitch, yaw, _)` angles.
///
/// With `s_i`, `c_i` the sine and cosine of half the lane-`i` angle:
///
/// ```text
/// x = s0 c1 c2 - c0 s1 s2
/// y = c0 s1 c2 + s0 c1 s2
/// z = c0 c1 s2 - s0 s1 c2
/// w = c0 c1 c2 + s0 s1 s2
/// ```
///
/// Each term is a lane-wise product of three vectors, one per axis, that
/// holds the sine in that axis' own lane and the cosine elsewhere (or the
/// other way round).
pub fn quat_rotation_roll_pitch_yaw_from_vector(angles: Vec4) -> Quat {
    let sign = Vec4::new(-1.0, 1.0, -1.0, 1.0);

    let half_angles = angles * 0.5;
    let (sin, cos) = half_angles.sin_cos();

    // (s0, c0, c0, c0), (c1, s1, c1, c1), (c2, c2, s2, c2)
    let roll0 = Vec4::permute::<PERMUTE_0X, PERMUTE_1X, PERMUTE_1X, PERMUTE_1X>(sin, cos);
    let pitch0 = Vec4::permute::<PERMUTE_1Y, PERMUTE_0Y, PERMUTE_1Y, PERMUTE_1Y>(sin, cos);
    let yaw0 = Vec4::permute::<PERMUTE_1Z, PERMUTE_1Z, PERMUTE_0Z, PERMUTE_1Z>(sin, cos);

    // (c0, s0, s0, s0), (s1, c1, s1, s1), (s2, s2, c2, s2)
    let roll1 = Vec4::permute::<PERMUTE_0X, PERMUTE_1X, PERMUTE_1X, PERMUTE_1X>(cos, sin);
    let pitch1 = Vec4::permute::<PERMUTE_1Y, PERMUTE_0Y, PERMUTE_1Y, PERMUTE_1Y>(cos, sin);
    let yaw1 = Vec4::permute::<PERMUTE_1Z, PERMUTE_1Z, PERMUTE_0Z, PERMUTE_1Z>(cos, sin);

    let q1 = pitch1 * sign * yaw1;
    let q0 = pitch0 * yaw0 * roll0;

    Quat::from_vec4(q1.mul_add(roll1, q0))
}
