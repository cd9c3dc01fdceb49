//! View matrices: look-at and look-to.
//!
//! A view matrix moves the world so the eye sits at the origin and then
//! rotates it into camera space. Camera space keeps the Z-up labeling:
//! depth along axis 0, right along axis 1, up along axis 2.
//!
//! ```rust
//! use zup_math::{look_at, Vec3};
//!
//! let view = look_at(Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, Vec3::UP);
//! let p = view.transform_point(Vec3::new(0.0, 1.0, 2.0));
//! assert_eq!(p, Vec3::new(5.0, 1.0, 2.0)); // 5 ahead, 1 right, 2 up
//! ```

use crate::check::{self, debug_check};
use crate::{Mat4, Vec3, Vec4, SELECT_XYZ};

/// Builds a view matrix for an eye at `eye_position` looking at `focus_position`.
///
/// `focus_position` must differ from `eye_position`.
#[inline]
pub fn look_at(eye_position: Vec3, focus_position: Vec3, up_direction: Vec3) -> Mat4 {
    let eye_direction = focus_position - eye_position;
    look_to(eye_position, eye_direction, up_direction)
}

/// Builds a view matrix for an eye at `eye_position` looking along `eye_direction`.
///
/// `eye_direction` and `up_direction` must be non-zero and finite; `up_direction`
/// must not be parallel to `eye_direction`.
///
/// The forward basis lands in column 0, right in column 1 and up in
/// column 2; row 3 carries the translation.
pub fn look_to(eye_position: Vec3, eye_direction: Vec3, up_direction: Vec3) -> Mat4 {
    debug_check!(check::look_to(eye_direction, up_direction));

    let direction = eye_direction.extend(0.0);
    let up = up_direction.extend(0.0);

    let forward = direction.normalize3();
    let right = up.cross3(forward).normalize3();
    let true_up = forward.cross3(right);

    let neg_eye = -eye_position.extend(0.0);

    let forward_row = Vec4::select(Vec4::splat(forward.dot3(neg_eye)), forward, SELECT_XYZ);
    let right_row = Vec4::select(Vec4::splat(right.dot3(neg_eye)), right, SELECT_XYZ);
    let up_row = Vec4::select(Vec4::splat(true_up.dot3(neg_eye)), true_up, SELECT_XYZ);

    Mat4::from_basis_rows(forward_row, right_row, up_row, Vec4::new(0.0, 0.0, 0.0, 1.0))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use zup_core::Axis;

    #[test]
    fn test_look_to_canonical_is_identity() {
        let view = look_to(Vec3::ZERO, Vec3::FORWARD, Vec3::UP);
        assert_eq!(view, Mat4::IDENTITY);
    }

    #[test]
    fn test_look_to_axis_semantics() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = look_to(eye, Vec3::FORWARD, Vec3::UP);

        assert_eq!(view.transform_point(eye), Vec3::ZERO);

        // A point straight ahead only has depth
        let ahead = view.transform_point(eye + Vec3::FORWARD * 4.0);
        assert_abs_diff_eq!(ahead.x, 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ahead.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ahead.z, 0.0, epsilon = 1e-6);

        let right = view.transform_point(eye + Vec3::RIGHT);
        assert!(right.near_equal(Vec3::RIGHT, 1e-6));

        let up = view.transform_point(eye + Vec3::UP);
        assert!(up.near_equal(Vec3::UP, 1e-6));
    }

    #[test]
    fn test_look_to_turned_camera() {
        // Looking down +Y: world right becomes -X
        let view = look_to(Vec3::ZERO, Vec3::RIGHT, Vec3::UP);
        let p = view.transform_point(Vec3::new(0.0, 7.0, 0.0));
        assert!(p.near_equal(Vec3::new(7.0, 0.0, 0.0), 1e-6));
        let p = view.transform_point(Vec3::new(-1.0, 0.0, 0.0));
        assert!(p.near_equal(Vec3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_look_to_unnormalized_inputs() {
        let a = look_to(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 9.0));
        assert!(a.near_equal(&Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_look_to_columns_hold_basis() {
        let direction = Vec3::new(1.0, 1.0, -0.5);
        let view = look_to(Vec3::new(2.0, 0.0, 1.0), direction, Vec3::UP);
        let bases = view.transpose();
        let forward = bases.basis_row(Axis::Forward).truncate();
        assert!(forward.near_equal(direction.normalize(), 1e-6));
        // Right stays horizontal for an upright camera
        assert_abs_diff_eq!(bases.right_row().z(), 0.0, epsilon = 1e-6);
        assert!(bases.up_row().z() > 0.0);
    }

    #[test]
    fn test_look_at_delegates_to_look_to() {
        let eye = Vec3::new(-3.0, 4.0, 1.5);
        let focus = Vec3::new(2.0, -1.0, 0.0);
        assert_eq!(
            look_at(eye, focus, Vec3::UP),
            look_to(eye, focus - eye, Vec3::UP)
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_look_to_zero_direction_panics_in_debug() {
        let _ = look_to(Vec3::ZERO, Vec3::ZERO, Vec3::UP);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "parallel")]
    fn test_look_to_vertical_direction_panics_in_debug() {
        let _ = look_to(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0), Vec3::UP);
    }
}
