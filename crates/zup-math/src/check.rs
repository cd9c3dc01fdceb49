//! Precondition checks for the view and projection builders.
//!
//! Every builder asserts these in debug builds. In release builds the
//! builders skip them and bad input flows through IEEE-754 arithmetic, so
//! callers that take untrusted input run the matching check first:
//!
//! ```rust
//! use zup_math::{check, perspective_fov};
//!
//! let (fov, aspect, near, far) = (1.0, 16.0 / 9.0, 0.1, 1000.0);
//! check::perspective_fov(fov, aspect, near, far)?;
//! let proj = perspective_fov(fov, aspect, near, far);
//! # Ok::<(), zup_core::Error>(())
//! ```
//!
//! Ordering of `near` and `far` is never checked: `far < near` gives a
//! reversed-depth matrix and is accepted.

use zup_core::{Error, Result};

use crate::Vec3;

/// Tolerance for "must differ" comparisons of extents and clip planes.
pub const NEAR_EQUAL_EPSILON: f32 = 0.00001;

/// Tolerance for a zero field of view.
pub const FOV_EPSILON: f32 = 0.00001 * 2.0;

/// Returns true if `a` and `b` are within `epsilon` of each other.
///
/// # Example
///
/// ```rust
/// use zup_math::check::scalar_near_equal;
///
/// assert!(scalar_near_equal(1.0, 1.000001, 1e-5));
/// assert!(!scalar_near_equal(1.0, 1.1, 1e-5));
/// ```
#[inline]
pub fn scalar_near_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

fn differ(what: &'static str, a: f32, b: f32, tolerance: f32) -> Result<()> {
    if scalar_near_equal(a, b, tolerance) {
        return Err(Error::nearly_equal(what, a, b, tolerance));
    }
    Ok(())
}

fn direction(name: &'static str, v: Vec3) -> Result<()> {
    if v.is_zero() {
        return Err(Error::ZeroVector { name });
    }
    if v.is_infinite() {
        return Err(Error::InfiniteVector {
            name,
            value: v.to_array(),
        });
    }
    Ok(())
}

fn positive_depth(near_z: f32, far_z: f32) -> Result<()> {
    if near_z > 0.0 && far_z > 0.0 {
        Ok(())
    } else {
        Err(Error::NonPositiveDepth {
            near: near_z,
            far: far_z,
        })
    }
}

/// Checks [`look_to`](crate::look_to) input.
///
/// Rejects an `up_direction` within [`NEAR_EQUAL_EPSILON`] (as the sine of
/// the angle between them) of parallel to `eye_direction`.
pub fn look_to(eye_direction: Vec3, up_direction: Vec3) -> Result<()> {
    direction("eye direction", eye_direction)?;
    direction("up", up_direction)?;

    let sin_angle = up_direction
        .normalize()
        .cross(eye_direction.normalize())
        .length();
    if sin_angle <= NEAR_EQUAL_EPSILON {
        return Err(Error::ParallelUp {
            direction: eye_direction.to_array(),
            up: up_direction.to_array(),
        });
    }
    Ok(())
}

/// Checks [`look_at`](crate::look_at) input.
pub fn look_at(eye_position: Vec3, focus_position: Vec3, up_direction: Vec3) -> Result<()> {
    if eye_position == focus_position {
        return Err(Error::DegenerateEye {
            position: eye_position.to_array(),
        });
    }
    look_to(focus_position - eye_position, up_direction)
}

/// Checks [`perspective`](crate::perspective) input.
pub fn perspective(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Result<()> {
    positive_depth(near_z, far_z)?;
    differ("view width", view_width, 0.0, NEAR_EQUAL_EPSILON)?;
    differ("view height", view_height, 0.0, NEAR_EQUAL_EPSILON)?;
    differ("far/near", far_z, near_z, NEAR_EQUAL_EPSILON)
}

/// Checks [`perspective_fov`](crate::perspective_fov) input.
pub fn perspective_fov(fov_angle_y: f32, aspect_ratio: f32, near_z: f32, far_z: f32) -> Result<()> {
    positive_depth(near_z, far_z)?;
    differ("field of view", fov_angle_y, 0.0, FOV_EPSILON)?;
    differ("aspect ratio", aspect_ratio, 0.0, NEAR_EQUAL_EPSILON)?;
    differ("far/near", far_z, near_z, NEAR_EQUAL_EPSILON)
}

/// Checks [`perspective_off_center`](crate::perspective_off_center) input.
pub fn perspective_off_center(
    view_left: f32,
    view_right: f32,
    view_bottom: f32,
    view_top: f32,
    near_z: f32,
    far_z: f32,
) -> Result<()> {
    positive_depth(near_z, far_z)?;
    off_center_extents(view_left, view_right, view_bottom, view_top, near_z, far_z)
}

/// Checks [`orthographic`](crate::orthographic) input.
pub fn orthographic(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Result<()> {
    differ("view width", view_width, 0.0, NEAR_EQUAL_EPSILON)?;
    differ("view height", view_height, 0.0, NEAR_EQUAL_EPSILON)?;
    differ("far/near", far_z, near_z, NEAR_EQUAL_EPSILON)
}

/// Checks [`orthographic_off_center`](crate::orthographic_off_center) input.
pub fn orthographic_off_center(
    view_left: f32,
    view_right: f32,
    view_bottom: f32,
    view_top: f32,
    near_z: f32,
    far_z: f32,
) -> Result<()> {
    off_center_extents(view_left, view_right, view_bottom, view_top, near_z, far_z)
}

fn off_center_extents(
    view_left: f32,
    view_right: f32,
    view_bottom: f32,
    view_top: f32,
    near_z: f32,
    far_z: f32,
) -> Result<()> {
    differ("right/left", view_right, view_left, NEAR_EQUAL_EPSILON)?;
    differ("top/bottom", view_top, view_bottom, NEAR_EQUAL_EPSILON)?;
    differ("far/near", far_z, near_z, NEAR_EQUAL_EPSILON)
}

/// Panics with the check's error in debug builds; compiles to nothing in release.
macro_rules! debug_check {
    ($check:expr) => {
        if cfg!(debug_assertions) {
            if let Err(err) = $check {
                panic!("precondition violated: {err}");
            }
        }
    };
}

pub(crate) use debug_check;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_near_equal_inclusive() {
        assert!(scalar_near_equal(0.0, NEAR_EQUAL_EPSILON, NEAR_EQUAL_EPSILON));
        assert!(!scalar_near_equal(0.0, 2.0 * NEAR_EQUAL_EPSILON, NEAR_EQUAL_EPSILON));
    }

    #[test]
    fn test_look_to_rejects_degenerate_vectors() {
        assert_eq!(
            look_to(Vec3::ZERO, Vec3::UP),
            Err(Error::ZeroVector {
                name: "eye direction"
            })
        );
        assert_eq!(
            look_to(Vec3::FORWARD, Vec3::ZERO),
            Err(Error::ZeroVector { name: "up" })
        );
        assert!(matches!(
            look_to(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::UP),
            Err(Error::InfiniteVector { .. })
        ));
        assert!(look_to(Vec3::FORWARD, Vec3::UP).is_ok());
    }

    #[test]
    fn test_look_to_rejects_parallel_up() {
        assert!(matches!(
            look_to(Vec3::new(0.0, 0.0, 5.0), Vec3::UP),
            Err(Error::ParallelUp { .. })
        ));
        // Anti-parallel is just as degenerate
        assert!(matches!(
            look_to(Vec3::new(0.0, 0.0, -2.0), Vec3::UP),
            Err(Error::ParallelUp { .. })
        ));
        assert!(matches!(
            look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::UP),
            Err(Error::ParallelUp { .. })
        ));
        // Steep but not vertical is fine
        assert!(look_to(Vec3::new(0.01, 0.0, 1.0), Vec3::UP).is_ok());
    }

    #[test]
    fn test_look_at_rejects_coincident_eye() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            look_at(p, p, Vec3::UP),
            Err(Error::DegenerateEye { .. })
        ));
        assert!(look_at(p, Vec3::ZERO, Vec3::UP).is_ok());
    }

    #[test]
    fn test_perspective_checks() {
        assert!(perspective(2.0, 1.0, 0.1, 100.0).is_ok());
        assert!(matches!(
            perspective(2.0, 1.0, 0.0, 100.0),
            Err(Error::NonPositiveDepth { .. })
        ));
        assert!(matches!(
            perspective(0.0, 1.0, 0.1, 100.0),
            Err(Error::NearlyEqual { what: "view width", .. })
        ));
        assert!(matches!(
            perspective(2.0, 1.0, 1.0, 1.000001),
            Err(Error::NearlyEqual { what: "far/near", .. })
        ));
    }

    #[test]
    fn test_perspective_fov_checks() {
        assert!(perspective_fov(1.0, 1.5, 0.1, 100.0).is_ok());
        // 1.5e-5 passes the generic tolerance but not the field-of-view one
        assert!(matches!(
            perspective_fov(1.5e-5, 1.5, 0.1, 100.0),
            Err(Error::NearlyEqual { what: "field of view", .. })
        ));
        assert!(matches!(
            perspective_fov(1.0, 0.0, 0.1, 100.0),
            Err(Error::NearlyEqual { what: "aspect ratio", .. })
        ));
    }

    #[test]
    fn test_off_center_checks() {
        assert!(perspective_off_center(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0).is_ok());
        assert!(matches!(
            perspective_off_center(1.0, 1.0, -1.0, 1.0, 0.1, 10.0),
            Err(Error::NearlyEqual { what: "right/left", .. })
        ));
        assert!(matches!(
            orthographic_off_center(-1.0, 1.0, 2.0, 2.0, 0.1, 10.0),
            Err(Error::NearlyEqual { what: "top/bottom", .. })
        ));
        // Orthographic accepts a plane behind the eye
        assert!(orthographic_off_center(-1.0, 1.0, -1.0, 1.0, -5.0, 5.0).is_ok());
    }

    #[test]
    fn test_reversed_depth_is_accepted() {
        assert!(perspective(2.0, 1.0, 100.0, 0.1).is_ok());
        assert!(perspective_fov(1.0, 1.0, 100.0, 0.1).is_ok());
        assert!(orthographic(2.0, 1.0, 100.0, 0.1).is_ok());
    }
}
