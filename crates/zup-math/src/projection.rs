//! Perspective and orthographic projection matrices.
//!
//! Inputs are view-space points in the Z-up labeling (depth on axis 0,
//! right on axis 1, up on axis 2). Outputs are clip-space points laid out
//! the way rasterizers expect: `x` right, `y` up, `z` depth mapped to
//! `[0, 1]` between the near and far planes, and `w` the divisor.
//!
//! Because view-space depth is axis 0, the depth terms live in the forward
//! row (row 0), not row 2:
//!
//! ```text
//! perspective               orthographic
//! row0 | 0    0    r    1 | | 0    0    r    0 |   forward (depth)
//! row1 | sx   0    0    0 | | sx   0    0    0 |   right
//! row2 | 0    sy   0    0 | | 0    sy   0    0 |   up
//! row3 | 0    0   -r*n  0 | | 0    0   -r*n  1 |
//! ```
//!
//! `far_z < near_z` is accepted and yields a reversed-depth matrix.
//!
//! # Example
//!
//! ```rust
//! use zup_math::{perspective_fov, Vec3};
//!
//! let proj = perspective_fov(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
//! let on_near = proj.transform_point(Vec3::new(1.0, 0.0, 0.0));
//! assert!(on_near.z.abs() < 1e-6);
//! ```

use crate::check::{self, debug_check};
use crate::{Mat4, Vec4};

/// Perspective projection for a view volume `view_width` x `view_height`
/// at the near plane.
///
/// `near_z` and `far_z` must be positive and distinct; the extents must be non-zero.
pub fn perspective(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Mat4 {
    debug_check!(check::perspective(view_width, view_height, near_z, far_z));

    let two_near_z = near_z + near_z;
    let range = far_z / (far_z - near_z);

    Mat4::from_basis_rows(
        Vec4::new(0.0, 0.0, range, 1.0),
        Vec4::new(two_near_z / view_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, two_near_z / view_height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -range * near_z, 0.0),
    )
}

/// Perspective projection from a vertical field of view (radians) and a
/// width / height aspect ratio.
pub fn perspective_fov(fov_angle_y: f32, aspect_ratio: f32, near_z: f32, far_z: f32) -> Mat4 {
    debug_check!(check::perspective_fov(fov_angle_y, aspect_ratio, near_z, far_z));

    let (sin_fov, cos_fov) = (0.5 * fov_angle_y).sin_cos();
    let height = cos_fov / sin_fov;
    let width = height / aspect_ratio;
    let range = far_z / (far_z - near_z);

    Mat4::from_basis_rows(
        Vec4::new(0.0, 0.0, range, 1.0),
        Vec4::new(width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -range * near_z, 0.0),
    )
}

/// Perspective projection for an asymmetric view volume given by its
/// extents on the near plane.
pub fn perspective_off_center(
    view_left: f32,
    view_right: f32,
    view_bottom: f32,
    view_top: f32,
    near_z: f32,
    far_z: f32,
) -> Mat4 {
    debug_check!(check::perspective_off_center(
        view_left,
        view_right,
        view_bottom,
        view_top,
        near_z,
        far_z
    ));

    let two_near_z = near_z + near_z;
    let reciprocal_width = 1.0 / (view_right - view_left);
    let reciprocal_height = 1.0 / (view_top - view_bottom);
    let range = far_z / (far_z - near_z);

    // Off-center shear scales with depth, so it sits in the depth row
    Mat4::from_basis_rows(
        Vec4::new(
            -(view_left + view_right) * reciprocal_width,
            -(view_top + view_bottom) * reciprocal_height,
            range,
            1.0,
        ),
        Vec4::new(two_near_z * reciprocal_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, two_near_z * reciprocal_height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -range * near_z, 0.0),
    )
}

/// Orthographic projection for a `view_width` x `view_height` view volume.
///
/// Unlike the perspective builders, `near_z` may be zero or negative.
pub fn orthographic(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Mat4 {
    debug_check!(check::orthographic(view_width, view_height, near_z, far_z));

    let range = 1.0 / (far_z - near_z);

    Mat4::from_basis_rows(
        Vec4::new(0.0, 0.0, range, 0.0),
        Vec4::new(2.0 / view_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / view_height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -range * near_z, 1.0),
    )
}

/// Orthographic projection for an asymmetric view volume.
pub fn orthographic_off_center(
    view_left: f32,
    view_right: f32,
    view_bottom: f32,
    view_top: f32,
    near_z: f32,
    far_z: f32,
) -> Mat4 {
    debug_check!(check::orthographic_off_center(
        view_left,
        view_right,
        view_bottom,
        view_top,
        near_z,
        far_z
    ));

    let reciprocal_width = 1.0 / (view_right - view_left);
    let reciprocal_height = 1.0 / (view_top - view_bottom);
    let range = 1.0 / (far_z - near_z);

    let scale = Vec4::new(reciprocal_width, reciprocal_height, range, 1.0);
    let offset = scale
        * Vec4::new(
            -(view_left + view_right),
            -(view_top + view_bottom),
            -near_z,
            1.0,
        );

    Mat4::from_basis_rows(
        Vec4::new(0.0, 0.0, range, 0.0),
        Vec4::new(reciprocal_width + reciprocal_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, reciprocal_height + reciprocal_height, 0.0, 0.0),
        offset,
    )
}
