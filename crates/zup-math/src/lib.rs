//! # zup-math
//!
//! View, projection and rotation matrices for a Z-up, X-forward world.
//!
//! This crate provides:
//!
//! - [`Vec3`], [`Vec4`], [`Quat`], [`Mat4`] - Value types the builders work on
//! - [`look_at`], [`look_to`] - View matrices
//! - [`perspective`], [`perspective_fov`], [`perspective_off_center`] - Perspective projections
//! - [`orthographic`], [`orthographic_off_center`] - Orthographic projections
//! - [`rotation_roll_pitch_yaw`], [`quat_rotation_roll_pitch_yaw`] - Euler rotations
//! - [`check`] - Fallible precondition checks for untrusted input
//!
//! # Design
//!
//! Axes are labeled forward (X), right (Y), up (Z); see [`Axis`].
//! Matrices are stored as four rows and transform **row vectors**:
//!
//! ```text
//! v' = v * M = v.x * row0 + v.y * row1 + v.z * row2 + v.w * row3
//! ```
//!
//! so `a * b` applies `a` first. The memory layout matches a column-major
//! [`glam::Mat4`](::glam::Mat4) whose columns are these rows, and
//! [`Mat4::to_glam`] is a plain copy.
//!
//! The builders are pure and never fail. Preconditions are asserted in
//! debug builds only; see [`check`].
//!
//! # Usage
//!
//! ```rust
//! use zup_math::{look_at, perspective_fov, Vec3};
//!
//! let view = look_at(Vec3::new(-10.0, 0.0, 2.0), Vec3::ZERO, Vec3::UP);
//! let proj = perspective_fov(1.0, 16.0 / 9.0, 0.1, 1000.0);
//! let view_proj = view * proj;
//!
//! let clip = view_proj.transform_point(Vec3::ZERO);
//! assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop and reference math
//! - [`wide`] - Four-lane SIMD storage for [`Vec4`]
//! - [`zup-core`] - Axis convention and error types
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod projection;
mod quat;
mod rotation;
mod vec3;
mod vec4;
mod view;
pub mod check;

pub use mat4::*;
pub use projection::*;
pub use quat::*;
pub use rotation::*;
pub use vec3::*;
pub use vec4::*;
pub use view::*;

pub use zup_core::Axis;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
