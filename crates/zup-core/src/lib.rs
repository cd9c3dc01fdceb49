//! # zup-core
//!
//! Core types shared by the zup-rs crates.
//!
//! - [`Axis`] - The Z-up axis convention (forward, right, up)
//! - [`Error`], [`Result`] - Precondition failures reported by validation helpers
//!
//! ## Convention
//!
//! Every crate in this workspace uses one fixed world labeling:
//!
//! ```text
//!        Z (up, yaw)
//!        |
//!        |
//!        +------ Y (right, pitch)
//!       /
//!      X (forward, roll)
//! ```
//!
//! View space uses the same labeling: camera depth runs along axis 0.
//!
//! ## Crate Structure
//!
//! ```text
//! zup-core (this crate)
//!    ^
//!    |
//!    +-- zup-math (vectors, matrices, view/projection/rotation builders)
//!    +-- zup-cli (command-line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod axis;
pub mod error;

pub use axis::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use zup_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::error::{Error, Result};
}
