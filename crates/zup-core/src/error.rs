//! Error types for precondition validation.
//!
//! The matrix builders in `zup-math` never return errors: invalid input
//! trips a debug assertion or propagates as NaN/Inf. Callers that want to
//! reject bad input up front run the `zup_math::check` helpers, which report
//! failures through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use zup_core::{Error, Result};
//!
//! fn depth_range(near: f32, far: f32) -> Result<()> {
//!     if near <= 0.0 || far <= 0.0 {
//!         return Err(Error::NonPositiveDepth { near, far });
//!     }
//!     Ok(())
//! }
//!
//! assert!(depth_range(0.1, 100.0).is_ok());
//! assert!(depth_range(0.0, 100.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations for view, projection and rotation builders.
///
/// # Categories
///
/// - **Vector errors**: [`ZeroVector`](Error::ZeroVector), [`InfiniteVector`](Error::InfiniteVector),
///   [`ParallelUp`](Error::ParallelUp), [`DegenerateEye`](Error::DegenerateEye)
/// - **Range errors**: [`NearlyEqual`](Error::NearlyEqual), [`NonPositiveDepth`](Error::NonPositiveDepth)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A direction vector has zero length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zup_core::Error;
    ///
    /// let err = Error::ZeroVector { name: "up" };
    /// assert_eq!(err.to_string(), "up vector must be non-zero");
    /// ```
    #[error("{name} vector must be non-zero")]
    ZeroVector {
        /// Parameter name
        name: &'static str,
    },

    /// A direction vector has an infinite component.
    #[error("{name} vector must be finite, got {value:?}")]
    InfiniteVector {
        /// Parameter name
        name: &'static str,
        /// Offending vector
        value: [f32; 3],
    },

    /// Up vector is parallel to the viewing direction, so no right axis exists.
    #[error("up {up:?} is parallel to eye direction {direction:?}")]
    ParallelUp {
        /// Viewing direction
        direction: [f32; 3],
        /// Up direction
        up: [f32; 3],
    },

    /// Eye and focus positions coincide, so no view direction exists.
    #[error("eye and focus positions coincide at {position:?}")]
    DegenerateEye {
        /// Shared position
        position: [f32; 3],
    },

    /// Two values that must differ are within tolerance of each other.
    ///
    /// Covers zero-sized view volumes (`left == right`, `near == far`) and
    /// zero field of view or aspect ratio.
    #[error("{what}: {a} and {b} are within {tolerance} of each other")]
    NearlyEqual {
        /// Description of the compared quantities
        what: &'static str,
        /// First value
        a: f32,
        /// Second value
        b: f32,
        /// Tolerance used for the comparison
        tolerance: f32,
    },

    /// Perspective projection needs both clip planes in front of the eye.
    #[error("near ({near}) and far ({far}) planes must both be positive")]
    NonPositiveDepth {
        /// Near plane distance
        near: f32,
        /// Far plane distance
        far: f32,
    },
}

impl Error {
    /// Shorthand for [`Error::NearlyEqual`].
    #[inline]
    pub fn nearly_equal(what: &'static str, a: f32, b: f32, tolerance: f32) -> Self {
        Self::NearlyEqual {
            what,
            a,
            b,
            tolerance,
        }
    }
}
