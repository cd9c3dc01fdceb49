//! The Z-up axis convention.
//!
//! [`Axis`] is the single place that maps a semantic direction to a lane or
//! row index. Matrix builders ask an [`Axis`] for its index instead of
//! hard-coding `0`, `1` or `2`.
//!
//! | Axis | Index | Rotation |
//! |------|-------|----------|
//! | [`Axis::Forward`] | 0 (X) | roll |
//! | [`Axis::Right`] | 1 (Y) | pitch |
//! | [`Axis::Up`] | 2 (Z) | yaw |

use std::fmt;

/// A semantic axis of the Z-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Camera depth / roll axis (X).
    Forward,
    /// Pitch axis (Y).
    Right,
    /// Yaw axis (Z).
    Up,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::Forward, Axis::Right, Axis::Up];

    /// Lane / row index of this axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zup_core::Axis;
    ///
    /// assert_eq!(Axis::Forward.index(), 0);
    /// assert_eq!(Axis::Up.index(), 2);
    /// ```
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::Forward => 0,
            Axis::Right => 1,
            Axis::Up => 2,
        }
    }

    /// Unit vector pointing along this axis.
    #[inline]
    pub const fn unit(self) -> [f32; 3] {
        match self {
            Axis::Forward => [1.0, 0.0, 0.0],
            Axis::Right => [0.0, 1.0, 0.0],
            Axis::Up => [0.0, 0.0, 1.0],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Forward => "forward",
            Axis::Right => "right",
            Axis::Up => "up",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices_follow_all_order() {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_axis_units_are_distinct_basis() {
        for axis in Axis::ALL {
            let unit = axis.unit();
            assert_eq!(unit[axis.index()], 1.0);
            assert_eq!(unit.iter().sum::<f32>(), 1.0);
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Forward.to_string(), "forward");
        assert_eq!(Axis::Up.to_string(), "up");
    }
}
