use thiserror::Error;

/// An error returned when building a [`PointSet`](crate::PointSet)
/// or computing a [`ConvexHull2d`](crate::ConvexHull2d).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HullError {
    /// The point set is empty, so it has no extremes or centroid.
    #[error("The point set is empty.")]
    EmptySet,
    /// A convex hull needs at least two points to be computed.
    #[error("At least 2 points are required to compute a convex hull, found {found}.")]
    InsufficientPoints {
        /// The number of points in the set.
        found: usize,
    },
    /// A random point set was requested from an empty coordinate range.
    #[error("The coordinate range {start}..={end} is empty.")]
    EmptyRange {
        /// The start of the range.
        start: i32,
        /// The inclusive end of the range.
        end: i32,
    },
    /// A coordinate is NaN or infinite.
    #[error("Invalid coordinate ({x}, {y}): coordinates must be finite.")]
    InvalidCoordinate {
        /// The `x` coordinate of the rejected point.
        x: f64,
        /// The `y` coordinate of the rejected point.
        y: f64,
    },
}
