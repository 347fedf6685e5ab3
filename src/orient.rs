//! Orientation predicate and point ordering.

use std::cmp::Ordering;

use glam::DVec2;

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// The result is twice the signed area of the triangle, that is
/// `ax * by + cx * ay + bx * cy - cx * by - bx * ay - ax * cy`.
///
/// - `orientation > 0`: counterclockwise, `c` lies to the left of the directed line `a -> b`
/// - `orientation < 0`: clockwise, `c` lies to the right
/// - `orientation == 0`: collinear
///
/// The magnitude is proportional to the distance of `c` from the line through `a` and `b`,
/// so it can also be used to rank points by how far they are from that line.
///
/// The sign is exact as long as the intermediate products stay finite, which holds for
/// coordinates well below `1e150` in magnitude. For integer coordinates of moderate
/// magnitude, the value itself is exact too.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use quickhull2d::orient2d;
///
/// let a = dvec2(0.0, 0.0);
/// let b = dvec2(4.0, 0.0);
///
/// assert_eq!(orient2d(a, b, dvec2(1.0, 3.0)), 12.0);
/// assert_eq!(orient2d(a, b, dvec2(2.0, 0.0)), 0.0);
/// assert_eq!(orient2d(b, a, dvec2(1.0, 3.0)), -12.0);
/// ```
#[inline]
pub fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Returns `true` if the points `a`, `b`, `c` are oriented counterclockwise,
/// i.e. `c` lies strictly to the left of the directed line `a -> b`.
#[inline]
pub fn is_ccw(a: DVec2, b: DVec2, c: DVec2) -> bool {
    orient2d(a, b, c) > 0.0
}

/// The turn direction of three points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of `a -> b`.
    Clockwise,
    /// `a`, `b` and `c` lie on one line.
    Collinear,
}

impl Orientation {
    /// Classifies the triangle `a`, `b`, `c` by the sign of [`orient2d`].
    #[inline]
    pub fn of(a: DVec2, b: DVec2, c: DVec2) -> Self {
        let orientation = orient2d(a, b, c);
        if orientation > 0.0 {
            Self::CounterClockwise
        } else if orientation < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

/// Compares two 2D points first by `x`, then by `y`.
///
/// Uses a total order, so NaN coordinates do not panic, but they are
/// rejected before they ever reach a [`PointSet`](crate::PointSet).
#[inline]
pub fn lexicographic_cmp(a: &DVec2, b: &DVec2) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
