mod find_hull;
mod validation;

pub use find_hull::{find_hull, find_hull_with_config};
pub use validation::{is_convex, validate_hull, HullValidationError};

use glam::DVec2;

use crate::{
    config::HullConfig,
    error::HullError,
    fixed_hasher::dedup_points,
    orient::{lexicographic_cmp, orient2d},
    point_set::PointSet,
};

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// This can be thought of as a shrink wrapping of a 2D object.
///
/// The hull is computed with QuickHull: the set is split by the line through its
/// leftmost and rightmost points, and the hull points above and below that line are
/// found recursively. The resulting vertices are sorted by their angle around the
/// centroid of the input, which lists them in counterclockwise order.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull2d::{ConvexHull2d, PointSet};
/// use glam::dvec2;
///
/// let mut set = PointSet::new();
/// let coords = [
///     (1.0, 3.0),
///     (1.0, 5.0),
///     (2.0, 4.0),
///     (2.0, 1.0),
///     (3.0, 2.0),
///     (4.0, 4.0),
///     (5.0, 1.0),
/// ];
/// for (x, y) in coords {
///     set.insert(x, y).unwrap();
/// }
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::try_from_point_set(&set, &Default::default()).unwrap();
///
/// // Get the points of the convex hull in counterclockwise order.
/// assert_eq!(
///     hull.points(),
///     vec![
///         dvec2(2.0, 1.0),
///         dvec2(5.0, 1.0),
///         dvec2(4.0, 4.0),
///         dvec2(1.0, 5.0),
///         dvec2(1.0, 3.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull2d {
    points: Vec<DVec2>,
}

impl ConvexHull2d {
    /// Computes a [`ConvexHull2d`] for the given point set.
    ///
    /// Degenerate input does not fail: if all points are collinear, the hull consists of the
    /// two extreme points, and if all points are equal, it consists of that single point.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InsufficientPoints`] if the set has fewer than 2 points.
    pub fn try_from_point_set(set: &PointSet, config: &HullConfig) -> Result<Self, HullError> {
        if set.len() < 2 {
            return Err(HullError::InsufficientPoints { found: set.len() });
        }

        let (leftmost, rightmost) = set.extremes()?;
        let centroid = set.centroid()?;

        // The extremes are the first and last points and lie on the baseline, so they are
        // not classified. Points on the baseline itself belong to neither half-plane.
        let inner = &set.points()[1..set.len() - 1];
        let mut top: Vec<DVec2> = inner
            .iter()
            .copied()
            .filter(|point| orient2d(leftmost, rightmost, *point) > 0.0)
            .collect();
        let mut bottom: Vec<DVec2> = inner
            .iter()
            .copied()
            .filter(|point| orient2d(rightmost, leftmost, *point) > 0.0)
            .collect();

        log::debug!(
            "Hull of {} points: {} above and {} below {leftmost} -> {rightmost}",
            set.len(),
            top.len(),
            bottom.len()
        );

        let top_hull = find_hull::hull_set(leftmost, rightmost, &mut top, config);
        let bottom_hull = find_hull::hull_set(rightmost, leftmost, &mut bottom, config);

        let mut points = Vec::with_capacity(top_hull.len() + bottom_hull.len() + 2);
        points.push(leftmost);
        points.extend(top_hull);
        points.extend(bottom_hull);
        points.push(rightmost);
        dedup_points(&mut points);

        sort_by_angle(&mut points, centroid);

        log::debug!("Found {} hull points", points.len());

        Ok(Self { points })
    }

    /// Computes a [`ConvexHull2d`] for the given points with the default [`HullConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidCoordinate`] if a point is not finite, and
    /// [`HullError::InsufficientPoints`] if there are fewer than 2 points.
    #[inline]
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, HullError> {
        let set = PointSet::try_from_points(points)?;
        Self::try_from_point_set(&set, &HullConfig::default())
    }

    /// Returns the points of the convex hull in counterclockwise order.
    ///
    /// This consumes the convex hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<DVec2> {
        self.points
    }

    /// Returns a reference to the points of the convex hull in counterclockwise order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the points of the convex hull in counterclockwise order,
    /// with the first point repeated at the end to close the polyline.
    pub fn closed_polyline(&self) -> Vec<DVec2> {
        let mut polyline = Vec::with_capacity(self.points.len() + 1);
        polyline.extend_from_slice(&self.points);
        if let Some(first) = self.points.first() {
            polyline.push(*first);
        }
        polyline
    }

    /// Returns the number of hull points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the hull has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Computes the area of the convex hull.
    ///
    /// The area of a degenerate hull with fewer than 3 points is zero.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice_area: f64 = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| a.perp_dot(*b))
            .sum();
        0.5 * twice_area
    }

    /// Returns `true` if `point` lies inside the convex hull or on its boundary.
    pub fn contains_point(&self, point: DVec2) -> bool {
        match self.points.as_slice() {
            [] => false,
            [only] => *only == point,
            [a, b] => {
                orient2d(*a, *b, point) == 0.0
                    && point.cmpge(a.min(*b)).all()
                    && point.cmple(a.max(*b)).all()
            }
            points => points
                .iter()
                .zip(points.iter().cycle().skip(1))
                .all(|(a, b)| orient2d(*a, *b, point) >= 0.0),
        }
    }
}

/// Computes the convex hull of `set` with the default [`HullConfig`].
///
/// See [`ConvexHull2d::try_from_point_set`].
#[inline]
pub fn compute_hull(set: &PointSet) -> Result<ConvexHull2d, HullError> {
    ConvexHull2d::try_from_point_set(set, &HullConfig::default())
}

/// Sorts `points` counterclockwise by their angle around `center`,
/// starting from the negative `x` axis.
///
/// Points at the same angle are ordered lexicographically.
fn sort_by_angle(points: &mut [DVec2], center: DVec2) {
    points.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(a.x - center.x);
        let angle_b = (b.y - center.y).atan2(b.x - center.x);
        angle_a
            .total_cmp(&angle_b)
            .then_with(|| lexicographic_cmp(a, b))
    });
}
