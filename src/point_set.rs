use glam::DVec2;

use crate::{error::HullError, orient::lexicographic_cmp};

/// A planar point set kept sorted lexicographically by `(x, y)`.
///
/// This is the input of [`ConvexHull2d`](crate::ConvexHull2d) construction.
/// The first point is the leftmost point of the set and the last point is the
/// rightmost one, which makes extrema queries `O(1)`.
///
/// Duplicate points are accepted and kept. They do not affect the resulting hull,
/// but they do contribute to the [centroid](Self::centroid).
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use quickhull2d::PointSet;
///
/// let mut set = PointSet::new();
/// set.insert(2.0, 1.0).unwrap();
/// set.insert(1.0, 5.0).unwrap();
/// set.insert(1.0, 3.0).unwrap();
///
/// assert_eq!(set.points(), &[dvec2(1.0, 3.0), dvec2(1.0, 5.0), dvec2(2.0, 1.0)]);
/// assert_eq!(set.extremes(), Ok((dvec2(1.0, 3.0), dvec2(2.0, 1.0))));
///
/// assert!(set.insert(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<DVec2>,
}

impl PointSet {
    /// Creates an empty point set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty point set with space for at least `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Builds a point set from a slice of points.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidCoordinate`] for the first non-finite point.
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, HullError> {
        let mut set = Self::with_capacity(points.len());
        for point in points {
            set.points.push(validate(*point)?);
        }
        // A stable sort gives the same order as inserting one by one.
        set.points.sort_by(lexicographic_cmp);
        Ok(set)
    }

    /// Inserts the point `(x, y)`, keeping the set sorted.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidCoordinate`] if `x` or `y` is NaN or infinite.
    #[inline]
    pub fn insert(&mut self, x: f64, y: f64) -> Result<(), HullError> {
        self.insert_point(DVec2::new(x, y))
    }

    /// Inserts `point`, keeping the set sorted.
    ///
    /// The point is placed after any points equal to it.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InvalidCoordinate`] if a coordinate is NaN or infinite.
    pub fn insert_point(&mut self, point: DVec2) -> Result<(), HullError> {
        let point = validate(point)?;
        let index = self
            .points
            .partition_point(|p| lexicographic_cmp(p, &point).is_le());
        self.points.insert(index, point);
        Ok(())
    }

    /// Returns the leftmost and rightmost points of the set.
    ///
    /// Ties in `x` are broken by `y`, so the leftmost point is the bottom-left one
    /// and the rightmost point is the top-right one. For a set with a single point,
    /// both are the same point.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::EmptySet`] if the set is empty.
    #[inline]
    pub fn extremes(&self) -> Result<(DVec2, DVec2), HullError> {
        match (self.points.first(), self.points.last()) {
            (Some(leftmost), Some(rightmost)) => Ok((*leftmost, *rightmost)),
            _ => Err(HullError::EmptySet),
        }
    }

    /// Returns the arithmetic mean of all points in the set, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::EmptySet`] if the set is empty.
    pub fn centroid(&self) -> Result<DVec2, HullError> {
        if self.points.is_empty() {
            return Err(HullError::EmptySet);
        }
        // Scale before summing, so that large coordinates do not overflow.
        let n = self.points.len() as f64;
        Ok(self.points.iter().fold(DVec2::ZERO, |sum, p| sum + *p / n))
    }

    /// Returns the points in lexicographic order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns an iterator over the points in lexicographic order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DVec2> {
        self.points.iter()
    }

    /// Returns the number of points, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl TryFrom<&[DVec2]> for PointSet {
    type Error = HullError;

    #[inline]
    fn try_from(points: &[DVec2]) -> Result<Self, Self::Error> {
        Self::try_from_points(points)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a DVec2;
    type IntoIter = std::slice::Iter<'a, DVec2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Rejects non-finite points and maps `-0.0` to `0.0`,
/// so that equal points also have equal bit patterns.
#[inline]
fn validate(point: DVec2) -> Result<DVec2, HullError> {
    if !point.is_finite() {
        return Err(HullError::InvalidCoordinate {
            x: point.x,
            y: point.y,
        });
    }
    Ok(point + DVec2::ZERO)
}
