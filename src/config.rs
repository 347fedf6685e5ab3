/// How points that tie for the maximum distance from a baseline edge are treated.
///
/// Tied points lie on one hull edge parallel to the baseline. This is the only place
/// where collinear points are considered: a point lying on any other hull edge, such as
/// a point on the line through the leftmost and rightmost points or on the edge from a
/// baseline endpoint to an apex, is never a hull vertex under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Keep every point tied at the maximum distance from a baseline as a hull vertex.
    #[default]
    Retain,
    /// Keep only the two outermost points tied at the maximum distance from a baseline,
    /// so that every hull vertex is a strict corner.
    Discard,
}

/// Options for [`ConvexHull2d`](crate::ConvexHull2d) construction.
///
/// # Example
///
/// ```
/// use quickhull2d::{CollinearPolicy, HullConfig};
///
/// let config = HullConfig::default()
///     .with_collinear(CollinearPolicy::Discard)
///     .with_parallel_threshold(4096);
///
/// assert_eq!(config.collinear, CollinearPolicy::Discard);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullConfig {
    /// How points tied at the maximum distance from a baseline edge are treated.
    pub collinear: CollinearPolicy,
    /// The minimum number of points handed to the two recursive branches of a
    /// step for them to be evaluated in parallel.
    ///
    /// Only used with the `parallel` feature.
    pub parallel_threshold: usize,
}

impl HullConfig {
    /// The default value of [`parallel_threshold`](Self::parallel_threshold).
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

    /// Sets the [`CollinearPolicy`].
    #[inline]
    pub fn with_collinear(mut self, collinear: CollinearPolicy) -> Self {
        self.collinear = collinear;
        self
    }

    /// Sets the [`parallel_threshold`](Self::parallel_threshold).
    #[inline]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            collinear: CollinearPolicy::default(),
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
