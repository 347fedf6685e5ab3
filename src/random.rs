//! Random point sets with integer coordinates.
//!
//! Requires the `rand` feature. Pass a seeded RNG (e.g. `StdRng::seed_from_u64`)
//! for reproducible sets.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{error::HullError, point_set::PointSet};

/// The number of points drawn by [`random_point_set_default`].
pub const DEFAULT_POINT_COUNT: usize = 20;

/// The coordinate range used by [`random_point_set_default`].
pub const DEFAULT_RANGE: RangeInclusive<i32> = 0..=100;

/// Draws `count` points with coordinates uniformly distributed over the integers in `range`.
///
/// Equal points may be drawn more than once; they are all kept.
///
/// # Errors
///
/// Returns [`HullError::EmptyRange`] if `range` is empty and `count > 0`.
///
/// # Example
///
/// ```
/// use quickhull2d::random::random_point_set;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let set = random_point_set(&mut rng, 50, -10..=10).unwrap();
///
/// assert_eq!(set.len(), 50);
/// assert!(set.iter().all(|p| (-10.0..=10.0).contains(&p.x) && (-10.0..=10.0).contains(&p.y)));
/// ```
pub fn random_point_set<R: Rng>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<i32>,
) -> Result<PointSet, HullError> {
    if count > 0 && range.is_empty() {
        return Err(HullError::EmptyRange {
            start: *range.start(),
            end: *range.end(),
        });
    }
    let mut set = PointSet::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen_range(range.clone());
        let y = rng.gen_range(range.clone());
        set.insert(f64::from(x), f64::from(y))?;
    }
    Ok(set)
}

/// Draws [`DEFAULT_POINT_COUNT`] points with integer coordinates in [`DEFAULT_RANGE`].
pub fn random_point_set_default<R: Rng>(rng: &mut R) -> PointSet {
    let mut set = PointSet::with_capacity(DEFAULT_POINT_COUNT);
    for _ in 0..DEFAULT_POINT_COUNT {
        let x = rng.gen_range(DEFAULT_RANGE);
        let y = rng.gen_range(DEFAULT_RANGE);
        // Small integers always convert to finite coordinates.
        if let Err(err) = set.insert(f64::from(x), f64::from(y)) {
            log::warn!("Skipping random point ({x}, {y}): {err}");
        }
    }
    set
}
