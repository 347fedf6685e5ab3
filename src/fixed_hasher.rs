//! Deterministic hashing of hull vertices.

use core::hash::BuildHasher;
use foldhash::fast::{FixedState, FoldHasher};
use glam::DVec2;
use hashbrown::HashSet;

/// Fixed seed, so that hashing does not depend on the process.
const FIXED_HASHER: FixedState =
    FixedState::with_seed(0b1001010111101110000001001100010000000011001001101011001001111000);

/// Deterministic hasher based upon a random but fixed state.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHasher;
impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASHER.build_hasher()
    }
}

/// A set of points compared by exact value.
pub type PointHashSet = HashSet<PointKey, FixedHasher>;

/// The bit pattern of a point, used as its identity in a [`PointHashSet`].
///
/// Two finite points have equal keys exactly when they are equal,
/// provided `-0.0` has been normalized to `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey([u64; 2]);

impl From<DVec2> for PointKey {
    #[inline]
    fn from(point: DVec2) -> Self {
        Self([point.x.to_bits(), point.y.to_bits()])
    }
}

/// Removes repeated points from `points`, keeping the first occurrence of each.
pub fn dedup_points(points: &mut Vec<DVec2>) {
    let mut seen = PointHashSet::with_capacity_and_hasher(points.len(), FixedHasher);
    points.retain(|point| seen.insert(PointKey::from(*point)));
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    #[test]
    fn keeps_first_occurrence() {
        let mut points = vec![
            dvec2(1.0, 1.0),
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(2.0, 0.0),
            dvec2(0.0, 0.0),
        ];
        dedup_points(&mut points);
        assert_eq!(
            points,
            vec![dvec2(1.0, 1.0), dvec2(0.0, 0.0), dvec2(2.0, 0.0)]
        );
    }
}
