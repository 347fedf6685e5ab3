//! The recursive step of QuickHull.

use glam::DVec2;

use crate::{
    config::{CollinearPolicy, HullConfig},
    orient::{is_ccw, orient2d},
};

/// Finds the convex hull vertices among `candidates` that lie outside the baseline edge
/// `baseline_start -> baseline_end`, using the default [`HullConfig`].
///
/// Every candidate is expected to lie strictly to the left of the baseline.
/// The returned points are not in any geometric order. See [`find_hull_with_config`].
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use quickhull2d::find_hull;
///
/// let candidates = [dvec2(1.0, 5.0), dvec2(2.0, 4.0), dvec2(4.0, 4.0)];
/// let hull = find_hull(&candidates, dvec2(1.0, 3.0), dvec2(5.0, 1.0));
///
/// assert_eq!(hull, vec![dvec2(4.0, 4.0), dvec2(1.0, 5.0)]);
/// ```
#[inline]
pub fn find_hull(candidates: &[DVec2], baseline_start: DVec2, baseline_end: DVec2) -> Vec<DVec2> {
    find_hull_with_config(
        candidates,
        baseline_start,
        baseline_end,
        &HullConfig::default(),
    )
}

/// Finds the convex hull vertices among `candidates` that lie outside the baseline edge
/// `baseline_start -> baseline_end`.
///
/// The point furthest from the baseline (the apex) is on the hull. If several points share
/// the maximum distance, they all lie on one hull edge parallel to the baseline, and are
/// kept or reduced to the two endpoints of that edge depending on [`HullConfig::collinear`].
/// The remaining candidates are split into those strictly outside `baseline_start -> apex`
/// and those strictly outside `far_apex -> baseline_end`, where the far apex is the tied
/// point furthest along the baseline, and the search recurses on both. Everything else
/// lies inside the hull and is dropped.
///
/// The result lists the apex points first, followed by the hull points of the left and
/// right sub-problems. `candidates` is not modified.
pub fn find_hull_with_config(
    candidates: &[DVec2],
    baseline_start: DVec2,
    baseline_end: DVec2,
    config: &HullConfig,
) -> Vec<DVec2> {
    let mut points = candidates.to_vec();
    hull_set(baseline_start, baseline_end, &mut points, config)
}

// Recursively computes the hull points of `points` outside the edge `a -> b`.
// `points` is used as scratch space and is reordered.
pub(crate) fn hull_set(
    a: DVec2,
    b: DVec2,
    points: &mut [DVec2],
    config: &HullConfig,
) -> Vec<DVec2> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    // Find the maximum distance from the line segment `ab`.
    let max_orientation = points
        .iter()
        .map(|point| orient2d(a, b, *point))
        .fold(f64::NEG_INFINITY, f64::max);

    // Move every point at the maximum distance to the front of the slice.
    let (furthest, rest) =
        partition_slice(points, |point| orient2d(a, b, *point) == max_orientation);

    let Some(&first) = furthest.first() else {
        log::warn!(
            "No furthest point among {} candidates for the edge {a} -> {b}, skipping them",
            rest.len()
        );
        return Vec::new();
    };

    // The tied points lie on a line parallel to `ab`. Pick the ones nearest to `a`
    // and nearest to `b` along that line. Equal projections only occur for equal points.
    let ab = b - a;
    let (near, far) = furthest.iter().skip(1).fold((first, first), |(near, far), point| {
        let projection = ab.dot(*point);
        let near = if projection < ab.dot(near) { *point } else { near };
        let far = if projection > ab.dot(far) { *point } else { far };
        (near, far)
    });

    let mut hull = match config.collinear {
        CollinearPolicy::Retain => furthest.to_vec(),
        CollinearPolicy::Discard if near == far => vec![near],
        CollinearPolicy::Discard => vec![near, far],
    };

    log::trace!(
        "Edge {a} -> {b}: {} furthest point(s), {} remaining",
        furthest.len(),
        rest.len()
    );

    // Points outside `a -> near` are classified first, so the two sets are disjoint.
    let (left, rest) = partition_slice(rest, |point| is_ccw(a, near, *point));
    let (right, _) = partition_slice(rest, |point| is_ccw(far, b, *point));

    let (left_hull, right_hull) = recurse(a, near, left, far, b, right, config);
    hull.extend(left_hull);
    hull.extend(right_hull);
    hull
}

/// Evaluates the two sub-problems of a recursion step.
#[cfg(not(feature = "parallel"))]
#[inline]
fn recurse(
    a: DVec2,
    near: DVec2,
    left: &mut [DVec2],
    far: DVec2,
    b: DVec2,
    right: &mut [DVec2],
    config: &HullConfig,
) -> (Vec<DVec2>, Vec<DVec2>) {
    (
        hull_set(a, near, left, config),
        hull_set(far, b, right, config),
    )
}

/// Evaluates the two sub-problems of a recursion step,
/// in parallel if they are large enough.
#[cfg(feature = "parallel")]
#[inline]
fn recurse(
    a: DVec2,
    near: DVec2,
    left: &mut [DVec2],
    far: DVec2,
    b: DVec2,
    right: &mut [DVec2],
    config: &HullConfig,
) -> (Vec<DVec2>, Vec<DVec2>) {
    if left.len() + right.len() >= config.parallel_threshold {
        rayon::join(
            || hull_set(a, near, left, config),
            || hull_set(far, b, right, config),
        )
    } else {
        (
            hull_set(a, near, left, config),
            hull_set(far, b, right, config),
        )
    }
}

/// Partitions a mutable slice in-place so that it contains all elements for
/// which `predicate(e)` is `true`, followed by all elements for which
/// `predicate(e)` is `false`. Returns sub-slices to all predicated and
/// non-predicated elements, respectively.
///
/// https://github.com/llogiq/partition/blob/master/src/lib.rs
fn partition_slice<T, P>(data: &mut [T], predicate: P) -> (&mut [T], &mut [T])
where
    P: Fn(&T) -> bool,
{
    let len = data.len();

    if len == 0 {
        return (&mut [], &mut []);
    }

    let (mut left, mut right) = (0, len - 1);

    loop {
        while left < len && predicate(&data[left]) {
            left += 1;
        }

        while right > 0 && !predicate(&data[right]) {
            right -= 1;
        }

        if left >= right {
            return data.split_at_mut(left);
        }

        data.swap(left, right);
    }
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    fn sorted(mut points: Vec<DVec2>) -> Vec<DVec2> {
        points.sort_by(crate::orient::lexicographic_cmp);
        points
    }

    #[test]
    fn base_cases_are_returned_unchanged() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(10.0, 0.0);
        assert!(find_hull(&[], a, b).is_empty());
        assert_eq!(find_hull(&[dvec2(3.0, 1.0)], a, b), vec![dvec2(3.0, 1.0)]);
    }

    #[test]
    fn apex_comes_first() {
        let candidates = [dvec2(2.0, 1.0), dvec2(5.0, 6.0), dvec2(1.0, 3.0), dvec2(9.0, 2.0)];
        let hull = find_hull(&candidates, dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        assert_eq!(hull[0], dvec2(5.0, 6.0));
        assert_eq!(
            sorted(hull),
            vec![dvec2(1.0, 3.0), dvec2(5.0, 6.0), dvec2(9.0, 2.0)]
        );
    }

    #[test]
    fn inside_points_are_dropped() {
        let candidates = [
            dvec2(5.0, 5.0),
            dvec2(5.0, 1.0),
            dvec2(3.0, 2.0),
            dvec2(7.0, 2.0),
        ];
        let hull = find_hull(&candidates, dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        assert_eq!(hull, vec![dvec2(5.0, 5.0)]);
    }

    #[test]
    fn does_not_modify_candidates() {
        let candidates = vec![dvec2(2.0, 1.0), dvec2(5.0, 6.0), dvec2(9.0, 2.0)];
        let copy = candidates.clone();
        let _ = find_hull(&candidates, dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        assert_eq!(candidates, copy);
    }

    #[test]
    fn ties_are_all_kept() {
        let candidates = [
            dvec2(2.0, 2.0),
            dvec2(1.0, 2.0),
            dvec2(2.0, 1.0),
            dvec2(3.0, 2.0),
        ];
        let hull = find_hull(&candidates, dvec2(0.0, 0.0), dvec2(4.0, 0.0));
        assert_eq!(
            sorted(hull),
            vec![dvec2(1.0, 2.0), dvec2(2.0, 2.0), dvec2(3.0, 2.0)]
        );
    }

    #[test]
    fn ties_reduced_to_endpoints() {
        let candidates = [
            dvec2(2.0, 2.0),
            dvec2(1.0, 2.0),
            dvec2(2.0, 1.0),
            dvec2(3.0, 2.0),
        ];
        let config = HullConfig::default().with_collinear(CollinearPolicy::Discard);
        let hull = find_hull_with_config(&candidates, dvec2(0.0, 0.0), dvec2(4.0, 0.0), &config);
        assert_eq!(hull, vec![dvec2(1.0, 2.0), dvec2(3.0, 2.0)]);
    }

    #[test]
    fn point_below_tied_edge_is_not_a_hull_point() {
        // `(30, 49)` is outside the edge from the start to the first tied point,
        // but inside the hull spanned by both tied points.
        let candidates = [dvec2(50.0, 50.0), dvec2(10.0, 50.0), dvec2(30.0, 49.0)];
        let hull = find_hull(&candidates, dvec2(0.0, 0.0), dvec2(100.0, 0.0));
        assert_eq!(sorted(hull), vec![dvec2(10.0, 50.0), dvec2(50.0, 50.0)]);
    }

    #[test]
    fn duplicate_apex() {
        let candidates = [dvec2(5.0, 5.0), dvec2(5.0, 5.0), dvec2(1.0, 1.0)];
        let config = HullConfig::default().with_collinear(CollinearPolicy::Discard);
        let hull = find_hull_with_config(&candidates, dvec2(0.0, 0.0), dvec2(10.0, 0.0), &config);
        assert_eq!(hull, vec![dvec2(5.0, 5.0)]);
    }

    #[test]
    fn reversed_baseline_finds_the_lower_chain() {
        let candidates = [dvec2(2.0, -3.0), dvec2(6.0, -4.0), dvec2(5.0, -1.0)];
        let hull = find_hull(&candidates, dvec2(10.0, 0.0), dvec2(0.0, 0.0));
        assert_eq!(sorted(hull), vec![dvec2(2.0, -3.0), dvec2(6.0, -4.0)]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let candidates: Vec<DVec2> = (0..500)
            .map(|i| {
                let t = i as f64 * 0.37;
                dvec2(50.0 + 40.0 * t.cos(), 1.0 + 40.0 * t.sin().abs())
            })
            .collect();
        let (a, b) = (dvec2(0.0, 0.0), dvec2(100.0, 0.0));
        let parallel = HullConfig::default().with_parallel_threshold(0);
        let sequential = HullConfig::default().with_parallel_threshold(usize::MAX);
        assert_eq!(
            find_hull_with_config(&candidates, a, b, &parallel),
            find_hull_with_config(&candidates, a, b, &sequential)
        );
    }

    #[test]
    fn partition() {
        let mut data = [1, 8, 3, 6, 5, 2];
        let (even, odd) = partition_slice(&mut data, |x| x % 2 == 0);
        even.sort();
        odd.sort();
        assert_eq!(even, &[2, 6, 8]);
        assert_eq!(odd, &[1, 3, 5]);

        let mut single = [1];
        let (matching, other) = partition_slice(&mut single, |x| *x == 0);
        assert!(matching.is_empty());
        assert_eq!(other, &[1]);
    }
}
