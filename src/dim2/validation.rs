use glam::DVec2;
use thiserror::Error;

use crate::orient::Orientation;

/// A violated convex hull invariant, reported by [`validate_hull`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HullValidationError {
    /// The hull turns clockwise at the vertex with the given index.
    #[error("The hull is not convex at vertex {index} ({point}).")]
    NotConvex {
        /// The index of the vertex in the hull.
        index: usize,
        /// The vertex.
        point: DVec2,
    },
    /// An input point lies strictly outside of a hull edge.
    #[error("The point {point} lies outside of the hull edge starting at vertex {edge}.")]
    PointOutside {
        /// The index of the first vertex of the edge.
        edge: usize,
        /// The point outside of the hull.
        point: DVec2,
    },
}

/// Returns `true` if `hull` turns counterclockwise or goes straight at every vertex.
///
/// Hulls with fewer than 3 points are trivially convex.
pub fn is_convex(hull: &[DVec2]) -> bool {
    first_reflex_vertex(hull).is_none()
}

/// Checks that `hull` is a convex polygon in counterclockwise order
/// that contains every point of `points`.
///
/// # Errors
///
/// Returns the first [`HullValidationError`] found.
pub fn validate_hull(hull: &[DVec2], points: &[DVec2]) -> Result<(), HullValidationError> {
    if let Some(index) = first_reflex_vertex(hull) {
        return Err(HullValidationError::NotConvex {
            index,
            point: hull[index],
        });
    }

    // Degenerate hulls have no interior, so only a polygon can be checked edge by edge.
    if hull.len() < 3 {
        return Ok(());
    }

    for (edge, (a, b)) in hull.iter().zip(hull.iter().cycle().skip(1)).enumerate() {
        let outside = points
            .iter()
            .find(|p| Orientation::of(*a, *b, **p) == Orientation::Clockwise);
        if let Some(point) = outside {
            return Err(HullValidationError::PointOutside {
                edge,
                point: *point,
            });
        }
    }

    Ok(())
}

fn first_reflex_vertex(hull: &[DVec2]) -> Option<usize> {
    let n = hull.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| {
        let prev = hull[(i + n - 1) % n];
        let next = hull[(i + 1) % n];
        Orientation::of(prev, hull[i], next) == Orientation::Clockwise
    })
}
