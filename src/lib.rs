//! # Quickhull 2D
//!
//! A Rust-implementation of the Quickhull algorithm for computing convex hulls of planar point sets.
//!
//! Points are collected into a [`PointSet`], which keeps them sorted by `(x, y)`.
//! The hull is then built by splitting the set along the line through its leftmost and
//! rightmost points, and recursively finding the points furthest from each edge with
//! [`find_hull`]. The resulting vertices are returned in counterclockwise order.
//!
//! ```
//! use quickhull2d::{compute_hull, PointSet};
//! use glam::dvec2;
//!
//! let mut set = PointSet::new();
//! for (x, y) in [(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)] {
//!     set.insert(x, y)?;
//! }
//!
//! let hull = compute_hull(&set)?;
//!
//! assert_eq!(
//!     hull.points(),
//!     vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(1.0, 1.0), dvec2(0.0, 1.0)],
//! );
//! # Ok::<(), quickhull2d::HullError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: evaluates the two halves of large recursion steps in parallel with `rayon`.
//! - `rand`: random point set generation in the [`random`] module.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)

#![warn(missing_docs)]

mod config;
mod dim2;
mod error;
mod fixed_hasher;
mod orient;
mod point_set;
#[cfg(feature = "rand")]
pub mod random;

pub use config::{CollinearPolicy, HullConfig};
pub use dim2::{
    compute_hull, find_hull, find_hull_with_config, is_convex, validate_hull, ConvexHull2d,
    HullValidationError,
};
pub use error::HullError;
pub use orient::{is_ccw, lexicographic_cmp, orient2d, Orientation};
pub use point_set::PointSet;
