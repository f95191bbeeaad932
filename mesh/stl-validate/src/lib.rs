//! Manifold and normal validation for STL solids.
//!
//! STL stores every triangle on its own, with no shared vertex indices. This
//! crate rebuilds edge connectivity from exact vertex positions and reports,
//! per triangle:
//!
//! - collapsed triangles (two or more equal vertices)
//! - stored normals that disagree with the winding order
//! - edges that are open, shared by more than two triangles, or traversed
//!   in the same direction by a neighbour
//!
//! Validation never fails. It always returns a [`ValidationReport`] that maps
//! the index of each flagged triangle to its [`TriangleErrors`].
//!
//! # Example
//!
//! ```
//! use stl_types::{Point3, Triangle};
//! use stl_validate::{ValidationOptions, validate_triangles};
//!
//! let p0 = Point3::new(0.0, 0.0, 0.0);
//! let p1 = Point3::new(1.0, 0.0, 0.0);
//! let p2 = Point3::new(0.0, 1.0, 0.0);
//! let p3 = Point3::new(0.0, 0.0, 1.0);
//!
//! let tetrahedron = [
//!     Triangle::from_vertices(p0, p2, p1),
//!     Triangle::from_vertices(p0, p1, p3),
//!     Triangle::from_vertices(p0, p3, p2),
//!     Triangle::from_vertices(p1, p2, p3),
//! ];
//!
//! let report = validate_triangles(&tetrahedron, &ValidationOptions::default());
//! assert!(report.is_empty());
//! assert!(report.is_closed_manifold());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod validate;

pub use adjacency::{EdgeAdjacencyIndex, EdgeKey, VertexKey};
pub use validate::{
    EdgeError, TriangleErrors, ValidationOptions, ValidationReport, validate_solid,
    validate_solid_with_options, validate_triangles,
};
