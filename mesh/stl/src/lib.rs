//! Read, validate and ray-test STL solids.
//!
//! This umbrella crate re-exports the `stl-*` crates behind one dependency.
//! All of them are Layer 0 and can be used in CLI tools, WASM, servers or
//! bindings.
//!
//! # Quick Start
//!
//! ```no_run
//! use stl::prelude::*;
//!
//! // Load a solid; any diagnostic makes this an error
//! let solid = stl::io::load_stl_ascii("part.stl").unwrap();
//!
//! // Check topology and normals
//! let report = validate_solid(&solid);
//! if !report.is_empty() {
//!     println!("{report}");
//! }
//!
//! // Cast a ray down the z axis
//! let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
//! if let Some(hit) = ray.first_hit(solid.triangles()) {
//!     println!("hit triangle {} at {}", hit.triangle_index, hit.point);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `Triangle`, `Solid`, `Ray`, the writer/view capabilities
//! - [`io`] - ASCII STL reader with recovery and line-numbered diagnostics
//! - [`validate`] - Edge adjacency and per-triangle validation
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize solids, rays and validation reports

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core types: `Triangle`, `Solid`, `Ray`, `SolidWriter`, `SolidView`.
pub use stl_types as types;

/// ASCII STL reading.
pub use stl_io as io;

/// Manifold and normal validation.
pub use stl_validate as validate;

/// Commonly used items.
///
/// ```
/// use stl::prelude::*;
///
/// let solid = read_stl_ascii("solid empty\nendsolid empty\n".as_bytes()).unwrap();
/// assert!(validate_solid(&solid).is_empty());
/// ```
pub mod prelude {
    // Core types
    pub use stl_types::{Point3, Ray, RayHit, Solid, SolidView, SolidWriter, Triangle, Vector3};

    // Reading
    pub use stl_io::{ParseReport, load_stl_ascii, parse_ascii, read_stl_ascii};

    // Validation
    pub use stl_validate::{ValidationReport, validate_solid};
}
