//! Core STL types.
//!
//! This crate provides the foundational types shared by the STL crates:
//!
//! - [`Triangle`] - Three ordered vertices plus the stored facet normal
//! - [`Solid`] - A named, ordered collection of triangles (one STL model)
//! - [`Ray`] - Origin plus direction, with a Möller–Trumbore triangle test
//! - [`SolidWriter`] / [`SolidView`] - The capabilities readers write through
//!   and validators read through
//!
//! # Layer 0 Crate
//!
//! This crate has no engine dependencies. It can be used in CLI tools,
//! servers, WASM builds or bindings.
//!
//! # Coordinate System
//!
//! All coordinates are `f64`. Vertex winding is **counter-clockwise when
//! viewed from outside**; the outward normal follows the right-hand rule.
//!
//! # Example
//!
//! ```
//! use stl_types::{Point3, Ray, Solid, SolidWriter, Triangle, Vector3};
//!
//! let mut solid = Solid::new();
//! solid.set_name("plate".to_string());
//! solid.append_triangle(Triangle::from_vertices(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ));
//!
//! let ray = Ray::new(Point3::new(0.1, 0.1, 1.0), Vector3::new(0.0, 0.0, -1.0));
//! let hit = ray.intersect_triangle(&solid.triangles[0]).unwrap();
//! assert!(hit.z.abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod ray;
mod solid;
mod traits;
mod triangle;

pub use ray::{INTERSECT_EPSILON, Ray, RayHit};
pub use solid::Solid;
pub use traits::{SolidView, SolidWriter};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
