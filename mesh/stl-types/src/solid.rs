//! In-memory representation of one STL file.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SolidView, SolidWriter, Triangle};

/// A 3D model made of triangles, as stored in one STL file.
///
/// # Example
///
/// ```
/// use stl_types::{Solid, SolidView, SolidWriter, Triangle};
///
/// let mut solid = Solid::new();
/// solid.set_name("part".to_string());
/// solid.append_triangle(Triangle::default());
///
/// assert_eq!(solid.name(), "part");
/// assert_eq!(solid.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solid {
    /// The solid's name.
    pub name: String,
    /// Triangles in file order.
    pub triangles: Vec<Triangle>,
    /// Raw header bytes; only meaningful for binary files.
    pub binary_header: Vec<u8>,
    /// True if the solid was read from an ASCII file.
    pub is_ascii: bool,
}

impl Solid {
    /// Create an empty solid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty solid with a name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check if the solid has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl SolidWriter for Solid {
    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_binary_header(&mut self, header: Vec<u8>) {
        self.binary_header = header;
    }

    fn set_triangle_count(&mut self, count: u32) {
        let count = count as usize;
        if count < self.triangles.len() {
            self.triangles.truncate(count);
        } else {
            self.triangles.reserve(count - self.triangles.len());
        }
    }

    fn append_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    fn set_ascii(&mut self, is_ascii: bool) {
        self.is_ascii = is_ascii;
    }
}

impl SolidView for Solid {
    fn name(&self) -> &str {
        &self.name
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
