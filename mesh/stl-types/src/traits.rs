//! Capabilities for producing and reading solids.

use crate::Triangle;

/// Sink for a solid under construction.
///
/// Readers never build a [`Solid`](crate::Solid) directly; they push what
/// they decode through this trait, one triangle at a time, so callers can
/// stream triangles into their own storage.
pub trait SolidWriter {
    /// Set the solid's name (the remainder of an ASCII header line).
    fn set_name(&mut self, name: String);

    /// Set the raw 80-byte header of a binary file.
    fn set_binary_header(&mut self, header: Vec<u8>);

    /// Announce the expected triangle count.
    ///
    /// Implementations may use this to reserve storage. A count below the
    /// number of triangles already held truncates.
    fn set_triangle_count(&mut self, count: u32);

    /// Append the next triangle in file order.
    fn append_triangle(&mut self, triangle: Triangle);

    /// Record whether the source was ASCII. Ignored by default.
    fn set_ascii(&mut self, _is_ascii: bool) {}
}

/// Read-only access to a solid's name and ordered triangles.
pub trait SolidView {
    /// The solid's name.
    fn name(&self) -> &str;

    /// Triangles in insertion order. Indices into this slice identify
    /// triangles in validation findings.
    fn triangles(&self) -> &[Triangle];

    /// Number of triangles.
    fn triangle_count(&self) -> usize {
        self.triangles().len()
    }
}
