//! Triangle type with stored facet normal.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One STL facet: three ordered vertices and the normal stored alongside them.
///
/// The winding order of `vertices` defines the outward direction. The stored
/// `normal` is whatever the source file carried; it is not kept in sync with
/// the vertices and may be stale or zero.
///
/// # Example
///
/// ```
/// use stl_types::{Triangle, Point3, Vector3};
///
/// let tri = Triangle::new(
///     Vector3::new(0.0, 0.0, 1.0),
///     [
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
/// );
///
/// assert!(!tri.has_equal_vertices());
/// assert!(tri.normal_matches(std::f64::consts::FRAC_PI_2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Facet normal as stored in the source.
    pub normal: Vector3<f64>,
    /// Vertices in winding order.
    pub vertices: [Point3<f64>; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            normal: Vector3::zeros(),
            vertices: [Point3::origin(); 3],
        }
    }
}

impl Triangle {
    /// Create a triangle from a stored normal and three vertices.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f64>, vertices: [Point3<f64>; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Create a triangle whose stored normal is computed from the vertices.
    ///
    /// Degenerate input gets a zero normal.
    #[must_use]
    pub fn from_vertices(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        let mut tri = Self::new(Vector3::zeros(), [v0, v1, v2]);
        tri.normal = tri.computed_normal().unwrap_or_else(Vector3::zeros);
        tri
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 1.0],
    ///     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    /// );
    /// assert_eq!(tri.vertices[1].x, 1.0);
    /// ```
    #[must_use]
    pub fn from_arrays(normal: [f64; 3], vertices: [[f64; 3]; 3]) -> Self {
        Self {
            normal: Vector3::from(normal),
            vertices: vertices.map(Point3::from),
        }
    }

    /// Get edge `e` as a directed `(start, end)` pair.
    ///
    /// Edge `e` joins vertex `e` to vertex `(e + 1) % 3`.
    ///
    /// # Panics
    ///
    /// Panics if `e > 2`.
    #[inline]
    #[must_use]
    pub fn edge(&self, e: usize) -> (Point3<f64>, Point3<f64>) {
        (self.vertices[e], self.vertices[(e + 1) % 3])
    }

    /// Get the three directed edges: v0→v1, v1→v2, v2→v0.
    #[must_use]
    pub fn edges(&self) -> [(Point3<f64>, Point3<f64>); 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }

    /// True if any two vertices are exactly equal.
    ///
    /// Such a triangle is really a line or a point.
    #[must_use]
    pub fn has_equal_vertices(&self) -> bool {
        let [a, b, c] = &self.vertices;
        a == b || b == c || c == a
    }

    /// Compute the (unnormalized) normal via the right-hand rule.
    ///
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.vertices[1] - self.vertices[0];
        let e2 = self.vertices[2] - self.vertices[0];
        e1.cross(&e2)
    }

    /// Compute the unit normal from the vertices.
    ///
    /// Returns `None` only when the cross product is exactly zero, so tiny
    /// but valid triangles still get a direction.
    #[must_use]
    pub fn computed_normal(&self) -> Option<Vector3<f64>> {
        self.normal_unnormalized().try_normalize(0.0)
    }

    /// Angle in radians between the stored normal and the computed one.
    ///
    /// `None` if either vector has zero length.
    #[must_use]
    pub fn normal_angle(&self) -> Option<f64> {
        let computed = self.computed_normal()?;
        if self.normal.norm_squared() == 0.0 {
            return None;
        }
        Some(computed.angle(&self.normal))
    }

    /// Check whether the stored normal agrees with the winding order.
    ///
    /// Agreement means the angle between the two is at most `tolerance`
    /// radians. A zero stored normal or a zero-area triangle never agrees.
    #[must_use]
    pub fn normal_matches(&self, tolerance: f64) -> bool {
        self.normal_angle().is_some_and(|angle| angle <= tolerance)
    }
}
