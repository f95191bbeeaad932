//! Rays and the ray/triangle intersection test.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Triangle;

/// Default epsilon for [`Ray::intersect_triangle`]: the gap between `1.0`
/// and the next larger `f64`.
pub const INTERSECT_EPSILON: f64 = f64::EPSILON;

/// A half-line from `origin` along `direction`.
///
/// The direction does not need to be normalized; hit distances are then
/// expressed in multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Start point.
    pub origin: Point3<f64>,
    /// Direction vector.
    pub direction: Vector3<f64>,
}

/// The nearest triangle hit found by [`Ray::first_hit`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// Index of the hit triangle in the slice that was searched.
    pub triangle_index: usize,
    /// Ray parameter `t` of the hit (`origin + t * direction`).
    pub distance: f64,
    /// Hit point.
    pub point: Point3<f64>,
}

impl Ray {
    /// Create a ray.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// Intersect the ray with a single triangle (Möller–Trumbore).
    ///
    /// Returns the hit point, or `None` when the ray is parallel to the
    /// triangle's plane, passes outside the triangle, or the triangle lies
    /// behind the origin. Points on an edge count as hits.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::{Point3, Ray, Triangle, Vector3};
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 1.0],
    ///     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    /// );
    ///
    /// let down = Vector3::new(0.0, 0.0, -1.0);
    /// let hit = Ray::new(Point3::new(0.1, 0.1, 1.0), down).intersect_triangle(&tri);
    /// assert!(hit.is_some());
    ///
    /// // Beyond the hypotenuse
    /// let miss = Ray::new(Point3::new(0.51, 0.51, 1.0), down).intersect_triangle(&tri);
    /// assert!(miss.is_none());
    /// ```
    #[must_use]
    pub fn intersect_triangle(&self, triangle: &Triangle) -> Option<Point3<f64>> {
        self.intersect_triangle_with_epsilon(triangle, INTERSECT_EPSILON)
    }

    /// Same as [`intersect_triangle`](Self::intersect_triangle) with a custom
    /// epsilon for the parallel test and the minimum hit distance.
    #[must_use]
    pub fn intersect_triangle_with_epsilon(
        &self,
        triangle: &Triangle,
        epsilon: f64,
    ) -> Option<Point3<f64>> {
        self.hit_distance(triangle, epsilon).map(|t| self.point_at(t))
    }

    /// Find the nearest triangle hit by the ray.
    ///
    /// This is a linear scan over `triangles`; ties keep the lower index.
    #[must_use]
    pub fn first_hit(&self, triangles: &[Triangle]) -> Option<RayHit> {
        triangles
            .iter()
            .enumerate()
            .filter_map(|(idx, tri)| {
                self.hit_distance(tri, INTERSECT_EPSILON)
                    .map(|t| (idx, t))
            })
            .fold(None, |best: Option<(usize, f64)>, (idx, t)| match best {
                Some((_, best_t)) if best_t <= t => best,
                _ => Some((idx, t)),
            })
            .map(|(triangle_index, distance)| RayHit {
                triangle_index,
                distance,
                point: self.point_at(distance),
            })
    }

    /// Ray parameter of the hit, if any.
    fn hit_distance(&self, triangle: &Triangle, epsilon: f64) -> Option<f64> {
        let [v0, v1, v2] = &triangle.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let ray_cross_e2 = self.direction.cross(&edge2);
        let det = edge1.dot(&ray_cross_e2);

        // Ray is parallel to the triangle's plane
        if det.abs() < epsilon {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = self.origin - v0;
        let u = inv_det * s.dot(&ray_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let s_cross_e1 = s.cross(&edge1);
        let v = inv_det * self.direction.dot(&s_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(&s_cross_e1);
        (t > epsilon).then_some(t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_unit_triangle() -> Triangle {
        Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )
    }

    fn down_from(x: f64, y: f64) -> Ray {
        Ray::new(Point3::new(x, y, 1.0), Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn hit_inside() {
        let hit = down_from(0.1, 0.1)
            .intersect_triangle(&xy_unit_triangle())
            .unwrap();
        assert_relative_eq!(hit, Point3::new(0.1, 0.1, 0.0), epsilon = f64::EPSILON);
    }

    #[test]
    fn hit_on_diagonal() {
        let hit = down_from(0.5, 0.5)
            .intersect_triangle(&xy_unit_triangle())
            .unwrap();
        assert_relative_eq!(hit, Point3::new(0.5, 0.5, 0.0), epsilon = f64::EPSILON);
    }

    #[test]
    fn miss_beyond_diagonal() {
        assert!(down_from(0.51, 0.51)
            .intersect_triangle(&xy_unit_triangle())
            .is_none());
    }

    #[test]
    fn miss_below_x_and_y() {
        let tri = xy_unit_triangle();
        assert!(down_from(-0.1, 0.1).intersect_triangle(&tri).is_none());
        assert!(down_from(0.1, -0.1).intersect_triangle(&tri).is_none());
    }

    #[test]
    fn parallel_ray_misses_from_anywhere() {
        let tri = xy_unit_triangle();
        let along_x = Vector3::new(1.0, 0.0, 0.0);
        for origin in [
            Point3::new(-1.0, 0.2, 0.0),
            Point3::new(-1.0, 0.2, 1.0),
            Point3::new(0.1, 0.1, 0.0),
        ] {
            assert!(Ray::new(origin, along_x).intersect_triangle(&tri).is_none());
        }
    }

    #[test]
    fn triangle_behind_origin_misses() {
        let ray = Ray::new(Point3::new(0.1, 0.1, 1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(ray.intersect_triangle(&xy_unit_triangle()).is_none());
    }

    #[test]
    fn unnormalized_direction() {
        let ray = Ray::new(Point3::new(0.2, 0.2, 4.0), Vector3::new(0.0, 0.0, -2.0));
        let hit = ray.intersect_triangle(&xy_unit_triangle()).unwrap();
        assert_relative_eq!(hit, Point3::new(0.2, 0.2, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn back_face_is_hit() {
        let ray = Ray::new(Point3::new(0.1, 0.1, -1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(ray.intersect_triangle(&xy_unit_triangle()).is_some());
    }

    #[test]
    fn first_hit_picks_nearest() {
        let lower = xy_unit_triangle();
        let mut upper = xy_unit_triangle();
        for v in &mut upper.vertices {
            v.z = 0.5;
        }

        let hit = down_from(0.1, 0.1).first_hit(&[lower, upper]).unwrap();
        assert_eq!(hit.triangle_index, 1);
        assert_relative_eq!(hit.distance, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.point.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn first_hit_none_when_all_miss() {
        assert!(down_from(2.0, 2.0)
            .first_hit(&[xy_unit_triangle()])
            .is_none());
        assert!(down_from(0.1, 0.1).first_hit(&[]).is_none());
    }
}
