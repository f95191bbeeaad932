//! Directed edge adjacency for triangle soups.
//!
//! STL files carry no shared vertex indices, so edges are keyed by the exact
//! positions of their endpoints.

use hashbrown::HashMap;
use smallvec::SmallVec;
use stl_types::{Point3, Triangle};
use tracing::debug;

/// Exact-equality key for a vertex position.
///
/// Two keys are equal exactly when every coordinate compares `==`:
/// `-0.0` is folded onto `+0.0`, and positions with a NaN coordinate have no
/// key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey([u64; 3]);

impl VertexKey {
    /// Key a position, or `None` if any coordinate is NaN.
    #[must_use]
    pub fn new(position: &Point3<f64>) -> Option<Self> {
        Some(Self([
            coordinate_bits(position.x)?,
            coordinate_bits(position.y)?,
            coordinate_bits(position.z)?,
        ]))
    }
}

fn coordinate_bits(value: f64) -> Option<u64> {
    if value.is_nan() {
        None
    } else if value == 0.0 {
        Some(0.0_f64.to_bits())
    } else {
        Some(value.to_bits())
    }
}

/// A directed edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    from: VertexKey,
    to: VertexKey,
}

impl EdgeKey {
    /// Key the directed edge between two positions.
    #[must_use]
    pub fn new(from: &Point3<f64>, to: &Point3<f64>) -> Option<Self> {
        Some(Self {
            from: VertexKey::new(from)?,
            to: VertexKey::new(to)?,
        })
    }

    /// The same edge traversed the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Index from directed edge to the triangles that contain it.
///
/// Built once per validation pass and dropped afterwards. For a closed
/// manifold mesh every directed edge maps to exactly one triangle and its
/// reverse to exactly one other triangle.
///
/// # Example
///
/// ```
/// use stl_types::{Point3, Triangle};
/// use stl_validate::EdgeAdjacencyIndex;
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 0.0, 0.0);
/// let c = Point3::new(0.0, 1.0, 0.0);
/// let d = Point3::new(1.0, 1.0, 0.0);
/// let triangles = [Triangle::from_vertices(a, b, c), Triangle::from_vertices(c, b, d)];
///
/// let index = EdgeAdjacencyIndex::build(&triangles);
/// assert_eq!(index.edge_count(), 6);
/// assert_eq!(index.other_triangles_with_edge(&b, &c, 1), vec![0]);
/// assert_eq!(index.other_triangles_with_edge(&c, &b, 1), Vec::<usize>::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacencyIndex {
    /// Triangle indices per directed edge, ascending and without repeats.
    edges: HashMap<EdgeKey, SmallVec<[usize; 2]>>,
}

impl EdgeAdjacencyIndex {
    /// Index the three directed edges of every triangle.
    ///
    /// Edges with a NaN endpoint are left out, so they never match anything.
    #[must_use]
    pub fn build(triangles: &[Triangle]) -> Self {
        let mut edges: HashMap<EdgeKey, SmallVec<[usize; 2]>> =
            HashMap::with_capacity(triangles.len() * 3);

        for (idx, triangle) in triangles.iter().enumerate() {
            for (from, to) in triangle.edges() {
                let Some(key) = EdgeKey::new(&from, &to) else {
                    continue;
                };
                let owners = edges.entry(key).or_default();
                // A collapsed triangle can repeat one directed edge
                if owners.last() != Some(&idx) {
                    owners.push(idx);
                }
            }
        }

        debug!(
            triangles = triangles.len(),
            edges = edges.len(),
            "Built edge adjacency index"
        );

        Self { edges }
    }

    /// All triangles containing the directed edge `from -> to`, ascending.
    #[must_use]
    pub fn triangles_with_edge(&self, from: &Point3<f64>, to: &Point3<f64>) -> &[usize] {
        EdgeKey::new(from, to)
            .and_then(|key| self.edges.get(&key))
            .map_or(&[], SmallVec::as_slice)
    }

    /// Triangles other than `exclude` containing the directed edge
    /// `from -> to`, ascending.
    #[must_use]
    pub fn other_triangles_with_edge(
        &self,
        from: &Point3<f64>,
        to: &Point3<f64>,
        exclude: usize,
    ) -> Vec<usize> {
        self.triangles_with_edge(from, to)
            .iter()
            .copied()
            .filter(|&idx| idx != exclude)
            .collect()
    }

    /// Number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges whose reverse is not present.
    #[must_use]
    pub fn unmatched_edge_count(&self) -> usize {
        self.edges
            .keys()
            .filter(|key| !self.edges.contains_key(&key.reversed()))
            .count()
    }
}
