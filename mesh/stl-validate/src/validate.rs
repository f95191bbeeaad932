//! Per-triangle validation of STL solids.
//!
//! Checks every triangle for collapsed vertices, a stored normal that
//! disagrees with the winding order, and edges that are open, non-manifold
//! or shared in the same direction by another triangle.

use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

use stl_types::{SolidView, Triangle};
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adjacency::EdgeAdjacencyIndex;

/// Findings for one edge of a triangle.
///
/// Both lists hold indices of *other* triangles in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeError {
    /// Triangles that traverse the edge in the same direction.
    pub same_edge_triangles: Vec<usize>,
    /// Triangles that traverse the edge in the opposite direction.
    pub counter_edge_triangles: Vec<usize>,
}

impl EdgeError {
    /// The edge is traversed in the same direction by another triangle.
    ///
    /// Usually one of the two triangles is flipped.
    #[must_use]
    pub fn is_used_in_other_triangles(&self) -> bool {
        !self.same_edge_triangles.is_empty()
    }

    /// More than one triangle sits on the other side of the edge.
    #[must_use]
    pub fn has_multiple_counter_edges(&self) -> bool {
        self.counter_edge_triangles.len() > 1
    }

    /// Nothing sits on the other side: the edge is on an open boundary.
    #[must_use]
    pub fn has_no_counter_edge(&self) -> bool {
        self.counter_edge_triangles.is_empty()
    }
}

/// Everything wrong with one triangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleErrors {
    /// Two or more vertices are exactly equal.
    pub has_equal_vertices: bool,
    /// The stored normal disagrees with the normal computed from the
    /// winding order.
    pub normal_does_not_match: bool,
    /// Findings per edge; edge `i` joins vertex `i` to vertex `(i + 1) % 3`.
    pub edge_errors: [Option<EdgeError>; 3],
}

impl TriangleErrors {
    /// True if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_equal_vertices
            && !self.normal_does_not_match
            && self.edge_errors.iter().all(Option::is_none)
    }

    /// Iterate over the flagged edges as `(edge index, error)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, &EdgeError)> + '_ {
        self.edge_errors
            .iter()
            .enumerate()
            .filter_map(|(e, err)| err.as_ref().map(|err| (e, err)))
    }
}

/// Options for validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationOptions {
    /// Largest accepted angle in radians between the stored and the
    /// computed normal.
    pub normal_angle_tolerance: f64,
    /// Whether to compare stored normals at all.
    pub check_normals: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            normal_angle_tolerance: FRAC_PI_2,
            check_normals: true,
        }
    }
}

/// Result of validating a solid.
///
/// Maps triangle index to findings. Healthy triangles are left out, so an
/// empty report means every check passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    triangle_count: usize,
    findings: BTreeMap<usize, TriangleErrors>,
}

impl ValidationReport {
    /// Number of triangles that were checked.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// True if no triangle was flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of flagged triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Findings for triangle `index`, if it was flagged.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TriangleErrors> {
        self.findings.get(&index)
    }

    /// Iterate over flagged triangles in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TriangleErrors)> + '_ {
        self.findings.iter().map(|(&idx, errors)| (idx, errors))
    }

    /// The underlying index-to-findings map.
    #[must_use]
    pub const fn findings(&self) -> &BTreeMap<usize, TriangleErrors> {
        &self.findings
    }

    /// Consume the report, returning the findings map.
    #[must_use]
    pub fn into_findings(self) -> BTreeMap<usize, TriangleErrors> {
        self.findings
    }

    /// True if every edge is shared by exactly two triangles traversing it
    /// in opposite directions.
    ///
    /// Degenerate triangles and normal mismatches do not affect this.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.findings
            .values()
            .all(|errors| errors.edge_errors.iter().all(Option::is_none))
    }

    /// Number of triangles with equal vertices.
    #[must_use]
    pub fn degenerate_count(&self) -> usize {
        self.findings
            .values()
            .filter(|errors| errors.has_equal_vertices)
            .count()
    }

    /// Number of triangles whose stored normal disagrees with the winding.
    #[must_use]
    pub fn normal_mismatch_count(&self) -> usize {
        self.findings
            .values()
            .filter(|errors| errors.normal_does_not_match)
            .count()
    }

    /// Number of triangle edges with no counter edge.
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        self.count_edges(EdgeError::has_no_counter_edge)
    }

    /// Number of triangle edges with more than one counter edge.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.count_edges(EdgeError::has_multiple_counter_edges)
    }

    /// Number of triangle edges shared in the same direction.
    #[must_use]
    pub fn same_direction_edge_count(&self) -> usize {
        self.count_edges(EdgeError::is_used_in_other_triangles)
    }

    fn count_edges(&self, predicate: impl Fn(&EdgeError) -> bool) -> usize {
        self.findings
            .values()
            .flat_map(TriangleErrors::edges)
            .filter(|(_, err)| predicate(*err))
            .count()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a usize, &'a TriangleErrors);
    type IntoIter = std::collections::btree_map::Iter<'a, usize, TriangleErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Report:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(f, "  Flagged: {}", self.len())?;
        writeln!(
            f,
            "  Closed manifold: {}",
            if self.is_closed_manifold() { "yes" } else { "no" }
        )?;

        if self.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "  Issues:")?;
        let counts = [
            ("Degenerate triangles", self.degenerate_count()),
            ("Normal mismatches", self.normal_mismatch_count()),
            ("Open edges", self.open_edge_count()),
            ("Non-manifold edges", self.non_manifold_edge_count()),
            ("Same-direction edges", self.same_direction_edge_count()),
        ];
        for (label, count) in counts {
            if count > 0 {
                writeln!(f, "    {label}: {count}")?;
            }
        }
        Ok(())
    }
}

/// Validate a solid with default options.
///
/// # Example
///
/// ```
/// use stl_types::{Point3, Solid, SolidWriter, Triangle};
/// use stl_validate::validate_solid;
///
/// let mut solid = Solid::new();
/// solid.append_triangle(Triangle::from_vertices(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
///
/// let report = validate_solid(&solid);
/// let errors = report.get(0).unwrap();
/// assert!(errors.edges().all(|(_, e)| e.has_no_counter_edge()));
/// ```
#[must_use]
pub fn validate_solid<S: SolidView + ?Sized>(solid: &S) -> ValidationReport {
    validate_solid_with_options(solid, &ValidationOptions::default())
}

/// Validate a solid with custom options.
#[must_use]
pub fn validate_solid_with_options<S: SolidView + ?Sized>(
    solid: &S,
    options: &ValidationOptions,
) -> ValidationReport {
    validate_triangles(solid.triangles(), options)
}

/// Validate a triangle sequence.
///
/// Indices in the report are positions in `triangles`. The input is not
/// modified and the result only depends on it and `options`.
#[must_use]
pub fn validate_triangles(triangles: &[Triangle], options: &ValidationOptions) -> ValidationReport {
    let index = EdgeAdjacencyIndex::build(triangles);

    let findings: BTreeMap<usize, TriangleErrors> = triangles
        .iter()
        .enumerate()
        .filter_map(|(idx, triangle)| {
            let errors = check_triangle(idx, triangle, &index, options);
            (!errors.is_empty()).then_some((idx, errors))
        })
        .collect();

    info!(
        triangles = triangles.len(),
        flagged = findings.len(),
        "Validated solid"
    );

    ValidationReport {
        triangle_count: triangles.len(),
        findings,
    }
}

fn check_triangle(
    idx: usize,
    triangle: &Triangle,
    index: &EdgeAdjacencyIndex,
    options: &ValidationOptions,
) -> TriangleErrors {
    let normal_does_not_match =
        options.check_normals && !triangle.normal_matches(options.normal_angle_tolerance);

    let edge_errors = [0, 1, 2].map(|e| {
        let (from, to) = triangle.edge(e);
        let same_edge_triangles = index.other_triangles_with_edge(&from, &to, idx);
        let counter_edge_triangles = index.other_triangles_with_edge(&to, &from, idx);

        let healthy = same_edge_triangles.is_empty() && counter_edge_triangles.len() == 1;
        (!healthy).then_some(EdgeError {
            same_edge_triangles,
            counter_edge_triangles,
        })
    });

    TriangleErrors {
        has_equal_vertices: triangle.has_equal_vertices(),
        normal_does_not_match,
        edge_errors,
    }
}
