//! # Mesh Data Structure
//!
//! Indexed triangle mesh that can sit behind the emission seam. Vertices with
//! bit-identical coordinates are welded, which turns the per-triangle stream
//! back into a shared-vertex surface that can be audited for closedness.

use crate::error::{MeshError, MeshResult};
use crate::sink::TriangleSink;
use crate::vertex::{Triangle, Vertex};
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with welded vertices and indices.
///
/// All geometry uses f64. Triangles only enter through [`TriangleSink`], so
/// every stored index refers to a welded vertex.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_cube, Mesh};
///
/// let mut mesh = Mesh::new();
/// create_cube(&mut mesh, 1.0, 1);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.check_closed().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[usize; 3]>,
    /// Bit pattern of each position to its index
    lookup: HashMap<[u64; 3], usize>,
}

fn weld_key(position: DVec3) -> [u64; 3] {
    // Adding +0.0 folds -0.0 into +0.0 so both weld together.
    [
        (position.x + 0.0).to_bits(),
        (position.y + 0.0).to_bits(),
        (position.z + 0.0).to_bits(),
    ]
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of unique vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index, reusing an existing vertex with
    /// identical coordinates.
    pub(crate) fn add_vertex(&mut self, position: DVec3) -> usize {
        let next = self.vertices.len();
        let index = *self.lookup.entry(weld_key(position)).or_insert(next);
        if index == next {
            self.vertices.push(position);
        }
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the position of a welded vertex, or `None` past the end.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<DVec3> {
        self.vertices.get(index).copied()
    }

    /// Returns the triangle at the given index with its positions resolved.
    ///
    /// Returns `None` if `index` is past the end or the triangle refers to a
    /// missing vertex.
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let [a, b, c] = self.triangles.get(index)?;
        Some(Triangle::new(
            self.vertex(*a)?.into(),
            self.vertex(*b)?.into(),
            self.vertex(*c)?.into(),
        ))
    }

    /// Iterates over all triangles with their positions resolved.
    pub fn iter_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangles.len()).filter_map(|i| self.triangle(i))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Computes the signed enclosed volume.
    ///
    /// Positive when the surface is closed and wound counter-clockwise seen
    /// from outside.
    pub fn signed_volume(&self) -> f64 {
        self.iter_triangles()
            .map(|t| {
                let [a, b, c] = t.vertices.map(|v| v.position());
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Computes the total surface area.
    pub fn surface_area(&self) -> f64 {
        self.iter_triangles().map(|t| t.area()).sum()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.triangles.iter().enumerate().all(|(i, tri)| {
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            self.triangle(i).is_some_and(|t| t.area() > EPSILON_TOLERANCE)
        })
    }

    /// Checks that the surface is closed and consistently wound.
    ///
    /// Every directed edge must appear exactly once and be matched by exactly
    /// one edge running the opposite way.
    pub fn check_closed(&self) -> MeshResult<()> {
        let mut edges: HashMap<(usize, usize), usize> =
            HashMap::with_capacity(self.triangles.len() * 3);
        for &[a, b, c] in &self.triangles {
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        for (&(from, to), &count) in &edges {
            if count > 1 {
                return Err(MeshError::inconsistent_winding(format!(
                    "edge ({from}, {to}) traversed {count} times in the same direction"
                )));
            }
            match edges.get(&(to, from)) {
                Some(1) => {}
                Some(n) => {
                    return Err(MeshError::inconsistent_winding(format!(
                        "edge ({to}, {from}) traversed {n} times in the same direction"
                    )));
                }
                None => {
                    return Err(MeshError::not_closed(format!(
                        "edge ({from}, {to}) has no opposite edge"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl TriangleSink for Mesh {
    fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        let v0 = self.add_vertex(a.position());
        let v1 = self.add_vertex(b.position());
        let v2 = self.add_vertex(c.position());
        self.add_triangle(v0, v1, v2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let o = Vertex::new(0.0, 0.0, 0.0);
        let x = Vertex::new(1.0, 0.0, 0.0);
        let y = Vertex::new(0.0, 1.0, 0.0);
        let z = Vertex::new(0.0, 0.0, 1.0);
        mesh.emit_triangle(o, y, x);
        mesh.emit_triangle(o, x, z);
        mesh.emit_triangle(o, z, y);
        mesh.emit_triangle(x, y, z);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_add_vertex_welds_duplicates() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        let b = mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let c = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!((a, b, c), (0, 1, 0));
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_negative_zero_welds_with_zero() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        let b = mesh.add_vertex(DVec3::new(-0.0, 1.0, -0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.validate());
        assert!(mesh.check_closed().is_ok());
        assert!((mesh.signed_volume() - 1.0 / 6.0).abs() < EPSILON_TOLERANCE);
    }

    #[test]
    fn test_open_surface_is_rejected() {
        let mut mesh = tetrahedron();
        mesh.triangles.pop();
        assert!(matches!(
            mesh.check_closed(),
            Err(MeshError::NotClosed { .. })
        ));
    }

    #[test]
    fn test_flipped_face_is_rejected() {
        let mut mesh = tetrahedron();
        mesh.triangles[3].swap(0, 1);
        assert!(matches!(
            mesh.check_closed(),
            Err(MeshError::InconsistentWinding { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
        assert_eq!(mesh.triangle(0), None);
        assert_eq!(mesh.iter_triangles().count(), 0);
        assert_eq!(mesh.signed_volume(), 0.0);
        assert_eq!(mesh.surface_area(), 0.0);
    }

    #[test]
    fn test_lookups_past_the_end() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex(1), Some(DVec3::new(0.0, 1.0, 0.0)));
        assert_eq!(mesh.vertex(4), None);
        assert!(mesh.triangle(3).is_some());
        assert_eq!(mesh.triangle(4), None);
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.emit_triangle(
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 0.0),
        );
        assert!(!mesh.validate());
    }
}
