//! # Vertex and Triangle
//!
//! The values handed across the emission seam. Both are plain `Copy` data with
//! no identity beyond their coordinates.

use config::constants::VERTEX_W;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A position in object space.
///
/// Carries a reserved homogeneous component that is always [`VERTEX_W`].
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Vertex;
///
/// let v = Vertex::new(1.0, -1.0, 0.5);
/// assert_eq!(v.position().y, -1.0);
/// assert_eq!(v.w(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    position: DVec3,
    w: f64,
}

impl Vertex {
    /// Creates a vertex from its three coordinates.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_position(DVec3::new(x, y, z))
    }

    /// Creates a vertex from a position vector.
    #[inline]
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            w: VERTEX_W,
        }
    }

    /// Returns the position.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Returns the reserved homogeneous component.
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }
}

impl From<DVec3> for Vertex {
    fn from(position: DVec3) -> Self {
        Self::from_position(position)
    }
}

/// An ordered triple of vertices, counter-clockwise when viewed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertices in winding order.
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices in winding order.
    #[inline]
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the unnormalized normal `(b - a) × (c - a)`.
    ///
    /// Under the right-hand rule this points away from the side the triangle
    /// faces.
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.vertices.map(|v| v.position());
        (b - a).cross(c - a)
    }

    /// Returns the triangle's area.
    pub fn area(&self) -> f64 {
        self.normal().length() * 0.5
    }

    /// Returns the centroid.
    pub fn centroid(&self) -> DVec3 {
        let [a, b, c] = self.vertices.map(|v| v.position());
        (a + b + c) / 3.0
    }
}
