//! # Primitive Mesh
//!
//! Watertight tessellation of parametric solids (a cube and a cone) at
//! caller-chosen density.
//!
//! ## Architecture
//!
//! ```text
//! create_object (dispatch) → create_cube | create_cone → TriangleSink::emit_triangle
//! ```
//!
//! Triangles leave the crate one at a time through [`TriangleSink`]. Callers
//! decide what a triangle becomes: a `Vec<Triangle>`, a welded [`Mesh`], or
//! their own surface.
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{create_object, Mesh, Shape};
//!
//! let mut mesh = Mesh::new();
//! create_object(&mut mesh, Shape::Cube, 1.0, 2, 0);
//! assert_eq!(mesh.triangle_count(), 48);
//! assert!(mesh.check_closed().is_ok());
//! ```

pub mod dispatch;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod shape;
pub mod sink;
pub mod vertex;

pub use dispatch::{create_object, create_object_with, create_shape, ShapeParams};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use primitives::{create_cone, create_cube};
pub use shape::Shape;
pub use sink::{FnSink, TriangleCounter, TriangleSink};
pub use vertex::{Triangle, Vertex};
