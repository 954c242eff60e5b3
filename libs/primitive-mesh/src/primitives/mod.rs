//! # Primitives
//!
//! Tessellators for the supported solids. Each one clamps its own subdivision
//! counts and writes triangles straight into the caller's sink.

pub mod cone;
pub mod cube;
pub mod grid;

pub use cone::create_cone;
pub use cube::create_cube;
