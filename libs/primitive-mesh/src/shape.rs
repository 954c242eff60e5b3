//! # Shapes
//!
//! The closed set of primitives the dispatcher knows how to tessellate.

use crate::error::MeshError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tessellatable primitive.
///
/// Discriminants are the raw selector values accepted by
/// [`crate::create_object`].
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Shape;
///
/// assert_eq!(Shape::try_from(1).unwrap(), Shape::Cone);
/// assert!(Shape::try_from(9).is_err());
/// assert_eq!("cube".parse::<Shape>().unwrap(), Shape::Cube);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Shape {
    /// Axis-aligned cube centered at the origin.
    Cube = 0,
    /// Unit-height cone centered at the origin.
    Cone = 1,
}

impl Shape {
    /// All shapes in selector order.
    pub const ALL: [Shape; 2] = [Shape::Cube, Shape::Cone];

    /// Display name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Cube => "Cube",
            Shape::Cone => "Cone",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Shape> for i32 {
    fn from(shape: Shape) -> Self {
        shape as i32
    }
}

impl TryFrom<i32> for Shape {
    type Error = MeshError;

    fn try_from(selector: i32) -> Result<Self, Self::Error> {
        Shape::ALL
            .into_iter()
            .find(|shape| *shape as i32 == selector)
            .ok_or(MeshError::UnknownShape(selector))
    }
}

impl FromStr for Shape {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MeshError::UnknownShapeName(name.to_string()))
    }
}
