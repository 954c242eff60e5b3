//! # Shape Dispatch
//!
//! Routes a shape selector to the matching tessellator. Unrecognized
//! selectors are not an error: they are reported and drawn as a cube.

use crate::primitives::{create_cone, create_cube};
use crate::shape::Shape;
use crate::sink::TriangleSink;
use config::constants::GlobalConfig;
use tracing::warn;

/// Size and subdivision parameters for one generation call.
///
/// `primary` is the cube factor or the cone's radial count. `secondary` is the
/// cone's layer count and is ignored by the cube.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{Shape, ShapeParams};
///
/// let params = ShapeParams::defaults(Shape::Cone);
/// assert!(params.primary >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Cube half-extent or cone base radius.
    pub radius: f64,
    /// Primary tessellation factor.
    pub primary: i32,
    /// Secondary tessellation factor.
    pub secondary: i32,
}

impl ShapeParams {
    /// Creates parameters from explicit values.
    pub fn new(radius: f64, primary: i32, secondary: i32) -> Self {
        Self {
            radius,
            primary,
            secondary,
        }
    }

    /// Takes the defaults for `shape` from `config`.
    pub fn from_config(config: &GlobalConfig, shape: Shape) -> Self {
        let to_i32 = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        match shape {
            Shape::Cube => Self::new(config.radius, to_i32(config.cube_factor), 0),
            Shape::Cone => Self::new(
                config.radius,
                to_i32(config.cone_disc),
                to_i32(config.cone_layers),
            ),
        }
    }

    /// Workspace defaults for `shape`.
    pub fn defaults(shape: Shape) -> Self {
        Self::from_config(&GlobalConfig::default(), shape)
    }
}

/// Tessellates the shape named by `shape` into `sink`.
///
/// `shape` may be a [`Shape`] or a raw selector. A selector that names no
/// shape logs a warning and falls back to the cube with the same parameters.
///
/// # Diagnostics
///
/// The warning is a `tracing` event at `WARN` level. It only reaches a stream
/// if the caller has installed a subscriber, for example
/// `tracing_subscriber::fmt().with_writer(std::io::stderr).init()`. Without
/// one the event is discarded and the fallback still happens.
///
/// # Arguments
///
/// * `sink` - Receives every triangle
/// * `shape` - Shape selector
/// * `radius` - Object radius
/// * `f1` - Primary tessellation factor
/// * `f2` - Secondary tessellation factor
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_object, Shape, TriangleCounter};
///
/// let mut counter = TriangleCounter::new();
/// create_object(&mut counter, Shape::Cone, 1.0, 4, 2);
/// assert_eq!(counter.count(), 16);
///
/// let mut fallback = TriangleCounter::new();
/// create_object(&mut fallback, 42, 1.0, 2, 0);
/// assert_eq!(fallback.count(), 48);
/// ```
pub fn create_object<S: TriangleSink + ?Sized>(
    sink: &mut S,
    shape: impl Into<i32>,
    radius: f64,
    f1: i32,
    f2: i32,
) {
    let selector = shape.into();
    let shape = Shape::try_from(selector).unwrap_or_else(|_| {
        warn!(
            selector,
            fallback = %Shape::Cube,
            "Unknown shape '{selector}', drawing cube"
        );
        Shape::Cube
    });

    create_shape(sink, shape, radius, f1, f2);
}

/// Tessellates a known shape into `sink`.
pub fn create_shape<S: TriangleSink + ?Sized>(
    sink: &mut S,
    shape: Shape,
    radius: f64,
    f1: i32,
    f2: i32,
) {
    match shape {
        Shape::Cube => create_cube(sink, radius, f1),
        Shape::Cone => create_cone(sink, radius, f1, f2),
    }
}

/// [`create_object`] with bundled parameters.
pub fn create_object_with<S: TriangleSink + ?Sized>(
    sink: &mut S,
    shape: impl Into<i32>,
    params: ShapeParams,
) {
    create_object(sink, shape, params.radius, params.primary, params.secondary);
}
