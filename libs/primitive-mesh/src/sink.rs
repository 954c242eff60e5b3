//! # Triangle Sinks
//!
//! The single emission seam between the tessellators and whatever surface the
//! caller is accumulating geometry into. Generators never see more than
//! [`TriangleSink::emit_triangle`].

use crate::vertex::{Triangle, Vertex};

/// Receives triangles one at a time, in winding order.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_cube, Triangle, TriangleSink, Vertex};
///
/// struct Areas(f64);
///
/// impl TriangleSink for Areas {
///     fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
///         self.0 += Triangle::new(a, b, c).area();
///     }
/// }
///
/// let mut areas = Areas(0.0);
/// create_cube(&mut areas, 1.0, 3);
/// assert!((areas.0 - 24.0).abs() < 1e-9);
/// ```
pub trait TriangleSink {
    /// Adds one triangle to the target surface.
    fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex);
}

impl<S: TriangleSink + ?Sized> TriangleSink for &mut S {
    #[inline]
    fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        (**self).emit_triangle(a, b, c);
    }
}

impl TriangleSink for Vec<Triangle> {
    #[inline]
    fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        self.push(Triangle::new(a, b, c));
    }
}

/// Adapts a closure into a [`TriangleSink`].
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_cone, FnSink, Vertex};
///
/// let mut lowest = f64::MAX;
/// let mut sink = FnSink(|a: Vertex, _b: Vertex, _c: Vertex| {
///     lowest = lowest.min(a.position().y);
/// });
/// create_cone(&mut sink, 1.0, 8, 2);
/// assert_eq!(lowest, -0.5);
/// ```
pub struct FnSink<F>(pub F);

impl<F> TriangleSink for FnSink<F>
where
    F: FnMut(Vertex, Vertex, Vertex),
{
    #[inline]
    fn emit_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        (self.0)(a, b, c);
    }
}

/// Counts emitted triangles without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangleCounter {
    count: usize,
}

impl TriangleCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of triangles seen so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl TriangleSink for TriangleCounter {
    #[inline]
    fn emit_triangle(&mut self, _a: Vertex, _b: Vertex, _c: Vertex) {
        self.count += 1;
    }
}
