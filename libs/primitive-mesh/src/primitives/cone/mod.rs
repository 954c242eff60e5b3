//! # Cone Primitive
//!
//! Tessellates a unit-height cone standing on the y axis. The cone is centered
//! on the origin like the cube: its base disc lies at `y = -0.5` and its apex
//! at `y = +0.5`.
//!
//! The lateral surface is cut into `layers` bands. Band `k` runs between ring
//! `k` and ring `k + 1`. Ring `k` has radius `radius * (1 - k / layers)`, so
//! the last ring collapses to the apex and the top band becomes a fan.

use crate::sink::TriangleSink;
use crate::vertex::Vertex;
use config::constants::{clamp_subdivisions, CONE_HEIGHT, MIN_CONE_DISC, MIN_CONE_LAYERS};
use glam::DVec3;
use std::f64::consts::TAU;
use tracing::debug;

/// Number of triangles emitted for (clamped) radial and layer counts.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::cone::cone_triangle_count;
///
/// assert_eq!(cone_triangle_count(4, 2), 16);
/// assert_eq!(cone_triangle_count(3, 1), 6);
/// ```
pub fn cone_triangle_count(disc: u32, layers: u32) -> usize {
    let disc = disc.max(MIN_CONE_DISC) as usize;
    let layers = layers.max(MIN_CONE_LAYERS) as usize;
    2 * disc * (layers - 1) + 2 * disc
}

/// Unit directions in the xz plane, `TAU / disc` apart.
///
/// Angles advance counter-clockwise when seen from `+y`, starting on `+z`.
fn ring_directions(disc: u32) -> Vec<(f64, f64)> {
    let step = TAU / f64::from(disc);
    (0..disc)
        .map(|j| (step * f64::from(j)).sin_cos())
        .collect()
}

/// Points of ring `layer` out of `layers`.
///
/// Ring 0 is the base ring and uses `radius` exactly.
fn ring(directions: &[(f64, f64)], radius: f64, layer: u32, layers: u32) -> Vec<Vertex> {
    let t = f64::from(layer) / f64::from(layers);
    let r = if layer == 0 { radius } else { radius * (1.0 - t) };
    let y = -CONE_HEIGHT / 2.0 + CONE_HEIGHT * t;

    directions
        .iter()
        .map(|&(sin, cos)| Vertex::new(r * sin, y, r * cos))
        .collect()
}

/// Emits a cone of base radius `radius` and unit height.
///
/// # Arguments
///
/// * `sink` - Receives every triangle
/// * `radius` - Radius of the base disc. Not validated.
/// * `disc` - Radial subdivisions. Clamped to at least 3.
/// * `layers` - Subdivisions along the height. Clamped to at least 1.
///
/// Emits the lateral bands from the base upward, then the apex fan, then the
/// base disc.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_cone, TriangleCounter};
///
/// let mut counter = TriangleCounter::new();
/// create_cone(&mut counter, 1.0, 4, 2);
/// assert_eq!(counter.count(), 16);
/// ```
pub fn create_cone<S: TriangleSink + ?Sized>(sink: &mut S, radius: f64, disc: i32, layers: i32) {
    let disc_clamped = clamp_subdivisions(disc, MIN_CONE_DISC);
    let layers_clamped = clamp_subdivisions(layers, MIN_CONE_LAYERS);
    if i64::from(disc_clamped) != i64::from(disc) || i64::from(layers_clamped) != i64::from(layers)
    {
        debug!(
            disc,
            layers,
            disc_clamped,
            layers_clamped,
            "cone subdivisions clamped"
        );
    }
    let (disc, layers) = (disc_clamped, layers_clamped);

    let directions = ring_directions(disc);
    let segments = disc as usize;
    let base = ring(&directions, radius, 0, layers);

    // Lateral quads between rings that have not yet collapsed.
    let mut lower = base.clone();
    for layer in 1..layers {
        let upper = ring(&directions, radius, layer, layers);
        for j in 0..segments {
            let next = (j + 1) % segments;
            let (b0, b1) = (lower[j], lower[next]);
            let (t0, t1) = (upper[j], upper[next]);

            sink.emit_triangle(b0, b1, t1);
            sink.emit_triangle(b0, t1, t0);
        }
        lower = upper;
    }

    // Apex fan from the last open ring.
    let apex = Vertex::from(DVec3::new(0.0, CONE_HEIGHT / 2.0, 0.0));
    for j in 0..segments {
        let next = (j + 1) % segments;
        sink.emit_triangle(lower[j], lower[next], apex);
    }

    // Base disc, facing -y.
    let center = Vertex::from(DVec3::new(0.0, -CONE_HEIGHT / 2.0, 0.0));
    for j in 0..segments {
        let next = (j + 1) % segments;
        sink.emit_triangle(center, base[next], base[j]);
    }
}
