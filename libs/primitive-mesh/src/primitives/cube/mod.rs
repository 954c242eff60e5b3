//! # Cube Primitive
//!
//! Tessellates an axis-aligned cube centered at the origin. Every face is cut
//! into a `factor × factor` grid of quads and each quad into two triangles.

use crate::primitives::grid::subdivisions;
use crate::sink::TriangleSink;
use crate::vertex::Vertex;
use config::constants::{clamp_subdivisions, MIN_CUBE_FACTOR};
use glam::DVec3;
use tracing::debug;

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Which of a face pair is being emitted, relative to its constant axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Face at `+radius`, facing along the positive axis.
    Positive,
    /// Face at `-radius`, facing along the negative axis. Winding is reversed.
    Negative,
}

impl Side {
    /// Both sides in emission order.
    pub const BOTH: [Side; 2] = [Side::Positive, Side::Negative];

    /// Returns `1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Positive => 1.0,
            Side::Negative => -1.0,
        }
    }
}

/// Two opposite faces sharing a constant axis.
///
/// Grid columns run along `col` and rows along `row`. `aligned` records
/// whether `col × row` points along `+normal`.
#[derive(Debug, Clone, Copy)]
struct FacePair {
    col: usize,
    row: usize,
    normal: usize,
    aligned: bool,
}

const FACE_PAIRS: [FacePair; 3] = [
    // Front / back
    FacePair { col: X, row: Y, normal: Z, aligned: true },
    // Top / bottom
    FacePair { col: X, row: Z, normal: Y, aligned: false },
    // Left / right
    FacePair { col: Z, row: Y, normal: X, aligned: false },
];

/// Corner indices of a cell, counter-clockwise in the `(col, row)` plane.
///
/// Corners are numbered `0 = (lo, lo)`, `1 = (hi, lo)`, `2 = (lo, hi)`,
/// `3 = (hi, hi)` as `(col, row)`.
const CCW_CELL: [[usize; 3]; 2] = [[1, 3, 0], [3, 2, 0]];

/// Corner indices of a cell, clockwise in the `(col, row)` plane.
const CW_CELL: [[usize; 3]; 2] = [[0, 2, 1], [2, 3, 1]];

/// Number of triangles emitted for a (clamped) factor.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::cube::cube_triangle_count;
///
/// assert_eq!(cube_triangle_count(1), 12);
/// assert_eq!(cube_triangle_count(2), 48);
/// ```
pub fn cube_triangle_count(factor: u32) -> usize {
    let factor = factor.max(MIN_CUBE_FACTOR) as usize;
    12 * factor * factor
}

/// Emits a cube of half-extent `radius` centered at the origin.
///
/// # Arguments
///
/// * `sink` - Receives every triangle
/// * `radius` - Distance of each face from the origin. Not validated.
/// * `factor` - Subdivisions along each edge of each face. Clamped to at
///   least 1.
///
/// Cells are visited row by row. Each cell emits its quad on every face in
/// the order front, back, top, bottom, left (+x), right (-x).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{create_cube, Triangle};
///
/// let mut tris: Vec<Triangle> = Vec::new();
/// create_cube(&mut tris, 1.0, 2);
/// assert_eq!(tris.len(), 48);
/// ```
pub fn create_cube<S: TriangleSink + ?Sized>(sink: &mut S, radius: f64, factor: i32) {
    let clamped = clamp_subdivisions(factor, MIN_CUBE_FACTOR);
    if i64::from(clamped) != i64::from(factor) {
        debug!(requested = factor, clamped, "cube factor clamped");
    }

    let subs = subdivisions(radius, clamped);

    for rows in subs.windows(2) {
        for cols in subs.windows(2) {
            let cell = [
                (cols[0], rows[0]),
                (cols[1], rows[0]),
                (cols[0], rows[1]),
                (cols[1], rows[1]),
            ];
            for pair in FACE_PAIRS {
                for side in Side::BOTH {
                    emit_cell(sink, cell, pair, side, radius);
                }
            }
        }
    }
}

/// Emits one grid cell on one face of a face pair.
fn emit_cell<S: TriangleSink + ?Sized>(
    sink: &mut S,
    cell: [(f64, f64); 4],
    pair: FacePair,
    side: Side,
    radius: f64,
) {
    let level = side.sign() * radius;
    let corners = cell.map(|(c, r)| {
        let mut position = DVec3::ZERO;
        position[pair.col] = c;
        position[pair.row] = r;
        position[pair.normal] = level;
        Vertex::from(position)
    });

    let pattern = if pair.aligned == (side == Side::Positive) {
        CCW_CELL
    } else {
        CW_CELL
    };
    for [a, b, c] in pattern {
        sink.emit_triangle(corners[a], corners[b], corners[c]);
    }
}
