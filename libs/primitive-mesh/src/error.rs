//! # Mesh Errors
//!
//! Error types for shape selection and mesh auditing.
//!
//! Generation itself never fails: sub-minimum parameters are clamped and an
//! unrecognized selector falls back to the cube. These errors surface only
//! from fallible conversions and from [`crate::Mesh::check_closed`].

use thiserror::Error;

/// Errors produced by shape conversions and mesh audits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Selector does not name a known shape
    #[error("Unknown shape '{0}'")]
    UnknownShape(i32),

    /// Shape name does not match any known shape
    #[error("Unknown shape name '{0}'")]
    UnknownShapeName(String),

    /// An edge is not shared by exactly two triangles
    #[error("Mesh is not closed: {message}")]
    NotClosed {
        /// Description of the offending edge
        message: String,
    },

    /// Two triangles traverse a shared edge in the same direction
    #[error("Inconsistent winding: {message}")]
    InconsistentWinding {
        /// Description of the offending edge
        message: String,
    },
}

impl MeshError {
    /// Creates a not-closed error.
    pub fn not_closed(message: impl Into<String>) -> Self {
        Self::NotClosed {
            message: message.into(),
        }
    }

    /// Creates an inconsistent winding error.
    pub fn inconsistent_winding(message: impl Into<String>) -> Self {
        Self::InconsistentWinding {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
