//! Centralized configuration values shared across the tessellation workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that the generators can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when auditing generated geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// SUBDIVISION LIMITS
// =============================================================================

/// Smallest cube subdivision factor: one quad per face.
///
/// # Examples
/// ```
/// use config::constants::MIN_CUBE_FACTOR;
/// assert_eq!(MIN_CUBE_FACTOR, 1);
/// ```
pub const MIN_CUBE_FACTOR: u32 = 1;

/// Smallest radial subdivision count for the cone. Fewer than three points
/// cannot enclose a base.
///
/// # Examples
/// ```
/// use config::constants::MIN_CONE_DISC;
/// assert_eq!(MIN_CONE_DISC, 3);
/// ```
pub const MIN_CONE_DISC: u32 = 3;

/// Smallest number of height layers for the cone.
///
/// # Examples
/// ```
/// use config::constants::MIN_CONE_LAYERS;
/// assert_eq!(MIN_CONE_LAYERS, 1);
/// ```
pub const MIN_CONE_LAYERS: u32 = 1;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Total height of the cone. The cone is centered on the origin, so its base
/// sits at `-CONE_HEIGHT / 2` and its apex at `+CONE_HEIGHT / 2`.
///
/// # Examples
/// ```
/// use config::constants::CONE_HEIGHT;
/// assert_eq!(CONE_HEIGHT / 2.0, 0.5);
/// ```
pub const CONE_HEIGHT: f64 = 1.0;

/// Reserved homogeneous component carried by every emitted vertex.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_W;
/// assert_eq!(VERTEX_W, 0.0);
/// ```
pub const VERTEX_W: f64 = 0.0;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default size parameter (cube half-extent, cone base radius).
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Default cube subdivision factor.
pub const DEFAULT_CUBE_FACTOR: u32 = 1;

/// Default cone radial subdivision count.
pub const DEFAULT_CONE_DISC: u32 = 10;

/// Default cone height layer count.
pub const DEFAULT_CONE_LAYERS: u32 = 1;

// =============================================================================
// HELPERS
// =============================================================================

/// Raises a caller-supplied subdivision count to `min`.
///
/// Zero and negative counts are normalized rather than rejected.
///
/// # Examples
/// ```
/// use config::constants::{clamp_subdivisions, MIN_CUBE_FACTOR};
/// assert_eq!(clamp_subdivisions(-4, MIN_CUBE_FACTOR), 1);
/// assert_eq!(clamp_subdivisions(0, MIN_CUBE_FACTOR), 1);
/// assert_eq!(clamp_subdivisions(5, MIN_CUBE_FACTOR), 5);
/// ```
#[inline]
pub fn clamp_subdivisions(value: i32, min: u32) -> u32 {
    u32::try_from(value).map_or(min, |v| v.max(min))
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of default tessellation settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.radius > 0.0);
/// assert!(config.cone_disc >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Default size parameter.
    pub radius: f64,
    /// Default cube subdivision factor.
    pub cube_factor: u32,
    /// Default cone radial subdivisions.
    pub cone_disc: u32,
    /// Default cone height layers.
    pub cone_layers: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// defaults.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0, 4, 16, 3).expect("valid config");
    /// assert_eq!(cfg.cone_disc, 16);
    /// ```
    pub fn new(
        radius: f64,
        cube_factor: u32,
        cone_disc: u32,
        cone_layers: u32,
    ) -> Result<Self, ConfigError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if cube_factor < MIN_CUBE_FACTOR {
            return Err(ConfigError::InvalidCubeFactor(cube_factor));
        }
        if cone_disc < MIN_CONE_DISC {
            return Err(ConfigError::InvalidConeDisc(cone_disc));
        }
        if cone_layers < MIN_CONE_LAYERS {
            return Err(ConfigError::InvalidConeLayers(cone_layers));
        }
        Ok(Self {
            radius,
            cube_factor,
            cone_disc,
            cone_layers,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            cube_factor: DEFAULT_CUBE_FACTOR,
            cone_disc: DEFAULT_CONE_DISC,
            cone_layers: DEFAULT_CONE_LAYERS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the default radius is zero, negative, or NaN.
    InvalidRadius(f64),
    /// Raised when the default cube factor is below one.
    InvalidCubeFactor(u32),
    /// Raised when the default radial count cannot form a base polygon.
    InvalidConeDisc(u32),
    /// Raised when the default layer count is zero.
    InvalidConeLayers(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive: {value}")
            }
            ConfigError::InvalidCubeFactor(value) => {
                write!(f, "cube_factor must be >= {MIN_CUBE_FACTOR}: {value}")
            }
            ConfigError::InvalidConeDisc(value) => {
                write!(f, "cone_disc must be >= {MIN_CONE_DISC}: {value}")
            }
            ConfigError::InvalidConeLayers(value) => {
                write!(f, "cone_layers must be >= {MIN_CONE_LAYERS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
