//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the default snapshot passes its own validation.
#[test]
fn default_config_is_valid() {
    let cfg = GlobalConfig::default();
    let rebuilt = GlobalConfig::new(cfg.radius, cfg.cube_factor, cfg.cone_disc, cfg.cone_layers);
    assert_eq!(rebuilt, Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 1, 3, 1).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 1, 3, 1).unwrap_err(),
        ConfigError::InvalidRadius(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0, 0, 3, 1).unwrap_err(),
        ConfigError::InvalidCubeFactor(0)
    );
    assert_eq!(
        GlobalConfig::new(1.0, 1, 2, 1).unwrap_err(),
        ConfigError::InvalidConeDisc(2)
    );
    assert_eq!(
        GlobalConfig::new(1.0, 1, 3, 0).unwrap_err(),
        ConfigError::InvalidConeLayers(0)
    );
}

#[test]
fn new_rejects_nan_radius() {
    assert!(matches!(
        GlobalConfig::new(f64::NAN, 1, 3, 1),
        Err(ConfigError::InvalidRadius(_))
    ));
}

#[test]
fn error_messages_name_the_field() {
    let msg = ConfigError::InvalidConeDisc(2).to_string();
    assert!(msg.contains("cone_disc"));
    assert!(msg.contains('2'));
}
