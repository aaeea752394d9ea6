//! Navigation tunables.
//!
//! The navigator never reads global constants directly: every knob it turns
//! arrives through a [`NavigationConfig`] handed over at construction. The
//! defaults reproduce the engine's recommended values.
//!
//! ```
//! use hervus_logic::config::{validate_config, NavigationConfig};
//!
//! let mut config = NavigationConfig::default();
//! config.max_navigation_corrections = 45;
//! assert!(validate_config(&config).is_empty());
//! ```

use crate::constants::{
    FORECAST_FUDGE_FACTOR, MAX_NAVIGATION_CORRECTIONS, MAX_SPEED, MIN_DISTANCE_FOR_CLOSEST_POINT,
    ONE_DEGREE_RAD,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Immutable settings shared by the collision detector and the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Upper bound on thrust magnitude.
    pub max_speed: u32,
    /// Clearance added to every obstacle's radius.
    pub forecast_fudge_factor: f64,
    /// Heading corrections allowed per search before giving up.
    pub max_navigation_corrections: u32,
    /// Magnitude of one correction; dock approach searches both signs.
    pub angular_step_radians: f64,
    /// Distance kept from a dock target's surface when aiming at it.
    pub dock_approach_margin: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            forecast_fudge_factor: FORECAST_FUDGE_FACTOR,
            max_navigation_corrections: MAX_NAVIGATION_CORRECTIONS,
            angular_step_radians: ONE_DEGREE_RAD,
            dock_approach_margin: MIN_DISTANCE_FOR_CLOSEST_POINT,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_speed must be positive")]
    ZeroSpeed,
    /// Above the engine's cap the engine rejects the move outright.
    #[error("max_speed {0} exceeds the engine limit of {limit}", limit = MAX_SPEED)]
    SpeedAboveEngineLimit(u32),
    #[error("forecast_fudge_factor must be a finite non-negative number, got {0}")]
    InvalidFudgeFactor(f64),
    #[error("max_navigation_corrections must be positive")]
    ZeroCorrections,
    #[error("angular_step_radians must be finite and non-zero, got {0}")]
    InvalidAngularStep(f64),
    /// A step of half a turn or more makes the two dock searches overlap.
    #[error("angular_step_radians {0} must be smaller than half a turn")]
    AngularStepTooLarge(f64),
    #[error("dock_approach_margin must be a finite non-negative number, got {0}")]
    InvalidDockMargin(f64),
}

/// Validate a navigation configuration, returning all errors found.
pub fn validate_config(config: &NavigationConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.max_speed == 0 {
        errors.push(ConfigError::ZeroSpeed);
    }
    if config.max_speed > MAX_SPEED {
        errors.push(ConfigError::SpeedAboveEngineLimit(config.max_speed));
    }
    if !config.forecast_fudge_factor.is_finite() || config.forecast_fudge_factor < 0.0 {
        errors.push(ConfigError::InvalidFudgeFactor(config.forecast_fudge_factor));
    }
    if config.max_navigation_corrections == 0 {
        errors.push(ConfigError::ZeroCorrections);
    }

    let step = config.angular_step_radians;
    if !step.is_finite() || step == 0.0 {
        errors.push(ConfigError::InvalidAngularStep(step));
    } else if step.abs() >= PI {
        errors.push(ConfigError::AngularStepTooLarge(step));
    }

    if !config.dock_approach_margin.is_finite() || config.dock_approach_margin < 0.0 {
        errors.push(ConfigError::InvalidDockMargin(config.dock_approach_margin));
    }

    errors
}
