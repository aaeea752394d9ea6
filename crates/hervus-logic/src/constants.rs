//! Game constants: radii, speeds and docking rules.
//!
//! Values mirror the Halite II engine. Tunables the navigator is allowed to
//! vary live in [`crate::config::NavigationConfig`]; these are its defaults.

/// Radius of every ship.
pub const SHIP_RADIUS: f64 = 0.5;

/// Maximum thrust magnitude accepted by the engine.
pub const MAX_SPEED: u32 = 7;

/// Extra clearance from a planet's surface within which a ship may dock.
pub const DOCK_RADIUS: f64 = 4.0;

/// Clearance added to obstacle radii by the collision forecast.
pub const FORECAST_FUDGE_FACTOR: f64 = SHIP_RADIUS + 0.1;

/// Ceiling on heading corrections per navigation search.
pub const MAX_NAVIGATION_CORRECTIONS: u32 = 90;

/// Distance kept from a planet's surface when aiming at it.
pub const MIN_DISTANCE_FOR_CLOSEST_POINT: f64 = 3.0;

/// One degree, the default angular step of a correction.
pub const ONE_DEGREE_RAD: f64 = std::f64::consts::PI / 180.0;
