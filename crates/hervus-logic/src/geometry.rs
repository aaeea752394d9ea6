//! Plane geometry on the playing field.
//!
//! Angles are radians internally and whole degrees on the wire. Bearings are
//! measured counter-clockwise from the +x axis, as the engine measures them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point in continuous field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing from `self` toward `target`, in `[π, 3π]`.
    ///
    /// The result is shifted by a full turn so it is never negative; callers
    /// that need a canonical heading go through [`angle_rad_to_deg_clipped`].
    pub fn orient_towards_in_rad(&self, target: &Location) -> f64 {
        (target.y - self.y).atan2(target.x - self.x) + 2.0 * PI
    }

    /// Point at `distance` from `self` along `angle_rad`.
    pub fn project(&self, angle_rad: f64, distance: f64) -> Location {
        Location {
            x: self.x + angle_rad.cos() * distance,
            y: self.y + angle_rad.sin() * distance,
        }
    }

    /// Point on the circle of `target_radius + margin` around `target` that
    /// faces `self`.
    ///
    /// This is where a ship aims when approaching a planet: close enough to
    /// dock from, far enough that the straight path never grazes the surface.
    pub fn closest_point(&self, target: &Location, target_radius: f64, margin: f64) -> Location {
        let angle_rad = target.orient_towards_in_rad(self);
        target.project(angle_rad, target_radius + margin)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Convert radians to whole degrees in `[0, 360)`.
///
/// Rounds half away from zero before wrapping, so 359.5° becomes 0.
pub fn angle_rad_to_deg_clipped(angle_rad: f64) -> u16 {
    let deg_unclipped = angle_rad.to_degrees().round() as i64;
    deg_unclipped.rem_euclid(360) as u16
}

/// Smallest absolute difference between two headings, in `[0, 180]`.
pub fn heading_deviation(a_deg: u16, b_deg: u16) -> u16 {
    let d = (i32::from(a_deg) - i32::from(b_deg)).rem_euclid(360);
    d.min(360 - d) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Location::new(1.0, 1.0);
        let b = Location::new(4.0, 5.0);
        assert!(close(a.distance_to(&b), 5.0));
        assert!(close(b.distance_to(&a), 5.0));
    }

    #[test]
    fn bearing_is_never_negative() {
        let origin = Location::new(0.0, 0.0);
        let below = Location::new(0.0, -3.0);
        let rad = origin.orient_towards_in_rad(&below);
        assert!(rad > 0.0, "rad={rad}");
        assert_eq!(angle_rad_to_deg_clipped(rad), 270);
    }

    #[test]
    fn cardinal_bearings() {
        let o = Location::new(10.0, 10.0);
        assert_eq!(
            angle_rad_to_deg_clipped(o.orient_towards_in_rad(&Location::new(20.0, 10.0))),
            0
        );
        assert_eq!(
            angle_rad_to_deg_clipped(o.orient_towards_in_rad(&Location::new(10.0, 20.0))),
            90
        );
        assert_eq!(
            angle_rad_to_deg_clipped(o.orient_towards_in_rad(&Location::new(0.0, 10.0))),
            180
        );
    }

    #[test]
    fn clipping_wraps_and_rounds() {
        assert_eq!(angle_rad_to_deg_clipped(0.0), 0);
        assert_eq!(angle_rad_to_deg_clipped(-PI / 2.0), 270);
        assert_eq!(angle_rad_to_deg_clipped(4.0 * PI + PI / 4.0), 45);
        assert_eq!(angle_rad_to_deg_clipped(359.6_f64.to_radians()), 0);
        assert_eq!(angle_rad_to_deg_clipped(10.4_f64.to_radians()), 10);
    }

    #[test]
    fn deviation_takes_the_short_way_round() {
        assert_eq!(heading_deviation(10, 5), 5);
        assert_eq!(heading_deviation(350, 5), 15);
        assert_eq!(heading_deviation(5, 350), 15);
        assert_eq!(heading_deviation(0, 180), 180);
        assert_eq!(heading_deviation(90, 90), 0);
    }

    #[test]
    fn closest_point_sits_outside_the_target() {
        let ship = Location::new(0.0, 0.0);
        let planet = Location::new(20.0, 0.0);
        let p = ship.closest_point(&planet, 5.0, 3.0);
        assert!(close(p.x, 12.0), "p={p}");
        assert!(close(p.y, 0.0), "p={p}");
        assert!(close(p.distance_to(&planet), 8.0));
    }

    #[test]
    fn project_round_trips_bearing() {
        let o = Location::new(3.0, -2.0);
        let p = o.project(1.0, 10.0);
        assert!(close(o.distance_to(&p), 10.0));
        assert!(close(o.orient_towards_in_rad(&p) - 2.0 * PI, 1.0));
    }
}
