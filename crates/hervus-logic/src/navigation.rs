//! Bounded angular search for a collision-free heading.
//!
//! Algorithm: "pivot the aim point"
//! 1. Aim straight at the target
//! 2. If anything blocks the segment ship→aim, rotate the aim point around
//!    the ship by one angular step at the same distance
//! 3. Repeat until the segment is clear or the correction budget runs out
//! 4. Thrust `min(max_thrust, floor(distance))` along the clear bearing
//!
//! A single search only ever turns one way. Dock approach runs it twice
//! with opposite steps and ranks the two results.

use crate::collision::CollisionDetector;
use crate::config::NavigationConfig;
use crate::entity::{Entity, Ship};
use crate::geometry::{angle_rad_to_deg_clipped, heading_deviation, Location};
use crate::map::GameMap;
use crate::moves::Move;
use log::{debug, trace};

/// A ship's preferred move toward a dock target and its alternative.
///
/// `fallback` is `Noop` when there is no meaningfully different second
/// option. `primary` is `Noop` only when neither search found a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DockApproach {
    pub primary: Move,
    pub fallback: Move,
}

impl DockApproach {
    pub fn into_pair(self) -> (Move, Move) {
        (self.primary, self.fallback)
    }
}

/// Heading search over a read-only snapshot.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigationConfig,
    detector: CollisionDetector,
}

impl Navigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            detector: CollisionDetector::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Find a thrust toward `target` whose straight path is unobstructed.
    ///
    /// Each blocked attempt consumes one of `max_corrections` and pivots the
    /// aim point by `angular_step_rad` (sign picks the turning direction).
    /// Returns `Noop` when the budget is exhausted, including a zero budget.
    #[allow(clippy::too_many_arguments)]
    pub fn navigate_towards(
        &self,
        map: &GameMap,
        ship: &Ship,
        target: &Location,
        max_thrust: u32,
        avoid_obstacles: bool,
        max_corrections: u32,
        angular_step_rad: f64,
    ) -> Move {
        let origin = ship.location;
        let mut aim = *target;

        for correction in 0..max_corrections {
            let distance = origin.distance_to(&aim);
            let angle_rad = origin.orient_towards_in_rad(&aim);

            if avoid_obstacles && self.detector.is_blocked(map, &origin, &aim) {
                trace!(
                    "ship {}: path to {} blocked, correction {}/{}",
                    ship.id,
                    aim,
                    correction + 1,
                    max_corrections
                );
                aim = origin.project(angle_rad + angular_step_rad, distance);
                continue;
            }

            // Truncate: rounding up could overshoot into the margin we kept.
            let thrust = if distance < f64::from(max_thrust) {
                distance as u32
            } else {
                max_thrust
            };
            return Move::thrust(ship.id, thrust, angle_rad_to_deg_clipped(angle_rad));
        }

        debug!(
            "ship {}: no clear heading toward {} within {} corrections",
            ship.id, target, max_corrections
        );
        Move::Noop
    }

    /// Approach `dock_target`'s surface, searching left and right.
    ///
    /// The aim point is the spot facing the ship at `dock_approach_margin`
    /// beyond the target's radius, so the ship never steers through the
    /// target itself.
    pub fn navigate_to_dock<E: Entity + ?Sized>(
        &self,
        map: &GameMap,
        ship: &Ship,
        dock_target: &E,
        max_thrust: u32,
    ) -> DockApproach {
        let aim = ship.location.closest_point(
            &dock_target.location(),
            dock_target.radius(),
            self.config.dock_approach_margin,
        );
        let corrections = self.config.max_navigation_corrections;
        let step = self.config.angular_step_radians.abs();

        let left = self.navigate_towards(map, ship, &aim, max_thrust, true, corrections, step);
        let right = self.navigate_towards(map, ship, &aim, max_thrust, true, corrections, -step);

        let ideal_deg = angle_rad_to_deg_clipped(ship.location.orient_towards_in_rad(&aim));
        let approach = rank_candidates(left, right, ideal_deg);
        debug!(
            "ship {} -> entity {}: primary [{}] fallback [{}]",
            ship.id,
            dock_target.id(),
            approach.primary,
            approach.fallback
        );
        approach
    }
}

/// Order two search results for the same ship.
///
/// 1. A thrust beats a `Noop`
/// 2. Identical thrusts collapse to one, with a `Noop` fallback
/// 3. Otherwise the heading closer to `ideal_deg` wins; ties keep `first`
pub fn rank_candidates(first: Move, second: Move, ideal_deg: u16) -> DockApproach {
    match (first, second) {
        (Move::Noop, other) | (other, Move::Noop) => {
            return DockApproach {
                primary: other,
                fallback: Move::Noop,
            }
        }
        _ => {}
    }

    if first.same_thrust(&second) {
        return DockApproach {
            primary: first,
            fallback: Move::Noop,
        };
    }

    if deviation(&second, ideal_deg) < deviation(&first, ideal_deg) {
        DockApproach {
            primary: second,
            fallback: first,
        }
    } else {
        DockApproach {
            primary: first,
            fallback: second,
        }
    }
}

fn deviation(candidate: &Move, ideal_deg: u16) -> u16 {
    match candidate {
        Move::Thrust { angle_deg, .. } => heading_deviation(*angle_deg, ideal_deg),
        _ => u16::MAX,
    }
}
