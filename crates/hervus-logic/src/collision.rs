//! Segment vs. inflated-disk obstruction test.
//!
//! A path is the straight segment a ship would fly this turn. An obstacle
//! blocks it when the segment comes within `radius + fudge` of the
//! obstacle's centre. Entities sitting exactly on either endpoint are the
//! traveller itself or its destination and never block.

use crate::config::NavigationConfig;
use crate::entity::{Entity, Obstacle};
use crate::geometry::Location;
use crate::map::GameMap;

/// Stateless obstruction checks with a fixed clearance margin.
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector {
    fudge_factor: f64,
}

impl CollisionDetector {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            fudge_factor: config.forecast_fudge_factor,
        }
    }

    /// Every entity on `map` that blocks the segment `start`→`target`.
    ///
    /// Planets come first, then ships in player order. Callers only test the
    /// result for emptiness.
    pub fn find_blockers<'a>(
        &self,
        map: &'a GameMap,
        start: &Location,
        target: &Location,
    ) -> Vec<Obstacle<'a>> {
        map.obstacles()
            .filter(|o| intersects(start, target, o, self.fudge_factor))
            .collect()
    }

    /// Whether anything on `map` blocks the segment. Stops at the first hit.
    pub fn is_blocked(&self, map: &GameMap, start: &Location, target: &Location) -> bool {
        map.obstacles()
            .any(|o| intersects(start, target, &o, self.fudge_factor))
    }
}

/// Whether the segment `start`→`target` passes within `radius + fudge` of
/// `obstacle`'s centre.
///
/// The closest point is clamped to the segment, so an obstacle behind
/// `start` or beyond `target` only counts if it overlaps the endpoint
/// itself. Direction does not matter: swapping `start` and `target` gives
/// the same answer.
pub fn intersects<E: Entity + ?Sized>(
    start: &Location,
    target: &Location,
    obstacle: &E,
    fudge_factor: f64,
) -> bool {
    let center = obstacle.location();
    if center == *start || center == *target {
        return false;
    }

    let reach = obstacle.radius() + fudge_factor;
    distance_to_segment(start, target, &center) <= reach
}

/// Distance from `point` to the closed segment `start`→`end`.
fn distance_to_segment(start: &Location, end: &Location, point: &Location) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return start.distance_to(point);
    }

    // Parameter of the perpendicular foot along start→end
    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Location::new(start.x + dx * t, start.y + dy * t);
    closest.distance_to(point)
}
