//! Ships, planets, and the capability they share as obstacles.
//!
//! Collision code only ever sees [`Entity`]: an id, a centre and a radius.
//! [`Obstacle`] is the tagged form handed back from blocker scans so callers
//! can still tell a planet from a ship when they log it.

use crate::constants::{DOCK_RADIUS, SHIP_RADIUS};
use crate::geometry::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EntityId = u32;
pub type PlayerId = u32;

/// Anything occupying a disk on the field.
pub trait Entity {
    fn id(&self) -> EntityId;
    fn location(&self) -> Location;
    fn radius(&self) -> f64;
}

/// Docking state of a ship. Wire codes are 0..=3 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DockingStatus {
    Undocked,
    Docking,
    Docked,
    Undocking,
}

impl DockingStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Undocked),
            1 => Some(Self::Docking),
            2 => Some(Self::Docked),
            3 => Some(Self::Undocking),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DockingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Undocked => "undocked",
            Self::Docking => "docking",
            Self::Docked => "docked",
            Self::Undocking => "undocking",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    pub owner: PlayerId,
    pub location: Location,
    pub radius: f64,
    pub health: u32,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub docking_status: DockingStatus,
    /// Only meaningful while not undocked.
    pub docked_planet: EntityId,
    pub docking_progress: u32,
    pub weapon_cooldown: u32,
}

impl Ship {
    /// An undocked ship with default radius and no velocity.
    pub fn new(id: EntityId, owner: PlayerId, location: Location) -> Self {
        Self {
            id,
            owner,
            location,
            radius: SHIP_RADIUS,
            health: 255,
            velocity_x: 0.0,
            velocity_y: 0.0,
            docking_status: DockingStatus::Undocked,
            docked_planet: 0,
            docking_progress: 0,
            weapon_cooldown: 0,
        }
    }

    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }

    /// Whether the engine would accept a dock command toward `planet` now.
    pub fn can_dock(&self, planet: &Planet) -> bool {
        self.location.distance_to(&planet.location) <= SHIP_RADIUS + DOCK_RADIUS + planet.radius
    }
}

impl Entity for Ship {
    fn id(&self) -> EntityId {
        self.id
    }
    fn location(&self) -> Location {
        self.location
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: EntityId,
    pub location: Location,
    pub radius: f64,
    pub health: u32,
    pub docking_spots: u32,
    pub current_production: u32,
    pub remaining_production: u32,
    /// `None` while unowned.
    pub owner: Option<PlayerId>,
    pub docked_ships: Vec<EntityId>,
}

impl Planet {
    /// An unowned planet with nothing docked.
    pub fn new(id: EntityId, location: Location, radius: f64, docking_spots: u32) -> Self {
        Self {
            id,
            location,
            radius,
            health: 1000,
            docking_spots,
            current_production: 0,
            remaining_production: 1000,
            owner: None,
            docked_ships: Vec::new(),
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_full(&self) -> bool {
        self.docked_ships.len() as u32 >= self.docking_spots
    }
}

impl Entity for Planet {
    fn id(&self) -> EntityId {
        self.id
    }
    fn location(&self) -> Location {
        self.location
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// A borrowed entity found in the way of a path.
#[derive(Debug, Clone, Copy)]
pub enum Obstacle<'a> {
    Planet(&'a Planet),
    Ship(&'a Ship),
}

impl Entity for Obstacle<'_> {
    fn id(&self) -> EntityId {
        match self {
            Obstacle::Planet(p) => p.id,
            Obstacle::Ship(s) => s.id,
        }
    }
    fn location(&self) -> Location {
        match self {
            Obstacle::Planet(p) => p.location,
            Obstacle::Ship(s) => s.location,
        }
    }
    fn radius(&self) -> f64 {
        match self {
            Obstacle::Planet(p) => p.radius,
            Obstacle::Ship(s) => s.radius,
        }
    }
}

impl fmt::Display for Obstacle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obstacle::Planet(p) => write!(f, "planet {}", p.id),
            Obstacle::Ship(s) => write!(f, "ship {} (player {})", s.id, s.owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docking_codes_round_trip() {
        for code in 0..4 {
            let status = DockingStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(DockingStatus::from_code(4), None);
        assert_eq!(DockingStatus::Undocking.to_string(), "undocking");
    }

    #[test]
    fn can_dock_within_surface_plus_dock_radius() {
        let planet = Planet::new(0, Location::new(0.0, 0.0), 3.0, 2);
        // reach = 0.5 + 4.0 + 3.0
        let near = Ship::new(1, 0, Location::new(7.5, 0.0));
        let far = Ship::new(2, 0, Location::new(7.6, 0.0));
        assert!(near.can_dock(&planet));
        assert!(!far.can_dock(&planet));
    }

    #[test]
    fn planet_fills_up() {
        let mut planet = Planet::new(0, Location::new(0.0, 0.0), 3.0, 2);
        assert!(!planet.is_full());
        planet.docked_ships = vec![4, 5];
        assert!(planet.is_full());
    }

    #[test]
    fn ownership_follows_owner_field() {
        let mut planet = Planet::new(0, Location::new(0.0, 0.0), 3.0, 2);
        assert!(!planet.is_owned());
        planet.owner = Some(0);
        assert!(planet.is_owned());
    }

    #[test]
    fn obstacle_exposes_uniform_capability() {
        let planet = Planet::new(3, Location::new(1.0, 2.0), 4.0, 1);
        let ship = Ship::new(9, 1, Location::new(5.0, 5.0));
        let obstacles = [Obstacle::Planet(&planet), Obstacle::Ship(&ship)];
        let radii: Vec<f64> = obstacles.iter().map(|o| o.radius()).collect();
        assert_eq!(radii, vec![4.0, SHIP_RADIUS]);
        assert_eq!(obstacles[1].id(), 9);
        assert_eq!(obstacles[0].to_string(), "planet 3");
    }
}
