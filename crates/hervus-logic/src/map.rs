//! Per-turn snapshot of the field.

use crate::entity::{EntityId, Obstacle, Planet, PlayerId, Ship};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine told us this turn. Read-only once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
    /// player id → that player's ships, ordered by player id.
    pub ships: BTreeMap<PlayerId, Vec<Ship>>,
    pub planets: Vec<Planet>,
}

impl GameMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Add a ship under its owner.
    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.entry(ship.owner).or_default().push(ship);
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }

    pub fn player_count(&self) -> usize {
        self.ships.len()
    }

    /// Ships of `player`, empty if the player is unknown.
    pub fn ships_of(&self, player: PlayerId) -> &[Ship] {
        self.ships.get(&player).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn all_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values().flatten()
    }

    pub fn planet(&self, id: EntityId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Every entity that can block a path: planets first, then all ships of
    /// every player.
    pub fn obstacles(&self) -> impl Iterator<Item = Obstacle<'_>> {
        self.planets
            .iter()
            .map(Obstacle::Planet)
            .chain(self.all_ships().map(Obstacle::Ship))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::geometry::Location;

    fn sample() -> GameMap {
        let mut map = GameMap::new(240, 160);
        map.add_ship(Ship::new(0, 0, Location::new(10.0, 10.0)));
        map.add_ship(Ship::new(1, 0, Location::new(12.0, 10.0)));
        map.add_ship(Ship::new(2, 1, Location::new(200.0, 150.0)));
        map.add_planet(Planet::new(0, Location::new(100.0, 80.0), 8.0, 3));
        map
    }

    #[test]
    fn ships_grouped_by_owner() {
        let map = sample();
        assert_eq!(map.player_count(), 2);
        assert_eq!(map.ships_of(0).len(), 2);
        assert_eq!(map.ships_of(1).len(), 1);
        assert!(map.ships_of(7).is_empty());
        assert_eq!(map.all_ships().count(), 3);
    }

    #[test]
    fn obstacles_cover_planets_and_every_ship() {
        let map = sample();
        let ids: Vec<(bool, EntityId)> = map
            .obstacles()
            .map(|o| (matches!(o, Obstacle::Planet(_)), o.id()))
            .collect();
        assert_eq!(ids, vec![(true, 0), (false, 0), (false, 1), (false, 2)]);
    }

    #[test]
    fn planet_lookup() {
        let map = sample();
        assert!(map.planet(0).is_some());
        assert!(map.planet(5).is_none());
    }
}
