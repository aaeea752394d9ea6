//! Commands a ship can be issued in one turn.

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ship's order for this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Move {
    /// Do nothing. Never sent over the wire.
    #[default]
    Noop,
    /// Move `magnitude` units along `angle_deg` (0..360).
    Thrust {
        ship_id: EntityId,
        magnitude: u32,
        angle_deg: u16,
    },
    Dock {
        ship_id: EntityId,
        planet_id: EntityId,
    },
    Undock {
        ship_id: EntityId,
    },
}

impl Move {
    pub fn thrust(ship_id: EntityId, magnitude: u32, angle_deg: u16) -> Self {
        Move::Thrust {
            ship_id,
            magnitude,
            angle_deg,
        }
    }

    pub fn dock(ship_id: EntityId, planet_id: EntityId) -> Self {
        Move::Dock { ship_id, planet_id }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Move::Noop)
    }

    /// The ship this move is for, if any.
    pub fn ship_id(&self) -> Option<EntityId> {
        match *self {
            Move::Noop => None,
            Move::Thrust { ship_id, .. } | Move::Dock { ship_id, .. } | Move::Undock { ship_id } => {
                Some(ship_id)
            }
        }
    }

    /// Same magnitude and heading. Only thrusts compare equal here.
    pub fn same_thrust(&self, other: &Move) -> bool {
        match (self, other) {
            (
                Move::Thrust {
                    magnitude: m1,
                    angle_deg: a1,
                    ..
                },
                Move::Thrust {
                    magnitude: m2,
                    angle_deg: a2,
                    ..
                },
            ) => m1 == m2 && a1 == a2,
            _ => false,
        }
    }
}

/// Wire encoding; `Noop` encodes to an empty string.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Noop => Ok(()),
            Move::Thrust {
                ship_id,
                magnitude,
                angle_deg,
            } => write!(f, "t {} {} {}", ship_id, magnitude, angle_deg),
            Move::Dock { ship_id, planet_id } => write!(f, "d {} {}", ship_id, planet_id),
            Move::Undock { ship_id } => write!(f, "u {}", ship_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding() {
        assert_eq!(Move::thrust(4, 7, 270).to_string(), "t 4 7 270");
        assert_eq!(Move::dock(4, 2).to_string(), "d 4 2");
        assert_eq!(Move::Undock { ship_id: 4 }.to_string(), "u 4");
        assert_eq!(Move::Noop.to_string(), "");
    }

    #[test]
    fn same_thrust_ignores_ship() {
        assert!(Move::thrust(1, 5, 90).same_thrust(&Move::thrust(2, 5, 90)));
        assert!(!Move::thrust(1, 5, 90).same_thrust(&Move::thrust(1, 5, 91)));
        assert!(!Move::thrust(1, 5, 90).same_thrust(&Move::thrust(1, 4, 90)));
        assert!(!Move::Noop.same_thrust(&Move::Noop));
    }

    #[test]
    fn ship_id_of_each_kind() {
        assert_eq!(Move::Noop.ship_id(), None);
        assert_eq!(Move::dock(8, 1).ship_id(), Some(8));
        assert_eq!(Move::thrust(3, 1, 1).ship_id(), Some(3));
    }
}
