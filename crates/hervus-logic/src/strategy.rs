//! Per-turn decisions: which ships dock and where the rest fly.
//!
//! Every undocked ship picks the first planet it could still settle on (not
//! held by an opponent, not full). If it is already in range it docks,
//! otherwise it navigates toward that planet's surface.

use crate::entity::{PlayerId, Ship};
use crate::map::GameMap;
use crate::moves::Move;
use crate::navigation::{DockApproach, Navigator};
use log::{debug, trace};

/// Everything decided for one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnPlan {
    /// Dock commands, final as issued.
    pub docks: Vec<Move>,
    /// Ranked thrust options per moving ship, in ship order.
    pub thrust_candidates: Vec<DockApproach>,
}

impl TurnPlan {
    /// Commands to send: docks first, then every ship's primary thrust.
    pub fn into_commands(self) -> Vec<Move> {
        // TODO: resolve ships whose primary thrusts cross this turn by
        // switching one of them to its fallback.
        let mut commands = self.docks;
        commands.extend(self.thrust_candidates.into_iter().map(|c| c.primary));
        commands
    }
}

/// Plan a turn for `player`'s ships on `map`.
pub fn plan_turn(map: &GameMap, player: PlayerId, navigator: &Navigator) -> TurnPlan {
    let mut plan = TurnPlan::default();
    let max_speed = navigator.config().max_speed;

    for ship in map.ships_of(player) {
        if !ship.is_undocked() {
            trace!("ship {}: {}, skipped", ship.id, ship.docking_status);
            continue;
        }
        match plan_ship(map, player, ship, navigator, max_speed) {
            Some(ShipOrder::Dock(m)) => plan.docks.push(m),
            Some(ShipOrder::Fly(approach)) => plan.thrust_candidates.push(approach),
            None => debug!("ship {}: no order this turn", ship.id),
        }
    }

    plan
}

enum ShipOrder {
    Dock(Move),
    Fly(DockApproach),
}

fn plan_ship(
    map: &GameMap,
    player: PlayerId,
    ship: &Ship,
    navigator: &Navigator,
    max_speed: u32,
) -> Option<ShipOrder> {
    let planet = map
        .planets
        .iter()
        .find(|p| !p.is_owned() || (p.owner == Some(player) && !p.is_full()))?;

    if ship.can_dock(planet) {
        debug!("ship {}: docking at planet {}", ship.id, planet.id);
        return Some(ShipOrder::Dock(Move::dock(ship.id, planet.id)));
    }

    let approach = navigator.navigate_to_dock(map, ship, planet, max_speed);
    if approach.primary.is_noop() {
        debug!("ship {}: no safe heading toward planet {}", ship.id, planet.id);
        return None;
    }
    Some(ShipOrder::Fly(approach))
}
