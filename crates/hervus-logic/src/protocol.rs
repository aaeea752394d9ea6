//! Halite II text protocol.
//!
//! The engine talks line by line over the bot's stdin/stdout:
//!
//! 1. `player_id`
//! 2. `width height`
//! 3. one map line per turn, starting with the initial map
//!
//! The bot answers the handshake with its name, and every map line with
//! one line of space-separated moves.
//!
//! Map line layout:
//!
//! ```text
//! num_players
//!   player_id num_ships
//!     ship_id x y health vel_x vel_y docking_status docked_planet progress cooldown
//! num_planets
//!   planet_id x y health radius docking_spots production remaining owned owner
//!     num_docked docked_ship_id...
//! ```

use crate::entity::{DockingStatus, EntityId, Planet, PlayerId, Ship};
use crate::geometry::Location;
use crate::map::GameMap;
use crate::moves::Move;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtocolError {
    #[error("unexpected end of line while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },
    #[error("unknown docking status code {0}")]
    UnknownDockingStatus(u8),
    #[error("{0} unexpected trailing tokens")]
    TrailingTokens(usize),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Whitespace tokenizer that names what it was looking for on failure.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.inner.next().ok_or(ProtocolError::UnexpectedEnd(what))?;
        token.parse().map_err(|_| ProtocolError::InvalidToken {
            what,
            token: token.to_string(),
        })
    }

    fn finish(self) -> Result<()> {
        match self.inner.count() {
            0 => Ok(()),
            n => Err(ProtocolError::TrailingTokens(n)),
        }
    }
}

/// First handshake line.
pub fn parse_player_id(line: &str) -> Result<PlayerId> {
    let mut tokens = Tokens::new(line);
    let id = tokens.next("player id")?;
    tokens.finish()?;
    Ok(id)
}

/// Second handshake line: `width height`.
pub fn parse_dimensions(line: &str) -> Result<(u32, u32)> {
    let mut tokens = Tokens::new(line);
    let width = tokens.next("map width")?;
    let height = tokens.next("map height")?;
    tokens.finish()?;
    Ok((width, height))
}

/// One turn's map line.
pub fn parse_map(width: u32, height: u32, line: &str) -> Result<GameMap> {
    let mut tokens = Tokens::new(line);
    let mut map = GameMap::new(width, height);

    let num_players: usize = tokens.next("player count")?;
    for _ in 0..num_players {
        let owner: PlayerId = tokens.next("player id")?;
        let num_ships: usize = tokens.next("ship count")?;
        // Players without ships still count toward the player total.
        let fleet = map.ships.entry(owner).or_default();
        for _ in 0..num_ships {
            fleet.push(parse_ship(&mut tokens, owner)?);
        }
    }

    let num_planets: usize = tokens.next("planet count")?;
    for _ in 0..num_planets {
        map.add_planet(parse_planet(&mut tokens)?);
    }

    tokens.finish()?;
    Ok(map)
}

fn parse_ship(tokens: &mut Tokens<'_>, owner: PlayerId) -> Result<Ship> {
    let id = tokens.next("ship id")?;
    let x = tokens.next("ship x")?;
    let y = tokens.next("ship y")?;
    let mut ship = Ship::new(id, owner, Location::new(x, y));
    ship.health = tokens.next("ship health")?;
    ship.velocity_x = tokens.next("ship vel_x")?;
    ship.velocity_y = tokens.next("ship vel_y")?;
    let code: u8 = tokens.next("docking status")?;
    ship.docking_status =
        DockingStatus::from_code(code).ok_or(ProtocolError::UnknownDockingStatus(code))?;
    ship.docked_planet = tokens.next("docked planet")?;
    ship.docking_progress = tokens.next("docking progress")?;
    ship.weapon_cooldown = tokens.next("weapon cooldown")?;
    Ok(ship)
}

fn parse_planet(tokens: &mut Tokens<'_>) -> Result<Planet> {
    let id = tokens.next("planet id")?;
    let x = tokens.next("planet x")?;
    let y = tokens.next("planet y")?;
    let health = tokens.next("planet health")?;
    let radius = tokens.next("planet radius")?;
    let docking_spots = tokens.next("docking spots")?;

    let mut planet = Planet::new(id, Location::new(x, y), radius, docking_spots);
    planet.health = health;
    planet.current_production = tokens.next("current production")?;
    planet.remaining_production = tokens.next("remaining production")?;

    let owned: u8 = tokens.next("owned flag")?;
    // Unowned planets still carry an owner token; it is meaningless.
    let owner: i64 = tokens.next("planet owner")?;
    planet.owner = if owned == 1 {
        Some(PlayerId::try_from(owner).map_err(|_| ProtocolError::InvalidToken {
            what: "planet owner",
            token: owner.to_string(),
        })?)
    } else {
        None
    };

    let num_docked: usize = tokens.next("docked ship count")?;
    planet.docked_ships = (0..num_docked)
        .map(|_| tokens.next::<EntityId>("docked ship id"))
        .collect::<Result<_>>()?;
    Ok(planet)
}

/// One turn's reply line, without the trailing newline. `Noop`s are dropped.
pub fn encode_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .filter(|m| !m.is_noop())
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
