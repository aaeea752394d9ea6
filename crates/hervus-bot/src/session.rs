//! Engine connection and the turn loop.

use anyhow::{bail, Context, Result};
use hervus_logic::entity::PlayerId;
use hervus_logic::map::GameMap;
use hervus_logic::moves::Move;
use hervus_logic::navigation::Navigator;
use hervus_logic::protocol::{encode_moves, parse_dimensions, parse_map, parse_player_id};
use hervus_logic::replay::Replay;
use hervus_logic::strategy::plan_turn;
use log::{debug, info};
use std::io::{BufRead, Write};

/// One game's worth of engine I/O.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    player_id: PlayerId,
    width: u32,
    height: u32,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Read the whole handshake: player id, map size and the initial map.
    pub fn connect(reader: R, writer: W) -> Result<(Self, GameMap)> {
        let mut session = Self::open(reader, writer)?;
        let initial = session.read_initial_map()?;
        Ok((session, initial))
    }

    /// Read only the player id line, so a log file can be named before the
    /// rest of the handshake arrives.
    pub fn open(reader: R, writer: W) -> Result<Self> {
        let mut session = Self {
            reader,
            writer,
            player_id: 0,
            width: 0,
            height: 0,
            line: String::new(),
        };

        if !session.read_line()? {
            bail!("engine closed before sending player id");
        }
        session.player_id = parse_player_id(&session.line).context("player id line")?;
        Ok(session)
    }

    /// Rest of the handshake after [`Session::open`]: map size, then the
    /// initial map.
    pub fn read_initial_map(&mut self) -> Result<GameMap> {
        if !self.read_line()? {
            bail!("engine closed before sending map size");
        }
        (self.width, self.height) = parse_dimensions(&self.line).context("map size line")?;

        self.next_map()?
            .context("engine closed before sending the initial map")
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Finish the handshake.
    pub fn send_name(&mut self, name: &str) -> Result<()> {
        self.send_line(name)
    }

    /// Next turn's map, or `None` once the engine closes stdin.
    pub fn next_map(&mut self) -> Result<Option<GameMap>> {
        if !self.read_line()? {
            return Ok(None);
        }
        let map = parse_map(self.width, self.height, &self.line).context("map line")?;
        Ok(Some(map))
    }

    pub fn send_moves(&mut self, moves: &[Move]) -> Result<()> {
        self.send_line(&encode_moves(moves))
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self
            .reader
            .read_line(&mut self.line)
            .context("reading from engine")?;
        Ok(n > 0)
    }

    fn send_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").context("writing to engine")?;
        self.writer.flush().context("flushing to engine")
    }
}

/// Play until the engine hangs up. Returns the number of turns answered.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    initial: &GameMap,
    navigator: &Navigator,
    name: &str,
    mut replay: Option<&mut Replay>,
) -> Result<u32> {
    let player = session.player_id();
    info!(
        "width: {}; height: {}; players: {}; my ships: {}; planets: {}",
        initial.width,
        initial.height,
        initial.player_count(),
        initial.ships_of(player).len(),
        initial.planets.len()
    );
    session.send_name(name)?;

    let mut turns = 0;
    while let Some(map) = session.next_map()? {
        if let Some(replay) = replay.as_deref_mut() {
            replay.record(&map);
        }
        let commands = plan_turn(&map, player, navigator).into_commands();
        debug!("turn {turns}: {} commands", commands.len());
        session.send_moves(&commands)?;
        turns += 1;
    }

    info!("engine closed the game after {turns} turns");
    Ok(turns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn handshake_reads_three_lines() {
        let input = "1\n240 160\n2 0 0 1 0 0\n";
        let (session, map) = Session::connect(Cursor::new(input), Vec::new()).unwrap();
        assert_eq!(session.player_id(), 1);
        assert_eq!((map.width, map.height), (240, 160));
        assert_eq!(map.player_count(), 2);
    }

    #[test]
    fn short_handshake_is_an_error() {
        let err = Session::connect(Cursor::new("0\n"), Vec::new())
            .err()
            .unwrap();
        assert!(err.to_string().contains("map size"));
    }

    #[test]
    fn handshake_failure_after_player_id_keeps_the_id() {
        let mut session = Session::open(Cursor::new("3\n240 x\n"), Vec::new()).unwrap();
        assert_eq!(session.player_id(), 3);
        let err = session.read_initial_map().unwrap_err();
        assert!(format!("{err:#}").contains("map size line"));
    }

    #[test]
    fn moves_are_one_flushed_line() {
        let input = "0\n10 10\n0 0\n";
        let (mut session, _) = Session::connect(Cursor::new(input), Vec::new()).unwrap();
        session
            .send_moves(&[Move::thrust(1, 7, 90), Move::Noop, Move::dock(2, 0)])
            .unwrap();
        assert_eq!(session.writer, b"t 1 7 90 d 2 0\n");
        assert_eq!(session.next_map().unwrap(), None);
    }
}
