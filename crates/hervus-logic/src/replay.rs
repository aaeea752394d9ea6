//! Recording of received snapshots for offline re-planning.
//!
//! Uses bincode for compact binary serialization. A replay holds every map
//! the bot saw, in order, so the harness can feed them back through the
//! planner without a game server.

use crate::entity::PlayerId;
use crate::map::GameMap;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

/// Version number for replay format (increment when format changes)
const REPLAY_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub version: u32,
    /// The player the recording bot played as.
    pub player_id: PlayerId,
    pub turns: Vec<GameMap>,
}

impl Replay {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            version: REPLAY_VERSION,
            player_id,
            turns: Vec::new(),
        }
    }

    pub fn record(&mut self, map: &GameMap) {
        self.turns.push(map.clone());
    }

    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), ReplayError> {
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, ReplayError> {
        let replay: Replay = bincode::deserialize_from(reader)?;
        if replay.version != REPLAY_VERSION {
            return Err(ReplayError::VersionMismatch {
                expected: REPLAY_VERSION,
                found: replay.version,
            });
        }
        Ok(replay)
    }
}

/// Errors that can occur while saving or loading a replay
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("Replay version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
