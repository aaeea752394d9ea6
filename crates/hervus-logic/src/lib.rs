//! Pure navigation and turn logic for the hervus Halite II bot.
//!
//! This crate contains everything the bot decides, independent of stdin,
//! stdout or log files. Functions take a per-turn [`map::GameMap`] snapshot
//! and return plain values, which keeps them unit-testable and lets the
//! headless harness replay recorded games without a game server.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`collision`] | Segment vs. inflated-disk obstruction test, blocker scan |
//! | [`config`] | Navigation tunables and their validation |
//! | [`constants`] | Halite II game constants (speeds, radii, docking) |
//! | [`entity`] | Ships, planets and the uniform obstacle capability |
//! | [`geometry`] | `Location`, bearings, degree clipping, dock-approach point |
//! | [`map`] | Per-turn snapshot of every entity on the field |
//! | [`moves`] | Commands a ship can be issued each turn |
//! | [`navigation`] | Bounded angular search and dock-approach ranking |
//! | [`protocol`] | Halite II text protocol parsing and move encoding |
//! | [`replay`] | Binary recording of received snapshots |
//! | [`strategy`] | Per-turn dock-or-move decisions for every own ship |

pub mod collision;
pub mod config;
pub mod constants;
pub mod entity;
pub mod geometry;
pub mod map;
pub mod moves;
pub mod navigation;
pub mod protocol;
pub mod replay;
pub mod strategy;
