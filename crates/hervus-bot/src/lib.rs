//! Halite II bot shell around `hervus-logic`.
//!
//! The engine launches the bot as a child process and talks to it over
//! stdin/stdout, so stdout carries protocol lines only. Everything else goes
//! to the log file.

pub mod config;
pub mod logging;
pub mod session;

pub use config::BotConfig;
pub use session::{play, Session};
