//! File logging.
//!
//! stdout belongs to the engine, so records go to `<player_id>_<name>.log`,
//! the file name the Halite starter kits use.

use anyhow::{Context, Result};
use hervus_logic::entity::PlayerId;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn log_path(dir: &Path, name: &str, player_id: PlayerId) -> PathBuf {
    dir.join(format!("{player_id}_{name}.log"))
}

/// Install the global logger. `RUST_LOG` wins over `default_filter`.
pub fn init(path: &Path, default_filter: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("installing logger")
}
