use anyhow::{Context, Result};
use clap::Parser;
use hervus_bot::config::BotConfig;
use hervus_bot::logging;
use hervus_bot::session::{play, Session};
use hervus_logic::navigation::Navigator;
use hervus_logic::replay::Replay;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hervus")]
#[command(about = "Halite II bot speaking the engine protocol on stdin/stdout")]
struct Cli {
    /// TOML settings file (defaults to ./hervus.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bot name sent to the engine, overrides the config file
    #[arg(long)]
    name: Option<String>,
    /// Directory for the `<player_id>_<name>.log` file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
    /// Save every received map to this replay file when the game ends
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BotConfig::load_or_default(cli.config.as_deref())?;
    if let Some(name) = cli.name {
        config.name = name;
    }
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::open(stdin.lock(), stdout.lock())?;

    let log_file = logging::log_path(&cli.log_dir, &config.name, session.player_id());
    logging::init(&log_file, &config.log_level)?;
    info!("{} playing as player {}", config.name, session.player_id());

    let initial = session.read_initial_map().map_err(|e| {
        error!("handshake failed: {e:#}");
        e
    })?;

    let navigator = Navigator::new(config.navigation);
    let mut replay = cli.record.as_ref().map(|_| Replay::new(session.player_id()));

    let outcome = play(
        &mut session,
        &initial,
        &navigator,
        &config.name,
        replay.as_mut(),
    );
    if let Err(e) = &outcome {
        error!("game loop stopped: {e:#}");
    }

    if let (Some(path), Some(replay)) = (cli.record, replay) {
        let file =
            File::create(&path).with_context(|| format!("creating replay {}", path.display()))?;
        replay
            .save(BufWriter::new(file))
            .with_context(|| format!("writing replay {}", path.display()))?;
        info!("saved {} turns to {}", replay.turns.len(), path.display());
    }

    outcome.map(|_| ())
}
