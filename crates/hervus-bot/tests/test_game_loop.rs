//! End-to-end runs of the bot loop against canned engine input.
//!
//! Exercises: handshake → name → per-turn map line → reply line, plus
//! replay recording and config files on disk.

use hervus_bot::config::BotConfig;
use hervus_bot::session::{play, Session};
use hervus_logic::config::NavigationConfig;
use hervus_logic::navigation::Navigator;
use hervus_logic::replay::Replay;
use std::fs::{self, File};
use std::io::{BufReader, Cursor};

// ── Helpers ────────────────────────────────────────────────────────────

/// Player 0 has one ship at (10,10); a free planet sits at (50,10).
const FAR_TURN: &str = "1 0 1 0 10.0 10.0 255 0 0 0 0 0 0 1 0 50.0 10.0 1000 3.0 2 0 500 0 0 0";

/// Same ship, now within docking range.
const NEAR_TURN: &str = "1 0 1 0 44.0 10.0 255 0 0 0 0 0 0 1 0 50.0 10.0 1000 3.0 2 0 500 0 0 0";

fn engine_input(turns: &[&str]) -> String {
    let mut input = format!("0\n100 100\n{FAR_TURN}\n");
    for turn in turns {
        input.push_str(turn);
        input.push('\n');
    }
    input
}

fn run(turns: &[&str], replay: Option<&mut Replay>) -> (u32, Vec<String>) {
    let input = engine_input(turns);
    let mut output = Vec::new();
    let (mut session, initial) = Session::connect(Cursor::new(input), &mut output).unwrap();
    let nav = Navigator::new(NavigationConfig::default());
    let played = play(&mut session, &initial, &nav, "tester", replay).unwrap();
    drop(session);
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (played, lines)
}

// ── Game loop ──────────────────────────────────────────────────────────

#[test]
fn answers_every_turn_after_the_name() {
    let (played, lines) = run(&[FAR_TURN, NEAR_TURN], None);
    assert_eq!(played, 2);
    assert_eq!(lines, vec!["tester", "t 0 7 0", "d 0 0"]);
}

#[test]
fn immediate_eof_after_handshake_plays_no_turns() {
    let (played, lines) = run(&[], None);
    assert_eq!(played, 0);
    assert_eq!(lines, vec!["tester"]);
}

#[test]
fn garbled_turn_stops_the_game() {
    let input = engine_input(&["1 0 1 oops"]);
    let (mut session, initial) = Session::connect(Cursor::new(input), Vec::new()).unwrap();
    let nav = Navigator::new(NavigationConfig::default());
    assert!(play(&mut session, &initial, &nav, "tester", None).is_err());
}

// ── Replay and config on disk ──────────────────────────────────────────

#[test]
fn recorded_game_reloads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.replay");

    let mut replay = Replay::new(0);
    run(&[FAR_TURN, NEAR_TURN, FAR_TURN], Some(&mut replay));
    replay.save(File::create(&path).unwrap()).unwrap();

    let loaded = Replay::load(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(loaded.player_id, 0);
    assert_eq!(loaded.turns.len(), 3);
    assert_eq!(loaded.turns[1].ships_of(0)[0].location.x, 44.0);
}

#[test]
fn config_file_overrides_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hervus.toml");
    fs::write(
        &path,
        "name = \"slowpoke\"\nlog_level = \"debug\"\n\n[navigation]\nmax_speed = 3\n",
    )
    .unwrap();

    let config = BotConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.name, "slowpoke");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.navigation.max_speed, 3);
    config.validate().unwrap();
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BotConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("reading config"));
}
