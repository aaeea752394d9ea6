//! Hervus Headless Navigation Harness
//!
//! Validates the navigation core without a game engine. Runs entirely
//! in-process: no stdin protocol, no networking.
//!
//! Usage:
//!   cargo run -p hervus-simtest
//!   cargo run -p hervus-simtest -- --verbose
//!   cargo run -p hervus-simtest -- --replay game.replay

use hervus_logic::collision::{intersects, CollisionDetector};
use hervus_logic::config::{validate_config, ConfigError, NavigationConfig};
use hervus_logic::entity::{Planet, Ship};
use hervus_logic::geometry::{heading_deviation, Location};
use hervus_logic::map::GameMap;
use hervus_logic::moves::Move;
use hervus_logic::navigation::{rank_candidates, Navigator};
use hervus_logic::protocol::{encode_moves, parse_map};
use hervus_logic::replay::Replay;
use hervus_logic::strategy::plan_turn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// ── Navigation scenarios (hand-computed expectations) ──────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    ship: [f64; 2],
    target: [f64; 2],
    obstacles: Vec<Rock>,
    #[serde(default = "default_max_thrust")]
    max_thrust: u32,
    #[serde(default = "default_avoid")]
    avoid_obstacles: bool,
    #[serde(default = "default_max_corrections")]
    max_corrections: u32,
    #[serde(default = "default_step_deg")]
    step_deg: f64,
    /// Expected command as sent on the wire; empty for `Noop`.
    expect: String,
}

#[derive(Debug, Deserialize)]
struct Rock {
    x: f64,
    y: f64,
    radius: f64,
}

fn default_max_thrust() -> u32 {
    NavigationConfig::default().max_speed
}

fn default_avoid() -> bool {
    true
}

fn default_max_corrections() -> u32 {
    NavigationConfig::default().max_navigation_corrections
}

fn default_step_deg() -> f64 {
    1.0
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let replay_path = args
        .iter()
        .position(|a| a == "--replay")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);
    println!("=== Hervus Navigation Harness ===\n");

    let mut results = Vec::new();

    // 1. Collision geometry properties
    results.extend(validate_collision(verbose));

    // 2. Hand-written navigation scenarios
    results.extend(validate_scenarios(verbose));

    // 3. Dock approach pairing
    results.extend(validate_dock_pairing(verbose));

    // 4. Protocol round through the planner
    results.extend(validate_protocol(verbose));

    // 5. Config validation
    results.extend(validate_configs(verbose));

    // 6. Recorded game, if given
    if let Some(path) = replay_path {
        results.extend(validate_replay(&path, verbose));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Collision ────────────────────────────────────────────────────────

fn validate_collision(verbose: bool) -> Vec<TestResult> {
    println!("--- Collision ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(0x4e41_5649);
    const SAMPLES: usize = 2000;

    let mut asymmetric = 0;
    let mut non_monotonic = 0;
    let mut far_hits = 0;
    let mut blocked = 0;

    for i in 0..SAMPLES {
        let start = Location::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let end = Location::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let rock = Planet::new(
            i as u32,
            Location::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
            rng.gen_range(0.5..10.0),
            2,
        );
        let fudge = rng.gen_range(0.0..2.0);

        let hit = intersects(&start, &end, &rock, fudge);
        if hit {
            blocked += 1;
        }
        if hit != intersects(&end, &start, &rock, fudge) {
            asymmetric += 1;
        }
        if hit && !intersects(&start, &end, &rock, fudge + 1.0) {
            non_monotonic += 1;
        }

        // Anything farther from both endpoints than the segment is long
        // plus its reach cannot touch it.
        let reach = rock.radius + fudge + start.distance_to(&end);
        if hit
            && start.distance_to(&rock.location) > reach
            && end.distance_to(&rock.location) > reach
        {
            far_hits += 1;
        }
    }

    if verbose {
        println!("  {} of {} random segments blocked", blocked, SAMPLES);
    }

    results.push(TestResult {
        name: "collision_symmetric".into(),
        passed: asymmetric == 0,
        detail: format!("{} asymmetric of {}", asymmetric, SAMPLES),
    });
    results.push(TestResult {
        name: "collision_monotonic_in_fudge".into(),
        passed: non_monotonic == 0,
        detail: format!("{} hits lost when widening the margin", non_monotonic),
    });
    results.push(TestResult {
        name: "collision_no_far_hits".into(),
        passed: far_hits == 0,
        detail: format!("{} hits beyond reach", far_hits),
    });

    // Endpoints never block
    let me = Ship::new(0, 0, Location::new(10.0, 10.0));
    let dest = Planet::new(1, Location::new(30.0, 10.0), 5.0, 2);
    let mut map = GameMap::new(100, 100);
    map.add_ship(me.clone());
    map.add_planet(dest.clone());
    let detector = CollisionDetector::new(&NavigationConfig::default());
    results.push(TestResult {
        name: "collision_endpoints_excluded".into(),
        passed: !detector.is_blocked(&map, &me.location, &dest.location),
        detail: "ship and destination centre ignored".into(),
    });

    results
}

// ── 2. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Navigation Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "scenarios_not_empty".into(),
        passed: !scenarios.is_empty(),
        detail: format!("{} scenarios loaded", scenarios.len()),
    });

    let nav = Navigator::new(NavigationConfig::default());
    for s in &scenarios {
        let ship = Ship::new(0, 0, Location::new(s.ship[0], s.ship[1]));
        let mut map = GameMap::new(200, 200);
        map.add_ship(ship.clone());
        for (id, rock) in s.obstacles.iter().enumerate() {
            map.add_planet(Planet::new(
                id as u32,
                Location::new(rock.x, rock.y),
                rock.radius,
                2,
            ));
        }

        let m = nav.navigate_towards(
            &map,
            &ship,
            &Location::new(s.target[0], s.target[1]),
            s.max_thrust,
            s.avoid_obstacles,
            s.max_corrections,
            s.step_deg.to_radians(),
        );
        let got = m.to_string();
        if verbose {
            println!("  {:<40} {:?}", s.name, got);
        }
        results.push(TestResult {
            name: format!("scenario_{}", s.name),
            passed: got == s.expect,
            detail: format!("expected {:?}, got {:?}", s.expect, got),
        });
    }

    results
}

// ── 3. Dock Pairing ─────────────────────────────────────────────────────

fn validate_dock_pairing(_verbose: bool) -> Vec<TestResult> {
    println!("--- Dock Pairing ---");
    let mut results = Vec::new();

    // Head-on blocker between ship and planet: both directions find a way.
    let me = Ship::new(0, 0, Location::new(0.0, 0.0));
    let mut map = GameMap::new(100, 100);
    map.add_ship(me.clone());
    map.add_planet(Planet::new(0, Location::new(5.0, 0.0), 1.0, 2));
    let planet = Planet::new(1, Location::new(20.0, 0.0), 2.0, 2);
    map.add_planet(planet.clone());

    let nav = Navigator::new(NavigationConfig::default());
    let approach = nav.navigate_to_dock(&map, &me, &planet, 7);
    let both_thrust = !approach.primary.is_noop() && !approach.fallback.is_noop();
    results.push(TestResult {
        name: "dock_both_directions".into(),
        passed: both_thrust,
        detail: format!("{} / {}", approach.primary, approach.fallback),
    });

    let ideal = 0;
    let deviation = |m: &Move| match m {
        Move::Thrust { angle_deg, .. } => Some(heading_deviation(*angle_deg, ideal)),
        _ => None,
    };
    let ordered = match (deviation(&approach.primary), deviation(&approach.fallback)) {
        (Some(p), Some(f)) => p <= f,
        _ => false,
    };
    results.push(TestResult {
        name: "dock_primary_closest_to_ideal".into(),
        passed: ordered,
        detail: format!(
            "deviations {:?} / {:?}",
            deviation(&approach.primary),
            deviation(&approach.fallback)
        ),
    });

    // Rank rules in isolation
    let left = Move::thrust(0, 7, 10);
    let right = Move::thrust(0, 7, 340);
    let cases = [
        ("noop_loses", rank_candidates(Move::Noop, left, 0), (left, Move::Noop)),
        ("duplicates_collapse", rank_candidates(left, left, 0), (left, Move::Noop)),
        ("smaller_deviation_first", rank_candidates(left, right, 0), (left, right)),
        ("wraps_through_north", rank_candidates(left, right, 350), (right, left)),
        ("both_noop", rank_candidates(Move::Noop, Move::Noop, 0), (Move::Noop, Move::Noop)),
    ];
    for (name, ranked, want) in cases {
        let got = ranked.into_pair();
        results.push(TestResult {
            name: format!("rank_{}", name),
            passed: got == want,
            detail: format!("got ({}, {})", got.0, got.1),
        });
    }

    results
}

// ── 4. Protocol ─────────────────────────────────────────────────────────

fn validate_protocol(verbose: bool) -> Vec<TestResult> {
    println!("--- Protocol ---");
    let mut results = Vec::new();

    // Player 0: one ship in docking range of planet 0, one far away.
    let line = "2 \
        0 2 0 44.0 10.0 255 0 0 0 0 0 0 1 10.0 60.0 255 0 0 0 0 0 0 \
        1 1 2 90.0 90.0 255 0 0 0 0 0 0 \
        1 0 50.0 10.0 1000 3.0 2 0 500 0 0 0";

    let map = match parse_map(100, 100, line) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "protocol_parse".into(),
                passed: false,
                detail: e.to_string(),
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "protocol_parse".into(),
        passed: map.player_count() == 2 && map.ships_of(0).len() == 2 && map.planets.len() == 1,
        detail: format!(
            "{} players, {} planets",
            map.player_count(),
            map.planets.len()
        ),
    });

    let nav = Navigator::new(NavigationConfig::default());
    let reply = encode_moves(&plan_turn(&map, 0, &nav).into_commands());
    if verbose {
        println!("  reply: {}", reply);
    }
    results.push(TestResult {
        name: "protocol_reply_docks_first".into(),
        passed: reply.starts_with("d 0 0 t 1 7 "),
        detail: reply,
    });

    results
}

// ── 5. Config ───────────────────────────────────────────────────────────

fn validate_configs(_verbose: bool) -> Vec<TestResult> {
    println!("--- Config ---");
    let mut results = Vec::new();

    let defaults = validate_config(&NavigationConfig::default());
    results.push(TestResult {
        name: "config_defaults_valid".into(),
        passed: defaults.is_empty(),
        detail: format!("{} errors", defaults.len()),
    });

    let broken = NavigationConfig {
        max_speed: 0,
        angular_step_radians: 0.0,
        ..NavigationConfig::default()
    };
    let errors = validate_config(&broken);
    let expected = [ConfigError::ZeroSpeed, ConfigError::InvalidAngularStep(0.0)];
    results.push(TestResult {
        name: "config_reports_every_problem".into(),
        passed: expected.iter().all(|e| errors.contains(e)) && errors.len() == expected.len(),
        detail: errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    });

    results
}

// ── 6. Replay ───────────────────────────────────────────────────────────

fn validate_replay(path: &Path, verbose: bool) -> Vec<TestResult> {
    println!("--- Replay {} ---", path.display());
    let mut results = Vec::new();

    let replay = match File::open(path)
        .map_err(|e| e.to_string())
        .and_then(|f| Replay::load(BufReader::new(f)).map_err(|e| e.to_string()))
    {
        Ok(r) => r,
        Err(e) => {
            results.push(TestResult {
                name: "replay_load".into(),
                passed: false,
                detail: e,
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "replay_load".into(),
        passed: true,
        detail: format!("{} turns as player {}", replay.turns.len(), replay.player_id),
    });

    let nav = Navigator::new(NavigationConfig::default());
    let max_speed = nav.config().max_speed;
    let mut bad = Vec::new();
    let mut thrusts = 0;
    for (turn, map) in replay.turns.iter().enumerate() {
        for m in plan_turn(map, replay.player_id, &nav).into_commands() {
            match m {
                Move::Thrust {
                    magnitude,
                    angle_deg,
                    ..
                } => {
                    thrusts += 1;
                    if magnitude > max_speed || angle_deg >= 360 {
                        bad.push(format!("turn {}: {}", turn, m));
                    }
                }
                Move::Noop => bad.push(format!("turn {}: noop forwarded", turn)),
                _ => {}
            }
        }
    }
    if verbose {
        println!("  {} thrusts re-planned", thrusts);
    }
    results.push(TestResult {
        name: "replay_commands_in_bounds".into(),
        passed: bad.is_empty(),
        detail: if bad.is_empty() {
            format!("{} thrusts checked", thrusts)
        } else {
            bad.join(", ")
        },
    });

    results
}
