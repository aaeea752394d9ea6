//! Dock approach on a crowded field: 3 players × 40 ships, 12 planets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hervus_logic::config::NavigationConfig;
use hervus_logic::entity::{Planet, Ship};
use hervus_logic::geometry::Location;
use hervus_logic::map::GameMap;
use hervus_logic::navigation::Navigator;
use hervus_logic::strategy::plan_turn;

fn crowded_field() -> GameMap {
    let mut map = GameMap::new(240, 160);
    let mut id = 0;
    for player in 0..3u32 {
        for i in 0..40u32 {
            let x = 20.0 + f64::from(player) * 80.0 + f64::from(i % 8) * 2.5;
            let y = 20.0 + f64::from(i / 8) * 2.5;
            map.add_ship(Ship::new(id, player, Location::new(x, y)));
            id += 1;
        }
    }
    for p in 0..12u32 {
        let x = 20.0 + f64::from(p % 4) * 60.0;
        let y = 60.0 + f64::from(p / 4) * 35.0;
        map.add_planet(Planet::new(p, Location::new(x, y), 4.0 + f64::from(p % 3), 3));
    }
    map
}

fn bench_dock_approach(c: &mut Criterion) {
    let map = crowded_field();
    let nav = Navigator::new(NavigationConfig::default());
    let ship = map.ships_of(0)[20].clone();
    let planet = map.planets[6].clone();

    c.bench_function("navigate_to_dock/crowded", |b| {
        b.iter(|| nav.navigate_to_dock(black_box(&map), black_box(&ship), &planet, 7))
    });
}

fn bench_plan_turn(c: &mut Criterion) {
    let map = crowded_field();
    let nav = Navigator::new(NavigationConfig::default());

    c.bench_function("plan_turn/40_ships", |b| {
        b.iter(|| plan_turn(black_box(&map), 0, &nav))
    });
}

criterion_group!(benches, bench_dock_approach, bench_plan_turn);
criterion_main!(benches);
