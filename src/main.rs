//! Brad Dash headless runner
//!
//! Loads settings (first argument, optional JSON path), builds a demo arena
//! and runs the simulation with the AI player in control.

use std::path::Path;

use glam::Vec2;

use brad_dash::Settings;
use brad_dash::renderer::QuadBatch;
use brad_dash::sim::{Effect, Tag, TickInput, World, tick};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brad Dash (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    let ticks = settings.demo_ticks;

    let mut world = World::new(settings);
    let fulk = build_demo_arena(&mut world);
    log::info!("Spawned {} entities (seed {})", world.entities().len(), world.settings.seed);

    let input = TickInput::default();
    let mut batch = QuadBatch::new();
    for _ in 0..ticks {
        tick(&mut world, &input);

        batch.clear();
        world.render(&mut batch);

        if world.get(fulk).is_none() {
            log::info!("Fulk was caught on tick {}", world.time_ticks);
            break;
        }
    }

    for entity in world.players() {
        if let Some(player) = entity.as_player() {
            println!(
                "{:?}: score {} effect {:?} at ({:.0}, {:.0})",
                entity.tag,
                player.score(),
                player.effect(),
                entity.pos.x,
                entity.pos.y
            );
        }
    }
    println!(
        "{} ticks, {} entities alive, last frame {} bytes of vertices",
        world.time_ticks,
        world.entities().len(),
        batch.as_bytes().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// A walled room with two players, a couple of roaming enemies and pickups.
/// Returns the AI player's id.
#[cfg(not(target_arch = "wasm32"))]
fn build_demo_arena(world: &mut World) -> brad_dash::sim::EntityId {
    use brad_dash::consts::TILE_SIZE;

    world.spawn_player(Tag::Brad, 64.0, 64.0, false);
    let fulk = world.spawn_player(Tag::Fulk, 384.0, 288.0, true);

    // A pillar row across the middle
    for i in 0..6 {
        world.spawn_block(256.0 + i as f32 * TILE_SIZE, 224.0);
    }

    world.spawn_enemy(Tag::Slime, 160.0, 400.0, Vec2::new(2.0, 1.0));
    world.spawn_enemy(Tag::Wisp, 600.0, 120.0, Vec2::new(-3.0, 2.0));

    world.spawn_item(Tag::Coin, 420.0, 360.0, Effect::PointPlus);
    world.spawn_item(Tag::Gem, 520.0, 300.0, Effect::PointPlusBig);
    world.spawn_item(Tag::Potion, 300.0, 420.0, Effect::SpeedUp);

    fulk
}
