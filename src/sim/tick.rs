//! Per-frame simulation step
//!
//! Order within a tick: every entity moves (spawn order), then one full
//! collision sweep, then dead entities are removed.

use glam::Vec2;

use super::ai::flee_velocity;
use super::collision::{detect_contacts, resolve_contacts};
use super::entity::{Entity, Kind};
use super::player::{Player, input_velocity};
use super::state::World;
use crate::clamp;

/// Direction keys held this tick (shared by every human player)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Counts for one tick, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub contacts: usize,
    pub removed: usize,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    world.time_ticks += 1;

    for i in 0..world.entities.len() {
        move_entity(world, i, input);
    }

    let contacts = detect_contacts(&world.entities);
    resolve_contacts(&mut world.entities, &contacts);

    // Push-out from blocks may leave a mover past the edge; bring it back
    let bounds = world.bounds();
    for entity in world.entities.iter_mut().filter(|e| e.is_mobile()) {
        entity.clamp_to(bounds);
    }

    let removed = world.remove_dead();
    if removed > 0 {
        log::debug!("Tick {}: {} contacts, {} removed", world.time_ticks, contacts.len(), removed);
    }

    TickReport {
        contacts: contacts.len(),
        removed,
    }
}

/// Movement step for the entity at arena index `i`
fn move_entity(world: &mut World, i: usize, input: &TickInput) {
    let bounds = world.bounds();
    let World {
        entities,
        rng,
        settings,
        ..
    } = world;

    if entities[i].dead {
        return;
    }

    match entities[i].as_player().map(Player::is_ai) {
        Some(true) => {
            let vel = flee_velocity(
                &entities[i],
                entities.as_slice(),
                settings.threat_radius(),
                rng,
            );
            let actor = &mut entities[i];
            actor.vel = vel;
            actor.advance();
            actor.clamp_to(bounds);
        }
        Some(false) => {
            // Pending velocity first; the new input shows up next tick
            let actor = &mut entities[i];
            actor.advance();
            actor.vel = input_velocity(input, actor.speed, settings.opposite_keys);
            actor.clamp_to(bounds);
        }
        None if matches!(entities[i].kind, Kind::Enemy) => bounce(&mut entities[i], bounds),
        None => {}
    }
}

/// Move, then reverse any axis that reached a world edge
fn bounce(enemy: &mut Entity, bounds: Vec2) {
    enemy.advance();
    let max = bounds - enemy.size;
    if enemy.pos.x <= 0.0 || enemy.pos.x >= max.x {
        enemy.vel.x = -enemy.vel.x;
    }
    if enemy.pos.y <= 0.0 || enemy.pos.y >= max.y {
        enemy.vel.y = -enemy.vel.y;
    }
    enemy.pos.x = clamp(enemy.pos.x, 0.0, max.x);
    enemy.pos.y = clamp(enemy.pos.y, 0.0, max.y);
}
