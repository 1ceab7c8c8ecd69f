//! World state: the live entity arena, bounds and RNG
//!
//! Entities live in a dense `Vec` in spawn order and are addressed by a
//! stable [`EntityId`]. Dead entities stay in place until [`World::remove_dead`]
//! compacts them out at the end of a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effect::Effect;
use super::entity::{Entity, EntityId, Kind, Tag};
use super::player::Player;
use crate::Settings;
use crate::consts::{ITEM_SIZE, TILE_SIZE};
use crate::renderer::Surface;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live entities in spawn order
    pub(crate) entities: Vec<Entity>,
    /// Tie-break source for the flee AI
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl World {
    pub fn new(settings: Settings) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            time_ticks: 0,
            entities: Vec::new(),
            rng,
            next_id: 1,
        }
    }

    /// World with default settings and the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Settings::with_seed(seed))
    }

    /// World size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.settings.world_width, self.settings.world_height)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a new entity: runs `init`, clamps into the world
    fn spawn(&mut self, tag: Tag, pos: Vec2, size: Vec2, kind: Kind, speed: f32, vel: Vec2) -> EntityId {
        let id = self.next_entity_id();
        let mut entity = Entity::new(id, tag, pos, size, kind);
        entity.speed = speed;
        entity.vel = vel;
        entity.init();
        entity.clamp_to(self.bounds());
        log::debug!("Spawned {:?} {:?} at {:?}", tag, id, entity.pos);
        self.entities.push(entity);
        id
    }

    pub fn spawn_player(&mut self, tag: Tag, x: f32, y: f32, is_ai: bool) -> EntityId {
        let speed = self.settings.player_speed;
        self.spawn(
            tag,
            Vec2::new(x, y),
            Vec2::splat(TILE_SIZE),
            Kind::Player(Player::new(is_ai)),
            speed,
            Vec2::ZERO,
        )
    }

    /// Enemies keep their spawn velocity and bounce off the world edges
    pub fn spawn_enemy(&mut self, tag: Tag, x: f32, y: f32, vel: Vec2) -> EntityId {
        self.spawn(
            tag,
            Vec2::new(x, y),
            Vec2::splat(TILE_SIZE),
            Kind::Enemy,
            vel.length(),
            vel,
        )
    }

    pub fn spawn_block(&mut self, x: f32, y: f32) -> EntityId {
        self.spawn(
            Tag::Wall,
            Vec2::new(x, y),
            Vec2::splat(TILE_SIZE),
            Kind::Block,
            0.0,
            Vec2::ZERO,
        )
    }

    pub fn spawn_item(&mut self, tag: Tag, x: f32, y: f32, effect: Effect) -> EntityId {
        self.spawn(
            tag,
            Vec2::new(x, y),
            Vec2::splat(ITEM_SIZE),
            Kind::Item { effect },
            0.0,
            Vec2::ZERO,
        )
    }

    /// Live entities, spawn order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn players(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.as_player().is_some())
    }

    /// Drop dead entities, keeping the order of the rest
    pub fn remove_dead(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| {
            if e.dead {
                log::debug!("Removing {:?} {:?}", e.tag, e.id);
            }
            !e.dead
        });
        before - self.entities.len()
    }

    /// Draw every live entity
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for entity in self.entities.iter().filter(|e| !e.dead) {
            entity.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let mut world = World::with_seed(1);
        let a = world.spawn_player(Tag::Brad, 10.0, 10.0, false);
        let b = world.spawn_block(64.0, 64.0);
        let c = world.spawn_item(Tag::Coin, 200.0, 200.0, Effect::PointPlus);
        assert!(a < b && b < c);
        assert_eq!(world.entities().len(), 3);
        assert_eq!(world.get(b).unwrap().tag, Tag::Wall);
        assert_eq!(world.get(c).unwrap().size, Vec2::splat(ITEM_SIZE));
    }

    #[test]
    fn test_spawn_runs_init_and_clamps() {
        let mut world = World::with_seed(1);
        let id = world.spawn_player(Tag::Fulk, -50.0, WORLD_HEIGHT + 50.0, true);
        let e = world.get(id).unwrap();
        assert_eq!(e.pos, Vec2::new(0.0, WORLD_HEIGHT - TILE_SIZE));
        assert_eq!(e.color, crate::renderer::colors::LIGHT_GRAY);
        assert_eq!(e.speed, PLAYER_SPEED);
        assert!(e.as_player().unwrap().is_ai());
    }

    #[test]
    fn test_remove_dead_keeps_order() {
        let mut world = World::with_seed(1);
        let a = world.spawn_block(0.0, 0.0);
        let b = world.spawn_block(64.0, 0.0);
        let c = world.spawn_block(128.0, 0.0);
        world.get_mut(b).unwrap().dead = true;
        assert_eq!(world.remove_dead(), 1);
        let ids: Vec<EntityId> = world.entities().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(world.get(b).is_none());
    }

    #[test]
    fn test_enemy_speed_from_velocity() {
        let mut world = World::with_seed(1);
        let id = world.spawn_enemy(Tag::Wisp, 100.0, 100.0, Vec2::new(3.0, 4.0));
        assert_eq!(world.get(id).unwrap().speed, 5.0);
    }
}
