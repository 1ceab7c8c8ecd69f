//! Entity base state shared by every actor
//!
//! All actors are one `Entity` struct; the per-kind payload lives in [`Kind`].
//! Behavior that depends on the kind of *another* entity goes through the
//! reaction table in [`super::collision`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Reaction, Touch, reaction};
use super::effect::Effect;
use super::player::Player;
use crate::clamp;
use crate::renderer::{Color, Surface, colors};

/// Stable handle to an entity in the world arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Which character, monster, obstacle or pickup an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    // Players
    Brad,
    Fulk,
    // Enemies
    Slime,
    Wisp,
    // Blocks
    Wall,
    // Items
    Coin,
    Gem,
    Potion,
}

/// Kind-specific state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Kind {
    Player(Player),
    /// Hazard: kills players on contact
    Enemy,
    /// Static obstacle
    Block,
    /// Pickup carrying an effect
    Item { effect: Effect },
}

/// Kind without payload (plus the item's effect), used for collision dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Class {
    Player,
    Enemy,
    Block,
    Item(Effect),
}

/// Axis-aligned bounding box (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Penetration depth on each axis (non-positive when apart)
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.pos.x.max(other.pos.x),
            self.bottom().min(other.bottom()) - self.pos.y.max(other.pos.y),
        )
    }
}

/// A simulated actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub tag: Tag,
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Displacement applied per tick
    pub vel: Vec2,
    /// Magnitude used when choosing a velocity
    pub speed: f32,
    pub dead: bool,
    /// Cosmetic only
    pub color: Color,
    pub kind: Kind,
}

impl Entity {
    pub fn new(id: EntityId, tag: Tag, pos: Vec2, size: Vec2, kind: Kind) -> Self {
        Self {
            id,
            tag,
            pos,
            size,
            vel: Vec2::ZERO,
            speed: 0.0,
            dead: false,
            color: colors::DEFAULT,
            kind,
        }
    }

    /// One-time per-tag setup
    pub fn init(&mut self) {
        self.color = match self.tag {
            Tag::Brad => colors::WHITE,
            Tag::Fulk => colors::LIGHT_GRAY,
            Tag::Slime => colors::SLIME,
            Tag::Wisp => colors::WISP,
            Tag::Wall => colors::WALL,
            Tag::Coin => colors::COIN,
            Tag::Gem => colors::GEM,
            Tag::Potion => colors::POTION,
        };
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn class(&self) -> Class {
        match &self.kind {
            Kind::Player(_) => Class::Player,
            Kind::Enemy => Class::Enemy,
            Kind::Block => Class::Block,
            Kind::Item { effect } => Class::Item(*effect),
        }
    }

    /// Players and enemies move; blocks and items are fixed
    pub fn is_mobile(&self) -> bool {
        matches!(self.kind, Kind::Player(_) | Kind::Enemy)
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            Kind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match &mut self.kind {
            Kind::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Base tick: apply the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Keep the box inside `[0, world - size]` on both axes
    pub fn clamp_to(&mut self, world: Vec2) {
        self.pos.x = clamp(self.pos.x, 0.0, world.x - self.size.x);
        self.pos.y = clamp(self.pos.y, 0.0, world.y - self.size.y);
    }

    /// Draw as a filled rectangle
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.bounds(), self.color);
    }

    /// Snapshot handed to the other party of a contact
    pub fn touch(&self) -> Touch {
        Touch {
            id: self.id,
            class: self.class(),
            bounds: self.bounds(),
        }
    }

    /// React to overlapping `other`. Only this entity is mutated.
    pub fn handle_collision(&mut self, other: &Touch) {
        match reaction(self.class(), other.class) {
            Reaction::Ignore => {}
            Reaction::Halt => {
                self.vel = Vec2::ZERO;
                self.push_out_of(&other.bounds);
                log::debug!("{:?} {:?} ran into block {:?}", self.tag, self.id, other.id);
            }
            Reaction::Die => {
                self.dead = true;
                log::info!("{:?} {:?} was caught by {:?}", self.tag, self.id, other.id);
            }
            Reaction::Absorb(effect) => {
                if let Kind::Player(player) = &mut self.kind {
                    player.set_effect(effect);
                    log::info!(
                        "{:?} picked up {} (score {})",
                        self.tag,
                        effect,
                        player.score()
                    );
                }
            }
            Reaction::Consumed => {
                self.dead = true;
            }
        }
    }

    /// Move out of `obstacle` along the axis of least penetration
    fn push_out_of(&mut self, obstacle: &Aabb) {
        let depth = self.bounds().penetration(obstacle);
        if depth.x <= 0.0 || depth.y <= 0.0 {
            return;
        }
        let ours = self.bounds().center();
        let theirs = obstacle.center();
        if depth.x < depth.y {
            self.pos.x = if ours.x < theirs.x {
                obstacle.pos.x - self.size.x
            } else {
                obstacle.right()
            };
        } else {
            self.pos.y = if ours.y < theirs.y {
                obstacle.pos.y - self.size.y
            } else {
                obstacle.bottom()
            };
        }
    }
}
