//! Flee AI for computer-controlled players
//!
//! Greedy one-step lookahead: try a single step in each cardinal direction,
//! score it by the mean distance to nearby enemies, take the best step that
//! isn't walled off by an adjacent block. Exact ties are settled by a coin
//! flip from the caller's RNG.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Kind};
use super::location::Location;

/// Candidate moves, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::North => Vec2::new(0.0, -1.0),
            Direction::East => Vec2::new(1.0, 0.0),
            Direction::South => Vec2::new(0.0, 1.0),
            Direction::West => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    fn index(&self) -> usize {
        *self as usize
    }
}

/// Enemies within `radius` of `from`, in world order
pub fn nearby_threats<'a>(from: Location, entities: &'a [Entity], radius: f32) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|e| matches!(e.kind, Kind::Enemy))
        .filter(|e| from.distance_to_entity(e) <= radius)
        .collect()
}

/// Which directions have a block sitting flush against the actor,
/// indexed N, E, S, W. Only exact alignment counts.
pub fn adjacent_blocks(actor: &Entity, entities: &[Entity]) -> [bool; 4] {
    let mut blocked = [false; 4];
    let (x, y) = (actor.pos.x, actor.pos.y);
    let (w, h) = (actor.size.x, actor.size.y);

    for b in entities.iter().filter(|e| matches!(e.kind, Kind::Block)) {
        let (bx, by) = (b.pos.x, b.pos.y);
        let (bw, bh) = (b.size.x, b.size.y);

        if bx > x - bw && bx < x + w {
            if by == y - bh {
                blocked[Direction::North.index()] = true;
            } else if by == y + h {
                blocked[Direction::South.index()] = true;
            }
        } else if by > y - bh && by < y + h {
            if bx == x + w {
                blocked[Direction::East.index()] = true;
            } else if bx == x - bw {
                blocked[Direction::West.index()] = true;
            }
        }
    }
    blocked
}

/// Mean distance from `at` to each threat. `threats` must not be empty.
pub fn average_distance(at: Location, threats: &[&Entity]) -> f32 {
    let total: f32 = threats.iter().map(|e| at.distance_to_entity(e)).sum();
    total / threats.len() as f32
}

/// Pick the best unblocked direction, or `None` to stand still
pub fn choose_direction<R: Rng + ?Sized>(
    actor: &Entity,
    entities: &[Entity],
    threat_radius: f32,
    rng: &mut R,
) -> Option<Direction> {
    let here = Location::from(actor.pos);
    let threats = nearby_threats(here, entities, threat_radius);
    if threats.is_empty() {
        return None;
    }

    let blocked = adjacent_blocks(actor, entities);

    let mut best: Option<Direction> = None;
    let mut best_score = 0.0f32;
    for dir in Direction::ALL {
        if blocked[dir.index()] {
            continue;
        }
        let score = average_distance(here.offset(dir.unit() * actor.speed), &threats);
        if score > best_score {
            best = Some(dir);
            best_score = score;
        } else if score == best_score && best.is_some() && rng.random_bool(0.5) {
            best = Some(dir);
        }
    }

    log::trace!(
        "{:?} flees {:?} from {} threats (blocked {:?})",
        actor.id,
        best,
        threats.len(),
        blocked
    );
    best
}

/// Velocity for an AI-controlled actor this tick
pub fn flee_velocity<R: Rng + ?Sized>(
    actor: &Entity,
    entities: &[Entity],
    threat_radius: f32,
    rng: &mut R,
) -> Vec2 {
    choose_direction(actor, entities, threat_radius, rng)
        .map(|dir| dir.unit() * actor.speed)
        .unwrap_or(Vec2::ZERO)
}
