//! Collision detection and response
//!
//! Detection is a read-only pairwise AABB sweep over the live entities.
//! Response happens afterwards: each side of a contact reacts to a snapshot
//! of the other, so no entity ever writes to another.

use super::effect::Effect;
use super::entity::{Aabb, Class, Entity, EntityId};

/// What a reacting entity sees of the entity it touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: EntityId,
    pub class: Class,
    pub bounds: Aabb,
}

/// A detected overlap, with both sides captured at detection time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Arena index of the first entity (always lower than `b`)
    pub a: usize,
    pub b: usize,
    pub a_touch: Touch,
    pub b_touch: Touch,
}

/// How an entity responds to touching something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Ignore,
    /// Stop and back out of the obstacle
    Halt,
    Die,
    /// Take the item's effect
    Absorb(Effect),
    /// Picked up; remove self
    Consumed,
}

/// Reaction table: `this` touching `other`
pub fn reaction(this: Class, other: Class) -> Reaction {
    match (this, other) {
        (Class::Player, Class::Block) => Reaction::Halt,
        (Class::Player, Class::Enemy) => Reaction::Die,
        (Class::Player, Class::Item(effect)) => Reaction::Absorb(effect),
        (Class::Enemy, Class::Block) => Reaction::Halt,
        (Class::Item(_), Class::Player) => Reaction::Consumed,
        // Blocks are passive
        (Class::Block, _) => Reaction::Ignore,
        (Class::Player, Class::Player)
        | (Class::Enemy, Class::Player | Class::Enemy | Class::Item(_))
        | (Class::Item(_), Class::Enemy | Class::Block | Class::Item(_)) => Reaction::Ignore,
    }
}

/// Find every overlapping pair. Entities already marked dead still take part.
pub fn detect_contacts(entities: &[Entity]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        let a_bounds = a.bounds();
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            if a_bounds.overlaps(&b.bounds()) {
                contacts.push(Contact {
                    a: i,
                    b: j,
                    a_touch: a.touch(),
                    b_touch: b.touch(),
                });
            }
        }
    }
    contacts
}

/// Let both sides of every contact react, in detection order
pub fn resolve_contacts(entities: &mut [Entity], contacts: &[Contact]) {
    for contact in contacts {
        entities[contact.a].handle_collision(&contact.b_touch);
        entities[contact.b].handle_collision(&contact.a_touch);
    }
}

/// Detect then resolve in one pass; returns the number of contacts
pub fn sweep(entities: &mut [Entity]) -> usize {
    let contacts = detect_contacts(entities);
    resolve_contacts(entities, &contacts);
    contacts.len()
}
