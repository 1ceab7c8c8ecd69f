//! Simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic for a
//! given seed and input sequence:
//! - Seeded RNG only (AI tie-breaks)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod ai;
pub mod collision;
pub mod effect;
pub mod entity;
pub mod location;
pub mod player;
pub mod state;
pub mod tick;

pub use ai::{Direction, choose_direction, flee_velocity};
pub use collision::{Contact, Reaction, Touch, detect_contacts, reaction, resolve_contacts, sweep};
pub use effect::Effect;
pub use entity::{Aabb, Class, Entity, EntityId, Kind, Tag};
pub use location::Location;
pub use player::Player;
pub use state::World;
pub use tick::{TickInput, TickReport, tick};
