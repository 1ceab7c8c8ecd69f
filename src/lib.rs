//! Brad Dash - A tile-based arcade chase game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, movement, collisions, flee AI)
//! - `renderer`: Draw surface abstraction and vertex batching
//! - `settings`: World/gameplay configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{OppositeKeys, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// World dimensions (world units, 1 unit = 1 pixel)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 608.0;

    /// Tile edge length; actors and blocks are one tile
    pub const TILE_SIZE: f32 = 32.0;
    /// Items are half a tile
    pub const ITEM_SIZE: f32 = 16.0;

    /// Player movement per tick
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Threat radius is `world_width / THREAT_RADIUS_DIVISOR`
    pub const THREAT_RADIUS_DIVISOR: f32 = 2.5;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x00B2_AD0A;

    /// Ticks run by the headless demo
    pub const DEMO_TICKS: u32 = 600;

    /// Score awarded by the point bonuses
    pub const POINT_PLUS_SCORE: i32 = 1;
    pub const POINT_PLUS_BIG_SCORE: i32 = 10;
}

/// Clamp `value` into `[min, max]`, tolerating `max < min` (collapses to `min`)
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
