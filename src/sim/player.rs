//! Player state and input steering

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effect::Effect;
use super::tick::TickInput;
use crate::settings::OppositeKeys;

/// Per-player payload of an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    score: i32,
    /// At most one held effect; instant bonuses never stay here
    effect: Option<Effect>,
    is_ai: bool,
}

impl Player {
    pub fn new(is_ai: bool) -> Self {
        Self {
            score: 0,
            effect: None,
            is_ai,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn add_score(&mut self, amount: i32) {
        self.score += amount;
    }

    pub fn effect(&self) -> Option<Effect> {
        self.effect
    }

    /// Whether the flee AI steers this player
    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// Take an item's effect. Score bonuses apply at once and clear.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = Some(effect);
        if let Some(bonus) = effect.instant_score() {
            self.score += bonus;
            self.effect = None;
        }
    }
}

/// Velocity for a human player from the held direction keys
pub fn input_velocity(input: &TickInput, speed: f32, policy: OppositeKeys) -> Vec2 {
    Vec2::new(
        axis(input.left, input.right, speed, policy),
        axis(input.up, input.down, speed, policy),
    )
}

/// `negative` wins over `positive` under `FirstWins`
fn axis(negative: bool, positive: bool, speed: f32, policy: OppositeKeys) -> f32 {
    match (negative, positive) {
        (false, false) => 0.0,
        (true, true) if policy == OppositeKeys::Cancel => 0.0,
        (true, _) => -speed,
        (false, true) => speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_add_score_accumulates() {
        let mut player = Player::new(false);
        player.add_score(3);
        player.add_score(4);
        player.add_score(-2);
        assert_eq!(player.score(), 5);
    }

    #[test]
    fn test_point_plus_clears_effect() {
        let mut player = Player::new(false);
        player.set_effect(Effect::PointPlus);
        assert_eq!(player.score(), 1);
        assert_eq!(player.effect(), None);
    }

    #[test]
    fn test_point_plus_big_clears_effect() {
        let mut player = Player::new(true);
        player.add_score(2);
        player.set_effect(Effect::PointPlusBig);
        assert_eq!(player.score(), 12);
        assert_eq!(player.effect(), None);
    }

    #[test]
    fn test_status_effect_is_held() {
        let mut player = Player::new(false);
        player.set_effect(Effect::Shield);
        assert_eq!(player.effect(), Some(Effect::Shield));
        assert_eq!(player.score(), 0);

        // A later bonus replaces the held effect, then clears itself
        player.set_effect(Effect::PointPlus);
        assert_eq!(player.effect(), None);
        assert_eq!(player.score(), 1);
    }

    #[test]
    fn test_input_velocity_single_keys() {
        let p = OppositeKeys::FirstWins;
        assert_eq!(input_velocity(&keys(false, false, false, false), 5.0, p), Vec2::ZERO);
        assert_eq!(input_velocity(&keys(true, false, false, false), 5.0, p), Vec2::new(0.0, -5.0));
        assert_eq!(input_velocity(&keys(false, true, false, false), 5.0, p), Vec2::new(0.0, 5.0));
        assert_eq!(input_velocity(&keys(false, false, true, false), 5.0, p), Vec2::new(-5.0, 0.0));
        assert_eq!(input_velocity(&keys(false, false, false, true), 5.0, p), Vec2::new(5.0, 0.0));
        assert_eq!(input_velocity(&keys(false, true, false, true), 5.0, p), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_opposite_keys_first_wins() {
        let v = input_velocity(&keys(true, true, true, true), 5.0, OppositeKeys::FirstWins);
        assert_eq!(v, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let v = input_velocity(&keys(true, true, true, true), 5.0, OppositeKeys::Cancel);
        assert_eq!(v, Vec2::ZERO);
        let v = input_velocity(&keys(false, true, true, true), 5.0, OppositeKeys::Cancel);
        assert_eq!(v, Vec2::new(0.0, 5.0));
    }
}
