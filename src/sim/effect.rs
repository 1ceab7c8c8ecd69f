//! Item effects

use serde::{Deserialize, Serialize};

use crate::consts::{POINT_PLUS_BIG_SCORE, POINT_PLUS_SCORE};

/// Gameplay modifier carried by an item and handed to the player who grabs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// +1 score, applied instantly
    PointPlus,
    /// +10 score, applied instantly
    PointPlusBig,
    // Status effects below are held on the player for outer systems to read
    SpeedUp,
    Slow,
    Shield,
}

impl Effect {
    /// Score granted on pickup, `None` for held status effects
    pub fn instant_score(&self) -> Option<i32> {
        match self {
            Effect::PointPlus => Some(POINT_PLUS_SCORE),
            Effect::PointPlusBig => Some(POINT_PLUS_BIG_SCORE),
            Effect::SpeedUp | Effect::Slow | Effect::Shield => None,
        }
    }

    /// Instant effects clear themselves as soon as they are applied
    pub fn is_instant(&self) -> bool {
        self.instant_score().is_some()
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Effect::PointPlus => "POINT_PLUS",
            Effect::PointPlusBig => "POINT_PLUS_BIG",
            Effect::SpeedUp => "SPEED_UP",
            Effect::Slow => "SLOW",
            Effect::Shield => "SHIELD",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_effects() {
        assert_eq!(Effect::PointPlus.instant_score(), Some(1));
        assert_eq!(Effect::PointPlusBig.instant_score(), Some(10));
        assert!(!Effect::Shield.is_instant());
        assert!(!Effect::SpeedUp.is_instant());
        assert!(!Effect::Slow.is_instant());
    }

    #[test]
    fn test_display() {
        assert_eq!(Effect::PointPlusBig.to_string(), "POINT_PLUS_BIG");
    }
}
