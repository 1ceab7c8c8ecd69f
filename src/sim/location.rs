//! Immutable query points for distance math

use glam::Vec2;

use super::entity::Entity;

/// A point in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location(Vec2);

impl Location {
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// This location shifted by `delta`
    pub fn offset(&self, delta: Vec2) -> Self {
        Self(self.0 + delta)
    }

    /// Euclidean distance between two locations
    #[inline]
    pub fn distance_to(&self, other: Location) -> f32 {
        self.0.distance(other.0)
    }

    /// Distance to an entity's top-left corner
    #[inline]
    pub fn distance_to_entity(&self, entity: &Entity) -> f32 {
        self.0.distance(entity.pos)
    }
}

impl From<Vec2> for Location {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 0.0001);
        assert!((b.distance_to(a) - 5.0).abs() < 0.0001);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_offset() {
        let l = Location::new(10.0, 10.0).offset(Vec2::new(-5.0, 2.0));
        assert_eq!(l, Location::new(5.0, 12.0));
        assert_eq!(l.x(), 5.0);
        assert_eq!(l.y(), 12.0);
    }
}
