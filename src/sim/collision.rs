//! Collision detection between the avatar and the playfield
//!
//! Everything is axis-aligned: the avatar is a square, each obstacle is a pair
//! of boxes around its gap, and the floor and ceiling are horizontal lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its bottom-left corner and size
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Shrink every side inward by `margin`
    #[inline]
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }
}

/// Do two boxes overlap once each is shrunk by the forgiveness margin?
///
/// Symmetric in its arguments. Boxes that only graze each other within the
/// margin do not count.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let a = a.shrink(COLLISION_MARGIN);
    let b = b.shrink(COLLISION_MARGIN);
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Which kind of surface the avatar ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    /// Ceiling or the upper segment of an obstacle
    Top,
    /// Floor or the lower segment of an obstacle
    Bottom,
}

/// The avatar's box at a given vertical offset
pub fn avatar_box(position: f32) -> Aabb {
    Aabb::from_origin(Vec2::new(AVATAR_X, position), Vec2::splat(AVATAR_SIZE))
}

impl Obstacle {
    /// Lower edge of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Upper edge of the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Segment above the gap, reaching the ceiling
    pub fn top_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_top()),
            Vec2::new(self.x + OBSTACLE_WIDTH, CEILING),
        )
    }

    /// Segment below the gap, reaching the floor
    pub fn bottom_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, GROUND),
            Vec2::new(self.x + OBSTACLE_WIDTH, self.gap_bottom()),
        )
    }
}

/// Check the avatar against every obstacle and the playfield bounds
///
/// Top surfaces are checked first, so an avatar touching both a top and a
/// bottom surface on the same tick reports `Top`. Floor and ceiling contact
/// is inclusive.
pub fn detect_hit(position: f32, obstacles: &[Obstacle]) -> Option<HitSide> {
    let avatar = avatar_box(position);

    let hits_top = position + AVATAR_SIZE >= CEILING
        || obstacles.iter().any(|o| overlaps(&avatar, &o.top_box()));
    if hits_top {
        return Some(HitSide::Top);
    }

    let hits_bottom =
        position <= GROUND || obstacles.iter().any(|o| overlaps(&avatar, &o.bottom_box()));
    if hits_bottom {
        return Some(HitSide::Bottom);
    }

    None
}
