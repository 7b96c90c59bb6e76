//! Contact categories and resolution
//!
//! Detection is plain circle-vs-rectangle geometry; what a contact *means*
//! is decided by `resolve_contact`, a pure function over category masks so
//! the scoring/game-over rules test in isolation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Contact categories, combined by bitwise OR into masks
pub mod category {
    pub const FLYER: u32 = 1 << 0;
    pub const GROUND: u32 = 1 << 1;
    pub const BARRIER: u32 = 1 << 2;
    pub const SCORE: u32 = 1 << 3;
    pub const ITEM: u32 = 1 << 4;
}

/// What a contact between two bodies means for the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEffect {
    ScoreUp,
    GameOver,
    Ignore,
}

/// Decide what a contact means from the two category masks.
///
/// Membership is tested by bitmask intersection, not equality - a single
/// contact may carry composite masks. Score bits take precedence over
/// solid bits, so a gate crossing still counts even when the same event
/// also touches a barrier edge.
pub fn resolve_contact(a: u32, b: u32) -> ContactEffect {
    let combined = a | b;
    if combined & category::SCORE != 0 {
        ContactEffect::ScoreUp
    } else if combined & (category::GROUND | category::BARRIER) != 0 {
        ContactEffect::GameOver
    } else {
        ContactEffect::Ignore
    }
}

/// Axis-aligned rectangle, min/max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Check overlap between a circle and a rectangle
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    center.distance_squared(closest) <= radius * radius
}

/// Check the circle against the ground plane's top edge
pub fn circle_ground_overlap(center: Vec2, radius: f32, ground_top: f32) -> bool {
    center.y - radius <= ground_top
}
