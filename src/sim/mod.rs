//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod contact;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use contact::{
    ContactEffect, Rect, category, circle_ground_overlap, circle_rect_overlap, resolve_contact,
};
pub use scheduler::{Scheduler, Timer, TimerKind};
pub use state::{
    Flyer, GameEvent, GamePhase, GameState, ObstaclePair, RngState, Roll, ScoreGate, ScrollGroup,
    Seed, TileStrip,
};
pub use tick::{TickInput, restart, tick};
