//! Gapwing - a side-scrolling gap-dodging arcade flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, contacts, game state)
//! - `store`: Best-score persistence behind an abstract key/value store
//! - `hud`: Score label sink driven by simulation events

pub mod hud;
pub mod sim;
pub mod store;

pub use sim::{GameState, TickInput, tick};
pub use store::{MemoryStore, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 320.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Ground strip - top edge is the crash line
    pub const GROUND_HEIGHT: f32 = 80.0;
    pub const GROUND_TILE_WIDTH: f32 = 168.0;
    /// Seconds for a ground tile to travel its own width
    pub const GROUND_CYCLE_SECS: f32 = 5.0;

    /// Cloud strip - decorative, scrolls slowest
    pub const CLOUD_TILE_WIDTH: f32 = 160.0;
    pub const CLOUD_CYCLE_SECS: f32 = 20.0;

    /// Flyer body
    pub const FLYER_WIDTH: f32 = 34.0;
    pub const FLYER_HEIGHT: f32 = 24.0;
    pub const FLYER_START_X: f32 = FIELD_WIDTH * 0.2;
    pub const FLYER_START_Y: f32 = FIELD_HEIGHT * 0.7;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = -450.0;
    /// Vertical velocity set by a flap (pixels/s)
    pub const FLAP_VELOCITY: f32 = 130.0;

    /// Barrier columns
    pub const BARRIER_WIDTH: f32 = 52.0;
    pub const BARRIER_HEIGHT: f32 = 400.0;
    /// Seconds for a pair to cross the field plus its own width
    pub const BARRIER_CROSS_SECS: f32 = 4.0;

    /// Gap the flyer must thread, 3x its height
    pub const GAP_HEIGHT: f32 = FLYER_HEIGHT * 3.0;
    /// Vertical randomization range of the gap center, also 3x flyer height
    pub const GAP_CENTER_RANGE: f32 = FLYER_HEIGHT * 3.0;
    /// Lowest allowed gap center; the random offset is added to this.
    /// Centered between ground top and field top so the gap can never
    /// dip below the ground nor poke above the field.
    pub const LOWEST_GAP_CENTER: f32 =
        GROUND_HEIGHT + (FIELD_HEIGHT - GROUND_HEIGHT) / 2.0 - GAP_CENTER_RANGE / 2.0;

    /// Leftward scroll speeds at ScrollGroup speed 1 (pixels/s)
    pub const BARRIER_SPEED: f32 = (FIELD_WIDTH + BARRIER_WIDTH) / BARRIER_CROSS_SECS;
    pub const GROUND_SPEED: f32 = GROUND_TILE_WIDTH / GROUND_CYCLE_SECS;
    pub const CLOUD_SPEED: f32 = CLOUD_TILE_WIDTH / CLOUD_CYCLE_SECS;

    /// Obstacle spawn cadence in virtual ticks (2 seconds at 120 Hz)
    pub const SPAWN_INTERVAL_TICKS: u64 = 2 * 120;
    /// Terminal roll duration in ticks (1 second at 120 Hz)
    pub const ROLL_DURATION_TICKS: u32 = 120;

    /// Collectible seed item
    pub const SEED_SIZE: f32 = 16.0;
}
