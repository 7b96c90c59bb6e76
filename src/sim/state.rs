//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here and serializes cleanly;
//! the per-tick event queue is the only transient.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::contact::{Rect, category};
use super::scheduler::{Scheduler, TimerKind};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; restart is the only way back
    GameOver,
}

/// State change notifications drained by the presentation layer each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    BestScoreChanged(u32),
    PhaseChanged(GamePhase),
}

/// The shared speed domain for everything that scrolls.
///
/// Invariant: this multiplier is global - no entity scrolls independently
/// of it, and the spawn scheduler's virtual clock is gated on it too.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollGroup {
    /// 1 = running, 0 = frozen
    pub speed: f32,
}

impl ScrollGroup {
    pub fn running() -> Self {
        Self { speed: 1.0 }
    }

    pub fn freeze(&mut self) {
        self.speed = 0.0;
    }

    pub fn resume(&mut self) {
        self.speed = 1.0;
    }

    pub fn is_frozen(&self) -> bool {
        self.speed <= 0.0
    }
}

/// Terminal death-roll in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    /// Radians applied per tick
    pub rate: f32,
    /// Ticks until the roll completes
    pub remaining: u32,
}

/// The player-controlled flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians; only the terminal roll ever writes this - normal flight
    /// never rotates the body
    pub rotation: f32,
    /// False once the terminal roll has completed
    pub active: bool,
    /// Categories the flyer physically responds to; narrows to ground-only
    /// on game over so the body settles instead of re-triggering
    pub collision_mask: u32,
    pub roll: Option<Roll>,
}

impl Default for Flyer {
    fn default() -> Self {
        Self::new()
    }
}

impl Flyer {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FLYER_START_X, FLYER_START_Y),
            vel: Vec2::ZERO,
            rotation: 0.0,
            active: true,
            collision_mask: category::GROUND | category::BARRIER,
            roll: None,
        }
    }

    /// Collision body radius, half the sprite height
    pub fn radius(&self) -> f32 {
        FLYER_HEIGHT / 2.0
    }

    /// Zero the velocity, then apply the fixed upward impulse
    pub fn flap(&mut self) {
        self.vel = Vec2::ZERO;
        self.vel.y = FLAP_VELOCITY;
    }

    /// True until the terminal roll completes; restart waits for false
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start the terminal roll: π·y·0.01 radians over one second. The
    /// y-coupling is cosmetic, carried over as-is.
    pub fn begin_roll(&mut self) {
        let angle = std::f32::consts::PI * self.pos.y * 0.01;
        self.roll = Some(Roll {
            rate: angle / ROLL_DURATION_TICKS as f32,
            remaining: ROLL_DURATION_TICKS,
        });
    }

    /// Step the terminal roll one tick; deactivates the flyer when done
    pub fn advance_roll(&mut self) {
        if let Some(mut roll) = self.roll.take() {
            self.rotation += roll.rate;
            roll.remaining -= 1;
            if roll.remaining == 0 {
                self.active = false;
            } else {
                self.roll = Some(roll);
            }
        }
    }

    /// Back to start coordinates, full collision response, upright
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Score gate latch: a gate reports contact exactly once
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreGate {
    pub triggered: bool,
}

/// Two barrier columns separated by a gap, plus the score gate behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Center x of both barrier columns
    pub x: f32,
    pub gap_center_y: f32,
    pub spawn_tick: u64,
    pub gate: ScoreGate,
}

impl ObstaclePair {
    pub fn upper_barrier(&self) -> Rect {
        let bottom = self.gap_center_y + GAP_HEIGHT / 2.0;
        Rect {
            min: Vec2::new(self.x - BARRIER_WIDTH / 2.0, bottom),
            max: Vec2::new(self.x + BARRIER_WIDTH / 2.0, bottom + BARRIER_HEIGHT),
        }
    }

    pub fn lower_barrier(&self) -> Rect {
        let top = self.gap_center_y - GAP_HEIGHT / 2.0;
        Rect {
            min: Vec2::new(self.x - BARRIER_WIDTH / 2.0, top - BARRIER_HEIGHT),
            max: Vec2::new(self.x + BARRIER_WIDTH / 2.0, top),
        }
    }

    /// Full-height trigger region just past the gap, one barrier width wide
    pub fn gate_rect(&self) -> Rect {
        let center_x = self.x + BARRIER_WIDTH + FLYER_WIDTH / 2.0;
        Rect::from_center_size(
            Vec2::new(center_x, FIELD_HEIGHT / 2.0),
            Vec2::new(BARRIER_WIDTH, FIELD_HEIGHT),
        )
    }

    /// The gate is the rightmost piece; once it clears the left edge the
    /// whole pair is gone
    pub fn is_off_screen(&self) -> bool {
        self.gate_rect().max.x < 0.0
    }
}

/// Passive collectible that drifts by at barrier speed. Carries its own
/// contact category but the resolver ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub id: u32,
    pub pos: Vec2,
}

impl Seed {
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(SEED_SIZE))
    }
}

/// A horizontally recycled strip of identical tiles (ground, clouds).
/// Tiles are never destroyed; a tile that scrolls fully off the left edge
/// wraps around to the right end of the strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileStrip {
    /// Left edge x of each tile
    pub tiles: Vec<f32>,
    pub tile_width: f32,
    /// Leftward speed at ScrollGroup speed 1
    pub speed: f32,
}

impl TileStrip {
    /// Enough tiles to cover `span` plus slack for the wrap seam
    pub fn new(tile_width: f32, speed: f32, span: f32) -> Self {
        let count = (span / tile_width) as usize + 2;
        Self {
            tiles: (0..count).map(|i| i as f32 * tile_width).collect(),
            tile_width,
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32, group_speed: f32) {
        let dx = self.speed * group_speed * dt;
        let strip_width = self.tile_width * self.tiles.len() as f32;
        for x in &mut self.tiles {
            *x -= dx;
            if *x <= -self.tile_width {
                *x += strip_width;
            }
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Rng for the nth obstacle spawn. Deriving per spawn keeps the state
    /// a single u64 and replays identically after deserialization.
    pub fn spawn_rng(&self, index: u64) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Successful gap passes this run
    pub score: u32,
    /// Best score seen since the store was read; monotonic
    pub best_score: u32,
    /// The one shared scroll-speed domain
    pub scroll: ScrollGroup,
    /// The one player body
    pub flyer: Flyer,
    /// Active pairs (sorted by id for determinism)
    pub obstacles: Vec<ObstaclePair>,
    /// Active seed items (sorted by id for determinism)
    pub seeds: Vec<Seed>,
    pub ground: TileStrip,
    pub clouds: TileStrip,
    /// Virtual-time timers (spawn cadence)
    pub scheduler: Scheduler,
    /// Obstacles spawned so far; salts the per-spawn RNG derivation
    pub spawn_count: u64,
    /// Drained by the presentation layer; not part of the replayable state
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut scheduler = Scheduler::default();
        scheduler.schedule_repeating(TimerKind::SpawnObstacle, SPAWN_INTERVAL_TICKS);

        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            score: 0,
            best_score: 0,
            scroll: ScrollGroup::running(),
            flyer: Flyer::new(),
            obstacles: Vec::new(),
            seeds: Vec::new(),
            ground: TileStrip::new(GROUND_TILE_WIDTH, GROUND_SPEED, FIELD_WIDTH),
            clouds: TileStrip::new(CLOUD_TILE_WIDTH, CLOUD_SPEED, FIELD_WIDTH),
            scheduler,
            spawn_count: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.place_start_seed();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued events to the presentation layer
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn one gated pair at the right edge of the field, gap center
    /// drawn uniformly from the allowed band.
    pub fn spawn_obstacle(&mut self) {
        use rand::Rng;

        let mut rng = self.rng_state.spawn_rng(self.spawn_count);
        self.spawn_count += 1;

        let gap_center_y = LOWEST_GAP_CENTER + rng.random_range(0.0..GAP_CENTER_RANGE);
        let id = self.next_entity_id();
        self.obstacles.push(ObstaclePair {
            id,
            x: FIELD_WIDTH + BARRIER_WIDTH / 2.0,
            gap_center_y,
            spawn_tick: self.time_ticks,
            gate: ScoreGate::default(),
        });
    }

    /// One seed drifts across mid-field each run
    pub fn place_start_seed(&mut self) {
        let id = self.next_entity_id();
        self.seeds.push(Seed {
            id,
            pos: Vec2::new(FIELD_WIDTH * 0.5, FIELD_HEIGHT * 0.5),
        });
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|p| p.id);
        self.seeds.sort_by_key(|s| s.id);
    }
}
