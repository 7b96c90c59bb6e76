//! Fixed timestep simulation tick
//!
//! One tick routes input, polls the spawn scheduler, integrates physics,
//! scrolls the world, and runs the synchronous contact pass. All state
//! mutation happens here, in this order, once per tick.

use super::contact::{self, ContactEffect, category};
use super::scheduler::TimerKind;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// The single overloaded tap: flap while running, restart once the
    /// terminal roll has finished, otherwise ignored
    pub activate: bool,
    /// Demo mode - the tick synthesizes its own activate
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut input = *input;
    if input.autopilot {
        input.activate = autopilot_activate(state);
    }

    // Input routing: one tap means flap or restart depending on phase
    if input.activate {
        match state.phase {
            GamePhase::Running => state.flyer.flap(),
            GamePhase::GameOver if !state.flyer.is_active() => {
                restart(state);
                return;
            }
            // Terminal roll still playing; the tap is ignored
            GamePhase::GameOver => {}
        }
    }

    state.time_ticks += 1;

    // Spawn cadence runs on virtual time, frozen along with the world
    let frozen = state.scroll.is_frozen();
    for fired in state.scheduler.advance(frozen) {
        match fired {
            TimerKind::SpawnObstacle => state.spawn_obstacle(),
        }
    }

    // Gravity pulls the flyer for as long as it still animates
    if state.flyer.is_active() {
        state.flyer.vel.y += GRAVITY * dt;
        state.flyer.pos += state.flyer.vel * dt;
    }

    // Horizontal world motion, all under the one group speed
    let group_speed = state.scroll.speed;
    let dx = BARRIER_SPEED * group_speed * dt;
    for pair in &mut state.obstacles {
        pair.x -= dx;
    }
    for seed in &mut state.seeds {
        seed.pos.x -= dx;
    }
    state.ground.advance(dt, group_speed);
    state.clouds.advance(dt, group_speed);

    state.obstacles.retain(|p| !p.is_off_screen());
    state.seeds.retain(|s| s.rect().max.x > 0.0);

    resolve_contacts(state);

    // Settle on whatever the collision mask still responds to
    if state.flyer.collision_mask & category::GROUND != 0 {
        let floor = GROUND_HEIGHT + state.flyer.radius();
        if state.flyer.pos.y < floor {
            state.flyer.pos.y = floor;
            if state.flyer.vel.y < 0.0 {
                state.flyer.vel.y = 0.0;
            }
        }
    }

    // The terminal roll runs on real tick time; a frozen world does not
    // pause it
    state.flyer.advance_roll();
}

/// Synchronous contact pass, once per tick after integration.
///
/// Contacts are gathered in solid-first order (ground, then each pair's
/// barriers before its gate), so a kill and a gate crossing landing on the
/// same tick end the run without scoring.
fn resolve_contacts(state: &mut GameState) {
    let pos = state.flyer.pos;
    let radius = state.flyer.radius();

    let mut contacts: Vec<u32> = Vec::new();

    if contact::circle_ground_overlap(pos, radius, GROUND_HEIGHT) {
        contacts.push(category::GROUND);
    }
    for pair in &mut state.obstacles {
        if contact::circle_rect_overlap(pos, radius, &pair.upper_barrier())
            || contact::circle_rect_overlap(pos, radius, &pair.lower_barrier())
        {
            contacts.push(category::BARRIER);
        }
        if !pair.gate.triggered && contact::circle_rect_overlap(pos, radius, &pair.gate_rect()) {
            // The latch makes each gate report exactly once
            pair.gate.triggered = true;
            contacts.push(category::SCORE);
        }
    }
    for seed in &state.seeds {
        if contact::circle_rect_overlap(pos, radius, &seed.rect()) {
            contacts.push(category::ITEM);
        }
    }

    for other in contacts {
        apply_contact(state, other);
    }
}

fn apply_contact(state: &mut GameState, other: u32) {
    // Contacts after game over are no-ops, including gate crossings
    // queued in the same tick as the kill
    if state.phase == GamePhase::GameOver {
        return;
    }
    match contact::resolve_contact(category::FLYER, other) {
        ContactEffect::ScoreUp => score_up(state),
        ContactEffect::GameOver => game_over(state),
        ContactEffect::Ignore => {}
    }
}

fn score_up(state: &mut GameState) {
    state.score += 1;
    log::info!("score up: {}", state.score);
    state.push_event(GameEvent::ScoreChanged(state.score));
    if state.score > state.best_score {
        state.best_score = state.score;
        state.push_event(GameEvent::BestScoreChanged(state.best_score));
    }
}

fn game_over(state: &mut GameState) {
    log::info!("game over at score {}", state.score);
    state.phase = GamePhase::GameOver;
    state.scroll.freeze();
    // Settle on the ground only; barriers stop mattering
    state.flyer.collision_mask = category::GROUND;
    state.flyer.begin_roll();
    state.push_event(GameEvent::PhaseChanged(GamePhase::GameOver));
}

/// Reset all mutable run state. Valid only once the terminal roll has
/// finished; any other call is a no-op. This is the only path back to
/// Running.
pub fn restart(state: &mut GameState) {
    if state.phase != GamePhase::GameOver || state.flyer.is_active() {
        return;
    }
    log::info!("restart (best {})", state.best_score);

    state.score = 0;
    state.flyer.reset();
    state.obstacles.clear();
    state.seeds.clear();
    state.place_start_seed();
    state.scheduler.clear();
    state
        .scheduler
        .schedule_repeating(TimerKind::SpawnObstacle, SPAWN_INTERVAL_TICKS);
    state.phase = GamePhase::Running;
    state.scroll.resume();

    state.push_event(GameEvent::ScoreChanged(0));
    state.push_event(GameEvent::PhaseChanged(GamePhase::Running));
}

/// Demo pilot: hold the flyer near the next gap center; once the run is
/// over and the roll has played out, tap to restart.
fn autopilot_activate(state: &GameState) -> bool {
    match state.phase {
        GamePhase::GameOver => !state.flyer.is_active(),
        GamePhase::Running => {
            // Aim for the nearest gap still ahead of the flyer
            let target = state
                .obstacles
                .iter()
                .filter(|p| p.x + BARRIER_WIDTH / 2.0 >= state.flyer.pos.x)
                .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
                .map(|p| p.gap_center_y)
                .unwrap_or(LOWEST_GAP_CENTER + GAP_CENTER_RANGE / 2.0);
            state.flyer.vel.y <= 0.0 && state.flyer.pos.y < target
        }
    }
}
