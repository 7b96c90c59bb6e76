//! Virtual-time timer scheduling
//!
//! Timed actions (the obstacle spawn cadence) are timers with deadlines in
//! virtual ticks. Virtual time only advances while the ScrollGroup is
//! unfrozen, so freezing the world suspends every pending deadline at once
//! and resuming continues exactly where it left off.

use serde::{Deserialize, Serialize};

/// What a fired timer asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    SpawnObstacle,
}

/// A pending timed action
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timer {
    pub kind: TimerKind,
    /// Virtual-tick deadline
    pub deadline: u64,
    /// Re-arm interval for repeating timers
    pub repeat: Option<u64>,
}

/// Timer set polled once per tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    virtual_ticks: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn virtual_ticks(&self) -> u64 {
        self.virtual_ticks
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Fire once, `delay` virtual ticks from now
    pub fn schedule(&mut self, kind: TimerKind, delay: u64) {
        self.timers.push(Timer {
            kind,
            deadline: self.virtual_ticks + delay,
            repeat: None,
        });
    }

    /// Fire every `interval` virtual ticks, starting one interval from now
    pub fn schedule_repeating(&mut self, kind: TimerKind, interval: u64) {
        self.timers.push(Timer {
            kind,
            deadline: self.virtual_ticks + interval,
            repeat: Some(interval),
        });
    }

    /// Drop every pending timer (restart path)
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Advance one tick of wall time and collect due timers. Frozen time
    /// does not pass, so nothing can fire while the world is frozen.
    /// Repeating timers re-arm relative to their deadline, keeping the
    /// cadence drift-free.
    pub fn advance(&mut self, frozen: bool) -> Vec<TimerKind> {
        if frozen {
            return Vec::new();
        }
        self.virtual_ticks += 1;

        let now = self.virtual_ticks;
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.timers.len() {
            if self.timers[i].deadline <= now {
                fired.push(self.timers[i].kind);
                match self.timers[i].repeat {
                    Some(interval) => {
                        self.timers[i].deadline += interval;
                        i += 1;
                    }
                    None => {
                        self.timers.remove(i);
                    }
                }
            } else {
                i += 1;
            }
        }
        fired
    }
}
