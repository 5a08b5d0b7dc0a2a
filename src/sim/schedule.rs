//! Interval scheduling
//!
//! Countdown handling and the step-wise interval decay. The interval only
//! changes every `spawns_between_decay` successful spawns and never drops
//! below the configured floor.

use serde::{Deserialize, Serialize};

use super::state::{SpawnPhase, SpawnerState};
use crate::settings::SpawnSettings;

/// Timing half of the spawner configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalScheduler {
    pub min_spawn_delay: f32,
    pub start_spawn_time_diff: f32,
    pub end_spawn_time_diff: f32,
    pub spawns_between_decay: u32,
    pub decay_step: f32,
}

impl IntervalScheduler {
    pub fn new(settings: &SpawnSettings) -> Self {
        Self {
            min_spawn_delay: settings.min_spawn_delay,
            start_spawn_time_diff: settings.start_spawn_time_diff,
            end_spawn_time_diff: settings.end_spawn_time_diff,
            spawns_between_decay: settings.spawns_between_decay.max(1),
            decay_step: settings.decay_step,
        }
    }

    /// Fresh runtime state for this schedule
    pub fn initial_state(&self) -> SpawnerState {
        SpawnerState::new(self.min_spawn_delay)
    }

    /// Run the countdown by `dt`. Returns true when a spawn attempt is due.
    ///
    /// An already expired countdown (a failed attempt waiting for a retry) is
    /// not decremented further. Zero elapsed time never makes a spawn due.
    pub fn run_countdown(&self, state: &mut SpawnerState, dt: f32) -> bool {
        if dt.is_nan() || dt <= 0.0 {
            return false;
        }
        if state.countdown > 0.0 {
            state.countdown -= dt;
        }
        state.is_due()
    }

    /// Book a successful spawn and rearm the countdown
    pub fn record_spawn(&self, state: &mut SpawnerState) {
        state.total_spawned += 1;

        match state.phase {
            SpawnPhase::InitialDelay => {
                state.current_interval = self.start_spawn_time_diff.max(self.end_spawn_time_diff);
                state.phase = SpawnPhase::SteadyState;
            }
            SpawnPhase::SteadyState => {
                if state.total_spawned % self.spawns_between_decay.max(1) == 0 {
                    state.current_interval = self.decayed(state.current_interval);
                }
            }
        }
        state.countdown = state.current_interval;
    }

    /// One decay step applied to `interval`, clamped at the floor
    #[inline]
    pub fn decayed(&self, interval: f32) -> f32 {
        (interval - self.decay_step).max(self.end_spawn_time_diff)
    }
}
