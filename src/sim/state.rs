//! Spawner runtime state
//!
//! Everything the scheduler and selector mutate lives in one record so a
//! spawn attempt can be committed or dropped as a unit.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Which countdown the spawner is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPhase {
    /// Waiting out the delay before the very first spawn
    InitialDelay,
    /// Spawning on the decaying interval
    SteadyState,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Mutable spawner bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerState {
    pub phase: SpawnPhase,
    /// Successful spawns so far
    pub total_spawned: u32,
    /// Active interval between spawns (seconds)
    pub current_interval: f32,
    /// Time left until the next spawn attempt; non-positive while a
    /// failed attempt is waiting to be retried
    pub countdown: f32,
    /// Index of the most recently used spawn point
    pub last_point: Option<usize>,
}

impl SpawnerState {
    pub fn new(min_spawn_delay: f32) -> Self {
        Self {
            phase: SpawnPhase::InitialDelay,
            total_spawned: 0,
            current_interval: min_spawn_delay,
            countdown: min_spawn_delay,
            last_point: None,
        }
    }

    /// True while an expired countdown is waiting for a successful spawn
    pub fn is_due(&self) -> bool {
        self.countdown <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_new_state() {
        let state = SpawnerState::new(0.5);
        assert_eq!(state.phase, SpawnPhase::InitialDelay);
        assert_eq!(state.total_spawned, 0);
        assert_eq!(state.countdown, 0.5);
        assert_eq!(state.current_interval, 0.5);
        assert_eq!(state.last_point, None);
        assert!(!state.is_due());
        assert!(SpawnerState::new(0.0).is_due());
    }

    #[test]
    fn test_rng_state_is_reproducible() {
        let rng_state = RngState::new(42);
        let mut rng_a = rng_state.to_rng();
        let mut rng_b = rng_state.to_rng();
        for _ in 0..8 {
            let a: u32 = rng_a.random_range(0..100);
            let b: u32 = rng_b.random_range(0..100);
            assert_eq!(a, b);
        }
    }
}
