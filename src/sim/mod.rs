//! Deterministic spawn simulation
//!
//! All spawn timing and placement logic lives here. This module must be pure
//! and deterministic:
//! - Time only advances through explicit `advance(dt)` calls
//! - Seeded RNG only
//! - No engine or platform dependencies

pub mod schedule;
pub mod select;
pub mod state;
pub mod tick;

pub use schedule::IntervalScheduler;
pub use select::PlacementSelector;
pub use state::{RngState, SpawnPhase, SpawnerState};
pub use tick::Spawner;
