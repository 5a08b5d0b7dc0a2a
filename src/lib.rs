//! Spawn Cadence - periodic spawn controller
//!
//! Core modules:
//! - `sim`: Deterministic spawn timing and spawn point selection
//! - `factory`: Entity factory boundary and a recording implementation
//! - `platform`: Fixed-step clock driver
//! - `settings`: Data-driven spawner configuration

pub mod error;
pub mod factory;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SpawnError};
pub use factory::{EntityFactory, SpawnLog, SpawnedEntity, TemplateRef};
pub use settings::{SelectionMode, SpawnSettings};
pub use sim::{SpawnPhase, Spawner};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spawner configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Delay before the very first spawn
    pub const DEFAULT_MIN_SPAWN_DELAY: f32 = 0.5;
    /// Interval right after the first spawn
    pub const DEFAULT_START_SPAWN_TIME_DIFF: f32 = 6.0;
    /// Interval floor
    pub const DEFAULT_END_SPAWN_TIME_DIFF: f32 = 0.5;
    /// Spawns between two decay steps
    pub const DEFAULT_SPAWNS_BETWEEN_DECAY: u32 = 3;
    /// Seconds removed from the interval per decay step
    pub const DEFAULT_DECAY_STEP: f32 = 0.5;

    /// Smallest accepted decay step
    pub const MIN_DECAY_STEP: f32 = 0.1;
    /// Smallest accepted spawns-between-decay count
    pub const MIN_SPAWNS_BETWEEN_DECAY: u32 = 1;
}

/// Where an entity is placed: position plus orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    #[serde(default = "identity_rotation")]
    pub rotation: Quat,
}

fn identity_rotation() -> Quat {
    Quat::IDENTITY
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with no rotation
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Pose at `position` turned `yaw` radians around +Y
    pub fn facing(position: Vec3, yaw: f32) -> Self {
        Self::new(position, Quat::from_rotation_y(yaw))
    }

    /// Unit vector the pose looks along (-Z rotated)
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Evenly spaced poses on a circle in the XZ plane, each facing the center
pub fn ring_of_poses(count: usize, radius: f32) -> Vec<Pose> {
    use std::f32::consts::TAU;
    (0..count)
        .map(|i| {
            let theta = TAU * i as f32 / count as f32;
            let position = Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin());
            let to_center = -position;
            // yaw so that -Z points at the center
            let yaw = (-to_center.x).atan2(-to_center.z);
            Pose::facing(position, yaw)
        })
        .collect()
}
