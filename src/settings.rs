//! Spawner settings
//!
//! Loaded once before the spawner starts. Numeric fields are clamped to their
//! documented minimums here so the simulation never re-validates them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Pose;
use crate::consts::*;
use crate::error::SettingsError;

/// How the next spawn point is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionMode {
    /// Cycle through points in insertion order
    #[default]
    InOrder,
    /// Uniform random pick, never the same point twice in a row
    Random,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::InOrder => "InOrder",
            SelectionMode::Random => "Random",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inorder" | "in-order" | "in_order" | "order" => Some(SelectionMode::InOrder),
            "random" | "rand" => Some(SelectionMode::Random),
            _ => None,
        }
    }

    /// Parse or report the unknown name
    pub fn parse(s: &str) -> Result<Self, SettingsError> {
        Self::from_str(s).ok_or_else(|| SettingsError::UnknownSelectionMode(s.to_string()))
    }
}

/// Spawner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    // === Timing ===
    /// Countdown before the very first spawn (seconds)
    pub min_spawn_delay: f32,
    /// Interval used right after the first spawn (seconds)
    pub start_spawn_time_diff: f32,
    /// Floor the interval never goes below (seconds)
    pub end_spawn_time_diff: f32,
    /// Successful spawns between two decay steps
    pub spawns_between_decay: u32,
    /// Seconds removed from the interval per decay step
    pub decay_step: f32,

    // === Placement ===
    pub selection_mode: SelectionMode,
    pub spawn_points: Vec<Pose>,

    /// Entity template handed to the factory
    pub template: Option<String>,
    /// RNG seed for random selection
    pub seed: u64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            min_spawn_delay: DEFAULT_MIN_SPAWN_DELAY,
            start_spawn_time_diff: DEFAULT_START_SPAWN_TIME_DIFF,
            end_spawn_time_diff: DEFAULT_END_SPAWN_TIME_DIFF,
            spawns_between_decay: DEFAULT_SPAWNS_BETWEEN_DECAY,
            decay_step: DEFAULT_DECAY_STEP,

            selection_mode: SelectionMode::InOrder,
            spawn_points: Vec::new(),

            template: None,
            seed: 0,
        }
    }
}

impl SpawnSettings {
    /// Clamp numeric fields to their minimums
    pub fn sanitized(mut self) -> Self {
        self.min_spawn_delay = non_negative(self.min_spawn_delay);
        self.start_spawn_time_diff = non_negative(self.start_spawn_time_diff);
        self.end_spawn_time_diff = non_negative(self.end_spawn_time_diff);
        self.spawns_between_decay = self.spawns_between_decay.max(MIN_SPAWNS_BETWEEN_DECAY);
        self.decay_step = if self.decay_step.is_nan() {
            MIN_DECAY_STEP
        } else {
            self.decay_step.max(MIN_DECAY_STEP)
        };
        self
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: SpawnSettings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!(
            "Loaded spawner settings from {} ({} spawn points, {})",
            path.display(),
            settings.spawn_points.len(),
            settings.selection_mode.as_str()
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
