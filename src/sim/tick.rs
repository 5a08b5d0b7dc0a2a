//! Per-tick spawner update
//!
//! Ties the interval scheduler, the point selector and the entity factory
//! together. One call to [`Spawner::advance`] per simulation step.

use rand_pcg::Pcg32;

use super::schedule::IntervalScheduler;
use super::select::PlacementSelector;
use super::state::{RngState, SpawnPhase, SpawnerState};
use crate::Pose;
use crate::error::SpawnError;
use crate::factory::{EntityFactory, TemplateRef};
use crate::settings::{SelectionMode, SpawnSettings};

/// A periodic spawner: timing, placement and its runtime state
#[derive(Debug, Clone)]
pub struct Spawner {
    scheduler: IntervalScheduler,
    selector: PlacementSelector,
    spawn_points: Vec<Pose>,
    template: Option<TemplateRef>,
    state: SpawnerState,
    rng_state: RngState,
    rng: Pcg32,
    /// Reason of the last failed attempt, cleared on success
    last_failure: Option<SpawnError>,
}

impl Spawner {
    /// Create a spawner from (sanitized) settings
    pub fn new(settings: SpawnSettings) -> Self {
        let settings = settings.sanitized();
        let scheduler = IntervalScheduler::new(&settings);
        let rng_state = RngState::new(settings.seed);
        Self {
            state: scheduler.initial_state(),
            scheduler,
            selector: PlacementSelector::new(settings.selection_mode),
            spawn_points: settings.spawn_points,
            template: settings.template.map(TemplateRef),
            rng: rng_state.to_rng(),
            rng_state,
            last_failure: None,
        }
    }

    /// Advance the spawner by `dt` seconds. Returns true if an entity was
    /// spawned during this call.
    ///
    /// At most one spawn happens per call, however large `dt` is. A failed
    /// attempt leaves the countdown expired so the next call retries, and
    /// leaves the RNG where it was.
    pub fn advance<F: EntityFactory + ?Sized>(&mut self, dt: f32, factory: &mut F) -> bool {
        if !self.scheduler.run_countdown(&mut self.state, dt) {
            return false;
        }

        match self.try_spawn(factory) {
            Ok(pose) => {
                let was_initial = self.state.phase == SpawnPhase::InitialDelay;
                self.scheduler.record_spawn(&mut self.state);
                self.last_failure = None;

                log::debug!(
                    "Spawn #{} at {:?} (next in {:.2}s)",
                    self.state.total_spawned,
                    pose.position,
                    self.state.countdown
                );
                if was_initial {
                    log::info!(
                        "Initial delay over, spawning every {:.2}s",
                        self.state.current_interval
                    );
                }
                true
            }
            Err(err) => {
                if self.last_failure != Some(err) {
                    log::warn!("Spawn skipped: {err}; retrying every tick");
                    self.last_failure = Some(err);
                }
                false
            }
        }
    }

    /// Select a point and hand it to the factory. The selector index and the
    /// RNG draw are only committed when the factory accepts the spawn.
    fn try_spawn<F: EntityFactory + ?Sized>(&mut self, factory: &mut F) -> Result<Pose, SpawnError> {
        let template = self.template.as_ref().ok_or(SpawnError::NoEntityTemplate)?;
        let mut rng = self.rng.clone();
        let index = self.selector.choose(
            self.spawn_points.len(),
            self.state.last_point,
            &mut rng,
        )?;
        let pose = self.spawn_points[index];

        if !factory.try_spawn(template, &pose) {
            return Err(SpawnError::FactoryRejected);
        }
        self.rng = rng;
        self.state.last_point = Some(index);
        Ok(pose)
    }

    /// Restart from the initial delay with a freshly seeded RNG
    pub fn reset(&mut self) {
        self.state = self.scheduler.initial_state();
        self.rng = self.rng_state.to_rng();
        self.last_failure = None;
    }

    pub fn set_template(&mut self, template: Option<TemplateRef>) {
        self.template = template;
    }

    /// Replace all spawn points. Forgets the last used point since its
    /// index no longer refers to the same pose.
    pub fn set_spawn_points(&mut self, points: Vec<Pose>) {
        self.spawn_points = points;
        self.state.last_point = None;
    }

    pub fn push_spawn_point(&mut self, pose: Pose) {
        self.spawn_points.push(pose);
    }

    pub fn state(&self) -> &SpawnerState {
        &self.state
    }

    pub fn phase(&self) -> SpawnPhase {
        self.state.phase
    }

    pub fn total_spawned(&self) -> u32 {
        self.state.total_spawned
    }

    pub fn current_interval(&self) -> f32 {
        self.state.current_interval
    }

    pub fn countdown(&self) -> f32 {
        self.state.countdown
    }

    pub fn last_point(&self) -> Option<usize> {
        self.state.last_point
    }

    pub fn last_failure(&self) -> Option<SpawnError> {
        self.last_failure
    }

    pub fn spawn_points(&self) -> &[Pose] {
        &self.spawn_points
    }

    pub fn template(&self) -> Option<&TemplateRef> {
        self.template.as_ref()
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selector.mode
    }

    pub fn scheduler(&self) -> &IntervalScheduler {
        &self.scheduler
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}
