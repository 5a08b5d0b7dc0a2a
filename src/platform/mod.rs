//! Platform clock driver
//!
//! Turns variable frame times into fixed simulation steps. Frame time is
//! clamped and accumulated, then drained in `SIM_DT` substeps with a cap per
//! frame so a long stall cannot trigger a spiral of death.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::factory::EntityFactory;
use crate::sim::Spawner;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    pub step: f32,
    pub max_substeps: u32,
    pub max_frame_dt: f32,
    accumulator: f32,
    /// Substeps run since creation
    pub ticks: u64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Feed one frame of `frame_dt` seconds, calling `on_step(step)` for each
    /// fixed substep. Returns the number of substeps run.
    pub fn update(&mut self, frame_dt: f32, mut on_step: impl FnMut(f32)) -> u32 {
        let dt = if frame_dt.is_nan() {
            0.0
        } else {
            frame_dt.clamp(0.0, self.max_frame_dt)
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            on_step(self.step);
            self.accumulator -= self.step;
            substeps += 1;
        }
        self.ticks += u64::from(substeps);
        substeps
    }

    /// Drive a spawner for one frame. Returns how many entities spawned.
    pub fn drive<F: EntityFactory + ?Sized>(
        &mut self,
        frame_dt: f32,
        spawner: &mut Spawner,
        factory: &mut F,
    ) -> u32 {
        let mut spawned = 0;
        self.update(frame_dt, |step| {
            if spawner.advance(step, &mut *factory) {
                spawned += 1;
            }
        });
        spawned
    }

    /// Leftover time not yet consumed by a substep
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * f64::from(self.step)
    }
}
