//! Page-facing owner of one simulation and its lifecycle

use glam::Vec2;
use pulley_core::{ConfigError, RopeEnd, RopePath};
use thiserror::Error;

use crate::console::Environment;
use crate::fsm::{Lifecycle, LifecycleAction, LifecycleState};
use crate::options::SimOptions;
use crate::simulation::LocalPulley;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("simulation has been torn down")]
    TornDown,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Simulation plus lifecycle. After teardown the simulation is dropped and
/// every call fails with [`HostError::TornDown`].
pub struct PulleyHost {
    lifecycle: Lifecycle,
    sim: Option<LocalPulley>,
}

impl PulleyHost {
    pub fn new(options_json: Option<&str>, env: Box<dyn Environment>) -> Result<Self, HostError> {
        let options = match SimOptions::from_json(options_json) {
            Ok(options) => options,
            Err(e) => {
                env.log(format!("Pulley: invalid options: {}", e));
                return Err(e.into());
            }
        };
        let sim = LocalPulley::new(options, env)?;
        Ok(Self {
            lifecycle: Lifecycle::new(),
            sim: Some(sim),
        })
    }

    fn live(&self) -> Result<&LocalPulley, HostError> {
        self.sim.as_ref().ok_or(HostError::TornDown)
    }

    fn live_mut(&mut self) -> Result<&mut LocalPulley, HostError> {
        self.sim.as_mut().ok_or(HostError::TornDown)
    }

    /// Per animation frame; a paused simulation accepts the call but does not move
    pub fn tick(&mut self, frame_dt: f32) -> Result<u32, HostError> {
        let ticking = self.lifecycle.is_ticking();
        let sim = self.live_mut()?;
        Ok(if ticking { sim.advance(frame_dt) } else { 0 })
    }

    pub fn positions(&self) -> Result<(Vec2, Vec2), HostError> {
        Ok(self.live()?.positions())
    }

    pub fn rope_path(&self) -> Result<RopePath, HostError> {
        Ok(self.live()?.rope_path())
    }

    pub fn rope_polyline(&self, arc_segments: usize) -> Result<Vec<Vec2>, HostError> {
        Ok(self.live()?.rope_polyline(arc_segments))
    }

    pub fn set_mass(&mut self, end: RopeEnd, kg: u32) -> Result<(), HostError> {
        Ok(self.live_mut()?.set_mass(end, kg)?)
    }

    pub fn scatter(&mut self, seed: u64) -> Result<(), HostError> {
        self.live_mut()?.scatter(seed);
        Ok(())
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Pause, resume or tear down
    pub fn apply(&mut self, action: LifecycleAction) -> bool {
        if !self.lifecycle.transition(action) {
            return false;
        }
        if action == LifecycleAction::Teardown {
            if let Some(sim) = self.sim.take() {
                sim.log(format!("Pulley: torn down after {} ticks", sim.tick_count()));
            }
        }
        true
    }
}
