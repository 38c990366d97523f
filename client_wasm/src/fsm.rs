//! Simulation lifecycle state machine
//!
//! The page drives ticks and render frames from its own animation loop. Once
//! the component unmounts, the lifecycle moves to `TornDown` and every later
//! tick or render request is refused instead of touching released state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Lifecycle states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Running,
    Paused,
    TornDown,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Pause,
    Resume,
    Teardown,
}

/// Simulation lifecycle
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Running,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Attempt a transition; returns whether it was accepted
    pub fn transition(&mut self, action: LifecycleAction) -> bool {
        match self.next_state(action) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Parse an action name from JS
    pub fn parse_action(action: &str) -> Option<LifecycleAction> {
        match action {
            "PAUSE" => Some(LifecycleAction::Pause),
            "RESUME" => Some(LifecycleAction::Resume),
            "TEARDOWN" => Some(LifecycleAction::Teardown),
            _ => None,
        }
    }

    fn next_state(&self, action: LifecycleAction) -> Option<LifecycleState> {
        match (self.state, action) {
            (LifecycleState::Running, LifecycleAction::Pause) => Some(LifecycleState::Paused),
            (LifecycleState::Paused, LifecycleAction::Resume) => Some(LifecycleState::Running),
            (LifecycleState::Running | LifecycleState::Paused, LifecycleAction::Teardown) => {
                Some(LifecycleState::TornDown)
            }

            // Torn down is terminal
            _ => None,
        }
    }

    /// Ticks advance the simulation only while running
    pub fn is_ticking(&self) -> bool {
        self.state == LifecycleState::Running
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
