//! Browser host for the pulley demo
//!
//! The page owns the animation loop and the canvas. Each frame it calls
//! `tick` with the elapsed time, then reads `positions` and `ropePath` to draw.
//! Slider changes go through `setMassA` / `setMassB`, and unmounting calls
//! `teardown` so late frames cannot reach the dropped simulation.

pub mod console;
pub mod fsm;
pub mod host;
pub mod options;
pub mod simulation;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use crate::console::WasmEnv;
    use crate::fsm::{Lifecycle, LifecycleState};
    use crate::host::{HostError, PulleyHost};
    use pulley_core::RopeEnd;
    use wasm_bindgen::prelude::*;

    impl From<HostError> for JsValue {
        fn from(e: HostError) -> Self {
            JsValue::from_str(&e.to_string())
        }
    }

    /// Engine version, for the page footer
    #[wasm_bindgen]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    #[wasm_bindgen]
    pub struct PulleySim {
        host: PulleyHost,
    }

    #[wasm_bindgen]
    impl PulleySim {
        /// `options` is an optional JSON object; see `SimOptions`
        #[wasm_bindgen(constructor)]
        pub fn new(options: Option<String>) -> Result<PulleySim, JsValue> {
            console_error_panic_hook::set_once();
            let host = PulleyHost::new(options.as_deref(), Box::new(WasmEnv))?;
            Ok(Self { host })
        }

        /// Advance by one animation frame's elapsed seconds; returns ticks run
        pub fn tick(&mut self, frame_dt: f32) -> Result<u32, JsValue> {
            Ok(self.host.tick(frame_dt)?)
        }

        /// `[ax, ay, bx, by]` for this frame
        pub fn positions(&self) -> Result<Vec<f32>, JsValue> {
            let (a, b) = self.host.positions()?;
            Ok(vec![a.x, a.y, b.x, b.y])
        }

        /// `[pax, pay, pbx, pby, cx, cy, radius, arcStart, arcEnd]`, arc drawn clockwise
        #[wasm_bindgen(js_name = ropePath)]
        pub fn rope_path(&self) -> Result<Vec<f32>, JsValue> {
            let path = self.host.rope_path()?;
            Ok(vec![
                path.point_a.x,
                path.point_a.y,
                path.point_b.x,
                path.point_b.y,
                path.center.x,
                path.center.y,
                path.radius,
                path.arc_start,
                path.arc_end,
            ])
        }

        /// Flat `[x0, y0, x1, y1, ...]` from A over the wheel to B, for plain line drawing
        #[wasm_bindgen(js_name = ropePolyline)]
        pub fn rope_polyline(&self, arc_segments: u32) -> Result<Vec<f32>, JsValue> {
            let points = self.host.rope_polyline(arc_segments as usize)?;
            Ok(points.iter().flat_map(|p| [p.x, p.y]).collect())
        }

        #[wasm_bindgen(js_name = setMassA)]
        pub fn set_mass_a(&mut self, kg: u32) -> Result<(), JsValue> {
            Ok(self.host.set_mass(RopeEnd::A, kg)?)
        }

        #[wasm_bindgen(js_name = setMassB)]
        pub fn set_mass_b(&mut self, kg: u32) -> Result<(), JsValue> {
            Ok(self.host.set_mass(RopeEnd::B, kg)?)
        }

        /// Re-drop both bodies at random spots
        pub fn scatter(&mut self, seed: u32) -> Result<(), JsValue> {
            Ok(self.host.scatter(seed as u64)?)
        }

        /// "PAUSE", "RESUME" or "TEARDOWN"; returns whether the transition applied
        pub fn lifecycle(&mut self, action: &str) -> Result<bool, JsValue> {
            let action = Lifecycle::parse_action(action)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown action: {}", action)))?;
            Ok(self.host.apply(action))
        }

        pub fn teardown(&mut self) {
            self.host.apply(crate::fsm::LifecycleAction::Teardown);
        }

        #[wasm_bindgen(getter)]
        pub fn state(&self) -> LifecycleState {
            self.host.state()
        }
    }
}
