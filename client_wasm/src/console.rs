//! Logging seam between the simulation host and the browser console

/// Where host messages go
pub trait Environment {
    fn log(&self, msg: String);
}

/// Browser console via `console.log`
pub struct WasmEnv;

impl Environment for WasmEnv {
    #[cfg(target_arch = "wasm32")]
    fn log(&self, msg: String) {
        web_sys::console::log_1(&msg.into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(&self, msg: String) {
        println!("{}", msg);
    }
}
