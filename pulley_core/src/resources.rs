/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Random number generator
pub struct SimRng(pub rand::rngs::StdRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last micro-step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub rope_corrected: bool,
    pub rope_error: f32, // largest absolute length error seen before correction
    pub ground_contacts: u8,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rope_corrected = false;
        self.rope_error = 0.0;
        self.ground_contacts = 0;
    }
}
