/// Tuning parameters for the pulley scene
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;

    // Pulley
    pub const ANCHOR_X: f32 = 400.0;
    pub const ANCHOR_Y: f32 = 150.0;
    pub const PULLEY_RADIUS: f32 = 20.0;

    // Rope
    pub const ROPE_LENGTH: f32 = 600.0;
    pub const ROPE_TOLERANCE: f32 = 0.001;
    pub const ROPE_DAMPING: f32 = 0.98; // velocity multiplier per correction
    pub const ROPE_SPLIT: f32 = 0.5; // share of the correction taken by mass A

    // Bodies
    pub const BOX_SIZE: f32 = 50.0;
    pub const START_A_X: f32 = 200.0;
    pub const START_A_Y: f32 = 400.0;
    pub const START_B_X: f32 = 600.0;
    pub const START_B_Y: f32 = 400.0;
    pub const MASS_DEFAULT_KG: u32 = 10;
    pub const MASS_MIN_KG: u32 = 1;
    pub const MASS_MAX_KG: u32 = 50;

    // Mass change nudge, per kg of difference (engine force units)
    pub const NUDGE_STRENGTH: f32 = 0.0003;
    // Engine forces are per ms², the integrator runs in seconds
    pub const FORCE_SCALE: f32 = 1.0e6;

    // World
    pub const GRAVITY_Y: f32 = 1000.0; // px/s², canvas y points down
    pub const GROUND_Y: f32 = 580.0; // top edge of the ground slab

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
