use glam::Vec2;
use hecs::World;
use pulley_core::systems::set_mass;
use pulley_core::{
    create_rig, rig_positions, scatter_rig, step, tangent_points, ConfigError, Events, Params,
    PulleyConfig, PulleyRig, RopeEnd, RopePath, Scene, SimRng, Time,
};

use crate::console::Environment;
use crate::options::SimOptions;
use crate::state::{FrameState, Snapshot};

/// Pulley simulation owned by the page, ticked at a fixed rate
pub struct LocalPulley {
    pub world: World,
    pub time: Time,
    pub rig: PulleyRig,
    pub scene: Scene,
    pub config: PulleyConfig,
    pub events: Events,
    pub rng: SimRng,
    frames: FrameState,
    accumulator: f32,
    tick: u32,
    env: Box<dyn Environment>,
}

impl LocalPulley {
    pub fn new(options: SimOptions, env: Box<dyn Environment>) -> Result<Self, ConfigError> {
        let config = options.scene;
        let mut world = World::new();
        let rig = create_rig(&mut world, &config)?;
        let mut rng = SimRng::new(options.seed.unwrap_or_default());
        if options.seed.is_some() {
            scatter_rig(&mut world, &rig, &mut rng);
        }

        let (mass_a, mass_b) =
            rig_positions(&world, &rig).unwrap_or((config.start_a, config.start_b));
        let frames = FrameState::new(Snapshot {
            mass_a,
            mass_b,
            tick: 0,
        });

        env.log(format!(
            "Pulley: rope {} over ({}, {}), masses {} kg / {} kg",
            config.rope.target_length,
            config.anchor.x,
            config.anchor.y,
            config.mass_a,
            config.mass_b
        ));

        Ok(Self {
            world,
            time: Time::new(Params::FIXED_DT, 0.0),
            rig,
            scene: Scene::new(&config),
            config,
            events: Events::new(),
            rng,
            frames,
            accumulator: 0.0,
            tick: 0,
            env,
        })
    }

    /// Feed one render frame's elapsed time; runs zero or more fixed ticks
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // A frame time built from an undefined timestamp arrives as NaN
        if !frame_dt.is_finite() {
            return 0;
        }
        // A backgrounded tab can hand us seconds at once
        self.accumulator += frame_dt.clamp(0.0, Params::MAX_DT);

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            self.step_once();
            ticks += 1;
        }

        self.frames.set_alpha(self.accumulator / Params::FIXED_DT);
        ticks
    }

    fn step_once(&mut self) {
        self.time.dt = Params::FIXED_DT;
        step(
            &mut self.world,
            &mut self.time,
            &self.rig,
            &self.scene,
            &self.config,
            &mut self.events,
        );
        self.tick += 1;

        if let Some((mass_a, mass_b)) = rig_positions(&self.world, &self.rig) {
            self.frames.push(Snapshot {
                mass_a,
                mass_b,
                tick: self.tick,
            });
        }
    }

    /// Slider input for one side
    pub fn set_mass(&mut self, end: RopeEnd, kg: u32) -> Result<(), ConfigError> {
        match set_mass(&mut self.world, &self.rig, end, kg, &self.config) {
            Ok(()) => {
                self.env.log(format!("Pulley: mass {:?} set to {} kg", end, kg));
                Ok(())
            }
            Err(e) => {
                self.env.log(format!("Pulley: rejected mass change: {}", e));
                Err(e)
            }
        }
    }

    /// Re-drop both bodies at random spots from `seed`
    pub fn scatter(&mut self, seed: u64) {
        self.rng = SimRng::new(seed);
        scatter_rig(&mut self.world, &self.rig, &mut self.rng);
        if let Some((mass_a, mass_b)) = rig_positions(&self.world, &self.rig) {
            self.frames.reset(Snapshot {
                mass_a,
                mass_b,
                tick: self.tick,
            });
        }
        self.accumulator = 0.0;
    }

    /// Interpolated positions for the current render frame
    pub fn positions(&self) -> (Vec2, Vec2) {
        (self.frames.mass_a(), self.frames.mass_b())
    }

    /// Rope outline for the current render frame
    pub fn rope_path(&self) -> RopePath {
        let (mass_a, mass_b) = self.positions();
        tangent_points(self.rig.anchor, self.rig.radius, mass_a, mass_b)
    }

    /// Whole rope as points, for renderers that cannot draw arcs
    pub fn rope_polyline(&self, arc_segments: usize) -> Vec<Vec2> {
        let (mass_a, mass_b) = self.positions();
        self.rope_path().polyline(mass_a, mass_b, arc_segments)
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn log(&self, msg: String) {
        self.env.log(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulley_core::{rope_length_error, MassPoint};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockEnv {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl Environment for MockEnv {
        fn log(&self, msg: String) {
            self.lines.borrow_mut().push(msg);
        }
    }

    fn setup() -> (LocalPulley, MockEnv) {
        let env = MockEnv::default();
        let sim = LocalPulley::new(SimOptions::default(), Box::new(env.clone())).unwrap();
        (sim, env)
    }

    #[test]
    fn test_startup_is_logged() {
        let (_sim, env) = setup();
        let lines = env.lines.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("rope 600"), "got {}", lines[0]);
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let (mut sim, _env) = setup();

        assert_eq!(sim.advance(Params::FIXED_DT * 0.5), 0, "Not a full tick yet");
        assert_eq!(sim.advance(Params::FIXED_DT * 0.6), 1);
        assert_eq!(sim.tick_count(), 1);
        // Clamped to MAX_DT: at most six ticks per frame
        assert!(sim.advance(5.0) <= 6);
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let (mut sim, _env) = setup();
        sim.advance(Params::FIXED_DT);

        assert_eq!(sim.advance(f32::NAN), 0);
        assert_eq!(sim.advance(f32::INFINITY), 0);

        let mut ticks = 0;
        for _ in 0..100 {
            ticks += sim.advance(Params::FIXED_DT);
        }
        assert!(ticks >= 99, "Still ticking after a bad frame, ran {ticks}");
        let (mass_a, mass_b) = sim.positions();
        assert!(mass_a.is_finite() && mass_b.is_finite());
        assert!(sim.rope_path().point_a.is_finite());
    }

    #[test]
    fn test_rope_polyline_runs_between_bodies() {
        let (mut sim, _env) = setup();
        sim.advance(Params::FIXED_DT * 2.0);

        let (mass_a, mass_b) = sim.positions();
        let points = sim.rope_polyline(8);

        assert_eq!(points.len(), 11);
        assert_eq!(points[0], mass_a);
        assert_eq!(points[10], mass_b);
        for p in &points[1..10] {
            assert!((p.distance(sim.rig.anchor) - sim.rig.radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rope_stays_taut_while_running() {
        let (mut sim, _env) = setup();
        for _ in 0..120 {
            sim.advance(Params::FIXED_DT);
            let snapshot = *sim.frames.current();
            let error = rope_length_error(
                sim.rig.anchor,
                snapshot.mass_a,
                snapshot.mass_b,
                sim.config.rope.target_length,
            );
            assert!(error.abs() <= sim.config.rope.tolerance, "error {error}");
        }
    }

    #[test]
    fn test_set_mass_logs_and_rejects() {
        let (mut sim, env) = setup();

        sim.set_mass(RopeEnd::A, 25).unwrap();
        let result = sim.set_mass(RopeEnd::B, 0);

        assert!(matches!(result, Err(ConfigError::MassOutOfRange { kg: 0, .. })));
        let mass_a = sim.world.get::<&MassPoint>(sim.rig.mass_a).unwrap().mass;
        assert_eq!(mass_a, 25.0);
        let lines = env.lines.borrow();
        assert!(lines[1].contains("25 kg"));
        assert!(lines[2].contains("rejected"));
    }

    #[test]
    fn test_rope_path_uses_render_positions() {
        let (mut sim, _env) = setup();
        sim.advance(Params::FIXED_DT * 3.5);

        let (mass_a, _) = sim.positions();
        let path = sim.rope_path();

        assert!((path.point_a.distance(sim.rig.anchor) - sim.rig.radius).abs() < 1e-3);
        let toward_a = (mass_a - sim.rig.anchor).normalize();
        assert!((path.point_a - sim.rig.anchor).normalize().dot(toward_a) > 0.9999);
    }

    #[test]
    fn test_seeded_start_scatters() {
        let options = SimOptions {
            seed: Some(3),
            ..SimOptions::default()
        };
        let sim = LocalPulley::new(options, Box::new(MockEnv::default())).unwrap();

        let (mass_a, mass_b) = sim.positions();
        assert_ne!(mass_a, sim.config.start_a, "Seed overrides start positions");
        assert!(mass_a.x < sim.rig.anchor.x && mass_b.x > sim.rig.anchor.x);
    }

    #[test]
    fn test_scatter_resets_interpolation() {
        let (mut sim, _env) = setup();
        sim.advance(Params::FIXED_DT * 2.5);

        sim.scatter(11);

        let (mass_a, _) = sim.positions();
        let body = sim.world.get::<&MassPoint>(sim.rig.mass_a).unwrap();
        assert_eq!(mass_a, body.pos, "No blending across a teleport");
    }
}
