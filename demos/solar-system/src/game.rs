//! Orrery: eight planets on circular orbits around an emissive sun.
//!
//! Per-body speed sliders, a pause button, hover labels and
//! click-to-focus camera moves.

use glam::{Vec2, Vec3};
use serde::Serialize;
use orrery_engine::*;

use crate::bodies::{self, BodyDescriptor, BODIES};
use crate::focus::CameraFocus;
use crate::interaction::InteractionController;
use crate::orbit::{self, BodyState, SpeedTable};
use crate::scene::{self, SceneHandles};
use crate::sim::SimulationState;

// ── Controls from the UI ─────────────────────────────────────────────

pub const PAUSE_BUTTON: &str = "pauseBtn";

// ── Game event kinds to the UI ───────────────────────────────────────

/// a = 1.0 when paused, 0.0 when running.
const EVENT_PAUSE: f32 = 1.0;
/// a = index of the focused body.
const EVENT_FOCUS: f32 = 2.0;

// ── View ─────────────────────────────────────────────────────────────

const BACKGROUND: u32 = 0x111122;
const CAMERA_START: Vec3 = Vec3::new(0.0, 60.0, 160.0);

/// JSON view handed to the UI.
#[derive(Serialize)]
struct Snapshot<'a> {
    paused: bool,
    /// Last frame delta, reported even while paused.
    dt: f32,
    focusing: bool,
    focus_progress: Option<f32>,
    hovered: Option<&'static str>,
    label: Option<&'a Label>,
    bodies: Vec<BodySnapshot>,
}

#[derive(Serialize)]
struct BodySnapshot {
    #[serde(flatten)]
    descriptor: BodyDescriptor,
    slider: String,
    angle: f64,
    speed: f32,
}

pub struct Orrery {
    bodies: Vec<BodyState>,
    speeds: SpeedTable,
    sim: SimulationState,
    focus: CameraFocus,
    interaction: InteractionController,
    sun: Option<EntityId>,
    sun_spin: f32,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            speeds: SpeedTable::new(),
            sim: SimulationState::new(),
            focus: CameraFocus::new(),
            interaction: InteractionController::new(),
            sun: None,
            sun_spin: 0.0,
        }
    }

    /// Apply a slider change. Returns false for names that match no body.
    fn apply_slider(&mut self, name: &str, value: f32) -> bool {
        let body = BODIES.iter().find(|b| bodies::speed_slider_name(b) == name);
        match body {
            Some(body) => self.speeds.set(body.name, value),
            None => false,
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    self.interaction.on_pointer_move(ctx, Vec2::new(*x, *y), &self.bodies);
                }
                InputEvent::PointerLeave => self.interaction.on_pointer_leave(ctx),
                InputEvent::Click { x, y } => {
                    let picked = self.interaction.on_click(ctx, Vec2::new(*x, *y), &self.bodies, &mut self.focus);
                    if let Some(index) = picked {
                        log::debug!("focus on {}", self.bodies[index].descriptor.name);
                        ctx.emit_event(GameEvent::new(EVENT_FOCUS, index as f32));
                    }
                }
                InputEvent::Slider { name, value } => {
                    if !self.apply_slider(name, *value) {
                        log::debug!("ignoring unknown slider {name}");
                    }
                }
                InputEvent::Button { name } if name == PAUSE_BUTTON => {
                    let paused = self.sim.toggle_pause();
                    log::debug!("paused: {paused}");
                    ctx.emit_event(GameEvent::new(EVENT_PAUSE, if paused { 1.0 } else { 0.0 }));
                }
                InputEvent::Button { name } => log::debug!("ignoring unknown button {name}"),
            }
        }
    }

    fn advance(&mut self, ctx: &mut EngineContext, dt: f32) {
        orbit::advance_bodies(&mut self.bodies, &self.speeds, dt);
        orbit::sync_scene(&self.bodies, &mut ctx.scene);

        self.sun_spin += orbit::SUN_ROTATION_STEP;
        if let Some(sun) = self.sun.and_then(|id| ctx.scene.get_mut(id)) {
            sun.rotation_y = self.sun_spin;
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            background: Color::from_hex(BACKGROUND),
            camera: CameraConfig {
                position: CAMERA_START,
                target: Vec3::ZERO,
                ..CameraConfig::default()
            },
            max_spheres: 1 + BODIES.len(),
            ..GameConfig::default()
        }
    }

    /// Initial angles come from the context seed, which the host varies
    /// per session.
    fn init(&mut self, ctx: &mut EngineContext) {
        let seed = ctx.seed();
        let SceneHandles { sun, bodies } = scene::build_scene(ctx, seed);
        self.sun = Some(sun);
        self.bodies = bodies;
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        if let Some(dt) = self.sim.step(ctx.dt()) {
            self.advance(ctx, dt);
        }

        // Camera moves are independent of pause
        self.focus.step(&mut ctx.camera);
    }

    fn snapshot(&self, ctx: &EngineContext) -> serde_json::Value {
        let snapshot = Snapshot {
            paused: self.sim.paused,
            dt: self.sim.dt,
            focusing: self.focus.is_active(),
            focus_progress: self.focus.current().map(|a| a.progress),
            hovered: self.interaction.hovered().map(|i| self.bodies[i].descriptor.name),
            label: ctx.label.get(),
            bodies: self
                .bodies
                .iter()
                .map(|b| BodySnapshot {
                    descriptor: *b.descriptor,
                    slider: bodies::speed_slider_name(b.descriptor),
                    angle: b.angle,
                    speed: self.speeds.get(b.descriptor.name).unwrap_or(1.0),
                })
                .collect(),
        };
        match serde_json::to_value(&snapshot) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("snapshot failed: {err}");
                serde_json::Value::Null
            }
        }
    }
}
