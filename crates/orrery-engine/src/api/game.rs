use glam::{Vec2, Vec3};
use crate::api::types::{EntityId, GameEvent};
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::raycast::{pointer_to_ndc, Intersection, Raycaster};
use crate::systems::lighting::LightState;
use crate::systems::overlay::LabelOverlay;

/// Initial camera placement and projection.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (default: 60).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
        }
    }
}

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels, until the first resize.
    pub viewport_width: f32,
    /// Initial viewport height in pixels, until the first resize.
    pub viewport_height: f32,
    /// Clear color behind the scene.
    pub background: Color,
    pub camera: CameraConfig,
    /// Expected number of sphere instances (buffer pre-allocation).
    pub max_spheres: usize,
    /// Expected number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            background: Color::BLACK,
            camera: CameraConfig::default(),
            max_spheres: 64,
            max_events: 32,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. `ctx.dt()` holds the real time since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// JSON view of game state for the UI layer.
    fn snapshot(&self, _ctx: &EngineContext) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Seed a context starts with until the host provides one.
pub const DEFAULT_SEED: u64 = 0x0b17_a15e;

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub label: LabelOverlay,
    pub events: Vec<GameEvent>,
    viewport: Vec2,
    dt: f32,
    next_id: u32,
    seed: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context with camera and viewport taken from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(
            cam.fov_y_degrees,
            config.viewport_width / config.viewport_height,
            cam.near,
            cam.far,
        );
        camera.set_position(cam.position);
        camera.look_at(cam.target);

        Self {
            scene: Scene::new(),
            camera,
            lights: LightState::new(),
            label: LabelOverlay::new(),
            events: Vec::with_capacity(config.max_events),
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
            dt: 0.0,
            next_id: 1,
            seed: DEFAULT_SEED,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to JavaScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data and record this frame's delta.
    pub fn begin_frame(&mut self, dt: f32) {
        self.events.clear();
        self.dt = dt;
    }

    /// Per-session seed for games that randomize their initial state.
    /// Set by the host before `Game::init`.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Seconds since the previous frame.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Apply a new viewport size to the camera projection. Idempotent.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    /// Cast a ray from the camera through a pointer position (viewport
    /// pixels) against the given entities. Nearest hit first.
    pub fn raycast(&self, pointer: Vec2, targets: &[EntityId]) -> Vec<Intersection> {
        let ndc = pointer_to_ndc(pointer, self.viewport);
        Raycaster::from_camera(ndc, &self.camera).intersect(self.scene.select(targets))
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::MeshComponent;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn begin_frame_clears_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0));
        ctx.begin_frame(0.016);
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.dt(), 0.016);
    }

    #[test]
    fn seed_starts_at_default_and_can_be_replaced() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.seed(), DEFAULT_SEED);
        ctx.set_seed(99);
        assert_eq!(ctx.seed(), 99);
    }

    #[test]
    fn resize_updates_viewport_and_camera() {
        let mut ctx = EngineContext::new();
        ctx.resize(1920.0, 1080.0);
        assert_eq!(ctx.viewport(), Vec2::new(1920.0, 1080.0));
        assert!((ctx.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);

        ctx.resize(0.0, 0.0);
        assert_eq!(ctx.viewport(), Vec2::new(1920.0, 1080.0));
    }

    #[test]
    fn raycast_only_considers_targets() {
        let mut ctx = EngineContext::new();
        let center = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(center).with_mesh(MeshComponent::sphere(5.0, Color::WHITE)),
        );
        let pointer = ctx.viewport() / 2.0;

        assert!(ctx.raycast(pointer, &[]).is_empty());
        let hits = ctx.raycast(pointer, &[center]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entity, center);
    }
}
