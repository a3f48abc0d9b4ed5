use orrery_engine::{
    build_render_buffer, CameraUniform, EngineContext, FrameClock, Game, GameConfig,
    InputEvent, InputQueue, RenderBuffer,
};
use crate::label::DomLabel;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner through
/// `export_game!`, because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    render_buffer: RenderBuffer,
    config: GameConfig,
    initialized: bool,
    /// Camera data repacked every tick for reads from wasm memory.
    camera_uniform: CameraUniform,
    label: DomLabel,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let ctx = EngineContext::from_config(&config);
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_spheres),
            config,
            initialized: false,
            camera_uniform,
            label: DomLabel::new(),
        }
    }

    /// Initialize the game with this session's seed. Call once after
    /// construction.
    pub fn init(&mut self, seed: u64) {
        self.ctx.set_seed(seed);
        self.game.init(&mut self.ctx);
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Push an input event into the queue. Consumed on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply a new viewport size immediately.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.resize(width, height);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Run one frame. `now_ms` is the frame timestamp in milliseconds
    /// (e.g. the `requestAnimationFrame` argument).
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick(now_ms / 1000.0);
        self.ctx.begin_frame(dt);

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();

        if self.ctx.label.take_dirty() {
            if let Err(err) = self.label.sync(&self.ctx.label) {
                log::warn!("label update failed: {err:?}");
            }
        }
    }

    /// Game state as a JSON string for the UI layer.
    pub fn snapshot_json(&self) -> String {
        let value = self.game.snapshot(&self.ctx);
        match serde_json::to_string(&value) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("snapshot serialization failed: {err}");
                String::from("null")
            }
        }
    }

    // ---- Pointer accessors for reads from wasm memory ----

    pub fn spheres_ptr(&self) -> *const f32 {
        self.render_buffer.spheres_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.render_buffer.sphere_count()
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.render_buffer.lines_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.render_buffer.line_vertex_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.render_buffer.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.render_buffer.point_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frames()
    }

    // ---- Lighting accessors ----

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient().to_array()
    }

    pub fn background(&self) -> [f32; 3] {
        self.config.background.to_array()
    }

    pub fn max_spheres(&self) -> u32 {
        self.config.max_spheres as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Color, Entity, MeshComponent};

    /// Records what the runner hands to `update`. Never touches the label.
    #[derive(Default)]
    struct Recorder {
        seed: Option<u64>,
        dts: Vec<f32>,
        inputs: Vec<usize>,
    }

    impl Game for Recorder {
        fn init(&mut self, ctx: &mut EngineContext) {
            self.seed = Some(ctx.seed());
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_mesh(MeshComponent::sphere(1.0, Color::WHITE)));
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.dts.push(ctx.dt());
            self.inputs.push(input.iter().count());
        }
    }

    fn runner() -> GameRunner<Recorder> {
        let mut runner = GameRunner::new(Recorder::default());
        runner.init(1234);
        runner
    }

    #[test]
    fn init_passes_seed_and_fills_buffers() {
        let r = runner();
        assert_eq!(r.game.seed, Some(1234));
        assert_eq!(r.sphere_count(), 1);
        assert_eq!(r.frame_count(), 0);
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(Recorder::default());
        r.tick(16.0);
        assert!(r.game.dts.is_empty());
        assert_eq!(r.frame_count(), 0);
    }

    #[test]
    fn tick_converts_timestamps_and_drains_input() {
        let mut r = runner();
        r.push_input(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        r.push_input(InputEvent::Click { x: 1.0, y: 2.0 });
        r.tick(1000.0);
        r.tick(1250.0);

        assert_eq!(r.game.dts, vec![0.0, 0.25]);
        assert_eq!(r.game.inputs, vec![2, 0]);
        assert!(r.input.is_empty());
        assert_eq!(r.frame_count(), 2);
    }

    #[test]
    fn resize_updates_viewport_and_camera_uniform() {
        let mut r = runner();
        let before = r.camera_uniform.view_projection;
        r.resize(1000.0, 500.0);

        assert_eq!(r.ctx.viewport().x, 1000.0);
        assert_eq!(r.ctx.viewport().y, 500.0);
        assert!((r.ctx.camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(r.camera_uniform.view_projection, r.ctx.camera.uniform().view_projection);
        assert_ne!(r.camera_uniform.view_projection, before);
    }

    #[test]
    fn ticks_without_label_changes_skip_dom_sync() {
        let mut r = runner();
        r.tick(0.0);
        r.tick(16.0);
        assert!(r.ctx.label.get().is_none());
        assert!(!r.ctx.label.take_dirty());
    }
}
