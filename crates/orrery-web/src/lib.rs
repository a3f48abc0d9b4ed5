pub mod label;
pub mod runner;

pub use js_sys;
pub use label::DomLabel;
pub use orrery_engine::InputEvent;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MySimulation;
///
/// orrery_web::export_game!(MySimulation, "my-simulation");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => f(runner),
                    None => panic!("{}: not initialized, call game_init() first", $game_name),
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            // Wall-clock millis, so each page load gets its own layout
            let seed = $crate::js_sys::Date::now() as u64;
            with_runner(|r| r.init(seed));
            log::info!("{}: initialized", $game_name);
        }

        /// `now_ms` is the requestAnimationFrame timestamp.
        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave() {
            with_runner(|r| r.push_input($crate::InputEvent::PointerLeave));
        }

        #[wasm_bindgen]
        pub fn game_click(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::Click { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_slider(name: &str, value: f32) {
            let name = name.to_string();
            with_runner(|r| r.push_input($crate::InputEvent::Slider { name, value }));
        }

        #[wasm_bindgen]
        pub fn game_button(name: &str) {
            let name = name.to_string();
            with_runner(|r| r.push_input($crate::InputEvent::Button { name }));
        }

        #[wasm_bindgen]
        pub fn game_snapshot() -> String {
            with_runner(|r| r.snapshot_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_spheres_ptr() -> *const f32 {
            with_runner(|r| r.spheres_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_lines_ptr() -> *const f32 {
            with_runner(|r| r.lines_ptr())
        }

        #[wasm_bindgen]
        pub fn get_line_vertex_count() -> u32 {
            with_runner(|r| r.line_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_points_ptr() -> *const f32 {
            with_runner(|r| r.points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_point_count() -> u32 {
            with_runner(|r| r.point_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_frame_count() -> f64 {
            with_runner(|r| r.frame_count() as f64)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient()[0])
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient()[1])
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient()[2])
        }

        #[wasm_bindgen]
        pub fn get_background_r() -> f32 {
            with_runner(|r| r.background()[0])
        }

        #[wasm_bindgen]
        pub fn get_background_g() -> f32 {
            with_runner(|r| r.background()[1])
        }

        #[wasm_bindgen]
        pub fn get_background_b() -> f32 {
            with_runner(|r| r.background()[2])
        }
    };
}
