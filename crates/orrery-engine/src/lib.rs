pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, CameraConfig, EngineContext, DEFAULT_SEED};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, Shape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::instance::{RenderBuffer, SphereInstance, Vertex};
pub use renderer::raycast::{pointer_to_ndc, Intersection, Ray, Raycaster};
pub use systems::lighting::{PointLight, LightState};
pub use systems::overlay::{Label, LabelOverlay};
pub use systems::render::build_render_buffer;
