pub mod lighting;
pub mod overlay;
pub mod render;
