//! Point light + ambient state for lit meshes.
//!
//! Lights are persistent and stay until explicitly removed.
//! Each frame the front end reads them through `buffer_ptr`.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::mesh::Color;

/// A point light radiating in all directions.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, decay]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance falloff exponent (2.0 = physically based inverse square).
    pub decay: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            decay: 2.0,
        }
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Active lights and ambient color for the scene.
///
/// Ambient defaults to white, which leaves lit meshes at full color when no
/// lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: Color,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: Color::WHITE,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient term. For a dark scene lit by point lights use low
    /// values, e.g. `Color::from_hex(0x222233).scaled(0.7)`.
    pub fn set_ambient(&mut self, ambient: Color) {
        self.ambient = ambient;
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Pointer to the light data for the front end.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), PointLight::FLOATS * 4);
    }

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), Color::new(1.0, 0.5, 0.0), 2.2);
        assert_eq!(light.pos(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.g, 0.5);
        assert_eq!(light.intensity, 2.2);
        assert_eq!(light.decay, 2.0);
        assert_eq!(light.with_decay(0.0).decay, 0.0);
    }

    #[test]
    fn light_state_keeps_insertion_order() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, Color::WHITE, 1.0));
        state.add(PointLight::new(Vec3::ONE, Color::WHITE, 0.5));
        assert_eq!(state.count(), 2);
        let intensities: Vec<f32> = state.iter().map(|l| l.intensity).collect();
        assert_eq!(intensities, vec![1.0, 0.5]);
    }

    #[test]
    fn ambient_defaults_to_white() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), Color::WHITE);
        state.set_ambient(Color::new(0.1, 0.1, 0.15));
        assert_eq!(state.ambient(), Color::new(0.1, 0.1, 0.15));
    }
}
