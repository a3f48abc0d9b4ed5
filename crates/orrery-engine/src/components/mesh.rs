use glam::Vec3;
use serde::Serialize;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Multiply every channel by `factor` (e.g. light intensity).
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometry primitive attached to an entity. Positions are relative to the
/// entity's position.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Solid sphere.
    Sphere { radius: f32 },
    /// Circle in the XZ plane, drawn as a closed line loop.
    Ring { radius: f32, segments: u32 },
    /// Unconnected points drawn at a fixed screen size.
    Points { positions: Vec<Vec3>, size: f32 },
}

/// Visual component: shape plus material parameters the front end needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// Whether scene lights affect this mesh. Unlit meshes draw at full color.
    pub lit: bool,
    /// Glow multiplier (0.0 = none).
    pub emissive: f32,
}

impl MeshComponent {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            lit: true,
            emissive: 0.0,
        }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(Shape::Sphere { radius }, color)
    }

    pub fn ring(radius: f32, segments: u32, color: Color) -> Self {
        Self::new(Shape::Ring { radius, segments }, color).unlit()
    }

    pub fn points(positions: Vec<Vec3>, size: f32, color: Color) -> Self {
        Self::new(Shape::Points { positions, size }, color).unlit()
    }

    pub fn unlit(mut self) -> Self {
        self.lit = false;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    /// Radius used for ray picking, if this shape can be picked.
    pub fn pick_radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Sphere { radius } => Some(radius),
            Shape::Ring { .. } | Shape::Points { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_splits_channels() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn only_spheres_are_pickable() {
        assert_eq!(MeshComponent::sphere(2.0, Color::WHITE).pick_radius(), Some(2.0));
        assert_eq!(MeshComponent::ring(10.0, 64, Color::WHITE).pick_radius(), None);
        assert_eq!(MeshComponent::points(vec![Vec3::ZERO], 1.0, Color::WHITE).pick_radius(), None);
    }

    #[test]
    fn guides_default_to_unlit() {
        assert!(!MeshComponent::ring(10.0, 64, Color::WHITE).lit);
        assert!(MeshComponent::sphere(1.0, Color::WHITE).lit);
    }
}
