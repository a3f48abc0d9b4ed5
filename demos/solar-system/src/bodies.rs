//! Body registry: the sun and the eight planets, fixed at startup.
//!
//! Distances and sizes are scene units picked for readability, not to scale.
//! Periods are real seconds per revolution at speed multiplier 1.

use serde::Serialize;

/// Static description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyDescriptor {
    /// Unique display name. Also the entity tag.
    pub name: &'static str,
    /// Orbital radius around the origin.
    pub distance: f32,
    /// Visual sphere radius.
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Seconds per revolution.
    pub period: f64,
}

pub const BODY_COUNT: usize = 8;

pub static BODIES: [BodyDescriptor; BODY_COUNT] = [
    BodyDescriptor { name: "Mercury", distance: 16.0, size: 1.2, color: 0xb1b1b1, period: 8.0 },
    BodyDescriptor { name: "Venus", distance: 22.0, size: 2.2, color: 0xeedcb3, period: 20.0 },
    BodyDescriptor { name: "Earth", distance: 30.0, size: 2.4, color: 0x3399ff, period: 32.0 },
    BodyDescriptor { name: "Mars", distance: 38.0, size: 1.8, color: 0xff5533, period: 60.0 },
    BodyDescriptor { name: "Jupiter", distance: 50.0, size: 5.5, color: 0xf4e2d8, period: 180.0 },
    BodyDescriptor { name: "Saturn", distance: 62.0, size: 4.7, color: 0xf7e7b6, period: 400.0 },
    BodyDescriptor { name: "Uranus", distance: 74.0, size: 3.2, color: 0x7de2fc, period: 800.0 },
    BodyDescriptor { name: "Neptune", distance: 86.0, size: 3.1, color: 0x4062bb, period: 1600.0 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 8.0;
pub const SUN_COLOR: u32 = 0xffe066;
pub const SUN_EMISSIVE: f32 = 1.0;

/// Name of the UI slider controlling `body`'s speed multiplier,
/// e.g. `earthSpeed`.
pub fn speed_slider_name(body: &BodyDescriptor) -> String {
    format!("{}Speed", body.name.to_lowercase())
}
