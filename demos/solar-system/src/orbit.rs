//! Circular orbit updates. Pure math plus a thin sync into the scene.
//!
//! Angles are held in f64 so long sessions do not drift. Only convert to f32
//! at the final world-position step.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::Vec3;
use orrery_engine::{EntityId, Scene};

use crate::bodies::{BodyDescriptor, BODIES};

/// Self-rotation per tick for every planet, in radians.
pub const SELF_ROTATION_STEP: f32 = 0.02;
/// Self-rotation per tick for the sun, in radians.
pub const SUN_ROTATION_STEP: f32 = 0.004;

/// `angle + (2π / period) * multiplier * dt`. No clamping or wrapping.
pub fn advance_angle(angle: f64, period: f64, multiplier: f64, dt: f64) -> f64 {
    angle + (TAU / period) * multiplier * dt
}

/// Position on a circle of radius `distance` in the XZ plane.
pub fn orbital_position(angle: f64, distance: f32) -> Vec3 {
    let d = distance as f64;
    Vec3::new((angle.cos() * d) as f32, 0.0, (angle.sin() * d) as f32)
}

/// Mutable per-body state, one per registered descriptor.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub descriptor: &'static BodyDescriptor,
    /// Orbital angle in radians. Not normalized.
    pub angle: f64,
    /// Self-rotation around the body's own Y axis.
    pub spin: f32,
    /// Visual representation in the scene.
    pub entity: EntityId,
}

impl BodyState {
    pub fn new(descriptor: &'static BodyDescriptor, angle: f64, entity: EntityId) -> Self {
        Self {
            descriptor,
            angle,
            spin: 0.0,
            entity,
        }
    }

    pub fn position(&self) -> Vec3 {
        orbital_position(self.angle, self.descriptor.distance)
    }
}

/// Speed multiplier per body name. Always holds exactly one entry per
/// registered body.
#[derive(Debug, Clone)]
pub struct SpeedTable {
    multipliers: HashMap<&'static str, f32>,
}

impl SpeedTable {
    /// Every registered body at multiplier 1.
    pub fn new() -> Self {
        Self {
            multipliers: BODIES.iter().map(|b| (b.name, 1.0)).collect(),
        }
    }

    /// Multiplier for `name`, or `None` if no such body is registered.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.multipliers.get(name).copied()
    }

    /// Replace the multiplier for an existing body. Returns false and
    /// changes nothing if `name` is unknown. Any value is accepted,
    /// including zero and negatives.
    pub fn set(&mut self, name: &str, multiplier: f32) -> bool {
        match self.multipliers.get_mut(name) {
            Some(m) => {
                *m = multiplier;
                true
            }
            None => false,
        }
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance every body by `dt` seconds of real time. Bodies without a
/// speed entry use multiplier 1.
pub fn advance_bodies(bodies: &mut [BodyState], speeds: &SpeedTable, dt: f32) {
    for body in bodies.iter_mut() {
        let multiplier = speeds.get(body.descriptor.name).unwrap_or(1.0);
        body.angle = advance_angle(body.angle, body.descriptor.period, multiplier as f64, dt as f64);
        body.spin += SELF_ROTATION_STEP;
    }
}

/// Copy body positions and spins onto their scene entities.
pub fn sync_scene(bodies: &[BodyState], scene: &mut Scene) {
    for body in bodies {
        if let Some(entity) = scene.get_mut(body.entity) {
            entity.pos = body.position();
            entity.rotation_y = body.spin;
        }
    }
}
