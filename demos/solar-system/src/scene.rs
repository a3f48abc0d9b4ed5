//! Scene construction: sun, planets, orbit guides, star field and lights.

use std::f64::consts::TAU;

use glam::Vec3;
use orrery_engine::{Color, EngineContext, Entity, EntityId, MeshComponent, PointLight, Rng};

use crate::bodies::{self, BODIES};
use crate::orbit::BodyState;

// ── Orbit guides ─────────────────────────────────────────────────────

const ORBIT_SEGMENTS: u32 = 100;
const ORBIT_COLOR: u32 = 0x444455;

// ── Star field ───────────────────────────────────────────────────────

const STAR_COUNT: usize = 400;
/// Edge length of the cube the stars are scattered in, centered on the origin.
const STAR_SPREAD: f32 = 1200.0;
const STAR_SIZE: f32 = 1.1;
const STAR_SEED: u64 = 0x5eed_57a2;

// ── Lights ───────────────────────────────────────────────────────────

const SUN_LIGHT_INTENSITY: f32 = 2.2;
const SUN_LIGHT_DECAY: f32 = 2.0;
const AMBIENT_COLOR: u32 = 0x222233;
const AMBIENT_INTENSITY: f32 = 0.7;

/// Entities created by `build_scene` that the simulation keeps updating.
pub struct SceneHandles {
    pub sun: EntityId,
    /// One per registered body, in registry order.
    pub bodies: Vec<BodyState>,
}

/// Spawn everything into `ctx` and return the handles the simulation needs.
/// Initial angles are uniform in [0, 2π) from a generator seeded with
/// `angle_seed`.
pub fn build_scene(ctx: &mut EngineContext, angle_seed: u64) -> SceneHandles {
    let sun = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(sun)
            .with_tag(bodies::SUN_NAME)
            .with_mesh(
                MeshComponent::sphere(bodies::SUN_RADIUS, Color::from_hex(bodies::SUN_COLOR))
                    .unlit()
                    .with_emissive(bodies::SUN_EMISSIVE),
            ),
    );

    let mut rng = Rng::new(angle_seed);
    let mut states = Vec::with_capacity(BODIES.len());
    for descriptor in BODIES.iter() {
        let angle = rng.next_f64() * TAU;

        let orbit = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(orbit)
                .with_tag(format!("{} orbit", descriptor.name))
                .with_mesh(MeshComponent::ring(
                    descriptor.distance,
                    ORBIT_SEGMENTS,
                    Color::from_hex(ORBIT_COLOR),
                )),
        );

        let id = ctx.next_id();
        let state = BodyState::new(descriptor, angle, id);
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(descriptor.name)
                .with_pos(state.position())
                .with_mesh(MeshComponent::sphere(descriptor.size, Color::from_hex(descriptor.color))),
        );
        states.push(state);
    }

    spawn_stars(ctx);

    ctx.lights.add(
        PointLight::new(Vec3::ZERO, Color::WHITE, SUN_LIGHT_INTENSITY).with_decay(SUN_LIGHT_DECAY),
    );
    ctx.lights
        .set_ambient(Color::from_hex(AMBIENT_COLOR).scaled(AMBIENT_INTENSITY));

    log::info!(
        "scene built: {} entities, {} bodies, {} lights",
        ctx.scene.len(),
        states.len(),
        ctx.lights.count()
    );

    SceneHandles { sun, bodies: states }
}

fn spawn_stars(ctx: &mut EngineContext) {
    let half = STAR_SPREAD / 2.0;
    let mut rng = Rng::new(STAR_SEED);
    let positions = (0..STAR_COUNT)
        .map(|_| Vec3::new(rng.range(-half, half), rng.range(-half, half), rng.range(-half, half)))
        .collect();

    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag("stars")
            .with_mesh(MeshComponent::points(positions, STAR_SIZE, Color::WHITE)),
    );
}
