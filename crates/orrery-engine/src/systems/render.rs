use std::f32::consts::TAU;
use glam::Vec3;
use crate::components::entity::Entity;
use crate::components::mesh::{Color, Shape};
use crate::renderer::instance::{RenderBuffer, SphereInstance, Vertex};

fn vertex(pos: Vec3, color: Color, size: f32) -> Vertex {
    Vertex {
        x: pos.x,
        y: pos.y,
        z: pos.z,
        r: color.r,
        g: color.g,
        b: color.b,
        size,
        _pad: 0.0,
    }
}

/// Build the render buffer from a set of entities.
/// Spheres become instances, rings become line-list segments in the XZ
/// plane, point clouds become point vertices. Inactive and mesh-less
/// entities are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        match &mesh.shape {
            Shape::Sphere { radius } => buffer.spheres.push(SphereInstance {
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                radius: *radius,
                rotation_y: entity.rotation_y,
                r: mesh.color.r,
                g: mesh.color.g,
                b: mesh.color.b,
                emissive: mesh.emissive,
                lit: if mesh.lit { 1.0 } else { 0.0 },
                _pad0: 0.0,
                _pad1: 0.0,
            }),
            Shape::Ring { radius, segments } => {
                let segments = (*segments).max(3);
                let on_ring = |i: u32| {
                    let angle = i as f32 / segments as f32 * TAU;
                    entity.pos + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
                };
                for i in 0..segments {
                    buffer.lines.push(vertex(on_ring(i), mesh.color, 0.0));
                    buffer.lines.push(vertex(on_ring(i + 1), mesh.color, 0.0));
                }
            }
            Shape::Points { positions, size } => {
                buffer
                    .points
                    .extend(positions.iter().map(|p| vertex(entity.pos + *p, mesh.color, *size)));
            }
        }
    }
}
