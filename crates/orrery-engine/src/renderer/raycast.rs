//! Ray picking against scene entities.
//!
//! Pointer position → NDC → world-space ray from the camera → analytic
//! ray/sphere tests against a caller-provided entity list.

use glam::{Vec2, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::renderer::camera::PerspectiveCamera;

/// Convert a pointer position in viewport pixels (origin top-left, y down)
/// to normalized device coordinates (origin center, y up, range [-1, 1]).
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the first intersection with a sphere,
    /// or None on a miss. A ray starting inside the sphere hits its far side.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }
}

/// A single ray hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub entity: EntityId,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Casts rays from a camera through the viewport.
#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    pub ray: Ray,
}

impl Raycaster {
    /// Build a ray from the camera through the given NDC coordinates.
    pub fn from_camera(ndc: Vec2, camera: &PerspectiveCamera) -> Self {
        let far = camera.unproject_far(ndc);
        Self {
            ray: Ray::new(camera.position, far - camera.position),
        }
    }

    /// Intersect the ray with the given entities. Only active entities with a
    /// pickable mesh participate. Results are ordered nearest first.
    pub fn intersect<'a>(&self, entities: impl IntoIterator<Item = &'a Entity>) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = entities
            .into_iter()
            .filter(|e| e.active)
            .filter_map(|e| {
                let radius = e.mesh.as_ref()?.pick_radius()?;
                let distance = self.ray.intersect_sphere(e.pos, radius)?;
                Some(Intersection { entity: e.id, distance })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Color, MeshComponent};

    fn ball(id: u32, pos: Vec3, radius: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(radius, Color::WHITE))
    }

    #[test]
    fn pointer_to_ndc_corners() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_to_ndc(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(Vec2::new(400.0, 300.0), viewport), Vec2::ZERO);
        assert_eq!(pointer_to_ndc(viewport, viewport), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn ray_sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let d = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((d - 8.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Behind the origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let d = ray.intersect_sphere(Vec3::ZERO, 3.0).unwrap();
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn intersections_sorted_nearest_first() {
        let mut camera = PerspectiveCamera::new(60.0, 1.0, 0.1, 1000.0);
        camera.set_position(Vec3::new(0.0, 0.0, 100.0));
        camera.look_at(Vec3::ZERO);

        let entities = vec![
            ball(1, Vec3::new(0.0, 0.0, -20.0), 3.0),
            ball(2, Vec3::new(0.0, 0.0, 20.0), 3.0),
            ball(3, Vec3::new(50.0, 0.0, 0.0), 3.0),
        ];

        let caster = Raycaster::from_camera(Vec2::ZERO, &camera);
        let hits = caster.intersect(&entities);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entity, EntityId(2));
        assert_eq!(hits[1].entity, EntityId(1));
        assert!((hits[0].distance - 77.0).abs() < 1e-3);
    }

    #[test]
    fn entities_without_sphere_or_inactive_are_ignored() {
        let mut camera = PerspectiveCamera::new(60.0, 1.0, 0.1, 1000.0);
        camera.set_position(Vec3::new(0.0, 0.0, 100.0));
        camera.look_at(Vec3::ZERO);

        let mut hidden = ball(1, Vec3::ZERO, 5.0);
        hidden.active = false;
        let ring = Entity::new(EntityId(2)).with_mesh(MeshComponent::ring(5.0, 32, Color::WHITE));
        let bare = Entity::new(EntityId(3));

        let caster = Raycaster::from_camera(Vec2::ZERO, &camera);
        assert!(caster.intersect(&[hidden, ring, bare]).is_empty());
    }
}
