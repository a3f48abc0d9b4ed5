use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera for 3D rendering.
/// Right-handed, Y-up, depth mapped to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction used to build the view matrix.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Cached projection matrix. Refreshed by `update_projection`.
    projection: Mat4,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// Camera position (w unused), for specular and distance effects.
    pub position: [f32; 4],
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Recompute the projection matrix from fov, aspect and clip planes.
    /// Call after changing any of them.
    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    /// Resize the viewport (e.g. on window resize). Idempotent.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return;
        }
        self.aspect = viewport_width / viewport_height;
        self.update_projection();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Orient the camera toward `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// World-space point on the far plane under the given NDC coordinates.
    pub fn unproject_far(&self, ndc: Vec2) -> Vec3 {
        self.view_projection()
            .inverse()
            .project_point3(Vec3::new(ndc.x, ndc.y, 1.0))
    }

    /// Project a world-space point to NDC. `z` is depth in [0, 1] for points
    /// between the clip planes.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection().project_point3(point)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }
}
