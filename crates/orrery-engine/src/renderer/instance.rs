use bytemuck::{Pod, Zeroable};

/// Per-sphere render data read by the JavaScript renderer.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// Rotation around the Y axis in radians.
    pub rotation_y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    /// 1.0 = affected by scene lights, 0.0 = unlit.
    pub lit: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Colored vertex shared by line lists and point clouds.
/// 8 floats = 32 bytes stride. `size` is only meaningful for points.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub size: f32,
    pub _pad: f32,
}

impl Vertex {
    pub const FLOATS: usize = 8;
}

/// Everything the front end draws in one frame.
pub struct RenderBuffer {
    pub spheres: Vec<SphereInstance>,
    /// Line list: every two vertices form one segment.
    pub lines: Vec<Vertex>,
    pub points: Vec<Vertex>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max_spheres: usize) -> Self {
        Self {
            spheres: Vec::with_capacity(max_spheres),
            lines: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
        self.lines.clear();
        self.points.clear();
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }

    // ---- Raw pointers for reads from wasm memory ----

    pub fn spheres_ptr(&self) -> *const f32 {
        self.spheres.as_ptr() as *const f32
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
