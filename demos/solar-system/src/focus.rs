//! Step-based camera move toward a clicked body.
//!
//! Progress advances by a fixed amount per tick, not per second, so the
//! move always takes the same number of frames.

use glam::Vec3;
use orrery_engine::PerspectiveCamera;

/// Camera end position relative to the focused body.
pub const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 8.0, 16.0);
/// Progress added per tick.
pub const FOCUS_STEP: f32 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusAnimation {
    pub start: Vec3,
    pub end: Vec3,
    /// Look-at point, fixed at the body's position when the click happened.
    pub target: Vec3,
    pub progress: f32,
}

impl FocusAnimation {
    pub fn new(start: Vec3, target: Vec3) -> Self {
        Self {
            start,
            end: target + FOCUS_OFFSET,
            target,
            progress: 0.0,
        }
    }

    /// Advance one step and return the camera position for this frame.
    pub fn step(&mut self) -> Vec3 {
        self.progress += FOCUS_STEP;
        self.start.lerp(self.end, self.progress.min(1.0))
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Holds at most one running focus animation.
#[derive(Debug, Default)]
pub struct CameraFocus {
    active: Option<FocusAnimation>,
}

impl CameraFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a move from the camera's current position toward `target`,
    /// discarding any move in progress.
    pub fn focus_on(&mut self, camera: &PerspectiveCamera, target: Vec3) {
        self.active = Some(FocusAnimation::new(camera.position, target));
    }

    /// Apply one animation frame to the camera. No-op when idle.
    pub fn step(&mut self, camera: &mut PerspectiveCamera) {
        let Some(anim) = &mut self.active else {
            return;
        };
        camera.set_position(anim.step());
        camera.look_at(anim.target);
        if anim.is_finished() {
            self.active = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&FocusAnimation> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(pos: Vec3) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(60.0, 4.0 / 3.0, 0.1, 1000.0);
        camera.set_position(pos);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn end_is_target_plus_offset() {
        let anim = FocusAnimation::new(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(anim.end, Vec3::new(30.0, 8.0, 16.0));
        assert_eq!(anim.progress, 0.0);
    }

    #[test]
    fn runs_to_completion_and_lands_on_end() {
        let mut camera = camera_at(Vec3::new(0.0, 60.0, 160.0));
        let mut focus = CameraFocus::new();
        let target = Vec3::new(0.0, 0.0, 30.0);
        focus.focus_on(&camera, target);

        let mut frames = 0;
        while focus.is_active() {
            focus.step(&mut camera);
            frames += 1;
            assert!(frames <= 30, "animation did not finish");
        }
        // 0.04 per step reaches 1.0 after 25 steps, give or take float error
        assert!((25..=26).contains(&frames), "frames = {frames}");
        assert!(camera.position.distance(target + FOCUS_OFFSET) < 1e-4);
        assert_eq!(camera.target, target);
    }

    #[test]
    fn first_step_moves_four_percent() {
        let start = Vec3::new(0.0, 60.0, 160.0);
        let mut anim = FocusAnimation::new(start, Vec3::ZERO);
        let pos = anim.step();
        let expected = start.lerp(FOCUS_OFFSET, 0.04);
        assert!(pos.distance(expected) < 1e-4);
    }

    #[test]
    fn new_focus_restarts_from_interpolated_position() {
        let mut camera = camera_at(Vec3::new(0.0, 60.0, 160.0));
        let mut focus = CameraFocus::new();
        focus.focus_on(&camera, Vec3::new(30.0, 0.0, 0.0));
        for _ in 0..12 {
            focus.step(&mut camera);
        }
        let midway = camera.position;
        let progress = focus.current().map(|a| a.progress).unwrap_or(0.0);
        assert!((progress - 0.48).abs() < 1e-4);

        let second = Vec3::new(-50.0, 0.0, 0.0);
        focus.focus_on(&camera, second);
        let anim = focus.current().copied().expect("second focus active");
        assert_eq!(anim.start, midway);
        assert_eq!(anim.target, second);
        assert_eq!(anim.progress, 0.0);
    }

    #[test]
    fn idle_step_leaves_camera_alone() {
        let mut camera = camera_at(Vec3::new(1.0, 2.0, 3.0));
        let before = camera.clone();
        CameraFocus::new().step(&mut camera);
        assert_eq!(camera, before);
    }
}
