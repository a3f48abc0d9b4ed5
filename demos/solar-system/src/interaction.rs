//! Pointer picking: hover labels and click-to-focus.
//!
//! Only the planets are pickable. The sun, orbit guides and stars are never
//! passed to the ray cast.

use glam::Vec2;
use orrery_engine::{EngineContext, EntityId};

use crate::focus::CameraFocus;
use crate::orbit::BodyState;

/// Label offset from the pointer, in pixels.
pub const LABEL_OFFSET: Vec2 = Vec2::new(12.0, 8.0);

#[derive(Debug, Default)]
pub struct InteractionController {
    /// Body index under the pointer after the last pointer move.
    hovered: Option<usize>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest body under `pointer` (viewport pixels), by index into `bodies`.
    pub fn pick(ctx: &EngineContext, pointer: Vec2, bodies: &[BodyState]) -> Option<usize> {
        let targets: Vec<EntityId> = bodies.iter().map(|b| b.entity).collect();
        let hit = ctx.raycast(pointer, &targets).into_iter().next()?;
        bodies.iter().position(|b| b.entity == hit.entity)
    }

    /// Show the hovered body's name next to the pointer, or hide the label
    /// when nothing is hit.
    pub fn on_pointer_move(&mut self, ctx: &mut EngineContext, pointer: Vec2, bodies: &[BodyState]) {
        self.hovered = Self::pick(ctx, pointer, bodies);
        match self.hovered {
            Some(index) => ctx.label.show(bodies[index].descriptor.name, pointer + LABEL_OFFSET),
            None => ctx.label.hide(),
        }
    }

    pub fn on_pointer_leave(&mut self, ctx: &mut EngineContext) {
        self.hovered = None;
        ctx.label.hide();
    }

    /// Start a camera focus on the clicked body. Clicking empty space does
    /// nothing. Returns the focused body index.
    pub fn on_click(
        &self,
        ctx: &EngineContext,
        pointer: Vec2,
        bodies: &[BodyState],
        focus: &mut CameraFocus,
    ) -> Option<usize> {
        let index = Self::pick(ctx, pointer, bodies)?;
        focus.focus_on(&ctx.camera, bodies[index].position());
        Some(index)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}
