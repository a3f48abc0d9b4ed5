//! Screen-space text label overlay (e.g. hover tooltips).
//!
//! The label does not exist until first shown; after that it is reused and
//! only its text, position and visibility change. The front end mirrors it
//! into a single DOM element.

use glam::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Top-left corner in viewport pixels.
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

/// Singleton label plus a change flag so presenters can skip idle frames.
#[derive(Debug, Default)]
pub struct LabelOverlay {
    label: Option<Label>,
    dirty: bool,
}

impl LabelOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` at `pos`, creating the label on first use.
    pub fn show(&mut self, text: &str, pos: Vec2) {
        match &mut self.label {
            Some(label) => {
                if label.text != text {
                    label.text.clear();
                    label.text.push_str(text);
                }
                label.x = pos.x;
                label.y = pos.y;
                label.visible = true;
            }
            None => {
                self.label = Some(Label {
                    text: text.to_owned(),
                    x: pos.x,
                    y: pos.y,
                    visible: true,
                });
            }
        }
        self.dirty = true;
    }

    /// Hide the label. No-op if it was never created.
    pub fn hide(&mut self) {
        if let Some(label) = &mut self.label {
            if label.visible {
                label.visible = false;
                self.dirty = true;
            }
        }
    }

    pub fn get(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.label.as_ref().is_some_and(|l| l.visible)
    }

    /// Visible label text, if any.
    pub fn text(&self) -> Option<&str> {
        self.label
            .as_ref()
            .filter(|l| l.visible)
            .map(|l| l.text.as_str())
    }

    /// Returns whether the label changed since the last call, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_before_show_creates_nothing() {
        let mut overlay = LabelOverlay::new();
        overlay.hide();
        assert!(overlay.get().is_none());
        assert!(!overlay.take_dirty());
    }

    #[test]
    fn show_creates_then_reuses() {
        let mut overlay = LabelOverlay::new();
        overlay.show("Earth", Vec2::new(10.0, 20.0));
        assert_eq!(overlay.text(), Some("Earth"));

        overlay.hide();
        assert!(!overlay.is_visible());
        assert!(overlay.get().is_some());

        overlay.show("Mars", Vec2::new(5.0, 6.0));
        let label = overlay.get().unwrap();
        assert_eq!(label.text, "Mars");
        assert_eq!((label.x, label.y), (5.0, 6.0));
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let mut overlay = LabelOverlay::new();
        overlay.show("Venus", Vec2::ZERO);
        assert!(overlay.take_dirty());
        assert!(!overlay.take_dirty());
        overlay.hide();
        assert!(overlay.take_dirty());
        overlay.hide();
        assert!(!overlay.take_dirty());
    }
}
