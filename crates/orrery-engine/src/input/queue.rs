/// Input event types the engine understands.
/// Generic, with no simulation-specific semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport pixel coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the render surface.
    PointerLeave,
    /// A click at viewport pixel coordinates (x, y).
    Click { x: f32, y: f32 },
    /// A named slider control changed value.
    Slider { name: String, value: f32 },
    /// A named button was pressed.
    Button { name: String },
}

/// A queue of input events.
/// JS pushes events between frames; Rust reads them in order during the next
/// tick and the runner clears them afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::Button { name: "pauseBtn".into() });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerMove { x: 10.0, y: 20.0 });
        assert_eq!(events[1], InputEvent::Button { name: "pauseBtn".into() });
        assert!(q.is_empty());
    }

    #[test]
    fn slider_event_carries_name_and_value() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Slider { name: "earthSpeed".into(), value: 2.5 });
        let first = q.iter().next();
        match first {
            Some(InputEvent::Slider { name, value }) => {
                assert_eq!(name, "earthSpeed");
                assert_eq!(*value, 2.5);
            }
            other => panic!("Expected Slider event, got {other:?}"),
        }
    }
}
