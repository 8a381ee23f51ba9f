use crate::viewport::{Point, Rect, Viewport};

/// Where a press landed relative to the widget's interactive parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressTarget {
    pub in_dropdown: bool,
    pub in_trigger: bool,
    pub in_handle: bool,
}

impl PressTarget {
    /// Presses on the panel or trigger open the menu instead of moving the
    /// widget; the handle always drags.
    pub fn starts_drag(&self) -> bool {
        self.in_handle || !(self.in_dropdown || self.in_trigger)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    dragging: bool,
    drag_start: Point,
    origin_start: Point,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin(&mut self, pointer: Point, rect: Rect) {
        self.dragging = true;
        self.drag_start = pointer;
        self.origin_start = rect.origin();
    }

    /// Clamped origin for the pointer's current position, `None` when idle.
    pub fn origin_for(&self, pointer: Point, size: Rect, viewport: Viewport) -> Option<Point> {
        if !self.dragging {
            return None;
        }
        let proposed = Point::new(
            self.origin_start.x + (pointer.x - self.drag_start.x),
            self.origin_start.y + (pointer.y - self.drag_start.y),
        );
        Some(viewport.clamp_origin(proposed, size.width, size.height))
    }

    /// Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        was_dragging
    }
}
