use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

use website_switcher_core::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub(crate) fn from_event_type(value: &str) -> Option<Self> {
        match value {
            "mousedown" | "mousemove" | "mouseup" => Some(PointerKind::Mouse),
            "touchstart" | "touchmove" | "touchend" | "touchcancel" => Some(PointerKind::Touch),
            _ => None,
        }
    }
}

/// Client coordinates of a press or move. Touch events report their first
/// active touch point.
pub(crate) fn client_point(event: &Event) -> Option<Point> {
    match PointerKind::from_event_type(&event.type_())? {
        PointerKind::Mouse => {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(Point::new(event.client_x() as f64, event.client_y() as f64))
        }
        PointerKind::Touch => {
            let event = event.dyn_ref::<TouchEvent>()?;
            let touch = event.touches().get(0)?;
            Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
        }
    }
}
