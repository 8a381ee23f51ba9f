//! Per-widget interaction state.
//!
//! Every handler takes the facts the DOM layer measured (pointer position,
//! bounding box, viewport) and answers with [`Intent`]s to apply. Nothing
//! here touches the page.

use crate::drag::{DragTracker, PressTarget};
use crate::dropdown::{DropdownMachine, DropdownPhase, SwitcherTiming};
use crate::intent::{Intent, Marker, TimerToken};
use crate::keyboard::{nav_target, NavKey, CANCEL_KEY};
use crate::position::{PositionRecord, StoredPosition, POSITION_STORAGE_KEY};
use crate::viewport::{Point, Rect, Viewport, ViewportClass};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitcherOptions {
    pub timing: SwitcherTiming,
    pub storage_key: String,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self {
            timing: SwitcherTiming::default(),
            storage_key: POSITION_STORAGE_KEY.to_string(),
        }
    }
}

/// Outcome of a finished drag: visual cleanup plus the position to persist.
#[derive(Clone, Debug, PartialEq)]
pub struct DragRelease {
    pub intents: Vec<Intent>,
    pub class: ViewportClass,
    pub position: StoredPosition,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    dropdown: DropdownMachine,
    drag: DragTracker,
}

impl InteractionState {
    pub fn new(timing: SwitcherTiming) -> Self {
        Self {
            dropdown: DropdownMachine::new(timing),
            drag: DragTracker::default(),
        }
    }

    pub fn phase(&self) -> DropdownPhase {
        self.dropdown.phase()
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_expanded()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn activate(&mut self) -> Vec<Intent> {
        if self.drag.is_dragging() {
            return Vec::new();
        }
        self.dropdown.activate()
    }

    pub fn outside_activation(&mut self) -> Vec<Intent> {
        self.dropdown.dismiss()
    }

    /// Document-level key handling; only the cancel key matters here.
    pub fn key_pressed(&mut self, key: &str) -> Vec<Intent> {
        if key != CANCEL_KEY {
            return Vec::new();
        }
        self.dropdown.cancel()
    }

    /// Keys pressed inside the panel. `None` means the key was not consumed
    /// and its default action should run.
    pub fn navigate(&self, key: &str, focused: Option<usize>, entries: usize) -> Option<Vec<Intent>> {
        if self.dropdown.phase() != DropdownPhase::Open {
            return None;
        }
        let nav = NavKey::from_key(key)?;
        Some(
            nav_target(focused, entries, nav)
                .map(Intent::FocusEntry)
                .into_iter()
                .collect(),
        )
    }

    /// `None` when the press should not start a drag.
    pub fn press(&mut self, target: PressTarget, pointer: Point, rect: Rect) -> Option<Vec<Intent>> {
        if !target.starts_drag() {
            return None;
        }
        let mut intents = self.dropdown.dismiss();
        intents.push(Intent::AddMarker(Marker::Dragging));
        self.drag.begin(pointer, rect);
        Some(intents)
    }

    pub fn pointer_moved(&self, pointer: Point, rect: Rect, viewport: Viewport) -> Option<Intent> {
        self.drag
            .origin_for(pointer, rect, viewport)
            .map(Intent::MoveTo)
    }

    pub fn release(&mut self, rect: Rect, viewport: Viewport) -> Option<DragRelease> {
        if !self.drag.end() {
            return None;
        }
        Some(DragRelease {
            intents: vec![Intent::RemoveMarker(Marker::Dragging)],
            class: viewport.class(),
            position: StoredPosition::from_point(rect.origin()),
        })
    }

    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<Intent> {
        self.dropdown.timer_fired(token)
    }
}

/// Position override to apply at mount, if one was remembered for the
/// current viewport class.
pub fn restore_position(record: &PositionRecord, viewport: Viewport) -> Option<Intent> {
    let stored = record.get(viewport.class())?;
    stored.to_point().map(Intent::MoveTo)
}

/// Live correction after a viewport resize; never persisted.
pub fn refit_after_resize(rect: Rect, viewport: Viewport) -> Option<Intent> {
    viewport.refit(rect).map(Intent::MoveTo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::scheduled_tokens;
    use crate::intent::TimerKind;

    fn settle(state: &mut InteractionState, intents: &[Intent]) -> Vec<Intent> {
        let token = scheduled_tokens(intents)
            .into_iter()
            .find(|token| token.kind == TimerKind::Settle)
            .expect("settle timer");
        state.timer_fired(token)
    }

    #[test]
    fn activation_is_ignored_while_dragging() {
        let mut state = InteractionState::default();
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);
        state
            .press(PressTarget::default(), Point::new(20.0, 20.0), rect)
            .expect("drag starts");
        assert!(state.activate().is_empty());
        assert_eq!(state.phase(), DropdownPhase::Closed);
    }

    #[test]
    fn press_on_trigger_is_not_a_drag() {
        let mut state = InteractionState::default();
        let target = PressTarget {
            in_trigger: true,
            ..PressTarget::default()
        };
        assert!(state
            .press(target, Point::default(), Rect::default())
            .is_none());
        assert!(!state.is_dragging());
    }

    #[test]
    fn navigation_requires_settled_open_state() {
        let mut state = InteractionState::default();
        assert_eq!(state.navigate("ArrowDown", None, 3), None);
        let opening = state.activate();
        assert_eq!(state.navigate("ArrowDown", None, 3), None);
        settle(&mut state, &opening);
        assert_eq!(
            state.navigate("ArrowDown", Some(1), 3),
            Some(vec![Intent::FocusEntry(2)])
        );
        assert_eq!(state.navigate("a", Some(1), 3), None);
        assert_eq!(state.navigate("End", None, 0), Some(Vec::new()));
    }

    #[test]
    fn escape_closes_and_refocuses_trigger() {
        let mut state = InteractionState::default();
        state.activate();
        assert!(state.key_pressed("Enter").is_empty());
        let intents = state.key_pressed("Escape");
        assert_eq!(state.phase(), DropdownPhase::Closing);
        assert_eq!(intents.last(), Some(&Intent::FocusTrigger));
    }

    #[test]
    fn release_without_drag_does_nothing() {
        let mut state = InteractionState::default();
        assert!(state
            .release(Rect::default(), Viewport::new(800.0, 600.0))
            .is_none());
    }

    #[test]
    fn restore_uses_current_class_only() {
        let mut record = PositionRecord::default();
        record.set(
            ViewportClass::Mobile,
            StoredPosition::from_point(Point::new(12.0, 34.0)),
        );
        assert_eq!(restore_position(&record, Viewport::new(1280.0, 800.0)), None);
        assert_eq!(
            restore_position(&record, Viewport::new(375.0, 667.0)),
            Some(Intent::MoveTo(Point::new(12.0, 34.0)))
        );
    }
}
