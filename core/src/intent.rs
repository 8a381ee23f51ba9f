use crate::viewport::Point;

/// Visual state classes toggled by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    AnimatingIn,
    AnimatingOut,
    Dragging,
}

impl Marker {
    pub fn class_name(self) -> &'static str {
        match self {
            Marker::AnimatingIn => "is-animating-in",
            Marker::AnimatingOut => "is-animating-out",
            Marker::Dragging => "is-dragging",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Settle,
    FocusFirstEntry,
}

/// Identifies a scheduled continuation; it only applies while its
/// generation is still the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// A side effect requested by the widget state, applied by the DOM layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    ShowPanel,
    HidePanel,
    AddMarker(Marker),
    RemoveMarker(Marker),
    SetExpanded(bool),
    Schedule { token: TimerToken, after_ms: u32 },
    FocusFirstEntry,
    FocusEntry(usize),
    FocusTrigger,
    MoveTo(Point),
}
