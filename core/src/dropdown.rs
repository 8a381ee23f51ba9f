use crate::intent::{Intent, Marker, TimerKind, TimerToken};

pub const ANIMATION_MS: u32 = 200;
pub const FOCUS_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitcherTiming {
    pub animation_ms: u32,
    pub focus_delay_ms: u32,
}

impl Default for SwitcherTiming {
    fn default() -> Self {
        Self {
            animation_ms: ANIMATION_MS,
            focus_delay_ms: FOCUS_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DropdownPhase {
    /// Mirrors the trigger's `aria-expanded` value.
    pub fn is_expanded(self) -> bool {
        matches!(self, DropdownPhase::Opening | DropdownPhase::Open)
    }
}

#[derive(Clone, Debug)]
pub struct DropdownMachine {
    phase: DropdownPhase,
    generation: u64,
    timing: SwitcherTiming,
}

impl DropdownMachine {
    pub fn new(timing: SwitcherTiming) -> Self {
        Self {
            phase: DropdownPhase::Closed,
            generation: 0,
            timing,
        }
    }

    pub fn phase(&self) -> DropdownPhase {
        self.phase
    }

    pub fn is_expanded(&self) -> bool {
        self.phase.is_expanded()
    }

    /// Trigger activation toggles between the opening and closing paths.
    pub fn activate(&mut self) -> Vec<Intent> {
        if self.is_expanded() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Outside activation or drag start; no-op unless expanded.
    pub fn dismiss(&mut self) -> Vec<Intent> {
        if self.is_expanded() {
            self.close()
        } else {
            Vec::new()
        }
    }

    pub fn cancel(&mut self) -> Vec<Intent> {
        if !self.is_expanded() {
            return Vec::new();
        }
        let mut intents = self.close();
        intents.push(Intent::FocusTrigger);
        intents
    }

    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<Intent> {
        if token.generation != self.generation {
            return Vec::new();
        }
        match (token.kind, self.phase) {
            (TimerKind::FocusFirstEntry, phase) if phase.is_expanded() => {
                vec![Intent::FocusFirstEntry]
            }
            (TimerKind::Settle, DropdownPhase::Opening) => {
                self.phase = DropdownPhase::Open;
                vec![Intent::RemoveMarker(Marker::AnimatingIn)]
            }
            (TimerKind::Settle, DropdownPhase::Closing) => {
                self.phase = DropdownPhase::Closed;
                vec![
                    Intent::HidePanel,
                    Intent::RemoveMarker(Marker::AnimatingOut),
                ]
            }
            _ => Vec::new(),
        }
    }

    fn open(&mut self) -> Vec<Intent> {
        self.phase = DropdownPhase::Opening;
        let generation = self.advance();
        vec![
            Intent::ShowPanel,
            Intent::RemoveMarker(Marker::AnimatingOut),
            Intent::AddMarker(Marker::AnimatingIn),
            Intent::SetExpanded(true),
            Intent::Schedule {
                token: TimerToken {
                    kind: TimerKind::FocusFirstEntry,
                    generation,
                },
                after_ms: self.timing.focus_delay_ms,
            },
            Intent::Schedule {
                token: TimerToken {
                    kind: TimerKind::Settle,
                    generation,
                },
                after_ms: self.timing.animation_ms,
            },
        ]
    }

    fn close(&mut self) -> Vec<Intent> {
        self.phase = DropdownPhase::Closing;
        let generation = self.advance();
        vec![
            Intent::RemoveMarker(Marker::AnimatingIn),
            Intent::AddMarker(Marker::AnimatingOut),
            Intent::SetExpanded(false),
            Intent::Schedule {
                token: TimerToken {
                    kind: TimerKind::Settle,
                    generation,
                },
                after_ms: self.timing.animation_ms,
            },
        ]
    }

    fn advance(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

impl Default for DropdownMachine {
    fn default() -> Self {
        Self::new(SwitcherTiming::default())
    }
}

pub fn scheduled_tokens(intents: &[Intent]) -> Vec<TimerToken> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            Intent::Schedule { token, .. } => Some(*token),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle_token(intents: &[Intent]) -> TimerToken {
        scheduled_tokens(intents)
            .into_iter()
            .find(|token| token.kind == TimerKind::Settle)
            .expect("settle timer scheduled")
    }

    #[test]
    fn open_then_settle_reaches_open() {
        let mut machine = DropdownMachine::default();
        let intents = machine.activate();
        assert_eq!(machine.phase(), DropdownPhase::Opening);
        assert!(intents.contains(&Intent::ShowPanel));
        assert!(intents.contains(&Intent::SetExpanded(true)));

        let settled = machine.timer_fired(settle_token(&intents));
        assert_eq!(machine.phase(), DropdownPhase::Open);
        assert_eq!(settled, vec![Intent::RemoveMarker(Marker::AnimatingIn)]);
    }

    #[test]
    fn open_schedules_focus_before_settle() {
        let mut machine = DropdownMachine::default();
        let intents = machine.activate();
        let delays: Vec<(TimerKind, u32)> = intents
            .iter()
            .filter_map(|intent| match intent {
                Intent::Schedule { token, after_ms } => Some((token.kind, *after_ms)),
                _ => None,
            })
            .collect();
        assert_eq!(
            delays,
            vec![
                (TimerKind::FocusFirstEntry, FOCUS_DELAY_MS),
                (TimerKind::Settle, ANIMATION_MS)
            ]
        );
    }

    #[test]
    fn stale_open_timer_is_ignored_after_close() {
        let mut machine = DropdownMachine::default();
        let opening = machine.activate();
        let closing = machine.activate();
        assert_eq!(machine.phase(), DropdownPhase::Closing);

        assert!(machine.timer_fired(settle_token(&opening)).is_empty());
        assert_eq!(machine.phase(), DropdownPhase::Closing);
        for token in scheduled_tokens(&opening) {
            assert!(machine.timer_fired(token).is_empty());
        }

        let closed = machine.timer_fired(settle_token(&closing));
        assert_eq!(machine.phase(), DropdownPhase::Closed);
        assert!(closed.contains(&Intent::HidePanel));
    }

    #[test]
    fn cancel_returns_focus_to_trigger() {
        let mut machine = DropdownMachine::default();
        machine.activate();
        let intents = machine.cancel();
        assert_eq!(intents.last(), Some(&Intent::FocusTrigger));
        assert!(intents.contains(&Intent::SetExpanded(false)));
    }

    #[test]
    fn dismiss_and_cancel_are_noops_when_closed() {
        let mut machine = DropdownMachine::default();
        assert!(machine.dismiss().is_empty());
        assert!(machine.cancel().is_empty());
        assert_eq!(machine.phase(), DropdownPhase::Closed);
    }
}
