//! Show/hide state machine for a single tooltip instance.
//!
//! The state starts hidden. Trigger events move it between hidden and
//! visible according to the configured [`Trigger`]; the anchor is measured on
//! every transition into the visible state. An owner may pin the state to an
//! externally supplied value, in which case events only *request* a change
//! and the owner decides.

use crate::config::{Position, Trigger};
use crate::geometry::{Anchor, TriggerGeometry};

/// DOM-level interaction on the trigger region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    PointerEnter,
    PointerLeave,
    Focus,
    Blur,
    Click,
    /// Enter or Space pressed on the trigger.
    KeyActivate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Show,
    Hide,
    Toggle,
}

const fn step_for(trigger: Trigger, event: TriggerEvent) -> Option<Step> {
    use TriggerEvent as E;
    match (trigger, event) {
        (_, E::KeyActivate) | (Trigger::Click, E::Click) => Some(Step::Toggle),
        (Trigger::Hover | Trigger::Focus, E::PointerEnter | E::Focus) => Some(Step::Show),
        (Trigger::Hover | Trigger::Focus, E::PointerLeave | E::Blur) => Some(Step::Hide),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    visible: bool,
    anchor: Option<Anchor>,
    pinned: Option<bool>,
}

impl TooltipState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Anchor of the overlay; `None` while hidden.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor.filter(|_| self.visible)
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    /// Feed one trigger event through the machine.
    ///
    /// Returns the new visibility when the event causes a transition (or, while
    /// pinned, requests one); `None` when the event is ignored. Missing
    /// geometry keeps the previous anchor.
    pub fn handle(
        &mut self,
        event: TriggerEvent,
        trigger: Trigger,
        position: Position,
        geometry: Option<TriggerGeometry>,
    ) -> Option<bool> {
        let next = match step_for(trigger, event)? {
            Step::Show => true,
            Step::Hide => false,
            Step::Toggle => !self.visible,
        };
        if next == self.visible {
            return None;
        }
        if self.pinned.is_none() {
            self.set_visible(next, position, geometry);
        }
        Some(next)
    }

    /// Apply (or release) the external override.
    ///
    /// `Some(v)` pins the state to `v`, re-measuring the anchor whenever `v` is
    /// true; `None` returns control to the trigger events without changing the
    /// current visibility. Returns the new visibility if it changed.
    pub fn pin(
        &mut self,
        pinned: Option<bool>,
        position: Position,
        geometry: Option<TriggerGeometry>,
    ) -> Option<bool> {
        self.pinned = pinned;
        let target = pinned?;
        let changed = target != self.visible;
        self.set_visible(target, position, geometry);
        changed.then_some(target)
    }

    /// Re-measure the anchor of a visible tooltip, e.g. after the requested
    /// side changed. Hidden tooltips are left alone.
    pub fn reposition(&mut self, position: Position, geometry: Option<TriggerGeometry>) {
        if self.visible {
            self.set_visible(true, position, geometry);
        }
    }

    fn set_visible(
        &mut self,
        visible: bool,
        position: Position,
        geometry: Option<TriggerGeometry>,
    ) {
        self.visible = visible;
        if visible && let Some(geometry) = geometry {
            self.anchor = Some(geometry.anchor(position));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, ScrollOffset};

    fn geometry() -> TriggerGeometry {
        TriggerGeometry {
            rect: Rect::new(10.0, 20.0, 100.0, 30.0),
            scroll: ScrollOffset::default(),
        }
    }

    fn feed(state: &mut TooltipState, trigger: Trigger, event: TriggerEvent) -> Option<bool> {
        state.handle(event, trigger, Position::Top, Some(geometry()))
    }

    #[test]
    fn starts_hidden_without_anchor() {
        let state = TooltipState::new();
        assert!(!state.is_visible());
        assert!(state.anchor().is_none());
        assert!(!state.is_pinned());
    }

    #[test]
    fn hover_follows_pointer_and_focus() {
        let mut state = TooltipState::new();
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::PointerEnter),
            Some(true)
        );
        assert_eq!(state.anchor(), Some(Anchor { x: 60.0, y: 10.0 }));
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::PointerLeave),
            Some(false)
        );
        assert!(state.anchor().is_none());
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::Focus),
            Some(true)
        );
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::Blur),
            Some(false)
        );
    }

    #[test]
    fn repeated_show_events_do_not_report() {
        let mut state = TooltipState::new();
        feed(&mut state, Trigger::Hover, TriggerEvent::PointerEnter);
        assert_eq!(feed(&mut state, Trigger::Hover, TriggerEvent::Focus), None);
        assert!(state.is_visible());
    }

    #[test]
    fn click_alternates() {
        let mut state = TooltipState::new();
        let seen: Vec<_> = (0..5)
            .map(|_| feed(&mut state, Trigger::Click, TriggerEvent::Click))
            .collect();
        assert_eq!(
            seen,
            [Some(true), Some(false), Some(true), Some(false), Some(true)]
        );
    }

    #[test]
    fn click_mode_ignores_hover_and_focus() {
        let mut state = TooltipState::new();
        for event in [
            TriggerEvent::PointerEnter,
            TriggerEvent::Focus,
            TriggerEvent::Blur,
            TriggerEvent::PointerLeave,
        ] {
            assert_eq!(feed(&mut state, Trigger::Click, event), None);
        }
        assert!(!state.is_visible());
    }

    #[test]
    fn focus_mode_follows_pointer_and_focus() {
        let mut state = TooltipState::new();
        assert_eq!(
            feed(&mut state, Trigger::Focus, TriggerEvent::PointerEnter),
            Some(true)
        );
        assert_eq!(state.anchor(), Some(Anchor { x: 60.0, y: 10.0 }));
        assert_eq!(
            feed(&mut state, Trigger::Focus, TriggerEvent::PointerLeave),
            Some(false)
        );
        assert_eq!(
            feed(&mut state, Trigger::Focus, TriggerEvent::Focus),
            Some(true)
        );
        assert_eq!(
            feed(&mut state, Trigger::Focus, TriggerEvent::Blur),
            Some(false)
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn keyboard_toggles_in_every_mode() {
        for trigger in Trigger::ALL {
            let mut state = TooltipState::new();
            assert_eq!(
                feed(&mut state, trigger, TriggerEvent::KeyActivate),
                Some(true)
            );
            assert_eq!(
                feed(&mut state, trigger, TriggerEvent::KeyActivate),
                Some(false)
            );
        }
    }

    #[test]
    fn keyboard_opened_hover_tooltip_closes_on_pointer_leave() {
        let mut state = TooltipState::new();
        feed(&mut state, Trigger::Hover, TriggerEvent::KeyActivate);
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::PointerLeave),
            Some(false)
        );
    }

    #[test]
    fn missing_geometry_keeps_previous_anchor() {
        let mut state = TooltipState::new();
        feed(&mut state, Trigger::Click, TriggerEvent::Click);
        let first = state.anchor();
        feed(&mut state, Trigger::Click, TriggerEvent::Click);
        state.handle(TriggerEvent::Click, Trigger::Click, Position::Bottom, None);
        assert!(state.is_visible());
        assert_eq!(state.anchor(), first);
    }

    #[test]
    fn pinned_state_only_requests_transitions() {
        let mut state = TooltipState::new();
        assert_eq!(state.pin(Some(false), Position::Top, Some(geometry())), None);
        assert!(state.is_pinned());
        assert_eq!(
            feed(&mut state, Trigger::Click, TriggerEvent::Click),
            Some(true)
        );
        assert!(!state.is_visible(), "owner has not echoed the request yet");

        assert_eq!(
            state.pin(Some(true), Position::Top, Some(geometry())),
            Some(true)
        );
        assert!(state.is_visible());
        assert_eq!(state.anchor(), Some(Anchor { x: 60.0, y: 10.0 }));
    }

    #[test]
    fn pinning_visible_again_refreshes_anchor() {
        let mut state = TooltipState::new();
        state.pin(Some(true), Position::Top, None);
        assert!(state.is_visible());
        assert!(state.anchor().is_none());
        assert_eq!(state.pin(Some(true), Position::Top, Some(geometry())), None);
        assert_eq!(state.anchor(), Some(Anchor { x: 60.0, y: 10.0 }));
    }

    #[test]
    fn reposition_only_moves_visible_tooltips() {
        let mut state = TooltipState::new();
        state.reposition(Position::Bottom, Some(geometry()));
        assert!(state.anchor().is_none());
        feed(&mut state, Trigger::Hover, TriggerEvent::PointerEnter);
        state.reposition(Position::Bottom, Some(geometry()));
        assert_eq!(state.anchor(), Some(Anchor { x: 60.0, y: 60.0 }));
    }

    #[test]
    fn unpinning_keeps_visibility_and_resumes_events() {
        let mut state = TooltipState::new();
        state.pin(Some(true), Position::Top, Some(geometry()));
        assert_eq!(state.pin(None, Position::Top, Some(geometry())), None);
        assert!(state.is_visible());
        assert!(!state.is_pinned());
        assert_eq!(
            feed(&mut state, Trigger::Hover, TriggerEvent::PointerLeave),
            Some(false)
        );
        assert!(!state.is_visible());
    }
}
