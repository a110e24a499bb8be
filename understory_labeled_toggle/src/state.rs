// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::gesture::{Changes, GesturePhase, ToggleGesture};

/// Smallest width used for the midpoint comparison.
const MIN_EFFECTIVE_WIDTH: f64 = 1.0;

/// Transient state of a labeled toggle.
///
/// The record is mutated only through layout changes, gestures and committed
/// value updates, and read by the pure derivations in this crate
/// ([`active_side`](crate::active_side), [`icon_offset`](crate::icon_offset), ...).
///
/// ```rust
/// use understory_labeled_toggle::{GesturePhase, ToggleGesture, ToggleState};
///
/// let mut state = ToggleState::new(false);
/// state.layout_changed(100.0);
///
/// state.apply(ToggleGesture::Down { x: 70.0 });
/// assert_eq!(state.phase(), GesturePhase::Pressing);
/// assert!(state.right_of_midpoint);
///
/// state.apply(ToggleGesture::Cancel);
/// assert_eq!(state.phase(), GesturePhase::Idle);
/// assert!(!state.right_of_midpoint);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToggleState {
    /// The settled value of the toggle.
    pub committed: bool,
    /// The icon previews the pointer side: a pointer is held on the control,
    /// or an external signal reports pressing.
    pub pressing: bool,
    /// The last pointer x was past half of the measured width.
    pub right_of_midpoint: bool,
    /// Rendered width of the control; `0.0` until the first layout.
    pub measured_width: f64,
    /// A pointer went down on the control and has not been released.
    ///
    /// Unlike [`pressing`](Self::pressing), this is never set by external
    /// signals, so moves during a held drag re-assert `pressing`.
    pub pointer_held: bool,
}

impl ToggleState {
    /// Creates an idle, unmeasured state with the given committed value.
    #[must_use]
    pub fn new(committed: bool) -> Self {
        Self {
            committed,
            ..Self::default()
        }
    }

    /// Records the rendered width of the control.
    ///
    /// Call this on first layout and on every resize. The width only feeds the
    /// midpoint comparison, so nothing is reported back.
    pub fn layout_changed(&mut self, width: f64) {
        self.measured_width = width;
    }

    /// Returns the width used for the midpoint comparison.
    ///
    /// Unmeasured, negative, and non-finite widths degrade to `1.0`.
    #[must_use]
    pub fn effective_width(&self) -> f64 {
        if self.measured_width.is_finite() {
            self.measured_width.max(MIN_EFFECTIVE_WIDTH)
        } else {
            MIN_EFFECTIVE_WIDTH
        }
    }

    /// Returns `true` if a pointer at local `x` is over the right half of the control.
    #[must_use]
    pub fn is_pointer_right(&self, x: f64) -> bool {
        x > self.effective_width() / 2.0
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pressing {
            GesturePhase::Pressing
        } else {
            GesturePhase::Idle
        }
    }

    /// Feeds a gesture through the per-gesture state machine.
    ///
    /// Never changes [`committed`](Self::committed): the host switch owns the commit.
    pub fn apply(&mut self, gesture: ToggleGesture) -> Changes {
        let before = *self;
        match gesture {
            ToggleGesture::Down { x } => {
                self.pointer_held = true;
                self.pressing = true;
                self.track_pointer(x);
            }
            ToggleGesture::Move { x } => {
                if self.pointer_held {
                    self.pressing = true;
                    self.track_pointer(x);
                }
            }
            ToggleGesture::Up | ToggleGesture::Cancel => {
                self.pointer_held = false;
                self.pressing = false;
                self.right_of_midpoint = false;
            }
        }
        let changes = self.diff(&before);
        if !changes.is_empty() {
            log::trace!(
                "labeled toggle {gesture:?}: pressing={} right_of_midpoint={}",
                self.pressing,
                self.right_of_midpoint
            );
        }
        changes
    }

    /// Mirrors a change of the bound or configured value.
    pub fn set_committed(&mut self, committed: bool) -> Changes {
        if self.committed == committed {
            return Changes::empty();
        }
        log::trace!("labeled toggle committed value -> {committed}");
        self.committed = committed;
        Changes::COMMITTED
    }

    /// Sets the pressing flag from an external signal.
    ///
    /// The pointer side is left untouched; a later [`ToggleGesture::Up`] or
    /// [`ToggleGesture::Cancel`] resets both. Clearing the flag while a pointer
    /// is held only lasts until the next [`ToggleGesture::Move`].
    pub fn set_pressing(&mut self, pressing: bool) -> Changes {
        if self.pressing == pressing {
            return Changes::empty();
        }
        self.pressing = pressing;
        Changes::PRESSING
    }

    fn track_pointer(&mut self, x: f64) {
        if self.effective_width() != self.measured_width {
            log::debug!(
                "labeled toggle pointer tracked against degenerate width {}, using {MIN_EFFECTIVE_WIDTH}",
                self.measured_width
            );
        }
        self.right_of_midpoint = self.is_pointer_right(x);
    }

    fn diff(&self, before: &Self) -> Changes {
        let mut changes = Changes::empty();
        changes.set(Changes::PRESSING, self.pressing != before.pressing);
        changes.set(
            Changes::POINTER_SIDE,
            self.right_of_midpoint != before.right_of_midpoint,
        );
        changes.set(Changes::COMMITTED, self.committed != before.committed);
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(width: f64) -> ToggleState {
        let mut state = ToggleState::new(false);
        state.layout_changed(width);
        state
    }

    #[test]
    fn new_state_is_idle_and_unmeasured() {
        let state = ToggleState::new(true);
        assert!(state.committed);
        assert!(!state.pressing);
        assert!(!state.right_of_midpoint);
        assert_eq!(state.measured_width, 0.0);
        assert_eq!(state.phase(), GesturePhase::Idle);
    }

    #[test]
    fn unmeasured_width_degrades_to_one() {
        let state = ToggleState::new(false);
        assert_eq!(state.effective_width(), 1.0);
        assert!(state.is_pointer_right(0.6));
        assert!(!state.is_pointer_right(0.5));
    }

    #[test]
    fn degenerate_widths_degrade_to_one() {
        for width in [-20.0, 0.25, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(measured(width).effective_width(), 1.0, "width {width}");
        }
    }

    #[test]
    fn layout_tracks_resizes() {
        let mut state = measured(100.0);
        assert_eq!(state.effective_width(), 100.0);
        state.layout_changed(40.0);
        assert_eq!(state.effective_width(), 40.0);
        assert!(state.is_pointer_right(30.0));
    }

    #[test]
    fn midpoint_itself_counts_as_left() {
        let state = measured(100.0);
        assert!(!state.is_pointer_right(50.0));
        assert!(state.is_pointer_right(50.1));
    }

    #[test]
    fn down_starts_pressing_and_reads_side() {
        let mut state = measured(100.0);
        let changes = state.apply(ToggleGesture::Down { x: 90.0 });
        assert!(state.pressing);
        assert!(state.right_of_midpoint);
        assert_eq!(changes, Changes::PRESSING | Changes::POINTER_SIDE);
    }

    #[test]
    fn down_on_left_half_only_reports_pressing() {
        let mut state = measured(100.0);
        let changes = state.apply(ToggleGesture::Down { x: 0.0 });
        assert!(state.pressing);
        assert!(!state.right_of_midpoint);
        assert_eq!(changes, Changes::PRESSING);
    }

    #[test]
    fn moves_recompute_side_while_pressing() {
        let mut state = measured(100.0);
        state.apply(ToggleGesture::Down { x: 10.0 });

        assert_eq!(
            state.apply(ToggleGesture::Move { x: 80.0 }),
            Changes::POINTER_SIDE
        );
        assert!(state.right_of_midpoint);

        assert_eq!(
            state.apply(ToggleGesture::Move { x: 85.0 }),
            Changes::empty()
        );

        assert_eq!(
            state.apply(ToggleGesture::Move { x: 20.0 }),
            Changes::POINTER_SIDE
        );
        assert!(!state.right_of_midpoint);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut state = measured(100.0);
        let changes = state.apply(ToggleGesture::Move { x: 90.0 });
        assert_eq!(changes, Changes::empty());
        assert!(!state.right_of_midpoint);
        assert!(!state.pressing);
    }

    #[test]
    fn moves_without_held_pointer_are_ignored_even_when_pressing() {
        let mut state = measured(100.0);
        state.set_pressing(true);
        let changes = state.apply(ToggleGesture::Move { x: 90.0 });
        assert_eq!(changes, Changes::empty());
        assert!(!state.right_of_midpoint);
    }

    #[test]
    fn held_move_reasserts_pressing_after_external_clear() {
        let mut state = measured(100.0);
        state.apply(ToggleGesture::Down { x: 10.0 });
        state.set_pressing(false);
        assert!(state.pointer_held);

        let changes = state.apply(ToggleGesture::Move { x: 90.0 });
        assert_eq!(changes, Changes::PRESSING | Changes::POINTER_SIDE);
        assert!(state.pressing);
        assert!(state.right_of_midpoint);

        state.apply(ToggleGesture::Up);
        assert!(!state.pointer_held);
        assert!(!state.pressing);
    }

    #[test]
    fn up_and_cancel_reset_pressing_and_side() {
        for end in [ToggleGesture::Up, ToggleGesture::Cancel] {
            let mut state = measured(100.0);
            state.apply(ToggleGesture::Down { x: 90.0 });
            let changes = state.apply(end);
            assert!(!state.pressing);
            assert!(!state.right_of_midpoint);
            assert_eq!(changes, Changes::PRESSING | Changes::POINTER_SIDE);
        }
    }

    #[test]
    fn end_on_idle_state_is_a_no_op() {
        let mut state = measured(100.0);
        assert_eq!(state.apply(ToggleGesture::Up), Changes::empty());
        assert_eq!(state, measured(100.0));
    }

    #[test]
    fn gestures_never_touch_committed() {
        let mut state = measured(100.0);
        state.apply(ToggleGesture::Down { x: 10.0 });
        state.apply(ToggleGesture::Move { x: 99.0 });
        state.apply(ToggleGesture::Up);
        assert!(!state.committed);

        let mut on = ToggleState::new(true);
        on.layout_changed(100.0);
        on.apply(ToggleGesture::Down { x: 1.0 });
        on.apply(ToggleGesture::Cancel);
        assert!(on.committed);
    }

    #[test]
    fn gesture_before_layout_does_not_fault() {
        let mut state = ToggleState::new(false);
        state.apply(ToggleGesture::Down { x: 0.0 });
        assert!(!state.right_of_midpoint);
        state.apply(ToggleGesture::Move { x: 3.0 });
        assert!(state.right_of_midpoint);
    }

    #[test]
    fn set_committed_reports_only_real_changes() {
        let mut state = ToggleState::new(false);
        assert_eq!(state.set_committed(false), Changes::empty());
        assert_eq!(state.set_committed(true), Changes::COMMITTED);
        assert!(state.committed);
    }

    #[test]
    fn set_pressing_keeps_pointer_side() {
        let mut state = measured(100.0);
        state.apply(ToggleGesture::Down { x: 90.0 });
        assert_eq!(state.set_pressing(true), Changes::empty());
        assert_eq!(state.set_pressing(false), Changes::PRESSING);
        assert!(state.right_of_midpoint);
    }
}
