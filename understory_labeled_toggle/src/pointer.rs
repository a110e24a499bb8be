// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to [`ToggleGesture`] values.
//!
//! Route pointer events for the control here after hit testing. Positions are
//! taken in logical units and translated into the control's local space by
//! subtracting its origin.
//!
//! The adapter is non-exclusive: it only observes events. Hosts keep
//! delivering the same events to their switch so that taps still commit.
//!
//! ```rust,no_run
//! use kurbo::Point;
//! use ui_events::pointer::PointerEvent;
//! use understory_labeled_toggle::{LabeledToggle, ToggleDecorator};
//!
//! fn on_pointer(toggle: &mut LabeledToggle<bool, &str>, event: &PointerEvent) {
//!     // The switch is laid out at (20, 8) in window coordinates.
//!     let changes = toggle.pointer_event(event, Point::new(20.0, 8.0));
//!     if changes.animates() {
//!         // Start the host's icon transition toward `toggle.placement()`.
//!     }
//! }
//! ```

use kurbo::Point;
use ui_events::pointer::PointerEvent;

use crate::gesture::ToggleGesture;

/// Maps a pointer event into a toggle gesture in local coordinates.
///
/// `Down`, `Move`, `Up` and `Cancel` map to their gesture counterparts.
/// `Enter`, `Leave`, `Scroll` and `Gesture` return `None`: leaving the control
/// does not end a press, only a release or cancellation does.
#[must_use]
pub fn gesture_from_pointer(event: &PointerEvent, origin: Point) -> Option<ToggleGesture> {
    match event {
        PointerEvent::Down(e) => Some(ToggleGesture::Down {
            x: local_x(e.state.logical_point(), origin),
        }),
        PointerEvent::Move(e) => Some(ToggleGesture::Move {
            x: local_x(e.current.logical_point(), origin),
        }),
        PointerEvent::Up(_) => Some(ToggleGesture::Up),
        PointerEvent::Cancel(_) => Some(ToggleGesture::Cancel),
        PointerEvent::Enter(_)
        | PointerEvent::Leave(_)
        | PointerEvent::Scroll(_)
        | PointerEvent::Gesture(_) => None,
    }
}

fn local_x(position: Point, origin: Point) -> f64 {
    (position - origin).x
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ui_events::ScrollDelta;
    use ui_events::pointer::{
        PointerButton, PointerButtonEvent, PointerGesture, PointerGestureEvent, PointerId,
        PointerInfo, PointerScrollEvent, PointerState, PointerType, PointerUpdate,
    };

    use super::*;
    use crate::{Glyphs, LabeledToggle, Side, ToggleDecorator};

    const ORIGIN: Point = Point::new(20.0, 8.0);

    fn mouse() -> PointerInfo {
        PointerInfo {
            pointer_id: Some(PointerId::PRIMARY),
            persistent_device_id: None,
            pointer_type: PointerType::Mouse,
        }
    }

    fn state_at(x: f64, scale_factor: f64) -> PointerState {
        let mut state = PointerState {
            scale_factor,
            ..PointerState::default()
        };
        state.position.x = x;
        state.position.y = 12.0;
        state
    }

    fn down(x: f64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: mouse(),
            state: state_at(x, 1.0),
        })
    }

    fn moved(x: f64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer: mouse(),
            current: state_at(x, 1.0),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        })
    }

    fn up(x: f64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: mouse(),
            state: state_at(x, 1.0),
        })
    }

    #[test]
    fn local_x_subtracts_origin() {
        assert_eq!(local_x(Point::new(75.0, 12.0), Point::new(20.0, 8.0)), 55.0);
        assert_eq!(local_x(Point::new(10.0, 0.0), Point::new(20.0, 0.0)), -10.0);
    }

    #[test]
    fn down_and_move_are_translated_into_local_space() {
        assert_eq!(
            gesture_from_pointer(&down(75.0), ORIGIN),
            Some(ToggleGesture::Down { x: 55.0 })
        );
        assert_eq!(
            gesture_from_pointer(&moved(10.0), ORIGIN),
            Some(ToggleGesture::Move { x: -10.0 })
        );
    }

    #[test]
    fn positions_are_read_in_logical_units() {
        let event = PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer: mouse(),
            state: state_at(200.0, 2.0),
        });
        assert_eq!(
            gesture_from_pointer(&event, ORIGIN),
            Some(ToggleGesture::Down { x: 80.0 })
        );
    }

    #[test]
    fn release_and_cancel_end_the_press() {
        assert_eq!(
            gesture_from_pointer(&up(75.0), ORIGIN),
            Some(ToggleGesture::Up)
        );
        assert_eq!(
            gesture_from_pointer(&PointerEvent::Cancel(mouse()), ORIGIN),
            Some(ToggleGesture::Cancel)
        );
    }

    #[test]
    fn other_pointer_events_are_ignored() {
        let ignored = [
            PointerEvent::Enter(mouse()),
            PointerEvent::Leave(mouse()),
            PointerEvent::Scroll(PointerScrollEvent {
                pointer: mouse(),
                delta: ScrollDelta::LineDelta(0.0, 1.0),
                state: state_at(75.0, 1.0),
            }),
            PointerEvent::Gesture(PointerGestureEvent {
                pointer: mouse(),
                gesture: PointerGesture::Pinch(0.1),
                state: state_at(75.0, 1.0),
            }),
        ];
        for event in &ignored {
            assert_eq!(gesture_from_pointer(event, ORIGIN), None, "{event:?}");
        }
    }

    #[test]
    fn pointer_events_drive_a_toggle() {
        let mut toggle = LabeledToggle::new(false, Glyphs::new("off", "on"));
        toggle.layout_changed(100.0);
        let origin = Point::new(10.0, 0.0);

        toggle.pointer_event(&down(10.0), origin);
        assert_eq!(ToggleDecorator::active_side(&toggle), Side::Left);

        let changes = toggle.pointer_event(&moved(90.0), origin);
        assert!(changes.animates());
        assert_eq!(ToggleDecorator::active_side(&toggle), Side::Right);

        assert!(toggle.pointer_event(&PointerEvent::Leave(mouse()), origin).is_empty());
        assert_eq!(ToggleDecorator::active_side(&toggle), Side::Right);

        toggle.pointer_event(&up(90.0), origin);
        assert_eq!(ToggleDecorator::active_side(&toggle), Side::Left);
    }
}
