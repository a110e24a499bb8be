// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture inputs and change reports for the per-gesture state machine.
//!
//! The state machine itself lives on [`ToggleState::apply`](crate::ToggleState::apply):
//!
//! - `Idle -> Pressing` on [`ToggleGesture::Down`]; the pointer side is taken from
//!   the down location.
//! - `Pressing -> Pressing` on [`ToggleGesture::Move`]; the pointer side is recomputed.
//! - `Pressing -> Idle` on [`ToggleGesture::Up`] or [`ToggleGesture::Cancel`]; the
//!   pointer side resets to left.
//!
//! Moves without a held pointer are ignored, so hover motion never previews a
//! side. A move during a held drag re-asserts pressing if an external signal
//! cleared it.

/// A pointer event delivered to the toggle, in the control's local coordinates.
///
/// Only the horizontal coordinate matters: the preview side is chosen by
/// comparing `x` against half the measured width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleGesture {
    /// A pointer went down on the control.
    Down {
        /// Local x coordinate of the pointer.
        x: f64,
    },
    /// The held pointer moved.
    Move {
        /// Local x coordinate of the pointer.
        x: f64,
    },
    /// The pointer was released.
    Up,
    /// The gesture was cancelled by the host (capture lost, window blurred, etc.).
    Cancel,
}

/// Where the toggle is in its per-gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No pointer is held on the control.
    #[default]
    Idle,
    /// A pointer is held on the control (or the host reports an intermediate value).
    Pressing,
}

bitflags::bitflags! {
    /// Fields that an event changed.
    ///
    /// Width changes are never reported: the measured width is read by gesture
    /// math only and never requests a repaint on its own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The pressing flag flipped.
        const PRESSING     = 0b0000_0001;
        /// The pointer crossed the midpoint (or was reset at gesture end).
        const POINTER_SIDE = 0b0000_0010;
        /// The committed value changed.
        const COMMITTED    = 0b0000_0100;
    }
}

impl Changes {
    /// Returns `true` if the host should animate the icon toward its new placement.
    ///
    /// The icon transition tracks the pressing flag and the pointer side. A
    /// committed value change alone snaps.
    #[must_use]
    pub fn animates(self) -> bool {
        self.intersects(Self::PRESSING | Self::POINTER_SIDE)
    }

    /// Returns `true` if anything the icon depends on changed.
    #[must_use]
    pub fn needs_repaint(self) -> bool {
        !self.is_empty()
    }
}
