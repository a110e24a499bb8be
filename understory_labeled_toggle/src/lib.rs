// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_labeled_toggle --heading-base-level=0

//! Understory Labeled Toggle: a sliding icon overlay for two-state switches.
//!
//! A labeled toggle decorates a switch with an icon that sits over the knob.
//! The icon shows a "left" glyph for off and a "right" glyph for on. While a
//! pointer is held on the control, the icon previews the side the switch would
//! land on, based on which half of the control the pointer is over. Once the
//! pointer is released, the icon follows the committed value again.
//!
//! This crate is headless. It does not render, animate, hit test, or flip the
//! switch value. The host toolkit owns the switch, routes pointer events to it,
//! and draws the icon where this crate says.
//!
//! ## Pieces
//!
//! - [`ToggleState`]: the four transient fields (committed value, pressing,
//!   pointer side, measured width) and the events that mutate them.
//! - [`ToggleGesture`]: local-coordinate pointer events for the per-gesture
//!   state machine.
//! - [`active_side`], [`active_glyph`], [`icon_offset`] and [`IconPlacement`]:
//!   pure derivations from a state snapshot.
//! - [`LabeledToggle`]: the widget form, bound to a [`ToggleBinding`] cell.
//! - [`LabeledToggleStyle`]: the style form, fed a [`ToggleConfiguration`] by
//!   a host switch.
//! - [`ToggleDecorator`]: the capability both forms share.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::Cell;
//! use understory_labeled_toggle::{Glyphs, LabeledToggle, Side, ToggleGesture};
//!
//! let liked = Cell::new(false);
//! let mut toggle = LabeledToggle::new(&liked, Glyphs::new("heart", "heart.fill"));
//! toggle.layout_changed(100.0);
//!
//! // Idle and off: left glyph.
//! assert_eq!(*toggle.placement().glyph, "heart");
//!
//! // Press near the left edge, then drag past the midpoint.
//! toggle.gesture(ToggleGesture::Down { x: 0.0 });
//! assert_eq!(toggle.active_side(), Side::Left);
//! toggle.gesture(ToggleGesture::Move { x: 80.0 });
//! assert_eq!(*toggle.placement().glyph, "heart.fill");
//!
//! // Release: the host switch did not commit, so the icon returns to off.
//! toggle.gesture(ToggleGesture::Up);
//! assert_eq!(toggle.active_side(), Side::Left);
//!
//! // The host switch commits a tap through the same cell.
//! liked.set(true);
//! assert_eq!(toggle.active_side(), Side::Right);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: forward `libm` to Kurbo for `no_std` targets.
//! - `ui_events_adapter` (default): map `ui_events::pointer::PointerEvent`
//!   into [`ToggleGesture`] values (see the `pointer` module).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod decorator;
mod display;
mod gesture;
mod metrics;
#[cfg(feature = "ui_events_adapter")]
pub mod pointer;
mod state;
mod style;

pub use binding::{LabeledToggle, ToggleBinding};
pub use decorator::ToggleDecorator;
pub use display::{Glyphs, IconPlacement, Side, active_glyph, active_side, icon_offset};
pub use gesture::{Changes, GesturePhase, ToggleGesture};
pub use metrics::{
    BASE_TRANSITION, DEFAULT_LEFT_OFFSET, DEFAULT_RIGHT_OFFSET, DEFAULT_TRANSITION_SPEED,
    MetricsError, ToggleMetrics,
};
pub use state::ToggleState;
pub use style::{LabeledToggleStyle, ToggleConfiguration};
