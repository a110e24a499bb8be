// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the labeled toggle demos.

use kurbo::Vec2;
use understory_labeled_toggle::{ToggleDecorator, ToggleGesture};

/// Press at the left edge, drag across the midpoint and back, then release.
pub const DRAG_ACROSS: [(&str, ToggleGesture); 5] = [
    ("press at x=0", ToggleGesture::Down { x: 0.0 }),
    ("drag to x=80", ToggleGesture::Move { x: 80.0 }),
    ("drag back to x=30", ToggleGesture::Move { x: 30.0 }),
    ("drag to x=95", ToggleGesture::Move { x: 95.0 }),
    ("release", ToggleGesture::Up),
];

/// Print the icon placement of `toggle` under `label`.
pub fn report<D: ToggleDecorator<Glyph = &'static str>>(label: &str, toggle: &D) {
    let placement = toggle.placement();
    let Vec2 { x, .. } = placement.translation();
    let side = if placement.side.is_right() { "on" } else { "off" };
    println!(
        "{label:<28} glyph={:<11} side={side:<3} offset={x:+.1} pressing={}",
        placement.glyph,
        toggle.state().pressing
    );
}

/// Lay `toggle` out at 100 units wide and feed it `gestures`, reporting after each.
pub fn run<D: ToggleDecorator<Glyph = &'static str>>(
    toggle: &mut D,
    gestures: &[(&str, ToggleGesture)],
) {
    toggle.layout_changed(100.0);
    report("idle", toggle);

    for &(label, gesture) in gestures {
        let changes = toggle.gesture(gesture);
        let suffix = if changes.animates() {
            " (animate)"
        } else if changes.needs_repaint() {
            " (repaint)"
        } else {
            ""
        };
        report(&format!("{label}{suffix}"), toggle);
    }
}
