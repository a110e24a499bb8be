// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled toggle basics.
//!
//! Drive both toggle forms through a press, a drag across the midpoint, and a
//! release, printing where the icon goes after each event.
//!
//! Run:
//! - `cargo run -p understory_labeled_toggle_demos --example labeled_toggle_basics`

use std::cell::Cell;

use understory_labeled_toggle::{
    Glyphs, LabeledToggle, LabeledToggleStyle, ToggleConfiguration, ToggleDecorator,
};
use understory_labeled_toggle_demos::{DRAG_ACROSS, report, run};

fn main() {
    let glyphs = Glyphs::new("heart", "heart.fill");

    println!("Widget form, bound to a cell:");
    let liked = Cell::new(false);
    let mut widget = LabeledToggle::new(&liked, glyphs);
    run(&mut widget, &DRAG_ACROSS);

    // The host switch commits a tap; the decoration reads it on the next frame.
    liked.set(true);
    report("switch committed", &widget);

    println!();
    println!("Style form, fed by a host configuration:");
    let mut style = LabeledToggleStyle::new(glyphs);
    style.appear(&ToggleConfiguration::new(true));
    run(&mut style, &DRAG_ACROSS);

    style.configuration_changed(&ToggleConfiguration::new(true).mixed(true));
    report("host reports mixed", &style);

    println!();
    println!(
        "Icon transition: linear over {:?}",
        ToggleDecorator::metrics(&widget).transition_duration()
    );
}
