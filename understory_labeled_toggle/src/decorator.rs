// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "ui_events_adapter")]
use kurbo::Point;
#[cfg(feature = "ui_events_adapter")]
use ui_events::pointer::PointerEvent;

use crate::binding::{LabeledToggle, ToggleBinding};
use crate::display::{Glyphs, IconPlacement, Side, active_side};
use crate::gesture::{Changes, ToggleGesture};
use crate::metrics::ToggleMetrics;
use crate::state::ToggleState;
use crate::style::LabeledToggleStyle;

/// A sliding-icon decoration attachable to a switch.
///
/// [`LabeledToggle`] attaches directly to a bound value and
/// [`LabeledToggleStyle`] attaches to a style hook. Hosts that only route
/// events and draw the icon can drive either through this trait.
///
/// ```rust
/// use understory_labeled_toggle::{
///     Glyphs, LabeledToggle, LabeledToggleStyle, Side, ToggleConfiguration,
///     ToggleDecorator, ToggleGesture,
/// };
///
/// fn drag_across<D: ToggleDecorator>(toggle: &mut D) -> Side {
///     toggle.layout_changed(100.0);
///     toggle.gesture(ToggleGesture::Down { x: 0.0 });
///     toggle.gesture(ToggleGesture::Move { x: 80.0 });
///     toggle.active_side()
/// }
///
/// let mut widget = LabeledToggle::new(false, Glyphs::new("a", "b"));
/// let mut style = LabeledToggleStyle::new(Glyphs::new("a", "b"));
/// style.appear(&ToggleConfiguration::new(false));
///
/// assert_eq!(drag_across(&mut widget), Side::Right);
/// assert_eq!(drag_across(&mut style), Side::Right);
/// ```
pub trait ToggleDecorator {
    /// Glyph identifier type.
    type Glyph;

    /// Records the rendered width of the control.
    fn layout_changed(&mut self, width: f64);

    /// Feeds a gesture through the state machine.
    fn gesture(&mut self, gesture: ToggleGesture) -> Changes;

    /// Returns a snapshot of the current state.
    fn state(&self) -> ToggleState;

    /// Returns the glyph pair.
    fn glyphs(&self) -> &Glyphs<Self::Glyph>;

    /// Returns the placement metrics.
    fn metrics(&self) -> &ToggleMetrics;

    /// Returns the side the icon shows.
    fn active_side(&self) -> Side {
        active_side(&self.state())
    }

    /// Returns where and what to draw for the icon.
    fn placement(&self) -> IconPlacement<'_, Self::Glyph> {
        IconPlacement::resolve(&self.state(), self.glyphs(), self.metrics())
    }

    /// Feeds a `ui-events` pointer event, given the control's origin in the
    /// event's coordinate space.
    ///
    /// Events that carry no toggle gesture report no changes.
    #[cfg(feature = "ui_events_adapter")]
    fn pointer_event(&mut self, event: &PointerEvent, origin: Point) -> Changes {
        match crate::pointer::gesture_from_pointer(event, origin) {
            Some(gesture) => self.gesture(gesture),
            None => Changes::empty(),
        }
    }
}

impl<B: ToggleBinding, G> ToggleDecorator for LabeledToggle<B, G> {
    type Glyph = G;

    fn layout_changed(&mut self, width: f64) {
        Self::layout_changed(self, width);
    }

    fn gesture(&mut self, gesture: ToggleGesture) -> Changes {
        Self::gesture(self, gesture)
    }

    fn state(&self) -> ToggleState {
        Self::state(self)
    }

    fn glyphs(&self) -> &Glyphs<G> {
        Self::glyphs(self)
    }

    fn metrics(&self) -> &ToggleMetrics {
        Self::metrics(self)
    }
}

impl<G> ToggleDecorator for LabeledToggleStyle<G> {
    type Glyph = G;

    fn layout_changed(&mut self, width: f64) {
        Self::layout_changed(self, width);
    }

    fn gesture(&mut self, gesture: ToggleGesture) -> Changes {
        Self::gesture(self, gesture)
    }

    fn state(&self) -> ToggleState {
        Self::state(self)
    }

    fn glyphs(&self) -> &Glyphs<G> {
        Self::glyphs(self)
    }

    fn metrics(&self) -> &ToggleMetrics {
        Self::metrics(self)
    }
}
