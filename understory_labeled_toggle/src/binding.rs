// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

use crate::display::{Glyphs, IconPlacement, Side, active_side};
use crate::gesture::{Changes, ToggleGesture};
use crate::metrics::ToggleMetrics;
use crate::state::ToggleState;

/// A read/write boolean cell owned by the caller.
///
/// The host's switch control writes through it; [`LabeledToggle`] only reads.
pub trait ToggleBinding {
    /// Returns the current value.
    fn get(&self) -> bool;
    /// Stores a new value.
    fn set(&mut self, value: bool);
}

impl ToggleBinding for bool {
    fn get(&self) -> bool {
        *self
    }

    fn set(&mut self, value: bool) {
        *self = value;
    }
}

impl ToggleBinding for &mut bool {
    fn get(&self) -> bool {
        **self
    }

    fn set(&mut self, value: bool) {
        **self = value;
    }
}

impl ToggleBinding for &Cell<bool> {
    fn get(&self) -> bool {
        Cell::get(self)
    }

    fn set(&mut self, value: bool) {
        Cell::set(self, value);
    }
}

impl ToggleBinding for Rc<Cell<bool>> {
    fn get(&self) -> bool {
        Cell::get(self)
    }

    fn set(&mut self, value: bool) {
        Cell::set(self, value);
    }
}

/// The widget form: a toggle decoration bound directly to a boolean cell.
///
/// The committed value is read from the binding on every derivation, so a
/// write by the host switch shows up on the next placement without any
/// notification.
///
/// ```rust
/// use understory_labeled_toggle::{Glyphs, LabeledToggle, Side, ToggleBinding, ToggleGesture};
///
/// let mut toggle = LabeledToggle::new(false, Glyphs::new("moon", "sun"));
/// toggle.layout_changed(50.0);
///
/// toggle.gesture(ToggleGesture::Down { x: 40.0 });
/// assert_eq!(toggle.active_side(), Side::Right);
/// toggle.gesture(ToggleGesture::Up);
///
/// // The switch commits on tap.
/// toggle.binding_mut().set(true);
/// assert_eq!(*toggle.placement().glyph, "sun");
/// ```
#[derive(Clone, Debug)]
pub struct LabeledToggle<B, G> {
    binding: B,
    glyphs: Glyphs<G>,
    metrics: ToggleMetrics,
    state: ToggleState,
}

impl<B: ToggleBinding, G> LabeledToggle<B, G> {
    /// Creates a toggle decoration over `binding` with the given glyphs.
    pub fn new(binding: B, glyphs: Glyphs<G>) -> Self {
        let committed = binding.get();
        Self {
            binding,
            glyphs,
            metrics: ToggleMetrics::default(),
            state: ToggleState::new(committed),
        }
    }

    /// Replaces the placement metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: ToggleMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Returns the bound cell.
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Returns the bound cell for the host switch to write through.
    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Consumes the toggle and returns the bound cell.
    pub fn into_binding(self) -> B {
        self.binding
    }

    /// Returns the committed value, read from the binding.
    pub fn is_on(&self) -> bool {
        self.binding.get()
    }

    /// Returns the glyph pair.
    pub fn glyphs(&self) -> &Glyphs<G> {
        &self.glyphs
    }

    /// Returns the placement metrics.
    pub fn metrics(&self) -> &ToggleMetrics {
        &self.metrics
    }

    /// Records the rendered width of the control.
    pub fn layout_changed(&mut self, width: f64) {
        self.state.layout_changed(width);
    }

    /// Feeds a gesture through the state machine.
    ///
    /// Also reports [`Changes::COMMITTED`] if the binding changed since the
    /// last event, so hosts can repaint after the switch commits on release.
    pub fn gesture(&mut self, gesture: ToggleGesture) -> Changes {
        let committed = self.sync();
        committed | self.state.apply(gesture)
    }

    /// Returns a state snapshot with the committed value read from the binding.
    pub fn state(&self) -> ToggleState {
        ToggleState {
            committed: self.binding.get(),
            ..self.state
        }
    }

    /// Returns the side the icon shows.
    pub fn active_side(&self) -> Side {
        active_side(&self.state())
    }

    /// Returns where and what to draw for the icon.
    pub fn placement(&self) -> IconPlacement<'_, G> {
        IconPlacement::resolve(&self.state(), &self.glyphs, &self.metrics)
    }

    fn sync(&mut self) -> Changes {
        let committed = self.binding.get();
        self.state.set_committed(committed)
    }
}
