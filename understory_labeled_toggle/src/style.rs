// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::display::{Glyphs, IconPlacement, Side, active_side};
use crate::gesture::{Changes, ToggleGesture};
use crate::metrics::ToggleMetrics;
use crate::state::ToggleState;

/// What a host switch exposes to a toggle style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToggleConfiguration {
    /// The switch's current value.
    pub is_on: bool,
    /// The switch reports an intermediate ("mixed") value.
    pub is_mixed: bool,
}

impl ToggleConfiguration {
    /// Creates a configuration that is not mixed.
    #[must_use]
    pub fn new(is_on: bool) -> Self {
        Self {
            is_on,
            is_mixed: false,
        }
    }

    /// Returns a copy with the mixed flag set.
    #[must_use]
    pub fn mixed(self, is_mixed: bool) -> Self {
        Self { is_mixed, ..self }
    }
}

/// The style form: a toggle decoration attached to a host switch's style hook.
///
/// The style keeps a local mirror of the configuration. The mixed flag is
/// folded into the pressing signal: while the host reports a mixed value, the
/// icon behaves as if a pointer were held on the left half.
///
/// ```rust
/// use understory_labeled_toggle::{
///     Glyphs, LabeledToggleStyle, Side, ToggleConfiguration, ToggleGesture,
/// };
///
/// let mut style = LabeledToggleStyle::new(Glyphs::new("heart", "heart.fill"));
/// style.appear(&ToggleConfiguration::new(true));
/// style.layout_changed(60.0);
/// assert_eq!(style.active_side(), Side::Right);
///
/// style.gesture(ToggleGesture::Down { x: 5.0 });
/// assert_eq!(style.active_side(), Side::Left);
///
/// style.gesture(ToggleGesture::Up);
/// style.configuration_changed(&ToggleConfiguration::new(false));
/// assert_eq!(*style.placement().glyph, "heart");
/// ```
#[derive(Clone, Debug)]
pub struct LabeledToggleStyle<G> {
    glyphs: Glyphs<G>,
    metrics: ToggleMetrics,
    configuration: ToggleConfiguration,
    state: ToggleState,
}

impl<G> LabeledToggleStyle<G> {
    /// Creates a style with the given glyphs.
    ///
    /// The mirrored value starts off until [`appear`](Self::appear) is called.
    pub fn new(glyphs: Glyphs<G>) -> Self {
        Self {
            glyphs,
            metrics: ToggleMetrics::default(),
            configuration: ToggleConfiguration::default(),
            state: ToggleState::default(),
        }
    }

    /// Replaces the placement metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: ToggleMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Seeds the local mirror when the styled switch first appears.
    pub fn appear(&mut self, configuration: &ToggleConfiguration) {
        self.configuration = *configuration;
        self.state.committed = configuration.is_on;
        self.state.pressing = configuration.is_mixed;
    }

    /// Mirrors a configuration change from the host switch.
    ///
    /// Only fields that differ from the last seen configuration are applied,
    /// so an unchanged mixed flag never interrupts an ongoing press.
    pub fn configuration_changed(&mut self, configuration: &ToggleConfiguration) -> Changes {
        let mut changes = Changes::empty();
        if configuration.is_on != self.configuration.is_on {
            changes |= self.state.set_committed(configuration.is_on);
        }
        if configuration.is_mixed != self.configuration.is_mixed {
            changes |= self.state.set_pressing(configuration.is_mixed);
        }
        self.configuration = *configuration;
        changes
    }

    /// Returns the last configuration seen from the host.
    pub fn configuration(&self) -> &ToggleConfiguration {
        &self.configuration
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
    pub fn gesture(&mut self, gesture: ToggleGesture) -> Changes {
        self.state.apply(gesture)
    }

    /// Returns a state snapshot.
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Returns the side the icon shows.
    pub fn active_side(&self) -> Side {
        active_side(&self.state)
    }

    /// Returns where and what to draw for the icon.
    pub fn placement(&self) -> IconPlacement<'_, G> {
        IconPlacement::resolve(&self.state, &self.glyphs, &self.metrics)
    }
}
