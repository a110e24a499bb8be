// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure derivations from a [`ToggleState`] snapshot to what the icon shows.

use kurbo::Vec2;

use crate::metrics::ToggleMetrics;
use crate::state::ToggleState;

/// One side of the toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The off side.
    Left,
    /// The on side.
    Right,
}

impl Side {
    /// Returns the side matching a boolean value (`true` is [`Side::Right`]).
    #[must_use]
    pub fn from_value(on: bool) -> Self {
        if on { Self::Right } else { Self::Left }
    }

    /// Returns `true` for [`Side::Right`].
    #[must_use]
    pub fn is_right(self) -> bool {
        self == Self::Right
    }
}

/// The pair of glyph identifiers a toggle switches between.
///
/// Glyphs are opaque to this crate: a symbol name, an icon enum, a font
/// codepoint. Resolving them is up to the host's icon system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Glyphs<G> {
    /// Glyph shown for the off state.
    pub left: G,
    /// Glyph shown for the on state.
    pub right: G,
}

impl<G> Glyphs<G> {
    /// Creates a glyph pair.
    pub fn new(left: G, right: G) -> Self {
        Self { left, right }
    }

    /// Returns the glyph for `side`.
    pub fn get(&self, side: Side) -> &G {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl<G> From<(G, G)> for Glyphs<G> {
    fn from((left, right): (G, G)) -> Self {
        Self::new(left, right)
    }
}

/// Returns the side the icon shows for `state`.
///
/// While pressing, only the pointer side matters. Once released, only the
/// committed value matters.
///
/// ```rust
/// use understory_labeled_toggle::{Side, ToggleState, active_side};
///
/// let mut state = ToggleState::new(true);
/// assert_eq!(active_side(&state), Side::Right);
///
/// // Pressing on the left half previews "off" even though the value is on.
/// state.pressing = true;
/// state.right_of_midpoint = false;
/// assert_eq!(active_side(&state), Side::Left);
/// ```
#[must_use]
pub fn active_side(state: &ToggleState) -> Side {
    let right = (state.pressing && state.right_of_midpoint) || (state.committed && !state.pressing);
    Side::from_value(right)
}

/// Returns the glyph the icon shows for `state`.
#[must_use]
pub fn active_glyph<'a, G>(state: &ToggleState, glyphs: &'a Glyphs<G>) -> &'a G {
    glyphs.get(active_side(state))
}

/// Returns the horizontal icon offset for `state`.
#[must_use]
pub fn icon_offset(state: &ToggleState, metrics: &ToggleMetrics) -> f64 {
    metrics.offset(active_side(state))
}

/// Where and what to draw for the icon overlay.
///
/// Side, glyph and offset come from one evaluation of the selection rule, so
/// they never disagree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPlacement<'a, G> {
    /// The side being shown.
    pub side: Side,
    /// The glyph to draw.
    pub glyph: &'a G,
    /// Horizontal offset of the icon from the control centre.
    pub offset: f64,
}

impl<'a, G> IconPlacement<'a, G> {
    /// Resolves the placement for a state snapshot.
    #[must_use]
    pub fn resolve(state: &ToggleState, glyphs: &'a Glyphs<G>, metrics: &ToggleMetrics) -> Self {
        let side = active_side(state);
        Self {
            side,
            glyph: glyphs.get(side),
            offset: metrics.offset(side),
        }
    }

    /// Returns the offset as a translation for the icon layer.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.offset, 0.0)
    }
}
