// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::display::Side;

/// Icon offset over the knob when the toggle shows its right glyph.
pub const DEFAULT_RIGHT_OFFSET: f64 = 13.0;
/// Icon offset over the knob when the toggle shows its left glyph.
pub const DEFAULT_LEFT_OFFSET: f64 = -11.0;
/// Speed multiplier applied to [`BASE_TRANSITION`].
pub const DEFAULT_TRANSITION_SPEED: f64 = 3.0;
/// Duration of a linear icon transition at speed `1.0`.
pub const BASE_TRANSITION: Duration = Duration::from_millis(350);

/// Errors produced when configuring [`ToggleMetrics`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// An icon offset was NaN or infinite.
    #[error("{side:?} icon offset must be finite, got {value}")]
    NonFiniteOffset {
        /// Which offset was rejected.
        side: Side,
        /// The rejected value.
        value: f64,
    },
    /// The transition speed was not a positive finite number.
    #[error("transition speed must be positive and finite, got {speed}")]
    InvalidTransitionSpeed {
        /// The rejected speed.
        speed: f64,
    },
}

/// Tunables for icon placement and the transition the host should animate.
///
/// The two offsets straddle the control centre so the icon sits over the
/// switch knob at each extreme. Platform switches differ slightly in knob
/// geometry, so hosts may supply their own values.
///
/// ```rust
/// use understory_labeled_toggle::ToggleMetrics;
///
/// let metrics = ToggleMetrics::new(-12.0, 12.0)
///     .and_then(|m| m.with_transition_speed(2.0))
///     .unwrap();
/// assert_eq!(metrics.left_offset(), -12.0);
/// assert_eq!(metrics.transition_duration().as_millis(), 175);
///
/// assert!(ToggleMetrics::new(f64::NAN, 12.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleMetrics {
    left_offset: f64,
    right_offset: f64,
    transition_speed: f64,
}

impl Default for ToggleMetrics {
    fn default() -> Self {
        Self {
            left_offset: DEFAULT_LEFT_OFFSET,
            right_offset: DEFAULT_RIGHT_OFFSET,
            transition_speed: DEFAULT_TRANSITION_SPEED,
        }
    }
}

impl ToggleMetrics {
    /// Creates metrics with custom offsets and the default transition speed.
    pub fn new(left_offset: f64, right_offset: f64) -> Result<Self, MetricsError> {
        check_offset(Side::Left, left_offset)?;
        check_offset(Side::Right, right_offset)?;
        Ok(Self {
            left_offset,
            right_offset,
            transition_speed: DEFAULT_TRANSITION_SPEED,
        })
    }

    /// Returns a copy with a different transition speed multiplier.
    pub fn with_transition_speed(self, speed: f64) -> Result<Self, MetricsError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(MetricsError::InvalidTransitionSpeed { speed });
        }
        Ok(Self {
            transition_speed: speed,
            ..self
        })
    }

    /// Offset used while the left glyph is shown.
    #[must_use]
    pub fn left_offset(&self) -> f64 {
        self.left_offset
    }

    /// Offset used while the right glyph is shown.
    #[must_use]
    pub fn right_offset(&self) -> f64 {
        self.right_offset
    }

    /// Offset for the given side.
    #[must_use]
    pub fn offset(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_offset,
            Side::Right => self.right_offset,
        }
    }

    /// Speed multiplier for the icon transition.
    #[must_use]
    pub fn transition_speed(&self) -> f64 {
        self.transition_speed
    }

    /// Duration of the linear icon transition the host should run.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "speed is positive and finite; out-of-range values saturate"
    )]
    pub fn transition_duration(&self) -> Duration {
        // Round half up; `nanos` is never negative.
        let nanos = BASE_TRANSITION.as_nanos() as f64 / self.transition_speed;
        Duration::from_nanos((nanos + 0.5) as u64)
    }
}

fn check_offset(side: Side, value: f64) -> Result<(), MetricsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MetricsError::NonFiniteOffset { side, value })
    }
}
