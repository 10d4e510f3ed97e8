//! Time-integrated alert confidence.
//!
//! The meter turns the detector's per-tick boolean into a scalar confidence
//! in `[0, 1]`. It fills while the target is in the cone (faster when the
//! target is closer) and decays at a fixed rate otherwise. Full confidence
//! is the trigger for pursuit, so `>= 1.0` is compared exactly with no
//! epsilon.

use crate::math;

/// Fill/decay tuning for one agent's meter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertTuning {
    /// Seconds to fill from empty with the target at point-blank range.
    pub fill_time_close: f32,
    /// Seconds to fill from empty with the target at maximum range.
    pub fill_time_far: f32,
    /// Confidence lost per second while the target is out of the cone.
    pub decay_rate: f32,
}

impl Default for AlertTuning {
    fn default() -> Self {
        Self {
            fill_time_close: 1.0,
            fill_time_far: 3.0,
            decay_rate: 0.5,
        }
    }
}

/// Scalar alert confidence accumulator.
#[derive(Clone, Copy, Debug)]
pub struct AlertMeter {
    tuning: AlertTuning,
    confidence: f32,
}

impl AlertMeter {
    pub fn new(tuning: AlertTuning) -> Self {
        Self {
            tuning,
            confidence: 0.0,
        }
    }

    /// Current confidence in `[0, 1]`.
    pub fn level(&self) -> f32 {
        self.confidence
    }

    /// True iff confidence has reached 1.0 exactly.
    pub fn is_fully_alerted(&self) -> bool {
        self.confidence >= 1.0
    }

    /// Integrate one tick of detector output.
    ///
    /// The fill time interpolates linearly between the close and far tuning
    /// values over normalized distance (`distance / range`, clamped to
    /// `[0, 1]`). A degenerate range counts as point-blank rather than a
    /// fault.
    pub fn tick(&mut self, visible: bool, distance: f32, detection_range: f32, dt: f32) {
        if visible {
            let normalized = if detection_range > 0.0 {
                (distance / detection_range).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let fill_time = math::lerp(
                self.tuning.fill_time_close,
                self.tuning.fill_time_far,
                normalized,
            );
            if fill_time > f32::EPSILON {
                self.confidence += dt / fill_time;
            } else {
                self.confidence = 1.0;
            }
        } else {
            self.confidence -= self.tuning.decay_rate * dt;
        }
        self.confidence = self.confidence.clamp(0.0, 1.0);
    }

    /// Drop confidence back to zero.
    pub fn reset(&mut self) {
        self.confidence = 0.0;
    }

    /// Force a specific confidence, clamped to `[0, 1]`.
    pub fn set_level(&mut self, level: f32) {
        self.confidence = level.clamp(0.0, 1.0);
    }
}
