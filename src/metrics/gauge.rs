//! BMI dial. Its three colour bands deliberately do not follow the four-way
//! category table.

use crate::metrics::constants::*;

/// Colour band of the gauge needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Emerald,
    Amber,
    Red,
}

impl GaugeBand {
    pub fn hex(self) -> &'static str {
        match self {
            GaugeBand::Emerald => "#10b981",
            GaugeBand::Amber => "#fbbf24",
            GaugeBand::Red => "#ef4444",
        }
    }
}

pub fn gauge_band(bmi: f64) -> GaugeBand {
    if bmi < GAUGE_AMBER_FROM {
        GaugeBand::Emerald
    } else if bmi < GAUGE_RED_FROM {
        GaugeBand::Amber
    } else {
        GaugeBand::Red
    }
}

/// Position of `bmi` on the dial, 0–100, clamped to the displayable range.
pub fn gauge_percentage(bmi: f64) -> f64 {
    let normalized = bmi.clamp(GAUGE_BMI_MIN, GAUGE_BMI_MAX);
    (normalized - GAUGE_BMI_MIN) / (GAUGE_BMI_MAX - GAUGE_BMI_MIN) * 100.0
}

/// Needle rotation in degrees, from -135 (leftmost) to +135 (rightmost).
pub fn needle_angle(bmi: f64) -> f64 {
    gauge_percentage(bmi) * (GAUGE_SWEEP_DEGREES / 100.0) - GAUGE_SWEEP_DEGREES / 2.0
}
