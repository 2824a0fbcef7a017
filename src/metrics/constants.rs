use crate::models::{ActivityLevel, Goal};

/// Mifflin-St Jeor sex offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Mifflin-St Jeor coefficients for weight (kg), height (cm) and age (years).
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Daily calorie adjustment applied to TDEE when losing weight.
pub const LOSE_CALORIE_OFFSET: i32 = -500;

/// Daily calorie adjustment applied to TDEE when gaining mass.
pub const GAIN_CALORIE_OFFSET: i32 = 400;

// ─────────────────────────────────────────────────────────────────────────────
// BMI classification
// ─────────────────────────────────────────────────────────────────────────────

/// Upper (exclusive) bound of the underweight range.
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;

/// Upper (exclusive) bound of the ideal range.
pub const BMI_IDEAL_MAX: f64 = 25.0;

/// Upper (exclusive) bound of the overweight range; obesity is unbounded above.
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Gauge display
// ─────────────────────────────────────────────────────────────────────────────

/// BMI range covered by the gauge dial.
pub const GAUGE_BMI_MIN: f64 = 15.0;
pub const GAUGE_BMI_MAX: f64 = 40.0;

/// The dial sweeps 270 degrees, centred on 12 o'clock.
pub const GAUGE_SWEEP_DEGREES: f64 = 270.0;

/// Gauge colour split. Independent of the four-way category table.
pub const GAUGE_AMBER_FROM: f64 = 25.0;
pub const GAUGE_RED_FROM: f64 = 30.0;

/// Multiplier that scales BMR into TDEE.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Daily calorie offset for a goal.
pub fn goal_calorie_offset(goal: Goal) -> i32 {
    match goal {
        Goal::Lose => LOSE_CALORIE_OFFSET,
        Goal::Maintain => 0,
        Goal::Gain => GAIN_CALORIE_OFFSET,
    }
}
