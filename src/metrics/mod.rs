pub mod calculations;
pub mod constants;
pub mod gauge;

pub use calculations::{
    adjust_for_goal, bmi_category, calculate_bmi, calculate_bmr, calculate_tdee, target_calories,
    BmiCategory,
};
pub use constants::*;
pub use gauge::{gauge_band, gauge_percentage, needle_angle, GaugeBand};
