use crate::metrics::constants::*;
use crate::models::{Gender, UserProfile};

/// Round to a fixed number of decimal places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Body-mass index: weight (kg) / height (m)², rounded to one decimal.
///
/// Only meaningful for positive heights.
pub fn calculate_bmi(weight: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight / (height_m * height_m), 1)
}

/// Basal metabolic rate (Mifflin-St Jeor), in kcal/day.
pub fn calculate_bmr(profile: &UserProfile) -> i32 {
    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    let bmr = BMR_WEIGHT_COEFF * profile.weight + BMR_HEIGHT_COEFF * profile.height
        - BMR_AGE_COEFF * f64::from(profile.age)
        + offset;
    bmr.round() as i32
}

/// Total daily energy expenditure: BMR scaled by the activity factor.
pub fn calculate_tdee(profile: &UserProfile) -> i32 {
    let bmr = calculate_bmr(profile);
    (f64::from(bmr) * activity_factor(profile.activity_level)).round() as i32
}

/// Apply the goal offset to a TDEE value.
pub fn adjust_for_goal(tdee: i32, goal: crate::models::Goal) -> i32 {
    tdee + goal_calorie_offset(goal)
}

/// Daily calorie target for the profile's goal.
pub fn target_calories(profile: &UserProfile) -> i32 {
    adjust_for_goal(calculate_tdee(profile), profile.goal)
}

/// Textual BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Ideal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Abaixo do peso",
            BmiCategory::Ideal => "Peso ideal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obesity => "Obesidade",
        }
    }

    /// Display colour as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            BmiCategory::Underweight | BmiCategory::Ideal => "#10b981",
            BmiCategory::Overweight => "#fbbf24",
            BmiCategory::Obesity => "#ef4444",
        }
    }
}

/// Classify a BMI value. Ranges are inclusive-exclusive; obesity is unbounded.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < BMI_IDEAL_MAX {
        BmiCategory::Ideal
    } else if bmi < BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal};

    fn profile(gender: Gender, level: ActivityLevel) -> UserProfile {
        UserProfile {
            age: 30,
            gender,
            height: 175.0,
            weight: 70.0,
            activity_level: level,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_bmi_rounds_to_one_decimal() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(100.0, 200.0), 25.0);
        assert_eq!(calculate_bmi(58.0, 160.0), 22.7);
    }

    #[test]
    fn test_bmr_known_values() {
        // 700 + 1093.75 - 150 + 5 = 1648.75
        assert_eq!(calculate_bmr(&profile(Gender::Male, ActivityLevel::Sedentary)), 1649);
        // 700 + 1093.75 - 150 - 161 = 1482.75
        assert_eq!(calculate_bmr(&profile(Gender::Female, ActivityLevel::Sedentary)), 1483);
    }

    #[test]
    fn test_tdee_known_value() {
        // 1649 * 1.55 = 2555.95
        assert_eq!(
            calculate_tdee(&profile(Gender::Male, ActivityLevel::ModeratelyActive)),
            2556
        );
    }

    #[test]
    fn test_adjust_for_goal() {
        assert_eq!(adjust_for_goal(2000, Goal::Lose), 1500);
        assert_eq!(adjust_for_goal(2000, Goal::Gain), 2400);
        assert_eq!(adjust_for_goal(2000, Goal::Maintain), 2000);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(bmi_category(18.49).label(), "Abaixo do peso");
        assert_eq!(bmi_category(18.5).label(), "Peso ideal");
        assert_eq!(bmi_category(24.99).label(), "Peso ideal");
        assert_eq!(bmi_category(25.0).label(), "Sobrepeso");
        assert_eq!(bmi_category(29.99).label(), "Sobrepeso");
        assert_eq!(bmi_category(30.0).label(), "Obesidade");
        assert_eq!(bmi_category(95.0), BmiCategory::Obesity);
    }
}
