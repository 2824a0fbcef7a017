use assert_float_eq::assert_float_absolute_eq;

use biolife_rs::metrics::{
    activity_factor, adjust_for_goal, bmi_category, calculate_bmi, calculate_bmr, calculate_tdee,
    target_calories, BmiCategory,
};
use biolife_rs::models::{ActivityLevel, Gender, Goal, UserProfile};

fn make_profile(age: u32, gender: Gender, height: f64, weight: f64) -> UserProfile {
    UserProfile {
        age,
        gender,
        height,
        weight,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintain,
    }
}

#[test]
fn test_bmi_matches_formula() {
    for (w, h) in [(30.0, 120.0), (70.0, 175.0), (88.4, 181.0), (200.0, 230.0), (54.3, 149.0)] {
        let expected = ((w / ((h / 100.0) * (h / 100.0))) * 10.0_f64).round() / 10.0;
        assert_float_absolute_eq!(calculate_bmi(w, h), expected, 1e-9);
    }
}

#[test]
fn test_bmr_sex_difference_is_constant() {
    for (age, height, weight) in [(15, 120.0, 30.0), (30, 175.0, 70.0), (64, 158.0, 92.5), (100, 230.0, 200.0)] {
        let male = calculate_bmr(&make_profile(age, Gender::Male, height, weight));
        let female = calculate_bmr(&make_profile(age, Gender::Female, height, weight));
        assert_eq!(male - female, 166, "age {} height {} weight {}", age, height, weight);
    }
}

#[test]
fn test_tdee_scales_bmr_for_every_level() {
    let base = make_profile(35, Gender::Female, 168.0, 63.0);
    let bmr = calculate_bmr(&base);

    for level in ActivityLevel::ALL {
        let profile = UserProfile {
            activity_level: level,
            ..base.clone()
        };
        let expected = (f64::from(bmr) * activity_factor(level)).round() as i32;
        assert_eq!(calculate_tdee(&profile), expected, "level {:?}", level);
    }
}

#[test]
fn test_activity_factors_increase_with_level() {
    let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| activity_factor(*l)).collect();
    assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
}

#[test]
fn test_category_thresholds() {
    let cases = [
        (18.49, "Abaixo do peso"),
        (18.5, "Peso ideal"),
        (24.99, "Peso ideal"),
        (25.0, "Sobrepeso"),
        (29.99, "Sobrepeso"),
        (30.0, "Obesidade"),
    ];
    for (bmi, label) in cases {
        assert_eq!(bmi_category(bmi).label(), label, "bmi {}", bmi);
    }
    assert_eq!(bmi_category(12.0), BmiCategory::Underweight);
}

#[test]
fn test_goal_adjustment() {
    assert_eq!(adjust_for_goal(2000, Goal::Lose), 1500);
    assert_eq!(adjust_for_goal(2000, Goal::Gain), 2400);
    assert_eq!(adjust_for_goal(2000, Goal::Maintain), 2000);
}

#[test]
fn test_target_calories_uses_profile_goal() {
    let profile = UserProfile {
        goal: Goal::Lose,
        ..UserProfile::default()
    };
    assert_eq!(target_calories(&profile), calculate_tdee(&profile) - 500);
}
