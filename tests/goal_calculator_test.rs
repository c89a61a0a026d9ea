// ABOUTME: Integration tests for daily nutrition goal calculation from user profiles
// ABOUTME: Reference profile values, incomplete profiles, weight goals, floors, custom targets and age resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful
//! Goal calculator test suite
//!
//! - Reference profile (70 kg, 175 cm, 30 y, male, moderate) end to end
//! - `None` for every missing required field
//! - Weight goal offsets and the gender calorie floor
//! - Custom calorie targets
//! - Age from date of birth
//! - Formula selection and activity multipliers through configuration

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use plateful::config::{BmrFormula, NutritionConfig};
use plateful::errors::ErrorCode;
use plateful::goals::{
    calculate_bmr, calculate_nutrition_goals_as_of, calculate_tdee, default_nutrition_goals,
};
use plateful::models::{
    ActivityLevel, CalorieSource, Gender, NutritionGoals, ProfileField, UserProfile, WeightGoal,
};

mod common;

use common::{reference_date, reference_profile};

fn goals_for(profile: &UserProfile) -> NutritionGoals {
    calculate_nutrition_goals_as_of(profile, &NutritionConfig::default(), reference_date())
        .unwrap()
        .expect("profile should be complete")
}

// ============================================================================
// REFERENCE PROFILE
// ============================================================================

#[test]
fn test_reference_profile_goals() {
    common::init_test_logging();

    let goals = goals_for(&reference_profile());

    // 10 * 70 + 6.25 * 175 - 5 * 30 + 5 = 1648.75
    assert_eq!(goals.bmr, Some(1649));
    // 1648.75 * 1.55 = 2555.56
    assert_eq!(goals.tdee, Some(2556));
    assert_eq!(goals.calorie_goal, 2556);
    assert_eq!(goals.weight_goal_adjustment, 0);
    assert_eq!(goals.calorie_source, CalorieSource::Computed);

    // 1.4 g/kg at moderate activity
    assert_eq!(goals.protein_goal, 98);
    // 30 % of 2556 kcal / 9
    assert_eq!(goals.fat_goal, 85);
    // (2556 - 392 - 766.8) / 4
    assert_eq!(goals.carb_goal, 349);

    assert_eq!(goals.fiber_goal, 36);
    assert_eq!(goals.sugar_goal, 50);
    assert_eq!(goals.saturated_fat_goal, 28);
    assert_eq!(goals.sodium_goal, 2300);
    assert_eq!(goals.potassium_goal, 3500);
    assert_eq!(goals.cholesterol_goal, 300);
    assert!(goals.is_personalized());
}

#[test]
fn test_macro_energy_adds_up_to_calorie_goal() {
    common::init_test_logging();

    for level in ActivityLevel::ALL {
        for goal in WeightGoal::ALL {
            let profile = UserProfile {
                activity_level: Some(level),
                weight_goal: Some(goal),
                ..reference_profile()
            };
            let goals = goals_for(&profile);
            let macro_kcal = (goals.protein_goal + goals.carb_goal) * 4 + goals.fat_goal * 9;
            let diff = i64::from(macro_kcal) - i64::from(goals.calorie_goal);
            assert!(
                diff.abs() <= 9,
                "{level} / {goal}: macros {macro_kcal} vs {}",
                goals.calorie_goal
            );
        }
    }
}

// ============================================================================
// INCOMPLETE PROFILES
// ============================================================================

#[test]
fn test_missing_fields_yield_none() {
    common::init_test_logging();

    let config = NutritionConfig::default();
    let cases: [(UserProfile, ProfileField); 5] = [
        (UserProfile { weight_kg: None, ..reference_profile() }, ProfileField::Weight),
        (UserProfile { height_cm: None, ..reference_profile() }, ProfileField::Height),
        (UserProfile { age: None, ..reference_profile() }, ProfileField::Age),
        (UserProfile { gender: None, ..reference_profile() }, ProfileField::Gender),
        (
            UserProfile { activity_level: None, ..reference_profile() },
            ProfileField::ActivityLevel,
        ),
    ];

    for (profile, field) in cases {
        let goals = calculate_nutrition_goals_as_of(&profile, &config, reference_date()).unwrap();
        assert!(goals.is_none(), "missing {field} should give no goals");
        assert_eq!(profile.missing_goal_fields(), vec![field]);
    }
}

#[test]
fn test_empty_profile_lists_every_field() {
    common::init_test_logging();

    let profile = UserProfile::default();
    let goals =
        calculate_nutrition_goals_as_of(&profile, &NutritionConfig::default(), reference_date())
            .unwrap();
    assert!(goals.is_none());
    assert_eq!(profile.missing_goal_fields().len(), 5);
}

#[test]
fn test_missing_weight_goal_means_maintain() {
    common::init_test_logging();

    let implicit = goals_for(&reference_profile());
    let explicit = goals_for(&UserProfile {
        weight_goal: Some(WeightGoal::Maintain),
        ..reference_profile()
    });
    assert_eq!(implicit, explicit);
}

#[test]
fn test_default_goals_are_not_personalized() {
    let goals = default_nutrition_goals();
    assert_eq!(goals.calorie_goal, 2000);
    assert_eq!(goals.calorie_source, CalorieSource::Default);
    assert_eq!(goals.tdee, None);
}

// ============================================================================
// WEIGHT GOALS AND FLOORS
// ============================================================================

#[test]
fn test_lose_half_kg_applies_deficit_and_higher_protein() {
    common::init_test_logging();

    let goals = goals_for(&UserProfile {
        weight_goal: Some(WeightGoal::LoseHalfKg),
        ..reference_profile()
    });

    assert_eq!(goals.weight_goal_adjustment, -500);
    assert_eq!(goals.calorie_goal, 2056);
    // 2.0 g/kg when losing at moderate activity
    assert_eq!(goals.protein_goal, 140);
    // 25 % of calories from fat
    assert_eq!(goals.fat_goal, 57);
}

#[test]
fn test_gain_applies_surplus() {
    common::init_test_logging();

    let goals = goals_for(&UserProfile {
        weight_goal: Some(WeightGoal::GainHalfKg),
        ..reference_profile()
    });
    assert_eq!(goals.weight_goal_adjustment, 500);
    assert_eq!(goals.calorie_goal, 3056);
}

#[test]
fn test_calorie_floor_by_gender() {
    common::init_test_logging();

    let small = UserProfile {
        weight_kg: Some(45.0),
        height_cm: Some(150.0),
        age: Some(60),
        gender: Some(Gender::Female),
        activity_level: Some(ActivityLevel::Sedentary),
        weight_goal: Some(WeightGoal::LoseOneKg),
        ..UserProfile::default()
    };
    let floored = goals_for(&small);
    assert_eq!(floored.calorie_goal, 1200);
    // (450 + 937.5 - 300 - 161) * 1.2 = 1111.8; the floor lifts the goal above TDEE
    assert_eq!(floored.tdee, Some(1112));
    assert_eq!(floored.weight_goal_adjustment, 88);

    let other = UserProfile {
        gender: Some(Gender::Other),
        ..small.clone()
    };
    assert_eq!(goals_for(&other).calorie_goal, 1200);

    let male = UserProfile {
        gender: Some(Gender::Male),
        ..small
    };
    assert_eq!(goals_for(&male).calorie_goal, 1500);
}

// ============================================================================
// CUSTOM TARGETS
// ============================================================================

#[test]
fn test_custom_target_replaces_computed_calories() {
    common::init_test_logging();

    let goals = goals_for(&UserProfile {
        daily_calorie_target: Some(1800),
        ..reference_profile()
    });
    assert_eq!(goals.calorie_goal, 1800);
    assert_eq!(goals.tdee, Some(2556));
    assert_eq!(goals.weight_goal_adjustment, 1800 - 2556);
    assert_eq!(goals.calorie_source, CalorieSource::CustomTarget);
    // Fat is split from the custom total: 30 % of 1800 / 9
    assert_eq!(goals.fat_goal, 60);
}

#[test]
fn test_custom_target_below_floor_is_kept() {
    common::init_test_logging();

    let goals = goals_for(&UserProfile {
        daily_calorie_target: Some(1000),
        ..reference_profile()
    });
    assert_eq!(goals.calorie_goal, 1000);
}

#[test]
fn test_zero_custom_target_rejected() {
    common::init_test_logging();

    let err = calculate_nutrition_goals_as_of(
        &UserProfile {
            daily_calorie_target: Some(0),
            ..reference_profile()
        },
        &NutritionConfig::default(),
        reference_date(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// AGE RESOLUTION
// ============================================================================

#[test]
fn test_age_from_date_of_birth() {
    common::init_test_logging();

    let from_age = goals_for(&reference_profile());
    let from_dob = goals_for(&UserProfile {
        age: None,
        date_of_birth: NaiveDate::from_ymd_opt(1995, 6, 15),
        ..reference_profile()
    });
    assert_eq!(from_age, from_dob);

    // Birthday tomorrow: still 29, so BMR is 5 kcal higher
    let day_before = goals_for(&UserProfile {
        age: None,
        date_of_birth: NaiveDate::from_ymd_opt(1995, 6, 16),
        ..reference_profile()
    });
    assert_eq!(day_before.bmr, Some(1654));
}

#[test]
fn test_explicit_age_wins_over_date_of_birth() {
    common::init_test_logging();

    let goals = goals_for(&UserProfile {
        date_of_birth: NaiveDate::from_ymd_opt(1950, 1, 1),
        ..reference_profile()
    });
    assert_eq!(goals.bmr, Some(1649));
}

#[test]
fn test_future_date_of_birth_rejected() {
    common::init_test_logging();

    let result = calculate_nutrition_goals_as_of(
        &UserProfile {
            age: None,
            date_of_birth: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..reference_profile()
        },
        &NutritionConfig::default(),
        reference_date(),
    );
    assert!(result.is_err());
}

#[test]
fn test_out_of_range_weight_rejected() {
    common::init_test_logging();

    let result = calculate_nutrition_goals_as_of(
        &UserProfile {
            weight_kg: Some(-70.0),
            ..reference_profile()
        },
        &NutritionConfig::default(),
        reference_date(),
    );
    assert_eq!(result.unwrap_err().code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_harris_benedict_selected_by_config() {
    common::init_test_logging();

    let mut config = NutritionConfig::default();
    config.bmr.formula = BmrFormula::HarrisBenedict;

    let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Male, &config.bmr).unwrap();
    assert!((bmr - 1702.025).abs() < 1e-6);

    let goals = calculate_nutrition_goals_as_of(&reference_profile(), &config, reference_date())
        .unwrap()
        .unwrap();
    assert_eq!(goals.bmr, Some(1702));
}

#[test]
fn test_activity_multipliers_are_monotonic() {
    common::init_test_logging();

    let config = NutritionConfig::default();
    let tdees: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|level| calculate_tdee(1648.75, *level, &config.activity_factors).unwrap())
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((tdees[0] - 1978.5).abs() < 1e-9);
    assert!((tdees[4] - 3132.625).abs() < 1e-9);
}
