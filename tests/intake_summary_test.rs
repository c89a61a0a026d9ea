// ABOUTME: Integration tests for daily intake totals and goal progress
// ABOUTME: Summing scaled records, optional nutrient handling, remaining and percent figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use plateful::config::NutritionConfig;
use plateful::goals::{calculate_nutrition_goals_as_of, default_nutrition_goals};
use plateful::models::{NutritionRecord, ServingBasis};
use plateful::nutrition::{recalculate_nutrition, DailyIntake, GoalProgress};

mod common;

use common::{assert_close, medium_apple, reference_date, reference_profile};

#[test]
fn test_empty_day_is_zero() {
    common::init_test_logging();

    let no_records: Vec<NutritionRecord> = Vec::new();
    let intake = DailyIntake::from_records(&no_records);
    assert_eq!(intake.entries, 0);
    assert_eq!(intake.total, NutritionRecord::default());

    let progress = GoalProgress::compute(&intake, &default_nutrition_goals());
    assert_eq!(progress.calories.consumed, 0.0);
    assert_eq!(progress.calories.remaining, 2000.0);
    assert_eq!(progress.calories.percent, Some(0.0));
}

#[test]
fn test_day_totals_sum_scaled_entries() {
    common::init_test_logging();

    let two_apples = recalculate_nutrition(
        &medium_apple(),
        &ServingBasis::new(1.0, "medium"),
        &ServingBasis::new(2.0, "medium"),
        "Apple",
        None,
    )
    .unwrap();
    let rice = NutritionRecord::new(205.0, 4.3, 45.0, 0.4);

    let intake = DailyIntake::from_records([&two_apples, &rice]);
    assert_eq!(intake.entries, 2);
    assert_close(intake.total.calories, 395.0, 1e-9);
    assert_close(intake.total.carbs, 95.0, 1e-9);
    // Only the apples reported fiber
    assert_close(intake.total.fiber.unwrap(), 8.8, 1e-9);
    assert_eq!(intake.total.iron, None);
}

#[test]
fn test_progress_against_reference_goals() {
    common::init_test_logging();

    let config = NutritionConfig::default();
    let goals = calculate_nutrition_goals_as_of(&reference_profile(), &config, reference_date())
        .unwrap()
        .unwrap();
    let breakfast = NutritionRecord {
        fiber: Some(10.0),
        sodium: Some(400.0),
        ..NutritionRecord::new(639.0, 49.0, 80.0, 20.0)
    };
    let intake = DailyIntake::from_records([&breakfast]);
    let progress = GoalProgress::compute(&intake, &goals);

    assert_close(progress.calories.remaining, 2556.0 - 639.0, 1e-9);
    assert_close(progress.calories.percent.unwrap(), 25.0, 1e-9);
    assert_close(progress.protein.percent.unwrap(), 50.0, 1e-9);
    assert_close(progress.sodium.remaining, 1900.0, 1e-9);
    // Sugar was not reported and counts as nothing consumed
    assert_eq!(progress.sugar.consumed, 0.0);
}

#[test]
fn test_exceeding_goal_goes_negative_and_above_hundred_percent() {
    common::init_test_logging();

    let feast = NutritionRecord::new(3000.0, 100.0, 300.0, 120.0);
    let progress = GoalProgress::compute(
        &DailyIntake::from_records([&feast]),
        &default_nutrition_goals(),
    );
    assert_close(progress.calories.remaining, -1000.0, 1e-9);
    assert_close(progress.calories.percent.unwrap(), 150.0, 1e-9);
}
