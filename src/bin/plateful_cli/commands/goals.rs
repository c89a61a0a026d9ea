// ABOUTME: Goal and progress commands for plateful-cli
// ABOUTME: Computes goals from profile flags and compares a day's records with them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful::config::NutritionConfig;
use plateful::errors::AppResult;
use plateful::goals::{calculate_nutrition_goals_from_profile, default_nutrition_goals};
use plateful::models::{NutritionGoals, NutritionRecord, ProfileField, UserProfile};
use plateful::nutrition::{DailyIntake, GoalProgress};
use serde_json::{json, Value};
use tracing::info;

fn missing_labels(profile: &UserProfile) -> Vec<&'static str> {
    profile
        .missing_goal_fields()
        .iter()
        .map(ProfileField::label)
        .collect()
}

/// Goals for the profile, or the fallback when `default` is set
pub fn goals(profile: &UserProfile, default: bool) -> AppResult<Value> {
    if default {
        return Ok(json!({ "goals": default_nutrition_goals() }));
    }

    let goals = calculate_nutrition_goals_from_profile(profile, NutritionConfig::global())?;
    Ok(match goals {
        Some(goals) => json!({ "goals": goals }),
        None => {
            info!("Profile incomplete; reporting missing fields");
            json!({ "goals": null, "missing": missing_labels(profile) })
        }
    })
}

/// Day totals and per-nutrient progress
///
/// Incomplete profiles are compared against the fallback goals, flagged in
/// the output.
pub fn progress(records_json: &str, profile: &UserProfile) -> AppResult<Value> {
    let records: Vec<NutritionRecord> = serde_json::from_str(records_json)?;
    let intake = DailyIntake::from_records(&records);

    let goals: NutritionGoals =
        calculate_nutrition_goals_from_profile(profile, NutritionConfig::global())?
            .unwrap_or_else(default_nutrition_goals);
    let progress = GoalProgress::compute(&intake, &goals);

    Ok(json!({
        "intake": intake,
        "goals": goals,
        "personalized": goals.is_personalized(),
        "missing": missing_labels(profile),
        "progress": progress,
    }))
}
