// ABOUTME: Nutrition goal calculation module
// ABOUTME: Exposes BMR/TDEE helpers and profile-to-goals calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

/// BMR, TDEE and macro/micronutrient targets
pub mod calculator;

pub use calculator::{
    calculate_bmr, calculate_harris_benedict, calculate_macro_targets,
    calculate_micronutrient_goals, calculate_mifflin_st_jeor, calculate_nutrition_goals_as_of,
    calculate_nutrition_goals_from_profile, calculate_tdee, default_nutrition_goals, MacroTargets,
    MicronutrientGoals,
};
