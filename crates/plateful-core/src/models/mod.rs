// ABOUTME: Core data models for the Plateful nutrition engine
// ABOUTME: Re-exports nutrition record, food unit, and profile/goal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

/// Static unit definitions
pub mod food_unit;
/// Nutrition facts and serving basis
pub mod nutrition;
/// User profile, activity/goal enums, and nutrition goals
pub mod profile;

pub use food_unit::FoodUnit;
pub use nutrition::{NutritionRecord, ServingBasis, NUTRIENT_FIELD_COUNT};
pub use profile::{
    age_from_birth_date, ActivityLevel, CalorieSource, Gender, GoalDirection, NutritionGoals,
    ParseEnumError, ProfileField, UserProfile, WeightGoal,
};
