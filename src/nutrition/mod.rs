// ABOUTME: Nutrition scaling and daily intake aggregation
// ABOUTME: Recalculates records for a new serving and sums a day's records against goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

/// Serving-to-serving recalculation
pub mod recalculator;
/// Daily intake and goal progress
pub mod summary;

pub use recalculator::{recalculate_nutrition, scaling_factor, validate_record};
pub use summary::{DailyIntake, GoalProgress, NutrientProgress};
