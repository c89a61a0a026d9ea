// ABOUTME: Daily intake totals and progress against nutrition goals
// ABOUTME: Feeds the consumed / remaining / percent figures behind the goal progress bars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful_core::models::{NutritionGoals, NutritionRecord};
use serde::Serialize;

/// Sum of the nutrition records logged for one day
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DailyIntake {
    /// Field-wise total; an optional nutrient is `None` if no entry reported it
    pub total: NutritionRecord,
    /// Number of records summed
    pub entries: usize,
}

impl DailyIntake {
    /// Sum already-scaled records
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a NutritionRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |intake, record| Self {
                total: intake.total.combined(record),
                entries: intake.entries + 1,
            })
    }
}

/// Progress of one nutrient against its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProgress {
    /// Amount consumed
    pub consumed: f64,
    /// Daily goal
    pub goal: f64,
    /// `goal - consumed`; negative once the goal is exceeded
    pub remaining: f64,
    /// Consumed as a percentage of the goal, unclamped; `None` for a zero goal
    pub percent: Option<f64>,
}

impl NutrientProgress {
    fn new(consumed: f64, goal: u32) -> Self {
        let goal = f64::from(goal);
        Self {
            consumed,
            goal,
            remaining: goal - consumed,
            percent: (goal > 0.0).then(|| consumed / goal * 100.0),
        }
    }
}

/// Per-nutrient progress for a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Calories (kcal)
    pub calories: NutrientProgress,
    /// Protein (g)
    pub protein: NutrientProgress,
    /// Carbohydrates (g)
    pub carbs: NutrientProgress,
    /// Fat (g)
    pub fat: NutrientProgress,
    /// Fiber (g)
    pub fiber: NutrientProgress,
    /// Sugar (g)
    pub sugar: NutrientProgress,
    /// Sodium (mg)
    pub sodium: NutrientProgress,
}

impl GoalProgress {
    /// Compare a day's intake with the goals
    ///
    /// Unreported optional nutrients count as zero consumed.
    #[must_use]
    pub fn compute(intake: &DailyIntake, goals: &NutritionGoals) -> Self {
        let total = &intake.total;
        Self {
            calories: NutrientProgress::new(total.calories, goals.calorie_goal),
            protein: NutrientProgress::new(total.proteins, goals.protein_goal),
            carbs: NutrientProgress::new(total.carbs, goals.carb_goal),
            fat: NutrientProgress::new(total.fats, goals.fat_goal),
            fiber: NutrientProgress::new(total.fiber.unwrap_or(0.0), goals.fiber_goal),
            sugar: NutrientProgress::new(total.sugar.unwrap_or(0.0), goals.sugar_goal),
            sodium: NutrientProgress::new(total.sodium.unwrap_or(0.0), goals.sodium_goal),
        }
    }
}
