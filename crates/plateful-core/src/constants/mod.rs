// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, unit measures and goal defaults used by the nutrition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable values (activity
//! multipliers, fat shares, calorie floors) live in the engine configuration
//! instead; only physical facts and fixed reference values belong here.

/// Energy density of macronutrients (Atwater factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Weight units expressed in grams
pub mod weight {
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams per avoirdupois ounce
    pub const GRAMS_PER_OZ: f64 = 28.349_523_125;
    /// Grams per pound
    pub const GRAMS_PER_LB: f64 = 453.592_37;
}

/// Volume units expressed in milliliters (US customary)
pub mod volume {
    /// Milliliters per liter
    pub const ML_PER_L: f64 = 1000.0;
    /// Milliliters per US cup (nutrition labelling cup)
    pub const ML_PER_CUP: f64 = 240.0;
    /// Milliliters per tablespoon
    pub const ML_PER_TBSP: f64 = 15.0;
    /// Milliliters per teaspoon
    pub const ML_PER_TSP: f64 = 5.0;
    /// Milliliters per US fluid ounce
    pub const ML_PER_FL_OZ: f64 = 29.573_5;
}

/// Fixed reference values from dietary guidelines
pub mod guidelines {
    /// Fiber target per 1000 kcal (grams)
    pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;
    /// Added sugar share of daily calories
    pub const SUGAR_CALORIE_SHARE: f64 = 0.10;
    /// Upper bound on the sugar goal (grams)
    pub const SUGAR_GOAL_CAP_G: u32 = 50;
    /// Saturated fat share of total fat grams
    pub const SATURATED_FAT_SHARE_OF_FAT: f64 = 0.33;
    /// Daily sodium limit (mg), AHA recommendation
    pub const SODIUM_GOAL_MG: u32 = 2300;
    /// Daily potassium target (mg)
    pub const POTASSIUM_GOAL_MG: u32 = 3500;
    /// Daily cholesterol limit (mg)
    pub const CHOLESTEROL_GOAL_MG: u32 = 300;
}

/// Fallback goals shown before a profile is complete
pub mod default_goals {
    /// Default daily calories
    pub const CALORIES: u32 = 2000;
    /// Default protein (g)
    pub const PROTEIN_G: u32 = 150;
    /// Default carbohydrates (g)
    pub const CARBS_G: u32 = 225;
    /// Default fat (g)
    pub const FAT_G: u32 = 67;
}

/// Accepted ranges for profile measurements
pub mod profile_limits {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum age the BMR equations are validated for
    pub const MIN_AGE_YEARS: u32 = 10;
    /// Maximum accepted age
    pub const MAX_AGE_YEARS: u32 = 120;
}
