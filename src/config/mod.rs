// ABOUTME: Engine configuration entry point with a process-wide singleton
// ABOUTME: Loads nutrition defaults, applies PLATEFUL_* environment overrides, and validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Configuration for the goal calculator.
//!
//! Unit conversion tables are static and not configurable. Everything that
//! feeds goal calculation (formula choice, multipliers, offsets, floors, macro
//! coefficients) lives in [`NutritionConfig`], loaded once per process:
//!
//! 1. start from [`NutritionConfig::default`]
//! 2. apply `PLATEFUL_*` environment overrides
//! 3. validate
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PLATEFUL_BMR_FORMULA` | `bmr.formula` (`mifflin_st_jeor`, `harris_benedict`) |
//! | `PLATEFUL_ACTIVITY_SEDENTARY` .. `PLATEFUL_ACTIVITY_VERY_ACTIVE` | `activity_factors.*` |
//! | `PLATEFUL_MIN_CALORIES_MALE` / `PLATEFUL_MIN_CALORIES_FEMALE` | `calorie_floor.*` |
//! | `PLATEFUL_FAT_SHARE_LOSE` / `_MAINTAIN` / `_GAIN` | `macronutrients.fat_share_*` |

/// Configuration error types
pub mod error;
/// Nutrition goal tables
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, BmrFormula, CalorieFloorConfig, MacronutrientConfig,
    NutritionConfig, WeightGoalAdjustmentConfig,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults (with a warning) when the environment holds invalid overrides.
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            formula = %config.bmr.formula,
            "Nutrition configuration loaded"
        );
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("PLATEFUL_BMR_FORMULA", &mut self.bmr.formula)?;

        let factors = &mut self.activity_factors;
        Self::apply_env_var("PLATEFUL_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("PLATEFUL_ACTIVITY_LIGHT", &mut factors.light)?;
        Self::apply_env_var("PLATEFUL_ACTIVITY_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("PLATEFUL_ACTIVITY_ACTIVE", &mut factors.active)?;
        Self::apply_env_var("PLATEFUL_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;

        Self::apply_env_var("PLATEFUL_MIN_CALORIES_MALE", &mut self.calorie_floor.male)?;
        Self::apply_env_var("PLATEFUL_MIN_CALORIES_FEMALE", &mut self.calorie_floor.female)?;

        let macros = &mut self.macronutrients;
        Self::apply_env_var("PLATEFUL_FAT_SHARE_LOSE", &mut macros.fat_share_lose)?;
        Self::apply_env_var("PLATEFUL_FAT_SHARE_MAINTAIN", &mut macros.fat_share_maintain)?;
        Self::apply_env_var("PLATEFUL_FAT_SHARE_GAIN", &mut macros.fat_share_gain)?;

        Ok(self)
    }
}
