// ABOUTME: Nutrition configuration for BMR, TDEE, weight-goal offsets and macro targets
// ABOUTME: Defaults follow Mifflin-St Jeor and common sports-nutrition protein guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Nutrition Goal Configuration
//!
//! Provides the tunable tables behind goal calculation: BMR equation
//! coefficients, activity multipliers, weight-goal calorie offsets, the
//! sex-based calorie floor, and macronutrient coefficients.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - BMR (alternative): Harris & Benedict (1919), revised by Roza & Shizgal (1984)
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Protein in energy deficit: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20

use super::error::ConfigError;
use plateful_core::models::{ActivityLevel, Gender, GoalDirection, WeightGoal};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Nutrition goal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie offsets per weight goal
    pub weight_goal_adjustments: WeightGoalAdjustmentConfig,
    /// Minimum daily calories per sex
    pub calorie_floor: CalorieFloorConfig,
    /// Macronutrient distribution targets
    pub macronutrients: MacronutrientConfig,
}

/// BMR equation selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990), the recommended default
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict
    HarrisBenedict,
}

impl Display for BmrFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
        })
    }
}

impl FromStr for BmrFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mifflin_st_jeor" | "mifflin" | "msj" => Ok(Self::MifflinStJeor),
            "harris_benedict" | "harris" | "hb" => Ok(Self::HarrisBenedict),
            other => Err(ConfigError::Parse(format!("unknown BMR formula: {other}"))),
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Equation used for BMR
    pub formula: BmrFormula,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            formula: BmrFormula::MifflinStJeor,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training, physical job): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Signed daily calorie offsets per weight goal
///
/// About 7700 kcal per kg of body fat, so 0.5 kg/week is roughly 500 kcal/day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightGoalAdjustmentConfig {
    /// Lose 1 kg/week
    pub lose_1: f64,
    /// Lose 0.75 kg/week
    pub lose_0_75: f64,
    /// Lose 0.5 kg/week
    pub lose_0_5: f64,
    /// Lose 0.25 kg/week
    pub lose_0_25: f64,
    /// Maintain
    pub maintain: f64,
    /// Gain 0.25 kg/week
    pub gain_0_25: f64,
    /// Gain 0.5 kg/week
    pub gain_0_5: f64,
}

impl WeightGoalAdjustmentConfig {
    /// Calorie offset for a goal
    #[must_use]
    pub const fn offset(&self, goal: WeightGoal) -> f64 {
        match goal {
            WeightGoal::LoseOneKg => self.lose_1,
            WeightGoal::LoseThreeQuarterKg => self.lose_0_75,
            WeightGoal::LoseHalfKg => self.lose_0_5,
            WeightGoal::LoseQuarterKg => self.lose_0_25,
            WeightGoal::Maintain => self.maintain,
            WeightGoal::GainQuarterKg => self.gain_0_25,
            WeightGoal::GainHalfKg => self.gain_0_5,
        }
    }
}

impl Default for WeightGoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_1: -1000.0,
            lose_0_75: -750.0,
            lose_0_5: -500.0,
            lose_0_25: -250.0,
            maintain: 0.0,
            gain_0_25: 250.0,
            gain_0_5: 500.0,
        }
    }
}

/// Minimum daily calorie target by sex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieFloorConfig {
    /// Male floor (kcal)
    pub male: f64,
    /// Female and other floor (kcal)
    pub female: f64,
}

impl CalorieFloorConfig {
    /// Floor for a gender; `Other` shares the female floor
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female | Gender::Other => self.female,
        }
    }
}

impl Default for CalorieFloorConfig {
    fn default() -> Self {
        Self {
            male: 1500.0,
            female: 1200.0,
        }
    }
}

/// Macronutrient configuration
///
/// Protein coefficients are indexed by activity level, sedentary first.
/// Losing weight uses the highest coefficients to preserve lean mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein g/kg while in a deficit
    pub protein_lose_g_per_kg: [f64; 5],
    /// Protein g/kg at maintenance
    pub protein_maintain_g_per_kg: [f64; 5],
    /// Protein g/kg while in a surplus
    pub protein_gain_g_per_kg: [f64; 5],
    /// Fat share of calories while losing
    pub fat_share_lose: f64,
    /// Fat share of calories at maintenance
    pub fat_share_maintain: f64,
    /// Fat share of calories while gaining
    pub fat_share_gain: f64,
}

impl MacronutrientConfig {
    /// Protein coefficient for a goal direction and activity level
    #[must_use]
    pub const fn protein_g_per_kg(&self, direction: GoalDirection, level: ActivityLevel) -> f64 {
        let table = match direction {
            GoalDirection::Lose => &self.protein_lose_g_per_kg,
            GoalDirection::Maintain => &self.protein_maintain_g_per_kg,
            GoalDirection::Gain => &self.protein_gain_g_per_kg,
        };
        table[activity_index(level)]
    }

    /// Fat share of daily calories for a goal direction
    #[must_use]
    pub const fn fat_share(&self, direction: GoalDirection) -> f64 {
        match direction {
            GoalDirection::Lose => self.fat_share_lose,
            GoalDirection::Maintain => self.fat_share_maintain,
            GoalDirection::Gain => self.fat_share_gain,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_lose_g_per_kg: [1.6, 1.8, 2.0, 2.2, 2.2],
            protein_maintain_g_per_kg: [1.0, 1.2, 1.4, 1.6, 1.8],
            protein_gain_g_per_kg: [1.6, 1.7, 1.8, 2.0, 2.2],
            fat_share_lose: 0.25,
            fat_share_maintain: 0.30,
            fat_share_gain: 0.25,
        }
    }
}

const fn activity_index(level: ActivityLevel) -> usize {
    match level {
        ActivityLevel::Sedentary => 0,
        ActivityLevel::Light => 1,
        ActivityLevel::Moderate => 2,
        ActivityLevel::Active => 3,
        ActivityLevel::VeryActive => 4,
    }
}

/// Highest accepted daily calorie floor
const MAX_CALORIE_FLOOR: f64 = 5000.0;

impl NutritionConfig {
    /// Validate internal consistency of every table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when ordered values are out of order and
    /// `ConfigError::ValueOutOfRange` when a value falls outside its plausible band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors: Vec<f64> = ActivityLevel::ALL
            .iter()
            .map(|level| self.activity_factors.multiplier(*level))
            .collect();
        if let Some(bad) = factors.iter().find(|f| !(1.0..=2.5).contains(*f)) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "activity multiplier {bad} must be between 1.0 and 2.5"
            )));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity multipliers must increase from sedentary to very_active".to_owned(),
            ));
        }

        for goal in WeightGoal::ALL {
            let offset = self.weight_goal_adjustments.offset(goal);
            let consistent = match goal.direction() {
                GoalDirection::Lose => offset < 0.0,
                GoalDirection::Maintain => offset == 0.0,
                GoalDirection::Gain => offset > 0.0,
            };
            if !consistent || !offset.is_finite() {
                return Err(ConfigError::InvalidRange(format!(
                    "calorie offset {offset} does not match weight goal {goal}"
                )));
            }
        }

        for (name, floor) in [
            ("min_calories_male", self.calorie_floor.male),
            ("min_calories_female", self.calorie_floor.female),
        ] {
            if !(floor.is_finite() && floor > 0.0 && floor <= MAX_CALORIE_FLOOR) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be in (0, {MAX_CALORIE_FLOOR}] kcal, got {floor}"
                )));
            }
        }

        let macros = &self.macronutrients;
        for (name, share) in [
            ("fat_share_lose", macros.fat_share_lose),
            ("fat_share_maintain", macros.fat_share_maintain),
            ("fat_share_gain", macros.fat_share_gain),
        ] {
            if !(0.15..=0.40).contains(&share) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be between 0.15 and 0.40, got {share}"
                )));
            }
        }
        let protein_tables = [
            macros.protein_lose_g_per_kg,
            macros.protein_maintain_g_per_kg,
            macros.protein_gain_g_per_kg,
        ];
        if protein_tables
            .iter()
            .flatten()
            .any(|coef| !(*coef > 0.0 && *coef <= 3.5))
        {
            return Err(ConfigError::ValueOutOfRange(
                "protein coefficients must be in (0, 3.5] g/kg".to_owned(),
            ));
        }

        Ok(())
    }
}
