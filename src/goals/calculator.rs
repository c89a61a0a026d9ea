// ABOUTME: Daily nutrition goal calculation from a user profile snapshot
// ABOUTME: BMR, TDEE, weight-goal adjustment, calorie floor, macro and micronutrient targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Goal Calculator
//!
//! Turns a [`UserProfile`] into [`NutritionGoals`]. Every step is a pure
//! function of its inputs and a [`NutritionConfig`]; nothing is cached.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - Helms, E.R., et al. (2014). Evidence-based recommendations for natural bodybuilding
//!   contest preparation. *Journal of the International Society of Sports Nutrition*, 11, 20.
//!   <https://doi.org/10.1186/1550-2783-11-20>

use chrono::{Local, NaiveDate};
use plateful_core::constants::{default_goals, energy, guidelines, profile_limits};
use plateful_core::errors::{AppError, AppResult};
use plateful_core::models::{
    ActivityLevel, CalorieSource, Gender, GoalDirection, NutritionGoals, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{
    ActivityFactorsConfig, BmrConfig, BmrFormula, MacronutrientConfig, NutritionConfig,
};

/// Macronutrient targets before rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

/// Micronutrient targets and limits, rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicronutrientGoals {
    /// Fiber target (g)
    pub fiber_g: u32,
    /// Sugar limit (g)
    pub sugar_g: u32,
    /// Saturated fat limit (g)
    pub saturated_fat_g: u32,
    /// Sodium limit (mg)
    pub sodium_mg: u32,
    /// Potassium target (mg)
    pub potassium_mg: u32,
    /// Cholesterol limit (mg)
    pub cholesterol_mg: u32,
}

fn validate_body_metrics(weight_kg: f64, height_cm: f64, age: u32) -> AppResult<()> {
    if !(weight_kg.is_finite() && weight_kg > 0.0 && weight_kg <= profile_limits::MAX_WEIGHT_KG) {
        return Err(AppError::out_of_range(format!(
            "Weight must be between 0 and {} kg, got {weight_kg}",
            profile_limits::MAX_WEIGHT_KG
        )));
    }
    if !(height_cm.is_finite() && height_cm > 0.0 && height_cm <= profile_limits::MAX_HEIGHT_CM) {
        return Err(AppError::out_of_range(format!(
            "Height must be between 0 and {} cm, got {height_cm}",
            profile_limits::MAX_HEIGHT_CM
        )));
    }
    if !(profile_limits::MIN_AGE_YEARS..=profile_limits::MAX_AGE_YEARS).contains(&age) {
        return Err(AppError::out_of_range(format!(
            "Age must be between {} and {} years, got {age}",
            profile_limits::MIN_AGE_YEARS,
            profile_limits::MAX_AGE_YEARS
        )));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women and other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    validate_body_metrics(weight_kg, height_cm, age)?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Men: 66.5 + 13.75w + 5.003h - 6.75a
/// - Women and other: 655.1 + 9.563w + 1.850h - 4.676a
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
) -> AppResult<f64> {
    validate_body_metrics(weight_kg, height_cm, age)?;

    let (constant, weight_coef, height_coef, age_coef) = match gender {
        Gender::Male => (66.5, 13.75, 5.003, 6.75),
        Gender::Female | Gender::Other => (655.1, 9.563, 1.850, 4.676),
    };
    let weight_component = weight_coef * weight_kg;
    let height_component = height_coef * height_cm;
    let age_component = age_coef * f64::from(age);

    Ok(constant + weight_component + height_component - age_component)
}

/// BMR with the equation selected in `config.formula`
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    match config.formula {
        BmrFormula::MifflinStJeor => {
            calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, config)
        }
        BmrFormula::HarrisBenedict => calculate_harris_benedict(weight_kg, height_cm, age, gender),
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
///
/// # Errors
///
/// Returns an error if BMR is not a positive finite number
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !(bmr.is_finite() && bmr > 0.0) {
        return Err(AppError::out_of_range(format!("BMR must be positive, got {bmr}")));
    }
    Ok(bmr * config.multiplier(activity_level))
}

/// Split a calorie total into protein, fat and carbohydrate grams
///
/// Protein is body-weight based; fat is a share of calories; carbohydrates
/// take whatever energy is left and never go below zero.
#[must_use]
pub fn calculate_macro_targets(
    calorie_goal: f64,
    weight_kg: f64,
    direction: GoalDirection,
    activity_level: ActivityLevel,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let protein_g = weight_kg * config.protein_g_per_kg(direction, activity_level);
    let fat_g = calorie_goal * config.fat_share(direction) / energy::KCAL_PER_G_FAT;
    let protein_kcal = protein_g * energy::KCAL_PER_G_PROTEIN;
    let fat_kcal = fat_g * energy::KCAL_PER_G_FAT;
    let remaining_kcal = calorie_goal - protein_kcal - fat_kcal;
    let carbs_g = remaining_kcal.max(0.0) / energy::KCAL_PER_G_CARBS;

    MacroTargets {
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Fiber, sugar, saturated fat, sodium, potassium and cholesterol goals
///
/// Fiber scales with calories (14 g per 1000 kcal); sugar is 10 % of calories
/// capped at 50 g; saturated fat is a third of the fat target.
#[must_use]
pub fn calculate_micronutrient_goals(calorie_goal: f64, fat_g: f64) -> MicronutrientGoals {
    let sugar_g =
        round_to_u32(calorie_goal * guidelines::SUGAR_CALORIE_SHARE / energy::KCAL_PER_G_CARBS);
    MicronutrientGoals {
        fiber_g: round_to_u32(calorie_goal / 1000.0 * guidelines::FIBER_G_PER_1000_KCAL),
        sugar_g: sugar_g.min(guidelines::SUGAR_GOAL_CAP_G),
        saturated_fat_g: round_to_u32(fat_g * guidelines::SATURATED_FAT_SHARE_OF_FAT),
        sodium_mg: guidelines::SODIUM_GOAL_MG,
        potassium_mg: guidelines::POTASSIUM_GOAL_MG,
        cholesterol_mg: guidelines::CHOLESTEROL_GOAL_MG,
    }
}

fn round_to_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Fixed goals for display while the profile is incomplete
///
/// Never returned by [`calculate_nutrition_goals_from_profile`]; marked with
/// [`CalorieSource::Default`] so it cannot be mistaken for a computed result.
#[must_use]
pub fn default_nutrition_goals() -> NutritionGoals {
    let calories = f64::from(default_goals::CALORIES);
    let micros = calculate_micronutrient_goals(calories, f64::from(default_goals::FAT_G));
    NutritionGoals {
        bmr: None,
        tdee: None,
        calorie_goal: default_goals::CALORIES,
        protein_goal: default_goals::PROTEIN_G,
        carb_goal: default_goals::CARBS_G,
        fat_goal: default_goals::FAT_G,
        fiber_goal: micros.fiber_g,
        sugar_goal: micros.sugar_g,
        saturated_fat_goal: micros.saturated_fat_g,
        sodium_goal: micros.sodium_mg,
        potassium_goal: micros.potassium_mg,
        cholesterol_goal: micros.cholesterol_mg,
        weight_goal_adjustment: 0,
        calorie_source: CalorieSource::Default,
    }
}

/// Calculate daily goals from a profile, resolving age against today's date
///
/// See [`calculate_nutrition_goals_as_of`].
///
/// # Errors
///
/// Returns an error if a present profile value is out of range
pub fn calculate_nutrition_goals_from_profile(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<Option<NutritionGoals>> {
    calculate_nutrition_goals_as_of(profile, config, Local::now().date_naive())
}

/// Calculate daily goals from a profile, resolving age on `today`
///
/// Returns `Ok(None)` when weight, height, age (or date of birth), gender or
/// activity level is missing; [`UserProfile::missing_goal_fields`] names
/// them. A missing weight goal means maintain.
///
/// A `daily_calorie_target` on the profile replaces the computed calorie goal.
/// The reported adjustment is then `target - round(TDEE)` and is bookkeeping
/// only; macros are split from the custom total.
///
/// # Errors
///
/// Returns an error if weight, height or age is out of range, the date of
/// birth lies after `today`, or the custom calorie target is zero
pub fn calculate_nutrition_goals_as_of(
    profile: &UserProfile,
    config: &NutritionConfig,
    today: NaiveDate,
) -> AppResult<Option<NutritionGoals>> {
    let (Some(weight_kg), Some(height_cm), Some(gender), Some(activity_level)) = (
        profile.weight_kg,
        profile.height_cm,
        profile.gender,
        profile.activity_level,
    ) else {
        debug!(
            missing = ?profile.missing_goal_fields(),
            "Profile incomplete, goals not computed"
        );
        return Ok(None);
    };
    if profile.age.is_none() && profile.date_of_birth.is_none() {
        debug!("Profile has neither age nor date of birth, goals not computed");
        return Ok(None);
    }
    let age = profile
        .age_on(today)
        .ok_or_else(|| AppError::out_of_range("Date of birth is in the future"))?;

    let weight_goal = profile.weight_goal.unwrap_or_default();
    let direction = weight_goal.direction();

    let bmr = calculate_bmr(weight_kg, height_cm, age, gender, &config.bmr)?;
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors)?;
    let floor = config.calorie_floor.for_gender(gender);

    let (calorie_goal, adjustment, calorie_source) = match profile.daily_calorie_target {
        Some(0) => {
            return Err(AppError::out_of_range(
                "Daily calorie target must be greater than zero",
            ));
        }
        Some(target) => {
            let target = f64::from(target);
            if target < floor {
                warn!(
                    user_id = ?profile.user_id,
                    target,
                    floor,
                    "Custom calorie target is below the safety floor"
                );
            }
            (target, target - tdee.round(), CalorieSource::CustomTarget)
        }
        None => {
            let offset = config.weight_goal_adjustments.offset(weight_goal);
            let goal = (tdee + offset).round().max(floor);
            (goal, goal - tdee.round(), CalorieSource::Computed)
        }
    };

    let macros = calculate_macro_targets(
        calorie_goal,
        weight_kg,
        direction,
        activity_level,
        &config.macronutrients,
    );
    let micros = calculate_micronutrient_goals(calorie_goal, macros.fat_g);

    let goals = NutritionGoals {
        bmr: Some(round_to_u32(bmr)),
        tdee: Some(round_to_u32(tdee)),
        calorie_goal: round_to_u32(calorie_goal),
        protein_goal: round_to_u32(macros.protein_g),
        carb_goal: round_to_u32(macros.carbs_g),
        fat_goal: round_to_u32(macros.fat_g),
        fiber_goal: micros.fiber_g,
        sugar_goal: micros.sugar_g,
        saturated_fat_goal: micros.saturated_fat_g,
        sodium_goal: micros.sodium_mg,
        potassium_goal: micros.potassium_mg,
        cholesterol_goal: micros.cholesterol_mg,
        weight_goal_adjustment: adjustment.round() as i32,
        calorie_source,
    };

    info!(
        user_id = ?profile.user_id,
        formula = %config.bmr.formula,
        activity_level = %activity_level,
        weight_goal = %weight_goal,
        bmr = ?goals.bmr,
        tdee = ?goals.tdee,
        calorie_goal = goals.calorie_goal,
        source = ?goals.calorie_source,
        "Nutrition goals calculated"
    );

    Ok(Some(goals))
}
