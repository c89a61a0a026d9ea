// ABOUTME: User profile snapshot and nutrition goal models
// ABOUTME: Gender, activity level and weight goal enums with legacy alias parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when an enum string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    /// Enum being parsed
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Lowercase, trim, and fold spaces/hyphens/dots into underscores
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Sex used by the BMR equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Gender {
    /// Male (+5 Mifflin-St Jeor constant)
    Male,
    /// Female (-161 Mifflin-St Jeor constant)
    Female,
    /// Other; uses the female constants and calorie floor
    Other,
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            "other" | "non_binary" | "nonbinary" => Ok(Self::Other),
            _ => Err(ParseEnumError::new("gender", s)),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Habitual activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "extreme" | "athletic" => Ok(Self::VeryActive),
            _ => Err(ParseEnumError::new("activity level", s)),
        }
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Calorie deficit
    Lose,
    /// Calorie balance
    Maintain,
    /// Calorie surplus
    Gain,
}

/// Target rate and direction of weight change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum WeightGoal {
    /// Lose 1 kg per week
    #[serde(rename = "lose_1")]
    LoseOneKg,
    /// Lose 0.75 kg per week
    #[serde(rename = "lose_0_75")]
    LoseThreeQuarterKg,
    /// Lose 0.5 kg per week
    #[serde(rename = "lose_0_5")]
    LoseHalfKg,
    /// Lose 0.25 kg per week
    #[serde(rename = "lose_0_25")]
    LoseQuarterKg,
    /// Keep current weight
    #[default]
    #[serde(rename = "maintain")]
    Maintain,
    /// Gain 0.25 kg per week
    #[serde(rename = "gain_0_25")]
    GainQuarterKg,
    /// Gain 0.5 kg per week
    #[serde(rename = "gain_0_5")]
    GainHalfKg,
}

impl WeightGoal {
    /// All goals from fastest loss to fastest gain
    pub const ALL: [Self; 7] = [
        Self::LoseOneKg,
        Self::LoseThreeQuarterKg,
        Self::LoseHalfKg,
        Self::LoseQuarterKg,
        Self::Maintain,
        Self::GainQuarterKg,
        Self::GainHalfKg,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseOneKg => "lose_1",
            Self::LoseThreeQuarterKg => "lose_0_75",
            Self::LoseHalfKg => "lose_0_5",
            Self::LoseQuarterKg => "lose_0_25",
            Self::Maintain => "maintain",
            Self::GainQuarterKg => "gain_0_25",
            Self::GainHalfKg => "gain_0_5",
        }
    }

    /// Whether the goal is a deficit, balance or surplus
    #[must_use]
    pub const fn direction(&self) -> GoalDirection {
        match self {
            Self::LoseOneKg | Self::LoseThreeQuarterKg | Self::LoseHalfKg | Self::LoseQuarterKg => {
                GoalDirection::Lose
            }
            Self::Maintain => GoalDirection::Maintain,
            Self::GainQuarterKg | Self::GainHalfKg => GoalDirection::Gain,
        }
    }
}

impl Display for WeightGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightGoal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "lose_1" | "lose_extreme" => Ok(Self::LoseOneKg),
            "lose_0_75" | "lose_heavy" => Ok(Self::LoseThreeQuarterKg),
            "lose_0_5" | "lose_moderate" | "lose" => Ok(Self::LoseHalfKg),
            "lose_0_25" | "lose_light" => Ok(Self::LoseQuarterKg),
            "maintain" => Ok(Self::Maintain),
            "gain_0_25" | "gain_light" => Ok(Self::GainQuarterKg),
            "gain_0_5" | "gain_moderate" | "gain" => Ok(Self::GainHalfKg),
            _ => Err(ParseEnumError::new("weight goal", s)),
        }
    }
}

impl TryFrom<String> for WeightGoal {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Profile fields the goal calculator cannot work without
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Body weight
    Weight,
    /// Height
    Height,
    /// Age or date of birth
    Age,
    /// Gender
    Gender,
    /// Activity level
    ActivityLevel,
}

impl ProfileField {
    /// Wording for "please complete ..." prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::ActivityLevel => "activity level",
        }
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the profile attributes goal calculation consumes
///
/// Every field is optional because onboarding may be incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner of the profile, used for log correlation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Body weight (kg)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height (cm)
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Age (years); takes precedence over `date_of_birth`
    #[serde(default)]
    pub age: Option<u32>,
    /// Date of birth, used when `age` is absent
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Weight goal; absent means maintain
    #[serde(default)]
    pub weight_goal: Option<WeightGoal>,
    /// User-chosen daily calorie target overriding the computed one
    #[serde(default)]
    pub daily_calorie_target: Option<u32>,
}

impl UserProfile {
    /// Age in whole years on `today`, from `age` or else `date_of_birth`
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.age
            .or_else(|| self.date_of_birth.and_then(|dob| age_from_birth_date(dob, today)))
    }

    /// Fields that must be filled before goals can be computed
    ///
    /// Returned in prompt order; empty when the profile is complete.
    #[must_use]
    pub fn missing_goal_fields(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push(ProfileField::Weight);
        }
        if self.height_cm.is_none() {
            missing.push(ProfileField::Height);
        }
        if self.age.is_none() && self.date_of_birth.is_none() {
            missing.push(ProfileField::Age);
        }
        if self.gender.is_none() {
            missing.push(ProfileField::Gender);
        }
        if self.activity_level.is_none() {
            missing.push(ProfileField::ActivityLevel);
        }
        missing
    }
}

/// Completed years between `date_of_birth` and `today`; `None` for future births
#[must_use]
pub fn age_from_birth_date(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Where a goal set's calorie figure came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalorieSource {
    /// BMR x activity multiplier + weight-goal offset
    Computed,
    /// The profile's `daily_calorie_target`
    CustomTarget,
    /// Fixed fallback shown while the profile is incomplete
    Default,
}

/// Daily nutrition targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Basal metabolic rate (kcal/day); `None` for fallback goals
    pub bmr: Option<u32>,
    /// Total daily energy expenditure (kcal/day); `None` for fallback goals
    pub tdee: Option<u32>,
    /// Daily calorie target (kcal)
    pub calorie_goal: u32,
    /// Protein (g)
    pub protein_goal: u32,
    /// Carbohydrates (g)
    pub carb_goal: u32,
    /// Fat (g)
    pub fat_goal: u32,
    /// Fiber (g)
    pub fiber_goal: u32,
    /// Sugar limit (g)
    pub sugar_goal: u32,
    /// Saturated fat limit (g)
    pub saturated_fat_goal: u32,
    /// Sodium limit (mg)
    pub sodium_goal: u32,
    /// Potassium target (mg)
    pub potassium_goal: u32,
    /// Cholesterol limit (mg)
    pub cholesterol_goal: u32,
    /// Calorie goal minus rounded TDEE, after the floor or custom target is applied
    pub weight_goal_adjustment: i32,
    /// Origin of `calorie_goal`
    pub calorie_source: CalorieSource,
}

impl NutritionGoals {
    /// Whether these goals were derived from a profile (computed or custom target)
    #[must_use]
    pub const fn is_personalized(&self) -> bool {
        !matches!(self.calorie_source, CalorieSource::Default)
    }
}
