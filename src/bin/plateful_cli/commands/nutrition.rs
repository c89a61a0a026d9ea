// ABOUTME: Nutrition recalculation command for plateful-cli
// ABOUTME: Parses a JSON nutrition record and rescales it to a new serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful::errors::AppResult;
use plateful::models::{NutritionRecord, ServingBasis};
use plateful::nutrition::{recalculate_nutrition, scaling_factor};
use serde_json::{json, Value};

/// Base and target servings given on the command line
pub struct Servings {
    /// Quantity the nutrition record is reported at
    pub base_quantity: f64,
    /// Unit the nutrition record is reported at
    pub base_unit: String,
    /// Quantity to rescale to
    pub quantity: f64,
    /// Unit to rescale to
    pub unit: String,
}

/// Rescale a nutrition record
pub fn recalc(
    nutrition_json: &str,
    servings: Servings,
    food: &str,
    grams_override: Option<f64>,
    round: bool,
) -> AppResult<Value> {
    let base: NutritionRecord = serde_json::from_str(nutrition_json)?;
    let base_serving = ServingBasis::new(servings.base_quantity, servings.base_unit);
    let new_serving = ServingBasis::new(servings.quantity, servings.unit);

    let scaled = recalculate_nutrition(&base, &base_serving, &new_serving, food, grams_override)?;
    let factor = scaling_factor(&base_serving, &new_serving, food, grams_override)?;
    let nutrition = if round {
        scaled.rounded_for_display()
    } else {
        scaled
    };

    Ok(json!({
        "food": food,
        "serving": new_serving,
        "factor": factor,
        "nutrition": nutrition,
    }))
}
