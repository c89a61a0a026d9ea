// ABOUTME: Unit commands for plateful-cli
// ABOUTME: Shows unit tables, validates units and converts quantities for a food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful::errors::AppResult;
use plateful::units::{convert_food_unit, is_valid_unit_for_food, normalize_unit, FoodUnits};
use serde_json::{json, Value};

/// Category, matched profile and unit table for a food
pub fn units(food: &str) -> AppResult<Value> {
    Ok(serde_json::to_value(FoodUnits::for_food(food))?)
}

/// Whether a unit applies to a food
#[must_use]
pub fn validate(food: &str, unit: &str) -> Value {
    let table = FoodUnits::for_food(food);
    json!({
        "food": food,
        "unit": normalize_unit(unit),
        "category": table.category,
        "valid": is_valid_unit_for_food(food, unit),
    })
}

/// Convert a quantity between units
pub fn convert(
    quantity: f64,
    from: &str,
    to: &str,
    food: &str,
    grams_override: Option<f64>,
) -> AppResult<Value> {
    let converted = convert_food_unit(quantity, from, to, food, grams_override)?;
    Ok(json!({
        "food": food,
        "quantity": quantity,
        "from": from,
        "to": to,
        "result": converted,
    }))
}
