// ABOUTME: Decides whether a unit makes sense for a food before a conversion is attempted
// ABOUTME: Wraps the catalog's category inference and per-food unit tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful_core::models::FoodUnit;
use tracing::debug;

use super::catalog::{normalize_unit, FoodUnits};

/// Whether `unit` is one of the units suggested for `food_name`
///
/// The unit is normalized first, so "Cups" and "cup" agree. An empty unit is
/// never valid. An empty or unrecognized food name falls back to the generic
/// set (`serving`, `g`, `oz`).
///
/// A `false` result is not an error: the caller keeps the previous unit and
/// tells the user the unit does not apply to the food.
#[must_use]
pub fn is_valid_unit_for_food(food_name: &str, unit: &str) -> bool {
    let key = normalize_unit(unit);
    if key.is_empty() {
        return false;
    }
    let table = FoodUnits::for_food(food_name);
    let valid = table.offers(&key);
    if !valid {
        debug!(
            food = food_name,
            unit = %key,
            category = %table.category,
            "Unit rejected for food"
        );
    }
    valid
}

/// Units a picker should offer for `food_name`, most natural first
#[must_use]
pub fn suggested_units_for_food(food_name: &str) -> Vec<FoodUnit> {
    FoodUnits::for_food(food_name).units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_unit_is_invalid() {
        assert!(!is_valid_unit_for_food("Apple", ""));
        assert!(!is_valid_unit_for_food("Apple", "   "));
    }

    #[test]
    fn test_generic_set_is_always_valid() {
        for food in ["", "Mystery Casserole", "Apple", "Orange Juice", "Cheddar Cheese"] {
            for unit in ["serving", "g", "oz"] {
                assert!(is_valid_unit_for_food(food, unit), "{unit} for {food:?}");
            }
        }
    }

    #[test]
    fn test_suggested_units_for_generic_food() {
        let keys: Vec<_> = suggested_units_for_food("")
            .into_iter()
            .map(|unit| unit.key)
            .collect();
        assert_eq!(keys, vec!["serving", "g", "oz"]);
    }
}
