// ABOUTME: Converts food quantities between units using grams as the common intermediate
// ABOUTME: Resolves each unit via serving override, food profile, category table, then weight units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use tracing::debug;

use super::catalog::{normalize_unit, FoodUnits};
use super::error::ConversionError;

/// Canonical key of the unit a grams override applies to
pub const SERVING_UNIT: &str = "serving";

/// Grams in one `unit` of `food_name`
///
/// Resolution order: `grams_override` (grams of one serving, used only for
/// the `serving` unit), the food-specific profile, the category table, and
/// finally the universal weight units (g, kg, oz, lb).
///
/// # Errors
///
/// Returns `ConversionError::InvalidGramsOverride` when the override is not a
/// positive finite number and `ConversionError::UnresolvableUnit` when no gram
/// equivalent exists.
pub fn grams_per_unit(
    unit: &str,
    food_name: &str,
    grams_override: Option<f64>,
) -> Result<f64, ConversionError> {
    resolve(&FoodUnits::for_food(food_name), unit, food_name, grams_override)
}

fn resolve(
    table: &FoodUnits,
    unit: &str,
    food_name: &str,
    grams_override: Option<f64>,
) -> Result<f64, ConversionError> {
    let key = normalize_unit(unit);
    let grams = match grams_override {
        Some(grams) if key == SERVING_UNIT => {
            if !(grams.is_finite() && grams > 0.0) {
                return Err(ConversionError::InvalidGramsOverride(grams));
            }
            Some(grams)
        }
        _ => table.grams_per_unit(&key),
    };
    grams.ok_or_else(|| ConversionError::UnresolvableUnit {
        unit: unit.to_owned(),
        food: food_name.to_owned(),
    })
}

/// Convert `quantity` of `from_unit` into `to_unit` for a food
///
/// Computes `quantity * grams(from_unit) / grams(to_unit)`. The result is not
/// rounded; round only for display so repeated conversions do not drift.
/// Converting between two spellings of the same unit returns `quantity`
/// unchanged once the unit is known to resolve.
///
/// # Errors
///
/// Returns `ConversionError::InvalidAmount` if `quantity` is negative or not
/// finite, and `ConversionError::UnresolvableUnit` if either unit has no gram
/// equivalent for the food.
///
/// # Examples
///
/// ```rust
/// use plateful::units::convert_food_unit;
///
/// let grams = convert_food_unit(2.0, "medium", "g", "Apple", None).unwrap();
/// assert_eq!(grams, 364.0);
///
/// assert!(convert_food_unit(1.0, "slice", "cup", "Orange Juice", None).is_err());
/// ```
pub fn convert_food_unit(
    quantity: f64,
    from_unit: &str,
    to_unit: &str,
    food_name: &str,
    grams_override: Option<f64>,
) -> Result<f64, ConversionError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(ConversionError::InvalidAmount(quantity));
    }

    let table = FoodUnits::for_food(food_name);
    let from_grams = resolve(&table, from_unit, food_name, grams_override)?;
    let to_grams = resolve(&table, to_unit, food_name, grams_override)?;

    if normalize_unit(from_unit) == normalize_unit(to_unit) {
        return Ok(quantity);
    }

    let converted = quantity * from_grams / to_grams;
    if !converted.is_finite() {
        return Err(ConversionError::InvalidAmount(quantity));
    }
    debug!(
        food = food_name,
        category = %table.category,
        quantity,
        from_unit,
        to_unit,
        from_grams,
        to_grams,
        converted,
        "Converted food quantity"
    );
    Ok(converted)
}
