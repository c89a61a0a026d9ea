// ABOUTME: Rescales a nutrition record from one serving basis to another
// ABOUTME: One factor applied uniformly to every present nutrient; absent nutrients stay absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful_core::models::{NutritionRecord, ServingBasis};
use tracing::debug;

use crate::units::{convert_food_unit, normalize_unit, ConversionError};

/// Reject records carrying negative or non-finite nutrient values
///
/// # Errors
///
/// Returns `ConversionError::InvalidNutrient` naming the first bad field.
pub fn validate_record(record: &NutritionRecord) -> Result<(), ConversionError> {
    match record.first_invalid_field() {
        Some((field, value)) => Err(ConversionError::InvalidNutrient { field, value }),
        None => Ok(()),
    }
}

/// Factor that turns values reported at `base` into values at `target`
///
/// Two servings in the same unit scale by quantity alone, so the unit does not
/// need a gram equivalent. Otherwise the target quantity is converted into the
/// base unit first: `factor = convert(target -> base unit) / base.quantity`.
///
/// # Errors
///
/// Returns `ConversionError::InvalidBaseQuantity` when the base quantity is not
/// a positive finite number, `ConversionError::InvalidAmount` for a negative or
/// non-finite target quantity or an overflowing factor, and
/// `ConversionError::UnresolvableUnit` when the
/// units cannot be related through grams.
pub fn scaling_factor(
    base: &ServingBasis,
    target: &ServingBasis,
    food_name: &str,
    grams_override: Option<f64>,
) -> Result<f64, ConversionError> {
    if !(base.quantity.is_finite() && base.quantity > 0.0) {
        return Err(ConversionError::InvalidBaseQuantity(base.quantity));
    }
    if !target.quantity.is_finite() || target.quantity < 0.0 {
        return Err(ConversionError::InvalidAmount(target.quantity));
    }

    let target_in_base_unit = if normalize_unit(&base.unit) == normalize_unit(&target.unit) {
        target.quantity
    } else {
        convert_food_unit(
            target.quantity,
            &target.unit,
            &base.unit,
            food_name,
            grams_override,
        )?
    };

    let factor = target_in_base_unit / base.quantity;
    if !factor.is_finite() {
        return Err(ConversionError::InvalidAmount(target.quantity));
    }
    Ok(factor)
}

/// Recalculate nutrition for a new serving
///
/// `base` holds the values reported at `base_serving`; the result holds the
/// values at `new_serving`. Every present nutrient is multiplied by the same
/// factor and nothing is rounded, so nutrient ratios are preserved. Zero stays
/// zero and `None` stays `None`. When the two servings are the same the input
/// is returned unchanged.
///
/// # Errors
///
/// Returns `ConversionError::InvalidNutrient` if `base` holds a negative or
/// non-finite value (including `-1` "unknown" sentinels), and the errors of
/// [`scaling_factor`] otherwise.
///
/// # Examples
///
/// ```rust
/// use plateful::nutrition::recalculate_nutrition;
/// use plateful_core::models::{NutritionRecord, ServingBasis};
///
/// let apple = NutritionRecord::new(95.0, 0.5, 25.0, 0.3);
/// let two = recalculate_nutrition(
///     &apple,
///     &ServingBasis::new(1.0, "medium"),
///     &ServingBasis::new(2.0, "medium"),
///     "Apple",
///     None,
/// )
/// .unwrap();
/// assert_eq!(two.calories, 190.0);
/// ```
pub fn recalculate_nutrition(
    base: &NutritionRecord,
    base_serving: &ServingBasis,
    new_serving: &ServingBasis,
    food_name: &str,
    grams_override: Option<f64>,
) -> Result<NutritionRecord, ConversionError> {
    validate_record(base)?;
    let factor = scaling_factor(base_serving, new_serving, food_name, grams_override)?;

    if factor == 1.0 {
        return Ok(base.clone());
    }

    debug!(
        food = food_name,
        base_quantity = base_serving.quantity,
        base_unit = %base_serving.unit,
        new_quantity = new_serving.quantity,
        new_unit = %new_serving.unit,
        factor,
        "Recalculated nutrition for new serving"
    );
    Ok(base.scaled(factor))
}
