// ABOUTME: Typed nutrition record and serving basis models
// ABOUTME: Fixed nutrient fields with explicit optionals, uniform scaling and summation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use serde::{Deserialize, Serialize};

/// Number of nutrient fields carried by a [`NutritionRecord`]
pub const NUTRIENT_FIELD_COUNT: usize = 17;

/// Nutrition facts reported at a particular [`ServingBasis`]
///
/// The four macro fields are always present. Every other nutrient is
/// optional: `None` means the source did not report it, which is different
/// from an explicit `0.0`. Present values must be finite and non-negative;
/// see [`NutritionRecord::first_invalid_field`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub proteins: f64,
    /// Total carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fats: f64,
    /// Dietary fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Total sugars (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Saturated fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    /// Polyunsaturated fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyunsaturated_fat: Option<f64>,
    /// Monounsaturated fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monounsaturated_fat: Option<f64>,
    /// Trans fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,
    /// Cholesterol (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    /// Sodium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Potassium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    /// Vitamin A (mcg RAE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>,
    /// Vitamin C (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    /// Calcium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Iron (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
}

impl NutritionRecord {
    /// Create a record with the four macro fields and no optional nutrients
    #[must_use]
    pub const fn new(calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fats,
            fiber: None,
            sugar: None,
            saturated_fat: None,
            polyunsaturated_fat: None,
            monounsaturated_fat: None,
            trans_fat: None,
            cholesterol: None,
            sodium: None,
            potassium: None,
            vitamin_a: None,
            vitamin_c: None,
            calcium: None,
            iron: None,
        }
    }

    /// All nutrient fields with their names, in declaration order
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, Option<f64>); NUTRIENT_FIELD_COUNT] {
        [
            ("calories", Some(self.calories)),
            ("proteins", Some(self.proteins)),
            ("carbs", Some(self.carbs)),
            ("fats", Some(self.fats)),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("saturated_fat", self.saturated_fat),
            ("polyunsaturated_fat", self.polyunsaturated_fat),
            ("monounsaturated_fat", self.monounsaturated_fat),
            ("trans_fat", self.trans_fat),
            ("cholesterol", self.cholesterol),
            ("sodium", self.sodium),
            ("potassium", self.potassium),
            ("vitamin_a", self.vitamin_a),
            ("vitamin_c", self.vitamin_c),
            ("calcium", self.calcium),
            ("iron", self.iron),
        ]
    }

    /// First field holding a negative or non-finite value, if any
    ///
    /// Sentinels such as `-1` for "unknown" are reported here rather than
    /// silently reinterpreted.
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<(&'static str, f64)> {
        self.fields().into_iter().find_map(|(name, value)| {
            value
                .filter(|v| !v.is_finite() || *v < 0.0)
                .map(|v| (name, v))
        })
    }

    /// Apply `f` to every present field; absent fields stay absent
    #[must_use]
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            proteins: f(self.proteins),
            carbs: f(self.carbs),
            fats: f(self.fats),
            fiber: self.fiber.map(&f),
            sugar: self.sugar.map(&f),
            saturated_fat: self.saturated_fat.map(&f),
            polyunsaturated_fat: self.polyunsaturated_fat.map(&f),
            monounsaturated_fat: self.monounsaturated_fat.map(&f),
            trans_fat: self.trans_fat.map(&f),
            cholesterol: self.cholesterol.map(&f),
            sodium: self.sodium.map(&f),
            potassium: self.potassium.map(&f),
            vitamin_a: self.vitamin_a.map(&f),
            vitamin_c: self.vitamin_c.map(&f),
            calcium: self.calcium.map(&f),
            iron: self.iron.map(&f),
        }
    }

    /// Multiply every present field by the same factor
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.map_values(|value| value * factor)
    }

    /// Field-wise sum; an optional field is `None` only if absent on both sides
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
            fiber: sum_optional(self.fiber, other.fiber),
            sugar: sum_optional(self.sugar, other.sugar),
            saturated_fat: sum_optional(self.saturated_fat, other.saturated_fat),
            polyunsaturated_fat: sum_optional(self.polyunsaturated_fat, other.polyunsaturated_fat),
            monounsaturated_fat: sum_optional(self.monounsaturated_fat, other.monounsaturated_fat),
            trans_fat: sum_optional(self.trans_fat, other.trans_fat),
            cholesterol: sum_optional(self.cholesterol, other.cholesterol),
            sodium: sum_optional(self.sodium, other.sodium),
            potassium: sum_optional(self.potassium, other.potassium),
            vitamin_a: sum_optional(self.vitamin_a, other.vitamin_a),
            vitamin_c: sum_optional(self.vitamin_c, other.vitamin_c),
            calcium: sum_optional(self.calcium, other.calcium),
            iron: sum_optional(self.iron, other.iron),
        }
    }

    /// Copy rounded for display: kcal and milligrams to whole numbers, grams to one decimal
    ///
    /// Never feed the result back into further scaling.
    #[must_use]
    pub fn rounded_for_display(&self) -> Self {
        let grams = |v: f64| (v * 10.0).round() / 10.0;
        let whole = f64::round;
        Self {
            calories: whole(self.calories),
            proteins: grams(self.proteins),
            carbs: grams(self.carbs),
            fats: grams(self.fats),
            fiber: self.fiber.map(grams),
            sugar: self.sugar.map(grams),
            saturated_fat: self.saturated_fat.map(grams),
            polyunsaturated_fat: self.polyunsaturated_fat.map(grams),
            monounsaturated_fat: self.monounsaturated_fat.map(grams),
            trans_fat: self.trans_fat.map(grams),
            cholesterol: self.cholesterol.map(whole),
            sodium: self.sodium.map(whole),
            potassium: self.potassium.map(whole),
            vitamin_a: self.vitamin_a.map(whole),
            vitamin_c: self.vitamin_c.map(whole),
            calcium: self.calcium.map(whole),
            iron: self.iron.map(grams),
        }
    }
}

fn sum_optional(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x + y),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// The `(quantity, unit)` pair a nutrition record is reported at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingBasis {
    /// Number of units
    pub quantity: f64,
    /// Unit key or alias ("serving", "g", "medium", ...)
    pub unit: String,
}

impl ServingBasis {
    /// Create a serving basis
    pub fn new(quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_preserves_absent_fields() {
        let record = NutritionRecord {
            fiber: Some(4.4),
            ..NutritionRecord::new(95.0, 0.5, 25.0, 0.3)
        };
        let doubled = record.scaled(2.0);
        assert_eq!(doubled.calories, 190.0);
        assert_eq!(doubled.fiber, Some(8.8));
        assert_eq!(doubled.sugar, None);
    }

    #[test]
    fn test_first_invalid_field_flags_sentinel() {
        let record = NutritionRecord {
            sodium: Some(-1.0),
            ..NutritionRecord::new(100.0, 1.0, 2.0, 3.0)
        };
        assert_eq!(record.first_invalid_field(), Some(("sodium", -1.0)));
        assert_eq!(NutritionRecord::new(0.0, 0.0, 0.0, 0.0).first_invalid_field(), None);
    }

    #[test]
    fn test_first_invalid_field_flags_nan() {
        let record = NutritionRecord::new(f64::NAN, 1.0, 2.0, 3.0);
        assert_eq!(record.first_invalid_field().map(|(name, _)| name), Some("calories"));
    }

    #[test]
    fn test_combined_optional_semantics() {
        let a = NutritionRecord {
            fiber: Some(2.0),
            ..NutritionRecord::new(100.0, 1.0, 2.0, 3.0)
        };
        let b = NutritionRecord {
            sodium: Some(40.0),
            ..NutritionRecord::new(50.0, 1.0, 1.0, 1.0)
        };
        let total = a.combined(&b);
        assert_eq!(total.calories, 150.0);
        assert_eq!(total.fiber, Some(2.0));
        assert_eq!(total.sodium, Some(40.0));
        assert_eq!(total.sugar, None);
    }

    #[test]
    fn test_rounded_for_display() {
        let record = NutritionRecord {
            sodium: Some(12.6),
            ..NutritionRecord::new(189.6, 1.04, 49.96, 0.66)
        };
        let rounded = record.rounded_for_display();
        assert_eq!(rounded.calories, 190.0);
        assert_eq!(rounded.proteins, 1.0);
        assert_eq!(rounded.carbs, 50.0);
        assert_eq!(rounded.fats, 0.7);
        assert_eq!(rounded.sodium, Some(13.0));
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        let record: NutritionRecord =
            serde_json::from_str(r#"{"calories":95,"proteins":0.5,"carbs":25,"fats":0.3}"#)
                .unwrap();
        assert_eq!(record, NutritionRecord::new(95.0, 0.5, 25.0, 0.3));
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("fiber"));
    }
}
