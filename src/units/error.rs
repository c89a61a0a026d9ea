// ABOUTME: Error type for unit conversion and nutrition recalculation
// ABOUTME: Unresolvable units, invalid amounts, and invalid nutrient values, convertible into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful_core::errors::AppError;
use serde_json::json;
use thiserror::Error;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No gram equivalent exists for the unit and food
    #[error("cannot convert '{unit}' for {food}")]
    UnresolvableUnit {
        /// Unit as given by the caller
        unit: String,
        /// Food name as given by the caller (may be empty)
        food: String,
    },

    /// Quantity is negative or not finite
    #[error("invalid amount {0} (must be a finite, non-negative number)")]
    InvalidAmount(f64),

    /// Base serving quantity cannot be scaled from
    #[error("invalid base quantity {0} (must be greater than zero)")]
    InvalidBaseQuantity(f64),

    /// Per-serving gram override is not a positive finite number
    #[error("invalid grams override {0} (must be greater than zero)")]
    InvalidGramsOverride(f64),

    /// A nutrient value is negative or not finite
    #[error("invalid value {value} for nutrient '{field}'")]
    InvalidNutrient {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

impl From<ConversionError> for AppError {
    fn from(error: ConversionError) -> Self {
        let message = error.to_string();
        let converted = match &error {
            ConversionError::UnresolvableUnit { unit, food } => Self::unsupported_unit(message)
                .with_details(json!({ "unit": unit, "food": food })),
            ConversionError::InvalidNutrient { field, value } => Self::invalid_input(message)
                .with_details(json!({ "field": field, "value": value })),
            ConversionError::InvalidAmount(value)
            | ConversionError::InvalidBaseQuantity(value)
            | ConversionError::InvalidGramsOverride(value) => {
                Self::invalid_input(message).with_details(json!({ "value": value }))
            }
        };
        converted.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plateful_core::errors::ErrorCode;

    #[test]
    fn test_unresolvable_unit_maps_to_unsupported_unit() {
        let error: AppError = ConversionError::UnresolvableUnit {
            unit: "slice".into(),
            food: "Orange Juice".into(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::UnsupportedUnit);
        assert_eq!(error.details["unit"], "slice");
        assert_eq!(error.message, "cannot convert 'slice' for Orange Juice");
    }

    #[test]
    fn test_invalid_nutrient_maps_to_invalid_input() {
        let error: AppError = ConversionError::InvalidNutrient {
            field: "sodium",
            value: -1.0,
        }
        .into();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details["field"], "sodium");
    }
}
