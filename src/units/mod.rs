// ABOUTME: Food unit handling: static conversion tables, unit validation and quantity conversion
// ABOUTME: Grams are the common intermediate for every conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! # Units
//!
//! A screen collecting a serving calls [`is_valid_unit_for_food`] before
//! offering a unit, then [`convert_food_unit`] to move between units. Both
//! read the same immutable tables in [`catalog`].

/// Static conversion tables and category inference
pub mod catalog;
/// Quantity conversion through grams
pub mod conversion;
/// Conversion error type
pub mod error;
/// Unit applicability checks
pub mod validator;

pub use catalog::{infer_food_category, normalize_unit, FoodCategory, FoodUnits};
pub use conversion::{convert_food_unit, grams_per_unit, SERVING_UNIT};
pub use error::ConversionError;
pub use validator::{is_valid_unit_for_food, suggested_units_for_food};
