// ABOUTME: Main library entry point for the Plateful nutrition engine
// ABOUTME: Unit conversion, nutrition recalculation, intake summaries and goal calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![deny(unsafe_code)]

//! # Plateful
//!
//! The deterministic core behind a nutrition-tracking app. Screens hand it a
//! food name, a nutrition record and a serving; it answers with validated
//! units, converted quantities, rescaled nutrition, and daily goals.
//!
//! ## Flow
//!
//! 1. [`units::is_valid_unit_for_food`] gates the unit picker
//! 2. [`units::convert_food_unit`] converts between units through grams
//! 3. [`nutrition::recalculate_nutrition`] rescales a record to the chosen serving
//! 4. [`goals::calculate_nutrition_goals_from_profile`] derives daily targets
//! 5. [`nutrition::GoalProgress`] compares a day's intake with those targets
//!
//! Every function is pure and synchronous. Unit tables are immutable statics
//! and configuration is passed in explicitly.
//!
//! ## Example Usage
//!
//! ```rust
//! use plateful::models::{NutritionRecord, ServingBasis};
//! use plateful::nutrition::recalculate_nutrition;
//! use plateful::units::is_valid_unit_for_food;
//!
//! assert!(!is_valid_unit_for_food("Orange Juice", "slice"));
//!
//! let apple = NutritionRecord::new(95.0, 0.5, 25.0, 0.3);
//! let two_apples = recalculate_nutrition(
//!     &apple,
//!     &ServingBasis::new(1.0, "medium"),
//!     &ServingBasis::new(2.0, "medium"),
//!     "Apple",
//!     None,
//! )?;
//! assert_eq!(two_apples.calories, 190.0);
//! # Ok::<(), plateful::units::ConversionError>(())
//! ```

/// Goal calculator configuration and environment overrides
pub mod config;

/// BMR, TDEE and macro goal calculation
pub mod goals;

/// Structured logging setup
pub mod logging;

/// Nutrition recalculation and daily intake summaries
pub mod nutrition;

/// Unit tables, validation and conversion
pub mod units;

pub use plateful_core::{constants, errors, models};
