// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Quiet logging setup and reference profiles and records used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `plateful`

use chrono::NaiveDate;
use plateful::models::{ActivityLevel, Gender, NutritionRecord, UserProfile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 70 kg, 175 cm, 30 year old moderately active male with no weight goal
pub fn reference_profile() -> UserProfile {
    UserProfile {
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age: Some(30),
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::Moderate),
        ..UserProfile::default()
    }
}

/// Fixed date used wherever age is derived from a date of birth
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// One medium apple
pub fn medium_apple() -> NutritionRecord {
    NutritionRecord {
        fiber: Some(4.4),
        sugar: Some(19.0),
        sodium: Some(2.0),
        potassium: Some(195.0),
        ..NutritionRecord::new(95.0, 0.5, 25.0, 0.3)
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
