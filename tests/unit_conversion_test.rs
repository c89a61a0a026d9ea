// ABOUTME: Integration tests for unit tables, unit validation and quantity conversion
// ABOUTME: Covers category inference, food profiles, round trips, serving overrides and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use plateful::errors::{AppError, ErrorCode};
use plateful::units::{
    convert_food_unit, grams_per_unit, infer_food_category, is_valid_unit_for_food,
    normalize_unit, suggested_units_for_food, ConversionError, FoodCategory, FoodUnits,
};

mod common;

use common::assert_close;

// ============================================================================
// UNIT TABLES AND VALIDATION
// ============================================================================

#[test]
fn test_orange_juice_has_no_slice_but_has_cup() {
    common::init_test_logging();

    assert!(!is_valid_unit_for_food("Orange Juice", "slice"));
    assert!(is_valid_unit_for_food("Orange Juice", "cup"));
    assert!(is_valid_unit_for_food("Orange Juice", "fl oz"));
    assert!(is_valid_unit_for_food("orange", "slice"));
}

#[test]
fn test_validation_is_case_and_plural_insensitive() {
    common::init_test_logging();

    assert!(is_valid_unit_for_food("APPLE", "Medium"));
    assert!(is_valid_unit_for_food("apple", "Slices"));
    assert!(is_valid_unit_for_food("Milk", "Tablespoons"));
}

#[test]
fn test_empty_or_unknown_unit_is_invalid() {
    common::init_test_logging();

    assert!(!is_valid_unit_for_food("Apple", ""));
    assert!(!is_valid_unit_for_food("Apple", "   "));
    assert!(!is_valid_unit_for_food("Apple", "handful"));
}

#[test]
fn test_unknown_food_gets_generic_units() {
    common::init_test_logging();

    let table = FoodUnits::for_food("Grandma's Casserole");
    assert_eq!(table.category, FoodCategory::Generic);
    assert_eq!(table.profile, None);
    assert!(table.offers("serving"));
    assert!(table.offers("g"));
    assert!(!table.offers("cup"));
    assert_eq!(table.grams_per_unit("serving"), Some(100.0));
}

#[test]
fn test_suggested_units_start_with_serving() {
    common::init_test_logging();

    for food in ["Apple", "Orange Juice", "Cheddar Cheese", "White Rice", ""] {
        let units = suggested_units_for_food(food);
        assert!(!units.is_empty(), "{food} should offer units");
        assert_eq!(units[0].key, "serving", "{food} should lead with serving");
        assert!(units.iter().all(|unit| unit.is_convertible()));
    }
}

#[test]
fn test_category_inference_uses_head_noun() {
    common::init_test_logging();

    assert_eq!(infer_food_category("Chocolate Milk"), FoodCategory::Liquid);
    assert_eq!(infer_food_category("Chocolate Chip Cookies"), FoodCategory::PackagedSnack);
    assert_eq!(infer_food_category("Banana Bread"), FoodCategory::Bakery);
    assert_eq!(infer_food_category("Chicken Breast, grilled"), FoodCategory::Meat);
    assert_eq!(infer_food_category("Baby Carrots"), FoodCategory::Vegetable);
    assert_eq!(infer_food_category("Greek Yogurt"), FoodCategory::Dairy);
}

#[test]
fn test_two_word_names_override_head_noun() {
    common::init_test_logging();

    assert_eq!(infer_food_category("Peanut Butter"), FoodCategory::Spread);
    assert_eq!(infer_food_category("Crunchy Almond Butter"), FoodCategory::Spread);
    assert_eq!(infer_food_category("Fruit Salad"), FoodCategory::Produce);
    assert_eq!(infer_food_category("Tuna Salad"), FoodCategory::Meat);
    assert_eq!(infer_food_category("Rice Cakes"), FoodCategory::PackagedSnack);
    assert_eq!(infer_food_category("Buttermilk"), FoodCategory::Liquid);
    // Head noun alone still decides when no two-word name applies
    assert_eq!(infer_food_category("Garden Salad"), FoodCategory::Vegetable);
    assert_eq!(infer_food_category("Butter"), FoodCategory::Dairy);

    assert!(is_valid_unit_for_food("Peanut Butter", "tbsp"));
    assert!(!is_valid_unit_for_food("Peanut Butter", "slice"));
    let grams = convert_food_unit(2.0, "tbsp", "g", "Peanut Butter", None).unwrap();
    assert_close(grams, 32.0, 1e-12);
}

#[test]
fn test_normalize_unit_is_idempotent() {
    for raw in [
        "Cups",
        "fl. oz",
        "Tablespoons",
        "kilograms",
        "pcs",
        "handful",
        "Handfuls",
        "glasses",
        "patties",
    ] {
        let once = normalize_unit(raw);
        assert_eq!(normalize_unit(&once), once);
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

#[test]
fn test_same_unit_returns_quantity_unchanged() {
    common::init_test_logging();

    assert_eq!(convert_food_unit(3.7, "cup", "cup", "Milk", None).unwrap(), 3.7);
    assert_eq!(convert_food_unit(2.0, "Cups", "cup", "Milk", None).unwrap(), 2.0);
    assert_eq!(convert_food_unit(0.0, "g", "g", "", None).unwrap(), 0.0);
}

#[test]
fn test_medium_apple_to_grams() {
    common::init_test_logging();

    assert_eq!(convert_food_unit(2.0, "medium", "g", "Apple", None).unwrap(), 364.0);
    assert_eq!(convert_food_unit(182.0, "g", "medium", "Apple", None).unwrap(), 1.0);
}

#[test]
fn test_apple_cup_differs_from_medium() {
    common::init_test_logging();

    let medium_in_cups = convert_food_unit(1.0, "medium", "cup", "Apple", None).unwrap();
    assert_close(medium_in_cups, 182.0 / 125.0, 1e-12);
}

#[test]
fn test_orange_juice_cup_to_ml() {
    common::init_test_logging();

    let ml = convert_food_unit(1.0, "cup", "ml", "Orange Juice", None).unwrap();
    assert_close(ml, 240.0, 1e-9);
    let fl_oz = convert_food_unit(240.0, "ml", "fl oz", "Orange Juice", None).unwrap();
    assert_close(fl_oz, 240.0 / 29.5735, 1e-9);
}

#[test]
fn test_milk_is_denser_than_water() {
    common::init_test_logging();

    let milk_grams = convert_food_unit(1.0, "l", "g", "Milk", None).unwrap();
    let juice_grams = convert_food_unit(1.0, "l", "g", "Orange Juice", None).unwrap();
    assert_close(milk_grams, 1030.0, 1e-9);
    assert_close(juice_grams, 1000.0, 1e-9);
}

#[test]
fn test_round_trip_recovers_quantity() {
    common::init_test_logging();

    let cases = [
        ("Apple", "medium", "oz"),
        ("Banana", "large", "slice"),
        ("Orange Juice", "cup", "tbsp"),
        ("White Rice", "cup", "g"),
        ("Cheddar Cheese", "slice", "oz"),
    ];
    for (food, from, to) in cases {
        let there = convert_food_unit(1.75, from, to, food, None).unwrap();
        let back = convert_food_unit(there, to, from, food, None).unwrap();
        assert_close(back, 1.75, 1e-9);
    }
}

#[test]
fn test_weight_units_work_for_any_food() {
    common::init_test_logging();

    let grams = convert_food_unit(1.0, "lb", "g", "Mystery Meal", None).unwrap();
    assert_close(grams, 453.592_37, 1e-9);
    let kg = convert_food_unit(500.0, "g", "kg", "Orange Juice", None).unwrap();
    assert_close(kg, 0.5, 1e-12);
}

#[test]
fn test_grams_override_applies_to_serving() {
    common::init_test_logging();

    let grams = convert_food_unit(2.0, "serving", "g", "Protein Bar", Some(60.0)).unwrap();
    assert_close(grams, 120.0, 1e-12);
    // Other units keep their table values
    let pieces = convert_food_unit(1.0, "package", "g", "Protein Bar", Some(60.0)).unwrap();
    assert_close(pieces, 45.0, 1e-12);
}

#[test]
fn test_unresolvable_unit_is_an_error() {
    common::init_test_logging();

    let err = convert_food_unit(1.0, "slice", "cup", "Orange Juice", None).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnresolvableUnit {
            unit: "slice".to_owned(),
            food: "Orange Juice".to_owned(),
        }
    );

    let err = convert_food_unit(1.0, "g", "handful", "Apple", None).unwrap_err();
    assert!(matches!(err, ConversionError::UnresolvableUnit { .. }));
}

#[test]
fn test_invalid_amounts_rejected() {
    common::init_test_logging();

    assert!(matches!(
        convert_food_unit(-0.5, "cup", "g", "Milk", None),
        Err(ConversionError::InvalidAmount(_))
    ));
    assert!(matches!(
        convert_food_unit(f64::INFINITY, "cup", "g", "Milk", None),
        Err(ConversionError::InvalidAmount(_))
    ));
    assert!(matches!(
        grams_per_unit("serving", "Milk", Some(-10.0)),
        Err(ConversionError::InvalidGramsOverride(_))
    ));
}

#[test]
fn test_conversion_errors_map_to_app_errors() {
    let unresolvable: AppError = ConversionError::UnresolvableUnit {
        unit: "slice".to_owned(),
        food: "Orange Juice".to_owned(),
    }
    .into();
    assert_eq!(unresolvable.code, ErrorCode::UnsupportedUnit);
    assert_eq!(unresolvable.details["unit"], "slice");

    let amount: AppError = ConversionError::InvalidAmount(-1.0).into();
    assert_eq!(amount.code, ErrorCode::InvalidInput);
}
