// ABOUTME: Static food unit definition used by the unit catalog
// ABOUTME: Canonical key, display label, and grams per unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use serde::Serialize;

/// A unit a food can be measured in
///
/// Units are defined statically per food category and never mutated at
/// runtime. `grams_per_unit` is `None` only for entries that carry no
/// gram equivalent at all; units offered as convertible always have one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodUnit {
    /// Canonical unit id ("g", "cup", "medium", ...)
    pub key: &'static str,
    /// Display name
    pub label: &'static str,
    /// Weight of one unit in grams
    pub grams_per_unit: Option<f64>,
}

impl FoodUnit {
    /// Define a convertible unit
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, grams_per_unit: f64) -> Self {
        Self {
            key,
            label,
            grams_per_unit: Some(grams_per_unit),
        }
    }

    /// Whether the unit can take part in conversions
    #[must_use]
    pub const fn is_convertible(&self) -> bool {
        self.grams_per_unit.is_some()
    }
}
