// ABOUTME: Core types and constants for the Plateful nutrition engine
// ABOUTME: Foundation crate with error handling, nutrition/profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

#![deny(unsafe_code)]

//! # Plateful Core
//!
//! Foundation crate providing shared types and constants for the Plateful
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and unit measures
//! - **models**: Nutrition records, serving bases, user profiles and goals

/// Unified error handling system with standard error codes
pub mod errors;

/// Physical and nutritional constants organized by domain
pub mod constants;

/// Core data models (`NutritionRecord`, `UserProfile`, `NutritionGoals`, etc.)
pub mod models;
