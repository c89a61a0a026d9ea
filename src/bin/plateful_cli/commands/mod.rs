// ABOUTME: Command modules for plateful-cli
// ABOUTME: Unit, nutrition and goal commands, each returning a JSON value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

pub mod goals;
pub mod nutrition;
pub mod units;
