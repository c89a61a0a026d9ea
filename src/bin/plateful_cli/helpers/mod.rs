// ABOUTME: Helper modules for plateful-cli
// ABOUTME: Output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

pub mod display;
