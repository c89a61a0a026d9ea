// ABOUTME: Output formatting helpers for plateful-cli
// ABOUTME: Writes command results to stdout as compact or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

use plateful::errors::AppResult;
use serde_json::Value;

/// Print a command result as JSON on stdout
pub fn print_json(value: &Value, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
