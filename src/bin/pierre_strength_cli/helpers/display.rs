// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-strength
// ABOUTME: Writes pretty JSON to stdout; logs stay on stderr

use pierre_strength::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
