// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeting writer
//!
//! This crate holds the greeting printed by the `hello` binary and the
//! operation that writes it.
//!
//! # Quick Start
//!
//! ```
//! use hello::greet;
//!
//! let mut out = Vec::new();
//! greet(&mut out).expect("greeting");
//! assert_eq!(out, b"Hello, World!\n");
//! ```

use std::io::{Result, Write};

/// The greeting, without a line terminator.
pub const GREETING: &str = "Hello, World!";

/// Writes [GREETING] followed by a single `\n` to `out` and flushes it.
///
/// Errors reported by the writer are returned as-is.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()
}
