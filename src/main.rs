// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

/// Prints a greeting.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    /// ignored
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    _args: Vec<OsString>,
}

fn main() -> Result<()> {
    let _ = App::parse();

    hello::greet(&mut io::stdout().lock())?;

    Ok(())
}
