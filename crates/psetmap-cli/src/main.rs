// psetmap - Property set mapping tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! psetmap command line interface

use clap::Parser;
use psetmap_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// psetmap - property set mapping table toolkit
///
/// Validate, format, inspect, convert and edit tab-delimited property set
/// mapping tables.
///
/// # Examples
///
/// ```bash
/// # Validate a table
/// psetmap validate ParameterSets.txt
///
/// # Add a property to the first set, writing back to the file
/// psetmap add-prop ParameterSets.txt 0 Thickness Length Width --in-place
///
/// # Convert to JSON
/// psetmap to-json ParameterSets.txt --pretty
/// ```
#[derive(Parser)]
#[command(name = "psetmap")]
#[command(author, version, about = "psetmap - property set mapping table toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
