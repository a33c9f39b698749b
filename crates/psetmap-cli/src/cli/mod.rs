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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by category:
//!
//! - [`core`]: validate, format, inspect, types
//! - [`conversion`]: to-json, from-json
//! - [`edit`]: add/remove/edit for property sets and properties

mod conversion;
mod core;
mod edit;

use crate::error::CliError;
use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use core::CoreCommands;
pub use edit::{EditCommands, OutputArgs};

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (validate, format, inspect, types)
/// ├── Conversion (to-json, from-json)
/// └── Edit (add-set, remove-set, edit-set, add-prop, remove-prop, edit-prop)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use psetmap_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Flattened so every command appears at top level
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Conversion(ConversionCommands),

    #[command(flatten)]
    Edit(EditCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O, parsing, conversion or an edit operation fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Edit(cmd) => cmd.execute(),
        }
    }
}
