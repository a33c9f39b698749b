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

//! Core commands for validation, formatting and inspection.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core commands operating on a single mapping table.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate a mapping table
    ///
    /// Parses the table and reports set and property counts. Lines the parser
    /// skips are listed as warnings; in strict mode they fail validation.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Strict mode (fail on any dropped line)
        #[arg(short, long)]
        strict: bool,
    },

    /// Rewrite a mapping table in canonical form
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,

        /// Write CRLF line endings
        #[arg(long)]
        crlf: bool,

        /// End the file with a line break
        #[arg(long)]
        trailing_newline: bool,
    },

    /// Print the parsed structure as a tree
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show counts by kind and data type
        #[arg(long)]
        stats: bool,
    },

    /// List the known data types
    Types,
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file, strict } => commands::validate(&file, strict),
            CoreCommands::Format {
                file,
                output,
                check,
                crlf,
                trailing_newline,
            } => commands::format(&file, output.as_deref(), check, crlf, trailing_newline),
            CoreCommands::Inspect { file, stats } => commands::inspect(&file, stats),
            CoreCommands::Types => {
                commands::list_types();
                Ok(())
            }
        }
    }
}
