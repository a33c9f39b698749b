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

//! JSON conversion commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Conversion between mapping tables and their JSON view.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert a mapping table to JSON
    ToJson {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert JSON to a mapping table
    FromJson {
        /// Input JSON file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl ConversionCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                pretty,
            } => commands::to_json(&file, output.as_deref(), pretty),
            ConversionCommands::FromJson { file, output } => {
                commands::from_json(&file, output.as_deref())
            }
        }
    }
}
