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

//! Edit commands, one per document mutation.
//!
//! Indices are zero-based and match the `[n]` labels printed by `inspect`.
//! The edited table goes to stdout unless `--output` or `--in-place` is given.

use crate::commands::{self, Output};
use crate::error::CliError;
use clap::{Args, Subcommand};

/// Output destination shared by every edit command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file path (defaults to stdout)
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<String>,

    /// Overwrite the input file
    #[arg(short = 'i', long)]
    pub in_place: bool,
}

impl From<OutputArgs> for Output {
    fn from(args: OutputArgs) -> Self {
        Output {
            path: args.output,
            in_place: args.in_place,
        }
    }
}

#[derive(Subcommand)]
pub enum EditCommands {
    /// Append a property set
    AddSet {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set name
        #[arg(value_name = "NAME")]
        name: String,

        /// Kind: I/Instance or T/Type
        #[arg(short, long, default_value = "I")]
        kind: String,

        /// Comma-separated applicable classes
        #[arg(short, long)]
        classes: String,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Remove a property set
    RemoveSet {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set index
        #[arg(value_name = "INDEX")]
        index: usize,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Change fields of a property set
    EditSet {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set index
        #[arg(value_name = "INDEX")]
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New kind: I/Instance or T/Type
        #[arg(short, long)]
        kind: Option<String>,

        /// New comma-separated applicable classes
        #[arg(short, long)]
        classes: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Append a property to a property set
    AddProp {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set index
        #[arg(value_name = "SET")]
        set: usize,

        /// Source attribute name
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Data type name
        #[arg(value_name = "TYPE")]
        data_type: String,

        /// Target attribute name
        #[arg(value_name = "TARGET")]
        target: String,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Remove a property from a property set
    RemoveProp {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set index
        #[arg(value_name = "SET")]
        set: usize,

        /// Property index within the set
        #[arg(value_name = "PROP")]
        prop: usize,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Change fields of a property
    EditProp {
        #[arg(value_name = "FILE")]
        file: String,

        /// Property set index
        #[arg(value_name = "SET")]
        set: usize,

        /// Property index within the set
        #[arg(value_name = "PROP")]
        prop: usize,

        /// New source attribute name
        #[arg(long)]
        source: Option<String>,

        /// New data type name
        #[arg(long)]
        data_type: Option<String>,

        /// New target attribute name
        #[arg(long)]
        target: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
}

impl EditCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            EditCommands::AddSet {
                file,
                name,
                kind,
                classes,
                out,
            } => commands::add_set(&file, &name, &kind, &classes, &out.into()),
            EditCommands::RemoveSet { file, index, out } => {
                commands::remove_set(&file, index, &out.into())
            }
            EditCommands::EditSet {
                file,
                index,
                name,
                kind,
                classes,
                out,
            } => commands::edit_set(&file, index, name, kind.as_deref(), classes, &out.into()),
            EditCommands::AddProp {
                file,
                set,
                source,
                data_type,
                target,
                out,
            } => commands::add_property(&file, set, &source, &data_type, &target, &out.into()),
            EditCommands::RemoveProp {
                file,
                set,
                prop,
                out,
            } => commands::remove_property(&file, set, prop, &out.into()),
            EditCommands::EditProp {
                file,
                set,
                prop,
                source,
                data_type,
                target,
                out,
            } => commands::edit_property(
                &file,
                set,
                prop,
                source,
                data_type.as_deref(),
                target,
                &out.into(),
            ),
        }
    }
}
