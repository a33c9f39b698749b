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

//! Command-line interface for property set mapping tables.
//!
//! # Commands
//!
//! ## Validation & Inspection
//!
//! - **validate**: Parse a table and report dropped lines
//! - **inspect**: Print sets and properties as a tree
//! - **types**: List the known data types
//!
//! ## Formatting
//!
//! - **format**: Rewrite a table in canonical form, or check that it already is
//!
//! ## Conversion
//!
//! - **to-json/from-json**: JSON view of a table
//!
//! ## Editing
//!
//! - **add-set/remove-set/edit-set**: property set operations
//! - **add-prop/remove-prop/edit-prop**: property operations
//!
//! # Examples
//!
//! ```no_run
//! use psetmap_cli::commands::{format, validate};
//!
//! # fn main() -> Result<(), psetmap_cli::error::CliError> {
//! validate("ParameterSets.txt", true)?;
//! format("ParameterSets.txt", Some("canonical.txt"), false, false, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `PSETMAP_MAX_FILE_SIZE`: maximum input size in bytes (default 64 MiB)
//! - `RUST_LOG`: tracing filter; `--verbose` switches the default to `debug`

pub mod cli;
pub mod commands;
pub mod error;
