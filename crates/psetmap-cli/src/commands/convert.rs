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

//! Conversion commands - JSON view of a mapping table

use super::{load_document, read_text, write_output};
use crate::error::CliError;
use psetmap_core::json;

/// Convert a mapping table to JSON.
pub fn to_json(file: &str, output: Option<&str>, pretty: bool) -> Result<(), CliError> {
    let doc = load_document(file)?;
    let mut text = json::to_json(&doc, pretty).map_err(|e| CliError::JsonFormat {
        message: e.message,
    })?;
    if output.is_none() {
        text.push('\n');
    }
    write_output(&text, output)
}

/// Convert JSON back to a mapping table.
pub fn from_json(file: &str, output: Option<&str>) -> Result<(), CliError> {
    let input = read_text(file)?;
    let doc = json::from_json(&input).map_err(|e| CliError::JsonFormat {
        message: e.message,
    })?;
    write_output(&doc.to_text(), output)
}
