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

//! Format command - canonical re-serialization

use super::{load_document, read_file, write_document};
use crate::error::CliError;
use psetmap_core::{serialize, LineEnding, WriteConfig};

/// Re-serialize a mapping table.
///
/// Class lists lose surrounding whitespace, blank and dropped lines
/// disappear. With `check`, nothing is written and the command fails unless
/// the file is byte-identical to its canonical form.
pub fn format(
    file: &str,
    output: Option<&str>,
    check: bool,
    crlf: bool,
    trailing_newline: bool,
) -> Result<(), CliError> {
    let doc = load_document(file)?;

    if check {
        let original = read_file(file)?;
        if serialize(doc.property_sets()).as_bytes() != original.as_slice() {
            return Err(CliError::NotCanonical);
        }
        println!("File is in canonical form");
        return Ok(());
    }

    let line_ending = if crlf { LineEnding::CrLf } else { LineEnding::Lf };
    let config = WriteConfig::new()
        .with_line_ending(line_ending)
        .with_trailing_newline(trailing_newline);
    write_document(&doc, &config, output)
}
