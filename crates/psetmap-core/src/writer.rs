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

//! Mapping table writer.
//!
//! Output is the exact inverse of the parser over its accepted domain: one
//! header line per property set followed by one tab-indented line per
//! property, joined with single newlines and no trailing newline.

use crate::model::{Property, PropertySet};
use crate::parser::{FIELD_SEPARATOR, HEADER_MARKER};
use std::fmt::Write;

/// Initial buffer capacity per property line, used to size the output.
const ESTIMATED_LINE_BYTES: usize = 48;

/// Line terminator between output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Output configuration.
///
/// The default reproduces the canonical form: LF separators and no
/// trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteConfig {
    /// Separator written between lines.
    pub line_ending: LineEnding,
    /// Append one line ending after the last line of a non-empty table.
    pub trailing_newline: bool,
}

impl WriteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

/// Serialize property sets to canonical table text.
pub fn serialize(sets: &[PropertySet]) -> String {
    serialize_with_config(sets, &WriteConfig::default())
}

/// Serialize property sets with custom line handling.
pub fn serialize_with_config(sets: &[PropertySet], config: &WriteConfig) -> String {
    let line_count: usize = sets.iter().map(|s| 1 + s.properties.len()).sum();
    let mut out = String::with_capacity(line_count * ESTIMATED_LINE_BYTES);
    let eol = config.line_ending.as_str();

    let mut first = true;
    for pset in sets {
        if !first {
            out.push_str(eol);
        }
        first = false;
        write_header(&mut out, pset);

        for property in &pset.properties {
            out.push_str(eol);
            write_property(&mut out, property);
        }
    }

    if config.trailing_newline && !sets.is_empty() {
        out.push_str(eol);
    }

    out
}

/// Serialize to UTF-8 bytes.
pub fn to_bytes(sets: &[PropertySet]) -> Vec<u8> {
    serialize(sets).into_bytes()
}

fn write_header(out: &mut String, pset: &PropertySet) {
    // Writing to a String cannot fail
    let _ = write!(
        out,
        "{marker}{sep}{name}{sep}{kind}{sep}{classes}",
        marker = HEADER_MARKER,
        sep = FIELD_SEPARATOR,
        name = pset.name,
        kind = pset.kind.code(),
        classes = pset.classes_joined(),
    );
}

fn write_property(out: &mut String, property: &Property) {
    out.push(FIELD_SEPARATOR);
    out.push_str(&property.source_name);
    out.push(FIELD_SEPARATOR);
    out.push_str(property.data_type.as_str());
    out.push(FIELD_SEPARATOR);
    out.push_str(&property.target_name);
}
