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

//! Parser for parameter mapping tables.
//!
//! The format is line oriented. A line starting with `PropertySet:` opens a
//! new property set; every following line with exactly three tab-separated
//! fields is one of its properties.
//!
//! ```text
//! PropertySet:\tWalls\tI\tIfcWall,IfcWallStandardCase
//! \tFireRating\tText\tFR_Rating
//! \tThickness\tLength\tWidth
//! ```
//!
//! # Permissive rows
//!
//! Body lines that do not split into exactly three fields, and any line
//! before the first header, are dropped without error.
//! [`parse_with_report`] lists every dropped line for callers that want to
//! surface them.
//!
//! A header with fewer than three fields is an error and fails the whole
//! parse; no partial result is returned.

use crate::error::{PsetError, PsetResult};
use crate::limits::Limits;
use crate::model::{split_classes, Property, PropertySet};
use crate::preprocess::{decode, is_blank_line, numbered_lines, strip_bom};
use crate::types::{DataType, PsetKind};
use std::fmt;
use tracing::debug;

/// Marker that opens a property set header line.
pub const HEADER_MARKER: &str = "PropertySet:";

/// Field separator inside header and property lines.
pub const FIELD_SEPARATOR: char = '\t';

const HEADER_FIELDS: usize = 3;
const PROPERTY_FIELDS: usize = 3;

/// Parsing options.
///
/// ```
/// use psetmap_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_file_size(10 * 1024 * 1024)
///     .max_property_sets(5_000)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum input size in bytes (default: 64 MiB).
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum line length in bytes (default: 1 MiB).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of property sets (default: 100k).
    pub fn max_property_sets(mut self, count: usize) -> Self {
        self.limits.max_property_sets = count;
        self
    }

    /// Set the maximum number of properties per set (default: 100k).
    pub fn max_properties_per_set(mut self, count: usize) -> Self {
        self.limits.max_properties_per_set = count;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The line appeared before any `PropertySet:` header.
    Preamble,
    /// A body line split into this many fields instead of three.
    FieldCount(usize),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preamble => write!(f, "line before first PropertySet header"),
            Self::FieldCount(n) => write!(f, "expected 3 tab-separated fields, found {}", n),
        }
    }
}

/// A non-blank line that did not contribute to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// Line number (1-based).
    pub line: usize,
    /// Why it was dropped.
    pub reason: DropReason,
    /// The trimmed line text.
    pub text: String,
}

/// Parse result together with the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Parsed property sets in file order.
    pub property_sets: Vec<PropertySet>,
    /// Dropped lines in file order.
    pub dropped: Vec<DroppedLine>,
}

impl ParseReport {
    /// Whether every non-blank line was used.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Parse a mapping table from bytes.
pub fn parse(input: &[u8]) -> PsetResult<Vec<PropertySet>> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a mapping table from text that is already decoded.
pub fn parse_str(input: &str) -> PsetResult<Vec<PropertySet>> {
    parse_text(strip_bom(input), &ParseOptions::default().limits).map(|r| r.property_sets)
}

/// Parse a mapping table with custom options.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> PsetResult<Vec<PropertySet>> {
    parse_with_report(input, options).map(|report| report.property_sets)
}

/// Parse a mapping table and report the lines that were dropped.
pub fn parse_with_report(input: &[u8], options: ParseOptions) -> PsetResult<ParseReport> {
    let text = decode(input, &options.limits)?;
    parse_text(text, &options.limits)
}

fn parse_text(text: &str, limits: &Limits) -> PsetResult<ParseReport> {
    if text.len() > limits.max_file_size {
        return Err(PsetError::security(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let mut report = ParseReport::default();
    let mut current: Option<PropertySet> = None;
    let mut opened = 0usize;

    for entry in numbered_lines(text, limits) {
        let (line_num, raw) = entry?;
        if is_blank_line(raw) {
            continue;
        }
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            opened += 1;
            if opened > limits.max_property_sets {
                return Err(PsetError::security(
                    format!(
                        "too many property sets: exceeds limit of {}",
                        limits.max_property_sets
                    ),
                    line_num,
                ));
            }
            let pset = parse_header(rest, line_num)?;
            if let Some(done) = current.replace(pset) {
                report.property_sets.push(done);
            }
            continue;
        }

        let Some(pset) = current.as_mut() else {
            drop_line(&mut report, line_num, DropReason::Preamble, line);
            continue;
        };

        match parse_property(line) {
            Ok(property) => {
                if pset.properties.len() >= limits.max_properties_per_set {
                    return Err(PsetError::security(
                        format!(
                            "too many properties in '{}': exceeds limit of {}",
                            pset.name, limits.max_properties_per_set
                        ),
                        line_num,
                    ));
                }
                pset.properties.push(property);
            }
            Err(field_count) => {
                drop_line(&mut report, line_num, DropReason::FieldCount(field_count), line);
            }
        }
    }

    if let Some(done) = current.take() {
        report.property_sets.push(done);
    }

    debug!(
        property_sets = report.property_sets.len(),
        dropped = report.dropped.len(),
        "parsed mapping table"
    );

    Ok(report)
}

fn drop_line(report: &mut ParseReport, line: usize, reason: DropReason, text: &str) {
    debug!(line, %reason, "dropping line");
    report.dropped.push(DroppedLine {
        line,
        reason,
        text: text.to_string(),
    });
}

/// Parse the remainder of a header line after the marker.
fn parse_header(rest: &str, line_num: usize) -> PsetResult<PropertySet> {
    let fields: Vec<&str> = rest.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() < HEADER_FIELDS {
        return Err(PsetError::malformed_header(
            format!(
                "expected name, kind and classes separated by tabs, found {} field(s)",
                fields.len()
            ),
            line_num,
        ));
    }

    Ok(PropertySet::new(
        fields[0],
        PsetKind::from_code(fields[1]),
        split_classes(fields[2]),
    ))
}

/// Parse a trimmed body line, returning the field count when it is not a property.
fn parse_property(line: &str) -> Result<Property, usize> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != PROPERTY_FIELDS {
        return Err(fields.len());
    }

    Ok(Property {
        source_name: fields[0].to_string(),
        data_type: DataType::from_name(fields[1]),
        target_name: fields[2].to_string(),
    })
}
