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

//! CLI command implementations

mod convert;
mod edit;
mod format;
mod inspect;
mod types;
mod validate;

pub use convert::{from_json, to_json};
pub use edit::{add_property, add_set, edit_property, edit_set, remove_property, remove_set, Output};
pub use format::format;
pub use inspect::inspect;
pub use types::list_types;
pub use validate::validate;

use crate::error::CliError;
use psetmap_core::{parse_with_report, Document, ParseOptions, ParseReport, WriteConfig};
use std::fs;
use std::io::{self, Write};

/// Default maximum file size (64 MiB).
/// Can be overridden via the PSETMAP_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "PSETMAP_MAX_FILE_SIZE";

/// Get the maximum file size from environment or use default.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Parser options matching the configured file size limit.
pub fn parse_options() -> ParseOptions {
    let max = usize::try_from(get_max_file_size()).unwrap_or(usize::MAX);
    ParseOptions::builder().max_file_size(max).build()
}

/// Read a file from disk with size validation.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file exceeds the
/// configured maximum size (`PSETMAP_MAX_FILE_SIZE`), or the read fails.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a UTF-8 text file with size validation.
pub fn read_text(path: &str) -> Result<String, CliError> {
    let bytes = read_file(path)?;
    String::from_utf8(bytes)
        .map_err(|e| CliError::invalid_input(format!("'{}' is not valid UTF-8: {}", path, e)))
}

/// Read and parse a mapping table, keeping the dropped-line report.
pub fn load_report(path: &str) -> Result<ParseReport, CliError> {
    let bytes = read_file(path)?;
    parse_with_report(&bytes, parse_options()).map_err(CliError::parse)
}

/// Read and parse a mapping table.
pub fn load_document(path: &str) -> Result<Document, CliError> {
    load_report(path).map(|report| Document::from(report.property_sets))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Serialize a document and write it to a file or stdout.
pub fn write_document(
    doc: &Document,
    config: &WriteConfig,
    path: Option<&str>,
) -> Result<(), CliError> {
    let text = psetmap_core::serialize_with_config(doc.property_sets(), config);
    write_output(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn temp_table(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_document() {
        let file = temp_table("PropertySet:\tA\tI\tIfcWall\n\tX\tText\tY");
        let doc = load_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_load_report_keeps_drops() {
        let file = temp_table("note\nPropertySet:\tA\tI\tIfcWall");
        let report = load_report(file.path().to_str().unwrap()).unwrap();
        assert_eq!(report.dropped.len(), 1);
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let file = temp_table("PropertySet:\tA");
        let err = load_document(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/psetmap/table.txt").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE]).unwrap();
        let err = read_text(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
