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

//! Editing session and the data contract used by interactive hosts.
//!
//! A host (a browser form, a CLI) owns one [`Session`]. It calls
//! [`Session::load_file`] when the user picks a file, runs the
//! [`Document`] mutation operations in response to form input, and calls
//! [`Session::export`] to produce the download.
//!
//! Hosts that re-run their whole UI on every interaction pass the same file
//! again and again; `load_file` recognizes the repeated name and keeps the
//! edited document instead of reparsing.

use crate::document::Document;
use crate::error::PsetResult;
use crate::model::PropertySet;
use crate::parser::{parse_with_options, ParseOptions};
use crate::writer::to_bytes;
use std::path::Path;
use tracing::{debug, info};

/// Suffix appended to the original base name of an exported table.
pub const EXPORT_SUFFIX: &str = "_edited";

/// Export name used when no file has been loaded.
pub const DEFAULT_EXPORT_NAME: &str = "ParameterMappingTable_edited.txt";

/// Decode uploaded bytes and parse them.
pub fn on_file_loaded(raw: &[u8]) -> PsetResult<Vec<PropertySet>> {
    parse_with_options(raw, ParseOptions::default())
}

/// Serialize a document for download.
pub fn on_export_requested(document: &Document) -> Vec<u8> {
    to_bytes(document.property_sets())
}

/// Derive the download name from the uploaded file name.
///
/// `walls.txt` becomes `walls_edited.txt`; the extension is always `.txt`.
pub fn export_file_name(original: Option<&str>) -> String {
    let stem = original
        .map(Path::new)
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty());

    match stem {
        Some(stem) => format!("{}{}.txt", stem, EXPORT_SUFFIX),
        None => DEFAULT_EXPORT_NAME.to_string(),
    }
}

/// Result of [`Session::load_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was parsed and replaced the document.
    Loaded {
        /// Number of property sets in the new document.
        property_sets: usize,
    },
    /// The same file name was already loaded; the document was kept.
    Unchanged,
}

/// A serialized table ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One user's editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: Document,
    last_loaded: Option<String>,
    options: ParseOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that parses uploads with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Name of the last successfully loaded file.
    pub fn last_loaded(&self) -> Option<&str> {
        self.last_loaded.as_deref()
    }

    /// Load an uploaded file.
    ///
    /// The document is replaced only after the new table parsed completely;
    /// on error the previous document and file name stay active.
    pub fn load_file(&mut self, name: &str, raw: &[u8]) -> PsetResult<LoadOutcome> {
        if self.last_loaded.as_deref() == Some(name) {
            debug!(name, "file already loaded, keeping edits");
            return Ok(LoadOutcome::Unchanged);
        }

        let property_sets = parse_with_options(raw, self.options.clone())?;
        let count = property_sets.len();
        self.document = Document::from(property_sets);
        self.last_loaded = Some(name.to_string());
        info!(name, property_sets = count, "loaded mapping table");

        Ok(LoadOutcome::Loaded {
            property_sets: count,
        })
    }

    /// Drop the document and forget the loaded file.
    pub fn clear(&mut self) {
        self.document = Document::new();
        self.last_loaded = None;
    }

    /// Serialize the current document for download.
    pub fn export(&self) -> Export {
        Export {
            file_name: export_file_name(self.last_loaded.as_deref()),
            bytes: on_export_requested(&self.document),
        }
    }
}
