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

//! JSON view of a document.
//!
//! The JSON shape mirrors the model: an array of property sets whose `kind`
//! and `data_type` fields hold the same codes the table uses.

use crate::document::Document;
use crate::error::{PsetError, PsetResult};

/// Serialize a document to JSON.
pub fn to_json(document: &Document, pretty: bool) -> PsetResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    result.map_err(|e| PsetError::conversion(format!("JSON serialization failed: {}", e)))
}

/// Build a document from its JSON view.
pub fn from_json(input: &str) -> PsetResult<Document> {
    serde_json::from_str(input).map_err(|e| PsetError::conversion(format!("invalid JSON: {}", e)))
}
