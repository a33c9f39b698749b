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

//! Shared test fixtures and utilities for psetmap crates.
//!
//! # Quick Start
//!
//! ```rust
//! use psetmap_test::fixtures;
//!
//! let doc = fixtures::walls();           // Scenario document
//! let text = fixtures::WALLS_TEXT;        // Its exact table text
//!
//! use psetmap_test::fixtures::builders::DocumentBuilder;
//!
//! let doc = DocumentBuilder::new()
//!     .set("Doors", "T", &["IfcDoor"])
//!     .property("Height", "Length", "H")
//!     .build();
//! ```

use psetmap_core::Document;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Document)>;

/// Returns all fixtures as (name, table_text) pairs.
pub fn fixtures_as_text() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| (name, fixture_fn().to_text()))
        .collect()
}

/// Canonical test fixtures.
pub mod fixtures;

/// Count all properties across a document.
pub fn count_properties(doc: &Document) -> usize {
    doc.iter().map(|pset| pset.properties.len()).sum()
}
