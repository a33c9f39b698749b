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

//! Canonical mapping table fixtures.
//!
//! - **documents**: ready-made documents and their canonical text
//! - **errors**: malformed and permissive-drop inputs
//! - **builders**: fluent construction of custom documents

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("empty", empty),
        ("walls", walls),
        ("headers_only", headers_only),
        ("building_elements", building_elements),
        ("unknown_codes", unknown_codes),
        ("duplicate_classes", duplicate_classes),
    ]
}
