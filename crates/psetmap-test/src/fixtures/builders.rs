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

//! Builder pattern for custom fixtures.

use psetmap_core::{DataType, Document, Property, PropertySet, PsetKind};

/// Fluent builder for documents.
///
/// Properties are appended to the most recently started set.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sets: Vec<PropertySet>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new property set.
    pub fn set(mut self, name: &str, kind: &str, classes: &[&str]) -> Self {
        self.sets.push(PropertySet::new(
            name,
            PsetKind::from_code(kind),
            classes.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }

    /// Append a property to the current set.
    ///
    /// # Panics
    ///
    /// Panics if no set was started.
    pub fn property(mut self, source: &str, data_type: &str, target: &str) -> Self {
        let pset = self
            .sets
            .last_mut()
            .expect("DocumentBuilder::property called before DocumentBuilder::set");
        pset.properties
            .push(Property::new(source, DataType::from_name(data_type), target));
        self
    }

    pub fn build(self) -> Document {
        Document::from(self.sets)
    }
}
