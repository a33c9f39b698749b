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

//! Property set and property records.

use crate::types::{DataType, PsetKind};

/// Separator between applicable class names.
pub const CLASS_SEPARATOR: &str = ",";

/// One mapped attribute within a property set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Name in the source classification system.
    pub source_name: String,
    /// Semantic data type.
    pub data_type: DataType,
    /// Name in the destination system.
    pub target_name: String,
}

impl Property {
    /// Create a new property.
    pub fn new(
        source_name: impl Into<String>,
        data_type: impl Into<DataType>,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            data_type: data_type.into(),
            target_name: target_name.into(),
        }
    }
}

/// A named, typed group of attribute mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySet {
    /// Property set name.
    pub name: String,
    /// Instance or type property set.
    pub kind: PsetKind,
    /// Class names the set applies to, in file order.
    pub applicable_classes: Vec<String>,
    /// Mapped properties, in export order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<Property>,
}

impl PropertySet {
    /// Create a new property set with no properties.
    pub fn new(name: impl Into<String>, kind: impl Into<PsetKind>, classes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            applicable_classes: classes,
            properties: Vec::new(),
        }
    }

    /// Builder-style helper to append a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Get a property by index.
    pub fn get_property(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    /// The class list as written to the table.
    pub fn classes_joined(&self) -> String {
        self.applicable_classes.join(CLASS_SEPARATOR)
    }

    /// The class list for display in an editable text field.
    pub fn classes_display(&self) -> String {
        self.applicable_classes.join(", ")
    }
}

/// Split comma-separated class text into trimmed tokens.
///
/// Empty tokens are kept, so `"IfcWall,"` yields `["IfcWall", ""]`.
pub fn split_classes(text: &str) -> Vec<String> {
    text.split(CLASS_SEPARATOR).map(|class| class.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_new() {
        let prop = Property::new("FireRating", "Text", "FR_Rating");
        assert_eq!(prop.source_name, "FireRating");
        assert_eq!(prop.data_type, DataType::Text);
        assert_eq!(prop.target_name, "FR_Rating");
    }

    #[test]
    fn test_property_set_new_is_empty() {
        let pset = PropertySet::new("Walls", "I", vec!["IfcWall".to_string()]);
        assert_eq!(pset.kind, PsetKind::Instance);
        assert!(pset.properties.is_empty());
    }

    #[test]
    fn test_with_property_preserves_order() {
        let pset = PropertySet::new("Doors", PsetKind::Type, vec![])
            .with_property(Property::new("A", "Length", "a"))
            .with_property(Property::new("B", "Area", "b"));
        assert_eq!(pset.get_property(0).unwrap().source_name, "A");
        assert_eq!(pset.get_property(1).unwrap().source_name, "B");
        assert!(pset.get_property(2).is_none());
    }

    #[test]
    fn test_classes_joined_and_display() {
        let pset = PropertySet::new(
            "Slabs",
            "T",
            vec!["IfcSlab".to_string(), "IfcRoof".to_string()],
        );
        assert_eq!(pset.classes_joined(), "IfcSlab,IfcRoof");
        assert_eq!(pset.classes_display(), "IfcSlab, IfcRoof");
    }

    #[test]
    fn test_empty_classes_join_to_empty_string() {
        let pset = PropertySet::new("Bare", "I", vec![]);
        assert_eq!(pset.classes_joined(), "");
    }

    #[test]
    fn test_split_classes_trims_tokens() {
        assert_eq!(
            split_classes(" IfcWall , IfcWallStandardCase,IfcWall "),
            vec!["IfcWall", "IfcWallStandardCase", "IfcWall"]
        );
        assert_eq!(split_classes("IfcWall,"), vec!["IfcWall", ""]);
        assert_eq!(split_classes(""), vec![""]);
    }
}
