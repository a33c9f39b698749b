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

//! The editable document and its mutation operations.
//!
//! Every operation validates first and mutates second, so a failed call
//! leaves the document exactly as it was.

use crate::error::{PsetError, PsetResult};
use crate::model::{split_classes, Property, PropertySet};
use crate::types::{DataType, PsetKind};
use crate::writer::serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// Field overrides for [`Document::edit_property_set`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySetEdit {
    pub name: Option<String>,
    pub kind: Option<PsetKind>,
    /// Comma-separated class text, split and trimmed like the parser does.
    pub classes: Option<String>,
}

/// Field overrides for [`Document::edit_property`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEdit {
    pub source_name: Option<String>,
    pub data_type: Option<DataType>,
    pub target_name: Option<String>,
}

/// Summary counts over a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocumentStats {
    pub property_sets: usize,
    pub properties: usize,
    pub instance_sets: usize,
    pub type_sets: usize,
    pub other_kind_sets: usize,
    /// Property count per data type name, sorted by name.
    pub data_types: BTreeMap<String, usize>,
    /// Properties whose data type is outside the known set.
    pub unknown_data_types: usize,
}

/// An ordered sequence of property sets being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    property_sets: Vec<PropertySet>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.property_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.property_sets.is_empty()
    }

    /// Get a property set by index.
    pub fn get(&self, index: usize) -> Option<&PropertySet> {
        self.property_sets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertySet> {
        self.property_sets.iter()
    }

    pub fn property_sets(&self) -> &[PropertySet] {
        &self.property_sets
    }

    pub fn into_inner(self) -> Vec<PropertySet> {
        self.property_sets
    }

    /// Serialize to canonical table text.
    pub fn to_text(&self) -> String {
        serialize(&self.property_sets)
    }

    /// Append a new property set with no properties and return its index.
    ///
    /// # Errors
    ///
    /// `Validation` when the name is blank or the class text has no non-empty class.
    pub fn add_property_set(
        &mut self,
        name: &str,
        kind: PsetKind,
        classes: &str,
    ) -> PsetResult<usize> {
        if name.trim().is_empty() {
            return Err(PsetError::validation("property set name must not be empty"));
        }
        let classes = split_classes(classes);
        if classes.iter().all(|class| class.is_empty()) {
            return Err(PsetError::validation(
                "property set needs at least one applicable class",
            ));
        }

        self.property_sets.push(PropertySet::new(name, kind, classes));
        trace!(index = self.property_sets.len() - 1, name, "added property set");
        Ok(self.property_sets.len() - 1)
    }

    /// Remove and return the property set at `index`.
    pub fn remove_property_set(&mut self, index: usize) -> PsetResult<PropertySet> {
        self.check_set_index(index)?;
        let removed = self.property_sets.remove(index);
        trace!(index, name = %removed.name, "removed property set");
        Ok(removed)
    }

    /// Overwrite the supplied fields of the property set at `index`.
    pub fn edit_property_set(&mut self, index: usize, edit: PropertySetEdit) -> PsetResult<()> {
        let pset = self.set_mut(index)?;
        if let Some(name) = edit.name {
            pset.name = name;
        }
        if let Some(kind) = edit.kind {
            pset.kind = kind;
        }
        if let Some(classes) = edit.classes {
            pset.applicable_classes = split_classes(&classes);
        }
        trace!(index, "edited property set");
        Ok(())
    }

    /// Append a property to the set at `pset_index` and return its index.
    ///
    /// # Errors
    ///
    /// `Index` when the set does not exist, then `Validation` when any field is empty.
    pub fn add_property(
        &mut self,
        pset_index: usize,
        source_name: &str,
        data_type: DataType,
        target_name: &str,
    ) -> PsetResult<usize> {
        self.check_set_index(pset_index)?;
        if source_name.is_empty() || data_type.as_str().is_empty() || target_name.is_empty() {
            return Err(PsetError::validation(
                "source name, data type and target name are all required",
            ));
        }

        let pset = &mut self.property_sets[pset_index];
        pset.properties
            .push(Property::new(source_name, data_type, target_name));
        trace!(pset_index, source_name, "added property");
        Ok(pset.properties.len() - 1)
    }

    /// Remove and return a property.
    pub fn remove_property(&mut self, pset_index: usize, prop_index: usize) -> PsetResult<Property> {
        self.property_mut(pset_index, prop_index)?;
        let removed = self.property_sets[pset_index].properties.remove(prop_index);
        trace!(pset_index, prop_index, "removed property");
        Ok(removed)
    }

    /// Overwrite the supplied fields of a property.
    ///
    /// Data types outside the known set are stored as given.
    pub fn edit_property(
        &mut self,
        pset_index: usize,
        prop_index: usize,
        edit: PropertyEdit,
    ) -> PsetResult<()> {
        let property = self.property_mut(pset_index, prop_index)?;
        if let Some(source_name) = edit.source_name {
            property.source_name = source_name;
        }
        if let Some(data_type) = edit.data_type {
            property.data_type = data_type;
        }
        if let Some(target_name) = edit.target_name {
            property.target_name = target_name;
        }
        trace!(pset_index, prop_index, "edited property");
        Ok(())
    }

    /// Count property sets and properties.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats {
            property_sets: self.property_sets.len(),
            ..DocumentStats::default()
        };

        for pset in &self.property_sets {
            match pset.kind {
                PsetKind::Instance => stats.instance_sets += 1,
                PsetKind::Type => stats.type_sets += 1,
                PsetKind::Other(_) => stats.other_kind_sets += 1,
            }
            for property in &pset.properties {
                stats.properties += 1;
                if !property.data_type.is_known() {
                    stats.unknown_data_types += 1;
                }
                *stats
                    .data_types
                    .entry(property.data_type.as_str().to_string())
                    .or_default() += 1;
            }
        }

        stats
    }

    fn check_set_index(&self, index: usize) -> PsetResult<()> {
        if index >= self.property_sets.len() {
            return Err(PsetError::index(format!(
                "property set index {} out of range (document has {})",
                index,
                self.property_sets.len()
            )));
        }
        Ok(())
    }

    fn set_mut(&mut self, index: usize) -> PsetResult<&mut PropertySet> {
        self.check_set_index(index)?;
        Ok(&mut self.property_sets[index])
    }

    fn property_mut(&mut self, pset_index: usize, prop_index: usize) -> PsetResult<&mut Property> {
        let pset = self.set_mut(pset_index)?;
        let count = pset.properties.len();
        pset.properties.get_mut(prop_index).ok_or_else(|| {
            PsetError::index(format!(
                "property index {} out of range (property set has {})",
                prop_index, count
            ))
        })
    }
}

impl From<Vec<PropertySet>> for Document {
    fn from(property_sets: Vec<PropertySet>) -> Self {
        Self { property_sets }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a PropertySet;
    type IntoIter = std::slice::Iter<'a, PropertySet>;

    fn into_iter(self) -> Self::IntoIter {
        self.property_sets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PsetErrorKind;

    fn one_set() -> Document {
        Document::from(vec![PropertySet::new(
            "Walls",
            PsetKind::Instance,
            vec!["IfcWall".to_string()],
        )
        .with_property(Property::new("FireRating", DataType::Text, "FR_Rating"))])
    }

    // ==================== add_property_set ====================

    #[test]
    fn test_add_property_set_appends() {
        let mut doc = one_set();
        let index = doc
            .add_property_set("Doors", PsetKind::Type, "IfcDoor, IfcWindow")
            .unwrap();
        assert_eq!(index, 1);
        let pset = doc.get(1).unwrap();
        assert_eq!(pset.name, "Doors");
        assert_eq!(pset.kind, PsetKind::Type);
        assert_eq!(pset.applicable_classes, vec!["IfcDoor", "IfcWindow"]);
        assert!(pset.properties.is_empty());
    }

    #[test]
    fn test_add_property_set_rejects_empty_name() {
        let mut doc = one_set();
        let err = doc
            .add_property_set("  ", PsetKind::Instance, "IfcWall")
            .unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);
        assert_eq!(doc, one_set());
    }

    #[test]
    fn test_add_property_set_rejects_empty_classes() {
        let mut doc = one_set();
        for classes in ["", "  ", " , ,"] {
            let err = doc
                .add_property_set("Doors", PsetKind::Instance, classes)
                .unwrap_err();
            assert_eq!(err.kind, PsetErrorKind::Validation);
        }
        assert_eq!(doc.len(), 1);
    }

    // ==================== remove_property_set ====================

    #[test]
    fn test_remove_property_set_shifts_indices() {
        let mut doc = one_set();
        doc.add_property_set("B", PsetKind::Instance, "X").unwrap();
        doc.add_property_set("C", PsetKind::Instance, "X").unwrap();
        let removed = doc.remove_property_set(0).unwrap();
        assert_eq!(removed.name, "Walls");
        assert_eq!(doc.get(0).unwrap().name, "B");
        assert_eq!(doc.get(1).unwrap().name, "C");
    }

    #[test]
    fn test_remove_property_set_out_of_range() {
        let mut doc = one_set();
        let err = doc.remove_property_set(5).unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Index);
        assert_eq!(doc, one_set());
    }

    // ==================== edit_property_set ====================

    #[test]
    fn test_edit_property_set_partial() {
        let mut doc = one_set();
        doc.edit_property_set(
            0,
            PropertySetEdit {
                kind: Some(PsetKind::Type),
                classes: Some("IfcWall , IfcCurtainWall".to_string()),
                ..PropertySetEdit::default()
            },
        )
        .unwrap();
        let pset = doc.get(0).unwrap();
        assert_eq!(pset.name, "Walls");
        assert_eq!(pset.kind, PsetKind::Type);
        assert_eq!(pset.applicable_classes, vec!["IfcWall", "IfcCurtainWall"]);
        assert_eq!(pset.properties.len(), 1);
    }

    #[test]
    fn test_edit_property_set_accepts_blank_classes() {
        let mut doc = one_set();
        let edit = PropertySetEdit {
            classes: Some(String::new()),
            ..PropertySetEdit::default()
        };
        doc.edit_property_set(0, edit).unwrap();
        assert_eq!(doc.get(0).unwrap().applicable_classes, vec![""]);
    }

    #[test]
    fn test_edit_property_set_out_of_range() {
        let mut doc = one_set();
        let edit = PropertySetEdit {
            name: Some("X".to_string()),
            ..PropertySetEdit::default()
        };
        assert_eq!(
            doc.edit_property_set(1, edit).unwrap_err().kind,
            PsetErrorKind::Index
        );
        assert_eq!(doc, one_set());
    }

    // ==================== add_property ====================

    #[test]
    fn test_add_property_appends() {
        let mut doc = one_set();
        let index = doc
            .add_property(0, "Width", DataType::Length, "W")
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(
            doc.get(0).unwrap().properties[1],
            Property::new("Width", DataType::Length, "W")
        );
    }

    #[test]
    fn test_add_property_rejects_empty_fields() {
        let mut doc = one_set();
        let err = doc
            .add_property(0, "", DataType::Length, "X")
            .unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);
        let err = doc
            .add_property(0, "A", DataType::Other(String::new()), "X")
            .unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);
        let err = doc.add_property(0, "A", DataType::Area, "").unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);
        assert_eq!(doc, one_set());
    }

    #[test]
    fn test_add_property_checks_index_first() {
        let mut doc = one_set();
        let err = doc.add_property(3, "", DataType::Length, "").unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Index);
    }

    // ==================== remove_property / edit_property ====================

    #[test]
    fn test_remove_property() {
        let mut doc = one_set();
        doc.add_property(0, "Width", DataType::Length, "W").unwrap();
        let removed = doc.remove_property(0, 0).unwrap();
        assert_eq!(removed.source_name, "FireRating");
        assert_eq!(doc.get(0).unwrap().properties[0].source_name, "Width");
    }

    #[test]
    fn test_remove_property_out_of_range() {
        let mut doc = one_set();
        assert_eq!(doc.remove_property(0, 1).unwrap_err().kind, PsetErrorKind::Index);
        assert_eq!(doc.remove_property(1, 0).unwrap_err().kind, PsetErrorKind::Index);
        assert_eq!(doc, one_set());
    }

    #[test]
    fn test_edit_property_stores_unknown_type() {
        let mut doc = one_set();
        doc.edit_property(
            0,
            0,
            PropertyEdit {
                data_type: Some(DataType::from_name("Colour")),
                target_name: Some("FR".to_string()),
                ..PropertyEdit::default()
            },
        )
        .unwrap();
        let prop = &doc.get(0).unwrap().properties[0];
        assert_eq!(prop.source_name, "FireRating");
        assert_eq!(prop.data_type, DataType::Other("Colour".to_string()));
        assert_eq!(prop.target_name, "FR");
    }

    #[test]
    fn test_edit_property_out_of_range() {
        let mut doc = one_set();
        let err = doc
            .edit_property(0, 9, PropertyEdit::default())
            .unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Index);
    }

    // ==================== stats ====================

    #[test]
    fn test_stats() {
        let mut doc = one_set();
        doc.add_property_set("T1", PsetKind::Type, "IfcDoor").unwrap();
        doc.add_property(1, "A", DataType::Text, "a").unwrap();
        doc.add_property(1, "B", DataType::from_name("Colour"), "b")
            .unwrap();
        let stats = doc.stats();
        assert_eq!(stats.property_sets, 2);
        assert_eq!(stats.properties, 3);
        assert_eq!(stats.instance_sets, 1);
        assert_eq!(stats.type_sets, 1);
        assert_eq!(stats.other_kind_sets, 0);
        assert_eq!(stats.data_types.get("Text"), Some(&2));
        assert_eq!(stats.data_types.get("Colour"), Some(&1));
        assert_eq!(stats.unknown_data_types, 1);
    }

    #[test]
    fn test_iteration_and_accessors() {
        let doc = one_set();
        assert_eq!(doc.iter().count(), 1);
        assert_eq!((&doc).into_iter().count(), 1);
        assert!(!doc.is_empty());
        assert!(Document::new().is_empty());
        assert_eq!(doc.to_text(), "PropertySet:\tWalls\tI\tIfcWall\n\tFireRating\tText\tFR_Rating");
        assert_eq!(doc.clone().into_inner().len(), 1);
    }
}
