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

//! Ready-made documents.

use psetmap_core::{DataType, Document, Property, PropertySet, PsetKind};

/// Table text for [`walls`].
pub const WALLS_TEXT: &str = "PropertySet:\tWalls\tI\tIfcWall\n\tFireRating\tText\tFR_Rating";

/// Table text for [`building_elements`].
pub const BUILDING_ELEMENTS_TEXT: &str = "\
PropertySet:\tPset_WallCommon\tI\tIfcWall,IfcWallStandardCase
\tFireRating\tLabel\tFire Rating
\tIsExternal\tBoolean\tFunction
\tThermalTransmittance\tThermalTransmittance\tHeat Transfer Coefficient (U)
PropertySet:\tPset_DoorCommon\tT\tIfcDoor
\tHeight\tPositiveLength\tHeight
\tWidth\tPositiveLength\tWidth
PropertySet:\tPset_SlabCommon\tI\tIfcSlab,IfcRoof,IfcSlab
\tLoadBearing\tBoolean\tStructural";

fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// No property sets.
pub fn empty() -> Document {
    Document::new()
}

/// One instance set with one property.
pub fn walls() -> Document {
    Document::from(vec![PropertySet::new(
        "Walls",
        PsetKind::Instance,
        classes(&["IfcWall"]),
    )
    .with_property(Property::new("FireRating", DataType::Text, "FR_Rating"))])
}

/// Two consecutive headers with no property rows.
pub fn headers_only() -> Document {
    Document::from(vec![
        PropertySet::new("First", PsetKind::Instance, classes(&["IfcBeam"])),
        PropertySet::new("Second", PsetKind::Type, classes(&["IfcColumn"])),
    ])
}

/// A realistic table with several sets and multi-class headers.
pub fn building_elements() -> Document {
    Document::from(vec![
        PropertySet::new(
            "Pset_WallCommon",
            PsetKind::Instance,
            classes(&["IfcWall", "IfcWallStandardCase"]),
        )
        .with_property(Property::new("FireRating", DataType::Label, "Fire Rating"))
        .with_property(Property::new("IsExternal", DataType::Boolean, "Function"))
        .with_property(Property::new(
            "ThermalTransmittance",
            DataType::ThermalTransmittance,
            "Heat Transfer Coefficient (U)",
        )),
        PropertySet::new("Pset_DoorCommon", PsetKind::Type, classes(&["IfcDoor"]))
            .with_property(Property::new("Height", DataType::PositiveLength, "Height"))
            .with_property(Property::new("Width", DataType::PositiveLength, "Width")),
        PropertySet::new(
            "Pset_SlabCommon",
            PsetKind::Instance,
            classes(&["IfcSlab", "IfcRoof", "IfcSlab"]),
        )
        .with_property(Property::new("LoadBearing", DataType::Boolean, "Structural")),
    ])
}

/// Kind and data type codes outside the known sets.
pub fn unknown_codes() -> Document {
    Document::from(vec![PropertySet::new(
        "Custom",
        PsetKind::Other("X".to_string()),
        classes(&["IfcProxy"]),
    )
    .with_property(Property::new(
        "Shade",
        DataType::Other("Colour".to_string()),
        "Shade",
    ))])
}

/// Duplicate classes are kept in order.
pub fn duplicate_classes() -> Document {
    Document::from(vec![PropertySet::new(
        "Dup",
        PsetKind::Type,
        classes(&["IfcWall", "IfcWall"]),
    )])
}
