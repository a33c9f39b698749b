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

//! End-to-end parse, edit and export scenarios.

use psetmap_core::{
    parse, parse_with_report, serialize, DataType, Document, ParseOptions, Property,
    PropertySet, PropertySetEdit, PsetErrorKind, PsetKind,
};
use psetmap_test::fixtures::{self, errors};

// ==================== Parsing ====================

#[test]
fn test_single_set_with_one_property() {
    let sets = parse(fixtures::WALLS_TEXT.as_bytes()).unwrap();
    assert_eq!(sets.len(), 1);
    let pset = &sets[0];
    assert_eq!(pset.name, "Walls");
    assert_eq!(pset.kind, PsetKind::Instance);
    assert_eq!(pset.kind.code(), "I");
    assert_eq!(pset.applicable_classes, vec!["IfcWall"]);
    assert_eq!(
        pset.properties,
        vec![Property::new("FireRating", DataType::Text, "FR_Rating")]
    );
}

#[test]
fn test_serialize_reproduces_input_exactly() {
    let sets = parse(fixtures::WALLS_TEXT.as_bytes()).unwrap();
    assert_eq!(serialize(&sets), fixtures::WALLS_TEXT);
}

#[test]
fn test_consecutive_headers_make_empty_sets() {
    let input = "PropertySet:\tFirst\tI\tIfcBeam\nPropertySet:\tSecond\tT\tIfcColumn";
    let sets = parse(input.as_bytes()).unwrap();
    assert_eq!(Document::from(sets), fixtures::headers_only());
}

#[test]
fn test_crlf_input_parses_like_lf() {
    let crlf = fixtures::BUILDING_ELEMENTS_TEXT.replace('\n', "\r\n");
    let sets = parse(crlf.as_bytes()).unwrap();
    assert_eq!(Document::from(sets), fixtures::building_elements());
}

#[test]
fn test_class_whitespace_is_normalized_once() {
    let input = "PropertySet:\tA\tI\t IfcWall ,  IfcSlab";
    let first = serialize(&parse(input.as_bytes()).unwrap());
    assert_eq!(first, "PropertySet:\tA\tI\tIfcWall,IfcSlab");
    let second = serialize(&parse(first.as_bytes()).unwrap());
    assert_eq!(second, first);
}

#[test]
fn test_unknown_codes_round_trip_verbatim() {
    let input = "PropertySet:\tCustom\tX\tIfcProxy\n\tShade\tColour\tShade";
    let sets = parse(input.as_bytes()).unwrap();
    assert_eq!(Document::from(sets.clone()), fixtures::unknown_codes());
    assert_eq!(serialize(&sets), input);
}

// ==================== Malformed headers ====================

#[test]
fn test_malformed_headers_abort_parse() {
    for (name, input, line) in errors::malformed_headers() {
        let err = parse(input.as_bytes()).expect_err(name);
        assert_eq!(err.kind, PsetErrorKind::MalformedHeader, "{}", name);
        assert_eq!(err.line, line, "{}", name);
    }
}

#[test]
fn test_malformed_header_gives_no_partial_output() {
    let input = "PropertySet:\tA\tI\tIfcWall\n\tX\tText\tY\nPropertySet:\tB";
    assert!(parse_with_report(input.as_bytes(), ParseOptions::default()).is_err());
}

// ==================== Permissive rows ====================

#[test]
fn test_permissive_samples() {
    for (name, input, dropped) in errors::permissive_samples() {
        let report = parse_with_report(input.as_bytes(), ParseOptions::default())
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(report.property_sets.len(), 1, "{}", name);
        assert_eq!(
            report.property_sets[0].properties,
            vec![Property::new("A", DataType::Text, "B")],
            "{}",
            name
        );
        assert_eq!(report.dropped.len(), dropped, "{}", name);
    }
}

#[test]
fn test_rows_after_dropped_row_still_parse() {
    let input = "PropertySet:\tS\tI\tC\n\tbad\trow\n\tA\tText\tB\n\tC\tArea\tD";
    let sets = parse(input.as_bytes()).unwrap();
    assert_eq!(sets[0].properties.len(), 2);
    assert_eq!(sets[0].properties[1].data_type, DataType::Area);
}

// ==================== Editing ====================

#[test]
fn test_add_property_with_empty_source_is_rejected() {
    let mut doc = fixtures::walls();
    let err = doc
        .add_property(0, "", DataType::Length, "X")
        .unwrap_err();
    assert_eq!(err.kind, PsetErrorKind::Validation);
    assert_eq!(doc, fixtures::walls());
}

#[test]
fn test_remove_missing_set_is_index_error() {
    let mut doc = fixtures::walls();
    let err = doc.remove_property_set(5).unwrap_err();
    assert_eq!(err.kind, PsetErrorKind::Index);
    assert_eq!(doc, fixtures::walls());
}

#[test]
fn test_edit_then_export() {
    let mut doc = Document::from(parse(fixtures::BUILDING_ELEMENTS_TEXT.as_bytes()).unwrap());

    doc.remove_property_set(1).unwrap();
    doc.edit_property_set(
        1,
        PropertySetEdit {
            name: Some("Pset_RoofCommon".to_string()),
            classes: Some("IfcRoof".to_string()),
            ..PropertySetEdit::default()
        },
    )
    .unwrap();
    doc.remove_property(0, 1).unwrap();
    let index = doc
        .add_property_set("Pset_Extra", PsetKind::Type, "IfcBeam, IfcColumn")
        .unwrap();
    doc.add_property(index, "Span", DataType::PositiveLength, "Span")
        .unwrap();

    assert_eq!(
        doc.to_text(),
        "PropertySet:\tPset_WallCommon\tI\tIfcWall,IfcWallStandardCase\n\
         \tFireRating\tLabel\tFire Rating\n\
         \tThermalTransmittance\tThermalTransmittance\tHeat Transfer Coefficient (U)\n\
         PropertySet:\tPset_RoofCommon\tI\tIfcRoof\n\
         \tLoadBearing\tBoolean\tStructural\n\
         PropertySet:\tPset_Extra\tT\tIfcBeam,IfcColumn\n\
         \tSpan\tPositiveLength\tSpan"
    );
}

#[test]
fn test_order_preserved_through_edits() {
    let mut doc = fixtures::building_elements();
    doc.add_property(0, "Z", DataType::Text, "z").unwrap();
    let names: Vec<&str> = doc.get(0).unwrap().properties.iter().map(|p| p.source_name.as_str()).collect();
    assert_eq!(names, vec!["FireRating", "IsExternal", "ThermalTransmittance", "Z"]);
    let set_names: Vec<&str> = doc.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(set_names, vec!["Pset_WallCommon", "Pset_DoorCommon", "Pset_SlabCommon"]);
}

#[test]
fn test_empty_class_list_serializes_but_does_not_reparse() {
    let doc = Document::from(vec![PropertySet::new("Bare", PsetKind::Instance, vec![])]);
    let text = doc.to_text();
    assert_eq!(text, "PropertySet:\tBare\tI\t");
    let err = parse(text.as_bytes()).unwrap_err();
    assert_eq!(err.kind, PsetErrorKind::MalformedHeader);
}
