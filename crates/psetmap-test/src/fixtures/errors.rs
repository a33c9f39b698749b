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

//! Malformed and permissive inputs.

/// Inputs whose header is malformed, as (name, text, expected error line).
pub fn malformed_headers() -> Vec<(&'static str, &'static str, usize)> {
    vec![
        ("marker_only", "PropertySet:", 1),
        ("name_only", "PropertySet:\tWalls", 1),
        ("name_and_kind", "PropertySet:\tWalls\tI", 1),
        ("empty_classes", "PropertySet:\tWalls\tI\t", 1),
        ("spaces_not_tabs", "PropertySet: Walls I IfcWall", 1),
        (
            "second_header_short",
            "PropertySet:\tA\tI\tIfcWall\n\tX\tText\tY\nPropertySet:\tB\tT",
            3,
        ),
    ]
}

/// Inputs containing lines that are dropped, as (name, text, dropped line count).
///
/// Every sample still parses to exactly one set with one `A / Text / B` property.
pub fn permissive_samples() -> Vec<(&'static str, &'static str, usize)> {
    vec![
        ("two_fields", "PropertySet:\tS\tI\tC\n\tX\tText\n\tA\tText\tB", 1),
        ("four_fields", "PropertySet:\tS\tI\tC\n\tA\tText\tB\n\tX\tY\tZ\tW", 1),
        ("preamble", "a comment\nPropertySet:\tS\tI\tC\n\tA\tText\tB", 1),
        ("note_line", "PropertySet:\tS\tI\tC\nnote: check\n\tA\tText\tB", 1),
        (
            "blank_lines",
            "\n\nPropertySet:\tS\tI\tC\n\n   \n\tA\tText\tB\n\n",
            0,
        ),
        (
            "mixed",
            "header\nPropertySet:\tS\tI\tC\n\tone\n\tA\tText\tB\n\ta\tb\tc\td\te",
            3,
        ),
    ]
}
