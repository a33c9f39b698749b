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

//! Core parser, writer and document model for property set mapping tables.
//!
//! A mapping table lists property sets, each with a name, an instance/type
//! kind, the classes it applies to, and a list of properties mapping a
//! source attribute name and data type to a target attribute name:
//!
//! ```text
//! PropertySet:	Walls	I	IfcWall,IfcWallStandardCase
//! 	FireRating	Text	FR_Rating
//! 	Thickness	Length	Width
//! ```
//!
//! # Pipeline
//!
//! - [`parse`] turns bytes into an ordered `Vec<PropertySet>`.
//! - [`Document`] owns that sequence and exposes the add/remove/edit
//!   operations an editor needs. Failed operations leave it untouched.
//! - [`serialize`] writes the sequence back. Unedited input round-trips
//!   exactly.
//! - [`Session`] ties a document to the file it was loaded from for
//!   interactive hosts.
//!
//! ```
//! use psetmap_core::{parse, serialize, DataType, Document};
//!
//! let input = "PropertySet:\tWalls\tI\tIfcWall\n\tFireRating\tText\tFR_Rating";
//! let mut doc = Document::from(parse(input.as_bytes()).unwrap());
//! doc.add_property(0, "Width", DataType::Length, "W").unwrap();
//!
//! assert_eq!(
//!     serialize(doc.property_sets()),
//!     "PropertySet:\tWalls\tI\tIfcWall\n\tFireRating\tText\tFR_Rating\n\tWidth\tLength\tW"
//! );
//! ```

mod document;
mod error;
#[cfg(feature = "json")]
pub mod json;
mod limits;
mod model;
mod parser;
mod preprocess;
pub mod session;
mod types;
mod writer;

pub use document::{Document, DocumentStats, PropertyEdit, PropertySetEdit};
pub use error::{PsetError, PsetErrorKind, PsetResult};
pub use limits::Limits;
pub use model::{split_classes, Property, PropertySet, CLASS_SEPARATOR};
pub use parser::{
    parse, parse_str, parse_with_options, parse_with_report, DropReason, DroppedLine,
    ParseOptions, ParseOptionsBuilder, ParseReport, FIELD_SEPARATOR, HEADER_MARKER,
};
pub use session::{export_file_name, on_export_requested, on_file_loaded, Export, LoadOutcome, Session};
pub use types::{DataType, PsetKind};
pub use writer::{serialize, serialize_with_config, to_bytes, LineEnding, WriteConfig};
