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

//! psetmap WebAssembly Bindings
//!
//! Browser bindings for loading, editing and exporting property set mapping
//! tables. A form host keeps one [`EditorSession`] per user and calls it from
//! its event handlers.
//!
//! # Usage (JavaScript/TypeScript)
//!
//! ```typescript
//! import init, { EditorSession, dataTypes } from 'psetmap-wasm';
//!
//! await init();
//!
//! const session = new EditorSession();
//! session.loadFile(file.name, new Uint8Array(await file.arrayBuffer()));
//!
//! session.addProperty(0, 'Thickness', 'Length', 'Width');
//! session.editPropertySet(0, undefined, 'T', 'IfcWall, IfcCurtainWall');
//!
//! const blob = new Blob([session.exportBytes()], { type: 'text/plain' });
//! download(blob, session.exportFileName());
//! ```

use psetmap_core::{
    parse_with_options, parse_with_report, serialize, session, DataType, ParseOptions, PropertyEdit,
    PropertySetEdit, PsetError, PsetKind, PsetResult, Session,
};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_CUSTOM_TYPES: &'static str = r#"
/** Instance or type property set code. */
export type PsetKindCode = 'I' | 'T' | string;

export interface Property {
    source_name: string;
    data_type: string;
    target_name: string;
}

export interface PropertySet {
    name: string;
    kind: PsetKindCode;
    applicable_classes: string[];
    properties: Property[];
}
"#;

/// Default maximum input size: 64 MiB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Global maximum input size configuration
static MAX_INPUT_SIZE: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_INPUT_SIZE);

// Debug builds show the full panic message; release builds log a generic one.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    #[cfg(not(debug_assertions))]
    std::panic::set_hook(Box::new(|_| {
        web_sys::console::error_1(&"psetmap: An internal error occurred".into());
    }));
}

/// Library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Set the maximum input size in bytes.
///
/// Applies to uploads passed to `loadFile` and to text passed to `parse`,
/// `format` and `validate`. Sessions created afterwards use the new limit.
///
/// # Example (JavaScript)
/// ```javascript
/// import { setMaxInputSize } from 'psetmap-wasm';
///
/// setMaxInputSize(256 * 1024 * 1024);
/// ```
#[wasm_bindgen(js_name = setMaxInputSize)]
pub fn set_max_input_size(size: usize) {
    MAX_INPUT_SIZE.store(size, Ordering::Relaxed);
}

/// Get the current maximum input size in bytes.
#[wasm_bindgen(js_name = getMaxInputSize)]
pub fn get_max_input_size() -> usize {
    MAX_INPUT_SIZE.load(Ordering::Relaxed)
}

fn check_input_size(input_size: usize) -> PsetResult<()> {
    let max_size = get_max_input_size();
    if input_size > max_size {
        return Err(PsetError::security(
            format!(
                "Input size ({} bytes, {} MB) exceeds maximum allowed size ({} bytes, {} MB). \
                 Use setMaxInputSize() to increase the limit if needed.",
                input_size,
                input_size / (1024 * 1024),
                max_size,
                max_size / (1024 * 1024)
            ),
            0,
        ));
    }
    Ok(())
}

fn parse_options() -> ParseOptions {
    ParseOptions::builder()
        .max_file_size(get_max_input_size())
        .build()
}

fn to_js_error(err: PsetError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn kind_from_input(input: &str) -> PsetResult<PsetKind> {
    PsetKind::from_input(input).ok_or_else(|| {
        PsetError::validation(format!(
            "unknown kind '{}' (expected I, Instance, T or Type)",
            input
        ))
    })
}

fn data_type_from_input(input: &str) -> PsetResult<DataType> {
    DataType::from_known(input)
        .ok_or_else(|| PsetError::validation(format!("unknown data type '{}'", input)))
}

// --- Editor session ---

/// One user's editing session.
#[wasm_bindgen]
pub struct EditorSession {
    inner: Session,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl EditorSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EditorSession {
        EditorSession {
            inner: Session::with_options(parse_options()),
        }
    }

    /// Load an uploaded file.
    ///
    /// Returns `true` when the table was parsed and replaced the document,
    /// `false` when a file with the same name is already loaded and its edits
    /// were kept. On error the previous document stays active.
    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file(&mut self, name: &str, bytes: &[u8]) -> Result<bool, JsError> {
        self.load(name, bytes).map_err(to_js_error)
    }

    /// Number of property sets.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.document().len()
    }

    /// Name of the last loaded file, if any.
    #[wasm_bindgen(getter, js_name = loadedFileName)]
    pub fn loaded_file_name(&self) -> Option<String> {
        self.inner.last_loaded().map(str::to_string)
    }

    /// The current document as `PropertySet[]`.
    #[wasm_bindgen(js_name = propertySets)]
    pub fn property_sets(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.inner.document().property_sets())
    }

    /// Counts by kind and data type.
    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.inner.document().stats())
    }

    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> String {
        self.inner.document().to_text()
    }

    #[wasm_bindgen(js_name = exportBytes)]
    pub fn export_bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.export().bytes.as_slice())
    }

    /// Download name, `<stem>_edited.txt`.
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self) -> String {
        session::export_file_name(self.inner.last_loaded())
    }

    /// Append a property set and return its index.
    #[wasm_bindgen(js_name = addPropertySet)]
    pub fn add_property_set(
        &mut self,
        name: &str,
        kind: &str,
        classes: &str,
    ) -> Result<usize, JsError> {
        self.add_set(name, kind, classes).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = removePropertySet)]
    pub fn remove_property_set(&mut self, index: usize) -> Result<(), JsError> {
        self.inner
            .document_mut()
            .remove_property_set(index)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Overwrite the given fields; `undefined` keeps the current value.
    #[wasm_bindgen(js_name = editPropertySet)]
    pub fn edit_property_set(
        &mut self,
        index: usize,
        name: Option<String>,
        kind: Option<String>,
        classes: Option<String>,
    ) -> Result<(), JsError> {
        self.edit_set(index, name, kind, classes)
            .map_err(to_js_error)
    }

    /// Append a property and return its index within the set.
    #[wasm_bindgen(js_name = addProperty)]
    pub fn add_property(
        &mut self,
        set: usize,
        source: &str,
        data_type: &str,
        target: &str,
    ) -> Result<usize, JsError> {
        self.add_prop(set, source, data_type, target)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = removeProperty)]
    pub fn remove_property(&mut self, set: usize, prop: usize) -> Result<(), JsError> {
        self.inner
            .document_mut()
            .remove_property(set, prop)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Overwrite the given fields; `undefined` keeps the current value.
    #[wasm_bindgen(js_name = editProperty)]
    pub fn edit_property(
        &mut self,
        set: usize,
        prop: usize,
        source: Option<String>,
        data_type: Option<String>,
        target: Option<String>,
    ) -> Result<(), JsError> {
        self.edit_prop(set, prop, source, data_type, target)
            .map_err(to_js_error)
    }
}

// Rust-side implementations, kept free of JS types.
impl EditorSession {
    fn load(&mut self, name: &str, bytes: &[u8]) -> PsetResult<bool> {
        check_input_size(bytes.len())?;
        let outcome = self.inner.load_file(name, bytes)?;
        Ok(matches!(outcome, session::LoadOutcome::Loaded { .. }))
    }

    fn add_set(&mut self, name: &str, kind: &str, classes: &str) -> PsetResult<usize> {
        let kind = kind_from_input(kind)?;
        self.inner.document_mut().add_property_set(name, kind, classes)
    }

    fn edit_set(
        &mut self,
        index: usize,
        name: Option<String>,
        kind: Option<String>,
        classes: Option<String>,
    ) -> PsetResult<()> {
        let edit = PropertySetEdit {
            name,
            kind: kind.as_deref().map(kind_from_input).transpose()?,
            classes,
        };
        self.inner.document_mut().edit_property_set(index, edit)
    }

    fn add_prop(
        &mut self,
        set: usize,
        source: &str,
        data_type: &str,
        target: &str,
    ) -> PsetResult<usize> {
        let data_type = data_type_from_input(data_type)?;
        self.inner
            .document_mut()
            .add_property(set, source, data_type, target)
    }

    fn edit_prop(
        &mut self,
        set: usize,
        prop: usize,
        source: Option<String>,
        data_type: Option<String>,
        target: Option<String>,
    ) -> PsetResult<()> {
        let edit = PropertyEdit {
            source_name: source,
            data_type: data_type.as_deref().map(data_type_from_input).transpose()?,
            target_name: target,
        };
        self.inner.document_mut().edit_property(set, prop, edit)
    }
}

// --- Free functions ---

/// Known data type names, in selection order.
#[wasm_bindgen(js_name = dataTypes)]
pub fn data_types() -> Vec<String> {
    DataType::known().map(|data_type| data_type.to_string()).collect()
}

/// The preselected data type for new properties.
#[wasm_bindgen(js_name = defaultDataType)]
pub fn default_data_type() -> String {
    DataType::DEFAULT_CHOICE.to_string()
}

/// Display label for a kind code: "Instance", "Type", or the raw code.
#[wasm_bindgen(js_name = kindLabel)]
pub fn kind_label(code: &str) -> String {
    PsetKind::from_code(code).label().to_string()
}

/// Parse table text into `PropertySet[]`.
#[wasm_bindgen]
pub fn parse(text: &str) -> Result<JsValue, JsError> {
    check_input_size(text.len()).map_err(to_js_error)?;
    let property_sets =
        parse_with_options(text.as_bytes(), parse_options()).map_err(to_js_error)?;
    to_js_value(&property_sets)
}

/// Re-serialize table text in canonical form.
#[wasm_bindgen]
pub fn format(text: &str) -> Result<String, JsError> {
    format_text(text).map_err(to_js_error)
}

fn format_text(text: &str) -> PsetResult<String> {
    check_input_size(text.len())?;
    Ok(serialize(&parse_with_options(text.as_bytes(), parse_options())?))
}

// --- Validation ---

/// Validation result.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Serialize)]
pub struct ValidationError {
    line: usize,
    message: String,
    #[serde(rename = "type")]
    error_type: String,
}

/// A line the parser skipped.
#[derive(Debug, Serialize)]
pub struct ValidationWarning {
    line: usize,
    message: String,
    text: String,
}

/// Validate table text.
///
/// Returns `{ valid, errors, warnings }`. A malformed header or oversized
/// input is an error; every dropped line is a warning.
#[wasm_bindgen]
pub fn validate(text: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&validation_result(text)).unwrap_or(JsValue::NULL)
}

fn error_entry(err: PsetError) -> ValidationError {
    ValidationError {
        line: err.line,
        message: err.message,
        error_type: err.kind.to_string(),
    }
}

fn validation_result(text: &str) -> ValidationResult {
    let mut result = ValidationResult {
        valid: true,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    if let Err(e) = check_input_size(text.len()) {
        result.valid = false;
        result.errors.push(error_entry(e));
        return result;
    }

    match parse_with_report(text.as_bytes(), parse_options()) {
        Ok(report) => {
            result.warnings = report
                .dropped
                .into_iter()
                .map(|dropped| ValidationWarning {
                    line: dropped.line,
                    message: dropped.reason.to_string(),
                    text: dropped.text,
                })
                .collect();
        }
        Err(e) => {
            result.valid = false;
            result.errors.push(error_entry(e));
        }
    }

    result
}

// --- WASM Tests (require browser) ---


// --- Native Rust Tests (run with cargo test) ---

#[cfg(test)]
mod native_tests {
    use super::*;
    use psetmap_core::PsetErrorKind;
    use psetmap_test::fixtures::{BUILDING_ELEMENTS_TEXT, WALLS_TEXT};

    #[test]
    fn test_data_types() {
        let names = data_types();
        assert_eq!(names.len(), 66);
        assert_eq!(names[0], "Acceleration");
        assert_eq!(default_data_type(), "Acceleration");
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(kind_label("I"), "Instance");
        assert_eq!(kind_label("T"), "Type");
        assert_eq!(kind_label("X"), "X");
    }

    #[test]
    fn test_default_max_input_size() {
        assert_eq!(DEFAULT_MAX_INPUT_SIZE, 64 * 1024 * 1024);
        assert!(check_input_size(1024).is_ok());
        let err = check_input_size(usize::MAX).unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Security);
    }

    #[test]
    fn test_raised_limit_reaches_parser() {
        let target = "x".repeat(10_000);
        let mut text = String::from("PropertySet:\tLarge\tI\tIfcWall");
        for i in 0..7_000 {
            text.push_str(&format!("\n\tP{}\tText\t{}", i, target));
        }
        assert!(text.len() > DEFAULT_MAX_INPUT_SIZE);

        set_max_input_size(256 * 1024 * 1024);
        let result = format_text(&text);
        set_max_input_size(DEFAULT_MAX_INPUT_SIZE);

        assert_eq!(result.unwrap().len(), text.len());
    }

    #[test]
    fn test_format_text_normalizes() {
        let formatted = format_text("PropertySet:\tA\tT\t IfcDoor , IfcWindow\n\n").unwrap();
        assert_eq!(formatted, "PropertySet:\tA\tT\tIfcDoor,IfcWindow");
    }

    #[test]
    fn test_validation_result_clean() {
        let result = validation_result(BUILDING_ELEMENTS_TEXT);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_warnings() {
        let result = validation_result("notes\nPropertySet:\tA\tI\tIfcWall\n\tX\tText");
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0].line, 1);
        assert_eq!(result.warnings[1].line, 3);
    }

    #[test]
    fn test_validation_result_error() {
        let result = validation_result("PropertySet:\tA\tI\tIfcWall\nPropertySet:\tB");
        assert!(!result.valid);
        assert_eq!(result.errors[0].line, 2);
        assert_eq!(result.errors[0].error_type, "MalformedHeader");
    }

    #[test]
    fn test_session_load_and_reload() {
        let mut session = EditorSession::new();
        assert!(session.load("walls.txt", WALLS_TEXT.as_bytes()).unwrap());
        assert_eq!(session.length(), 1);
        assert_eq!(session.loaded_file_name().as_deref(), Some("walls.txt"));

        session.add_prop(0, "Thickness", "Length", "Width").unwrap();
        assert!(!session.load("walls.txt", WALLS_TEXT.as_bytes()).unwrap());
        assert_eq!(
            session.export_text(),
            format!("{}\n\tThickness\tLength\tWidth", WALLS_TEXT)
        );
        assert_eq!(session.export_file_name(), "walls_edited.txt");
    }

    #[test]
    fn test_session_set_operations() {
        let mut session = EditorSession::new();
        assert_eq!(session.add_set("Doors", "type", "IfcDoor").unwrap(), 0);
        session
            .edit_set(0, Some("Pset_Doors".to_string()), Some("I".to_string()), None)
            .unwrap();
        assert_eq!(session.export_text(), "PropertySet:\tPset_Doors\tI\tIfcDoor");
        assert_eq!(session.export_file_name(), session::DEFAULT_EXPORT_NAME);
    }

    #[test]
    fn test_session_rejects_unknown_inputs() {
        let mut session = EditorSession::new();
        session.load("walls.txt", WALLS_TEXT.as_bytes()).unwrap();

        let err = session.add_set("Doors", "Q", "IfcDoor").unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);

        let err = session
            .edit_prop(0, 0, None, Some("Colour".to_string()), None)
            .unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Validation);
        assert_eq!(session.export_text(), WALLS_TEXT);
    }

    #[test]
    fn test_session_failed_load_keeps_document() {
        let mut session = EditorSession::new();
        session.load("walls.txt", WALLS_TEXT.as_bytes()).unwrap();
        let err = session.load("bad.txt", &[0xFF, 0xFE]).unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Encoding);
        assert_eq!(session.export_text(), WALLS_TEXT);
    }
}
