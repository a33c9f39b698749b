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

//! Edit commands - apply one document mutation and write the result

use super::{load_document, write_document};
use crate::error::CliError;
use psetmap_core::{DataType, Document, PropertyEdit, PropertySetEdit, PsetKind, WriteConfig};
use tracing::info;

/// Where an edited table goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Explicit output path.
    pub path: Option<String>,
    /// Overwrite the input file.
    pub in_place: bool,
}

impl Output {
    fn resolve<'a>(&'a self, input: &'a str) -> Option<&'a str> {
        if self.in_place {
            Some(input)
        } else {
            self.path.as_deref()
        }
    }
}

fn parse_kind(input: &str) -> Result<PsetKind, CliError> {
    PsetKind::from_input(input).ok_or_else(|| {
        CliError::invalid_input(format!(
            "unknown kind '{}' (expected I, Instance, T or Type)",
            input
        ))
    })
}

fn parse_data_type(input: &str) -> Result<DataType, CliError> {
    DataType::from_known(input).ok_or_else(|| {
        CliError::invalid_input(format!(
            "unknown data type '{}' (run `psetmap types` for the list)",
            input
        ))
    })
}

/// Load, mutate, write. Nothing is written when the mutation fails.
fn apply<F>(file: &str, output: &Output, op: F) -> Result<(), CliError>
where
    F: FnOnce(&mut Document) -> Result<(), CliError>,
{
    let mut doc = load_document(file)?;
    op(&mut doc)?;
    write_document(&doc, &WriteConfig::default(), output.resolve(file))
}

/// Append a property set.
pub fn add_set(
    file: &str,
    name: &str,
    kind: &str,
    classes: &str,
    output: &Output,
) -> Result<(), CliError> {
    let kind = parse_kind(kind)?;
    apply(file, output, |doc| {
        let index = doc
            .add_property_set(name, kind, classes)
            .map_err(CliError::edit)?;
        info!(index, name, "added property set");
        Ok(())
    })
}

/// Remove the property set at `index`.
pub fn remove_set(file: &str, index: usize, output: &Output) -> Result<(), CliError> {
    apply(file, output, |doc| {
        let removed = doc.remove_property_set(index).map_err(CliError::edit)?;
        info!(index, name = %removed.name, "removed property set");
        Ok(())
    })
}

/// Overwrite the given fields of the property set at `index`.
pub fn edit_set(
    file: &str,
    index: usize,
    name: Option<String>,
    kind: Option<&str>,
    classes: Option<String>,
    output: &Output,
) -> Result<(), CliError> {
    let edit = PropertySetEdit {
        name,
        kind: kind.map(parse_kind).transpose()?,
        classes,
    };
    apply(file, output, |doc| {
        doc.edit_property_set(index, edit).map_err(CliError::edit)
    })
}

/// Append a property to the set at `set`.
pub fn add_property(
    file: &str,
    set: usize,
    source: &str,
    data_type: &str,
    target: &str,
    output: &Output,
) -> Result<(), CliError> {
    let data_type = parse_data_type(data_type)?;
    apply(file, output, |doc| {
        let index = doc
            .add_property(set, source, data_type, target)
            .map_err(CliError::edit)?;
        info!(set, index, source, "added property");
        Ok(())
    })
}

/// Remove property `prop` from the set at `set`.
pub fn remove_property(
    file: &str,
    set: usize,
    prop: usize,
    output: &Output,
) -> Result<(), CliError> {
    apply(file, output, |doc| {
        let removed = doc.remove_property(set, prop).map_err(CliError::edit)?;
        info!(set, prop, source = %removed.source_name, "removed property");
        Ok(())
    })
}

/// Overwrite the given fields of property `prop` in the set at `set`.
pub fn edit_property(
    file: &str,
    set: usize,
    prop: usize,
    source: Option<String>,
    data_type: Option<&str>,
    target: Option<String>,
    output: &Output,
) -> Result<(), CliError> {
    let edit = PropertyEdit {
        source_name: source,
        data_type: data_type.map(parse_data_type).transpose()?,
        target_name: target,
    };
    apply(file, output, |doc| {
        doc.edit_property(set, prop, edit).map_err(CliError::edit)
    })
}
