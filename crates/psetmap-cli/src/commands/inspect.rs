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

//! Inspect command - mapping table structure visualization

use super::load_document;
use crate::error::CliError;
use colored::Colorize;
use psetmap_core::{Document, PropertySet};

/// Print the structure of a mapping table as a tree.
///
/// With `stats`, counts by kind and data type follow the tree. Data types
/// outside the known set are highlighted.
pub fn inspect(file: &str, stats: bool) -> Result<(), CliError> {
    let doc = load_document(file)?;

    println!("{}", "Mapping Table".bold().underline());
    println!();
    for (index, pset) in doc.iter().enumerate() {
        print_set(index, pset);
    }

    if stats {
        print_stats(&doc);
    }

    Ok(())
}

fn print_set(index: usize, pset: &PropertySet) {
    let kind = if pset.kind.is_known() {
        pset.kind.label().cyan()
    } else {
        pset.kind.label().red()
    };
    println!(
        "[{}] {} [{}] ({})",
        index,
        pset.name.green(),
        kind,
        pset.classes_display()
    );
    for (prop_index, prop) in pset.properties.iter().enumerate() {
        let data_type = if prop.data_type.is_known() {
            prop.data_type.as_str().yellow()
        } else {
            prop.data_type.as_str().red()
        };
        println!(
            "  [{}] {} : {} -> {}",
            prop_index, prop.source_name, data_type, prop.target_name
        );
    }
}

fn print_stats(doc: &Document) {
    let stats = doc.stats();
    println!();
    println!("{}", "Statistics:".cyan());
    println!("  Property sets: {}", stats.property_sets);
    println!("    Instance: {}", stats.instance_sets);
    println!("    Type: {}", stats.type_sets);
    if stats.other_kind_sets > 0 {
        println!("    Other: {}", stats.other_kind_sets);
    }
    println!("  Properties: {}", stats.properties);
    for (name, count) in &stats.data_types {
        println!("    {}: {}", name, count);
    }
    if stats.unknown_data_types > 0 {
        println!(
            "  {} {} propert(ies) use an unknown data type",
            "warning:".yellow(),
            stats.unknown_data_types
        );
    }
}
