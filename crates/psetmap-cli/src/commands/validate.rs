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

//! Validate command - mapping table structure check

use super::load_report;
use crate::error::CliError;
use colored::Colorize;

/// Validate a mapping table.
///
/// Prints a ✓/✗ summary with set and property counts, followed by every line
/// the parser dropped. In strict mode dropped lines fail the command.
///
/// # Examples
///
/// ```no_run
/// use psetmap_cli::commands::validate;
///
/// # fn main() -> Result<(), psetmap_cli::error::CliError> {
/// validate("ParameterSets.txt", false)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str, strict: bool) -> Result<(), CliError> {
    let report = match load_report(file) {
        Ok(report) => report,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e);
        }
    };

    let properties: usize = report.property_sets.iter().map(|s| s.properties.len()).sum();
    let mark = if strict && !report.is_clean() {
        "✗".red().bold()
    } else {
        "✓".green().bold()
    };
    println!("{} {}", mark, file);
    println!("  Property sets: {}", report.property_sets.len());
    println!("  Properties: {}", properties);

    if !report.is_clean() {
        println!("  Dropped lines: {}", report.dropped.len());
        for dropped in &report.dropped {
            println!(
                "    {} line {}: {} ({})",
                "warning:".yellow(),
                dropped.line,
                dropped.reason,
                dropped.text.replace('\t', "\\t")
            );
        }
    }
    if strict {
        println!("  Mode: strict (dropped lines are errors)");
        if !report.is_clean() {
            return Err(CliError::DroppedLines {
                count: report.dropped.len(),
            });
        }
    }

    Ok(())
}
