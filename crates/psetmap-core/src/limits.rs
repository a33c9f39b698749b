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

//! Input limits for mapping table parsing.

/// Configurable limits for parser resource usage.
///
/// These bound the memory a single uploaded table can claim. Real mapping
/// tables are a few hundred kilobytes at most, so the defaults are generous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64 MiB).
    pub max_file_size: usize,
    /// Maximum line length in bytes (default: 1 MiB).
    pub max_line_length: usize,
    /// Maximum number of property sets (default: 100k).
    pub max_property_sets: usize,
    /// Maximum number of properties in one property set (default: 100k).
    pub max_properties_per_set: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024, // 64 MiB
            max_line_length: 1024 * 1024,    // 1 MiB
            max_property_sets: 100_000,
            max_properties_per_set: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
            max_property_sets: usize::MAX,
            max_properties_per_set: usize::MAX,
        }
    }
}
