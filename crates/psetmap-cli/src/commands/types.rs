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

//! Types command - list known data types

use colored::Colorize;
use psetmap_core::DataType;

/// Print every known data type, marking the default choice.
pub fn list_types() {
    for data_type in DataType::known() {
        if data_type == DataType::DEFAULT_CHOICE {
            println!("{} {}", data_type, "(default)".dimmed());
        } else {
            println!("{}", data_type);
        }
    }
}
