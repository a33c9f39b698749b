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

//! Error types for mapping table parsing and editing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PsetErrorKind {
    /// A `PropertySet:` header with fewer than three fields.
    MalformedHeader,
    /// An index outside the current bounds of the document.
    Index,
    /// A required field was empty on an add operation.
    Validation,
    /// Security limit exceeded.
    Security,
    /// Input bytes are not valid UTF-8.
    Encoding,
    /// Error during JSON interchange.
    Conversion,
}

impl fmt::Display for PsetErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader => write!(f, "MalformedHeader"),
            Self::Index => write!(f, "IndexError"),
            Self::Validation => write!(f, "ValidationFailure"),
            Self::Security => write!(f, "SecurityError"),
            Self::Encoding => write!(f, "EncodingError"),
            Self::Conversion => write!(f, "ConversionError"),
        }
    }
}

/// An error raised by the parser or by a document operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct PsetError {
    /// The kind of error.
    pub kind: PsetErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when the error has no source line).
    pub line: usize,
}

impl PsetError {
    /// Create a new error.
    pub fn new(kind: PsetErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn malformed_header(message: impl Into<String>, line: usize) -> Self {
        Self::new(PsetErrorKind::MalformedHeader, message, line)
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::new(PsetErrorKind::Index, message, 0)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(PsetErrorKind::Validation, message, 0)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(PsetErrorKind::Security, message, line)
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(PsetErrorKind::Encoding, message, 0)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(PsetErrorKind::Conversion, message, 0)
    }

    /// Whether the error left the document untouched and the session may continue.
    pub fn is_recoverable_edit(&self) -> bool {
        matches!(self.kind, PsetErrorKind::Index | PsetErrorKind::Validation)
    }
}

/// Result type for mapping table operations.
pub type PsetResult<T> = Result<T, PsetError>;
