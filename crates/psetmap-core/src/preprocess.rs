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

//! Input decoding ahead of line parsing.

use crate::error::{PsetError, PsetResult};
use crate::limits::Limits;

/// Decode raw input bytes into text.
///
/// This handles:
/// - Size limit
/// - UTF-8 validation
/// - BOM skipping
pub fn decode<'a>(input: &'a [u8], limits: &Limits) -> PsetResult<&'a str> {
    if input.len() > limits.max_file_size {
        return Err(PsetError::security(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let text = std::str::from_utf8(input)
        .map_err(|e| PsetError::encoding(format!("invalid UTF-8 encoding: {}", e)))?;

    Ok(strip_bom(text))
}

/// Skip a leading byte order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Whether `c` ends a line.
///
/// Besides `\n` and `\r` this covers vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Iterator over lines with their terminators removed.
///
/// `\r\n` counts as one break. A final terminator does not start an
/// extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((index, c)) => {
                let line = &self.rest[..index];
                let mut end = index + c.len_utf8();
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split text into numbered lines, dropping terminators.
///
/// Line numbers are 1-based. Lines longer than the configured limit are
/// rejected.
pub fn numbered_lines<'a>(
    text: &'a str,
    limits: &'a Limits,
) -> impl Iterator<Item = PsetResult<(usize, &'a str)>> + 'a {
    Lines::new(text).enumerate().map(move |(index, line)| {
        let line_num = index + 1;
        if line.len() > limits.max_line_length {
            return Err(PsetError::security(
                format!(
                    "line too long: exceeds limit of {} bytes",
                    limits.max_line_length
                ),
                line_num,
            ));
        }
        Ok((line_num, line))
    })
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PsetErrorKind;

    #[test]
    fn test_decode_simple() {
        let text = decode(b"PropertySet:\tA\tI\tB", &Limits::default()).unwrap();
        assert_eq!(text, "PropertySet:\tA\tI\tB");
    }

    #[test]
    fn test_decode_skips_bom() {
        let input = "\u{FEFF}PropertySet:".as_bytes();
        assert_eq!(decode(input, &Limits::default()).unwrap(), "PropertySet:");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode(&[0x50, 0xFF, 0xFE], &Limits::default()).unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Encoding);
    }

    #[test]
    fn test_decode_file_too_large() {
        let limits = Limits {
            max_file_size: 4,
            ..Limits::default()
        };
        let err = decode(b"12345", &limits).unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Security);
    }

    #[test]
    fn test_numbered_lines_crlf() {
        let limits = Limits::default();
        let lines: Vec<_> = numbered_lines("a\r\nb\n\nc", &limits)
            .collect::<PsetResult<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, ""), (4, "c")]);
    }

    #[test]
    fn test_numbered_lines_bare_cr() {
        let limits = Limits::default();
        let lines: Vec<_> = numbered_lines("a\rb\r\rc\r", &limits)
            .collect::<PsetResult<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, ""), (4, "c")]);
    }

    #[test]
    fn test_lines_unicode_breaks() {
        let lines: Vec<_> = Lines::new("a\u{2028}b\u{85}c\u{0C}d\r\n\ne").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e"]);
    }

    #[test]
    fn test_lines_empty_and_lone_break() {
        assert_eq!(Lines::new("").count(), 0);
        assert_eq!(Lines::new("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(Lines::new("\r\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_numbered_lines_trailing_newline() {
        let limits = Limits::default();
        let count = numbered_lines("a\nb\n", &limits).count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_numbered_lines_too_long() {
        let limits = Limits {
            max_line_length: 3,
            ..Limits::default()
        };
        let results: Vec<_> = numbered_lines("abc\nabcd", &limits).collect();
        assert!(results[0].is_ok());
        let err = results[1].clone().unwrap_err();
        assert_eq!(err.kind, PsetErrorKind::Security);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_is_blank_line() {
        assert!(is_blank_line(""));
        assert!(is_blank_line(" \t "));
        assert!(!is_blank_line("\tx"));
    }
}
