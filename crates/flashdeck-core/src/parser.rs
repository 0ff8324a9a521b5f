// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turns selected `Term: Definition` text into flashcards.
//!
//! The scan works on the remaining text one record at a time. It first looks
//! for a record that is followed by another line containing a colon. Failing
//! that, it looks for a last record running to the end of the input. When
//! neither is found, whatever is left is dropped.
//!
//! Within a single record:
//!
//! - The term starts at a word character (`[A-Za-z0-9_]`) and runs to a colon
//!   on the same line. The rightmost colon that still allows a match wins.
//! - The body of a record that is not the last may span several lines, but no
//!   character in it may be directly followed by a colon.
//! - The body of the last record runs to the end of the input.
//!
//! Parsing never fails.

use crate::types::flashcard::Flashcard;

/// Parse selected text into flashcards, in order of appearance.
pub fn parse_selection(text: &str) -> Vec<Flashcard> {
    let chars: Vec<char> = text.chars().collect();
    let mut cards = Vec::new();
    let mut cursor = 0;
    loop {
        let rest = &chars[cursor..];
        let Some(record) = find_record(rest, Terminator::NextRecord)
            .or_else(|| find_record(rest, Terminator::EndOfInput))
        else {
            break;
        };
        let term: String = rest[record.term_start..record.colon].iter().collect();
        let body: String = rest[record.colon + 1..record.body_end].iter().collect();
        cards.push(Flashcard::new(trim(&term), trim(&body)));
        // The newline ending the body stays in the remainder.
        cursor += record.body_end;
    }
    cards
}

/// What must come after a record's body for the record to match.
#[derive(Clone, Copy, PartialEq)]
enum Terminator {
    /// A newline, then a line with a colon in it.
    NextRecord,
    /// A newline, or the end of the input.
    EndOfInput,
}

/// Positions of a matched record, as indices into the scanned slice.
struct Record {
    term_start: usize,
    colon: usize,
    /// One past the last character of the body.
    body_end: usize,
}

fn find_record(s: &[char], terminator: Terminator) -> Option<Record> {
    for term_start in 0..s.len() {
        if !is_word(s[term_start]) {
            continue;
        }
        let line_end = line_end(s, term_start + 1);
        for colon in (term_start + 1..line_end).rev() {
            if s[colon] != ':' {
                continue;
            }
            let body_start = colon + 1;
            let max_end = match terminator {
                Terminator::NextRecord => guarded_body_extent(s, body_start),
                Terminator::EndOfInput => body_extent(s, body_start),
            };
            // Prefer the longest body. Bodies are never empty.
            for body_end in (body_start + 1..=max_end).rev() {
                if terminates(s, body_end, terminator) {
                    return Some(Record {
                        term_start,
                        colon,
                        body_end,
                    });
                }
            }
        }
    }
    None
}

fn terminates(s: &[char], pos: usize, terminator: Terminator) -> bool {
    match terminator {
        Terminator::NextRecord => s.get(pos) == Some(&'\n') && line_has_colon(s, pos + 1),
        Terminator::EndOfInput => pos == s.len() || s[pos] == '\n',
    }
}

/// Whether the line starting at `start` has a colon after its first
/// character.
fn line_has_colon(s: &[char], start: usize) -> bool {
    let end = line_end(s, start);
    start < end && s[start + 1..end].contains(&':')
}

/// End of the body of a record that is not the last: line characters that
/// are not directly followed by a colon, and newlines.
fn guarded_body_extent(s: &[char], start: usize) -> usize {
    let mut pos = start;
    while pos < s.len() {
        let c = s[pos];
        let accepted = c == '\n' || (is_line_char(c) && s.get(pos + 1) != Some(&':'));
        if !accepted {
            break;
        }
        pos += 1;
    }
    pos
}

/// End of the body of the last record: line characters and newlines.
fn body_extent(s: &[char], start: usize) -> usize {
    let mut pos = start;
    while pos < s.len() && (s[pos] == '\n' || is_line_char(s[pos])) {
        pos += 1;
    }
    pos
}

/// The first position at or after `start` that is not a line character.
fn line_end(s: &[char], start: usize) -> usize {
    let mut pos = start;
    while pos < s.len() && is_line_char(s[pos]) {
        pos += 1;
    }
    pos
}

/// Strip leading and trailing whitespace. U+FEFF counts as whitespace and
/// U+0085 does not.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_line_char(c: char) -> bool {
    !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
