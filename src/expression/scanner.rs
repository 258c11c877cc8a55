/// Placeholder scanner for `{{ path }}` markers
///
/// Single left-to-right pass with two states (outside / inside a placeholder).
/// Each `{{` is paired with the NEXT `}}` after it, giving the shortest match,
/// and scanning resumes right after the closing delimiter. An unmatched `{{`
/// is plain text.

use std::ops::Range;

const OPEN: &[u8; 2] = b"{{";
const CLOSE: &[u8; 2] = b"}}";

/// A single placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole match, delimiters included
    pub span: Range<usize>,
    /// Text between the delimiters, untouched
    pub raw: &'a str,
    /// `raw` with surrounding whitespace trimmed
    pub path: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Outside,
    Inside { open: usize },
}

/// Find every non-overlapping placeholder in source order
pub fn scan(template: &str) -> Vec<Placeholder<'_>> {
    let bytes = template.as_bytes();
    let mut found = Vec::new();
    let mut state = ScanState::Outside;
    let mut i = 0;

    while i + 1 < bytes.len() {
        let pair = [bytes[i], bytes[i + 1]];
        match state {
            ScanState::Outside if &pair == OPEN => {
                state = ScanState::Inside { open: i };
                i += 2;
            }
            ScanState::Inside { open } if &pair == CLOSE => {
                // Delimiters are ASCII so both slice points sit on char boundaries
                let raw = &template[open + 2..i];
                found.push(Placeholder {
                    span: open..i + 2,
                    raw,
                    path: trim_js_whitespace(raw),
                });
                state = ScanState::Outside;
                i += 2;
            }
            _ => i += 1,
        }
    }

    found
}

/// Trim the way JavaScript's `String.prototype.trim` does
///
/// Unicode White_Space plus U+FEFF, minus U+0085 which JS keeps.
fn trim_js_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Detect placeholder paths in a template
///
/// Returns the trimmed inner text of each placeholder in order of appearance,
/// duplicates included. Empty or placeholder-free templates yield an empty list.
pub fn detect_expressions(template: &str) -> Vec<String> {
    scan(template)
        .into_iter()
        .map(|placeholder| placeholder.path.to_string())
        .collect()
}

/// Same as [`detect_expressions`] for a possibly absent template
pub fn detect_expressions_opt(template: Option<&str>) -> Vec<String> {
    template.map(detect_expressions).unwrap_or_default()
}

/// Whether any well-formed placeholder is present
pub fn contains_placeholder(text: &str) -> bool {
    !scan(text).is_empty()
}
