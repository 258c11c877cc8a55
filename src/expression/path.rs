/// Dot-separated path expressions and their resolution against a data context
///
/// Each segment is an object key or, against an array, a numeric index.
/// Object lookup is tried first, so `{"1": ..}` is reached by `.1` as a key.

use serde_json::Value;
use std::fmt;

/// Parsed path expression, e.g. `trigger.data.body.message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathExpr<'a> {
    /// Split on `.` without dropping empty segments
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

/// Why a path could not be walked to a concrete value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// Hit `null` with segments still to consume
    NullTraversal,
    /// Object has no such key
    KeyNotFound,
    /// Segment is not a valid index for an array
    NotAnIndex,
    /// Index past the end of the array
    IndexOutOfRange,
    /// Segment applied to a string, number or bool
    ScalarTraversal,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MissReason::NullTraversal => "null value before end of path",
            MissReason::KeyNotFound => "key not found",
            MissReason::NotAnIndex => "segment is not an array index",
            MissReason::IndexOutOfRange => "array index out of range",
            MissReason::ScalarTraversal => "cannot descend into a scalar value",
        };
        f.write_str(text)
    }
}

/// Outcome of walking a path
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'v> {
    Found(&'v Value),
    Unresolved { segment: usize, reason: MissReason },
}

/// Walk `path` through `context`, starting at the root
pub fn resolve<'v>(context: &'v Value, path: &PathExpr<'_>) -> Lookup<'v> {
    descend(context, path.segments(), 0)
}

fn descend<'v>(current: &'v Value, rest: &[&str], depth: usize) -> Lookup<'v> {
    let Some((segment, tail)) = rest.split_first() else {
        return Lookup::Found(current);
    };

    let miss = |reason| Lookup::Unresolved { segment: depth, reason };

    match current {
        Value::Null => miss(MissReason::NullTraversal),
        Value::Object(map) => match map.get(*segment) {
            Some(next) => descend(next, tail, depth + 1),
            None => miss(MissReason::KeyNotFound),
        },
        Value::Array(items) => match parse_index(segment) {
            Some(index) => match items.get(index) {
                Some(next) => descend(next, tail, depth + 1),
                None => miss(MissReason::IndexOutOfRange),
            },
            None => miss(MissReason::NotAnIndex),
        },
        Value::Bool(_) | Value::Number(_) | Value::String(_) => miss(MissReason::ScalarTraversal),
    }
}

/// Canonical non-negative integer: ASCII digits only, no sign
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
