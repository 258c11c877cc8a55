/// Placeholder substitution against a JSON data context
///
/// Every `{{ path }}` found by the scanner is walked through the context and
/// replaced by the rendered value. Placeholders that cannot be walked keep their
/// original text, and the result is flagged as not fully resolved.

use crate::expression::{
    error::{InterpolationError, Result},
    path::{resolve, Lookup, PathExpr},
    scanner::{contains_placeholder, scan},
};
use serde::{Deserialize, Serialize};
use serde_json::{ser::Formatter, Value};
use std::io;

/// Reason reported when at least one placeholder survives substitution
pub const UNRESOLVED_REASON: &str = "some variables could not be resolved";

/// Result of a single interpolation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationResult {
    /// Template with every resolvable placeholder substituted
    pub resolved_text: String,
    /// True when no `{{ ... }}` is left in `resolved_text`
    pub is_fully_resolved: bool,
    /// Diagnostic for the not-fully-resolved case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved_reason: Option<String>,
}

impl InterpolationResult {
    fn failed(template: &str, error: &InterpolationError) -> Self {
        Self {
            resolved_text: template.to_string(),
            is_fully_resolved: false,
            unresolved_reason: Some(error.to_string()),
        }
    }
}

/// Per-placeholder diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderOutcome {
    pub path: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Interpolation result plus what happened to each placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationReport {
    #[serde(flatten)]
    pub result: InterpolationResult,
    pub placeholders: Vec<PlaceholderOutcome>,
}

/// Stateless handle over the interpolation functions
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpolator;

impl Interpolator {
    pub fn new() -> Self {
        Self
    }

    pub fn interpolate(&self, template: &str, context: &Value) -> InterpolationResult {
        interpolate(template, context)
    }

    pub fn try_interpolate(&self, template: &str, context: &Value) -> Result<InterpolationResult> {
        try_interpolate(template, context)
    }

    /// Interpolate and keep the per-placeholder outcomes
    ///
    /// On an internal failure the placeholder list is empty and the result
    /// carries the original template, same as [`interpolate`].
    pub fn interpolate_with_report(&self, template: &str, context: &Value) -> InterpolationReport {
        settle(template, substitute(template, context))
    }
}

/// Substitute placeholders in `template`, never failing
///
/// Internal errors are folded into the result: the template comes back
/// unmodified with the error message as `unresolved_reason`.
pub fn interpolate(template: &str, context: &Value) -> InterpolationResult {
    settle(template, substitute(template, context)).result
}

/// Fallible form of [`interpolate`]
pub fn try_interpolate(template: &str, context: &Value) -> Result<InterpolationResult> {
    let (text, _) = substitute(template, context)?;
    Ok(finish(text))
}

/// Turn a substitution outcome into a report, folding errors into the result
fn settle(template: &str, outcome: Result<(String, Vec<PlaceholderOutcome>)>) -> InterpolationReport {
    match outcome {
        Ok((text, placeholders)) => InterpolationReport {
            result: finish(text),
            placeholders,
        },
        Err(e) => {
            tracing::warn!("⚠️ Interpolation failed, returning template unchanged: {}", e);
            InterpolationReport {
                result: InterpolationResult::failed(template, &e),
                placeholders: Vec::new(),
            }
        }
    }
}

fn substitute(template: &str, context: &Value) -> Result<(String, Vec<PlaceholderOutcome>)> {
    let placeholders = scan(template);
    if placeholders.is_empty() {
        return Ok((template.to_string(), Vec::new()));
    }

    let mut output = String::with_capacity(template.len());
    let mut outcomes = Vec::with_capacity(placeholders.len());
    let mut cursor = 0;

    for placeholder in &placeholders {
        output.push_str(&template[cursor..placeholder.span.start]);
        let original = &template[placeholder.span.clone()];

        match resolve(context, &PathExpr::parse(placeholder.path)) {
            Lookup::Found(value) => {
                output.push_str(&render_value(placeholder.path, value)?);
                outcomes.push(PlaceholderOutcome {
                    path: placeholder.path.to_string(),
                    resolved: true,
                    reason: None,
                });
            }
            Lookup::Unresolved { segment, reason } => {
                tracing::trace!("🔍 Placeholder '{}' unresolved at segment {}: {}", placeholder.path, segment, reason);
                output.push_str(original);
                outcomes.push(PlaceholderOutcome {
                    path: placeholder.path.to_string(),
                    resolved: false,
                    reason: Some(reason.to_string()),
                });
            }
        }

        cursor = placeholder.span.end;
    }
    output.push_str(&template[cursor..]);

    Ok((output, outcomes))
}

/// Decide full resolution from the output, not the per-placeholder outcomes
///
/// A substituted value that itself contains `{{ .. }}` also counts as unresolved.
fn finish(text: String) -> InterpolationResult {
    let is_fully_resolved = !contains_placeholder(&text);
    InterpolationResult {
        resolved_text: text,
        is_fully_resolved,
        unresolved_reason: (!is_fully_resolved).then(|| UNRESOLVED_REASON.to_string()),
    }
}

/// Render a resolved value the way the editor displays it
///
/// Containers become compact JSON, `null` becomes empty, scalars their plain text.
/// Numbers use the same rule inside containers as on their own.
pub fn render_value(path: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(render_number(n)),
        Value::Array(_) | Value::Object(_) => render_container(path, value),
    }
}

fn render_container(path: &str, value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, JsNumberFormatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| InterpolationError::Render {
            path: path.to_string(),
            source,
        })?;

    String::from_utf8(buf).map_err(|source| InterpolationError::Encoding {
        path: path.to_string(),
        source,
    })
}

/// Compact JSON formatter printing floats like JavaScript
struct JsNumberFormatter;

impl Formatter for JsNumberFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(js_float(value).as_bytes())
    }
}

/// Numbers print like JavaScript's `String(n)`: `3.0` is `3`
fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => js_float(f),
        None => n.to_string(),
    }
}

/// Float text matching JavaScript: plain decimals in `[1e-6, 1e21)`, else `1e+21` / `1e-7`
fn js_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f.abs() >= 1e-6 && f.abs() < 1e21 {
        return f.to_string();
    }

    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => exp,
    }
}
