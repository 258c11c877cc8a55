/// Preview construction for single templates and whole nodes

use crate::expression::{detect_expressions_opt, Interpolator};
use crate::preview::types::{FieldPreview, NodeConfig, NodePreview, Preview};
use serde_json::Value;

/// Build the preview for one template field
///
/// Returns `None` when no placeholder is detected (empty, absent or plain-text
/// template) so the caller renders no preview at all.
pub fn build_preview(template: Option<&str>, context: &Value) -> Option<Preview> {
    let expressions = detect_expressions_opt(template);
    if expressions.is_empty() {
        return None;
    }

    // Non-empty detection implies the template was present
    let template = template.unwrap_or_default();
    let result = Interpolator::new().interpolate(template, context);

    tracing::debug!(
        "🔎 Preview built: {} expression(s), fully resolved: {}",
        expressions.len(),
        result.is_fully_resolved
    );

    Some(Preview { expressions, result })
}

/// Preview every templated string in a node's params
///
/// Walks params depth-first; object fields keep their declared order and array
/// elements are addressed by index (e.g., "headers.0.value").
pub fn preview_node(node: &NodeConfig, context: &Value) -> NodePreview {
    let mut fields = Vec::new();
    collect_fields(&node.params, &mut Vec::new(), context, &mut fields);

    tracing::debug!("📋 Node '{}' has {} templated field(s)", node.id, fields.len());

    NodePreview {
        node_id: node.id.clone(),
        fields,
    }
}

fn collect_fields(value: &Value, location: &mut Vec<String>, context: &Value, out: &mut Vec<FieldPreview>) {
    match value {
        Value::String(text) => {
            if let Some(preview) = build_preview(Some(text.as_str()), context) {
                out.push(FieldPreview {
                    field: location.join("."),
                    preview,
                });
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                location.push(key.clone());
                collect_fields(child, location, context, out);
                location.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                location.push(index.to_string());
                collect_fields(child, location, context, out);
                location.pop();
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::sample::sample_context;
    use serde_json::json;

    #[test]
    fn test_no_placeholders_means_no_preview() {
        let ctx = sample_context();
        assert!(build_preview(None, &ctx).is_none());
        assert!(build_preview(Some(""), &ctx).is_none());
        assert!(build_preview(Some("plain text"), &ctx).is_none());
        assert!(build_preview(Some("{{ unclosed"), &ctx).is_none());
    }

    #[test]
    fn test_preview_carries_expressions_and_result() {
        let preview = build_preview(Some("Got {{ trigger.data.body.message }} x{{missing}}"), &sample_context())
            .expect("template has placeholders");
        assert_eq!(preview.expressions, vec!["trigger.data.body.message", "missing"]);
        assert_eq!(preview.result.resolved_text, "Got Hello World x{{missing}}");
        assert!(!preview.result.is_fully_resolved);
    }

    #[test]
    fn test_node_preview_walks_params_in_order() {
        let node = NodeConfig {
            id: "send-slack".to_string(),
            node_type: "SlackMessage".to_string(),
            params: json!({
                "channel": "#alerts",
                "text": "{{trigger.data.body.message}}",
                "retries": 3,
                "headers": [
                    {"name": "X-Count", "value": "{{nodes.http-request-1.response.data.count}}"},
                    {"name": "X-Static", "value": "static"}
                ]
            }),
        };

        let preview = preview_node(&node, &sample_context());
        assert_eq!(preview.node_id, "send-slack");
        let fields: Vec<&str> = preview.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["text", "headers.0.value"]);
        assert_eq!(preview.fields[1].preview.result.resolved_text, "42");
        assert!(preview.is_fully_resolved());
    }

    #[test]
    fn test_node_preview_without_templates() {
        let node = NodeConfig {
            id: "noop".to_string(),
            node_type: String::new(),
            params: Value::Null,
        };
        let preview = preview_node(&node, &sample_context());
        assert!(preview.fields.is_empty());
        assert!(preview.is_fully_resolved());
    }
}
