/// Preview type definitions
///
/// Shapes exchanged between the node editor and the preview engine. These types
/// are serialized/deserialized from JSON by the API layer.

use crate::expression::InterpolationResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node as configured in the workflow editor
///
/// Only `params` matters for previews: every string inside it may carry
/// `{{ path }}` placeholders referencing trigger data, prior node outputs,
/// workflow variables or execution metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Node identifier within the workflow (e.g., "http-request-1")
    pub id: String,
    /// Free-form node type as shown in the editor (e.g., "HttpRequest")
    #[serde(default, alias = "node_type")]
    pub node_type: String,
    /// Node-specific configuration parameters as flexible JSON
    #[serde(default)]
    pub params: Value,
}

/// What the preview panel renders for one template
///
/// Only built when the template holds at least one placeholder; otherwise the
/// panel shows nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Detected placeholder paths, in order, duplicates kept (the variables badge)
    pub expressions: Vec<String>,
    /// Substituted text and resolution flag
    pub result: InterpolationResult,
}

/// Preview of a single templated field inside a node's params
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPreview {
    /// Dotted location of the field within params (e.g., "headers.0.value")
    pub field: String,
    pub preview: Preview,
}

/// Previews for every templated field of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePreview {
    pub node_id: String,
    pub fields: Vec<FieldPreview>,
}

impl NodePreview {
    /// True when every templated field fully resolved
    pub fn is_fully_resolved(&self) -> bool {
        self.fields.iter().all(|f| f.preview.result.is_fully_resolved)
    }
}
