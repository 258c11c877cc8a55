/// Sample data context for previews using ArcSwap
///
/// The editor previews templates against illustrative data rather than a live
/// execution. The active sample is held behind an atomic pointer so it can be
/// swapped at runtime while concurrent previews keep reading the old one.

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

/// Built-in sample fixture
///
/// Mirrors the shape of a real execution context:
/// - trigger: the webhook request that started the workflow
/// - nodes: outputs of previously executed nodes, keyed by node ID
/// - variables: workflow-level variables
/// - execution: metadata about the current run
pub fn sample_context() -> Value {
    json!({
        "trigger": {
            "type": "webhook",
            "data": {
                "method": "POST",
                "headers": {
                    "content-type": "application/json",
                    "user-agent": "curl/8.4.0"
                },
                "query": {
                    "source": "preview"
                },
                "body": {
                    "message": "Hello World",
                    "user": {
                        "id": 123,
                        "name": "John Doe",
                        "email": "john@example.com"
                    },
                    "items": ["apple", "banana", "cherry"]
                }
            }
        },
        "nodes": {
            "http-request-1": {
                "response": {
                    "status": "success",
                    "data": {
                        "count": 42
                    }
                },
                "statusCode": 200
            },
            "transform-1": {
                "output": {
                    "total": 99.5,
                    "processed": true,
                    "tags": ["urgent", "billing"]
                }
            }
        },
        "variables": {
            "apiUrl": "https://api.example.com",
            "environment": "staging",
            "maxRetries": 3
        },
        "execution": {
            "id": "exec-preview-0001",
            "workflowId": "wf-preview",
            "startedAt": "2024-01-01T00:00:00Z",
            "mode": "preview"
        }
    })
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleContextError {
    #[error("sample context must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// A sample context together with when it became active
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSnapshot {
    pub context: Value,
    pub updated_at: DateTime<Utc>,
    /// True while the built-in fixture is active
    pub is_default: bool,
}

/// Lock-free holder of the active sample context
#[derive(Debug)]
pub struct SampleContextRegistry {
    current: ArcSwap<SampleSnapshot>,
}

impl Default for SampleContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleContextRegistry {
    /// Create a registry holding the built-in fixture
    pub fn new() -> Self {
        Self {
            current: ArcSwap::new(Arc::new(default_snapshot())),
        }
    }

    /// Create a registry starting from a custom context
    pub fn with_context(context: Value) -> Result<Self, SampleContextError> {
        let registry = Self::new();
        registry.replace(context)?;
        Ok(registry)
    }

    /// Current snapshot (lock-free read)
    pub fn current(&self) -> Arc<SampleSnapshot> {
        self.current.load_full()
    }

    /// Current context only
    pub fn context(&self) -> Value {
        self.current.load().context.clone()
    }

    /// Swap in a new sample context
    ///
    /// Only JSON objects are accepted as a context root.
    pub fn replace(&self, context: Value) -> Result<(), SampleContextError> {
        if !context.is_object() {
            return Err(SampleContextError::NotAnObject {
                found: value_kind(&context),
            });
        }

        self.current.store(Arc::new(SampleSnapshot {
            context,
            updated_at: Utc::now(),
            is_default: false,
        }));

        tracing::info!("🔄 Sample context replaced");
        Ok(())
    }

    /// Restore the built-in fixture
    pub fn reset(&self) {
        self.current.store(Arc::new(default_snapshot()));
        tracing::info!("♻️ Sample context reset to built-in fixture");
    }
}

fn default_snapshot() -> SampleSnapshot {
    SampleSnapshot {
        context: sample_context(),
        updated_at: Utc::now(),
        is_default: true,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
