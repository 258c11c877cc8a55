/// Configuration management for the preview service
///
/// Handles server configuration and the optional sample context override.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Preview configuration
    pub preview: PreviewConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Preview engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Optional JSON file replacing the built-in sample context at startup
    pub sample_context_path: Option<String>,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for k8s/container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("FLOWPREVIEW_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("FLOWPREVIEW_PORT")
                    .unwrap_or_else(|_| "3004".to_string())
                    .parse()
                    .unwrap_or(3004),
            },
            preview: PreviewConfig {
                sample_context_path: std::env::var("FLOWPREVIEW_SAMPLE_PATH")
                    .ok()
                    .filter(|path| !path.is_empty()),
            },
        }
    }
}

/// Read the configured sample context file, if any
pub fn load_sample_context(config: &PreviewConfig) -> Result<Option<Value>> {
    let Some(path) = &config.sample_context_path else {
        return Ok(None);
    };

    tracing::info!("📄 Loading sample context from {}", path);
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read sample context '{}': {}", path, e))?;
    let context: Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Invalid JSON in sample context '{}': {}", path, e))?;

    Ok(Some(context))
}
