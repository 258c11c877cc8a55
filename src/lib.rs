/// flowpreview: template expression preview engine for workflow node editors
/// 
/// This library substitutes `{{ path }}` placeholders in node configuration
/// fields against a nested data context, and serves previews over HTTP.

// Core configuration and setup
pub mod config;

// Expression engine - placeholder detection, path walking and substitution
pub mod expression;

// Preview layer - preview panel contract, node previews and sample data
pub mod preview;

// HTTP API layer - REST endpoints for the workflow editor
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use expression::{detect_expressions, interpolate, InterpolationResult, Interpolator};
pub use preview::{build_preview, preview_node, sample_context, NodeConfig, Preview};
pub use server::{create_app, create_router, start_server};
