/// Preview Layer
/// 
/// This module turns the interpolation engine into what the node editor shows.
/// It provides:
/// - Type definitions (NodeConfig, Preview, FieldPreview)
/// - Single-template and whole-node preview construction
/// - The sample data context and its hot-swappable registry

// Core preview type definitions
pub mod types;

// Preview construction for templates and node params
pub mod builder;

// Built-in sample fixture and lock-free sample registry
pub mod sample;

// Re-export commonly used types
pub use builder::{build_preview, preview_node};
pub use sample::{sample_context, SampleContextError, SampleContextRegistry, SampleSnapshot};
pub use types::{FieldPreview, NodeConfig, NodePreview, Preview};
