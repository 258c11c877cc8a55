/// HTTP API Layer
/// 
/// This module exposes the preview engine to the workflow editor over REST.
/// It handles:
/// - Expression detection and raw interpolation
/// - Template and whole-node previews
/// - Reading and swapping the sample data context

// Detection, interpolation and preview endpoints
pub mod preview;

// Sample context management endpoints (GET/PUT/DELETE)
pub mod sample;

// Re-export router builders
pub use preview::{create_preview_routes, AppState};
pub use sample::create_sample_routes;
