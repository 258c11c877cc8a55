/// flowpreview: template expression preview service
/// 
/// Main entry point. Initializes configuration and starts the HTTP server.

use flowpreview::{config::Config, server::start_server};

/// Application entry point
/// 
/// Initializes the server with default configuration and starts listening for requests.
/// The server provides:
/// - Expression detection at /api/expressions/detect
/// - Template and node previews at /api/preview and /api/nodes/preview
/// - Sample context management at /api/preview/sample
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3004 and the built-in sample fixture)
    let config = Config::default();
    
    // Start the server
    start_server(config).await?;
    
    Ok(())
}
