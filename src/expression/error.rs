/// Error types for the interpolation engine
/// 
/// Unresolved placeholders are NOT errors - they stay verbatim in the output.
/// These variants only cover internal failures that abort a whole interpolation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("failed to render value for '{path}': {source}")]
    Render {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rendered value for '{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

pub type Result<T> = std::result::Result<T, InterpolationError>;
