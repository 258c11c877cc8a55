/// Expression Interpolation Engine
/// 
/// Pure, synchronous substitution of `{{ path }}` placeholders against a nested
/// JSON data context. It handles:
/// - Detecting placeholder paths in a template
/// - Walking dot-separated paths through objects and arrays
/// - Rendering resolved values and flagging leftovers

// Error types for internal interpolation failures
pub mod error;

// Left-to-right placeholder scanner
pub mod scanner;

// Path parsing and context traversal
pub mod path;

// Substitution and result reporting
pub mod interpolate;

// Re-export main entry points
pub use error::InterpolationError;
pub use interpolate::{
    interpolate, try_interpolate, InterpolationReport, InterpolationResult, Interpolator,
    PlaceholderOutcome, UNRESOLVED_REASON,
};
pub use path::{resolve, Lookup, MissReason, PathExpr};
pub use scanner::{contains_placeholder, detect_expressions, detect_expressions_opt, scan, Placeholder};
