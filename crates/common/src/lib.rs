//! VelocityDRIVE Gateway Common Library
//!
//! Shared invocation types and the mup1cc process runner.

pub mod error;
pub mod mup1cc;

// Re-export commonly used types
pub use error::{Error, Result};
pub use mup1cc::{decode_stdout, InputFile, Invocation, ToolConfig, ToolOutput};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
