//! hexconv Common Library
//!
//! Shared building blocks for the hexconv workspace.
//!
//! # Overview
//!
//! - **Hex text decoding**: whitespace-tolerant hex-to-bytes transform ([`hex_text`])
//! - **Error Handling**: the decoder's error type ([`MalformedHexError`])
//! - **Logging**: tracing subscriber setup shared by all binaries ([`logging`])
//!
//! # Example
//!
//! ```
//! use hexconv_common::hex_text;
//!
//! let bytes = hex_text::decode("48 65 6c\r\n6c 6f").unwrap();
//! assert_eq!(bytes, b"Hello");
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod hex_text;
pub mod logging;

// Re-export commonly used types
pub use error::MalformedHexError;
