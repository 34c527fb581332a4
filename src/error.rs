//! Error types for the webview bridge.
//!
//! The bridge is fail-silent toward the host: capture failures are logged and
//! swallowed, missing click targets are skipped, unknown commands are
//! ignored. The [`Error`] enum exists for the fallible seams *inside* the
//! crate (wire encoding, payload decoding, and the rendering capability)
//! and never crosses the host transport.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Capture | [`Error::Capture`] |
//! | Wire | [`Error::Json`], [`Error::Base64`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Capture Errors
    // ========================================================================
    /// DOM-to-image rendering failed.
    ///
    /// Returned by [`DomRenderer`](crate::page::DomRenderer) implementations
    /// when the capture cannot be produced. The bridge logs this and emits
    /// nothing; the host applies its own timeout.
    #[error("Capture failed: {message}")]
    Capture {
        /// Description of the rendering failure.
        message: String,
    },

    // ========================================================================
    // Wire Errors
    // ========================================================================
    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding error in a screenshot payload.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a capture error.
    #[inline]
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a capture error.
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Capture { .. })
    }

    /// Returns `true` if this is a wire-format error.
    #[inline]
    #[must_use]
    pub fn is_wire_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Base64(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
