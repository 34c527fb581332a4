//! Event definitions and payload helpers.
//!
//! Events are notifications from the page back to the host: focus/blur
//! transitions observed by the document listeners and completed screenshot
//! captures. How an event is framed on the wire is a deployment choice; see
//! [`wire`](super::wire).

// ============================================================================
// Imports
// ============================================================================

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Event
// ============================================================================

/// An event emitted by the bridge toward the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An element gained focus.
    Focus {
        /// Identifier of the focused element; possibly empty.
        target: String,
    },

    /// An element lost focus.
    Blur {
        /// Identifier of the blurred element; possibly empty.
        target: String,
    },

    /// A completed viewport capture.
    Screenshot {
        /// PNG payload, base64-encoded, with the data-URI prefix stripped.
        base64: String,
    },
}

impl Event {
    /// Creates a focus event.
    #[inline]
    #[must_use]
    pub fn focus(target: impl Into<String>) -> Self {
        Self::Focus {
            target: target.into(),
        }
    }

    /// Creates a blur event.
    #[inline]
    #[must_use]
    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    /// Creates a screenshot event from an already-stripped payload.
    #[inline]
    #[must_use]
    pub fn screenshot(base64: impl Into<String>) -> Self {
        Self::Screenshot {
            base64: base64.into(),
        }
    }

    /// Decodes the PNG bytes of a [`Event::Screenshot`].
    ///
    /// Returns `None` for the other variants. Intended for host-side
    /// consumers that want the raw image rather than the base64 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Base64`](crate::Error::Base64) if the payload is not
    /// valid base64.
    pub fn png_bytes(&self) -> Option<Result<Vec<u8>>> {
        match self {
            Self::Screenshot { base64 } => {
                Some(Base64Standard.decode(base64.as_bytes()).map_err(Into::into))
            }
            Self::Focus { .. } | Self::Blur { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
