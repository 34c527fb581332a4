//! Command definitions and inbound decoding.
//!
//! Commands are instructions from the host into the page. On the wire they
//! are always Shape A: the variant tag and its fields flattened into one
//! top-level object:
//!
//! ```json
//! { "type": "Click", "x": 12.0, "y": 34.0 }
//! ```
//!
//! Inbound frames decode through [`ParsedCommand`], which turns unknown or
//! unparseable tags into an explicit [`ParsedCommand::Ignored`] branch
//! instead of an error: the dispatcher must never surface a failure for a
//! frame it does not recognize.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Command
// ============================================================================

/// A command sent from the host into the page.
///
/// Coordinates for [`Command::Click`] are physical pixels as provided by the
/// host; the dispatcher converts them to CSS pixels internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Simulate a click at the given physical-pixel coordinates.
    Click {
        /// Horizontal coordinate in physical pixels.
        x: f64,
        /// Vertical coordinate in physical pixels.
        y: f64,
    },

    /// Navigate back in session history.
    Back,

    /// Navigate forward in session history.
    Forward,

    /// Capture the visible viewport as a PNG.
    ///
    /// Only honored when the bridge was installed with a renderer; otherwise
    /// dispatch treats it as an unrecognized frame.
    Screenshot,
}

// ============================================================================
// ParsedCommand
// ============================================================================

/// Decode result for an inbound command frame.
///
/// Unknown tags and malformed frames land in [`ParsedCommand::Ignored`];
/// they produce no event, no error, and no state change.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommand {
    /// A recognized command, ready for dispatch.
    Known(Command),

    /// A frame the bridge does not understand.
    Ignored {
        /// The unrecognized `type` tag, if the frame carried one.
        tag: Option<String>,
    },
}

impl ParsedCommand {
    /// Decodes a raw JSON frame (Shape A).
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        if let Ok(command) = serde_json::from_str::<Command>(raw) {
            return Self::Known(command);
        }

        let tag = serde_json::from_str::<Value>(raw)
            .ok()
            .as_ref()
            .and_then(|v| v.get("type"))
            .and_then(|v| v.as_str())
            .map(str::to_owned);

        Self::Ignored { tag }
    }

    /// Returns `true` if the frame was not recognized.
    #[inline]
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }

    /// Extracts the command, if recognized.
    #[inline]
    #[must_use]
    pub fn known(self) -> Option<Command> {
        match self {
            Self::Known(command) => Some(command),
            Self::Ignored { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
