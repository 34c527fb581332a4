//! Wire framing for the host/page boundary.
//!
//! Two outbound envelope shapes exist across deployed bridge variants, and a
//! host decoder matches exactly one of them. The shape is an explicit
//! [`WireShape`] choice made per deployment, never mixed, never guessed.
//!
//! # Outbound Shapes
//!
//! | Shape | Format |
//! |-------|--------|
//! | [`WireShape::Flat`] | `{ "type": "Focus", "target": "id" }` |
//! | [`WireShape::Marked`] | `{ "event": { "type": "Focus", "target": "id" }, "__egui_webview": true }` |
//!
//! The `Marked` shape nests the payload under an `event` key alongside a
//! fixed boolean marker the host uses to tell bridge traffic apart from
//! other page messages. The marker key is kept byte-identical to the
//! decoders already in the field.
//!
//! # Inbound
//!
//! Commands always arrive as Shape A (`{ "type": ..., ...fields }`) through
//! the globally reachable entry point named by [`ENTRY_POINT`].

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

use super::command::Command;
use super::event::Event;

// ============================================================================
// Constants
// ============================================================================

/// Name of the page-global command entry point.
///
/// Collision-resistant on purpose: nothing else in a page is likely to claim
/// this identifier, and its presence doubles as the installation marker.
pub const ENTRY_POINT: &str = "__webview_bridge_handle_command";

/// Key under which the `Marked` shape nests the event payload.
pub const EVENT_KEY: &str = "event";

/// Fixed boolean marker key of the `Marked` shape.
///
/// Host decoders in the field match this key byte-for-byte; it must not be
/// renamed without migrating every deployment.
pub const EVENT_MARKER: &str = "__egui_webview";

// ============================================================================
// WireShape
// ============================================================================

/// Outbound envelope shape for events.
///
/// One shape per deployment; the host-side decoder must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireShape {
    /// Shape A: tag and fields flattened into one top-level object.
    #[default]
    Flat,

    /// Shape B: payload nested under [`EVENT_KEY`] next to [`EVENT_MARKER`].
    Marked,
}

impl WireShape {
    /// Encodes an event into its wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn encode(&self, event: &Event) -> Result<String> {
        let json = match self {
            Self::Flat => serde_json::to_string(event)?,
            Self::Marked => {
                let mut envelope = serde_json::Map::new();
                envelope.insert(EVENT_KEY.to_string(), serde_json::to_value(event)?);
                envelope.insert(EVENT_MARKER.to_string(), Value::Bool(true));
                serde_json::to_string(&Value::Object(envelope))?
            }
        };
        Ok(json)
    }
}

// ============================================================================
// Command Invocation
// ============================================================================

/// Renders the invocation expression a script-injection transport evaluates
/// in the page to deliver a command.
///
/// The command is serialized as Shape A and passed as the single argument of
/// the [`ENTRY_POINT`] global:
///
/// ```text
/// __webview_bridge_handle_command({"type":"Back"})
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn command_invocation(command: &Command) -> Result<String> {
    let json = serde_json::to_string(command)?;
    Ok(format!("{ENTRY_POINT}({json})"))
}

// ============================================================================
// Tests
// ============================================================================
