//! Event emission and the focus/blur callbacks.
//!
//! The two document listeners are passive: they never suspend, never block,
//! and forward every transition independently, with no de-duplication or
//! debouncing. Hosts must tolerate rapid and duplicate sequences, including
//! synthetic transitions triggered by `Click` dispatch.

// ============================================================================
// Imports
// ============================================================================

use tracing::{trace, warn};

use crate::protocol::Event;

use super::Bridge;

// ============================================================================
// Bridge - Emission
// ============================================================================

impl Bridge {
    /// Focus listener body: forwards the transition to the host.
    pub(crate) fn on_focus(&self, target: &str) {
        trace!(target_id = target, "focus transition");
        self.send_event(&Event::focus(target));
    }

    /// Blur listener body: forwards the transition to the host.
    pub(crate) fn on_blur(&self, target: &str) {
        trace!(target_id = target, "blur transition");
        self.send_event(&Event::blur(target));
    }

    /// Serializes an event per the configured wire shape and posts it.
    ///
    /// Fire-and-forget: no acknowledgement, no retry. An encoding failure is
    /// logged and swallowed; nothing may propagate toward the host.
    pub(crate) fn send_event(&self, event: &Event) {
        match self.config.wire_shape.encode(event) {
            Ok(message) => self.transport.post_message(&message),
            Err(err) => warn!(error = %err, "dropping unencodable event"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
