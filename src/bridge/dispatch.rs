//! Command dispatcher.
//!
//! The dispatcher is a pure switch: each invocation handles exactly one
//! command synchronously, with no queueing and no fall-through. `Screenshot`
//! is the one exception: it kicks off asynchronous work and returns
//! immediately. Failure paths all degrade to "no observable effect": missing
//! click targets are skipped, empty history is a silent no-op, unrecognized
//! frames are ignored.

// ============================================================================
// Imports
// ============================================================================

use tracing::{debug, trace};

use crate::protocol::{Command, ParsedCommand};

use super::Bridge;
use super::config::ClickStrategy;

// ============================================================================
// Bridge - Dispatch
// ============================================================================

impl Bridge {
    /// Entry point the host transport invokes with a raw inbound frame.
    ///
    /// Decodes Shape A and dispatches. Unknown or malformed frames are
    /// silently ignored; no error is raised or reported.
    pub fn handle_raw(&self, raw: &str) {
        match ParsedCommand::from_json(raw) {
            ParsedCommand::Known(command) => self.dispatch(command),
            ParsedCommand::Ignored { tag } => {
                trace!(?tag, "ignoring unrecognized command frame");
            }
        }
    }

    /// Dispatches one decoded command.
    pub fn dispatch(&self, command: Command) {
        debug!(?command, "dispatching command");
        match command {
            Command::Click { x, y } => self.click(x, y),
            Command::Back => self.dom.history_back(),
            Command::Forward => self.dom.history_forward(),
            Command::Screenshot => self.spawn_capture(),
        }
    }

    /// Resolves and activates the element under a click.
    ///
    /// The host sends coordinates pre-divided by its UI scale factor, so
    /// scaling by the device pixel ratio lands back in CSS pixels. Keep the
    /// direction in sync with the host; both ends must change together.
    fn click(&self, x: f64, y: f64) {
        let ratio = self.dom.device_pixel_ratio();
        let (client_x, client_y) = (x * ratio, y * ratio);

        let Some(node) = self.dom.element_from_point(client_x, client_y) else {
            trace!(x = client_x, y = client_y, "no element at click point");
            return;
        };

        match self.config.click_strategy {
            ClickStrategy::Activate => self.dom.activate(node),
            ClickStrategy::PointerEvent => {
                self.dom.dispatch_pointer_click(node, client_x, client_y);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
