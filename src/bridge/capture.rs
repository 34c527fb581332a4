//! Asynchronous screenshot capture.
//!
//! Each `Screenshot` command spawns one independent task; nothing coalesces
//! or serializes concurrent captures, so completions may interleave and
//! arrive out of order. There is no cancellation and no request/response
//! correlation; a host wanting a timeout applies its own.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::{debug, warn};

use crate::page::{CaptureOptions, HostTransport, PNG_DATA_URI_PREFIX};
use crate::protocol::{Event, WireShape};

use super::Bridge;

// ============================================================================
// Bridge - Capture
// ============================================================================

impl Bridge {
    /// Starts one capture task and returns immediately.
    ///
    /// Viewport metrics are sampled synchronously at dispatch time; the task
    /// itself only holds the renderer, the transport, and the wire shape.
    /// Without a configured renderer, or when the calling thread has no
    /// async runtime, this is a logged no-op; dispatch must never panic on
    /// valid input.
    pub(crate) fn spawn_capture(&self) {
        let Some(renderer) = self.renderer.clone() else {
            debug!("screenshot command ignored: no renderer configured");
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("screenshot command ignored: no async runtime on this thread");
            return;
        };

        let options = CaptureOptions::for_viewport(
            self.dom.viewport(),
            self.config.capture_background.clone(),
        );
        let transport = Arc::clone(&self.transport);
        let shape = self.config.wire_shape;

        runtime.spawn(async move {
            match renderer.render_png(&options).await {
                Ok(data_url) => {
                    let payload = strip_data_uri_prefix(&data_url);
                    debug!(payload_len = payload.len(), "captured screenshot");
                    post_event(shape, transport.as_ref(), &Event::screenshot(payload));
                }
                // Swallowed: the host tolerates a missing response.
                Err(err) => warn!(error = %err, "screenshot capture failed"),
            }
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Strips the PNG data-URI prefix when present.
fn strip_data_uri_prefix(data_url: &str) -> &str {
    data_url.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(data_url)
}

/// Encodes and posts one event; encoding failures are logged and dropped.
fn post_event(shape: WireShape, transport: &dyn HostTransport, event: &Event) {
    match shape.encode(event) {
        Ok(message) => transport.post_message(&message),
        Err(err) => warn!(error = %err, "dropping unencodable event"),
    }
}

// ============================================================================
// Tests
// ============================================================================
