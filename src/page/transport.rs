//! Outbound host transport seam.
//!
//! The hosting environment exposes exactly one outbound channel: a
//! message-post primitive. The bridge serializes events and hands them over
//! here: fire-and-forget, at-most-once, with no acknowledgement or retry
//! beyond whatever the transport itself provides.

// ============================================================================
// HostTransport
// ============================================================================

/// The single outbound channel toward the host.
///
/// Implementations must tolerate interleaved calls from multiple capture
/// completions; the bridge guarantees ordering only within one call stack.
pub trait HostTransport: Send + Sync {
    /// Posts one serialized event to the host. Must not block or panic.
    fn post_message(&self, message: &str);
}
