//! Webview bridge - bidirectional command/event plumbing for embedded pages.
//!
//! This library models the script a native host injects into an embedded
//! web-content surface: the host sends discrete **commands** (simulate
//! click, navigate back/forward, capture screenshot) into the page, and the
//! page sends discrete **events** (focus/blur transitions, screenshot
//! results) back over a one-way message channel.
//!
//! # Architecture
//!
//! The bridge is a single finite dispatcher plus two passive listeners:
//!
//! - **Host → Page**: commands arrive as Shape A frames through the
//!   globally reachable entry point and hit an exhaustive dispatcher.
//! - **Page → Host**: events ride the one message-post primitive of the
//!   hosting environment, framed per the configured [`WireShape`].
//!
//! The page environment itself (hit-testing, session history, viewport
//! metrics, DOM-to-image rendering, the outbound channel) sits behind the
//! traits in [`page`], implemented by the embedder.
//!
//! Key design principles:
//!
//! - Installation is **idempotent**: re-injection is a no-op via
//!   [`InstallGuard`]; at most one listener set is ever active per page.
//! - Dispatch is **run-to-completion**: only screenshot capture suspends,
//!   as an independent fire-and-forget task per command.
//! - Failure is **silent by design**: capture errors are logged and
//!   swallowed, missing click targets skipped, unknown commands ignored.
//!   Nothing here is fatal to the host.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use webview_bridge::{BridgeConfig, InstallGuard, WireShape, install};
//!
//! // Page-setup time: one guard, one set of seams.
//! let guard = InstallGuard::new();
//! let config = BridgeConfig::new().with_wire_shape(WireShape::Flat);
//!
//! let bridge = install(&guard, dom, transport, Some(renderer), config)
//!     .expect("first injection");
//!
//! // Host transport delivers inbound frames:
//! bridge.handle_raw(r#"{"type":"Click","x":30.0,"y":10.0}"#);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bridge`] | Guarded installation, dispatcher, listeners, capture |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe handle wrappers |
//! | [`page`] | Seams the embedder implements over the page runtime |
//! | [`protocol`] | Command/Event types and wire framing |

// ============================================================================
// Modules
// ============================================================================

/// Guarded installation, command dispatch, listeners, and capture.
pub mod bridge;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for page entities.
///
/// Newtype wrappers prevent mixing incompatible handles at compile time.
pub mod identifiers;

/// Seams between the bridge and its hosting page.
pub mod page;

/// Message types crossing the host/page boundary.
pub mod protocol;

// ============================================================================
// Re-exports
// ============================================================================

// Bridge types
pub use bridge::{Bridge, BridgeConfig, ClickStrategy, InstallGuard, install};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::NodeId;

// Page seams
pub use page::{
    CaptureOptions, DomRenderer, FocusListener, HostTransport, PNG_DATA_URI_PREFIX, PageDom,
    Viewport,
};

// Protocol types
pub use protocol::{
    Command, ENTRY_POINT, EVENT_KEY, EVENT_MARKER, Event, ParsedCommand, WireShape,
    command_invocation,
};
