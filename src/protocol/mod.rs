//! Message types crossing the host/page boundary.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `Command` | Host → Page | Instruct an action |
//! | `Event` | Page → Host | Report an occurrence or result |
//!
//! Commands always decode as Shape A; events encode in one of two envelope
//! shapes chosen per deployment (see [`wire`]). Both directions ride a single
//! message-post primitive provided by the hosting environment; the bridge
//! opens no channel of its own.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Command definitions and inbound decoding |
//! | `event` | Event definitions and payload helpers |
//! | `wire` | Envelope shapes and entry-point naming |

// ============================================================================
// Submodules
// ============================================================================

/// Command definitions and inbound decoding.
pub mod command;

/// Event definitions and payload helpers.
pub mod event;

/// Envelope shapes and entry-point naming.
pub mod wire;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{Command, ParsedCommand};
pub use event::Event;
pub use wire::{ENTRY_POINT, EVENT_KEY, EVENT_MARKER, WireShape, command_invocation};
