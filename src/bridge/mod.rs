//! The bridge: installation guard, command dispatcher, DOM listeners, and
//! screenshot capture.
//!
//! One bridge instance is active per page. [`install`] is the single guarded
//! entry point; it wires the listeners, exposes the dispatcher, and is a
//! no-op on re-injection. Everything the bridge does is synchronous and
//! run-to-completion except capture, which spawns an independent task per
//! command.
//!
//! ```text
//! ┌──────────┐   Command (Shape A)    ┌──────────────────┐
//! │   Host   │───────────────────────►│  Bridge.dispatch │──► PageDom
//! │          │                        │                  │
//! │          │◄───────────────────────│  send_event      │◄── focus/blur
//! └──────────┘   Event (Flat/Marked)  └──────────────────┘◄── capture task
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Wire-shape and click-strategy deployment choices |
//! | `install` | Installation guard and listener registration |
//! | `dispatch` | Command dispatcher |
//! | `listeners` | Event emission and focus/blur callbacks |
//! | `capture` | Asynchronous screenshot capture |

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::page::{DomRenderer, HostTransport, PageDom};

// ============================================================================
// Submodules
// ============================================================================

/// Wire-shape and click-strategy deployment choices.
pub mod config;

/// Installation guard and the guarded entry point.
pub mod install;

/// Command dispatcher.
mod dispatch;

/// Event emission and focus/blur callbacks.
mod listeners;

/// Asynchronous screenshot capture.
mod capture;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{BridgeConfig, ClickStrategy};
pub use install::{InstallGuard, install};

// ============================================================================
// Bridge
// ============================================================================

/// The installed bridge instance.
///
/// Holds the three page seams and the deployment configuration. Constructed
/// only through [`install`]; the host transport invokes
/// [`handle_raw`](Bridge::handle_raw) with inbound frames, and the DOM
/// listeners call back into the emission paths.
pub struct Bridge {
    /// Document surface.
    pub(crate) dom: Arc<dyn PageDom>,

    /// Outbound message channel.
    pub(crate) transport: Arc<dyn HostTransport>,

    /// DOM-to-image capability; absent in the variant without capture.
    pub(crate) renderer: Option<Arc<dyn DomRenderer>>,

    /// Deployment configuration.
    pub(crate) config: BridgeConfig,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("config", &self.config)
            .field("has_renderer", &self.renderer.is_some())
            .finish()
    }
}
