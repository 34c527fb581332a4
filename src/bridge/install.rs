//! Installation guard and the guarded entry point.
//!
//! A page may inject the bridge more than once (in-page navigation commonly
//! re-runs injection), so installation must be idempotent. The guard is an
//! explicit state cell created once per page at setup time; [`install`] is
//! the only code path that checks and sets it.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::page::{DomRenderer, FocusListener, HostTransport, PageDom};

use super::Bridge;
use super::config::BridgeConfig;

// ============================================================================
// InstallGuard
// ============================================================================

/// One-shot installation flag for a page.
///
/// Created by the embedder at page setup, alongside the page seams, and
/// written exactly once. Page scripting is single-threaded, so the flag is
/// never contested; the atomic merely keeps the type `Sync` without a lock.
#[derive(Debug, Default)]
pub struct InstallGuard {
    installed: AtomicBool,
}

impl InstallGuard {
    /// Creates a fresh guard.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// Returns `true` once a bridge has been installed.
    #[inline]
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::Acquire)
    }

    /// Claims the guard. Returns `false` if it was already claimed.
    fn try_claim(&self) -> bool {
        !self.installed.swap(true, Ordering::AcqRel)
    }
}

// ============================================================================
// install
// ============================================================================

/// Installs the bridge: registers both DOM listeners and the command
/// handler, then returns the instance.
///
/// Re-entrant injection is an idempotent no-op: if `guard` is already
/// claimed, nothing is registered and `None` is returned. This guarantees
/// exactly one active listener set per page regardless of how many times the
/// setup script runs.
///
/// Pass `renderer: None` for the variant without screenshot support; the
/// `Screenshot` command then degrades to a logged no-op.
pub fn install(
    guard: &InstallGuard,
    dom: Arc<dyn PageDom>,
    transport: Arc<dyn HostTransport>,
    renderer: Option<Arc<dyn DomRenderer>>,
    config: BridgeConfig,
) -> Option<Arc<Bridge>> {
    if !guard.try_claim() {
        debug!("bridge already installed, ignoring re-injection");
        return None;
    }

    let bridge = Arc::new(Bridge {
        dom,
        transport,
        renderer,
        config,
    });
    bridge.register_listeners();

    debug!(config = ?bridge.config, "bridge installed");
    Some(bridge)
}

// ============================================================================
// Listener Registration
// ============================================================================

impl Bridge {
    /// Hooks the focus/blur emission paths into the document.
    ///
    /// Called exactly once, from [`install`]. The closures keep the bridge
    /// alive for the rest of the page's lifetime; there is no teardown.
    fn register_listeners(self: &Arc<Self>) {
        let bridge = Arc::clone(self);
        let on_focus: FocusListener = Arc::new(move |target: &str| bridge.on_focus(target));
        self.dom.add_focus_listener(on_focus);

        let bridge = Arc::clone(self);
        let on_blur: FocusListener = Arc::new(move |target: &str| bridge.on_blur(target));
        self.dom.add_blur_listener(on_blur);
    }
}

// ============================================================================
// Tests
// ============================================================================
