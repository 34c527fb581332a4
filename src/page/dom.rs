//! Document surface seam.
//!
//! [`PageDom`] is the bridge's view of the hosting page: hit-testing,
//! element activation, session history, viewport metrics, and listener
//! registration. The embedder implements it over whatever the actual page
//! runtime offers; tests implement it with counters.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::identifiers::NodeId;

// ============================================================================
// Types
// ============================================================================

/// Callback invoked on a focus or blur transition.
///
/// The argument is the identifier of the event target, possibly empty.
pub type FocusListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Viewport metrics sampled at capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible width in CSS pixels.
    pub width: u32,
    /// Visible height in CSS pixels.
    pub height: u32,
    /// Horizontal scroll offset in CSS pixels.
    pub scroll_x: f64,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
}

// ============================================================================
// PageDom
// ============================================================================

/// The document surface the bridge operates on.
///
/// Every method is synchronous and must run to completion without
/// suspension; the page's own event loop drives all scheduling.
pub trait PageDom: Send + Sync {
    /// Ratio of physical pixels to CSS pixels for the current display.
    fn device_pixel_ratio(&self) -> f64;

    /// Current viewport metrics.
    fn viewport(&self) -> Viewport;

    /// Resolves the topmost element at a point in CSS pixels.
    ///
    /// Returns `None` when no element occupies the point.
    fn element_from_point(&self, x: f64, y: f64) -> Option<NodeId>;

    /// Triggers a generic activation on an element, carrying no position.
    fn activate(&self, node: NodeId);

    /// Dispatches a synthesized bubbling, cancelable pointer click carrying
    /// the given client coordinates, so page-level listeners see a realistic
    /// event.
    fn dispatch_pointer_click(&self, node: NodeId, x: f64, y: f64);

    /// Navigates back in session history. Empty history is a silent no-op.
    fn history_back(&self);

    /// Navigates forward in session history. Empty history is a silent no-op.
    fn history_forward(&self);

    /// Registers a passive listener for document focus transitions.
    fn add_focus_listener(&self, listener: FocusListener);

    /// Registers a passive listener for document blur transitions.
    fn add_blur_listener(&self, listener: FocusListener);
}
