//! DOM-to-image rendering seam.
//!
//! Screenshot capture delegates the actual rasterization to an external
//! capability behind [`DomRenderer`]: in a real page this is a DOM-to-image
//! library; in tests it is a canned future. The bridge only decides *what*
//! to capture (the visible viewport) and post-processes the result.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;

use super::dom::Viewport;

// ============================================================================
// Constants
// ============================================================================

/// Data-URI prefix renderers put in front of the base64 payload.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// ============================================================================
// CaptureOptions
// ============================================================================

/// Rendering parameters for one capture.
///
/// Width and height pin the output to the visible viewport; the translation
/// shifts content by the negated scroll offset so the capture aligns with
/// what is on screen rather than the full scrollable area; the background
/// fills what would otherwise rasterize as transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Output width in CSS pixels.
    pub width: u32,
    /// Output height in CSS pixels.
    pub height: u32,
    /// Horizontal content translation in CSS pixels.
    pub translate_x: f64,
    /// Vertical content translation in CSS pixels.
    pub translate_y: f64,
    /// CSS background color forced onto the capture.
    pub background: String,
}

impl CaptureOptions {
    /// Builds options that capture the visible viewport.
    #[must_use]
    pub fn for_viewport(viewport: Viewport, background: impl Into<String>) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            translate_x: -viewport.scroll_x,
            translate_y: -viewport.scroll_y,
            background: background.into(),
        }
    }
}

// ============================================================================
// DomRenderer
// ============================================================================

/// Asynchronous DOM-to-image capability.
///
/// This is the bridge's only suspension point: while a render is in flight
/// the page keeps processing DOM events and further commands. Multiple
/// renders may be in flight at once and may complete out of order.
#[async_trait]
pub trait DomRenderer: Send + Sync {
    /// Renders the document body to a PNG.
    ///
    /// Returns either a `data:image/png;base64,` URI or the bare base64
    /// payload; the bridge strips the prefix when present.
    ///
    /// # Errors
    ///
    /// Implementations report failures however they like; the bridge logs
    /// the error and emits nothing.
    async fn render_png(&self, options: &CaptureOptions) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================
