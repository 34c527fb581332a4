//! Bridge deployment configuration.
//!
//! Two decisions vary across deployed bridge variants and are deliberately
//! explicit instead of guessed: the outbound envelope shape and the click
//! activation strategy. Both live here, next to the capture background.
//!
//! # Example
//!
//! ```ignore
//! use webview_bridge::{BridgeConfig, ClickStrategy, WireShape};
//!
//! let config = BridgeConfig::new()
//!     .with_wire_shape(WireShape::Marked)
//!     .with_click_strategy(ClickStrategy::Activate);
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::protocol::WireShape;

// ============================================================================
// ClickStrategy
// ============================================================================

/// How a resolved click target is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickStrategy {
    /// Generic activation carrying no position.
    Activate,

    /// Synthesized bubbling, cancelable pointer click carrying the computed
    /// client coordinates, so page-level listeners see realistic positions.
    #[default]
    PointerEvent,
}

// ============================================================================
// BridgeConfig
// ============================================================================

/// Per-deployment bridge configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Outbound envelope shape. The host decoder must match exactly.
    pub wire_shape: WireShape,

    /// Click activation strategy.
    pub click_strategy: ClickStrategy,

    /// CSS background forced onto captures to avoid transparent artifacts.
    pub capture_background: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            wire_shape: WireShape::Flat,
            click_strategy: ClickStrategy::PointerEvent,
            capture_background: "white".to_string(),
        }
    }
}

// ============================================================================
// Constructors & Builder Methods
// ============================================================================

impl BridgeConfig {
    /// Creates a configuration with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outbound envelope shape.
    #[inline]
    #[must_use]
    pub fn with_wire_shape(mut self, shape: WireShape) -> Self {
        self.wire_shape = shape;
        self
    }

    /// Sets the click activation strategy.
    #[inline]
    #[must_use]
    pub fn with_click_strategy(mut self, strategy: ClickStrategy) -> Self {
        self.click_strategy = strategy;
        self
    }

    /// Sets the capture background color.
    #[inline]
    #[must_use]
    pub fn with_capture_background(mut self, background: impl Into<String>) -> Self {
        self.capture_background = background.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
