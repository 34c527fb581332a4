//! Seams between the bridge and its hosting page.
//!
//! The bridge never touches a real DOM, renderer, or message channel
//! directly; it goes through the three traits here. The embedder implements
//! them over the actual page runtime, and tests implement them with mocks.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dom` | Document surface: hit-testing, history, listeners |
//! | `render` | Asynchronous DOM-to-image capability |
//! | `transport` | Outbound message-post primitive |

// ============================================================================
// Submodules
// ============================================================================

/// Document surface seam.
pub mod dom;

/// DOM-to-image rendering seam.
pub mod render;

/// Outbound host transport seam.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

pub use dom::{FocusListener, PageDom, Viewport};
pub use render::{CaptureOptions, DomRenderer, PNG_DATA_URI_PREFIX};
pub use transport::HostTransport;
