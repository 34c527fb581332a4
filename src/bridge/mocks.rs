//! Mock page seams for bridge tests.
//!
//! `MockDom` is a flat hit-test world (axis-aligned rectangles in CSS
//! pixels), `MockTransport` is a counted message sink, and `MockRenderer`
//! resolves to a canned payload or failure. All bookkeeping sits behind
//! `parking_lot` mutexes so the mocks satisfy the `Send + Sync` seam bounds.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::identifiers::NodeId;
use crate::page::{
    CaptureOptions, DomRenderer, FocusListener, HostTransport, PageDom, Viewport,
};
use crate::protocol::Event;

use super::Bridge;
use super::config::BridgeConfig;
use super::install::{InstallGuard, install};

// ============================================================================
// Helpers
// ============================================================================

/// Opt-in test diagnostics: `RUST_LOG=trace cargo test -- --nocapture`.
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Installs a bridge over the given mocks with a fresh guard.
pub(crate) fn installed_bridge(
    dom: &Arc<MockDom>,
    transport: &Arc<MockTransport>,
    renderer: Option<Arc<MockRenderer>>,
    config: BridgeConfig,
) -> Arc<Bridge> {
    init_test_logging();
    let dom: Arc<dyn PageDom> = dom.clone();
    let transport: Arc<dyn HostTransport> = transport.clone();
    let renderer: Option<Arc<dyn DomRenderer>> = match renderer {
        Some(r) => Some(r),
        None => None,
    };
    install(&InstallGuard::new(), dom, transport, renderer, config)
        .expect("fresh guard always installs")
}

/// Lets spawned capture tasks run to completion on the current-thread
/// test runtime.
pub(crate) async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned bounding box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub(crate) fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

// ============================================================================
// MockDom
// ============================================================================

/// Document surface mock with recorded interactions.
pub(crate) struct MockDom {
    device_pixel_ratio: f64,
    viewport: Viewport,
    elements: Vec<(NodeId, Rect)>,
    activations: Mutex<Vec<NodeId>>,
    pointer_clicks: Mutex<Vec<(NodeId, f64, f64)>>,
    history: Mutex<Vec<&'static str>>,
    focus_listeners: Mutex<Vec<FocusListener>>,
    blur_listeners: Mutex<Vec<FocusListener>>,
}

impl MockDom {
    pub(crate) fn new() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            viewport: Viewport {
                width: 800,
                height: 600,
                scroll_x: 0.0,
                scroll_y: 0.0,
            },
            elements: Vec::new(),
            activations: Mutex::new(Vec::new()),
            pointer_clicks: Mutex::new(Vec::new()),
            history: Mutex::new(Vec::new()),
            focus_listeners: Mutex::new(Vec::new()),
            blur_listeners: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub(crate) fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub(crate) fn with_element(mut self, node: NodeId, rect: Rect) -> Self {
        self.elements.push((node, rect));
        self
    }

    /// Fires a real focus transition through every registered listener.
    pub(crate) fn fire_focus(&self, target: &str) {
        let listeners: Vec<FocusListener> = self.focus_listeners.lock().clone();
        for listener in listeners {
            listener(target);
        }
    }

    /// Fires a real blur transition through every registered listener.
    pub(crate) fn fire_blur(&self, target: &str) {
        let listeners: Vec<FocusListener> = self.blur_listeners.lock().clone();
        for listener in listeners {
            listener(target);
        }
    }

    pub(crate) fn focus_listener_count(&self) -> usize {
        self.focus_listeners.lock().len()
    }

    pub(crate) fn blur_listener_count(&self) -> usize {
        self.blur_listeners.lock().len()
    }

    pub(crate) fn activations(&self) -> Vec<NodeId> {
        self.activations.lock().clone()
    }

    pub(crate) fn pointer_clicks(&self) -> Vec<(NodeId, f64, f64)> {
        self.pointer_clicks.lock().clone()
    }

    pub(crate) fn history(&self) -> Vec<&'static str> {
        self.history.lock().clone()
    }
}

impl PageDom for MockDom {
    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_from_point(&self, x: f64, y: f64) -> Option<NodeId> {
        self.elements
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(node, _)| *node)
    }

    fn activate(&self, node: NodeId) {
        self.activations.lock().push(node);
    }

    fn dispatch_pointer_click(&self, node: NodeId, x: f64, y: f64) {
        self.pointer_clicks.lock().push((node, x, y));
    }

    fn history_back(&self) {
        self.history.lock().push("back");
    }

    fn history_forward(&self) {
        self.history.lock().push("forward");
    }

    fn add_focus_listener(&self, listener: FocusListener) {
        self.focus_listeners.lock().push(listener);
    }

    fn add_blur_listener(&self, listener: FocusListener) {
        self.blur_listeners.lock().push(listener);
    }
}

// ============================================================================
// MockTransport
// ============================================================================

/// Counted outbound message sink.
pub(crate) struct MockTransport {
    messages: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Raw posted messages, in emission order.
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Posted messages decoded as flat-shape events.
    pub(crate) fn events(&self) -> Vec<Event> {
        self.messages()
            .iter()
            .map(|raw| serde_json::from_str(raw).expect("flat event frame"))
            .collect()
    }
}

impl HostTransport for MockTransport {
    fn post_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

// ============================================================================
// MockRenderer
// ============================================================================

/// DOM-to-image mock resolving to a canned payload or failure.
pub(crate) struct MockRenderer {
    response: std::result::Result<String, String>,
    calls: Mutex<u32>,
    last_options: Mutex<Option<CaptureOptions>>,
}

impl MockRenderer {
    pub(crate) fn succeeding(data_url: impl Into<String>) -> Self {
        Self {
            response: Ok(data_url.into()),
            calls: Mutex::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Mutex::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        *self.calls.lock()
    }

    pub(crate) fn last_options(&self) -> Option<CaptureOptions> {
        self.last_options.lock().clone()
    }
}

#[async_trait]
impl DomRenderer for MockRenderer {
    async fn render_png(&self, options: &CaptureOptions) -> Result<String> {
        *self.calls.lock() += 1;
        *self.last_options.lock() = Some(options.clone());
        match &self.response {
            Ok(data_url) => Ok(data_url.clone()),
            Err(message) => Err(Error::capture(message.clone())),
        }
    }
}
