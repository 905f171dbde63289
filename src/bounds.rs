//! BoundsTracker - normalized signals from raw scroll events.
//!
//! The host forwards every raw event here (offset, content size, viewport
//! bounds, insets, gesture phase); the tracker turns them into the small set
//! of clean signals the engine consumes:
//!
//! - `fitted_content_size`: latest fully laid-out size, deduplicated on height
//! - `viewport_height`: latest non-zero viewport height, deduplicated
//! - bounce queries derived from the current offset and insets
//!
//! Zero sizes/heights mean "not yet laid out" and are never emitted; outputs
//! stay `None` until the first real value arrives. There are no error states:
//! malformed input simply withholds emission.

use std::cell::RefCell;

use spark_signals::effect;

use crate::relay::Relay;
use crate::types::{EdgeInsets, Point, Rect, ScrollPhase, Size};

/// Derives normalized signals from raw scroll/content events.
pub struct BoundsTracker {
    // Raw inputs, fed by the host.
    pub(crate) offset: Relay<Point>,
    pub(crate) content_size: Relay<Size>,
    pub(crate) viewport: Relay<Rect>,
    pub(crate) content_inset: Relay<EdgeInsets>,
    pub(crate) phase: Relay<ScrollPhase>,

    // Normalized outputs, maintained by internal effects.
    pub(crate) fitted_content_size: Relay<Option<Size>>,
    pub(crate) viewport_height: Relay<Option<f64>>,

    stops: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl BoundsTracker {
    pub fn new() -> Self {
        let offset = Relay::new(Point::ZERO);
        let content_size = Relay::new(Size::ZERO);
        let viewport = Relay::new(Rect::ZERO);
        let content_inset = Relay::new(EdgeInsets::ZERO);
        let phase = Relay::new(ScrollPhase::empty());
        let fitted_content_size: Relay<Option<Size>> = Relay::new(None);
        let viewport_height = Relay::new(None);

        let mut stops: Vec<Box<dyn FnOnce()>> = Vec::new();

        {
            let content_size = content_size.clone();
            let fitted = fitted_content_size.clone();
            stops.push(Box::new(effect(move || {
                let size = content_size.get();
                if size.is_empty() {
                    return;
                }
                match fitted.value() {
                    Some(previous) if previous.height == size.height => {}
                    _ => fitted.set(Some(size)),
                }
            })));
        }

        {
            let viewport = viewport.clone();
            let viewport_height = viewport_height.clone();
            stops.push(Box::new(effect(move || {
                let height = viewport.get().height;
                if height == 0.0 {
                    return;
                }
                if viewport_height.value() != Some(height) {
                    viewport_height.set(Some(height));
                }
            })));
        }

        Self {
            offset,
            content_size,
            viewport,
            content_inset,
            phase,
            fitted_content_size,
            viewport_height,
            stops: RefCell::new(stops),
        }
    }

    // =========================================================================
    // Raw event feeds
    // =========================================================================

    pub fn set_offset(&self, offset: Point) {
        self.offset.set(offset);
    }

    pub fn set_content_size(&self, size: Size) {
        self.content_size.set(size);
    }

    pub fn set_viewport(&self, bounds: Rect) {
        self.viewport.set(bounds);
    }

    pub fn set_content_inset(&self, inset: EdgeInsets) {
        self.content_inset.set(inset);
    }

    pub fn set_phase(&self, phase: ScrollPhase) {
        self.phase.set(phase);
    }

    // =========================================================================
    // Current-value queries
    // =========================================================================

    pub fn offset(&self) -> Point {
        self.offset.value()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase.value()
    }

    /// Offset is above the top inset boundary (rubber-banding at the top).
    pub fn is_bouncing_top(&self) -> bool {
        self.offset.value().y < -self.content_inset.value().top
    }

    /// Content fills the viewport and the offset is past the bottom boundary.
    pub fn is_bouncing_bottom(&self) -> bool {
        let content = self.content_size.value();
        let inset = self.content_inset.value();
        let viewport_height = self.viewport.value().height;

        let content_fills_scroll_edges =
            content.height + inset.top + inset.bottom >= viewport_height;
        content_fills_scroll_edges
            && self.offset.value().y > content.height - viewport_height + inset.bottom
    }

    pub fn is_bouncing(&self) -> bool {
        self.is_bouncing_top() || self.is_bouncing_bottom()
    }
}

impl Default for BoundsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BoundsTracker {
    fn drop(&mut self) {
        for stop in self.stops.borrow_mut().drain(..) {
            stop();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
