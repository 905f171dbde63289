//! SyncEngine - the connect/disconnect state machine and its subscriptions.
//!
//! The engine binds a collapsible header to a scrollable content view in both
//! directions: scroll-offset deltas become header heights while connected,
//! and header-height writes become offset corrections while disconnected.
//!
//! Subscription model: every reactive edge is a `spark-signals` effect whose
//! stop function is collected into one of three sets:
//!
//! - `base`: constructor-lifetime (header sink, inset recompute)
//! - `active`: installed by `connect()` (offset tracking, max-height pin,
//!   direction follow)
//! - `inactive`: installed by `disconnect()` (height drives offset)
//!
//! `connect()`/`disconnect()` dispose the other set before installing their
//! own, so at most one binding set is live at a time. Drop disposes all
//! three unconditionally.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use spark_signals::effect;
use tracing::{debug, warn};

use crate::bounds::BoundsTracker;
use crate::config::{HeaderConfig, clamp_height};
use crate::direction::DirectionDetector;
use crate::host::ScrollHost;
use crate::types::{EdgeInsets, Point};

// =============================================================================
// Connection Status
// =============================================================================

/// Lifecycle of the engine's binding to the host view.
///
/// `None` is only the initial state and is never re-entered; afterwards the
/// engine alternates between `Connected` and `Disconnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    None,
    Connected,
    Disconnected,
}

// =============================================================================
// SyncEngine
// =============================================================================

/// Synchronizes header height with the scroll offset of the host view.
pub struct SyncEngine {
    host: Weak<dyn ScrollHost>,
    tracker: Rc<BoundsTracker>,
    config: HeaderConfig,
    connection: Cell<ConnectionStatus>,
    /// Scroll-offset value treated as the fully-expanded reference point.
    /// Re-anchored on connect and on direction reversals in follow mode.
    collapsing_border: Rc<Cell<f64>>,
    inverted_bounds_flagged: Rc<Cell<bool>>,
    active: RefCell<Vec<Box<dyn FnOnce()>>>,
    inactive: RefCell<Vec<Box<dyn FnOnce()>>>,
    base: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl SyncEngine {
    /// Bind the engine to a host view.
    ///
    /// Installs the constructor-lifetime subscriptions (header sink and inset
    /// recompute) immediately; live offset tracking starts with [`connect`].
    ///
    /// The engine keeps only a weak reference to `host`: once the host is
    /// dropped every reactive step degrades to a no-op.
    ///
    /// [`connect`]: SyncEngine::connect
    pub fn new(host: &Rc<dyn ScrollHost>, tracker: Rc<BoundsTracker>, config: HeaderConfig) -> Self {
        let host = Rc::downgrade(host);
        let mut base: Vec<Box<dyn FnOnce()>> = Vec::new();

        // Header sink: deliver every height change (including the initial
        // value) to the header-rendering collaborator.
        {
            let header_height = config.header_height.clone();
            let host = host.clone();
            base.push(Box::new(effect(move || {
                let height = header_height.get();
                if let Some(host) = host.upgrade() {
                    host.header_height_did_change(height);
                }
            })));
        }

        // Inset recompute: combine content size, viewport height, and max
        // header height; fires once all three have produced a value and on
        // each change thereafter.
        {
            let tracker = tracker.clone();
            let config = config.clone();
            let host = host.clone();
            base.push(Box::new(effect(move || {
                let (Some(content), Some(viewport_height)) = (
                    tracker.fitted_content_size.get(),
                    tracker.viewport_height.get(),
                ) else {
                    return;
                };
                let max_height = config.max_height.get();
                let Some(host) = host.upgrade() else {
                    return;
                };

                let extra = host.extra_inset();
                let inset = config.inset.value();
                let top = max_height + inset + extra.top;
                let bottom = (viewport_height
                    - (content.height + config.min_height.value() + inset + extra.bottom))
                    .max(extra.bottom);

                host.set_content_inset(EdgeInsets::new(top, bottom));
                host.set_indicator_inset(EdgeInsets::new(top, 0.0));

                // Keeps the header anchored through content-size changes while
                // the user is not interacting. Known imprecision: this can
                // cause a visible offset jump; `snap_on_resize` turns it off.
                let offset = tracker.offset.value();
                if offset.y <= 0.0 && config.snap_on_resize.value() {
                    let adjusted_y = -(config.header_height.value() + inset);
                    host.set_content_offset(Point::new(offset.x, adjusted_y));
                }
            })));
        }

        Self {
            host,
            tracker,
            config,
            connection: Cell::new(ConnectionStatus::None),
            collapsing_border: Rc::new(Cell::new(0.0)),
            inverted_bounds_flagged: Rc::new(Cell::new(false)),
            active: RefCell::new(Vec::new()),
            inactive: RefCell::new(Vec::new()),
            base: RefCell::new(base),
        }
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.connection.get()
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Start live tracking: offset changes drive the header height.
    ///
    /// Idempotent; a second `connect()` while connected is a no-op.
    pub fn connect(&self) {
        if self.connection.get() == ConnectionStatus::Connected {
            return;
        }
        self.connection.set(ConnectionStatus::Connected);

        let Some(host) = self.host.upgrade() else {
            return;
        };
        debug!("collapsing header connected");

        // Align content with the current header size before live tracking
        // starts.
        if self.tracker.offset.value().y <= 0.0 {
            let target = -(self.config.header_height.value() + self.config.inset.value());
            host.set_content_offset(Point::new(0.0, target));
        }

        // At most one binding set at a time.
        self.dispose_active();
        self.dispose_inactive();

        let mut active = self.active.borrow_mut();

        // Offset -> header height. Only acts while the view is actively
        // being manipulated or follow_offset_changes is set, so programmatic
        // scrolls don't fight the header.
        {
            let tracker = self.tracker.clone();
            let config = self.config.clone();
            let border = self.collapsing_border.clone();
            let flagged = self.inverted_bounds_flagged.clone();
            let first_run = Cell::new(true);
            let last_seen = Cell::new(self.tracker.offset.value());
            active.push(Box::new(effect(move || {
                let point = tracker.offset.get();
                if first_run.replace(false) {
                    return;
                }
                if last_seen.replace(point) == point {
                    return;
                }
                if !tracker.phase.value().is_active() && !config.follow_offset_changes.value() {
                    return;
                }

                let min = config.min_height.value();
                let max = config.max_height.value();
                if min > max && !flagged.replace(true) {
                    warn!(min, max, "min_height exceeds max_height; max bound wins the clamp");
                }
                let height = clamp_height(border.get() - point.y - config.inset.value(), min, max);
                config.header_height.set_if_changed(height);
            })));
        }

        // Max-height pin: when the maximum becomes exactly the current header
        // height, snap content so the header sits fully expanded.
        {
            let config = self.config.clone();
            let host = self.host.clone();
            let first_run = Cell::new(true);
            active.push(Box::new(effect(move || {
                let max_height = config.max_height.get();
                if first_run.replace(false) {
                    return;
                }
                if max_height == config.header_height.value() {
                    if let Some(host) = host.upgrade() {
                        host.set_content_offset(Point::new(
                            0.0,
                            -(max_height + config.inset.value()),
                        ));
                    }
                }
            })));
        }

        if host.follow_direction() {
            // Anchor the collapse reference at the post-alignment offset.
            let offset_y = self.tracker.offset.value().y;
            let anchor = (offset_y
                + self.config.header_height.value()
                + self.config.inset.value())
            .max(0.0);
            self.collapsing_border.set(anchor);

            let tracker = self.tracker.clone();
            let config = self.config.clone();
            let border = self.collapsing_border.clone();
            let mut detector = DirectionDetector::new();
            let first_run = Cell::new(true);
            active.push(Box::new(effect(move || {
                let point = tracker.offset.get();
                if first_run.replace(false) {
                    return;
                }
                // Overscroll samples carry no direction information.
                if tracker.is_bouncing() {
                    return;
                }
                if let Some(direction) = detector.sample(point.y) {
                    let anchor = (point.y
                        + config.header_height.value()
                        + config.inset.value())
                    .max(0.0);
                    border.set(anchor);
                    debug!(?direction, anchor, "collapse border re-anchored");
                }
            })));
        }
    }

    /// Stop live tracking; external header-height writes now reposition the
    /// scroll content instead.
    ///
    /// Idempotent; a second `disconnect()` while disconnected is a no-op.
    pub fn disconnect(&self) {
        if self.connection.get() == ConnectionStatus::Disconnected {
            return;
        }
        self.connection.set(ConnectionStatus::Disconnected);
        debug!("collapsing header disconnected");

        self.dispose_active();
        self.dispose_inactive();

        if self.host.upgrade().is_none() {
            return;
        }

        // One-way binding: header height drives the scroll offset while the
        // view is not live-tracked.
        let config = self.config.clone();
        let host = self.host.clone();
        let first_run = Cell::new(true);
        let last_height = Cell::new(self.config.header_height.value());
        self.inactive.borrow_mut().push(Box::new(effect(move || {
            let height = config.header_height.get();
            if first_run.replace(false) {
                return;
            }
            if last_height.replace(height) == height {
                return;
            }
            if let Some(host) = host.upgrade() {
                host.set_content_offset(Point::new(0.0, -(height + config.inset.value())));
            }
        })));
    }

    fn dispose_active(&self) {
        for stop in self.active.borrow_mut().drain(..) {
            stop();
        }
    }

    fn dispose_inactive(&self) {
        for stop in self.inactive.borrow_mut().drain(..) {
            stop();
        }
    }
}

impl Drop for SyncEngine {
    fn drop(&mut self) {
        self.dispose_active();
        self.dispose_inactive();
        for stop in self.base.borrow_mut().drain(..) {
            stop();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{EdgeInsets, Rect, ScrollPhase, Size};

    /// Host fake that records every write and forwards offset/inset writes
    /// back into the tracker, the way a real view's observation would.
    struct MockScrollView {
        tracker: Rc<BoundsTracker>,
        offset_writes: RefCell<Vec<Point>>,
        inset_writes: RefCell<Vec<EdgeInsets>>,
        indicator_writes: RefCell<Vec<EdgeInsets>>,
        header_heights: RefCell<Vec<f64>>,
        extra: Cell<EdgeInsets>,
        follow_direction: Cell<bool>,
    }

    impl MockScrollView {
        fn new(tracker: Rc<BoundsTracker>) -> Self {
            Self {
                tracker,
                offset_writes: RefCell::new(Vec::new()),
                inset_writes: RefCell::new(Vec::new()),
                indicator_writes: RefCell::new(Vec::new()),
                header_heights: RefCell::new(Vec::new()),
                extra: Cell::new(EdgeInsets::ZERO),
                follow_direction: Cell::new(false),
            }
        }

        fn clear(&self) {
            self.offset_writes.borrow_mut().clear();
            self.inset_writes.borrow_mut().clear();
            self.indicator_writes.borrow_mut().clear();
            self.header_heights.borrow_mut().clear();
        }
    }

    impl ScrollHost for MockScrollView {
        fn set_content_offset(&self, offset: Point) {
            self.offset_writes.borrow_mut().push(offset);
            self.tracker.set_offset(offset);
        }

        fn set_content_inset(&self, inset: EdgeInsets) {
            self.inset_writes.borrow_mut().push(inset);
            self.tracker.set_content_inset(inset);
        }

        fn set_indicator_inset(&self, inset: EdgeInsets) {
            self.indicator_writes.borrow_mut().push(inset);
        }

        fn header_height_did_change(&self, height: f64) {
            self.header_heights.borrow_mut().push(height);
        }

        fn extra_inset(&self) -> EdgeInsets {
            self.extra.get()
        }

        fn follow_direction(&self) -> bool {
            self.follow_direction.get()
        }
    }

    /// Laid-out scene: 320x600 viewport, 320x1000 content, header 44..200,
    /// no inset. Construction snaps the offset to (0, -200); write logs are
    /// cleared before returning.
    fn setup(follow: bool) -> (Rc<MockScrollView>, Rc<BoundsTracker>, HeaderConfig, SyncEngine) {
        let tracker = Rc::new(BoundsTracker::new());
        let mock = Rc::new(MockScrollView::new(tracker.clone()));
        mock.follow_direction.set(follow);

        tracker.set_viewport(Rect::new(0.0, 0.0, 320.0, 600.0));
        tracker.set_content_size(Size::new(320.0, 1000.0));

        let config = HeaderConfig::new(44.0, 200.0, 0.0);
        let host: Rc<dyn ScrollHost> = mock.clone();
        let engine = SyncEngine::new(&host, tracker.clone(), config.clone());

        mock.clear();
        (mock, tracker, config, engine)
    }

    fn drag_to(tracker: &BoundsTracker, y: f64) {
        tracker.set_phase(ScrollPhase::DRAGGING);
        tracker.set_offset(Point::new(0.0, y));
    }

    #[test]
    fn test_construction_delivers_initial_height_and_insets() {
        let tracker = Rc::new(BoundsTracker::new());
        let mock = Rc::new(MockScrollView::new(tracker.clone()));
        tracker.set_viewport(Rect::new(0.0, 0.0, 320.0, 600.0));
        tracker.set_content_size(Size::new(320.0, 1000.0));

        let config = HeaderConfig::new(44.0, 200.0, 0.0);
        let host: Rc<dyn ScrollHost> = mock.clone();
        let _engine = SyncEngine::new(&host, tracker.clone(), config);

        assert_eq!(*mock.header_heights.borrow(), vec![200.0]);
        assert_eq!(*mock.inset_writes.borrow(), vec![EdgeInsets::new(200.0, 0.0)]);
        assert_eq!(
            *mock.indicator_writes.borrow(),
            vec![EdgeInsets::new(200.0, 0.0)]
        );
        // Offset was at the top boundary, so it snapped under the header.
        assert_eq!(*mock.offset_writes.borrow(), vec![Point::new(0.0, -200.0)]);
    }

    #[test]
    fn test_bottom_inset_and_extra_inset() {
        let tracker = Rc::new(BoundsTracker::new());
        let mock = Rc::new(MockScrollView::new(tracker.clone()));
        mock.extra.set(EdgeInsets::new(10.0, 20.0));

        tracker.set_viewport(Rect::new(0.0, 0.0, 320.0, 600.0));
        // Short content: the bottom inset pads it out past the min header.
        tracker.set_content_size(Size::new(320.0, 300.0));

        let config = HeaderConfig::new(44.0, 200.0, 0.0);
        let host: Rc<dyn ScrollHost> = mock.clone();
        let _engine = SyncEngine::new(&host, tracker.clone(), config);

        // top = 200 + 0 + 10, bottom = 600 - (300 + 44 + 0 + 20) = 236
        assert_eq!(
            *mock.inset_writes.borrow(),
            vec![EdgeInsets::new(210.0, 236.0)]
        );
    }

    #[test]
    fn test_connect_snaps_offset_at_top_boundary() {
        let (mock, _tracker, _config, engine) = setup(false);

        engine.connect();
        assert_eq!(engine.connection(), ConnectionStatus::Connected);
        assert_eq!(mock.offset_writes.borrow()[0], Point::new(0.0, -200.0));
    }

    #[test]
    fn test_connect_leaves_scrolled_offset_alone() {
        let (mock, tracker, _config, engine) = setup(false);
        tracker.set_offset(Point::new(0.0, 120.0));

        engine.connect();
        assert!(mock.offset_writes.borrow().is_empty());
    }

    #[test]
    fn test_connect_is_idempotent() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        assert_eq!(engine.active.borrow().len(), 2);

        // A second connect() while connected installs nothing new.
        engine.connect();
        assert_eq!(engine.active.borrow().len(), 2);

        // And tracking still behaves like a single binding.
        engine.collapsing_border.set(200.0);
        drag_to(&tracker, 300.0);
        assert_eq!(config.header_height.value(), 44.0);
    }

    #[test]
    fn test_follow_direction_installs_direction_binding() {
        let (_mock, _tracker, _config, engine) = setup(true);
        engine.connect();
        assert_eq!(engine.active.borrow().len(), 3);
    }

    #[test]
    fn test_offset_drives_header_while_dragging() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();

        // min=44, max=200, inset=0, border=200: offset 50 -> 150, 300 -> 44.
        engine.collapsing_border.set(200.0);

        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 150.0);

        drag_to(&tracker, 300.0);
        assert_eq!(config.header_height.value(), 44.0);

        drag_to(&tracker, -100.0);
        assert_eq!(config.header_height.value(), 200.0);
    }

    #[test]
    fn test_idle_programmatic_scroll_is_ignored() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);

        tracker.set_phase(ScrollPhase::empty());
        tracker.set_offset(Point::new(0.0, 50.0));
        assert_eq!(config.header_height.value(), 200.0);
    }

    #[test]
    fn test_follow_offset_changes_tracks_while_idle() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);
        config.follow_offset_changes.set(true);

        tracker.set_phase(ScrollPhase::empty());
        tracker.set_offset(Point::new(0.0, 50.0));
        assert_eq!(config.header_height.value(), 150.0);
    }

    #[test]
    fn test_decelerating_also_drives_header() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);

        tracker.set_phase(ScrollPhase::DECELERATING);
        tracker.set_offset(Point::new(0.0, 80.0));
        assert_eq!(config.header_height.value(), 120.0);
    }

    #[test]
    fn test_content_resize_reanchors_only_at_top() {
        let (mock, tracker, _config, engine) = setup(false);
        engine.connect();
        mock.clear();

        // At the top boundary: resize snaps the offset under the header.
        tracker.set_content_size(Size::new(320.0, 1200.0));
        assert_eq!(*mock.offset_writes.borrow(), vec![Point::new(0.0, -200.0)]);

        // Scrolled into content: resize leaves the offset untouched.
        drag_to(&tracker, 50.0);
        mock.clear();
        tracker.set_content_size(Size::new(320.0, 1400.0));
        assert!(mock.offset_writes.borrow().is_empty());
        assert!(!mock.inset_writes.borrow().is_empty());
    }

    #[test]
    fn test_snap_on_resize_can_be_disabled() {
        let (mock, tracker, config, engine) = setup(false);
        engine.connect();
        config.snap_on_resize.set(false);
        mock.clear();

        tracker.set_content_size(Size::new(320.0, 1200.0));
        assert!(mock.offset_writes.borrow().is_empty());
        assert!(!mock.inset_writes.borrow().is_empty());
    }

    #[test]
    fn test_max_height_pin_snaps_when_header_at_max() {
        let (mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);

        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 150.0);

        mock.clear();
        config.max_height.set(150.0);
        assert!(
            mock.offset_writes
                .borrow()
                .contains(&Point::new(0.0, -150.0))
        );
    }

    #[test]
    fn test_disconnect_height_drives_offset() {
        let (mock, _tracker, config, engine) = setup(false);
        engine.connect();
        engine.disconnect();
        assert_eq!(engine.connection(), ConnectionStatus::Disconnected);
        mock.clear();

        config.header_height.set(100.0);
        assert_eq!(*mock.offset_writes.borrow(), vec![Point::new(0.0, -100.0)]);
    }

    #[test]
    fn test_disconnect_ignores_offset_changes() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);
        engine.disconnect();

        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 200.0);
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let (mock, _tracker, config, engine) = setup(false);
        engine.connect();
        engine.disconnect();
        engine.disconnect();
        mock.clear();

        config.header_height.set(100.0);
        assert_eq!(*mock.offset_writes.borrow(), vec![Point::new(0.0, -100.0)]);
    }

    #[test]
    fn test_reconnect_restores_live_tracking() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.disconnect();
        engine.connect();

        drag_to(&tracker, -150.0);
        assert_eq!(config.header_height.value(), 150.0);

        // The disconnected binding is gone: height writes no longer move the
        // offset through the inactive path (they go through live tracking
        // paths only).
        assert_eq!(engine.connection(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_follow_direction_reanchors_on_reversal_verdict() {
        let (_mock, tracker, config, engine) = setup(true);
        engine.connect();
        // Post-alignment offset is -200: border = max(0, -200 + 200 + 0).
        assert_eq!(engine.collapsing_border.get(), 0.0);

        // Idle phase: header stays put, but direction sampling still runs.
        tracker.set_phase(ScrollPhase::empty());
        for y in [-100.0, -50.0, 0.0, 50.0, 100.0, 150.0] {
            tracker.set_offset(Point::new(0.0, y));
        }

        // Five unanimous TowardCollapsed pairs close the batch at the fifth:
        // border re-anchors at the verdict offset.
        assert_eq!(engine.collapsing_border.get(), 350.0);
        assert_eq!(config.header_height.value(), 200.0);
    }

    #[test]
    fn test_follow_direction_mixed_batch_keeps_anchor() {
        let (_mock, tracker, _config, engine) = setup(true);
        engine.connect();

        tracker.set_phase(ScrollPhase::empty());
        for y in [0.0, 50.0, 25.0, 75.0, 30.0, 80.0] {
            tracker.set_offset(Point::new(0.0, y));
        }
        assert_eq!(engine.collapsing_border.get(), 0.0);
    }

    #[test]
    fn test_follow_direction_skips_bouncing_samples() {
        let (_mock, tracker, _config, engine) = setup(true);
        engine.connect();

        // Bottom boundary is 1000 - 600 + 0 = 400; these all overscroll.
        tracker.set_phase(ScrollPhase::empty());
        for y in [410.0, 420.0, 430.0, 440.0, 450.0, 460.0] {
            tracker.set_offset(Point::new(0.0, y));
        }
        assert_eq!(engine.collapsing_border.get(), 0.0);
    }

    #[test]
    fn test_stale_host_degrades_to_noop() {
        let (mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);
        drop(mock);

        // Live tracking still computes heights; delivery is silently dropped.
        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 150.0);

        // Lifecycle calls stay no-op safe.
        engine.disconnect();
        config.header_height.set(100.0);
        engine.connect();
    }

    #[test]
    fn test_drop_disposes_all_subscriptions() {
        let (mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);
        drop(engine);
        mock.clear();

        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 200.0);

        config.header_height.set(77.0);
        assert!(mock.header_heights.borrow().is_empty());
        assert!(mock.offset_writes.borrow().is_empty());
    }

    #[test]
    fn test_inverted_bounds_clamp_lets_max_win() {
        let (_mock, tracker, config, engine) = setup(false);
        engine.connect();
        engine.collapsing_border.set(200.0);
        config.min_height.set(300.0);
        config.max_height.set(50.0);

        drag_to(&tracker, 50.0);
        assert_eq!(config.header_height.value(), 50.0);
    }

    #[test]
    fn test_header_inset_offsets_the_mapping() {
        let tracker = Rc::new(BoundsTracker::new());
        let mock = Rc::new(MockScrollView::new(tracker.clone()));
        tracker.set_viewport(Rect::new(0.0, 0.0, 320.0, 600.0));
        tracker.set_content_size(Size::new(320.0, 1000.0));
        let config = HeaderConfig::new(44.0, 200.0, 10.0);
        let host: Rc<dyn ScrollHost> = mock.clone();
        let engine = SyncEngine::new(&host, tracker.clone(), config.clone());
        engine.connect();
        engine.collapsing_border.set(200.0);

        drag_to(&tracker, 50.0);
        // 200 - 50 - 10 = 140
        assert_eq!(config.header_height.value(), 140.0);

        engine.disconnect();
        mock.clear();
        config.header_height.set(100.0);
        // -(100 + 10)
        assert_eq!(*mock.offset_writes.borrow(), vec![Point::new(0.0, -110.0)]);
    }
}
