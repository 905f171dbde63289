//! Host boundary - what the engine may do to the scrollable view.
//!
//! The engine never owns the view. It holds a `Weak<dyn ScrollHost>` and
//! every reactive step upgrades it first; once the host is gone the step is
//! a silent no-op. This is the whole failure model: nothing here can outlive
//! or block host teardown.
//!
//! Hosts are expected to forward engine-applied offset and inset writes back
//! through [`BoundsTracker::set_offset`](crate::bounds::BoundsTracker::set_offset)
//! and [`set_content_inset`](crate::bounds::BoundsTracker::set_content_inset)
//! exactly as they forward user scrolls, so the tracker mirrors the real
//! view state at all times.

use crate::types::{EdgeInsets, Point};

/// Capabilities the engine needs from the host view and header sink.
pub trait ScrollHost {
    /// Move the scrollable content to the given offset.
    fn set_content_offset(&self, offset: Point);

    /// Apply vertical content padding so the header does not overlap content.
    fn set_content_inset(&self, inset: EdgeInsets);

    /// Apply scroll-indicator padding (top only; bottom is always zero).
    fn set_indicator_inset(&self, inset: EdgeInsets);

    /// Deliver a new header height to the header-rendering collaborator.
    fn header_height_did_change(&self, height: f64);

    /// Extra padding the host wants added around the computed insets.
    fn extra_inset(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Whether the collapse anchor should re-center on sustained direction
    /// reversals instead of staying fixed from connect time.
    fn follow_direction(&self) -> bool {
        false
    }
}
