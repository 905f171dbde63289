//! Header configuration - the mutable tunable cells.
//!
//! All cells are [`Relay`]s: the host may set them at any time between
//! events, and the engine reads them fresh on every event. Nothing here is
//! validated; in particular `min_height <= max_height` is the host's
//! responsibility (see [`clamp_height`] for what happens when it is violated).

use crate::relay::Relay;

// =============================================================================
// Configuration
// =============================================================================

/// Tunable bounds and flags shared between host and engine.
///
/// Cloning yields handles to the same cells.
#[derive(Clone)]
pub struct HeaderConfig {
    /// Header height when fully collapsed.
    pub min_height: Relay<f64>,
    /// Header height when fully expanded.
    pub max_height: Relay<f64>,
    /// Fixed gap between the header and the content top.
    pub inset: Relay<f64>,
    /// When set, offset changes drive the header even while the view is not
    /// being manipulated (programmatic scrolls included).
    pub follow_offset_changes: Relay<bool>,
    /// The derived header height. Externally writable: driving it while the
    /// engine is disconnected moves the scroll offset instead.
    pub header_height: Relay<f64>,
    /// Whether a content-size change while the offset sits at the top
    /// boundary snaps the offset back under the header. On by default;
    /// switch off to suppress the visible jump this can cause.
    pub snap_on_resize: Relay<bool>,
}

impl HeaderConfig {
    /// Create a configuration with the header starting fully expanded.
    pub fn new(min_height: f64, max_height: f64, inset: f64) -> Self {
        Self {
            min_height: Relay::new(min_height),
            max_height: Relay::new(max_height),
            inset: Relay::new(inset),
            follow_offset_changes: Relay::new(false),
            header_height: Relay::new(max_height),
            snap_on_resize: Relay::new(true),
        }
    }
}

// =============================================================================
// Clamping
// =============================================================================

/// Clamp a raw height into `[min, max]`.
///
/// Total on any input: with inverted bounds (`min > max`) the max bound wins
/// and the result is `max`. Never `f64::clamp`, which panics in that case.
pub fn clamp_height(raw: f64, min: f64, max: f64) -> f64 {
    raw.max(min).min(max)
}

// =============================================================================
// Tests
// =============================================================================
