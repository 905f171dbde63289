//! Direction detection - windowed majority vote over offset samples.
//!
//! Consecutive offset samples classify into a direction per distinct pair.
//! Classifications accumulate into a batch bounded by a time window and an
//! entry cap; a closed batch yields a verdict only when it is unanimous.
//! Mixed batches mean the direction is unclear and nothing is emitted.
//!
//! The detector is clock-agnostic: callers pass an [`Instant`] through
//! `sample_at`/`poll_at`, so tests never sleep. The engine flushes expired
//! batches lazily on the next sample, which is the only time anything can
//! react to a verdict anyway in a purely event-driven setup.

use std::time::{Duration, Instant};

// =============================================================================
// Constants
// =============================================================================

/// Time window bounding a single direction batch.
pub const DIRECTION_WINDOW: Duration = Duration::from_secs(1);

/// Maximum classifications per batch.
pub const DIRECTION_BATCH_CAP: usize = 5;

// =============================================================================
// Direction
// =============================================================================

/// Sustained scroll direction relative to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Offset increasing: content moving up, header shrinking.
    TowardCollapsed,
    /// Offset decreasing: content moving down, header growing.
    TowardExpanded,
}

// =============================================================================
// Detector
// =============================================================================

/// Batches consecutive offset samples into direction verdicts.
pub struct DirectionDetector {
    window: Duration,
    capacity: usize,
    last_sample: Option<f64>,
    batch: Vec<Direction>,
    batch_started: Option<Instant>,
    last_verdict: Option<Direction>,
}

impl DirectionDetector {
    pub fn new() -> Self {
        Self::with_window(DIRECTION_WINDOW, DIRECTION_BATCH_CAP)
    }

    /// Detector with custom batching bounds.
    pub fn with_window(window: Duration, capacity: usize) -> Self {
        Self {
            window,
            capacity,
            last_sample: None,
            batch: Vec::new(),
            batch_started: None,
            last_verdict: None,
        }
    }

    /// Feed an offset sample taken now.
    pub fn sample(&mut self, offset_y: f64) -> Option<Direction> {
        self.sample_at(offset_y, Instant::now())
    }

    /// Feed an offset sample taken at `at`.
    ///
    /// An expired batch is closed before the sample joins the next one, so a
    /// single call can surface the previous window's verdict.
    pub fn sample_at(&mut self, offset_y: f64, at: Instant) -> Option<Direction> {
        let expired = self.poll_at(at);

        let previous = self.last_sample.replace(offset_y);
        let Some(previous) = previous else {
            return expired;
        };
        if previous == offset_y {
            return expired;
        }

        let direction = if offset_y > previous {
            Direction::TowardCollapsed
        } else {
            Direction::TowardExpanded
        };
        self.batch_started.get_or_insert(at);
        self.batch.push(direction);

        if self.batch.len() >= self.capacity {
            return self.close_batch().or(expired);
        }
        expired
    }

    /// Close the current batch if its window has expired.
    pub fn poll(&mut self) -> Option<Direction> {
        self.poll_at(Instant::now())
    }

    /// Close the current batch if its window had expired by `at`.
    pub fn poll_at(&mut self, at: Instant) -> Option<Direction> {
        match self.batch_started {
            Some(started) if at.duration_since(started) >= self.window => self.close_batch(),
            _ => None,
        }
    }

    /// Drop all pending samples and verdict history.
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.batch.clear();
        self.batch_started = None;
        self.last_verdict = None;
    }

    fn close_batch(&mut self) -> Option<Direction> {
        let batch = std::mem::take(&mut self.batch);
        self.batch_started = None;

        let first = *batch.first()?;
        if batch.iter().any(|direction| *direction != first) {
            // Mixed batch: direction is unclear, no verdict.
            return None;
        }
        if self.last_verdict == Some(first) {
            return None;
        }
        self.last_verdict = Some(first);
        Some(first)
    }
}

impl Default for DirectionDetector {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
