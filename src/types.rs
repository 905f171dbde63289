//! Core types for collapsing-header.
//!
//! Geometry is vertical-first: the engine only ever reasons about the y axis,
//! but offsets keep their x component so corrections can preserve horizontal
//! position where the upstream behavior calls for it.

// =============================================================================
// Geometry
// =============================================================================

/// A scroll offset in content coordinates.
///
/// `y <= 0` means the viewport is at or above the top content boundary
/// (the header region); positive `y` means the user has scrolled down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Content size of the scrollable view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with either dimension at zero means "not yet laid out".
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Viewport bounds of the scrollable view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Vertical content padding. The engine never touches horizontal insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub bottom: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

// =============================================================================
// Scroll Phase (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Gesture/momentum state of the scrollable view as a bitfield.
    ///
    /// Combine with bitwise OR: `ScrollPhase::TRACKING | ScrollPhase::DRAGGING`.
    /// An empty phase means the view is idle and any offset movement is
    /// programmatic.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScrollPhase: u8 {
        /// A touch/pointer is down on the view.
        const TRACKING = 1 << 0;
        /// The user is actively dragging.
        const DRAGGING = 1 << 1;
        /// The view is decelerating after a drag ended.
        const DECELERATING = 1 << 2;
        /// A scroll-to-top momentum animation is running.
        const SCROLLING_TO_TOP = 1 << 3;
    }
}

impl ScrollPhase {
    /// True when the view is being manipulated (by gesture or momentum),
    /// as opposed to sitting idle while code moves the offset.
    pub fn is_active(&self) -> bool {
        !self.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
