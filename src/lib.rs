//! # collapsing-header
//!
//! Bidirectional, direction-aware synchronization between a collapsible
//! header and a scrollable content view.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: every input is a signal-backed cell, every
//! binding is an effect, and disposing a binding is calling its stop
//! function.
//!
//! ## Architecture
//!
//! ```text
//! host events → BoundsTracker → SyncEngine → header height
//!                                          ↘ inset/offset corrections → host
//! ```
//!
//! - [`BoundsTracker`] normalizes raw scroll/content events into clean,
//!   deduplicated signals (content size, viewport height, bounce state).
//! - [`SyncEngine`] owns the connect/disconnect state machine: while
//!   connected, offset deltas map to a clamped header height anchored at the
//!   collapsing border; while disconnected, header-height writes reposition
//!   the scroll content instead.
//! - [`DirectionDetector`] turns offset samples into sustained-direction
//!   verdicts via a time/count-bounded unanimous vote, used to re-anchor the
//!   collapse reference in follow-direction mode.
//!
//! Everything is single-threaded and event-driven; the engine holds only a
//! weak reference to the host view and degrades to no-op once it is gone.
//!
//! ## Modules
//!
//! - [`types`] - geometry and the [`ScrollPhase`] gesture bitflags
//! - [`relay`] - reactive cells with tracked and untracked reads
//! - [`host`] - the [`ScrollHost`] collaborator boundary
//! - [`config`] - the mutable tunables shared between host and engine
//! - [`bounds`] - raw-event normalization
//! - [`direction`] - windowed scroll-direction detection
//! - [`engine`] - the synchronization state machine

pub mod bounds;
pub mod config;
pub mod direction;
pub mod engine;
pub mod host;
pub mod relay;
pub mod types;

// Re-export commonly used items
pub use bounds::BoundsTracker;
pub use config::{HeaderConfig, clamp_height};
pub use direction::{DIRECTION_BATCH_CAP, DIRECTION_WINDOW, Direction, DirectionDetector};
pub use engine::{ConnectionStatus, SyncEngine};
pub use host::ScrollHost;
pub use relay::Relay;
pub use types::{EdgeInsets, Point, Rect, ScrollPhase, Size};
