//! Relay - reactive cell with tracked and untracked reads.
//!
//! Every tunable and every tracker input in this crate is a `Relay`: a
//! [`Signal`] paired with a plain mirror of the latest value. The signal side
//! drives effects; the mirror side answers "what is the value right now"
//! without creating a reactive dependency.
//!
//! This split is what keeps the engine's filters honest: an effect that is
//! keyed on the scroll offset can consult the gesture phase or a config flag
//! through `value()` and will not re-run when those change on their own.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

/// A mutable value cell that is both a reactive source and a readable latest
/// value.
///
/// Cloning a relay clones handles to the same underlying cell.
#[derive(Clone)]
pub struct Relay<T: Copy + PartialEq + 'static> {
    signal: Signal<T>,
    latest: Rc<Cell<T>>,
}

impl<T: Copy + PartialEq + 'static> Relay<T> {
    pub fn new(initial: T) -> Self {
        Self {
            signal: signal(initial),
            latest: Rc::new(Cell::new(initial)),
        }
    }

    /// Tracking read. Inside an effect this establishes a dependency, so the
    /// effect re-runs whenever the relay is written.
    pub fn get(&self) -> T {
        self.signal.get()
    }

    /// Non-tracking read of the latest value. Safe to call inside effects
    /// that must not depend on this relay.
    pub fn value(&self) -> T {
        self.latest.get()
    }

    /// Write the value and notify tracking effects synchronously.
    ///
    /// The mirror is updated first so effects triggered by the notification
    /// observe the new value through `value()` as well.
    pub fn set(&self, value: T) {
        self.latest.set(value);
        self.signal.set(value);
    }

    /// Write only if the value actually changed. Returns whether a write
    /// happened.
    pub fn set_if_changed(&self, value: T) -> bool {
        if self.latest.get() == value {
            return false;
        }
        self.set(value);
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
