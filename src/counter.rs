//! Shared tally counters
//!
//! One `Counter` tracks bricks remaining, another lives remaining. The match
//! owns each counter and hands `Rc` handles to the components that read or
//! mutate it (brick registry, HUD observers, end-of-frame checks). `Rc` +
//! `Cell` keep the whole arrangement single-threaded by construction.

use std::cell::Cell;
use std::rc::Rc;

/// Non-negative integer tally
#[derive(Debug, Default)]
pub struct Counter {
    value: Cell<u32>,
}

impl Counter {
    /// New counter behind a shared handle
    pub fn shared(initial: u32) -> Rc<Self> {
        Rc::new(Self {
            value: Cell::new(initial),
        })
    }

    pub fn increment(&self) {
        self.value.set(self.value.get() + 1);
    }

    /// Decrement by one. Callers only decrement when the counted resource is
    /// known to be present; a decrement at zero is guarded and logged rather
    /// than wrapping.
    pub fn decrement(&self) {
        let current = self.value.get();
        if current == 0 {
            log::warn!("counter decrement at zero ignored");
            return;
        }
        self.value.set(current - 1);
    }

    /// Back to zero
    pub fn reset(&self) {
        self.value.set(0);
    }

    pub fn value(&self) -> u32 {
        self.value.get()
    }
}
