use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unobserved,
    Observing,
    /// Terminal.
    Triggered,
}

/// Lets an intersection-driven transition fire once per page load.
#[derive(Debug, Default)]
pub struct OneShot {
    phase: Cell<Phase>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn arm(&self) {
        if self.phase.get() == Phase::Unobserved {
            self.phase.set(Phase::Observing);
        }
    }

    /// Marks the latch done without waiting for an event.
    pub fn settle(&self) {
        self.phase.set(Phase::Triggered);
    }

    /// Returns `true` only for the first intersecting event after `arm`.
    pub fn fire(&self, is_intersecting: bool) -> bool {
        if is_intersecting && self.phase.get() == Phase::Observing {
            self.phase.set(Phase::Triggered);
            true
        } else {
            false
        }
    }
}
