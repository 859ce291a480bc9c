// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot deferred task.

/// Holds at most one payload due at a given time.
///
/// Scheduling always replaces (and so cancels) the current occupant.
#[derive(Clone, Debug)]
pub(crate) struct DeferredSlot<P> {
    pending: Option<(u64, P)>,
}

impl<P> Default for DeferredSlot<P> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<P> DeferredSlot<P> {
    /// Schedules `payload` for `due`, returning the payload it displaced.
    pub(crate) fn schedule(&mut self, due: u64, payload: P) -> Option<P> {
        self.pending.replace((due, payload)).map(|(_, p)| p)
    }

    /// Drops the pending payload, if any.
    pub(crate) fn cancel(&mut self) -> Option<P> {
        self.pending.take().map(|(_, p)| p)
    }

    /// When the pending payload becomes due.
    pub(crate) fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// Takes the payload if it is due at `now`.
    pub(crate) fn take_due(&mut self, now: u64) -> Option<P> {
        match self.pending {
            Some((due, _)) if due <= now => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeferredSlot;

    #[test]
    fn schedule_replaces_the_occupant() {
        let mut slot = DeferredSlot::default();
        assert_eq!(slot.schedule(150, "first"), None);
        assert_eq!(slot.schedule(158, "second"), Some("first"));
        assert_eq!(slot.due_at(), Some(158));

        assert_eq!(slot.take_due(157), None);
        assert_eq!(slot.take_due(158), Some("second"));
        assert_eq!(slot.take_due(1_000), None);
    }

    #[test]
    fn cancel_empties_the_slot() {
        let mut slot = DeferredSlot::default();
        slot.schedule(0, 1);
        assert_eq!(slot.cancel(), Some(1));
        assert_eq!(slot.due_at(), None);
    }
}
