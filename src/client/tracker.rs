//! Request tracking
//!
//! Each fetch takes a [`Ticket`] for its slot. Issuing a new ticket for a slot
//! makes every older ticket for that slot stale, so a response is applied
//! only if it belongs to the most recently issued request, whatever order
//! the responses arrive in.

use serde::Serialize;

/// Independent kinds of data the dashboard fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FetchSlot {
    Skills,
    Trends,
    Momentum,
}

impl FetchSlot {
    pub const ALL: [FetchSlot; 3] = [FetchSlot::Skills, FetchSlot::Trends, FetchSlot::Momentum];

    fn index(self) -> usize {
        match self {
            FetchSlot::Skills => 0,
            FetchSlot::Trends => 1,
            FetchSlot::Momentum => 2,
        }
    }
}

/// Proof that a request was issued as generation `generation` of `slot`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket {
    pub slot: FetchSlot,
    pub generation: u64,
}

/// Generation counters for every slot
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generations: [u64; 3],
    issued: [u64; 3],
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `slot`, superseding any outstanding one
    pub fn issue(&mut self, slot: FetchSlot) -> Ticket {
        let idx = slot.index();
        self.generations[idx] += 1;
        self.issued[idx] += 1;
        Ticket {
            slot,
            generation: self.generations[idx],
        }
    }

    /// True while no newer request (or cancellation) has happened for the slot
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations[ticket.slot.index()] == ticket.generation
    }

    /// Invalidate the outstanding request for `slot` without starting another
    pub fn cancel(&mut self, slot: FetchSlot) {
        self.generations[slot.index()] += 1;
    }

    /// Invalidate everything, e.g. when the dashboard goes away
    pub fn cancel_all(&mut self) {
        for slot in FetchSlot::ALL {
            self.cancel(slot);
        }
    }

    /// Number of requests ever issued for `slot`
    pub fn issued(&self, slot: FetchSlot) -> u64 {
        self.issued[slot.index()]
    }
}
