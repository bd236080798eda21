//! Card Identity Allocation

use crate::domain::CardId;

/// Issues card ids from an incrementing counter.
///
/// Ids are never reissued, even after the card holding one is deleted.
/// Once `u32::MAX` has been handed out the allocator is exhausted.
/// Owned by the board state; callers are serialized by the UI event loop.
#[derive(Debug, Clone)]
pub struct IdentityAllocator {
    next: Option<u32>,
}

impl IdentityAllocator {
    /// Allocator whose first id is `existing + 1`
    pub fn after(existing: u32) -> Self {
        Self {
            next: existing.checked_add(1),
        }
    }

    /// `None` once every id has been issued
    pub fn next(&mut self) -> Option<CardId> {
        let raw = self.next?;
        self.next = raw.checked_add(1);
        Some(CardId::new(raw))
    }

    pub fn peek_next(&self) -> Option<CardId> {
        self.next.map(CardId::new)
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::after(0)
    }
}
