//! Board State
//!
//! The card store, the board tiles and the id allocator, kept consistent with
//! each other. Built once at startup from a [`BoardConfig`] and dropped with
//! the page.

use crate::allocator::IdentityAllocator;
use crate::board::{Board, CardView};
use crate::config::BoardConfig;
use crate::domain::{Card, CardId, CardMetadata, Priority, Stage};
use crate::store::CardStore;

#[derive(Debug, Clone)]
pub struct BoardState {
    pub(crate) store: CardStore,
    pub(crate) board: Board,
    pub(crate) allocator: IdentityAllocator,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::from_config(&BoardConfig::empty())
    }
}

impl BoardState {
    /// Seed tiles and records from the config; the config is assumed valid
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut store = CardStore::new();
        let mut board = Board::new();

        for seed in &config.seed {
            let metadata = seed.metadata();
            let mut view = CardView::new(Card::new(seed.id, seed.title.clone(), seed.priority));
            view.comment_count = metadata.comments.len();
            view.attachment_count = metadata.attachments.len();
            board.append(seed.stage, view);
            store.insert(seed.id, metadata);
        }

        Self {
            store,
            board,
            allocator: IdentityAllocator::after(config.highest_seed_id()),
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Allocate an id, create its empty record and put the tile on top of `stage`.
    /// `None` leaves the board untouched when ids are exhausted.
    pub fn create_card(&mut self, stage: Stage, title: &str, priority: Priority) -> Option<CardId> {
        let id = self.allocator.next()?;
        self.store.insert(id, CardMetadata::in_stage(stage));
        self.board.prepend(stage, CardView::new(Card::new(id, title, priority)));
        Some(id)
    }

    /// Remove the tile and the record together. Returns whether a tile existed.
    pub fn delete_card(&mut self, id: CardId) -> bool {
        let removed = self.board.remove(id).is_some();
        self.store.delete(id);
        removed
    }

    /// Reparent the tile and record the new stage. Returns the column it left.
    pub fn move_card(&mut self, id: CardId, to: Stage) -> Option<Stage> {
        let from = self.board.reparent(id, to)?;
        self.store.set_stage(id, to);
        Some(from)
    }
}
