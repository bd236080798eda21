//! Modal States
//!
//! Each overlay is bound to at most one card at a time.

use crate::domain::CardId;

/// Card detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailModal {
    #[default]
    Closed,
    Open(CardId),
}

impl DetailModal {
    pub fn card(&self) -> Option<CardId> {
        match self {
            DetailModal::Open(id) => Some(*id),
            DetailModal::Closed => None,
        }
    }
}

/// Delete confirmation overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Closed,
    Pending(CardId),
}

impl DeleteConfirm {
    pub fn card(&self) -> Option<CardId> {
        match self {
            DeleteConfirm::Pending(id) => Some(*id),
            DeleteConfirm::Closed => None,
        }
    }
}
