//! Command Outcomes and Errors
//!
//! Invalid user input is never raised: every command reports either what it
//! changed or why it changed nothing, and the display layer decides what to show.

use crate::domain::{CardId, Stage};

/// Result of dispatching a command
pub type Outcome = Result<Applied, Rejected>;

/// What a command changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    DetailOpened(CardId),
    DetailClosed,
    CommentAdded { card: CardId, count: usize },
    AttachmentAdded { card: CardId, count: usize },
    DeletePending(CardId),
    CardDeleted(CardId),
    DeleteCancelled,
    FormOpened(Stage),
    FormClosed(Stage),
    CardCreated { card: CardId, stage: Stage },
    DragStarted(CardId),
    DragEnded,
    CardMoved { card: CardId, from: Stage, to: Stage },
}

/// Why a command left the board untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("comment text is empty")]
    EmptyComment,

    #[error("card title is empty")]
    EmptyTitle,

    #[error("no file selected")]
    NoFileSelected,

    #[error("no card detail is open")]
    NoOpenModal,

    #[error("no card is pending deletion")]
    NoPendingDelete,

    #[error("a creation form is already open in column {0:?}")]
    FormAlreadyOpen(Stage),

    #[error("no creation form is open in column {0:?}")]
    NoOpenForm(Stage),

    #[error("card {0} is not on the board")]
    UnknownCard(CardId),

    #[error("no card is being dragged")]
    NothingDragged,

    #[error("no card ids left to allocate")]
    IdsExhausted,
}

/// Board configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid board config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate seed card id: {0}")]
    DuplicateCardId(CardId),

    #[error("Seed card {0} has an empty title")]
    EmptySeedTitle(CardId),

    #[error("Invalid timestamp format: {0:?}")]
    InvalidTimestampFormat(String),
}
