//! Interaction Controller
//!
//! Turns user gestures, expressed as [`Command`] values, into board mutations.
//! Each command is routed to exactly one handler and reports an [`Outcome`].

mod modal;


use std::collections::BTreeSet;

use crate::board::Board;
use crate::clock::{Clock, LocalClock};
use crate::config::{BoardConfig, Labels};
use crate::domain::{CardId, CardMetadata, Priority, Stage};
use crate::error::{Applied, Outcome, Rejected};
use crate::render::{DetailFragment, Renderer};
use crate::state::BoardState;
use crate::store::CardStore;

pub use modal::{DeleteConfirm, DetailModal};

/// A user gesture, independent of the display technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click on a card tile
    OpenDetail(CardId),
    /// Close button or click outside the detail modal
    CloseDetail,
    /// Save button of the comment box
    SaveComment { text: String },
    /// File picker change; `None` when the picker was dismissed
    AddAttachment { filename: Option<String> },
    /// Trash button on a card tile
    RequestDelete(CardId),
    ConfirmDelete,
    /// Cancel button or click outside the confirmation
    CancelDelete,
    /// "+" button in a column header
    OpenCreationForm(Stage),
    CancelCreationForm(Stage),
    ConfirmCreationForm { stage: Stage, title: String, priority: Priority },
    DragStart(CardId),
    DragEnd,
    /// Drop on a column's card container
    Drop(Stage),
}

/// What the detail modal shows for the bound card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub card: CardId,
    pub title: String,
    pub fragment: DetailFragment,
}

/// Owns all board state for the lifetime of the page.
pub struct InteractionController {
    state: BoardState,
    renderer: Renderer,
    clock: Box<dyn Clock>,
    detail: DetailModal,
    delete: DeleteConfirm,
    open_forms: BTreeSet<Stage>,
    dragging: Option<CardId>,
}

impl Default for InteractionController {
    fn default() -> Self {
        let config = BoardConfig::default();
        let clock = LocalClock::new(config.timestamp_format.clone());
        Self::new(&config, clock)
    }
}

impl InteractionController {
    pub fn new(config: &BoardConfig, clock: impl Clock + 'static) -> Self {
        Self {
            state: BoardState::from_config(config),
            renderer: Renderer::new(config.labels.clone()),
            clock: Box::new(clock),
            detail: DetailModal::Closed,
            delete: DeleteConfirm::Closed,
            open_forms: BTreeSet::new(),
            dragging: None,
        }
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn store(&self) -> &CardStore {
        self.state.store()
    }

    pub fn labels(&self) -> &Labels {
        self.renderer.labels()
    }

    pub fn detail_modal(&self) -> DetailModal {
        self.detail
    }

    pub fn delete_confirm(&self) -> DeleteConfirm {
        self.delete
    }

    pub fn is_form_open(&self, stage: Stage) -> bool {
        self.open_forms.contains(&stage)
    }

    pub fn dragging(&self) -> Option<CardId> {
        self.dragging
    }

    /// Render the card bound to the detail modal, if any
    pub fn detail(&self) -> Option<DetailView> {
        let card = self.detail.card()?;
        let empty = CardMetadata::default();
        let metadata = self.store().peek(card).unwrap_or(&empty);
        Some(DetailView {
            card,
            title: self.board().title_of(card).unwrap_or_default().to_string(),
            fragment: self.renderer.render_detail(metadata),
        })
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::OpenDetail(id) => self.open_detail(id),
            Command::CloseDetail => self.close_detail(),
            Command::SaveComment { text } => self.save_comment(&text),
            Command::AddAttachment { filename } => self.add_attachment(filename),
            Command::RequestDelete(id) => self.request_delete(id),
            Command::ConfirmDelete => self.confirm_delete(),
            Command::CancelDelete => self.cancel_delete(),
            Command::OpenCreationForm(stage) => self.open_form(stage),
            Command::CancelCreationForm(stage) => self.cancel_form(stage),
            Command::ConfirmCreationForm { stage, title, priority } => self.confirm_form(stage, &title, priority),
            Command::DragStart(id) => self.drag_start(id),
            Command::DragEnd => self.drag_end(),
            Command::Drop(stage) => self.drop_on(stage),
        };
        if let Err(reason) = &outcome {
            log::debug!("[BOARD] Command rejected: {}", reason);
        }
        outcome
    }

    // ========================
    // Detail modal
    // ========================

    fn open_detail(&mut self, id: CardId) -> Outcome {
        if !self.board().contains(id) {
            return Err(Rejected::UnknownCard(id));
        }
        self.state.store.get(id);
        self.detail = DetailModal::Open(id);
        log::debug!("[BOARD] Detail opened for {}", id);
        Ok(Applied::DetailOpened(id))
    }

    fn close_detail(&mut self) -> Outcome {
        self.detail = DetailModal::Closed;
        Ok(Applied::DetailClosed)
    }

    fn save_comment(&mut self, text: &str) -> Outcome {
        let card = self.detail.card().ok_or(Rejected::NoOpenModal)?;
        let timestamp = self.clock.now_display();
        let count = self.state.store.append_comment(card, text, timestamp)?;
        self.refresh_counters(card);
        log::info!("[BOARD] Comment added to {} ({} total)", card, count);
        Ok(Applied::CommentAdded { card, count })
    }

    fn add_attachment(&mut self, filename: Option<String>) -> Outcome {
        let card = self.detail.card().ok_or(Rejected::NoOpenModal)?;
        let filename = filename
            .filter(|name| !name.is_empty())
            .ok_or(Rejected::NoFileSelected)?;
        let count = self.state.store.append_attachment(card, filename);
        self.refresh_counters(card);
        log::info!("[BOARD] Attachment added to {} ({} total)", card, count);
        Ok(Applied::AttachmentAdded { card, count })
    }

    fn refresh_counters(&mut self, card: CardId) {
        if let Some(metadata) = self.state.store.peek(card) {
            self.renderer.render_counters(&mut self.state.board, card, metadata);
        }
    }

    // ========================
    // Delete confirmation
    // ========================

    fn request_delete(&mut self, id: CardId) -> Outcome {
        if !self.board().contains(id) {
            return Err(Rejected::UnknownCard(id));
        }
        self.delete = DeleteConfirm::Pending(id);
        Ok(Applied::DeletePending(id))
    }

    fn confirm_delete(&mut self) -> Outcome {
        let card = self.delete.card().ok_or(Rejected::NoPendingDelete)?;
        self.state.delete_card(card);
        self.delete = DeleteConfirm::Closed;
        if self.detail.card() == Some(card) {
            self.detail = DetailModal::Closed;
        }
        if self.dragging == Some(card) {
            self.dragging = None;
        }
        log::info!("[BOARD] Deleted {}", card);
        Ok(Applied::CardDeleted(card))
    }

    fn cancel_delete(&mut self) -> Outcome {
        self.delete = DeleteConfirm::Closed;
        Ok(Applied::DeleteCancelled)
    }

    // ========================
    // Creation forms
    // ========================

    fn open_form(&mut self, stage: Stage) -> Outcome {
        if !self.open_forms.insert(stage) {
            return Err(Rejected::FormAlreadyOpen(stage));
        }
        Ok(Applied::FormOpened(stage))
    }

    fn cancel_form(&mut self, stage: Stage) -> Outcome {
        if !self.open_forms.remove(&stage) {
            return Err(Rejected::NoOpenForm(stage));
        }
        Ok(Applied::FormClosed(stage))
    }

    fn confirm_form(&mut self, stage: Stage, title: &str, priority: Priority) -> Outcome {
        if !self.open_forms.contains(&stage) {
            return Err(Rejected::NoOpenForm(stage));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(Rejected::EmptyTitle);
        }
        let card = self
            .state
            .create_card(stage, title, priority)
            .ok_or(Rejected::IdsExhausted)?;
        self.open_forms.remove(&stage);
        log::info!("[BOARD] Created {} in {:?}", card, stage);
        Ok(Applied::CardCreated { card, stage })
    }

    // ========================
    // Drag and drop
    // ========================

    fn drag_start(&mut self, id: CardId) -> Outcome {
        if !self.board().contains(id) {
            return Err(Rejected::UnknownCard(id));
        }
        self.dragging = Some(id);
        Ok(Applied::DragStarted(id))
    }

    fn drag_end(&mut self) -> Outcome {
        self.dragging = None;
        Ok(Applied::DragEnded)
    }

    fn drop_on(&mut self, to: Stage) -> Outcome {
        let card = self.dragging.take().ok_or(Rejected::NothingDragged)?;
        let from = self.state.move_card(card, to).ok_or(Rejected::UnknownCard(card))?;
        log::info!("[BOARD] Moved {} from {:?} to {:?}", card, from, to);
        Ok(Applied::CardMoved { card, from, to })
    }
}
