//! Application Context
//!
//! The board controller, provided to every component via Leptos Context API.

use leptos::prelude::*;
use kanban_core::{CardView, Command, DetailView, InteractionController, Outcome, Stage};

/// Board state shared by all components
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Created once in `App`, dropped with the page
    controller: RwSignal<InteractionController>,
}

impl BoardContext {
    pub fn new(controller: InteractionController) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Run a gesture through the controller. `None` once the app is torn down.
    pub fn dispatch(&self, command: Command) -> Option<Outcome> {
        self.controller.try_update(|controller| controller.dispatch(command))
    }

    /// Tiles of one column, top first
    pub fn column_cards(&self, stage: Stage) -> Vec<CardView> {
        self.controller.with(|c| c.board().column(stage).cards.clone())
    }

    pub fn column_len(&self, stage: Stage) -> usize {
        self.controller.with(|c| c.board().column(stage).cards.len())
    }

    pub fn is_form_open(&self, stage: Stage) -> bool {
        self.controller.with(|c| c.is_form_open(stage))
    }

    pub fn detail(&self) -> Option<DetailView> {
        self.controller.with(|c| c.detail())
    }

    pub fn is_delete_pending(&self) -> bool {
        self.controller.with(|c| c.delete_confirm().card().is_some())
    }
}

pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
