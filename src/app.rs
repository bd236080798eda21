//! Kanban Board App
//!
//! Builds the board controller once, provides it to every component and lays
//! out the four columns with the two modals.

use leptos::prelude::*;
use reactive_stores::Store;
use kanban_core::{BoardConfig, InteractionController, LocalClock, Stage};
use leptos_dragdrop::create_dnd_signals;

use crate::components::{CardModal, DeleteModal, KanbanColumn};
use crate::context::BoardContext;
use crate::store::UiState;

/// Optional `<script type="application/json">` element overriding the seed board
const CONFIG_ELEMENT_ID: &str = "board-config";

fn load_config() -> BoardConfig {
    let json = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => BoardConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[APP] {}, using the default board", e);
            BoardConfig::default()
        }),
        None => BoardConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let clock = LocalClock::new(config.timestamp_format.clone());
    log::info!("[APP] Loading board with {} cards", config.seed.len());

    provide_context(BoardContext::new(InteractionController::new(&config, clock)));
    provide_context(Store::new(UiState::default()));

    let dnd = create_dnd_signals();

    view! {
        <main class="kanban">
            {Stage::ALL.iter().map(|&stage| view! {
                <KanbanColumn stage=stage dnd=dnd />
            }).collect_view()}
        </main>
        <CardModal />
        <DeleteModal />
    }
}
