//! Kanban Column Component
//!
//! One workflow stage: header with the add button, and the card container
//! that accepts drops.

use leptos::prelude::*;
use leptos_dragdrop::*;
use kanban_core::{Command, Stage};

use crate::components::{KanbanCard, NewCardForm};
use crate::context::use_board;

#[component]
pub fn KanbanColumn(stage: Stage, dnd: DndSignals) -> impl IntoView {
    let ctx = use_board();
    let zone = stage.index();

    let on_drop = make_on_drop(dnd, zone, Callback::new(move |(dragged, zone): (u32, usize)| {
        let Some(to) = Stage::from_index(zone) else { return };
        log::debug!("[DND] Drop: dragged=card-{}, column={}", dragged, to.title());
        let _ = ctx.dispatch(Command::Drop(to));
    }));

    let open_form = move |_| {
        // A second click while the form is open is rejected by the controller
        let _ = ctx.dispatch(Command::OpenCreationForm(stage));
    };

    let container_class = move || {
        if dnd.is_hovered(zone) { "kanban-cards cards-hover" } else { "kanban-cards" }
    };

    view! {
        <div class=format!("kanban-column {}", stage.as_str())>
            <div class="kanban-title">
                <h2>{stage.title()}</h2>
                <span class="card-count">{move || ctx.column_len(stage)}</span>
                <button class="add-card" title="Adicionar card" on:click=open_form>"+"</button>
            </div>
            <div
                class=container_class
                on:dragover=make_on_dragover(dnd, zone)
                on:dragleave=make_on_dragleave(dnd, zone)
                on:drop=on_drop
            >
                <Show when=move || ctx.is_form_open(stage)>
                    <NewCardForm stage=stage />
                </Show>
                <For
                    each=move || ctx.column_cards(stage)
                    key=|tile| (tile.id(), tile.comment_count, tile.attachment_count)
                    children=move |tile| view! { <KanbanCard tile=tile dnd=dnd /> }
                />
            </div>
        </div>
    }
}
