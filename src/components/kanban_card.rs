//! Kanban Card Component
//!
//! A draggable card tile: priority badge, title and the two counters.

use leptos::prelude::*;
use leptos_dragdrop::*;
use kanban_core::{CardId, CardView, Command};

use crate::context::use_board;

#[component]
pub fn KanbanCard(tile: CardView, dnd: DndSignals) -> impl IntoView {
    let ctx = use_board();

    let id = tile.id();
    let payload = id.get();
    let priority = tile.card.priority;

    let on_dragstart = make_on_dragstart(dnd, payload, Callback::new(move |payload: u32| {
        let _ = ctx.dispatch(Command::DragStart(CardId::new(payload)));
    }));
    let on_dragend = make_on_dragend(dnd, Callback::new(move |_: ()| {
        let _ = ctx.dispatch(Command::DragEnd);
    }));

    let open_detail = move |_: web_sys::MouseEvent| {
        // The click that follows a drop is not a request to open
        if dnd.suppress_click() {
            return;
        }
        let _ = ctx.dispatch(Command::OpenDetail(id));
    };

    let request_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let _ = ctx.dispatch(Command::RequestDelete(id));
    };

    let card_class = move || {
        if dnd.is_dragging(payload) { "kanban-card dragging" } else { "kanban-card" }
    };

    view! {
        <div
            id=id.to_string()
            class=card_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=open_detail
        >
            <div class="card-header">
                <div class=format!("badge {}", priority.as_str())>
                    <span>{priority.badge_text()}</span>
                </div>
                <button class="btn-delete" title="Excluir card" on:click=request_delete>"🗑"</button>
            </div>
            <p class="card-title">{tile.card.title.clone()}</p>
            <div class="card-infos">
                <div class="card-icons">
                    <p class="icon-comment">"💬 " <span class="count-comments">{tile.comment_count}</span></p>
                    <p class="icon-attach">"📎 " <span class="count-attachments">{tile.attachment_count}</span></p>
                </div>
            </div>
        </div>
    }
}
