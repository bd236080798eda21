//! New Card Form Component
//!
//! Inline form shown at the top of a column while creating a card.

use leptos::prelude::*;
use kanban_core::{Applied, Command, Priority, Rejected, Stage};

use crate::components::PrioritySelector;
use crate::context::use_board;

#[component]
pub fn NewCardForm(stage: Stage) -> impl IntoView {
    let ctx = use_board();

    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (invalid, set_invalid) = signal(false);
    let textarea = NodeRef::<leptos::html::Textarea>::new();

    // Focus the title as soon as the form is mounted
    Effect::new(move |_| {
        if let Some(el) = textarea.get() {
            let _ = el.focus();
        }
    });

    let confirm = move |_| {
        let command = Command::ConfirmCreationForm {
            stage,
            title: title.get_untracked(),
            priority: priority.get_untracked(),
        };
        match ctx.dispatch(command) {
            Some(Ok(Applied::CardCreated { card, .. })) => {
                log::debug!("[BOARD] {} added to {}", card, stage.title());
            }
            Some(Err(Rejected::EmptyTitle)) => set_invalid.set(true),
            _ => {}
        }
    };

    let cancel = move |_| {
        let _ = ctx.dispatch(Command::CancelCreationForm(stage));
    };

    view! {
        <div class="new-card-form">
            <textarea
                node_ref=textarea
                class=move || if invalid.get() { "invalid" } else { "" }
                placeholder="Título da tarefa..."
                rows="2"
                prop:value=move || title.get()
                on:input=move |ev| {
                    set_title.set(event_target_value(&ev));
                    set_invalid.set(false);
                }
            ></textarea>
            <PrioritySelector priority=priority set_priority=set_priority />
            <div class="form-actions">
                <button class="form-btn btn-cancel" on:click=cancel>"Cancelar"</button>
                <button class="form-btn btn-confirm" on:click=confirm>"Adicionar"</button>
            </div>
        </div>
    }
}
