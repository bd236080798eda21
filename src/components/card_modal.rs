//! Card Detail Modal
//!
//! Comments and attachments of the card bound to the detail modal.

use leptos::prelude::*;
use kanban_core::{Command, CommentEntry, Rejected, Section};

use crate::context::use_board;
use crate::store::{
    store_clear_comment, store_comment_draft, store_comment_invalid, store_mark_comment_invalid,
    store_set_comment_draft, use_ui_store,
};

fn comments_view(section: Section<CommentEntry>) -> AnyView {
    match section {
        Section::Placeholder(text) => view! { <p class="placeholder">{text}</p> }.into_any(),
        Section::Entries(entries) => entries
            .into_iter()
            .map(|comment| {
                view! {
                    <div class="comment-item">
                        <div class="comment-header">
                            <span>{comment.author}</span>
                            " "
                            <span>{comment.timestamp}</span>
                        </div>
                        <div>{comment.text}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    }
}

fn attachments_view(section: Section<String>) -> AnyView {
    match section {
        Section::Placeholder(text) => view! { <li class="placeholder">{text}</li> }.into_any(),
        Section::Entries(files) => files
            .into_iter()
            .map(|file| view! { <li>"📄 " {file}</li> })
            .collect_view()
            .into_any(),
    }
}

#[component]
pub fn CardModal() -> impl IntoView {
    let ctx = use_board();
    let ui = use_ui_store();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let detail = Memo::new(move |_| ctx.detail());

    let close = move || {
        let _ = ctx.dispatch(Command::CloseDetail);
        store_clear_comment(&ui);
    };

    let save_comment = move |_| {
        let text = store_comment_draft(&ui);
        match ctx.dispatch(Command::SaveComment { text }) {
            Some(Ok(_)) => store_clear_comment(&ui),
            Some(Err(Rejected::EmptyComment)) => store_mark_comment_invalid(&ui),
            _ => {}
        }
    };

    let pick_file = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |_| {
        let Some(input) = file_input.get() else { return };
        let filename = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        let _ = ctx.dispatch(Command::AddAttachment { filename });
        // Allow picking the same file again
        input.set_value("");
    };

    view! {
        <Show when=move || detail.with(Option::is_some)>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-card-title">
                            {move || detail.get().map(|d| d.title).unwrap_or_default()}
                        </h2>
                        <button class="close-modal" on:click=move |_| close()>"×"</button>
                    </div>

                    <section class="modal-section">
                        <h3>"Comentários"</h3>
                        <div class="comments-list">
                            {move || detail.get().map(|d| comments_view(d.fragment.comments))}
                        </div>
                        <textarea
                            class=move || if store_comment_invalid(&ui) { "new-comment invalid" } else { "new-comment" }
                            placeholder="Escreva um comentário..."
                            prop:value=move || store_comment_draft(&ui)
                            on:input=move |ev| store_set_comment_draft(&ui, event_target_value(&ev))
                        ></textarea>
                        <button class="btn-save-comment" on:click=save_comment>"Salvar"</button>
                    </section>

                    <section class="modal-section">
                        <h3>"Anexos"</h3>
                        <ul class="attachment-list">
                            {move || detail.get().map(|d| attachments_view(d.fragment.attachments))}
                        </ul>
                        <input type="file" class="hidden" node_ref=file_input on:change=on_file_change />
                        <button class="btn-add-attachment" on:click=pick_file>"Adicionar anexo"</button>
                    </section>
                </div>
            </div>
        </Show>
    }
}
