//! Delete Confirmation Modal
//!
//! Asks before a card is removed. Clicking outside the dialog cancels.

use leptos::prelude::*;
use kanban_core::Command;

use crate::context::use_board;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_board();

    let cancel = move || {
        let _ = ctx.dispatch(Command::CancelDelete);
    };

    view! {
        <Show when=move || ctx.is_delete_pending()>
            <div class="modal-overlay" on:click=move |_| cancel()>
                <div class="modal delete-modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <h3>"Excluir card?"</h3>
                    <p>"Essa ação não pode ser desfeita."</p>
                    <div class="form-actions">
                        <button class="form-btn btn-cancel" on:click=move |_| cancel()>"Cancelar"</button>
                        <button
                            class="form-btn btn-confirm-delete"
                            on:click=move |_| {
                                let _ = ctx.dispatch(Command::ConfirmDelete);
                            }
                        >
                            "Excluir"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
