//! UI State Store
//!
//! Transient input state that the board controller does not own.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Input state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Text typed in the comment box of the detail modal
    pub comment_draft: String,
    /// Last save attempt was rejected as empty
    pub comment_invalid: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_comment_draft(store: &UiStore) -> String {
    store.comment_draft().get()
}

pub fn store_set_comment_draft(store: &UiStore, text: String) {
    store.comment_draft().set(text);
    store.comment_invalid().set(false);
}

pub fn store_comment_invalid(store: &UiStore) -> bool {
    store.comment_invalid().get()
}

pub fn store_mark_comment_invalid(store: &UiStore) {
    store.comment_invalid().set(true);
}

/// Reset the comment box (after a save or when the modal closes)
pub fn store_clear_comment(store: &UiStore) {
    store.comment_draft().set(String::new());
    store.comment_invalid().set(false);
}
