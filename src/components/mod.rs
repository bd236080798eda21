//! UI Components
//!
//! Leptos components of the board.

mod kanban_column;
mod kanban_card;
mod new_card_form;
mod priority_selector;
mod card_modal;
mod delete_modal;

pub use kanban_column::KanbanColumn;
pub use kanban_card::KanbanCard;
pub use new_card_form::NewCardForm;
pub use priority_selector::PrioritySelector;
pub use card_modal::CardModal;
pub use delete_modal::DeleteModal;
