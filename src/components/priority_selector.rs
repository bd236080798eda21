//! Priority Selector Component
//!
//! Priority dropdown for the creation form.

use leptos::prelude::*;
use kanban_core::Priority;

#[component]
pub fn PrioritySelector(
    priority: ReadSignal<Priority>,
    set_priority: WriteSignal<Priority>,
) -> impl IntoView {
    view! {
        <select
            class="priority-select"
            on:change=move |ev| set_priority.set(Priority::from_str(&event_target_value(&ev)))
        >
            {Priority::ALL.iter().map(|&option| {
                view! {
                    <option value=option.as_str() prop:selected=move || priority.get() == option>
                        {option.option_label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
