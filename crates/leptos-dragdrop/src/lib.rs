//! Leptos DragDrop Utilities
//! 
//! HTML5 drag-and-drop for Leptos.
//! Draggable tiles carry a numeric payload; drop zones are identified by index.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Node};

/// Clicks arriving this soon after a drag ends are not treated as clicks
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Payload of the tile being dragged
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Zone currently under the pointer
    pub hover_zone_read: ReadSignal<Option<usize>>,
    pub hover_zone_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

impl DndSignals {
    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging_id_read.get() == Some(item_id)
    }

    pub fn is_hovered(&self, zone: usize) -> bool {
        self.hover_zone_read.get() == Some(zone)
    }

    /// True right after a drop, while the trailing click is still in flight
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_zone_read, hover_zone_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_zone_read,
        hover_zone_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.hover_zone_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    let _ = Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create dragstart handler for a draggable tile
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32, on_start: Callback<u32>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        // Firefox only starts a drag when data is set
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text/plain", &item_id.to_string());
        }
        dnd.dragging_id_write.set(Some(item_id));
        on_start.run(item_id);
    }
}

/// Create dragend handler for a draggable tile
pub fn make_on_dragend(dnd: DndSignals, on_end: Callback<()>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
        on_end.run(());
    }
}

/// Create dragover handler for a drop zone (marks it as accepting the drop)
pub fn make_on_dragover(dnd: DndSignals, zone: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if dnd.hover_zone_read.get_untracked() != Some(zone) {
            dnd.hover_zone_write.set(Some(zone));
        }
    }
}

/// Create dragleave handler for a drop zone.
/// Moving onto a child of the zone fires dragleave too; that keeps the hover.
pub fn make_on_dragleave(dnd: DndSignals, zone: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if should_clear_hover(dnd.hover_zone_read.get_untracked(), zone, entered_within_zone(&ev)) {
            dnd.hover_zone_write.set(None);
        }
    }
}

/// True when the pointer left the zone for one of its own descendants
fn entered_within_zone(ev: &DragEvent) -> bool {
    let zone = ev.current_target().and_then(|t| t.dyn_into::<Node>().ok());
    let entered = ev.related_target().and_then(|t| t.dyn_into::<Node>().ok());
    match (zone, entered) {
        (Some(zone), Some(entered)) => zone.contains(Some(&entered)),
        _ => false,
    }
}

fn should_clear_hover(hovered: Option<usize>, zone: usize, entered_within_zone: bool) -> bool {
    hovered == Some(zone) && !entered_within_zone
}

/// Create drop handler for a drop zone; `on_drop` receives (payload, zone)
pub fn make_on_drop(dnd: DndSignals, zone: usize, on_drop: Callback<(u32, usize)>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragged = dnd.dragging_id_read.get_untracked();
        // The dragged tile may be re-rendered by the drop, so dragend can be lost
        end_drag(&dnd);
        if let Some(dragged) = dragged {
            on_drop.run((dragged, zone));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaving_for_child_tile_keeps_hover() {
        assert!(!should_clear_hover(Some(2), 2, true));
    }

    #[test]
    fn test_leaving_zone_clears_only_its_own_hover() {
        assert!(should_clear_hover(Some(2), 2, false));
        assert!(!should_clear_hover(Some(3), 2, false));
        assert!(!should_clear_hover(None, 2, false));
    }
}
