//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Rows are identified by any `DragKey`; rows only accept drops from
//! their own group.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Identity of a draggable row
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {
    /// Whether `other` may be dropped onto `self`
    fn same_group(&self, _other: &Self) -> bool {
        true
    }
}

/// DnD state signals
pub struct DndSignals<T: DragKey> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

// Signals are Copy for any T; derive would demand T: Copy.
impl<T: DragKey> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DragKey> Copy for DndSignals<T> {}

impl<T: DragKey> DndSignals<T> {
    /// Whether `key` is the row being dragged
    pub fn is_dragging(&self, key: &T) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(key))
    }

    /// Whether `key` is the row currently hovered as drop target
    pub fn is_drop_target(&self, key: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(key))
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<T: DragKey>() -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer moved far enough from the press position
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// A row accepts a drop from another row of the same group, never itself
pub fn accepts_drop<T: DragKey>(dragging: &T, target: &T) -> bool {
    dragging != target && target.same_group(dragging)
}

/// End drag operation
pub fn end_drag<T: DragKey>(dnd: &DndSignals<T>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<T: DragKey>(dnd: DndSignals<T>, key: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(key.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<T: DragKey>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_item_mouseenter<T: DragKey>(dnd: DndSignals<T>, key: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        if accepts_drop(&dragging, &key) {
            dnd.drop_target_write.set(Some(key.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T: DragKey>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// Drag state is cleared on every mouseup, whether or not a drop happened.
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: DragKey,
    F: Fn(T, T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag onto a target counts; plain clicks fall through
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
