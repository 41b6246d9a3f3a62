//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos with typed payloads.
//! Uses movement threshold to distinguish click from drag, and a hover
//! timer that fires when a drag lingers over the same target.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// What is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    Item(u32),
    Space(u32),
}

impl DragPayload {
    pub fn id(&self) -> u32 {
        match self {
            DragPayload::Item(id) | DragPayload::Space(id) => *id,
        }
    }
}

/// Where a payload can land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop into a space (becomes its item / child space)
    Space(u32),
    /// Drop outside every space (no parent)
    TopLevel,
}

impl DropTarget {
    /// Container id the payload ends up in (`None` = top level)
    pub fn destination(&self) -> Option<u32> {
        match self {
            DropTarget::Space(id) => Some(*id),
            DropTarget::TopLevel => None,
        }
    }
}

/// Drop policy: a space never accepts itself.
pub fn accepts(payload: DragPayload, target: DropTarget) -> bool {
    !matches!((payload, target), (DragPayload::Space(dragged), DropTarget::Space(over)) if dragged == over)
}

// ========================
// State transitions
// ========================

/// Has the pointer moved far enough from the mousedown point to start a drag?
pub fn passes_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Target to highlight when the pointer enters `target`, if any
pub fn entered(dragging: Option<DragPayload>, target: DropTarget) -> Option<DropTarget> {
    let payload = dragging?;
    accepts(payload, target).then_some(target)
}

/// Whether an armed hover timer for `space_id` should fire now
pub fn hover_fires(dragging: Option<DragPayload>, drop_target: Option<DropTarget>, space_id: u32) -> bool {
    dragging.is_some() && drop_target == Some(DropTarget::Space(space_id))
}

/// What a mouseup means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Mouse went down and up without crossing the threshold
    Click,
    /// A drag ended away from any accepting target
    Cancelled,
    Drop(DragPayload, DropTarget),
}

impl Release {
    /// A drag happened, so the click that follows must be ignored
    pub fn was_drag(&self) -> bool {
        !matches!(self, Release::Click)
    }
}

pub fn classify_release(dragging: Option<DragPayload>, drop_target: Option<DropTarget>) -> Release {
    match (dragging, drop_target) {
        (None, _) => Release::Click,
        (Some(payload), Some(target)) if accepts(payload, target) => Release::Drop(payload, target),
        (Some(_), _) => Release::Cancelled,
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragPayload>>,
    pub dragging_write: WriteSignal<Option<DragPayload>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragPayload>>,
    pub pending_write: WriteSignal<Option<DragPayload>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Handle of the armed hover timer, if any
    pub hover_timer_read: ReadSignal<Option<i32>>,
    pub hover_timer_write: WriteSignal<Option<i32>>,
    /// Callback behind the hover timer; replaced on every re-arm
    hover_callback: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a drag must rest over a space before the hover callback fires
pub const HOVER_NAVIGATE_MS: i32 = 1000;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragPayload>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragPayload>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (hover_timer_read, hover_timer_write) = signal(None::<i32>);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        hover_timer_read,
        hover_timer_write,
        hover_callback: StoredValue::new_local(None),
    }
}

/// Cancel the hover timer if one is armed
pub fn cancel_hover_timer(dnd: &DndSignals) {
    if let Some(handle) = dnd.hover_timer_read.get_untracked() {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(handle);
        }
        dnd.hover_timer_write.set(None);
    }
}

fn arm_hover_timer(dnd: DndSignals, space_id: u32, on_hover: Callback<u32>) {
    cancel_hover_timer(&dnd);
    let Some(win) = web_sys::window() else { return };

    let fire = Closure::<dyn FnMut()>::new(move || {
        dnd.hover_timer_write.set(None);
        if hover_fires(dnd.dragging_read.get_untracked(), dnd.drop_target_read.get_untracked(), space_id) {
            on_hover.run(space_id);
        }
    });
    if let Ok(handle) = win.set_timeout_with_callback_and_timeout_and_arguments_0(fire.as_ref().unchecked_ref(), HOVER_NAVIGATE_MS) {
        dnd.hover_timer_write.set(Some(handle));
    }
    // The previous timer was cleared above, so its callback can go
    dnd.hover_callback.set_value(Some(fire));
}

/// End drag operation; the click that follows is suppressed for 100 ms
pub fn end_drag(dnd: &DndSignals) {
    cancel_hover_timer(dnd);
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        // Always runs, so the one-shot closure frees itself
        let cb = Closure::once_into_js(move || clear.set(false));
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 100);
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, payload: DragPayload) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Form controls keep their own mouse handling
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(payload));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if passes_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for spaces.
/// Marks the space as drop target (unless refused) and arms the hover timer.
pub fn make_on_space_mouseenter(
    dnd: DndSignals,
    space_id: u32,
    on_hover: Callback<u32>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(target) = entered(dnd.dragging_read.get_untracked(), DropTarget::Space(space_id)) {
            dnd.drop_target_write.set(Some(target));
            arm_hover_timer(dnd, space_id, on_hover);
        }
    }
}

/// Create mouseenter handler for the top-level zone
pub fn make_on_top_level_mouseenter(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(target) = entered(dnd.dragging_read.get_untracked(), DropTarget::TopLevel) {
            cancel_hover_timer(&dnd);
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            cancel_hover_timer(&dnd);
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragPayload, DropTarget) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let release = classify_release(dnd.dragging_read.get_untracked(), dnd.drop_target_read.get_untracked());
        dnd.pending_write.set(None);
        if !release.was_drag() {
            return;
        }

        end_drag(&dnd);
        if let Release::Drop(payload, target) = release {
            on_drop(payload, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_refuses_itself() {
        assert!(!accepts(DragPayload::Space(4), DropTarget::Space(4)));
    }

    #[test]
    fn test_item_with_same_id_is_accepted() {
        // Item ids and space ids are separate namespaces
        assert!(accepts(DragPayload::Item(4), DropTarget::Space(4)));
    }

    #[test]
    fn test_other_combinations_accepted() {
        assert!(accepts(DragPayload::Space(4), DropTarget::Space(5)));
        assert!(accepts(DragPayload::Space(4), DropTarget::TopLevel));
        assert!(accepts(DragPayload::Item(1), DropTarget::TopLevel));
    }

    #[test]
    fn test_destination() {
        assert_eq!(DropTarget::Space(9).destination(), Some(9));
        assert_eq!(DropTarget::TopLevel.destination(), None);
        assert_eq!(DragPayload::Space(3).id(), 3);
    }

    #[test]
    fn test_threshold() {
        assert!(!passes_threshold((100, 100), (100, 100)));
        assert!(!passes_threshold((100, 100), (105, 95)));
        assert!(passes_threshold((100, 100), (106, 100)));
        assert!(passes_threshold((100, 100), (100, 94)));
    }

    #[test]
    fn test_plain_click_is_not_a_drag() {
        // mousedown recorded a pending payload but the pointer never moved
        let release = classify_release(None, None);
        assert_eq!(release, Release::Click);
        assert!(!release.was_drag());
    }

    #[test]
    fn test_drag_release() {
        let drop = classify_release(Some(DragPayload::Item(10)), Some(DropTarget::Space(3)));
        assert_eq!(drop, Release::Drop(DragPayload::Item(10), DropTarget::Space(3)));
        assert!(drop.was_drag());

        let nowhere = classify_release(Some(DragPayload::Item(10)), None);
        assert_eq!(nowhere, Release::Cancelled);
        assert!(nowhere.was_drag());

        let onto_itself = classify_release(Some(DragPayload::Space(2)), Some(DropTarget::Space(2)));
        assert_eq!(onto_itself, Release::Cancelled);
    }

    #[test]
    fn test_enter_only_while_dragging() {
        assert_eq!(entered(None, DropTarget::Space(1)), None);
        assert_eq!(entered(Some(DragPayload::Item(1)), DropTarget::Space(1)), Some(DropTarget::Space(1)));
        assert_eq!(entered(Some(DragPayload::Space(1)), DropTarget::Space(1)), None);
        assert_eq!(entered(Some(DragPayload::Space(1)), DropTarget::TopLevel), Some(DropTarget::TopLevel));
    }

    #[test]
    fn test_hover_fires_only_over_same_space() {
        let dragging = Some(DragPayload::Item(10));
        assert!(hover_fires(dragging, Some(DropTarget::Space(3)), 3));
        // Left the row (target cleared) or moved on to another one
        assert!(!hover_fires(dragging, None, 3));
        assert!(!hover_fires(dragging, Some(DropTarget::Space(4)), 3));
        assert!(!hover_fires(dragging, Some(DropTarget::TopLevel), 3));
        // Dropped before the timer expired
        assert!(!hover_fires(None, Some(DropTarget::Space(3)), 3));
    }

    #[test]
    fn test_hover_delay() {
        assert_eq!(HOVER_NAVIGATE_MS, 1000);
    }
}
