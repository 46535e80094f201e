//! Leptos DragDrop Utilities
//!
//! Kind-keyed drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! A source is registered with a kind string; a target accepts exactly one
//! kind. Views never run the gesture themselves: they read the
//! `dragging` / `dragging_over` markers and forward the [`DropPayload`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Identity of a draggable item
pub trait DragId: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static {}

impl<T> DragId for T where T: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static {}

/// The item a gesture started on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource<Id> {
    pub kind: &'static str,
    pub id: Id,
}

/// Emitted once when a compatible source is released over a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropPayload<Id> {
    pub kind: &'static str,
    pub source: Id,
    pub target: Id,
}

/// True once the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Whether a target accepting `accept_kind` takes `source`.
/// Items never accept themselves.
pub fn accepts<Id: PartialEq>(source: &DragSource<Id>, accept_kind: &str, target: Id) -> bool {
    source.kind == accept_kind && source.id != target
}

/// Gesture state: pressed, dragging, hovering a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState<Id> {
    /// Mousedown seen but not yet moved past the threshold
    pub pending: Option<DragSource<Id>>,
    pub start: (i32, i32),
    pub dragging: Option<DragSource<Id>>,
    /// Target currently hovered by a compatible source
    pub over: Option<Id>,
}

impl<Id> Default for DragState<Id> {
    fn default() -> Self {
        Self {
            pending: None,
            start: (0, 0),
            dragging: None,
            over: None,
        }
    }
}

impl<Id: DragId> DragState<Id> {
    pub fn press(&mut self, source: DragSource<Id>, at: (i32, i32)) {
        self.pending = Some(source);
        self.start = at;
    }

    /// Promote the pending press to a drag once past the threshold.
    /// Returns true when the drag starts.
    pub fn pointer_moved(&mut self, at: (i32, i32)) -> bool {
        if self.dragging.is_some() || !exceeds_threshold(self.start, at) {
            return false;
        }
        match self.pending {
            Some(source) => {
                self.dragging = Some(source);
                true
            }
            None => false,
        }
    }

    pub fn enter(&mut self, accept_kind: &str, target: Id) {
        if let Some(source) = self.dragging {
            if accepts(&source, accept_kind, target) {
                self.over = Some(target);
            }
        }
    }

    /// Only clears the marker `target` owns
    pub fn leave(&mut self, target: Id) {
        if self.over == Some(target) {
            self.over = None;
        }
    }

    /// Release over `target`. An accepted drop ends the gesture and yields
    /// its payload; otherwise nothing changes.
    pub fn release_over(&mut self, accept_kind: &str, target: Id) -> Option<DropPayload<Id>> {
        let source = self.dragging?;
        if !accepts(&source, accept_kind, target) {
            return None;
        }
        self.reset();
        Some(DropPayload {
            kind: source.kind,
            source: source.id,
            target,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<Id: DragId> {
    pub state_read: ReadSignal<DragState<Id>>,
    pub state_write: WriteSignal<DragState<Id>>,
}

pub fn create_dnd_signals<Id: DragId>() -> DndSignals<Id> {
    let (state_read, state_write) = signal(DragState::<Id>::default());
    DndSignals { state_read, state_write }
}

impl<Id: DragId> DndSignals<Id> {
    /// Apply `f` to a copy of the state; write back only when it changed
    fn apply<R>(&self, f: impl FnOnce(&mut DragState<Id>) -> R) -> R {
        let before = self.state_read.get_untracked();
        let mut next = before;
        let out = f(&mut next);
        if next != before {
            self.state_write.set(next);
        }
        out
    }
}

/// End drag operation
pub fn end_drag<Id: DragId>(dnd: &DndSignals<Id>) {
    dnd.apply(DragState::reset);
}

/// Per-item binding: one source kind, one accepted target kind, one id.
///
/// Copy it into a view; the view attaches the handlers and reads the markers.
#[derive(Clone, Copy)]
pub struct DragHandle<Id: DragId> {
    dnd: DndSignals<Id>,
    kind: &'static str,
    id: Id,
}

impl<Id: DragId> DragHandle<Id> {
    /// Item of `kind` that is both a source and a target for `kind`
    pub fn new(dnd: DndSignals<Id>, kind: &'static str, id: Id) -> Self {
        Self { dnd, kind, id }
    }

    /// This item is the one being dragged
    pub fn dragging(&self) -> Signal<bool> {
        let dnd = self.dnd;
        let id = self.id;
        Memo::new(move |_| dnd.state_read.with(|s| matches!(s.dragging, Some(src) if src.id == id))).into()
    }

    /// A compatible item is dragged over this one
    pub fn dragging_over(&self) -> Signal<bool> {
        let dnd = self.dnd;
        let id = self.id;
        Memo::new(move |_| dnd.state_read.with(|s| s.over == Some(id))).into()
    }

    pub fn on_mousedown(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        make_on_mousedown(self.dnd, self.kind, self.id)
    }

    pub fn on_mouseenter(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        make_on_target_mouseenter(self.dnd, self.kind, self.id)
    }

    pub fn on_mouseleave(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        make_on_mouseleave(self.dnd, self.id)
    }

    pub fn on_mouseup<F>(&self, on_drop: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
    where
        F: Fn(DropPayload<Id>) + Clone + 'static,
    {
        make_on_target_mouseup(self.dnd, self.kind, self.id, on_drop)
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<Id: DragId>(
    dnd: DndSignals<Id>,
    kind: &'static str,
    id: Id,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Controls inside the row keep their own mouse behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.apply(|s| s.press(DragSource { kind, id }, (ev.client_x(), ev.client_y())));
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove<Id: DragId>(dnd: DndSignals<Id>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.apply(|s| s.pointer_moved((ev.client_x(), ev.client_y()))) {
            log::debug!("[DND] drag start: {:?}", dnd.state_read.get_untracked().dragging);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for targets accepting `accept_kind`
pub fn make_on_target_mouseenter<Id: DragId>(
    dnd: DndSignals<Id>,
    accept_kind: &'static str,
    id: Id,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| dnd.apply(|s| s.enter(accept_kind, id))
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Id: DragId>(dnd: DndSignals<Id>, id: Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| dnd.apply(|s| s.leave(id))
}

/// Create mouseup handler for targets; fires `on_drop` once per accepted drop
pub fn make_on_target_mouseup<Id, F>(
    dnd: DndSignals<Id>,
    accept_kind: &'static str,
    id: Id,
    on_drop: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: DragId,
    F: Fn(DropPayload<Id>) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(payload) = dnd.apply(|s| s.release_over(accept_kind, id)) {
            log::debug!("[DND] drop: {:?}", payload);
            on_drop(payload);
        }
    }
}

/// Bind document mouseup: releasing anywhere else cancels the gesture.
/// Target mouseup runs first (bubbling), so accepted drops are already handled.
pub fn bind_global_mouseup<Id: DragId>(dnd: DndSignals<Id>) {
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if dnd.state_read.get_untracked().dragging.is_some() {
            log::debug!("[DND] drag cancelled");
        }
        end_drag(&dnd);
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

    const KIND: &str = "todo-task";

    fn dragging(id: u32) -> DragState<u32> {
        let mut state = DragState::default();
        state.press(DragSource { kind: KIND, id }, (10, 10));
        assert!(state.pointer_moved((30, 10)));
        state
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_accepts_same_kind_only() {
        let source = DragSource { kind: KIND, id: 1u32 };
        assert!(accepts(&source, KIND, 2));
        assert!(!accepts(&source, "tag", 2));
        // never onto itself
        assert!(!accepts(&source, KIND, 1));
    }

    #[test]
    fn test_small_move_is_a_click() {
        let mut state = DragState::default();
        state.press(DragSource { kind: KIND, id: 1u32 }, (10, 10));
        assert!(!state.pointer_moved((12, 13)));
        assert_eq!(state.dragging, None);
        // no press, no drag
        let mut idle = DragState::<u32>::default();
        assert!(!idle.pointer_moved((100, 100)));
    }

    #[test]
    fn test_enter_gated_by_kind_and_self() {
        let mut state = dragging(3);
        state.enter("tag", 7);
        assert_eq!(state.over, None);
        state.enter(KIND, 3);
        assert_eq!(state.over, None);
        state.enter(KIND, 7);
        assert_eq!(state.over, Some(7));

        // leaving another target keeps the marker
        state.leave(8);
        assert_eq!(state.over, Some(7));
        state.leave(7);
        assert_eq!(state.over, None);
    }

    #[test]
    fn test_release_yields_payload_once_and_clears_state() {
        let mut state = dragging(3);
        state.enter(KIND, 7);
        assert_eq!(
            state.release_over(KIND, 7),
            Some(DropPayload { kind: KIND, source: 3, target: 7 })
        );
        // nothing lingers once the drop is delivered
        assert_eq!(state, DragState::default());
        assert_eq!(state.release_over(KIND, 7), None);
    }

    #[test]
    fn test_release_over_rejected_target_keeps_drag() {
        let mut state = dragging(3);
        assert_eq!(state.release_over(KIND, 3), None);
        assert_eq!(state.release_over("tag", 7), None);
        assert!(state.dragging.is_some());

        state.reset();
        assert_eq!(state, DragState::default());
    }
}
