//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over what is dragged (`P`, e.g. a card position) and what it can
//! be dropped on (`T`, e.g. a column).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<P: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<P>>,
    pub dragging_write: WriteSignal<Option<P>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<P>>,
    pub pending_write: WriteSignal<Option<P>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<P, T> {}

impl<P, T> DndSignals<P, T>
where
    P: Copy + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    /// Whether a drag is in progress (reactive)
    pub fn is_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    /// Whether `target` is currently hovered by a drag (reactive)
    pub fn is_drop_target(&self, target: T) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

pub fn create_dnd_signals<P, T>() -> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<P>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (pending_read, pending_write) = signal(None::<P>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// True once the pointer moved far enough from `start` to count as a drag
pub fn past_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Clears the drag, the hovered target and any pending press
pub fn end_drag<P, T>(dnd: &DndSignals<P, T>)
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<P, T>(dnd: DndSignals<P, T>, payload: P) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Copy + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(&ev) {
            return;
        }
        dnd.pending_write.set(Some(payload));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<P, T>(dnd: DndSignals<P, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<P, T>(dnd: DndSignals<P, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Promotes the pending press into a drag once it moves past the threshold
pub fn pointer_moved<P, T>(dnd: &DndSignals<P, T>, position: (i32, i32))
where
    P: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let pending = dnd.pending_read.get_untracked();
    if pending.is_none() || dnd.dragging_read.get_untracked().is_some() {
        return;
    }
    if past_threshold(dnd.start_read.get_untracked(), position) {
        dnd.dragging_write.set(pending);
    }
}

/// Bind document mousemove handler - starts drag if moved enough
fn bind_global_mousemove<P, T>(dnd: DndSignals<P, T>)
where
    P: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer_moved(&dnd, (ev.client_x(), ev.client_y()));
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
/// Also binds the mousemove listener that promotes a press into a drag.
pub fn bind_global_mouseup<P, T, F>(dnd: DndSignals<P, T>, on_drop: F)
where
    P: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(P, T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Not dragging: the click event fires naturally on the element
        end_drag(&dnd);

        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_small_moves_stay_clicks() {
        assert!(!past_threshold((10, 10), (10, 10)));
        assert!(!past_threshold((10, 10), (15, 5)));
    }

    #[test]
    fn test_large_moves_start_drag() {
        assert!(past_threshold((10, 10), (16, 10)));
        assert!(past_threshold((10, 10), (10, 3)));
    }

    #[test]
    fn test_pointer_moved_starts_drag_past_threshold() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<(u8, usize), u8>();
            dnd.pending_write.set(Some((1, 0)));
            dnd.start_write.set((100, 100));

            pointer_moved(&dnd, (103, 102));
            assert_eq!(dnd.dragging_read.get_untracked(), None);

            pointer_moved(&dnd, (120, 100));
            assert_eq!(dnd.dragging_read.get_untracked(), Some((1, 0)));
        });
    }

    #[test]
    fn test_pointer_moved_without_press_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<(u8, usize), u8>();
            pointer_moved(&dnd, (500, 500));
            assert_eq!(dnd.dragging_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_end_drag_clears_state() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<(u8, usize), u8>();
            dnd.pending_write.set(Some((0, 2)));
            dnd.dragging_write.set(Some((0, 2)));
            dnd.drop_target_write.set(Some(1));

            end_drag(&dnd);

            assert_eq!(dnd.dragging_read.get_untracked(), None);
            assert_eq!(dnd.drop_target_read.get_untracked(), None);
            assert_eq!(dnd.pending_read.get_untracked(), None);
        });
    }
}
