//! Window listeners scoped to one drag gesture.
//!
//! ARCHITECTURE
//! ============
//! A drag that starts on the preview surface must keep tracking, and must
//! end, even when the pointer leaves the surface. `DragListeners` holds the
//! removers for the window-level `pointermove` / `pointerup` listeners that
//! are armed at drag start. `disarm` (or drop) runs each remover exactly once,
//! so no handler outlives its gesture or the component.

#[cfg(test)]
#[path = "drag_listeners_test.rs"]
mod drag_listeners_test;

type Remover = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct DragListeners {
    removers: Vec<Remover>,
}

impl DragListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install removers for a new gesture, first removing any left over from
    /// a previous one.
    pub fn arm(&mut self, removers: Vec<Remover>) {
        self.disarm();
        self.removers = removers;
    }

    /// Remove every armed listener. Idempotent.
    pub fn disarm(&mut self) {
        for remove in self.removers.drain(..) {
            remove();
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        !self.removers.is_empty()
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Subscribe window `pointermove` / `pointerup` for the current drag.
#[cfg(feature = "hydrate")]
pub fn window_drag_removers(
    on_move: impl Fn(web_sys::PointerEvent) + 'static,
    on_up: impl Fn(web_sys::PointerEvent) + 'static,
) -> Vec<Remover> {
    use leptos::prelude::window_event_listener_untyped;
    use wasm_bindgen::JsCast;

    let move_handle = window_event_listener_untyped("pointermove", move |ev| {
        if let Ok(ev) = ev.dyn_into::<web_sys::PointerEvent>() {
            on_move(ev);
        }
    });
    let up_handle = window_event_listener_untyped("pointerup", move |ev| {
        if let Ok(ev) = ev.dyn_into::<web_sys::PointerEvent>() {
            on_up(ev);
        }
    });
    vec![Box::new(move || move_handle.remove()), Box::new(move || up_handle.remove())]
}
