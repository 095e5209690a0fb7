//! Draggable, zoomable preview surface for an attached document.
//!
//! ARCHITECTURE
//! ============
//! Pan/zoom math lives in `preview::transform::PreviewTransform`; this
//! component only maps DOM events onto it and writes the CSS back. A drag
//! that starts on the surface arms window-level `pointermove` / `pointerup`
//! listeners (see `util::drag_listeners`) so the gesture keeps tracking and
//! still ends when the pointer is released outside the surface. The listeners
//! are removed on release, on pointer-leave and when the component unmounts.

use leptos::prelude::*;
use preview::transform::PreviewTransform;

use crate::util::drag_listeners::DragListeners;

#[cfg(feature = "hydrate")]
use preview::input::Point;

/// Surface origin in viewport coordinates, `None` while unmounted.
#[cfg(feature = "hydrate")]
fn surface_origin(surface_ref: NodeRef<leptos::html::Div>) -> Option<Point> {
    surface_ref.get_untracked().map(|el| {
        let rect = el.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    })
}

#[cfg(feature = "hydrate")]
fn client_point(ev: &web_sys::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Finish the current gesture: drop the window listeners and leave drag mode.
fn end_gesture(transform: RwSignal<PreviewTransform>, listeners: StoredValue<DragListeners, LocalStorage>) {
    listeners.try_update_value(DragListeners::disarm);
    if transform.try_with_untracked(PreviewTransform::is_dragging).unwrap_or(false) {
        transform.try_update(PreviewTransform::end_drag);
    }
}

/// Renders `url` in an iframe inside a transformed, draggable surface.
///
/// The iframe ignores pointer events so the surface receives the drag.
#[component]
pub fn DocumentPreview(transform: RwSignal<PreviewTransform>, url: String, name: String) -> impl IntoView {
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let listeners = StoredValue::new_local(DragListeners::new());

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::drag_listeners::window_drag_removers;

            move |ev: leptos::ev::PointerEvent| {
                if ev.button() != 0 {
                    return;
                }
                let started = transform
                    .try_update(|t| t.begin_drag(client_point(&ev), surface_origin(surface_ref)))
                    .flatten();
                if started.is_none() {
                    return;
                }
                ev.prevent_default();

                let removers = window_drag_removers(
                    move |ev| {
                        let pointer = client_point(&ev);
                        transform.try_update(|t| t.update_drag(pointer, surface_origin(surface_ref)));
                    },
                    move |_ev| end_gesture(transform, listeners),
                );
                listeners.try_update_value(|l| l.arm(removers));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| end_gesture(transform, listeners);

    on_cleanup(move || end_gesture(transform, listeners));

    view! {
        <div
            class="document-preview"
            node_ref=surface_ref
            style:cursor=move || transform.with(PreviewTransform::cursor)
            on:pointerdown=on_pointer_down
            on:pointerleave=on_pointer_leave
        >
            <div
                class="document-preview__content"
                style:transform=move || transform.with(PreviewTransform::css_transform)
                style:transition=move || transform.with(PreviewTransform::css_transition)
                style:transform-origin="0 0"
            >
                <iframe
                    class="document-preview__frame"
                    src=url
                    title=name
                    style:pointer-events="none"
                ></iframe>
            </div>
        </div>
    }
}
