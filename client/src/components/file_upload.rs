//! Click-to-select and drag-and-drop dropzone for a single document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dropzone only decides *which* file the user picked. Files outside the
//! intake filter are rejected here with a toast; accepted files go to the
//! owning page through `on_select`, which either attaches them locally or
//! uploads them first. `busy` is driven by the page while that work runs.

#[cfg(test)]
#[path = "file_upload_test.rs"]
mod file_upload_test;

use leptos::prelude::*;

use crate::state::toast::{Notifier, ToastState};
use crate::util::intake::{self, ALLOW_MULTIPLE, SUPPORTED_FORMATS_LABEL, SelectedFile, UNSUPPORTED_FORMAT_MESSAGE};

/// Prompt under the dropzone icon for the current interaction state.
#[must_use]
pub fn prompt_text(busy: bool, drag_active: bool) -> &'static str {
    if busy {
        "Uploading..."
    } else if drag_active {
        "Drop your document here..."
    } else {
        "Drag & drop your document here, or click to select"
    }
}

/// Route the picked files: take the first, reject it at intake or hand it on.
pub fn route_selection(files: Vec<SelectedFile>, on_select: Callback<SelectedFile>, toasts: RwSignal<ToastState>) {
    let Some(selected) = intake::take_selection(files) else {
        return;
    };
    if !intake::accepts(&selected.raw) {
        leptos::logging::warn!("rejected {} ({})", selected.raw.name, selected.raw.mime_type);
        toasts.error(UNSUPPORTED_FORMAT_MESSAGE);
        return;
    }
    on_select.run(selected);
}

#[component]
pub fn FileUpload(
    on_select: Callback<SelectedFile>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let drag_active = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let open_picker = move |_| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;
                let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                    return;
                };
                let files = intake::files_from_list(input.files());
                // Reset so picking the same file again fires `change`.
                input.set_value("");
                route_selection(files, on_select, toasts);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            drag_active.set(true);
        }
    };

    let on_drag_leave = move |_ev: leptos::ev::DragEvent| drag_active.set(false);

    let on_drop = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drag_active.set(false);
                if busy.get_untracked() {
                    return;
                }
                let files = intake::files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
                route_selection(files, on_select, toasts);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drag_active.set(false);
            }
        }
    };

    view! {
        <div class="file-upload">
            <div
                class="file-upload__dropzone"
                class:file-upload__dropzone--active=move || drag_active.get()
                class:file-upload__dropzone--busy=move || busy.get()
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    class="file-upload__input"
                    type="file"
                    accept=intake::accept_attribute()
                    multiple=ALLOW_MULTIPLE
                    disabled=move || busy.get()
                    node_ref=input_ref
                    on:change=on_change
                />
                <span class="file-upload__icon" aria-hidden="true">"⇪"</span>
                <p class="file-upload__prompt">{move || prompt_text(busy.get(), drag_active.get())}</p>
                <p class="file-upload__formats">{SUPPORTED_FORMATS_LABEL}</p>
            </div>
        </div>
    }
}
