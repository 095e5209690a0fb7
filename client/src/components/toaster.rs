//! Toast stack rendered over every page.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Renders queued toasts; a click dismisses one early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toaster__toast"
                            class:toaster__toast--success={toast.kind == ToastKind::Success}
                            class:toaster__toast--error={toast.kind == ToastKind::Error}
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
