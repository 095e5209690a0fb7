//! Toast notification queue: the user-visible success/error channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the session driver push through the [`Notifier`] trait and never
//! wait on the result. The `Toaster` component renders the queue; in the
//! browser each toast dismisses itself after [`TOAST_TTL_MS`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Fire-and-forget sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        let Some(id) = self.try_update(|t| t.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
