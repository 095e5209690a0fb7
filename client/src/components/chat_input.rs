//! Question input for a chat session.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use leptos::prelude::*;

use crate::state::session::ChatSession;

pub const PLACEHOLDER: &str = "Ask a question about your document...";

/// Whether the send button is enabled.
#[must_use]
pub fn can_send(text: &str, has_document: bool, is_processing: bool) -> bool {
    has_document && !is_processing && !text.trim().is_empty()
}

/// Text input and send button.
///
/// The input is disabled until a document is attached; the button also
/// waits for the in-flight question. `on_submit` receives the question and
/// the field is cleared.
#[component]
pub fn ChatInput(session: RwSignal<ChatSession>, on_submit: Callback<String>) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let has_document = move || session.with(|s| s.document().is_some());
    let is_processing = move || session.with(ChatSession::is_processing);
    let enabled = move || input.with(|text| can_send(text, has_document(), is_processing()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !enabled() {
            return;
        }
        on_submit.run(input.get_untracked());
        input.set(String::new());
    };

    view! {
        <form class="chat-input" on:submit=on_form_submit>
            <input
                class="chat-input__field"
                type="text"
                placeholder=PLACEHOLDER
                disabled=move || !has_document()
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn btn--primary chat-input__send" type="submit" disabled=move || !enabled()>
                {move || if is_processing() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}
