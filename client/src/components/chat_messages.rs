//! Chat thread for one session.

#[cfg(test)]
#[path = "chat_messages_test.rs"]
mod chat_messages_test;

use leptos::prelude::*;

use crate::state::session::{ChatMessage, ChatSession, Role};
use crate::util::markdown::render_reply_html;
use crate::util::time::format_time_of_day;

pub const EMPTY_THREAD_TEXT: &str =
    "Upload a document and start asking questions about its content. I'm here to help you analyze and understand your documents.";

/// Message list with auto-scroll to the newest message.
///
/// Assistant replies are rendered as markdown with raw HTML stripped; user
/// messages are shown verbatim.
#[component]
pub fn ChatMessages(session: RwSignal<ChatSession>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = session.with(|s| (s.messages().len(), s.is_processing()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            <Show when=move || session.with(|s| s.messages().is_empty())>
                <div class="chat-messages__empty">
                    <p>{EMPTY_THREAD_TEXT}</p>
                </div>
            </Show>

            <For
                each=move || session.with(|s| s.messages().to_vec())
                key=row_key
                children=move |msg| view! { <MessageRow msg=msg/> }
            />

            {move || {
                session
                    .with(ChatSession::is_processing)
                    .then(|| view! { <div class="chat-messages__pending">"Thinking..."</div> })
            }}
        </div>
    }
}

/// Rows are keyed by message id so appending a message leaves earlier rows
/// in place.
fn row_key(msg: &ChatMessage) -> String {
    msg.id.clone()
}

#[component]
fn MessageRow(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.role == Role::User;
    let time = format_time_of_day(msg.created_at_ms);
    let body = if is_user {
        view! { <p class="chat-messages__text">{msg.content}</p> }.into_any()
    } else {
        let rendered = render_reply_html(&msg.content);
        view! { <div class="chat-messages__markdown" inner_html=rendered></div> }.into_any()
    };

    view! {
        <div
            class="chat-messages__row"
            class:chat-messages__row--user=is_user
            class:chat-messages__row--assistant={!is_user}
        >
            <span class="chat-messages__avatar" aria-hidden="true">
                {if is_user { "You" } else { "AI" }}
            </span>
            <div class="chat-messages__bubble">
                {body}
                <span class="chat-messages__time">{time}</span>
            </div>
        </div>
    }
}
