//! Single-document chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The picked file stays in the browser: it is attached with a local object
//! URL for the preview and the file name is sent as the document reference
//! with every question.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::chat_messages::ChatMessages;
use crate::components::document_viewer::DocumentViewer;
use crate::components::file_upload::FileUpload;
use crate::config::ClientConfig;
use crate::net::api::HttpAnswerService;
use crate::pages::{DOCUMENT_REMOVED_MESSAGE, DOCUMENT_UPLOADED_MESSAGE, mounted_session, spawn_submit};
use crate::state::session::ChatSession;
use crate::state::toast::{Notifier, ToastState};
use crate::util::intake::{SelectedFile, UNSUPPORTED_FORMAT_MESSAGE};
use crate::util::object_url::local_handle_for;

pub const UPLOAD_HINT: &str = "Please upload a document to start the conversation";

#[component]
pub fn DocumentChatPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = mounted_session();

    let attached = Memo::new(move |_| session.with(|s| s.document().map(|d| (d.name.clone(), d.size_label()))));
    let has_document = Memo::new(move |_| attached.with(Option::is_some));

    let on_select = Callback::new(move |selected: SelectedFile| {
        let local = local_handle_for(&selected);
        let outcome = session.try_update(|s| s.attach_document(selected.raw, local, None).map(|d| d.name.clone()));
        match outcome {
            Some(Ok(name)) => {
                leptos::logging::log!("attached {name}");
                toasts.success(DOCUMENT_UPLOADED_MESSAGE);
            }
            Some(Err(e)) => {
                leptos::logging::warn!("attach failed: {e}");
                toasts.error(UNSUPPORTED_FORMAT_MESSAGE);
            }
            None => {}
        }
    });

    let on_remove = move |_| {
        if session.try_update(ChatSession::remove_document) == Some(true) {
            toasts.success(DOCUMENT_REMOVED_MESSAGE);
        }
    };

    let answers = HttpAnswerService::new(&config);
    let on_submit = Callback::new(move |question: String| spawn_submit(session, answers.clone(), toasts, question));

    view! {
        <div class="document-chat">
            <h1 class="page-title">"Document Chat"</h1>

            <div class="document-chat__panel">
                {move || has_document.get().then(|| view! { <DocumentViewer session/> })}

                <ChatMessages session/>

                <Show when=move || !has_document.get()>
                    <FileUpload on_select busy=false/>
                </Show>

                <div class="document-chat__footer">
                    {move || {
                        attached
                            .get()
                            .map(|(name, size)| {
                                view! {
                                    <div class="document-chat__attachment">
                                        <span class="document-chat__file-name">{name}</span>
                                        <span class="document-chat__file-size">{size}</span>
                                        <button class="btn btn--danger" on:click=on_remove>
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            })
                    }}

                    <ChatInput session on_submit/>

                    <Show when=move || !has_document.get()>
                        <p class="document-chat__hint">{UPLOAD_HINT}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
