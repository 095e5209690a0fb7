//! Folder-organised chat page ("Chat with Docs").
//!
//! SYSTEM CONTEXT
//! ==============
//! Files are uploaded to the remote document service before they are
//! attached; the returned `filepath` becomes the session's document
//! reference. Folders only group upload summaries; switching folders leaves
//! the conversation alone, and "New Chat" clears the thread but keeps the
//! document.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::chat_messages::ChatMessages;
use crate::components::file_upload::FileUpload;
use crate::config::ClientConfig;
use crate::net::api::{HttpAnswerService, upload_document};
use crate::pages::{DOCUMENT_UPLOADED_MESSAGE, mounted_session, spawn_submit};
use crate::state::folders::{FileSummary, FolderState};
use crate::state::session::ChatSession;
use crate::state::toast::{Notifier, ToastState};
use crate::util::intake::SelectedFile;
use crate::util::object_url::local_handle_for;

pub const SELECT_FOLDER_MESSAGE: &str = "Please select or create a folder first";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload document";
pub const FOLDER_CREATED_MESSAGE: &str = "New folder created";
pub const CHAT_RESET_MESSAGE: &str = "Chat reset successfully";

/// Upload `selected` to the document service, then attach it to `session`
/// and record it in the active folder.
async fn upload_and_attach(
    config: ClientConfig,
    selected: SelectedFile,
    session: RwSignal<ChatSession>,
    folders: RwSignal<FolderState>,
    toasts: RwSignal<ToastState>,
) {
    let uploaded = match upload_document(&config, &selected).await {
        Ok(uploaded) => uploaded,
        Err(e) => {
            leptos::logging::error!("upload of {} failed: {e}", selected.raw.name);
            toasts.error(UPLOAD_FAILED_MESSAGE);
            return;
        }
    };
    leptos::logging::log!("{}: {}", uploaded.filename, uploaded.message);

    let summary = FileSummary::from(&selected.raw);
    let local = local_handle_for(&selected);
    let attached = session.try_update(|s| s.attach_document(selected.raw, local, Some(uploaded.filepath)).map(|_| ()));
    match attached {
        Some(Ok(())) => {
            folders.try_update(|f| f.add_file(summary));
            toasts.success(DOCUMENT_UPLOADED_MESSAGE);
        }
        Some(Err(e)) => {
            leptos::logging::warn!("attach after upload failed: {e}");
            toasts.error(UPLOAD_FAILED_MESSAGE);
        }
        None => {}
    }
}

#[component]
pub fn DocChatPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = mounted_session();
    let folders = RwSignal::new(FolderState::default());
    let uploading = RwSignal::new(false);

    let on_new_folder = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = web_sys::window().and_then(|w| w.prompt_with_message("Enter folder name:").ok().flatten());
            let Some(name) = name else {
                return;
            };
            if folders.try_update(|f| f.create_folder(&name).is_some()) == Some(true) {
                toasts.success(FOLDER_CREATED_MESSAGE);
            }
        }
    };

    let on_new_chat = move |_| {
        session.update(ChatSession::clear);
        toasts.success(CHAT_RESET_MESSAGE);
    };

    let upload_config = config.clone();
    let on_select = Callback::new(move |selected: SelectedFile| {
        if folders.with_untracked(|f| f.active().is_none()) {
            toasts.error(SELECT_FOLDER_MESSAGE);
            return;
        }
        uploading.set(true);
        let config = upload_config.clone();
        leptos::task::spawn_local(async move {
            upload_and_attach(config, selected, session, folders, toasts).await;
            uploading.try_set(false);
        });
    });

    let answers = HttpAnswerService::new(&config);
    let on_submit = Callback::new(move |question: String| spawn_submit(session, answers.clone(), toasts, question));

    let show_dropzone = move || folders.with(|f| f.active().is_some() && !f.active_has_files());

    view! {
        <div class="doc-chat">
            <aside class="doc-chat__folders">
                <button class="btn btn--primary doc-chat__new-folder" on:click=on_new_folder>
                    "+ New Folder"
                </button>
                <div class="doc-chat__folder-list">
                    <For
                        each=move || folders.get().folders
                        key=|folder| (folder.id.clone(), folder.files.len())
                        children=move |folder| {
                            let id = folder.id.clone();
                            let active_id = folder.id.clone();
                            view! {
                                <button
                                    class="doc-chat__folder"
                                    class:doc-chat__folder--active=move || folders.with(|f| f.is_active(&active_id))
                                    on:click=move |_| {
                                        folders.update(|f| {
                                            f.select(&id);
                                        });
                                    }
                                >
                                    <span class="doc-chat__folder-name">{folder.name}</span>
                                    <span class="doc-chat__folder-count">{folder.files.len()}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </aside>

            <section class="doc-chat__main">
                <header class="doc-chat__header">
                    <h1 class="page-title">"Chat with Docs"</h1>
                    <button class="btn" on:click=on_new_chat>
                        "New Chat"
                    </button>
                </header>

                <ChatMessages session/>

                <Show when=show_dropzone>
                    <FileUpload on_select busy=uploading/>
                </Show>

                <div class="doc-chat__footer">
                    <ChatInput session on_submit/>
                </div>
            </section>
        </div>
    }
}
