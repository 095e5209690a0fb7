//! Collapsible viewer for the attached document: header, preview surface,
//! zoom controls and Open / Download links.

#[cfg(test)]
#[path = "document_viewer_test.rs"]
mod document_viewer_test;

use leptos::prelude::*;
use preview::input::{Modifiers, WheelDelta};
use preview::transform::{PreviewTransform, WheelOutcome};

use crate::components::document_preview::DocumentPreview;
use crate::state::document::AttachedDocument;
use crate::state::session::ChatSession;
use crate::state::ui::UiState;

pub const PREVIEW_UNAVAILABLE_TEXT: &str = "Preview not available for this file type";

/// What the viewer shows of the attached document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub size_label: String,
    /// Set only for formats the browser renders inline.
    pub preview_url: Option<String>,
    /// Local object URL; empty when none could be created.
    pub local_url: String,
}

impl DocumentView {
    #[must_use]
    pub fn has_links(&self) -> bool {
        !self.local_url.is_empty()
    }
}

impl From<&AttachedDocument> for DocumentView {
    fn from(doc: &AttachedDocument) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            size_label: doc.size_label(),
            preview_url: doc.preview_url().map(str::to_owned),
            local_url: doc.local_url().to_owned(),
        }
    }
}

#[component]
pub fn DocumentViewer(session: RwSignal<ChatSession>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let transform = RwSignal::new(PreviewTransform::new());
    let doc = Memo::new(move |_| session.with(|s| s.document().map(DocumentView::from)));

    // A new document starts from the default view.
    Effect::watch(
        move || doc.with(|d| d.as_ref().map(|d| d.id.clone())),
        move |_, _, _| transform.set(PreviewTransform::new()),
        false,
    );

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
        let modifiers = Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() };
        if !modifiers.ctrl {
            return;
        }
        let outcome = transform.try_update(|t| t.on_wheel(delta, modifiers));
        if outcome == Some(WheelOutcome::Zoomed) {
            ev.prevent_default();
        }
    };

    let field = move |f: fn(&DocumentView) -> String| move || doc.with(|d| d.as_ref().map(f).unwrap_or_default());

    view! {
        <div class="document-viewer">
            <button class="document-viewer__header" on:click=move |_| ui.update(UiState::toggle_viewer)>
                <span class="document-viewer__name">{field(|d| d.name.clone())}</span>
                <span class="document-viewer__size">{field(|d| d.size_label.clone())}</span>
                <span class="document-viewer__chevron" aria-hidden="true">
                    {move || if ui.get().viewer_open { "▴" } else { "▾" }}
                </span>
            </button>

            <Show when=move || ui.get().viewer_open>
                <div class="document-viewer__body">
                    <div class="document-viewer__viewport" on:wheel=on_wheel>
                        {move || match doc.get().and_then(|d| d.preview_url.map(|url| (url, d.name))) {
                            Some((url, name)) => view! { <DocumentPreview transform url name/> }.into_any(),
                            None => {
                                view! {
                                    <div class="document-viewer__unavailable">
                                        <p>{PREVIEW_UNAVAILABLE_TEXT}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="document-viewer__toolbar">
                        <div class="document-viewer__zoom">
                            <span>{move || format!("Zoom: {}%", transform.with(PreviewTransform::zoom_percent))}</span>
                            <button class="btn" title="Zoom In" on:click=move |_| transform.update(PreviewTransform::zoom_in)>
                                "+"
                            </button>
                            <button class="btn" title="Zoom Out" on:click=move |_| transform.update(PreviewTransform::zoom_out)>
                                "−"
                            </button>
                            <button class="btn" title="Reset View" on:click=move |_| transform.update(PreviewTransform::reset)>
                                "⟳"
                            </button>
                        </div>
                        <div class="document-viewer__links">
                            {move || {
                                doc.get()
                                    .filter(DocumentView::has_links)
                                    .map(|d| {
                                        view! {
                                            <a href=d.local_url.clone() target="_blank" rel="noopener noreferrer">
                                                "Open"
                                            </a>
                                            <a href=d.local_url download=d.name>
                                                "Download"
                                            </a>
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
