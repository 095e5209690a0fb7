//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::config::{API_URL_META_NAME, ClientConfig};
use crate::pages::{dashboard::DashboardPage, doc_chat::DocChatPage, document_chat::DocumentChatPage};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base_url` is published in a meta tag so the browser build picks up
/// the deployment's document API without a rebuild.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    provide_context(ClientConfig::from_base_url(&api_base_url));
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META_NAME content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Only app-wide services are provided as context: the API configuration,
/// the toast queue and the layout chrome state. Chat sessions are owned by
/// the page that shows them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server shell provides the configured URL; the browser reads it
    // back from the meta tag.
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    provide_context(config);
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/docchat.css"/>
        <Title text="ContractPro"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("document-chat") view=DocumentChatPage/>
                    <Route path=StaticSegment("doc-chat") view=DocChatPage/>
                </Routes>
            </Layout>
        </Router>
        <Toaster/>
    }
}
