//! Landing page linking to the two chat views.

use leptos::prelude::*;

struct Card {
    title: &'static str,
    body: &'static str,
    href: &'static str,
}

const CARDS: [Card; 2] = [
    Card {
        title: "Document Chat",
        body: "Upload a single document, preview it, and ask questions about its content.",
        href: "/document-chat",
    },
    Card {
        title: "Chat with Docs",
        body: "Organise uploads into folders and chat with documents stored by the document service.",
        href: "/doc-chat",
    },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <div class="dashboard-page__cards">
                {CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <a class="dashboard-card" href=card.href>
                                <h2 class="dashboard-card__title">{card.title}</h2>
                                <p class="dashboard-card__body">{card.body}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
