//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host stitches Leptos SSR rendering, the compiled client assets under
//! `/pkg` and the service endpoints into a single Axum router. Documents and
//! questions never pass through here; the browser talks to the document API
//! directly at the URL published in the shell.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Endpoints that do not depend on the Leptos build.
pub fn service_routes() -> Router {
    Router::new().route("/healthz", get(health::healthz))
}

/// Full application router: service routes, SSR pages and `/pkg` assets.
pub fn app(leptos_options: LeptosOptions, api_base_url: String) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), api_base_url.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
