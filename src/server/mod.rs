//! HTTP server - the JSON read API and the rendered pages

mod api;
mod pages;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ContentCatalog, MarkdownRenderer};
use crate::i18n::I18n;
use crate::relay::SubscriptionRelay;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Shared server state
pub struct ServerState {
    pub config: SiteConfig,
    pub catalog: ContentCatalog,
    pub relay: SubscriptionRelay,
    pub renderer: MarkdownRenderer,
    pub templates: TemplateRenderer,
    pub i18n: I18n,
}

impl ServerState {
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            config: blog.config.clone(),
            catalog: blog.catalog(),
            relay: SubscriptionRelay::from_env()?,
            renderer: MarkdownRenderer::new(),
            templates: TemplateRenderer::new()?,
            i18n: I18n::new()?,
        })
    }
}

pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/article/:slug", get(pages::article))
        .route("/article/:slug/switch", get(pages::switch_language))
        .route("/assets/app.js", get(pages::app_js))
        .route("/assets/style.css", get(pages::style_css))
        // Read API
        .route("/posts", get(api::list_posts))
        .route("/posts/:slug", get(api::get_post))
        .route("/subscribe", post(api::subscribe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the blog server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog)?);
    let app = build_router(state);

    // Handle "localhost" specially; it is not a bindable address literal
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
