//! Rendered HTML pages and embedded assets

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use std::sync::Arc;

use super::ServerState;
use crate::content::{Article, Language};

/// Characters escaped when a slug becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub lang: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct SwitchParams {
    pub lang: Language,
}

/// GET / - the listing shell. Cards are fetched and filtered in the
/// browser over the language-scoped /posts response.
pub async fn index(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<PageParams>,
) -> Response {
    let lang = params.lang.unwrap_or(state.config.default_language);

    match state.templates.render_index(&state.config, &state.i18n, lang) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure("index", &e),
    }
}

/// GET /article/:slug - one server-rendered article
pub async fn article(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let found = match state.catalog.get_by_slug(&slug) {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("Content scan failed: {}", e);
            None
        }
    };

    let Some(article) = found else {
        return not_found(&state);
    };

    let body_html = match state.renderer.render(&article.content) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render article {:?}: {}", article.slug, e);
            String::new()
        }
    };

    match state
        .templates
        .render_article(&state.config, &state.i18n, &article, &body_html)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(&article.slug, &e),
    }
}

/// GET /article/:slug/switch?lang=L
///
/// The language toggle on an article page lands here: readers continue
/// to the translation sibling when one exists, and back to the listing
/// root when the article has no translation yet.
pub async fn switch_language(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Query(params): Query<SwitchParams>,
) -> Redirect {
    let lang = params.lang;

    let sibling = state
        .catalog
        .get_by_slug(&slug)
        .unwrap_or_else(|e| {
            tracing::error!("Content scan failed: {}", e);
            None
        })
        .and_then(|article| find_sibling_logged(&state, &article, lang));

    match sibling {
        Some(sibling) => {
            let encoded = utf8_percent_encode(&sibling.slug, PATH_SEGMENT);
            Redirect::to(&format!("/article/{}", encoded))
        }
        None => Redirect::to(&format!("/?lang={}", lang)),
    }
}

fn find_sibling_logged(state: &ServerState, article: &Article, lang: Language) -> Option<Article> {
    state
        .catalog
        .find_sibling(&article.translation_key, lang)
        .unwrap_or_else(|e| {
            tracing::error!("Content scan failed: {}", e);
            None
        })
}

/// GET /assets/app.js
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("assets/app.js"),
    )
}

/// GET /assets/style.css
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("assets/style.css"),
    )
}

fn not_found(state: &ServerState) -> Response {
    let lang = state.config.default_language;
    match state
        .templates
        .render_not_found(&state.config, &state.i18n, lang)
    {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render 404 page: {}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn render_failure(what: &str, err: &anyhow::Error) -> Response {
    tracing::error!("Failed to render {}: {}", what, err);
    (StatusCode::INTERNAL_SERVER_ERROR, "render error").into_response()
}
