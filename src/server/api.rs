//! JSON read API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ServerState;
use crate::content::{Article, Language};
use crate::relay::{RelayError, SubscribeRequest};

/// Error payload shared by every endpoint:
/// `{ "status": "error", "message": "..." }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = serde_json::json!({
            "status": "error",
            "message": self.message,
        });
        (self.status, Json(payload)).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        let status = match err {
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            RelayError::NotConfigured | RelayError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub lang: Option<Language>,
}

/// One language's slice of the catalog plus its category set
#[derive(Debug, Serialize)]
pub struct LanguagePage {
    pub posts: Vec<Article>,
    pub categories: Vec<String>,
}

/// GET /posts
///
/// Without `lang`: every article, all languages, newest first. With
/// `lang`: that language's articles and categories.
pub async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListParams>,
) -> Response {
    match params.lang {
        None => Json(fetch_or_empty(|| state.catalog.list_all())).into_response(),
        Some(lang) => {
            let posts = fetch_or_empty(|| state.catalog.list_by_language(lang));
            let categories = fetch_or_empty(|| state.catalog.categories(lang));
            Json(LanguagePage { posts, categories }).into_response()
        }
    }
}

/// Scan failures degrade to an empty list; the listing shows a "no
/// articles" state rather than an error page.
fn fetch_or_empty<T>(query: impl FnOnce() -> anyhow::Result<Vec<T>>) -> Vec<T> {
    query().unwrap_or_else(|e| {
        tracing::error!("Content scan failed: {}", e);
        Vec::new()
    })
}

/// GET /posts/:slug
pub async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .catalog
        .get_by_slug(&slug)
        .map_err(|e| {
            tracing::error!("Content scan failed: {}", e);
            ApiError::internal("content unavailable")
        })?
        .ok_or_else(|| ApiError::not_found("article not found"))?;

    Ok(Json(article))
}

/// POST /subscribe
pub async fn subscribe(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.relay.subscribe(&request).await?;
    Ok(Json(serde_json::json!({ "status": "success" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_errors_map_to_http_classes() {
        let validation = ApiError::from(RelayError::MissingFields).into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let configuration = ApiError::from(RelayError::NotConfigured).into_response();
        assert_eq!(configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = ApiError::from(RelayError::Upstream).into_response();
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_uses_404() {
        let missing = ApiError::not_found("article not found").into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
