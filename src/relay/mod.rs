//! Subscription relay - forwards newsletter signups to an external webhook

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the webhook endpoint
pub const WEBHOOK_URL_VAR: &str = "SUBSCRIBE_WEBHOOK_URL";
/// Environment variable naming the shared secret sent with each signup
pub const WEBHOOK_SECRET_VAR: &str = "SUBSCRIBE_WEBHOOK_SECRET";

/// Upper bound on the outbound call; the source had none
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure classes surfaced to the subscriber.
///
/// Display strings are caller-facing; upstream and configuration detail
/// stays in the server log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("Name and email are required")]
    MissingFields,
    #[error("Configuration error")]
    NotConfigured,
    #[error("Subscription service unavailable")]
    Upstream,
}

/// A signup submitted by a reader
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone)]
struct WebhookConfig {
    url: String,
    secret: String,
}

/// What the webhook reports back
#[derive(Debug, Deserialize)]
struct WebhookResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Forwards signups to the configured webhook, one attempt per request
pub struct SubscriptionRelay {
    config: Option<WebhookConfig>,
    client: reqwest::Client,
}

impl SubscriptionRelay {
    /// Build a relay from the environment.
    ///
    /// Missing or empty variables leave the relay unconfigured;
    /// [`subscribe`](Self::subscribe) then reports a configuration error
    /// instead of crashing.
    pub fn from_env() -> Result<Self> {
        let config = match (
            std::env::var(WEBHOOK_URL_VAR),
            std::env::var(WEBHOOK_SECRET_VAR),
        ) {
            (Ok(url), Ok(secret)) if !url.is_empty() && !secret.is_empty() => {
                Some(WebhookConfig { url, secret })
            }
            _ => None,
        };
        Self::with_config(config)
    }

    fn with_config(config: Option<WebhookConfig>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    /// Validate and forward one signup.
    ///
    /// Nothing goes out on validation failure. The outbound call is made
    /// once, with no retry.
    pub async fn subscribe(&self, request: &SubscribeRequest) -> Result<(), RelayError> {
        if request.name.trim().is_empty() || request.email.trim().is_empty() {
            return Err(RelayError::MissingFields);
        }

        let Some(config) = &self.config else {
            tracing::error!(
                "Subscription webhook is not configured; set {} and {}",
                WEBHOOK_URL_VAR,
                WEBHOOK_SECRET_VAR
            );
            return Err(RelayError::NotConfigured);
        };

        let body = serde_json::json!({
            "name": request.name,
            "email": request.email,
            "secret": config.secret,
        });

        let response = self
            .client
            .post(&config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Subscription webhook call failed: {}", e);
                RelayError::Upstream
            })?;

        if !response.status().is_success() {
            tracing::error!("Subscription webhook returned {}", response.status());
            return Err(RelayError::Upstream);
        }

        let payload: WebhookResponse = response.json().await.map_err(|e| {
            tracing::error!("Subscription webhook sent an unreadable response: {}", e);
            RelayError::Upstream
        })?;

        if payload.status != "success" {
            tracing::error!(
                "Subscription webhook rejected the signup: {}",
                payload.message.as_deref().unwrap_or("no detail")
            );
            return Err(RelayError::Upstream);
        }

        Ok(())
    }
}
