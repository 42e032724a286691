// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP plumbing shared by every backend surface.
//!
//! Handles:
//! - Fresh bearer lookup from the token store before each request
//! - Rejection-reason extraction from error bodies
//! - JSON decoding of success bodies

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::ports::{TokenStore, ACCESS_TOKEN_KEY};

/// Low-level client for the ride-share backend.
///
/// Cheap to clone: the reqwest client is a shared handle and the token
/// store sits behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Internal(anyhow::Error::new(e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    /// Bearer token for the next request, looked up fresh from the store.
    ///
    /// A rotated token is picked up here without rebuilding the client; a
    /// missing one fails locally, before any request goes out.
    async fn bearer(&self) -> Result<String> {
        self.tokens
            .get(ACCESS_TOKEN_KEY)
            .await
            .ok_or(ClientError::AuthMissing)
    }

    /// Generic GET request with JSON response.
    pub(crate) async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// GET with query parameters.
    pub(crate) async fn get_json_query<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// Bodyless POST (join, leave, complete).
    pub(crate) async fn post_empty<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// Bodyless DELETE.
    pub(crate) async fn delete_empty<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// DELETE with a JSON body (contact removal passes the relation ID
    /// in the body, not the path).
    pub(crate) async fn delete_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// PUT with a multipart form (profile photo upload).
    pub(crate) async fn put_multipart<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        default_reason: &str,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.check_response_json(response, default_reason).await
    }

    /// Check response status and parse the JSON body.
    ///
    /// A non-success status becomes `BackendRejected` carrying the reason
    /// from the body, or `default_reason` when the body has none.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
        default_reason: &str,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let reason =
                rejection_reason(&body).unwrap_or_else(|| default_reason.to_string());
            tracing::warn!(status = %status, reason = %reason, "Backend rejected request");
            return Err(ClientError::BackendRejected(reason));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("JSON parse error: {}", e)))
    }
}

/// Confirmation-only response body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Extract the human reason from a rejection body.
///
/// App views answer `{"error": "..."}`, the auth layer `{"detail": "..."}`.
/// Field-validation maps and non-JSON bodies yield `None`.
fn rejection_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail"] {
        if let Some(reason) = value.get(key).and_then(|v| v.as_str()) {
            return Some(reason.to_string());
        }
    }
    None
}
