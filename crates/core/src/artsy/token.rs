//! Xapp token acquisition.
//!
//! Artsy issues application tokens from `POST /tokens/xapp_token` given a
//! client id and secret. The default provider performs that exchange on every
//! call; `CachedTokenProvider` can wrap it to reuse a token until it expires.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::metrics::TOKEN_REQUESTS;

/// Cached tokens are considered stale this long before their reported expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Short-lived application token sent as `X-Xapp-Token`.
#[derive(Clone, PartialEq, Eq)]
pub struct XappToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl XappToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Raw header value. Only the upstream client should read this.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now + ChronoDuration::seconds(EXPIRY_MARGIN_SECS) < expires_at,
            None => false,
        }
    }
}

impl fmt::Debug for XappToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XappToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Reasons a token could not be obtained.
///
/// The variants exist for logging; HTTP callers treat them all alike.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token endpoint answered with something other than 201 Created.
    #[error("token endpoint returned status {0}")]
    Rejected(u16),

    /// Request never completed (connect error, timeout, ...).
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 201 response whose body was not the expected JSON.
    #[error("invalid token response: {0}")]
    InvalidResponse(String),

    /// 201 response without a usable `token` field.
    #[error("token response did not contain a token")]
    MissingToken,
}

/// Source of xapp tokens for upstream calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire_token(&self) -> Result<XappToken, TokenError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    expires_at: Option<String>,
}

/// Exchanges credentials for a fresh token on every call.
pub struct XappTokenProvider {
    client: Client,
    token_url: String,
    credentials: Credentials,
}

impl XappTokenProvider {
    /// Create a provider sharing an existing HTTP client.
    ///
    /// `base_url` is the API root, e.g. `https://api.artsy.net/api`.
    pub fn new(client: Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            client,
            token_url: format!("{}/tokens/xapp_token", base_url.trim_end_matches('/')),
            credentials,
        }
    }

    async fn exchange(&self) -> Result<XappToken, TokenError> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self.client.post(&self.token_url).form(&params).send().await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(TokenError::Rejected(status.as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::InvalidResponse(e.to_string()))?;

        let value = match body.token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(TokenError::MissingToken),
        };

        let expires_at = body.expires_at.as_deref().and_then(parse_expiry);
        Ok(XappToken { value, expires_at })
    }
}

#[async_trait]
impl TokenProvider for XappTokenProvider {
    async fn acquire_token(&self) -> Result<XappToken, TokenError> {
        debug!("Requesting xapp token");

        match self.exchange().await {
            Ok(token) => {
                TOKEN_REQUESTS.with_label_values(&["issued"]).inc();
                debug!("Xapp token issued (expires_at={:?})", token.expires_at);
                Ok(token)
            }
            Err(e) => {
                let result = match e {
                    TokenError::Rejected(_) => "rejected",
                    _ => "error",
                };
                TOKEN_REQUESTS.with_label_values(&[result]).inc();
                warn!("Xapp token exchange failed: {}", e);
                Err(e)
            }
        }
    }
}

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Reuses the last token from `inner` until shortly before it expires.
///
/// Tokens that carry no expiry are never cached.
pub struct CachedTokenProvider<P> {
    inner: P,
    cached: RwLock<Option<XappToken>>,
}

impl<P: TokenProvider> CachedTokenProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cached: RwLock::new(None),
        }
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for CachedTokenProvider<P> {
    async fn acquire_token(&self) -> Result<XappToken, TokenError> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if token.is_fresh_at(Utc::now()) {
                TOKEN_REQUESTS.with_label_values(&["cached"]).inc();
                return Ok(token.clone());
            }
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed it while we waited for the lock.
        if let Some(token) = cached.as_ref() {
            if token.is_fresh_at(Utc::now()) {
                TOKEN_REQUESTS.with_label_values(&["cached"]).inc();
                return Ok(token.clone());
            }
        }

        let token = self.inner.acquire_token().await?;
        *cached = token.is_fresh_at(Utc::now()).then(|| token.clone());
        Ok(token)
    }
}
