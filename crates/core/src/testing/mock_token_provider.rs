//! Mock token provider for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::artsy::{TokenError, TokenProvider, XappToken};

/// Mock implementation of the TokenProvider trait.
///
/// Either hands out a fixed token or fails every call, and counts how many
/// times it was asked.
#[derive(Debug, Clone)]
pub struct MockTokenProvider {
    token: Arc<RwLock<Option<XappToken>>>,
    calls: Arc<AtomicUsize>,
}

impl Default for MockTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTokenProvider {
    /// Create a provider that issues the token `"mock-token"`.
    pub fn new() -> Self {
        Self::with_token("mock-token")
    }

    /// Create a provider that issues the given token value.
    pub fn with_token(value: &str) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(XappToken::new(value)))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a provider whose every exchange is rejected.
    pub fn failing() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the issued token.
    pub async fn set_token(&self, token: XappToken) {
        *self.token.write().await = Some(token);
    }

    /// Make every subsequent exchange fail.
    pub async fn set_failing(&self) {
        *self.token.write().await = None;
    }

    /// Number of `acquire_token` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn acquire_token(&self) -> Result<XappToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.token
            .read()
            .await
            .clone()
            .ok_or(TokenError::Rejected(401))
    }
}
