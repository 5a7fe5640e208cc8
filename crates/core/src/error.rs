//! Unified error types for reps.
//!
//! A `RepFinder` reports every failure through [`Error`]. Decorators such as
//! the cache forward these values untouched, so the variants describe what
//! went wrong at the resolver, never inside a decorator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors a representative lookup can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Structured error returned by the civic information API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The resolver rejected the supplied address.
    #[error("INVALID_ADDRESS: {0}")]
    InvalidAddress(String),

    /// Any other resolver-side failure (transport, decoding, timeouts).
    #[error("UPSTREAM_ERROR: {0}")]
    Upstream(String),
}

/// One entry of the auxiliary error list attached to an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub domain: String,
    pub reason: String,
    pub message: String,
}

/// Error body returned by the civic information API.
///
/// Rendered as `"{code} {message}"` followed by one
/// `;[domain=.., reason=..: ..]` segment per detail. Details whose message
/// repeats the top-level message are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Create an error without auxiliary details.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), errors: Vec::new() }
    }

    /// Append an auxiliary detail.
    pub fn with_detail(
        mut self, domain: impl Into<String>, reason: impl Into<String>, message: impl Into<String>,
    ) -> Self {
        self.errors.push(ApiErrorDetail { domain: domain.into(), reason: reason.into(), message: message.into() });
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)?;
        for detail in self.errors.iter().filter(|d| d.message != self.message) {
            write!(f, ";[domain={}, reason={}: {}]", detail.domain, detail.reason, detail.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
