//! Correlation types for request tracking
//!
//! Every API request gets a RequestId at the HTTP boundary; the id travels
//! through resolvers and into structured log events so one request's
//! operations can be stitched back together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single API request or CLI invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. an incoming `x-request-id` header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through resolver boundaries for correlation
///
/// `viewer` is the acting user's id when the request declared one. Nothing
/// here is authentication; it only labels log events and errors.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub viewer: Option<String>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId and no viewer
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            viewer: None,
        }
    }

    /// Create a context with an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            viewer: None,
        }
    }

    /// Attach the acting user's id
    pub fn with_viewer(mut self, user_id: impl Into<String>) -> Self {
        self.viewer = Some(user_id.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
