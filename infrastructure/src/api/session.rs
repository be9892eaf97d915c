//! API session context
//!
//! The session is an explicit value handed to request-issuing code, not a
//! process-wide singleton: code that talks to the backend receives the
//! session it should use, and header attachment is a pure function of it.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

/// A bearer token for the backend API
///
/// Debug output is redacted so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn header_value(&self) -> Option<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0)).ok()?;
        value.set_sensitive(true);
        Some(value)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Connection context for the backend API
///
/// Carries the base URL and the optional bearer token of the signed-in
/// customer. Anonymous sessions (no token) are valid: the quiz catalog is
/// public.
///
/// # Example
///
/// ```
/// use tress_infrastructure::ApiSession;
///
/// let session = ApiSession::new("https://api.example").with_token("jwt-abc");
/// let headers = session.auth_headers();
/// assert!(headers.contains_key("authorization"));
/// ```
#[derive(Debug, Clone)]
pub struct ApiSession {
    base_url: String,
    token: Option<AuthToken>,
}

impl ApiSession {
    /// Create an anonymous session against the given base URL
    ///
    /// A trailing slash on the base URL is dropped so joined paths never
    /// double up.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: None,
        }
    }

    /// Attach the signed-in customer's bearer token
    pub fn with_token(mut self, token: impl Into<AuthToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`path` must start with `/`)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request headers for this session
    ///
    /// Pure function of the session: JSON content negotiation plus the
    /// bearer token when one is present.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(value) = self.token.as_ref().and_then(AuthToken::header_value) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }
}
