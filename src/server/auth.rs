//! Login check against a single provisioned identity.
//!
//! One username and a bcrypt hash of its password are created at startup and
//! shared read-only for the life of the process.
//!
//! # Token
//!
//! A successful login returns [`PLACEHOLDER_TOKEN`]. It is a fixed string:
//! it does not expire, is not signed, and the server never checks it. Clients
//! may store it as a "logged in" marker and nothing more.
//!
//! # Protected routes
//!
//! `/api/**` paths that are not explicitly public require HTTP Basic
//! credentials for the provisioned identity, checked by the
//! [`BasicAuthUser`] extractor.
//!
//! ```rust
//! use content_catalog::server::auth::Identity;
//!
//! let identity = Identity::provision("siddharth", "Best#123", 4).unwrap();
//! assert!(identity.authenticate("siddharth", "Best#123"));
//! assert!(!identity.authenticate("siddharth", "wrong"));
//! ```

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};
use tracing::{debug, warn};

use super::handlers::{AppState, ErrorResponse};
use crate::catalog::CatalogStore;

/// Username provisioned when none is configured.
pub const DEFAULT_USERNAME: &str = "siddharth";

/// Password provisioned when none is configured.
pub const DEFAULT_PASSWORD: &str = "Best#123";

/// Token returned by a successful login. Not a credential.
pub const PLACEHOLDER_TOKEN: &str = "dummy-jwt-token";

/// Realm advertised in `WWW-Authenticate` challenges.
pub const BASIC_REALM: &str = "catalog";

// =============================================================================
// Errors
// =============================================================================

/// Authentication failures.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// Login with a wrong username or password
    InvalidCredentials,

    /// Protected route requested without an `Authorization: Basic` header
    MissingCredentials,

    /// Protected route requested with Basic credentials that do not verify
    Unauthorized,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::MissingCredentials => write!(f, "Missing credentials"),
            AuthError::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;

        match &self {
            AuthError::InvalidCredentials => {
                warn!(status = status.as_u16(), "Login failed: {}", self);
                (status, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
            AuthError::MissingCredentials | AuthError::Unauthorized => {
                debug!(status = status.as_u16(), "Authentication failed: {}", self);
                (
                    status,
                    [(
                        header::WWW_AUTHENTICATE,
                        format!("Basic realm=\"{BASIC_REALM}\""),
                    )],
                    Json(ErrorResponse::new("Unauthorized")),
                )
                    .into_response()
            }
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The single account allowed to log in.
#[derive(Clone)]
pub struct Identity {
    username: String,
    password_hash: String,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Identity {
    /// Hash `password` with bcrypt at `cost` and bind it to `username`.
    pub fn provision(
        username: impl Into<String>,
        password: &str,
        cost: u32,
    ) -> Result<Self, bcrypt::BcryptError> {
        Ok(Self {
            username: username.into(),
            password_hash: bcrypt::hash(password, cost)?,
        })
    }

    /// Use an existing bcrypt hash.
    pub fn from_hash(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// True iff `username` matches and `password` verifies against the hash.
    ///
    /// The hash is checked even when the username is wrong, so both failures
    /// cost the same. A malformed stored hash never verifies. This call is
    /// CPU-bound; run it off the async executor.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let username_matches = username == self.username;
        let password_verifies = bcrypt::verify(password, &self.password_hash).unwrap_or(false);
        username_matches && password_verifies
    }

    /// [`authenticate`](Self::authenticate) on the blocking thread pool.
    pub async fn authenticate_blocking(
        self: &Arc<Self>,
        username: String,
        password: String,
    ) -> bool {
        let identity = Arc::clone(self);
        tokio::task::spawn_blocking(move || identity.authenticate(&username, &password))
            .await
            .unwrap_or(false)
    }
}

// =============================================================================
// Basic Auth Extractor
// =============================================================================

/// Extractor that admits only requests carrying valid Basic credentials.
#[derive(Debug, Clone)]
pub struct BasicAuthUser {
    /// The authenticated username
    pub username: String,
}

impl<S> FromRequestParts<AppState<S>> for BasicAuthUser
where
    S: CatalogStore + 'static,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .ok_or(AuthError::MissingCredentials)?;

        let username = credentials.username().to_string();
        let password = credentials.password().to_string();

        if state
            .identity
            .authenticate_blocking(username.clone(), password)
            .await
        {
            Ok(BasicAuthUser { username })
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
