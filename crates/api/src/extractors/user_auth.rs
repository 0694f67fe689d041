//! Authenticated caller extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use domain::models::Caller;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::user_auth::{bearer_token, UserAuth};

/// The caller of a protected route.
///
/// Reads the [`UserAuth`] stored by `require_user_auth`, or validates the
/// Bearer token itself when the middleware did not run.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller(pub UserAuth);

impl AuthenticatedCaller {
    pub fn caller(&self) -> Caller {
        self.0.caller()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts.extensions.get::<UserAuth>() {
            return Ok(AuthenticatedCaller(auth.clone()));
        }

        let header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok());
        let token = bearer_token(header)?;

        let auth = UserAuth::validate(&state.jwt, token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedCaller(auth))
    }
}
