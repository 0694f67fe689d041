//! Bearer JWT authentication middleware.
//!
//! Validates the access token on protected routes and stores the resulting
//! [`UserAuth`] in request extensions for the handlers' extractor.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use domain::models::{ActorRole, Caller};
use shared::jwt::{JwtConfig, JwtError};

use crate::app::AppState;
use crate::config::JwtAuthConfig;
use crate::error::ApiError;

/// Caller identity taken from a validated access token.
#[derive(Debug, Clone)]
pub struct UserAuth {
    /// Actor id from the `sub` claim.
    pub actor_id: Uuid,
    /// Role from the `role` claim.
    pub role: ActorRole,
    /// JWT ID (jti) for log correlation.
    pub jti: String,
}

impl UserAuth {
    /// Validates an access token and returns the caller it names.
    pub fn validate(jwt_config: &JwtConfig, token: &str) -> Result<Self, JwtError> {
        let claims = jwt_config.validate_access_token(token)?;
        let actor_id = claims.actor_id()?;
        let role = claims
            .role
            .parse::<ActorRole>()
            .map_err(|_| JwtError::InvalidToken)?;

        Ok(UserAuth {
            actor_id,
            role,
            jti: claims.jti,
        })
    }

    /// Builds the token verifier. A configured private key also enables signing.
    pub fn create_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, JwtError> {
        let jwt = JwtConfig::verifier(&config.public_key, config.leeway_secs)?;
        if config.private_key.trim().is_empty() {
            return Ok(jwt);
        }
        jwt.with_signing_key(&config.private_key, config.access_token_expiry_secs)
    }

    pub fn caller(&self) -> Caller {
        Caller {
            actor_id: self.actor_id,
            role: self.role,
        }
    }
}

/// Returns the token of a `Bearer` Authorization header.
pub fn bearer_token(header: Option<&str>) -> Result<&str, ApiError> {
    let header = header
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()))
}

/// Middleware that requires JWT user authentication.
pub async fn require_user_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match bearer_token(header) {
        Ok(token) => token,
        Err(err) => return err.into_response(),
    };

    match UserAuth::validate(&state.jwt, token) {
        Ok(auth) => {
            tracing::debug!(actor_id = %auth.actor_id, role = %auth.role, jti = %auth.jti, "Caller authenticated");
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert!(bearer_token(None).is_err());
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("Bearer   ")).is_err());
    }

    #[test]
    fn test_caller_from_auth() {
        let auth = UserAuth {
            actor_id: Uuid::nil(),
            role: ActorRole::Editor,
            jti: "jti".to_string(),
        };
        let caller = auth.caller();
        assert_eq!(caller.actor_id, Uuid::nil());
        assert_eq!(caller.role, ActorRole::Editor);
    }
}
