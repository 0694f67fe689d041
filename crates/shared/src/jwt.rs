//! Bearer token verification.
//!
//! Access tokens are issued by the identity service and signed with RS256.
//! The API only needs the public key; a signing key can be attached for
//! local tooling and integration tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("No signing key configured")]
    SigningDisabled,
}

/// Claims the identity service puts into an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Actor id
    pub sub: String,
    /// `USER`, `EDITOR` or `ADMIN`
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    /// The actor id carried in `sub`.
    pub fn actor_id(&self) -> Result<Uuid, JwtError> {
        Uuid::parse_str(&self.sub).map_err(|_| JwtError::InvalidToken)
    }
}

/// Default leeway in seconds for clock skew tolerance
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

struct SigningKey {
    key: EncodingKey,
    expiry_secs: i64,
}

/// Verifies access tokens and, when a private key is attached, signs them.
pub struct JwtConfig {
    algorithm: Algorithm,
    decoding_key: DecodingKey,
    signing: Option<SigningKey>,
    /// Leeway in seconds for clock skew tolerance
    pub leeway_secs: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("algorithm", &self.algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .field("can_sign", &self.can_sign())
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtConfig {
    /// Verification-only configuration from an RSA public key in PEM format.
    pub fn verifier(public_key_pem: &str, leeway_secs: u64) -> Result<Self, JwtError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| JwtError::InvalidKey(format!("Invalid public key: {}", e)))?;

        Ok(Self {
            algorithm: Algorithm::RS256,
            decoding_key,
            signing: None,
            leeway_secs,
        })
    }

    /// Attaches an RSA private key so the configuration can issue tokens
    /// valid for `expiry_secs`.
    pub fn with_signing_key(
        mut self,
        private_key_pem: &str,
        expiry_secs: i64,
    ) -> Result<Self, JwtError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| JwtError::InvalidKey(format!("Invalid private key: {}", e)))?;
        self.signing = Some(SigningKey { key, expiry_secs });
        Ok(self)
    }

    /// HS256 configuration that can both sign and verify. Tests only.
    #[cfg(test)]
    pub fn new_for_testing(secret: &str) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            signing: Some(SigningKey {
                key: EncodingKey::from_secret(secret.as_bytes()),
                expiry_secs: 900,
            }),
            leeway_secs: 0,
        }
    }

    pub fn can_sign(&self) -> bool {
        self.signing.is_some()
    }

    /// Issues an access token for `actor_id` with `role`.
    ///
    /// Returns `(token, jti)`.
    pub fn generate_access_token(
        &self,
        actor_id: Uuid,
        role: &str,
    ) -> Result<(String, String), JwtError> {
        let signing = self.signing.as_ref().ok_or(JwtError::SigningDisabled)?;
        self.sign(signing, actor_id, role, signing.expiry_secs)
    }

    fn sign(
        &self,
        signing: &SigningKey,
        actor_id: Uuid,
        role: &str,
        expiry_secs: i64,
    ) -> Result<(String, String), JwtError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: actor_id.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(expiry_secs)).timestamp(),
            iat: now.timestamp(),
            jti: jti.clone(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &signing.key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))?;

        Ok((token, jti))
    }

    /// Verifies signature and expiry, returning the claims.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = self.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => JwtError::InvalidToken,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }
}
