//! Request authentication
//!
//! An [`Authenticator`] turns request headers into a [`Caller`]. The service
//! ships a JWT implementation; deployments and tests can substitute their
//! own through [`AppState`](crate::state::AppState).

use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use trainlab_domain::{Caller, Role};

use crate::{config::AuthConfig, error::ApiError};

/// Turns request headers into an authenticated identity
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Identify the caller, `ApiError::Authentication` when that fails
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Caller, ApiError>;
}

/// Claims carried by access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Class the user belongs to
    pub tenant: String,
    /// Student or supervisor
    pub role: Role,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Issuer, required when the verifier is configured with one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Caller {
            user_id: claims.sub,
            class_id: claims.tenant,
            role: claims.role,
        }
    }
}

/// HS256 bearer-token authenticator
pub struct JwtAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
}

impl JwtAuthenticator {
    /// Authenticator signing and verifying with `secret`, optionally
    /// pinned to `issuer`
    pub fn new(secret: &str, issuer: Option<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &issuer {
            validation.set_issuer(&[issuer.as_str()]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer,
        }
    }

    /// Authenticator for the `[auth]` config section
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.issuer.clone())
    }

    /// Sign a token for `caller` valid for `ttl`
    pub fn issue(&self, caller: &Caller, ttl: Duration) -> Result<String, ApiError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| ApiError::Internal(format!("invalid token lifetime: {}", e)))?;
        let claims = Claims {
            sub: caller.user_id.clone(),
            tenant: caller.class_id.clone(),
            role: caller.role,
            exp: (chrono::Utc::now() + ttl).timestamp(),
            iss: self.issuer.clone(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Verify a raw token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| ApiError::Authentication(e.to_string()))
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Caller, ApiError> {
        let token = bearer_token(headers)?;
        Ok(self.verify(token)?.into())
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Authentication("missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| ApiError::Authentication("malformed Authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Authentication("expected a bearer token".to_string()))
}
