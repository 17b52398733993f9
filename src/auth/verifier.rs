use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::Caller,
};

/// Why a presented credential was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Missing,
    Malformed,
    Expired,
    Invalid,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Missing => "Missing or invalid Authorization header",
            RejectReason::Expired => "Token expired. Please log in again.",
            RejectReason::Malformed | RejectReason::Invalid => "Invalid token.",
        }
    }
}

/// The identity provider capability: turns an opaque bearer token into
/// a caller identity or a classified rejection. Token internals are
/// this trait's business alone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Caller, RejectReason>;
}

/// Production verifier backed by the provider's signing secret.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::default(),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Caller, RejectReason> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => RejectReason::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidToken => RejectReason::Malformed,
                _ => RejectReason::Invalid,
            })
    }
}

/// Wraps the provider with the two call modes the service needs.
/// Stateless: every request re-verifies, nothing is cached or retried.
pub struct CredentialVerifier {
    provider: Arc<dyn TokenVerifier>,
}

impl CredentialVerifier {
    pub fn new(provider: Arc<dyn TokenVerifier>) -> Self {
        Self { provider }
    }

    /// Required mode: no token and rejected tokens both fail the
    /// request with Unauthorized.
    pub async fn require(&self, token: Option<&str>) -> AppResult<Caller> {
        let token = token
            .ok_or_else(|| AppError::Unauthorized(RejectReason::Missing.message().to_string()))?;

        self.provider
            .verify(token)
            .await
            .map_err(|reason| AppError::Unauthorized(reason.message().to_string()))
    }

    /// Optional mode: a missing token and a bad token both resolve to
    /// anonymous. Callers cannot tell the two apart.
    pub async fn optional(&self, token: Option<&str>) -> Option<Caller> {
        let token = token?;
        self.provider.verify(token).await.ok()
    }
}
