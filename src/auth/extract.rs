use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, Error, FromRequest, HttpRequest};

/// Raw bearer token from the Authorization header, if one was sent.
/// Extraction never fails; whether a missing or bad token matters is
/// decided by the credential verifier, so the resolved identity always
/// flows through handler arguments instead of request extensions.
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|t| t.to_string());

        ready(Ok(BearerToken(token)))
    }
}
