use serde::{Deserialize, Serialize};

use crate::models::domain::Caller;

/// Claims carried by the identity provider's bearer tokens. Only the
/// subject is mandatory; name and email are passed through when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Caller {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
        }
    }
}
