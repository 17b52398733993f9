pub mod claims;
pub mod extract;
pub mod policy;
pub mod verifier;

pub use claims::Claims;
pub use extract::BearerToken;
pub use policy::{can_read, can_write};
pub use verifier::{CredentialVerifier, JwtVerifier, RejectReason, TokenVerifier};
