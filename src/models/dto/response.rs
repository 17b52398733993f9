use serde::Serialize;

use crate::models::domain::Caller;

/// Success envelope shared by every succeeding response. The failing
/// counterpart lives in `errors::ErrorResponse`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Ack with no payload, e.g. update/delete/play confirmations.
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifiedCallerDto {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl From<Caller> for VerifiedCallerDto {
    fn from(caller: Caller) -> Self {
        VerifiedCallerDto {
            uid: caller.id,
            email: caller.email,
            name: caller.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedQuizDto {
    pub id: String,
}
