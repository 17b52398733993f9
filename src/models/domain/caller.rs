use serde::{Deserialize, Serialize};

/// Identity resolved from a verified bearer credential for the current
/// request. Never persisted; quizzes only keep a snapshot of the name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Caller {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Caller {
    /// Display name recorded on quizzes created by this caller: the
    /// provider name, else the email, else "Anonymous".
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}
