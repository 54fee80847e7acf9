use serde::{Deserialize, Serialize};

/// Request body for the login endpoint. Built per submission, never stored.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response body from the login endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reason codes the backend attaches to a rejected login.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginFailure {
    WrongPassword,
    UnknownUser,
    /// Anything outside the known code set. Produces no user feedback.
    Unrecognized,
}

impl LoginResponse {
    /// Classify the `error` field of a rejected response.
    pub fn failure(&self) -> LoginFailure {
        match self.error.as_deref() {
            Some("wrong_pass") => LoginFailure::WrongPassword,
            Some("no_user") => LoginFailure::UnknownUser,
            _ => LoginFailure::Unrecognized,
        }
    }
}
