//! Wire types for the external auth service. The service speaks camelCase
//! JSON and wraps every response in a `{ success, data?, error? }` envelope.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user as the last server response reported
/// it. Replaced wholesale on login and on profile refresh, never patched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub is_active: bool,
}

/// In-memory record of a successful login. Exists only for the lifetime of
/// the page; a reload returns the console to the logged-out state even though
/// the backend tokens may still be valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// Response envelope used by every auth endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload of a successful envelope.
    pub fn into_result(self) -> Result<T, AppError> {
        if self.success {
            self.data
                .ok_or_else(|| AppError::Parse("Response envelope is missing data".to_string()))
        } else {
            Err(self.into_error())
        }
    }

    /// Treats a successful envelope as a bare acknowledgement.
    pub fn into_ack(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> AppError {
        match self.error {
            Some(message) if !message.trim().is_empty() => AppError::Api(message),
            _ => AppError::Parse("Response envelope carries no error detail".to_string()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl LoginData {
    pub fn into_session(self) -> Session {
        Session {
            user: self.user,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileData {
    pub user: User,
}

/// Shortens a token for display; the full value never leaves memory.
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(50).collect();
    format!("{head}...")
}
