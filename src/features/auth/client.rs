//! Client wrappers for the auth service endpoints. These helpers centralize
//! paths and envelope handling so panel code never touches raw responses or
//! leaks tokens into markup.

use crate::app_lib::{AppError, get_json_with_bearer, post_json, post_json_ack};
use crate::features::auth::types::{
    ApiEnvelope, LoginData, LoginRequest, LogoutRequest, ProfileData, RegisterRequest, Session,
    User,
};
use serde_json::Value;

/// Creates an account. The service answers with a bare acknowledgement.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    let envelope: ApiEnvelope<Value> = post_json("/api/auth/register", request).await?;
    envelope.into_ack()
}

/// Exchanges credentials for a session (user record plus token pair).
pub async fn login(request: &LoginRequest) -> Result<Session, AppError> {
    let envelope: ApiEnvelope<LoginData> = post_json("/api/auth/login", request).await?;
    envelope.into_result().map(LoginData::into_session)
}

/// Fetches a fresh user snapshot using the session's access token.
pub async fn fetch_profile(access_token: &str) -> Result<User, AppError> {
    let envelope: ApiEnvelope<ProfileData> = get_json_with_bearer("/api/auth/me", access_token).await?;
    envelope.into_result().map(|data| data.user)
}

/// Tells the service to revoke the refresh token. Best-effort: the caller
/// clears local state no matter what this returns.
pub async fn logout(refresh_token: &str) -> Result<(), AppError> {
    let request = LogoutRequest {
        refresh_token: refresh_token.to_string(),
    };
    post_json_ack("/api/auth/logout", &request).await
}
