//! HTTP helpers for the console's JSON API calls with consistent timeouts and
//! error handling. Panel code never builds requests directly; it goes through
//! these helpers so every call gets the same timeout policy and the same
//! two-class error taxonomy (structured backend error vs. everything else).

use super::{config, config::AppConfig, errors, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_post(path, body).await?;
    handle_json_response(response).await
}

/// Posts JSON and accepts any 2xx response, ignoring the body.
pub async fn post_json_ack<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_post(path, body).await?;
    handle_ack_response(response).await
}

/// Fetches JSON with a bearer token for session-authenticated calls.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    access_token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = format!("Bearer {access_token}");
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

async fn send_post<B: Serialize>(path: &str, body: &B) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let app_config = AppConfig::load();
    config::join_base(&app_config.api_base_url, path)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and classifies non-2xx bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(errors::error_from_body(status, body))
    }
}

/// Accepts any 2xx response and classifies non-2xx bodies.
async fn handle_ack_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(errors::error_from_body(status, body))
    }
}
