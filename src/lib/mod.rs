//! Shared frontend utilities for API access, configuration, and errors.
//!
//! The console issues every request against same-origin `/api/auth/*` paths;
//! a reverse-proxy rule (see `Trunk.toml`) rewrites those to the external
//! auth service. Centralizing the helpers here keeps network behavior
//! consistent and keeps tokens out of panel code.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json_with_bearer, post_json, post_json_ack};
pub(crate) use errors::AppError;
