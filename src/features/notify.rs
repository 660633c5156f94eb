//! Notification capability for the console. Panels and the store talk to the
//! `Notify` trait; the browser build renders notices as a toast stack, and
//! tests record calls without a rendering environment.

use crate::app_lib::AppError;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One rendered toast.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notify {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Implements the two-class error taxonomy: a structured backend error is
/// surfaced verbatim, anything else collapses to the action's generic message.
pub fn surface_error(error: &AppError, fallback: &str) -> String {
    match error {
        AppError::Api(message) => message.clone(),
        _ => fallback.to_string(),
    }
}

/// How long a toast stays on screen.
#[cfg(target_arch = "wasm32")]
const TOAST_TTL_MS: u32 = 4_000;

/// Signal-backed toast store rendered by `ToastStack`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

#[cfg(target_arch = "wasm32")]
impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn items(&self) -> Vec<Notice> {
        self.items.get()
    }

    pub fn push(&self, kind: NoticeKind, message: &str) {
        let id = self
            .next_id
            .try_update(|next| {
                *next += 1;
                *next
            })
            .unwrap_or(0);
        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                message: message.to_string(),
            });
        });

        let store = *self;
        Timeout::new(TOAST_TTL_MS, move || store.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|notice| notice.id != id));
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Notify for Toasts {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.push(kind, message);
    }
}

/// Records notifications so tests can assert on calls.
#[cfg(test)]
pub(crate) struct RecordingNotifier {
    pub calls: std::cell::RefCell<Vec<(NoticeKind, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Notify for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.calls.borrow_mut().push((kind, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::surface_error;
    use crate::app_lib::AppError;

    #[test]
    fn structured_errors_surface_verbatim() {
        let error = AppError::Api("Email already exists".to_string());
        assert_eq!(surface_error(&error, "Registration failed"), "Email already exists");
    }

    #[test]
    fn everything_else_collapses_to_the_fallback() {
        let network = AppError::Network("connection refused".to_string());
        let timeout = AppError::Timeout("timed out".to_string());
        let http = AppError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };

        assert_eq!(surface_error(&network, "Login failed"), "Login failed");
        assert_eq!(surface_error(&timeout, "Login failed"), "Login failed");
        assert_eq!(surface_error(&http, "Login failed"), "Login failed");
    }
}
