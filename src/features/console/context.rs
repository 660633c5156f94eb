//! Console state context shared through Leptos. The context wraps the pure
//! `ConsoleState` machine in a signal and exposes derived signals for the
//! panels. Only non-sensitive snapshots leave the store; tokens stay inside
//! the session value.

use crate::app_lib::AppError;
use crate::features::auth::types::{Session, User};
use crate::features::console::store::{ConsoleState, RequestToken, Tab};
use crate::features::notify::Toasts;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    state: RwSignal<ConsoleState>,
    toasts: Toasts,
}

impl ConsoleContext {
    fn new(toasts: Toasts) -> Self {
        Self {
            state: RwSignal::new(ConsoleState::new()),
            toasts,
        }
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session().cloned()))
    }

    pub fn active_tab(&self) -> Signal<Tab> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_tab()))
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn select_tab(&self, tab: Tab) {
        self.state.update(|state| {
            state.select_tab(tab);
        });
    }

    pub fn begin_submit(&self) -> Option<RequestToken> {
        self.state.try_update(|state| state.begin_submit()).flatten()
    }

    pub fn begin_request(&self) -> RequestToken {
        self.state
            .try_update(|state| state.begin_request())
            .unwrap_or(RequestToken::INVALID)
    }

    pub fn settle_register(&self, token: RequestToken, result: Result<(), AppError>) -> bool {
        let toasts = self.toasts;
        self.state
            .try_update(|state| state.register_settled(token, result, &toasts))
            .unwrap_or(false)
    }

    pub fn settle_login(&self, token: RequestToken, result: Result<Session, AppError>) -> bool {
        let toasts = self.toasts;
        self.state
            .try_update(|state| state.login_settled(token, result, &toasts))
            .unwrap_or(false)
    }

    pub fn settle_profile(&self, token: RequestToken, result: Result<User, AppError>) -> bool {
        let toasts = self.toasts;
        self.state
            .try_update(|state| state.profile_settled(token, result, &toasts))
            .unwrap_or(false)
    }

    pub fn settle_logout(&self, result: Result<(), AppError>) {
        if let Err(error) = &result {
            leptos::logging::warn!("logout request failed; clearing local session anyway: {error}");
        }
        let toasts = self.toasts;
        self.state
            .update(|state| state.logout_settled(result, &toasts));
    }
}

/// Provides the console context and the toast store for the whole page.
#[component]
pub fn ConsoleProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    let console = ConsoleContext::new(toasts);
    provide_context(toasts);
    provide_context(console);

    view! { {children()} }
}

/// Returns the current console context or a fallback empty context.
pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().unwrap_or_else(|| ConsoleContext::new(Toasts::new()))
}

/// Returns the toast store installed by `ConsoleProvider`.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_default()
}
