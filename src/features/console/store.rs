//! The console's state machine, kept independent of the rendering layer so it
//! can be constructed fresh per test and inspected directly. The Leptos layer
//! wraps `ConsoleState` in a signal and forwards events here.
//!
//! Every network request captures a `RequestToken` when it is dispatched.
//! Settling with a token that is no longer current mutates nothing, so a late
//! response cannot clobber state after the user has navigated away or fired a
//! newer action. Logout is the one exception: its local clear is
//! unconditional.

use crate::app_lib::AppError;
use crate::features::auth::types::{Session, User};
use crate::features::notify::{NoticeKind, Notify, surface_error};

const REGISTER_OK: &str = "Registration successful! Please login.";
const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_OK: &str = "Login successful!";
const LOGIN_FAILED: &str = "Login failed";
const PROFILE_OK: &str = "Profile updated!";
const PROFILE_FAILED: &str = "Failed to get profile";
const LOGOUT_OK: &str = "Logged out successfully!";
const LOGOUT_FAILED: &str = "Logout failed";

/// Which of the three mutually exclusive panels is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Register,
    Login,
    Profile,
}

/// Identity of one dispatched request. Token zero is reserved and never
/// current; live tokens start at one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) const INVALID: RequestToken = RequestToken(0);
}

#[derive(Clone, Debug)]
pub struct ConsoleState {
    session: Option<Session>,
    active_tab: Tab,
    is_loading: bool,
    request_seq: u64,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            session: None,
            active_tab: Tab::Register,
            is_loading: false,
            request_seq: 0,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Switches the visible panel. The profile tab requires a session; a
    /// change of tab invalidates every in-flight request.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == Tab::Profile && !self.is_authenticated() {
            return false;
        }
        if tab != self.active_tab {
            self.active_tab = tab;
            self.request_seq += 1;
        }
        true
    }

    /// Starts a register/login submission. Refuses duplicates while one is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<RequestToken> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        Some(self.next_token())
    }

    /// Starts a profile refresh. No loading guard, matching the submit-only
    /// scope of `is_loading`.
    pub fn begin_request(&mut self) -> RequestToken {
        self.next_token()
    }

    pub fn register_settled(
        &mut self,
        token: RequestToken,
        result: Result<(), AppError>,
        notifier: &dyn Notify,
    ) -> bool {
        self.is_loading = false;
        if !self.is_current(token) {
            return false;
        }
        match result {
            Ok(()) => {
                self.active_tab = Tab::Login;
                notifier.notify(NoticeKind::Success, REGISTER_OK);
            }
            Err(error) => {
                notifier.notify(NoticeKind::Error, &surface_error(&error, REGISTER_FAILED));
            }
        }
        true
    }

    pub fn login_settled(
        &mut self,
        token: RequestToken,
        result: Result<Session, AppError>,
        notifier: &dyn Notify,
    ) -> bool {
        self.is_loading = false;
        if !self.is_current(token) {
            return false;
        }
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.active_tab = Tab::Profile;
                notifier.notify(NoticeKind::Success, LOGIN_OK);
            }
            Err(error) => {
                notifier.notify(NoticeKind::Error, &surface_error(&error, LOGIN_FAILED));
            }
        }
        true
    }

    pub fn profile_settled(
        &mut self,
        token: RequestToken,
        result: Result<User, AppError>,
        notifier: &dyn Notify,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }
        match result {
            Ok(user) => {
                if let Some(session) = self.session.as_mut() {
                    session.user = user;
                    notifier.notify(NoticeKind::Success, PROFILE_OK);
                }
            }
            Err(error) => {
                notifier.notify(NoticeKind::Error, &surface_error(&error, PROFILE_FAILED));
            }
        }
        true
    }

    /// Applies the outcome of the logout call. Local logout is unconditional;
    /// the server is only informed best-effort, so a failure is reported but
    /// never rolls the client back.
    pub fn logout_settled(&mut self, result: Result<(), AppError>, notifier: &dyn Notify) {
        self.session = None;
        self.active_tab = Tab::Login;
        self.request_seq += 1;
        match result {
            Ok(()) => notifier.notify(NoticeKind::Success, LOGOUT_OK),
            Err(error) => {
                notifier.notify(NoticeKind::Error, &surface_error(&error, LOGOUT_FAILED));
            }
        }
    }

    fn next_token(&mut self) -> RequestToken {
        self.request_seq += 1;
        RequestToken(self.request_seq)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token != RequestToken::INVALID && token.0 == self.request_seq
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::RecordingNotifier;

    fn sample_user(first_name: &str) -> User {
        User {
            id: "u-1".to_string(),
            email: "jo@example.com".to_string(),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            role: "user".to_string(),
            is_email_verified: true,
            is_phone_verified: false,
            is_active: true,
        }
    }

    fn sample_session() -> Session {
        Session {
            user: sample_user("Jo"),
            access_token: "at-123".to_string(),
            refresh_token: "rt-456".to_string(),
        }
    }

    fn logged_in_state() -> ConsoleState {
        let mut state = ConsoleState::new();
        let token = state.begin_submit().expect("first submit");
        state.login_settled(token, Ok(sample_session()), &RecordingNotifier::new());
        state
    }

    #[test]
    fn login_success_stores_session_and_switches_to_profile() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        assert!(state.login_settled(token, Ok(sample_session()), &notifier));

        assert!(state.is_authenticated());
        assert_eq!(state.active_tab(), Tab::Profile);
        assert!(!state.is_loading());
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Success, "Login successful!".to_string())]
        );
    }

    #[test]
    fn login_failure_stays_logged_out() {
        let mut state = ConsoleState::new();
        state.select_tab(Tab::Login);
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        state.login_settled(
            token,
            Err(AppError::Network("connection refused".to_string())),
            &notifier,
        );

        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab(), Tab::Login);
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Error, "Login failed".to_string())]
        );
    }

    #[test]
    fn register_success_switches_to_login_and_stays_logged_out() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        assert!(state.register_settled(token, Ok(()), &notifier));

        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab(), Tab::Login);
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(
                NoticeKind::Success,
                "Registration successful! Please login.".to_string()
            )]
        );
    }

    #[test]
    fn register_failure_surfaces_structured_error_and_keeps_tab() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        state.register_settled(
            token,
            Err(AppError::Api("Email already exists".to_string())),
            &notifier,
        );

        assert_eq!(state.active_tab(), Tab::Register);
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Error, "Email already exists".to_string())]
        );
    }

    #[test]
    fn register_network_failure_uses_generic_message() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        state.register_settled(
            token,
            Err(AppError::Timeout("timed out".to_string())),
            &notifier,
        );

        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Error, "Registration failed".to_string())]
        );
    }

    #[test]
    fn logout_clears_state_even_when_the_backend_call_fails() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        state.logout_settled(
            Err(AppError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
            &notifier,
        );

        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab(), Tab::Login);
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Error, "Logout failed".to_string())]
        );
    }

    #[test]
    fn logout_success_reports_and_clears() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        state.logout_settled(Ok(()), &notifier);

        assert!(state.session().is_none());
        assert_eq!(state.active_tab(), Tab::Login);
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Success, "Logged out successfully!".to_string())]
        );
    }

    #[test]
    fn profile_tab_is_not_selectable_while_logged_out() {
        let mut state = ConsoleState::new();

        assert!(!state.select_tab(Tab::Profile));
        assert_eq!(state.active_tab(), Tab::Register);

        let mut state = logged_in_state();
        state.select_tab(Tab::Login);
        assert!(state.select_tab(Tab::Profile));
        assert_eq!(state.active_tab(), Tab::Profile);
    }

    #[test]
    fn profile_refresh_replaces_the_user_wholesale() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        let token = state.begin_request();
        state.profile_settled(token, Ok(sample_user("Joanna")), &notifier);

        let session = state.session().expect("still logged in");
        assert_eq!(session.user, sample_user("Joanna"));
        assert_eq!(session.access_token, "at-123");
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Success, "Profile updated!".to_string())]
        );
    }

    #[test]
    fn profile_refresh_failure_leaves_the_session_unchanged() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        let token = state.begin_request();
        state.profile_settled(
            token,
            Err(AppError::Network("connection refused".to_string())),
            &notifier,
        );

        let session = state.session().expect("still logged in");
        assert_eq!(session.user, sample_user("Jo"));
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(NoticeKind::Error, "Failed to get profile".to_string())]
        );
    }

    #[test]
    fn duplicate_submit_is_refused_while_loading() {
        let mut state = ConsoleState::new();

        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn settle_after_tab_change_is_dropped() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        let token = state.begin_submit().expect("first submit");
        state.select_tab(Tab::Login);

        assert!(!state.register_settled(token, Ok(()), &notifier));
        assert_eq!(state.active_tab(), Tab::Login);
        assert!(notifier.calls.borrow().is_empty());
        // The guaranteed-cleanup step still ran.
        assert!(!state.is_loading());
    }

    #[test]
    fn newer_dispatch_invalidates_older_requests() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        let stale = state.begin_request();
        let fresh = state.begin_request();

        assert!(!state.profile_settled(stale, Ok(sample_user("Stale")), &notifier));
        assert_eq!(state.session().expect("logged in").user, sample_user("Jo"));

        assert!(state.profile_settled(fresh, Ok(sample_user("Fresh")), &notifier));
        assert_eq!(
            state.session().expect("logged in").user,
            sample_user("Fresh")
        );
    }

    #[test]
    fn logout_invalidates_in_flight_requests() {
        let mut state = logged_in_state();
        let notifier = RecordingNotifier::new();

        let token = state.begin_request();
        state.logout_settled(Ok(()), &notifier);

        assert!(!state.profile_settled(token, Ok(sample_user("Late")), &notifier));
        assert!(state.session().is_none());
    }

    #[test]
    fn invalid_token_never_settles() {
        let mut state = ConsoleState::new();
        let notifier = RecordingNotifier::new();

        assert!(!state.register_settled(RequestToken::INVALID, Ok(()), &notifier));
        assert_eq!(state.active_tab(), Tab::Register);
    }
}
