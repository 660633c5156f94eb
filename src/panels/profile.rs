//! Profile panel. Renders only while a session exists; everything shown here
//! is the last server snapshot, replaced wholesale by a refresh.

use crate::app_lib::theme::Theme;
use crate::features::auth::client;
use crate::features::auth::types::token_preview;
use crate::features::console::context::use_console;
use crate::features::console::store::RequestToken;
use leptos::prelude::*;

const PRIMARY_BUTTON: &str = "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center";
const SECONDARY_BUTTON: &str = "text-gray-900 bg-gray-200 hover:bg-gray-300 focus:ring-4 focus:outline-none focus:ring-gray-100 font-medium rounded-lg text-sm px-5 py-2.5 text-center";

#[derive(Clone)]
struct RefreshRequest {
    access_token: String,
    token: RequestToken,
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let console = use_console();
    let session = console.session();

    let refresh_action = Action::new_local(move |request: &RefreshRequest| {
        let request = request.clone();
        async move { (request.token, client::fetch_profile(&request.access_token).await) }
    });

    Effect::new(move |_| {
        if let Some((token, result)) = refresh_action.value().get() {
            console.settle_profile(token, result);
        }
    });

    let logout_action = Action::new_local(move |refresh_token: &String| {
        let refresh_token = refresh_token.clone();
        async move { client::logout(&refresh_token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = logout_action.value().get() {
            console.settle_logout(result);
        }
    });

    let on_refresh = move |_| {
        if let Some(session) = session.get_untracked() {
            let token = console.begin_request();
            refresh_action.dispatch(RefreshRequest {
                access_token: session.access_token,
                token,
            });
        }
    };

    let on_logout = move |_| {
        if let Some(session) = session.get_untracked() {
            logout_action.dispatch(session.refresh_token);
        }
    };

    view! {
        {move || {
            session
                .get()
                .map(|session| {
                    let user = session.user;
                    view! {
                        <div class=Theme::CARD>
                            <div class="flex justify-between items-center mb-6">
                                <h2 class="text-2xl font-semibold">"User Profile"</h2>
                                <button class=SECONDARY_BUTTON on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div>
                                    <h3 class=Theme::SECTION>"Personal Information"</h3>
                                    <div class="space-y-3">
                                        <div>
                                            <span class=Theme::ROW_KEY>"Name:"</span>
                                            <span class="ml-2">
                                                {format!("{} {}", user.first_name, user.last_name)}
                                            </span>
                                        </div>
                                        <div>
                                            <span class=Theme::ROW_KEY>"Email:"</span>
                                            <span class="ml-2">{user.email}</span>
                                        </div>
                                        <div>
                                            <span class=Theme::ROW_KEY>"Role:"</span>
                                            <span class="ml-2 capitalize">{user.role}</span>
                                        </div>
                                        <div>
                                            <span class=Theme::ROW_KEY>"Status:"</span>
                                            {badge(user.is_active, "Active", "Inactive", true)}
                                        </div>
                                    </div>
                                </div>

                                <div>
                                    <h3 class=Theme::SECTION>"Verification Status"</h3>
                                    <div class="space-y-3">
                                        <div>
                                            <span class=Theme::ROW_KEY>"Email Verified:"</span>
                                            {badge(user.is_email_verified, "Verified", "Pending", false)}
                                        </div>
                                        <div>
                                            <span class=Theme::ROW_KEY>"Phone Verified:"</span>
                                            {badge(user.is_phone_verified, "Verified", "Pending", false)}
                                        </div>
                                    </div>
                                </div>
                            </div>

                            <div class="mt-6 pt-6 border-t border-gray-200">
                                <h3 class=Theme::SECTION>"Auth Tokens"</h3>
                                <div class="space-y-3">
                                    <div>
                                        <span class=Theme::ROW_KEY>"Access Token:"</span>
                                        <div class=Theme::TOKEN_BOX>
                                            {token_preview(&session.access_token)}
                                        </div>
                                    </div>
                                    <div>
                                        <span class=Theme::ROW_KEY>"Refresh Token:"</span>
                                        <div class=Theme::TOKEN_BOX>
                                            {token_preview(&session.refresh_token)}
                                        </div>
                                    </div>
                                </div>
                            </div>

                            <div class="mt-6 pt-6 border-t border-gray-200">
                                <button class=PRIMARY_BUTTON on:click=on_refresh>
                                    "Refresh Profile Data"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Colored pill for boolean fields. A missing value renders red when it means
/// the account is unusable and yellow when it is merely pending.
fn badge(
    present: bool,
    yes: &'static str,
    no: &'static str,
    missing_is_error: bool,
) -> impl IntoView {
    let class = if present {
        "ml-2 px-2 py-1 rounded-full text-xs bg-green-100 text-green-800"
    } else if missing_is_error {
        "ml-2 px-2 py-1 rounded-full text-xs bg-red-100 text-red-800"
    } else {
        "ml-2 px-2 py-1 rounded-full text-xs bg-yellow-100 text-yellow-800"
    };

    view! { <span class=class>{if present { yes } else { no }}</span> }
}
