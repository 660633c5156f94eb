mod login;
mod profile;
mod register;
mod tabs;

pub(crate) use tabs::ConsoleTabs;

use crate::features::console::context::use_console;
use crate::features::console::store::Tab;
use leptos::prelude::*;
use login::LoginPanel;
use profile::ProfilePanel;
use register::RegisterPanel;

/// Renders the single panel selected by the active tab.
#[component]
pub fn ConsolePanels() -> impl IntoView {
    let console = use_console();
    let active_tab = console.active_tab();

    view! {
        {move || match active_tab.get() {
            Tab::Register => view! { <RegisterPanel /> }.into_any(),
            Tab::Login => view! { <LoginPanel /> }.into_any(),
            Tab::Profile => view! { <ProfilePanel /> }.into_any(),
        }}
    }
}
