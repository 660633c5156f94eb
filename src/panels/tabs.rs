use crate::features::console::context::use_console;
use crate::features::console::store::Tab;
use leptos::prelude::*;

#[component]
pub fn ConsoleTabs() -> impl IntoView {
    let console = use_console();
    let active_tab = console.active_tab();
    let is_authenticated = console.is_authenticated();

    let tab_class = move |tab: Tab| {
        if active_tab.get() == tab {
            "px-4 py-2 rounded-md transition-colors bg-white shadow-sm"
        } else {
            "px-4 py-2 rounded-md transition-colors text-gray-600 hover:text-gray-800"
        }
    };

    view! {
        <div class="flex justify-center mb-8">
            <div class="flex space-x-1 bg-gray-200 p-1 rounded-lg">
                <button class=move || tab_class(Tab::Register) on:click=move |_| console.select_tab(Tab::Register)>
                    "Register"
                </button>
                <button class=move || tab_class(Tab::Login) on:click=move |_| console.select_tab(Tab::Login)>
                    "Login"
                </button>
                <Show when=move || is_authenticated.get()>
                    <button class=move || tab_class(Tab::Profile) on:click=move |_| console.select_tab(Tab::Profile)>
                        "Profile"
                    </button>
                </Show>
            </div>
        </div>
    }
}
