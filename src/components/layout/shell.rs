//! Page wrapper with the title and the authentication status bar. Panels
//! render inside the centered content column.

use crate::features::console::context::use_console;
use leptos::prelude::*;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let console = use_console();
    let is_authenticated = console.is_authenticated();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-4xl font-bold text-center text-gray-800 mb-8">
                    "🔐 Auth Service Testing"
                </h1>
                {children()}
                <div class="mt-8 text-center">
                    <div class="inline-flex items-center space-x-2 bg-white px-4 py-2 rounded-lg shadow-sm">
                        <div
                            class="w-3 h-3 rounded-full"
                            class:bg-green-500=move || is_authenticated.get()
                            class:bg-gray-400=move || !is_authenticated.get()
                        ></div>
                        <span class="text-sm text-gray-600">
                            {move || {
                                if is_authenticated.get() { "Authenticated" } else { "Not Authenticated" }
                            }}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
