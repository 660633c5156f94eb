use crate::components::{Shell, ToastStack};
use crate::features::console::context::ConsoleProvider;
use crate::panels::{ConsolePanels, ConsoleTabs};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConsoleProvider>
            <Shell>
                <ConsoleTabs />
                <ConsolePanels />
            </Shell>
            <ToastStack />
        </ConsoleProvider>
    }
}
