//! Toast stack for transient notices. Messages must be safe to render and
//! never include tokens.

use crate::features::console::context::use_toasts;
use crate::features::notify::NoticeKind;
use leptos::prelude::*;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => {
                            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-sm cursor-pointer"
                        }
                        NoticeKind::Error => {
                            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-sm cursor-pointer"
                        }
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="alert" on:click=move |_| toasts.dismiss(id)>
                            {notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
