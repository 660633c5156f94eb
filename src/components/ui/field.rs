//! Labeled input wired to a form signal. Inputs are controlled through
//! `prop:value` so a cleared form visibly empties its fields.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Field(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <input
                id=id
                type=input_type
                class=Theme::INPUT
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |event| on_change.run(event_target_value(&event))
            />
        </div>
    }
}
