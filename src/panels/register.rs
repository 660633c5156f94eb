use crate::app_lib::theme::Theme;
use crate::components::{Button, Field, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use crate::features::console::context::use_console;
use crate::features::console::forms::RegisterForm;
use crate::features::console::store::RequestToken;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct RegisterSubmit {
    request: RegisterRequest,
    token: RequestToken,
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let console = use_console();
    let is_loading = console.is_loading();
    let form = RwSignal::new(RegisterForm::default());

    let register_action = Action::new_local(move |submit: &RegisterSubmit| {
        let submit = submit.clone();
        async move { (submit.token, client::register(&submit.request).await) }
    });

    Effect::new(move |_| {
        if let Some((token, result)) = register_action.value().get() {
            let succeeded = result.is_ok();
            if console.settle_register(token, result) && succeeded {
                form.set(RegisterForm::default());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(token) = console.begin_submit() else {
            return;
        };
        register_action.dispatch(RegisterSubmit {
            request: form.get_untracked().to_request(),
            token,
        });
    };

    view! {
        <div class=Theme::CARD>
            <h2 class=Theme::HEADING>"Create Account"</h2>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <Field
                        id="first_name"
                        label="First Name"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.first_name = value))
                    />
                    <Field
                        id="last_name"
                        label="Last Name"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.last_name = value))
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <Field
                        id="email"
                        label="Email"
                        input_type="email"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.email = value))
                    />
                    <Field
                        id="password"
                        label="Password"
                        input_type="password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.password = value))
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <Field
                        id="phone"
                        label="Phone"
                        placeholder="+1234567890"
                        value=Signal::derive(move || form.with(|f| f.phone.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.phone = value))
                    />
                    <Field
                        id="date_of_birth"
                        label="Date of Birth"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.date_of_birth.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.date_of_birth = value))
                    />
                    <div>
                        <label class=Theme::LABEL for="gender">"Gender"</label>
                        <select
                            id="gender"
                            class=Theme::INPUT
                            prop:value=move || form.with(|f| f.gender.clone())
                            on:change=move |event| form.update(|f| f.gender = event_target_value(&event))
                        >
                            <option value="">"Select gender"</option>
                            <option value="male">"Male"</option>
                            <option value="female">"Female"</option>
                            <option value="other">"Other"</option>
                        </select>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <Field
                        id="street"
                        label="Street"
                        value=Signal::derive(move || form.with(|f| f.street.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.street = value))
                    />
                    <Field
                        id="city"
                        label="City"
                        value=Signal::derive(move || form.with(|f| f.city.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.city = value))
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <Field
                        id="state"
                        label="State"
                        value=Signal::derive(move || form.with(|f| f.state.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.state = value))
                    />
                    <Field
                        id="country"
                        label="Country"
                        value=Signal::derive(move || form.with(|f| f.country.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.country = value))
                    />
                    <Field
                        id="zip_code"
                        label="ZIP Code"
                        value=Signal::derive(move || form.with(|f| f.zip_code.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.zip_code = value))
                    />
                </div>

                <Button button_type="submit" disabled=is_loading>
                    "Create Account"
                </Button>
            </form>
            {move || is_loading.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
        </div>
    }
}
