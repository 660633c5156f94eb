use crate::app_lib::theme::Theme;
use crate::components::{Button, Field, Spinner};
use crate::features::auth::client;
use crate::features::console::context::use_console;
use crate::features::console::forms::LoginForm;
use crate::features::console::store::RequestToken;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct LoginSubmit {
    form: LoginForm,
    token: RequestToken,
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let console = use_console();
    let is_loading = console.is_loading();
    let form = RwSignal::new(LoginForm::default());

    let login_action = Action::new_local(move |submit: &LoginSubmit| {
        let submit = submit.clone();
        async move {
            let request = submit.form.to_request();
            (submit.token, client::login(&request).await)
        }
    });

    Effect::new(move |_| {
        if let Some((token, result)) = login_action.value().get() {
            let succeeded = result.is_ok();
            if console.settle_login(token, result) && succeeded {
                form.set(LoginForm::default());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(token) = console.begin_submit() else {
            return;
        };
        login_action.dispatch(LoginSubmit {
            form: form.get_untracked(),
            token,
        });
    };

    view! {
        <div class=Theme::CARD>
            <h2 class=Theme::HEADING>"Login"</h2>
            <form class="space-y-4" on:submit=on_submit>
                <Field
                    id="login_email"
                    label="Email"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.email = value))
                />
                <Field
                    id="login_password"
                    label="Password"
                    input_type="password"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.password = value))
                />
                <Button button_type="submit" disabled=is_loading>
                    "Login"
                </Button>
            </form>
            {move || is_loading.get().then_some(view! { <div class="mt-4"><Spinner /></div> })}
        </div>
    }
}
