use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct SignupViewProps {
    pub api: ApiClient,
    pub session: Session,
    pub on_navigate: Callback<Route>,
}

#[function_component(SignupView)]
pub fn signup_view(props: &SignupViewProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let auth = use_auth(&props.api, &props.session, &props.on_navigate);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let signup = auth.signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(name), Some(email), Some(password)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                signup.emit((name.value(), email.value(), password.value()));
            }
        })
    };

    let to_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Login);
        })
    };

    let loading = auth.status.loading;

    html! {
        <div class="auth-screen">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Create account"}</h1>
                <div class="form-group">
                    <label for="signup-name">{"Name"}</label>
                    <input ref={name_ref} id="signup-name" type="text" autocomplete="name" />
                </div>
                <div class="form-group">
                    <label for="signup-email">{"Email"}</label>
                    <input ref={email_ref} id="signup-email" type="email" autocomplete="email" />
                </div>
                <div class="form-group">
                    <label for="signup-password">{"Password"}</label>
                    <input
                        ref={password_ref}
                        id="signup-password"
                        type="password"
                        autocomplete="new-password"
                    />
                </div>
                if let Some(error) = &auth.status.error {
                    <p class="error">{ error.clone() }</p>
                }
                <button class="btn btn-primary" type="submit" disabled={loading}>
                    { if loading { "Creating account…" } else { "Sign up" } }
                </button>
                <p class="auth-switch">
                    {"Already registered? "}
                    <a href={Route::Login.path()} onclick={to_login}>{"Sign in"}</a>
                </p>
            </form>
        </div>
    }
}
