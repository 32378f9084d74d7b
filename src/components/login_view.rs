use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub api: ApiClient,
    pub session: Session,
    #[prop_or_default]
    pub notice: Option<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let auth = use_auth(&props.api, &props.session, &props.on_navigate);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(email), Some(password)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                login.emit((email.value(), password.value()));
            }
        })
    };

    let to_signup = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Signup);
        })
    };

    let loading = auth.status.loading;

    html! {
        <div class="auth-screen">
            <form class="auth-form" onsubmit={on_submit}>
                <h1>{"Sign in"}</h1>
                if let Some(notice) = &props.notice {
                    <p class="notice">{ notice.clone() }</p>
                }
                <div class="form-group">
                    <label for="login-email">{"Email"}</label>
                    <input ref={email_ref} id="login-email" type="email" autocomplete="email" />
                </div>
                <div class="form-group">
                    <label for="login-password">{"Password"}</label>
                    <input
                        ref={password_ref}
                        id="login-password"
                        type="password"
                        autocomplete="current-password"
                    />
                </div>
                if let Some(error) = &auth.status.error {
                    <p class="error">{ error.clone() }</p>
                }
                <button class="btn btn-primary" type="submit" disabled={loading}>
                    { if loading { "Signing in…" } else { "Sign in" } }
                </button>
                <p class="auth-switch">
                    {"No account yet? "}
                    <a href={Route::Signup.path()} onclick={to_signup}>{"Create one"}</a>
                </p>
            </form>
        </div>
    }
}
