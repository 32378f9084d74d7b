use std::rc::Rc;

use yew::prelude::*;

use crate::components::{DashboardView, Header, LoginView, SignupView};
use crate::config::CONFIG;
use crate::hooks::use_route;
use crate::router::Route;
use crate::services::{ApiClient, LocalTokenStore, TokenStore};
use crate::state::Session;
use crate::utils::constants::{SIGNUP_SUCCESS_MESSAGE, STORAGE_KEY_TOKEN};

#[function_component(App)]
pub fn app() -> Html {
    // Built once; every view shares the same session and client
    let services = use_memo((), |_| {
        let store: Rc<dyn TokenStore> = Rc::new(LocalTokenStore::new(STORAGE_KEY_TOKEN));
        let session = Session::restore(store.clone());
        let api = ApiClient::from_config(&CONFIG, store);
        log::info!("🌐 API base URL: {}", api.base_url());
        (session, api)
    });
    let (session, api) = (services.0.clone(), services.1.clone());

    let router = use_route(&session);
    let flash = use_state(|| None::<String>);

    // A rejected token explains itself on the login screen
    {
        let flash = flash.clone();
        use_effect_with(session.clone(), move |session| {
            let observed = session.clone();
            let id = session.subscribe(move |token| {
                if token.is_none() {
                    flash.set(observed.logout_notice().map(str::to_string));
                }
            });
            let session = session.clone();
            move || session.unsubscribe(id)
        });
    }

    let navigate = {
        let navigate = router.navigate.clone();
        let flash = flash.clone();
        Callback::from(move |route: Route| {
            flash.set(None);
            navigate.emit(route);
        })
    };

    // Signup lands on login with a confirmation line
    let after_signup = {
        let navigate = router.navigate.clone();
        let flash = flash.clone();
        Callback::from(move |route: Route| {
            if route == Route::Login {
                flash.set(Some(SIGNUP_SUCCESS_MESSAGE.to_string()));
            }
            navigate.emit(route);
        })
    };

    let content = match router.route {
        Route::Login => html! {
            <LoginView
                api={api.clone()}
                session={session.clone()}
                notice={(*flash).clone()}
                on_navigate={navigate.clone()}
            />
        },
        Route::Signup => html! {
            <SignupView
                api={api.clone()}
                session={session.clone()}
                on_navigate={after_signup}
            />
        },
        Route::Dashboard => html! {
            <DashboardView api={api.clone()} session={session.clone()} />
        },
    };

    html! {
        <div class="app">
            <Header session={session} on_navigate={navigate} />
            <main class="app-main">{ content }</main>
        </div>
    }
}
