use yew::prelude::*;

use crate::hooks::use_is_authenticated;
use crate::router::Route;
use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub session: Session,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let authenticated = use_is_authenticated(&props.session);

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("👋 Logging out");
            session.logout();
        })
    };

    let on_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Route::Dashboard);
        })
    };

    html! {
        <header class="app-header">
            <a class="app-title" href={Route::Dashboard.path()} onclick={on_home}>
                {"Investment Advisor"}
            </a>
            if authenticated {
                <button class="btn btn-secondary" onclick={on_logout}>{"Log out"}</button>
            }
        </header>
    }
}
