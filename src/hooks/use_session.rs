// ============================================================================
// USE SESSION HOOKS - bridge between the Session store and yew re-renders
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::router::{current_route, push_route, redirect_for, replace_route, Route};
use crate::state::Session;

/// Re-renders the caller whenever the session logs in or out.
#[hook]
pub fn use_is_authenticated(session: &Session) -> bool {
    let authenticated = {
        let session = session.clone();
        use_state(move || session.is_authenticated())
    };

    {
        let authenticated = authenticated.clone();
        use_effect_with(session.clone(), move |session| {
            authenticated.set(session.is_authenticated());
            let id = session.subscribe(move |token| authenticated.set(token.is_some()));
            let session = session.clone();
            move || session.unsubscribe(id)
        });
    }

    *authenticated
}

pub struct UseRouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

/// Current screen, kept in sync with the address bar and the session.
#[hook]
pub fn use_route(session: &Session) -> UseRouteHandle {
    let route = {
        let session = session.clone();
        use_state(move || current_route().guard(session.is_authenticated()))
    };

    // A blocked start-up URL is replaced, not stacked under the redirect
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(target) = redirect_for(current_route(), session.is_authenticated()) {
                replace_route(target);
            }
            || ()
        });
    }

    // Back / forward buttons
    {
        let route = route.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                let location = current_route();
                match redirect_for(location, session.is_authenticated()) {
                    Some(target) => {
                        replace_route(target);
                        route.set(target);
                    }
                    None => route.set(location),
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    log::error!("❌ Could not listen to popstate: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    // Logging out from anywhere (button or rejected token) returns to login
    {
        let route = route.clone();
        use_effect_with(session.clone(), move |session| {
            let id = session.subscribe(move |token| {
                if token.is_none() {
                    push_route(Route::Login);
                    route.set(Route::Login);
                }
            });
            let session = session.clone();
            move || session.unsubscribe(id)
        });
    }

    let navigate = {
        let route = route.clone();
        let session = session.clone();
        Callback::from(move |next: Route| {
            let next = next.guard(session.is_authenticated());
            log::info!("🧭 Navigating to {}", next.path());
            push_route(next);
            route.set(next);
        })
    };

    UseRouteHandle {
        route: *route,
        navigate,
    }
}
