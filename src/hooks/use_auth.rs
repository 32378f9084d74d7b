use yew::prelude::*;

use crate::router::Route;
use crate::services::ApiClient;
use crate::state::Session;
use crate::viewmodels::{AuthViewModel, SubmitStatus};

pub struct UseAuthHandle {
    pub status: UseStateHandle<SubmitStatus>,
    /// (email, password)
    pub login: Callback<(String, String)>,
    /// (name, email, password)
    pub signup: Callback<(String, String, String)>,
}

#[hook]
pub fn use_auth(api: &ApiClient, session: &Session, on_navigate: &Callback<Route>) -> UseAuthHandle {
    let status = use_state(SubmitStatus::default);

    let login = {
        let status = status.clone();
        let vm_parts = (api.clone(), session.clone());
        let on_navigate = on_navigate.clone();
        Callback::from(move |(email, password): (String, String)| {
            let mut next = (*status).clone();
            if !next.begin() {
                return;
            }
            status.set(next);

            let status = status.clone();
            let on_navigate = on_navigate.clone();
            let vm = AuthViewModel::new(vm_parts.0.clone(), vm_parts.1.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.login(email, password).await;
                let mut done = SubmitStatus::default();
                done.finish(&result);
                status.set(done);
                if let Ok(route) = result {
                    on_navigate.emit(route);
                }
            });
        })
    };

    let signup = {
        let status = status.clone();
        let vm_parts = (api.clone(), session.clone());
        let on_navigate = on_navigate.clone();
        Callback::from(move |(name, email, password): (String, String, String)| {
            let mut next = (*status).clone();
            if !next.begin() {
                return;
            }
            status.set(next);

            let status = status.clone();
            let on_navigate = on_navigate.clone();
            let vm = AuthViewModel::new(vm_parts.0.clone(), vm_parts.1.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.signup(name, email, password).await;
                let mut done = SubmitStatus::default();
                done.finish(&result);
                status.set(done);
                if let Ok(route) = result {
                    on_navigate.emit(route);
                }
            });
        })
    };

    UseAuthHandle {
        status,
        login,
        signup,
    }
}
