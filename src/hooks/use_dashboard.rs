// ============================================================================
// USE DASHBOARD HOOK - reducer over DashboardState + async generate
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::SavedPortfolio;
use crate::services::ApiClient;
use crate::state::Session;
use crate::viewmodels::{
    should_reload_saved, DashboardAction, DashboardState, DashboardViewModel, SubmitStatus,
};

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseDashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub generate: Callback<()>,
}

#[hook]
pub fn use_dashboard(api: &ApiClient, session: &Session) -> UseDashboardHandle {
    let state = use_reducer(DashboardState::default);
    // Tickets outlive renders so two quick clicks never share one
    let tickets = use_mut_ref(|| 0u64);

    let generate = {
        let state = state.clone();
        let api = api.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            let ticket = *tickets.borrow() + 1;
            let Some((started, request)) = state.prepare_generate(ticket) else {
                return;
            };
            *tickets.borrow_mut() = ticket;
            state.dispatch(started);

            let state = state.clone();
            let vm = DashboardViewModel::new(api.clone(), session.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let finished = vm.generate(ticket, request).await;
                state.dispatch(finished);
            });
        })
    };

    UseDashboardHandle { state, generate }
}

pub struct UseSavedPortfoliosHandle {
    pub portfolios: UseStateHandle<Option<Vec<SavedPortfolio>>>,
    pub status: UseStateHandle<SubmitStatus>,
    pub load: Callback<()>,
}

/// `revision` is the dashboard's success counter; an open list follows it.
#[hook]
pub fn use_saved_portfolios(
    api: &ApiClient,
    session: &Session,
    revision: u64,
) -> UseSavedPortfoliosHandle {
    let portfolios = use_state(|| None::<Vec<SavedPortfolio>>);
    let status = use_state(SubmitStatus::default);

    let load = {
        let portfolios = portfolios.clone();
        let status = status.clone();
        let api = api.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            let mut next = (*status).clone();
            if !next.begin() {
                return;
            }
            status.set(next);

            let portfolios = portfolios.clone();
            let status = status.clone();
            let vm = DashboardViewModel::new(api.clone(), session.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.saved_portfolios().await;
                let mut done = SubmitStatus::default();
                done.finish(&result);
                status.set(done);
                if let Ok(list) = result {
                    portfolios.set(Some(list));
                }
            });
        })
    };

    {
        let load = load.clone();
        let loaded = portfolios.is_some();
        use_effect_with(revision, move |revision| {
            if should_reload_saved(loaded, *revision) {
                load.emit(());
            }
            || ()
        });
    }

    UseSavedPortfoliosHandle {
        portfolios,
        status,
        load,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Allocation, Recommendation};

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let before = Rc::new(DashboardState::default());
        let after = before.clone().reduce(DashboardAction::SetRisk("8".into()));

        assert_eq!(before.form.risk, 5);
        assert_eq!(after.form.risk, 8);
    }

    #[test]
    fn reducer_drops_stale_tickets() {
        let state = Rc::new(DashboardState::default())
            .reduce(DashboardAction::Started { ticket: 1 })
            .reduce(DashboardAction::Started { ticket: 2 });

        let stale = Recommendation {
            allocations: vec![Allocation {
                ticker: "OLD".into(),
                allocation: 100.0,
                price: None,
            }],
            ..Default::default()
        };
        let state = state.reduce(DashboardAction::Finished { ticket: 1, result: Ok(stale) });
        assert!(state.loading);
        assert!(state.allocations.is_empty());

        let state = state.reduce(DashboardAction::Finished {
            ticket: 2,
            result: Err(ApiError::Network("offline".into())),
        });
        assert!(!state.loading);
        assert!(state.error.is_some());
    }
}
