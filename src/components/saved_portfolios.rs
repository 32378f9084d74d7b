use yew::prelude::*;

use crate::hooks::use_saved_portfolios;
use crate::models::SavedPortfolio;
use crate::services::ApiClient;
use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct SavedPortfoliosProps {
    pub api: ApiClient,
    pub session: Session,
    /// Successful generates so far; a change reloads an open list.
    #[prop_or_default]
    pub revision: u64,
}

#[function_component(SavedPortfolios)]
pub fn saved_portfolios(props: &SavedPortfoliosProps) -> Html {
    let saved = use_saved_portfolios(&props.api, &props.session, props.revision);

    let on_load = {
        let load = saved.load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let loading = saved.status.loading;

    let list = match &*saved.portfolios {
        None => html! {},
        Some(portfolios) if portfolios.is_empty() => html! {
            <p class="notice">{"No saved portfolios yet."}</p>
        },
        Some(portfolios) => html! {
            <ul class="saved-list">
                { for portfolios.iter().map(render_portfolio) }
            </ul>
        },
    };

    html! {
        <section class="card saved-portfolios">
            <div class="card-header">
                <h2>{"Past portfolios"}</h2>
                <button class="btn btn-secondary" onclick={on_load} disabled={loading}>
                    { if loading { "Loading…" } else { "Load" } }
                </button>
            </div>
            if let Some(error) = &saved.status.error {
                <p class="error">{ error.clone() }</p>
            }
            { list }
        </section>
    }
}

fn render_portfolio(portfolio: &SavedPortfolio) -> Html {
    let summary = portfolio
        .holdings
        .iter()
        .map(|h| format!("{} {:.1}%", h.ticker, h.allocation))
        .collect::<Vec<_>>()
        .join(" · ");

    html! {
        <li class="saved-item">
            <span class="saved-date">{ portfolio.generated_label() }</span>
            <span class="saved-holdings">{ summary }</span>
        </li>
    }
}
