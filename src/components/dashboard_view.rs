// ============================================================================
// DASHBOARD VIEW - preferences form, charts and holdings table
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{ChartCanvas, SavedPortfolios};
use crate::hooks::use_dashboard;
use crate::models::{format_timestamp, FundType};
use crate::services::ApiClient;
use crate::state::Session;
use crate::utils::constants::{LINE_CHART_CANVAS_ID, MAX_RISK, MIN_RISK, PIE_CHART_CANVAS_ID};
use crate::viewmodels::{line_chart, pie_chart, DashboardAction};

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub api: ApiClient,
    pub session: Session,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let dashboard = use_dashboard(&props.api, &props.session);
    let state = dashboard.state.clone();

    let pie = use_memo(state.allocations.clone(), |allocations| pie_chart(allocations));
    let line = use_memo(state.history.clone(), |history| line_chart(history));

    // Each input maps its raw value to one action
    let on_input = |make: fn(String) -> DashboardAction| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(make(input.value()));
        })
    };
    let on_budget = on_input(DashboardAction::SetBudget);
    let on_horizon = on_input(DashboardAction::SetHorizon);
    let on_preferences = on_input(DashboardAction::SetPreferences);
    let on_broker = on_input(DashboardAction::SetBroker);

    let on_risk = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetRisk(input.value()));
        })
    };

    let on_fund_type = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetFundType(select.value()));
        })
    };

    let on_submit = {
        let generate = dashboard.generate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            generate.emit(());
        })
    };

    let form = &state.form;
    let loading = state.loading;

    html! {
        <div class="dashboard">
            <section class="card">
                <h2>{"Your preferences"}</h2>
                <form class="preferences-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="budget">{"Budget"}</label>
                        <input
                            id="budget"
                            type="number"
                            min="0"
                            step="any"
                            value={form.budget.to_string()}
                            onchange={on_budget}
                        />
                    </div>
                    <div class="form-group">
                        <label for="horizon">{"Horizon (years)"}</label>
                        <input
                            id="horizon"
                            type="number"
                            min="0"
                            step="1"
                            value={form.horizon.to_string()}
                            onchange={on_horizon}
                        />
                    </div>
                    <div class="form-group">
                        <label for="risk">{ format!("Risk tolerance: {}", form.risk) }</label>
                        <input
                            id="risk"
                            type="range"
                            min={MIN_RISK.to_string()}
                            max={MAX_RISK.to_string()}
                            value={form.risk.to_string()}
                            oninput={on_risk}
                        />
                    </div>
                    <div class="form-group">
                        <label for="fund-type">{"Fund type"}</label>
                        <select id="fund-type" onchange={on_fund_type}>
                            { for FundType::ALL.iter().map(|fund| html! {
                                <option
                                    value={fund.as_str()}
                                    selected={*fund == form.fund_type}
                                >
                                    { fund.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="preferences">{"Preferences"}</label>
                        <input
                            id="preferences"
                            type="text"
                            placeholder="e.g. tech, dividends"
                            value={form.preferences.clone()}
                            onchange={on_preferences}
                        />
                    </div>
                    <div class="form-group">
                        <label for="broker">{"Broker"}</label>
                        <input
                            id="broker"
                            type="text"
                            placeholder="optional"
                            value={form.broker.clone()}
                            onchange={on_broker}
                        />
                    </div>
                    <button class="btn btn-primary" type="submit" disabled={loading}>
                        { if loading { "Generating…" } else { "Generate Portfolio" } }
                    </button>
                </form>
                if let Some(error) = &state.error {
                    <p class="error">{ error.clone() }</p>
                }
                if let Some(notice) = &state.notice {
                    <p class="notice">{ notice.clone() }</p>
                }
            </section>

            if state.show_pie_chart() {
                <section class="card">
                    <h2>{"Allocation"}</h2>
                    <ChartCanvas canvas_id={PIE_CHART_CANVAS_ID} config={pie.clone()} />
                    <table class="holdings">
                        <thead>
                            <tr><th>{"Ticker"}</th><th>{"Allocation"}</th><th>{"Price"}</th></tr>
                        </thead>
                        <tbody>
                            { for state.allocations.iter().map(|a| html! {
                                <tr>
                                    <td>{ a.ticker.clone() }</td>
                                    <td>{ format!("{:.2}%", a.allocation) }</td>
                                    <td>{ a.price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "—".to_string()) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    if let Some(label) = state.generated_at.as_deref().map(format_timestamp) {
                        <p class="muted">{ format!("Generated {}", label) }</p>
                    }
                </section>
            }

            if state.show_line_chart() {
                <section class="card">
                    <h2>{"Projected value"}</h2>
                    <ChartCanvas canvas_id={LINE_CHART_CANVAS_ID} config={line.clone()} />
                </section>
            }

            <SavedPortfolios
                api={props.api.clone()}
                session={props.session.clone()}
                revision={state.revision}
            />
        </div>
    }
}
