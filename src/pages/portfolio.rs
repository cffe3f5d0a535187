use yew::prelude::*;

use super::use_config;
use crate::charts::{DoughnutChart, LineChart, PortfolioPeriod};
use crate::data::sample_holdings;
use crate::filter::{visibility, HoldingFilter, HOLDING_FILTERS};
use crate::format::{format_currency, format_percentage, format_signed_percentage};
use crate::page_shell;

/// Period buttons shared with the dashboard chart card.
pub(super) fn period_buttons(current: PortfolioPeriod, on_pick: Callback<PortfolioPeriod>) -> Html {
    html! {
        <div class="chart-controls btn-group">
            { for PortfolioPeriod::ALL.iter().map(|period| {
                let period = *period;
                let on_pick = on_pick.clone();
                html! {
                    <button type="button"
                        class={classes!("btn", "btn-sm", "btn-outline-primary", (period == current).then_some("active"))}
                        onclick={Callback::from(move |_| on_pick.emit(period))}>
                        { period.label() }
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let config = use_config();
    let symbol = config.currency_symbol();
    let period = use_state(|| PortfolioPeriod::SixMonths);
    let filter = use_state(|| HOLDING_FILTERS[0].to_string());

    let on_period = {
        let period = period.clone();
        Callback::from(move |p: PortfolioPeriod| period.set(p))
    };

    let holdings = sample_holdings();
    let shown = visibility(&holdings, &HoldingFilter((*filter).clone()));
    let total: f64 = holdings.iter().map(|h| h.value).sum();

    page_shell(
        "Portfolio",
        html! {},
        html! {
            <>
                <div class="row g-4 mb-4">
                    <div class="col-lg-8">
                        <div class="card h-100">
                            <div class="card-header d-flex justify-content-between align-items-center">
                                <h6 class="mb-0">{"Portfolio Performance"}</h6>
                                { period_buttons(*period, on_period) }
                            </div>
                            <div id="portfolioPerformanceChart" class="card-body" style="height: 300px;">
                                <LineChart series={period.series()} symbol={symbol} />
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-4">
                        <div class="card h-100">
                            <div class="card-header"><h6 class="mb-0">{"Asset Allocation"}</h6></div>
                            <div id="assetAllocationChart" class="card-body">
                                <DoughnutChart />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-header d-flex justify-content-between align-items-center">
                        <h6 class="mb-0">{ format!("Holdings ({})", format_currency(total, symbol)) }</h6>
                        <div class="btn-group">
                            { for HOLDING_FILTERS.iter().map(|label| {
                                let filter = filter.clone();
                                let active = *filter == *label;
                                let value = label.to_string();
                                html! {
                                    <button type="button" class={classes!("btn", "btn-sm", "btn-outline-secondary", active.then_some("active"))}
                                        onclick={Callback::from(move |_| filter.set(value.clone()))}>
                                        { *label }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="table-responsive">
                        <table class="table holdings-table mb-0">
                            <thead>
                                <tr>
                                    <th>{"Asset"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Value"}</th>
                                    <th>{"24h Change"}</th>
                                    <th>{"Allocation"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for holdings.iter().zip(shown.iter()).map(|(row, visible)| html! {
                                    <tr style={if *visible { "" } else { "display: none;" }}>
                                        <td>
                                            <div class="fw-bold">{ row.name }</div>
                                            <small class="text-muted">{ row.detail }</small>
                                        </td>
                                        <td>{ row.quantity }</td>
                                        <td>{ format_currency(row.value, symbol) }</td>
                                        <td class={if row.change_percent < 0.0 { "text-danger" } else { "text-success" }}>
                                            { format_signed_percentage(row.change_percent) }
                                        </td>
                                        <td>{ format_percentage(row.allocation_percent / 100.0) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </>
        },
    )
}
