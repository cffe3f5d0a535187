use yew::prelude::*;

use super::portfolio::period_buttons;
use super::use_config;
use crate::charts::{DoughnutChart, LineChart, PortfolioPeriod};
use crate::data::{sample_investments, sample_transactions};
use crate::format::format_currency;
use crate::{page_shell, StatCard, StatIcon};

const RECENT_ROWS: usize = 5;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_config();
    let symbol = config.currency_symbol();
    let period = use_state(|| PortfolioPeriod::SixMonths);

    let on_period = {
        let period = period.clone();
        Callback::from(move |p: PortfolioPeriod| {
            log::debug!("dashboard chart period {}", p.label());
            period.set(p)
        })
    };

    let investments = sample_investments();
    let invested: f64 = investments.iter().map(|i| i.amount).sum();
    let current: f64 = investments.iter().map(|i| i.current_value).sum();
    let active = investments.iter().filter(|i| i.status == "Active").count();
    let roi = if invested > 0.0 { (current - invested) / invested * 100.0 } else { 0.0 };
    let transactions = sample_transactions();

    page_shell(
        "Dashboard",
        html! {},
        html! {
            <>
                <div class="row g-3 mb-4">
                    <div class="col-md-6 col-xl-3">
                        <StatCard title="Total Balance" value={format_currency(config.available_balance, symbol)} change={12.5} icon={StatIcon::Wallet} />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard title="Total Invested" value={format_currency(invested, symbol)} change={8.2} icon={StatIcon::TrendingUp} />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard title="Total Profit" value={format_currency(current - invested, symbol)} change={roi} icon={StatIcon::UpRight} />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard title="Active Investments" value={active.to_string()} change={0.0} icon={StatIcon::BarChart} />
                    </div>
                </div>
                <div class="row g-4 mb-4">
                    <div class="col-lg-8">
                        <div class="card h-100">
                            <div class="card-header d-flex justify-content-between align-items-center">
                                <h6 class="mb-0">{"Portfolio Performance"}</h6>
                                { period_buttons(*period, on_period) }
                            </div>
                            <div id="portfolioChart" class="card-body" style="height: 300px;">
                                <LineChart series={period.series()} symbol={symbol} />
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-4">
                        <div class="card h-100">
                            <div class="card-header"><h6 class="mb-0">{"Asset Allocation"}</h6></div>
                            <div id="allocationChart" class="card-body">
                                <DoughnutChart />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-header"><h6 class="mb-0">{"Recent Transactions"}</h6></div>
                    <ul class="list-group list-group-flush">
                        { for transactions.iter().take(RECENT_ROWS).map(|row| html! {
                            <li class="list-group-item d-flex justify-content-between align-items-center">
                                <div>
                                    <div class="fw-bold">{ row.description }</div>
                                    <small class="text-muted">{ format!("{} · {}", row.kind, row.date) }</small>
                                </div>
                                <span class={if row.amount < 0.0 { "text-danger" } else { "text-success" }}>
                                    { format_currency(row.amount, symbol) }
                                </span>
                            </li>
                        }) }
                    </ul>
                </div>
            </>
        },
    )
}
