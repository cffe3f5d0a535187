use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{input_value, modal, select_value, submit_button, summary_row, use_config, use_notifier};
use crate::calc::{self, InvestmentPlan, InvestmentProjection, INVESTMENT_DURATIONS};
use crate::config::AppConfig;
use crate::data::sample_investments;
use crate::dom;
use crate::filter::{visible_rows, InvestmentFilter, INVESTMENT_FILTERS};
use crate::format::{format_currency, format_signed_percentage};
use crate::page_shell;
use crate::submission::{drive_submission, simulated, SubmitLabels, SubmitPhase, TimerDelay};

const LABELS: SubmitLabels = SubmitLabels::new("Create Investment", "Creating Investment...");

#[derive(Clone, Debug, PartialEq)]
pub struct InvestmentForm {
    pub plan: Option<InvestmentPlan>,
    pub amount: String,
    pub duration: String,
}

impl Default for InvestmentForm {
    fn default() -> Self {
        InvestmentForm {
            plan: None,
            amount: String::new(),
            duration: INVESTMENT_DURATIONS[0].0.to_string(),
        }
    }
}

impl InvestmentForm {
    pub fn select_plan(&mut self, raw: &str) {
        self.plan = calc::parse_selection::<InvestmentPlan>(raw).unwrap_or_else(|err| {
            log::warn!("{}", err);
            None
        });
    }

    /// Without a plan the summary keeps showing zeroes.
    pub fn projection(&self) -> Option<InvestmentProjection> {
        self.plan.map(|plan| {
            calc::investment_projection(
                calc::parse_amount(&self.amount),
                plan,
                calc::parse_days(&self.duration),
            )
        })
    }

    pub fn success_message(&self, symbol: &str) -> Option<String> {
        let plan = self.plan?;
        Some(format!(
            "Investment of {} in {} plan created successfully!",
            format_currency(calc::parse_amount(&self.amount), symbol),
            plan
        ))
    }
}

fn plan_card(plan: InvestmentPlan, on_select: Callback<InvestmentPlan>) -> Html {
    let (min, max) = plan.roi_range();
    html! {
        <div class="col-md-6 col-xl-3">
            <div class="card investment-plan h-100">
                <div class="card-body">
                    <h5>{ plan.label() }</h5>
                    <p class="display-6 text-success mb-1">{ format!("{}-{}%", min, max) }</p>
                    <small class="text-muted">{"Annual ROI"}</small>
                    <button type="button" class="btn btn-primary w-100 mt-3" onclick={Callback::from(move |_| on_select.emit(plan))}>
                        {"Invest Now"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(InvestmentsPage)]
pub fn investments_page() -> Html {
    let notifier = use_notifier();
    let config = use_config();
    let symbol = config.currency_symbol();
    let form = use_state(InvestmentForm::default);
    let phase = use_state(SubmitPhase::default);
    let show_modal = use_state(|| false);
    let filter = use_state(|| INVESTMENT_FILTERS[0].to_string());

    let on_plan_card = {
        let form = form.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |plan: InvestmentPlan| {
            let mut next = (*form).clone();
            next.plan = Some(plan);
            form.set(next);
            show_modal.set(true);
        })
    };

    let on_open = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };

    let on_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_plan = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.select_plan(&select_value(e));
            form.set(next);
        })
    };

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.amount = input_value(e);
            form.set(next);
        })
    };

    let on_duration = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.duration = select_value(e);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let show_modal = show_modal.clone();
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.investment_ms);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !dom::form_is_valid(&e) {
                return;
            }
            if let Err(err) = phase.begin() {
                log::debug!("{}", err);
                return;
            }
            let message = match form.success_message(symbol) {
                Some(message) => message,
                None => return,
            };
            let form = form.clone();
            let phase = phase.clone();
            let show_modal = show_modal.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let message = drive_submission(
                    |p| phase.set(p),
                    simulated(&TimerDelay, wait, message),
                )
                .await;
                show_modal.set(false);
                log::info!("{}", message);
                notifier.success(message);
                form.set(InvestmentForm::default());
            });
        })
    };

    let projection = form.projection();
    let (amount, expected, total) = projection
        .map(|p| (p.amount, p.expected_return, p.total))
        .unwrap_or_default();
    let roi_text = projection.map(|p| p.roi_label()).unwrap_or_default();

    let rows = sample_investments();
    let predicate = InvestmentFilter((*filter).clone());
    let visible = visible_rows(&rows, &predicate);

    let form_body = html! {
        <form id="investmentForm" onsubmit={on_submit}>
            <div class="mb-3">
                <label class="form-label">{"Investment Plan"}</label>
                <select id="planSelect" class="form-select" required=true onchange={on_plan}>
                    <option value="" selected={form.plan.is_none()}>{"Select a plan"}</option>
                    { for InvestmentPlan::ALL.iter().map(|p| html! {
                        <option value={p.as_str()} selected={form.plan == Some(*p)}>{ p.label() }</option>
                    }) }
                </select>
            </div>
            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label">{"Amount"}</label>
                    <input id="investmentAmount" type="number" min="100" step="0.01" class="form-control" required=true
                        value={form.amount.clone()} oninput={on_amount} />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label">{"Duration"}</label>
                    <select id="durationSelect" class="form-select" required=true onchange={on_duration}>
                        { for INVESTMENT_DURATIONS.iter().map(|(days, label)| html! {
                            <option value={days.to_string()} selected={form.duration == days.to_string()}>{ *label }</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="mb-3">
                <label class="form-label">{"Expected ROI"}</label>
                <input id="expectedROI" class="form-control" readonly=true value={roi_text} />
            </div>
            <div class="investment-summary bg-light rounded p-3 mb-3">
                { summary_row("Investment Amount", format_currency(amount, symbol), "summaryAmount") }
                { summary_row("Expected Return", format_currency(expected, symbol), "summaryReturn") }
                { summary_row("Total Payout", format_currency(total, symbol), "summaryTotal") }
            </div>
            { submit_button(LABELS, *phase, false, "btn btn-primary w-100") }
        </form>
    };

    page_shell(
        "Investments",
        html! {
            <button type="button" class="btn btn-primary" onclick={on_open}>{"New Investment"}</button>
        },
        html! {
            <>
                <div class="row g-3 mb-4">
                    { for InvestmentPlan::ALL.iter().map(|plan| plan_card(*plan, on_plan_card.clone())) }
                </div>
                <div class="card">
                    <div class="card-header d-flex justify-content-between align-items-center">
                        <h6 class="mb-0">{"My Investments"}</h6>
                        <div class="investment-filters btn-group">
                            { for INVESTMENT_FILTERS.iter().map(|label| {
                                let filter = filter.clone();
                                let active = *filter == *label;
                                let value = label.to_string();
                                html! {
                                    <button type="button" class={classes!("btn", "btn-sm", "btn-outline-primary", active.then_some("active"))}
                                        onclick={Callback::from(move |_| filter.set(value.clone()))}>
                                        { *label }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="table-responsive">
                        <table class="table mb-0">
                            <thead>
                                <tr>
                                    <th>{"Plan"}</th>
                                    <th>{"Started"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Current Value"}</th>
                                    <th>{"ROI"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for visible.iter().map(|row| html! {
                                    <tr>
                                        <td>{ row.name }</td>
                                        <td>{ row.started }</td>
                                        <td>{ format_currency(row.amount, symbol) }</td>
                                        <td>{ format_currency(row.current_value, symbol) }</td>
                                        <td class="text-success">{ format_signed_percentage(row.roi_percent) }</td>
                                        <td><span class="badge bg-secondary">{ row.status }</span></td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
                { modal("New Investment", *show_modal, on_close, form_body) }
            </>
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stocks_for_a_year() {
        let mut form = InvestmentForm::default();
        form.select_plan("stocks");
        form.amount = "2000".into();
        form.duration = "365".into();
        let p = form.projection().unwrap();
        assert_eq!(p.roi_label(), "11.5% annually");
        assert_eq!(format_currency(p.expected_return, "$"), "$230.00");
        assert_eq!(format_currency(p.total, "$"), "$2,230.00");
        assert_eq!(
            form.success_message("$").as_deref(),
            Some("Investment of $2,000.00 in stocks plan created successfully!")
        );
    }

    #[test]
    fn no_plan_means_no_projection() {
        let mut form = InvestmentForm {
            amount: "500".into(),
            ..Default::default()
        };
        assert!(form.projection().is_none());
        form.select_plan("gold");
        assert!(form.plan.is_none());
        assert!(form.success_message("$").is_none());
    }
}
