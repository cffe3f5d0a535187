mod calculator;
mod dashboard;
mod deposit;
mod investments;
mod portfolio;
mod support;
mod transactions;
mod withdraw;

pub use calculator::CalculatorPage;
pub use dashboard::DashboardPage;
pub use deposit::DepositPage;
pub use investments::InvestmentsPage;
pub use portfolio::PortfolioPage;
pub use support::SupportPage;
pub use transactions::TransactionsPage;
pub use withdraw::WithdrawPage;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::submission::{SubmitLabels, SubmitPhase};
use crate::toast::Notifier;

#[hook]
fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[hook]
fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn textarea_value(e: InputEvent) -> String {
    let input: HtmlTextAreaElement = e.target_unchecked_into();
    input.value()
}

fn select_value(e: Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

fn submit_button(labels: SubmitLabels, phase: SubmitPhase, disabled: bool, class: &'static str) -> Html {
    html! {
        <button type="submit" class={class} disabled={disabled || phase.is_processing()}>
            if phase.is_processing() {
                <span class="spinner-border spinner-border-sm me-2" role="status"></span>
            }
            { labels.for_phase(phase) }
        </button>
    }
}

fn modal(title: &'static str, open: bool, on_close: Callback<MouseEvent>, body: Html) -> Html {
    if !open {
        return html! {};
    }
    html! {
        <>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{ title }</h5>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                        </div>
                        <div class="modal-body">{ body }</div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </>
    }
}

fn summary_row(label: &'static str, value: String, id: &'static str) -> Html {
    html! {
        <div class="d-flex justify-content-between mb-2">
            <span class="text-muted">{ label }</span>
            <span id={id} class="fw-bold">{ value }</span>
        </div>
    }
}
