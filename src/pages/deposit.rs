use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{input_value, select_value, submit_button, summary_row, use_config, use_notifier};
use crate::calc::{self, DepositMethod, FeeSummary};
use crate::config::AppConfig;
use crate::data::deposit_addresses;
use crate::dom;
use crate::format::{format_card_number, format_currency, format_expiry};
use crate::page_shell;
use crate::submission::{drive_submission, simulated, SubmitLabels, SubmitPhase, TimerDelay};

const LABELS: SubmitLabels = SubmitLabels::new("Deposit Funds", "Processing...");
const ADDRESS_INPUT_ID: &str = "depositAddress";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepositForm {
    pub method: Option<DepositMethod>,
    pub amount: String,
    pub account_holder: String,
    pub account_number: String,
    pub routing_number: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub card_name: String,
    pub crypto_asset: String,
}

impl DepositForm {
    /// Selecting a method card or the select keeps both in step.
    pub fn select_method(&mut self, raw: &str) {
        self.method = calc::parse_selection::<DepositMethod>(raw).unwrap_or_else(|err| {
            log::warn!("{}", err);
            None
        });
    }

    pub fn summary(&self) -> FeeSummary {
        calc::deposit_summary(calc::parse_amount(&self.amount), self.method)
    }

    pub fn success_message(&self, symbol: &str) -> Option<String> {
        let method = self.method?;
        Some(format!(
            "Deposit of {} via {} processed successfully!",
            format_currency(calc::parse_amount(&self.amount), symbol),
            method
        ))
    }
}

fn method_icon(method: DepositMethod) -> &'static str {
    match method {
        DepositMethod::Bank => "fas fa-university",
        DepositMethod::Card => "fas fa-credit-card",
        DepositMethod::Crypto => "fab fa-bitcoin",
    }
}

#[function_component(DepositPage)]
pub fn deposit_page() -> Html {
    let notifier = use_notifier();
    let config = use_config();
    let symbol = config.currency_symbol();
    let form = use_state(DepositForm::default);
    let phase = use_state(SubmitPhase::default);

    let update = |f: fn(&mut DepositForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            f(&mut next, input_value(e));
            form.set(next);
        })
    };
    let on_amount = update(|f, v| f.amount = v);
    let on_holder = update(|f, v| f.account_holder = v);
    let on_account = update(|f, v| f.account_number = v);
    let on_routing = update(|f, v| f.routing_number = v);
    let on_card_number = update(|f, v| f.card_number = format_card_number(&v));
    let on_card_expiry = update(|f, v| f.card_expiry = format_expiry(&v));
    let on_card_cvv = update(|f, v| f.card_cvv = v);
    let on_card_name = update(|f, v| f.card_name = v);

    let on_method_select = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.select_method(&select_value(e));
            form.set(next);
        })
    };

    let on_crypto_asset = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.crypto_asset = select_value(e);
            form.set(next);
        })
    };

    let on_copy = {
        let notifier = notifier.clone();
        Callback::from(move |_| match dom::copy_input_text(ADDRESS_INPUT_ID) {
            Ok(()) => notifier.success("Address copied to clipboard!"),
            Err(err) => log::debug!("copy address: {}", err),
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.deposit_ms);
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
            let notifier = notifier.clone();
            spawn_local(async move {
                let message = drive_submission(
                    |p| phase.set(p),
                    simulated(&TimerDelay, wait, message),
                )
                .await;
                log::info!("{}", message);
                notifier.success(message);
                form.set(DepositForm::default());
            });
        })
    };

    let summary = form.summary();
    let addresses = deposit_addresses();
    let address = addresses
        .iter()
        .find(|a| !form.crypto_asset.is_empty() && a.asset == form.crypto_asset);

    let method_cards = html! {
        <div class="row g-3">
            { for DepositMethod::ALL.iter().map(|method| {
                let method = *method;
                let selected = form.method == Some(method);
                let onclick = {
                    let form = form.clone();
                    Callback::from(move |_| {
                        let mut next = (*form).clone();
                        next.method = Some(method);
                        form.set(next);
                    })
                };
                html! {
                    <div class="col-md-4">
                        <div class={classes!("deposit-method", "card", "h-100", selected.then_some("selected"))} {onclick}>
                            <div class="card-body text-center">
                                <i class={classes!(method_icon(method), "fa-2x", "mb-2")}></i>
                                <h6 class="mb-1">{ method.label() }</h6>
                                <small class="text-muted">{ method.processing_time() }</small>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    };

    let method_form = match form.method {
        Some(DepositMethod::Bank) => html! {
            <div id="bankForm" class="deposit-form-section">
                <div class="mb-3">
                    <label class="form-label">{"Account Holder Name"}</label>
                    <input class="form-control" required=true value={form.account_holder.clone()} oninput={on_holder} />
                </div>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Account Number"}</label>
                        <input class="form-control" required=true value={form.account_number.clone()} oninput={on_account} />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Routing Number"}</label>
                        <input class="form-control" required=true value={form.routing_number.clone()} oninput={on_routing} />
                    </div>
                </div>
            </div>
        },
        Some(DepositMethod::Card) => html! {
            <div id="cardForm" class="deposit-form-section">
                <div class="mb-3">
                    <label class="form-label">{"Card Number"}</label>
                    <input id="cardNumber" class="form-control" required=true maxlength="19" placeholder="1234 5678 9012 3456"
                        value={form.card_number.clone()} oninput={on_card_number} />
                </div>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Expiry Date"}</label>
                        <input id="expiryDate" class="form-control" required=true maxlength="5" placeholder="MM/YY"
                            value={form.card_expiry.clone()} oninput={on_card_expiry} />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"CVV"}</label>
                        <input class="form-control" required=true maxlength="4" value={form.card_cvv.clone()} oninput={on_card_cvv} />
                    </div>
                </div>
                <div class="mb-3">
                    <label class="form-label">{"Cardholder Name"}</label>
                    <input class="form-control" required=true value={form.card_name.clone()} oninput={on_card_name} />
                </div>
            </div>
        },
        Some(DepositMethod::Crypto) => html! {
            <div id="cryptoForm" class="deposit-form-section">
                <div class="mb-3">
                    <label class="form-label">{"Cryptocurrency"}</label>
                    <select class="form-select" required=true onchange={on_crypto_asset}>
                        <option value="" selected={form.crypto_asset.is_empty()}>{"Select cryptocurrency"}</option>
                        { for addresses.iter().map(|a| html! {
                            <option value={a.asset} selected={form.crypto_asset == a.asset}>{ a.asset }</option>
                        }) }
                    </select>
                </div>
                if let Some(address) = address {
                    <div class="crypto-address mb-3">
                        <label class="form-label">{ format!("{} deposit address ({})", address.asset, address.network) }</label>
                        <div class="input-group">
                            <input id={ADDRESS_INPUT_ID} class="form-control" readonly=true value={address.address} />
                            <button type="button" class="btn btn-outline-secondary" onclick={on_copy}>
                                <i class="fas fa-copy"></i>
                            </button>
                        </div>
                    </div>
                }
            </div>
        },
        None => html! {},
    };

    page_shell(
        "Deposit Funds",
        html! {},
        html! {
            <div class="row g-4">
                <div class="col-lg-8">
                    { method_cards }
                    <form id="depositForm" class="card mt-4" onsubmit={on_submit}>
                        <div class="card-body">
                            <div class="row">
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Deposit Method"}</label>
                                    <select id="depositMethod" class="form-select" required=true onchange={on_method_select}>
                                        <option value="" selected={form.method.is_none()}>{"Select method"}</option>
                                        { for DepositMethod::ALL.iter().map(|m| html! {
                                            <option value={m.as_str()} selected={form.method == Some(*m)}>{ m.label() }</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Amount"}</label>
                                    <input id="depositAmount" type="number" min="10" step="0.01" class="form-control" required=true
                                        value={form.amount.clone()} oninput={on_amount} />
                                </div>
                            </div>
                            { method_form }
                            { submit_button(LABELS, *phase, false, "btn btn-primary w-100") }
                        </div>
                    </form>
                </div>
                <div class="col-lg-4">
                    <div class="card">
                        <div class="card-body">
                            <h6 class="mb-3">{"Deposit Summary"}</h6>
                            { summary_row("Amount", format_currency(summary.amount, symbol), "summaryAmount") }
                            { summary_row("Processing Fee", format_currency(summary.fee, symbol), "summaryFee") }
                            <hr />
                            { summary_row("Total", format_currency(summary.net, symbol), "summaryTotal") }
                            { summary_row("Processing Time", summary.processing_time.to_string(), "summaryTime") }
                        </div>
                    </div>
                </div>
            </div>
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_deposit_summary_and_message() {
        let mut form = DepositForm::default();
        form.select_method("card");
        form.amount = "1000".into();
        let s = form.summary();
        assert_eq!(format_currency(s.fee, "$"), "$29.00");
        assert_eq!(format_currency(s.net, "$"), "$971.00");
        assert_eq!(
            form.success_message("$").as_deref(),
            Some("Deposit of $1,000.00 via card processed successfully!")
        );
    }

    #[test]
    fn unknown_method_leaves_nothing_selected() {
        let mut form = DepositForm {
            method: Some(DepositMethod::Bank),
            ..Default::default()
        };
        form.select_method("wire");
        assert_eq!(form.method, None);
        assert_eq!(form.summary().processing_time, "-");
        assert!(form.success_message("$").is_none());
    }
}
