use std::time::Duration;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{input_value, select_value, submit_button, summary_row, textarea_value, use_config, use_notifier};
use crate::calc::WithdrawMethod;
use crate::charts::{Sparkline, SPARKLINE_SAMPLES};
use crate::config::AppConfig;
use crate::data::sample_wallets;
use crate::dom;
use crate::format::format_currency;
use crate::page_shell;
use crate::submission::{drive_submission, simulated, Delay, SubmitLabels, SubmitPhase, TimerDelay};
use crate::wallet::{
    counter_frames, network_display_name, BalanceVisibility, WithdrawForm, WithdrawVariant,
    COUNTER_FRAME_MS,
};

const LABELS: SubmitLabels = SubmitLabels::new("Submit Withdrawal", "Processing...");

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: f64,
}

/// Counts up from zero to `target` once per distinct target.
#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let text = use_state(|| "0.00".to_string());
    {
        let text = text.clone();
        use_effect_with_deps(
            move |target: &f64| {
                let frames = counter_frames(*target);
                spawn_local(async move {
                    let frame = Duration::from_millis(COUNTER_FRAME_MS as u64);
                    for value in frames {
                        TimerDelay.wait(frame).await;
                        text.set(value);
                    }
                });
                || ()
            },
            props.target,
        );
    }
    html! { <span class="counter">{ (*text).clone() }</span> }
}

#[derive(Properties, PartialEq)]
pub struct WithdrawPageProps {
    pub variant: WithdrawVariant,
}

#[function_component(WithdrawPage)]
pub fn withdraw_page(props: &WithdrawPageProps) -> Html {
    let variant = props.variant;
    let notifier = use_notifier();
    let config = use_config();
    let symbol = config.currency_symbol();
    let available = config.available_balance;
    let form = use_state(|| WithdrawForm::for_variant(variant));
    let phase = use_state(SubmitPhase::default);
    let visibility = use_state(BalanceVisibility::default);
    let wallets = sample_wallets();

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.amount = input_value(e);
            form.set(next);
        })
    };

    let on_method = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.method = select_value(e);
            form.set(next);
        })
    };

    let on_crypto = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set_crypto(&select_value(e));
            form.set(next);
        })
    };

    let on_network = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.network = select_value(e);
            form.set(next);
        })
    };

    let on_address = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.address = input_value(e);
            form.set(next);
        })
    };

    let on_account_details = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.account_details = textarea_value(e);
            form.set(next);
        })
    };

    let on_confirm = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.confirmed = !next.confirmed;
            form.set(next);
        })
    };

    let on_max = {
        let form = form.clone();
        let wallets = wallets.clone();
        let fallback = (variant == WithdrawVariant::Basic).then_some(available);
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.fill_max(&wallets, fallback);
            form.set(next);
        })
    };

    let on_toggle_balances = {
        let visibility = visibility.clone();
        Callback::from(move |_| visibility.set(visibility.toggled()))
    };

    let on_refresh = {
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.refresh_balances_ms);
        Callback::from(move |_| {
            notifier.info("Refreshing wallet balances...");
            let notifier = notifier.clone();
            spawn_local(async move {
                TimerDelay.wait(wait).await;
                notifier.success("Wallet balances updated successfully!");
            });
        })
    };

    let on_live_chat = {
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.withdraw_chat_ms);
        Callback::from(move |_| {
            notifier.info("Connecting to live chat...");
            let notifier = notifier.clone();
            spawn_local(async move {
                TimerDelay.wait(wait).await;
                notifier.warning("Live chat is currently unavailable. Please create a support ticket.");
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.withdraw_ms);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit(variant) {
                log::debug!("withdrawal not confirmed");
                return;
            }
            if !dom::form_is_valid(&e) {
                return;
            }
            if let Err(err) = phase.begin() {
                log::debug!("{}", err);
                return;
            }
            let message = match form.success_message(variant, symbol) {
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
                form.set(WithdrawForm::for_variant(variant));
            });
        })
    };

    let wallet_cards = html! {
        <div class="row g-3 mb-4">
            { for wallets.iter().map(|wallet| {
                let onclick = {
                    let form = form.clone();
                    let notifier = notifier.clone();
                    let asset = wallet.asset;
                    let balance = wallet.balance;
                    Callback::from(move |_| {
                        let mut next = (*form).clone();
                        let message = next.select_wallet(asset, balance);
                        form.set(next);
                        notifier.success(message);
                    })
                };
                html! {
                    <div class="col-md-3">
                        <div class={classes!("crypto-balance-card", "interactive-card", "card", form.is_selected(wallet.asset).then_some("selected"))}
                            data-crypto={wallet.asset} data-balance={wallet.balance} {onclick}>
                            <div class="card-body">
                                <div class="d-flex justify-content-between">
                                    <h6 class="mb-0">{ wallet.asset }</h6>
                                    <small class="text-muted">{ wallet.name }</small>
                                </div>
                                <div class="balance-amount fw-bold mt-2">{ visibility.render(wallet.balance) }</div>
                                <div class="balance-usd text-muted small">{ visibility.render(&format_currency(wallet.usd_value, symbol)) }</div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    };

    let total_usd: f64 = wallets.iter().map(|w| w.usd_value).sum();
    let stats = [
        ("Total Balance", total_usd, "balanceChart"),
        ("Withdrawn This Month", 1250.0, "withdrawalChart"),
        ("Pending Withdrawals", 320.0, "pendingChart"),
    ];
    let (mask_class, value_class) = visibility.display_classes();
    let stat_cards = html! {
        <div class="row g-3 mb-4">
            { for stats.iter().zip(SPARKLINE_SAMPLES.iter()).map(|((title, target, id), samples)| html! {
                <div class="col-md-4">
                    <div class="card stats-card">
                        <div class="card-body d-flex justify-content-between align-items-end">
                            <div>
                                <p class="text-muted small mb-1">{ *title }</p>
                                <h4 class="mb-0">
                                    <span class={classes!("balance-mask", mask_class)}>{ "******" }</span>
                                    <span class={classes!("balance-value", value_class)}>
                                        { symbol }<Counter target={*target} />
                                    </span>
                                </h4>
                            </div>
                            <div id={*id}>
                                <Sparkline values={samples.to_vec()} />
                            </div>
                        </div>
                    </div>
                </div>
            }) }
        </div>
    };

    let method_fields = match variant {
        WithdrawVariant::Basic => {
            let method_specific = match form.method.as_str() {
                "bank" => html! {
                    <div class="mb-3">
                        <label class="form-label">{"Bank Account Details"}</label>
                        <textarea class="form-control" rows="3" required=true value={form.account_details.clone()} oninput={on_account_details}></textarea>
                    </div>
                },
                "paypal" => html! {
                    <div class="mb-3">
                        <label class="form-label">{"PayPal Email"}</label>
                        <input type="email" class="form-control" required=true value={form.address.clone()} oninput={on_address.clone()} />
                    </div>
                },
                "crypto" => html! {
                    <div class="mb-3">
                        <label class="form-label">{"Wallet Address"}</label>
                        <input class="form-control" required=true value={form.address.clone()} oninput={on_address.clone()} />
                    </div>
                },
                _ => html! {},
            };
            html! {
                <>
                    <div class="mb-3">
                        <label class="form-label">{"Withdrawal Method"}</label>
                        <select id="withdrawMethod" class="form-select" required=true onchange={on_method}>
                            <option value="" selected={form.method.is_empty()}>{"Select method"}</option>
                            { for WithdrawMethod::ALL.iter().map(|m| html! {
                                <option value={m.as_str()} selected={form.method == m.as_str()}>{ m.label() }</option>
                            }) }
                        </select>
                    </div>
                    { method_specific }
                </>
            }
        }
        WithdrawVariant::Wallets => html! {
            <>
                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Cryptocurrency"}</label>
                        <select id="cryptoType" class="form-select" required=true onchange={on_crypto}>
                            <option value="" selected={form.crypto.is_empty()}>{"Select cryptocurrency"}</option>
                            { for wallets.iter().map(|w| html! {
                                <option value={w.asset} selected={form.crypto == w.asset}>{ w.asset }</option>
                            }) }
                        </select>
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">{"Network"}</label>
                        <select id="network" class="form-select" required=true onchange={on_network}>
                            <option value="" selected={form.network.is_empty()}>{"Select network"}</option>
                            { for form.networks.iter().map(|n| html! {
                                <option value={*n} selected={form.network == *n}>{ network_display_name(n) }</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="mb-3">
                    <label class="form-label">{"Wallet Address"}</label>
                    <input id="walletAddress" class="form-control" required=true value={form.address.clone()} oninput={on_address} />
                </div>
            </>
        },
    };

    let summary_panel = match variant {
        WithdrawVariant::Basic => {
            let summary = form.summary();
            html! {
                <div class="card">
                    <div class="card-body">
                        <h6 class="mb-3">{"Withdrawal Summary"}</h6>
                        { summary_row("Amount", format_currency(summary.amount, symbol), "withdrawSummaryAmount") }
                        { summary_row("Fee", format_currency(summary.fee, symbol), "withdrawSummaryFee") }
                        <hr />
                        { summary_row("You Receive", format_currency(summary.net, symbol), "withdrawSummaryTotal") }
                        { summary_row("Processing Time", summary.processing_time.to_string(), "withdrawSummaryTime") }
                    </div>
                </div>
            }
        }
        WithdrawVariant::Wallets => match form.crypto_fee() {
            Some(fee) => html! {
                <div id="feeCalculator" class="card">
                    <div class="card-body">
                        <h6 class="mb-3">{"Fee Breakdown"}</h6>
                        { summary_row("Withdrawal Amount", fee.amount_label(), "withdrawalAmount") }
                        { summary_row("Platform Fee", fee.fee_label(), "platformFee") }
                        <hr />
                        { summary_row("You Receive", fee.net_label(), "netAmount") }
                    </div>
                </div>
            },
            None => html! {},
        },
    };

    let available_text = match (&form.available_text, variant) {
        (Some(text), _) => text.clone(),
        (None, WithdrawVariant::Basic) => format!("Available: {}", format_currency(available, symbol)),
        (None, WithdrawVariant::Wallets) => "Select a wallet to see its balance".to_string(),
    };

    let actions = match variant {
        WithdrawVariant::Basic => html! {},
        WithdrawVariant::Wallets => html! {
            <div class="d-flex gap-2">
                <button id="toggleBalanceView" type="button" class="btn btn-outline-secondary btn-sm" onclick={on_toggle_balances}>
                    { visibility.button_label() }
                </button>
                <button type="button" class="btn btn-outline-primary btn-sm" onclick={on_refresh}>{"Refresh Balances"}</button>
                <button type="button" class="btn btn-outline-info btn-sm" onclick={on_live_chat}>{"Live Chat"}</button>
            </div>
        },
    };

    let can_submit = form.can_submit(variant);
    let wallets_view = variant == WithdrawVariant::Wallets;

    page_shell(
        "Withdraw Funds",
        actions,
        html! {
            <>
                if wallets_view {
                    { stat_cards }
                    { wallet_cards }
                }
                <div class="row g-4">
                    <div class="col-lg-8">
                        <form id="withdrawForm" class="card" onsubmit={on_submit}>
                            <div class="card-body">
                                { method_fields }
                                <div class="mb-3">
                                    <label class="form-label">{"Amount"}</label>
                                    <div class="input-group">
                                        <input id="withdrawAmount" type="number" min="0" step="any" class="form-control" required=true
                                            placeholder={form.amount_placeholder.clone().unwrap_or_else(|| "Enter amount".to_string())}
                                            value={form.amount.clone()} oninput={on_amount} />
                                        <button id="maxButton" type="button" class="btn btn-outline-secondary" onclick={on_max}>{"Max"}</button>
                                    </div>
                                    <div id="availableBalance" class={classes!("form-text", form.available_text.is_some().then_some("text-success"))}>
                                        { available_text }
                                    </div>
                                </div>
                                if wallets_view {
                                    <div class="form-check mb-3">
                                        <input id="confirmWithdrawal" class="form-check-input" type="checkbox" checked={form.confirmed} onclick={on_confirm} />
                                        <label class="form-check-label" for="confirmWithdrawal">
                                            {"I confirm the withdrawal address and network are correct"}
                                        </label>
                                    </div>
                                }
                                { submit_button(LABELS, *phase, !can_submit, "btn btn-primary w-100") }
                            </div>
                        </form>
                    </div>
                    <div class="col-lg-4">
                        { summary_panel }
                    </div>
                </div>
            </>
        },
    )
}
