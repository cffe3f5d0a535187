use std::rc::Rc;
use std::time::Duration;

use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{input_value, select_value, use_config};
use crate::calc::{
    self, CompoundProjection, Compounding, RiskLevel, DEFAULT_CALCULATOR_AMOUNT,
    DEFAULT_CALCULATOR_MONTHS,
};
use crate::config::AppConfig;
use crate::format::format_currency_whole;
use crate::page_shell;
use crate::submission::{Delay, TimerDelay};

/// Messages the landing chat posts on its own after mount.
pub const MARKET_ALERTS: [(&str, &str, u64); 3] = [
    ("Market Alert", "🔥 ETH breaking $4,500 resistance level!", 15_000),
    ("Portfolio Manager", "📊 Your portfolio is up 3.2% today. Great performance!", 30_000),
    ("Trading Bot", "⚡ Executing buy order for AAPL at $230.50", 45_000),
];

pub const SUPPORT_REPLIES: [&str; 4] = [
    "Thanks for your question! Our team will get back to you shortly.",
    "Great question! Let me connect you with our trading expert.",
    "I've noted your request. You'll receive a detailed response within 5 minutes.",
    "Your inquiry has been forwarded to our analysis team.",
];

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorForm {
    pub amount: String,
    pub months: String,
    pub risk: String,
    pub compounding: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        CalculatorForm {
            amount: DEFAULT_CALCULATOR_AMOUNT.to_string(),
            months: DEFAULT_CALCULATOR_MONTHS.to_string(),
            risk: RiskLevel::Medium.as_str().to_string(),
            compounding: Compounding::Monthly.as_str().to_string(),
        }
    }
}

impl CalculatorForm {
    /// Blank or zero amount and period fall back to the landing defaults.
    pub fn projection(&self) -> CompoundProjection {
        let amount = match calc::parse_amount(&self.amount) {
            a if a > 0.0 => a,
            _ => DEFAULT_CALCULATOR_AMOUNT,
        };
        let months = match calc::parse_days(&self.months) {
            0 => DEFAULT_CALCULATOR_MONTHS,
            m => m,
        };
        let risk = calc::parse_selection::<RiskLevel>(&self.risk)
            .unwrap_or_else(|err| {
                log::warn!("{}", err);
                None
            })
            .unwrap_or(RiskLevel::Medium);
        let compounding = calc::parse_selection::<Compounding>(&self.compounding)
            .unwrap_or_else(|err| {
                log::warn!("{}", err);
                None
            })
            .unwrap_or(Compounding::Monthly);
        calc::compound_returns(amount, months, risk, compounding)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

pub enum ChatAction {
    Post { sender: String, content: String },
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut messages = self.messages.clone();
        match action {
            ChatAction::Post { sender, content } => {
                let content = content.trim().to_string();
                if content.is_empty() {
                    return self;
                }
                messages.push(ChatMessage { sender, content });
            }
        }
        Rc::new(ChatLog { messages })
    }
}

/// Total, profit and ROI as shown under the calculator.
pub fn result_labels(result: &CompoundProjection, symbol: &str) -> (String, String, String) {
    (
        format_currency_whole(result.total, symbol),
        format_currency_whole(result.profit, symbol),
        format!("{:.1}%", result.roi_percent),
    )
}

pub fn pick_reply(seed: u8) -> &'static str {
    SUPPORT_REPLIES[seed as usize % SUPPORT_REPLIES.len()]
}

#[function_component(CalculatorPage)]
pub fn calculator_page() -> Html {
    let config = use_config();
    let form = use_state(CalculatorForm::default);
    let chat = use_reducer(ChatLog::default);
    let draft = use_state(String::new);

    {
        let chat = chat.clone();
        use_effect_with_deps(
            move |_| {
                for (sender, content, delay_ms) in MARKET_ALERTS {
                    let chat = chat.clone();
                    spawn_local(async move {
                        TimerDelay.wait(Duration::from_millis(delay_ms)).await;
                        chat.dispatch(ChatAction::Post {
                            sender: sender.to_string(),
                            content: content.to_string(),
                        });
                    });
                }
                || ()
            },
            (),
        );
    }

    let update = |f: fn(&mut CalculatorForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            f(&mut next, value);
            form.set(next);
        }
    };
    let on_amount = {
        let set = update(|f, v| f.amount = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };
    let on_months = {
        let set = update(|f, v| f.months = v);
        Callback::from(move |e: InputEvent| set(input_value(e)))
    };
    let on_risk = {
        let set = update(|f, v| f.risk = v);
        Callback::from(move |e: Event| set(select_value(e)))
    };
    let on_compounding = {
        let set = update(|f, v| f.compounding = v);
        Callback::from(move |e: Event| set(select_value(e)))
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| draft.set(input_value(e)))
    };

    let send = {
        let chat = chat.clone();
        let draft = draft.clone();
        let wait = AppConfig::millis(config.timings.chat_reply_ms);
        Rc::new(move || {
            let message = draft.trim().to_string();
            if message.is_empty() {
                return;
            }
            chat.dispatch(ChatAction::Post {
                sender: "You".to_string(),
                content: message,
            });
            draft.set(String::new());
            let chat = chat.clone();
            spawn_local(async move {
                TimerDelay.wait(wait).await;
                let seed = Uuid::new_v4().as_bytes()[0];
                chat.dispatch(ChatAction::Post {
                    sender: "Support Team".to_string(),
                    content: pick_reply(seed).to_string(),
                });
            });
        })
    };
    let on_send = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send())
    };
    let on_key = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            send();
        }
    });

    let (total, profit, roi) = result_labels(&form.projection(), config.currency_symbol());

    page_shell(
        "Returns Calculator",
        html! {},
        html! {
            <div class="row g-4">
                <div class="col-lg-7">
                    <div class="card">
                        <div class="card-body">
                            <div class="row">
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Investment Amount"}</label>
                                    <input id="investmentAmount" type="number" min="0" class="form-control" value={form.amount.clone()} oninput={on_amount} />
                                </div>
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Period (months)"}</label>
                                    <input id="investmentPeriod" type="number" min="1" class="form-control" value={form.months.clone()} oninput={on_months} />
                                </div>
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Risk Level"}</label>
                                    <select id="riskLevel" class="form-select" onchange={on_risk}>
                                        <option value="low" selected={form.risk == "low"}>{"Low (5-8%)"}</option>
                                        <option value="medium" selected={form.risk == "medium"}>{"Medium (8-12%)"}</option>
                                        <option value="high" selected={form.risk == "high"}>{"High (12-18%)"}</option>
                                    </select>
                                </div>
                                <div class="col-md-6 mb-3">
                                    <label class="form-label">{"Compounding"}</label>
                                    <select id="compounding" class="form-select" onchange={on_compounding}>
                                        <option value="monthly" selected={form.compounding == "monthly"}>{"Monthly"}</option>
                                        <option value="quarterly" selected={form.compounding == "quarterly"}>{"Quarterly"}</option>
                                        <option value="annually" selected={form.compounding == "annually"}>{"Annually"}</option>
                                    </select>
                                </div>
                            </div>
                            <div class="row text-center mt-3">
                                <div class="col">
                                    <small class="text-muted">{"Total Return"}</small>
                                    <h4 id="totalReturn">{ total }</h4>
                                </div>
                                <div class="col">
                                    <small class="text-muted">{"Profit"}</small>
                                    <h4 id="profit" class="text-success">{ profit }</h4>
                                </div>
                                <div class="col">
                                    <small class="text-muted">{"ROI"}</small>
                                    <h4 id="roi">{ roi }</h4>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="col-lg-5">
                    <div class="card chat-widget">
                        <div class="card-header"><h6 class="mb-0">{"Community Chat"}</h6></div>
                        <div class="chat-messages card-body" style="height: 280px; overflow-y: auto;">
                            { for chat.messages.iter().map(|m| html! {
                                <div class="message mb-2">
                                    <div class="message-header"><strong>{ m.sender.clone() }</strong></div>
                                    <div class="message-content">{ m.content.clone() }</div>
                                </div>
                            }) }
                        </div>
                        <div class="chat-input card-footer d-flex gap-2">
                            <input class="form-control" placeholder="Type a message..." value={(*draft).clone()} oninput={on_draft} onkeypress={on_key} />
                            <button type="button" class="btn btn-primary" onclick={on_send}>{"Send"}</button>
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
    fn defaults_fill_blank_fields() {
        let blank = CalculatorForm {
            amount: String::new(),
            months: "0".into(),
            ..Default::default()
        };
        assert_eq!(blank.projection(), CalculatorForm::default().projection());
        let (total, _, roi) = result_labels(&CalculatorForm::default().projection(), "$");
        assert_eq!(total, "$5,524");
        assert_eq!(roi, "10.5%");
    }

    #[test]
    fn results_follow_configured_currency() {
        let (total, profit, _) = result_labels(&CalculatorForm::default().projection(), "£");
        assert_eq!(total, "£5,524");
        assert!(profit.starts_with('£'));
    }

    #[test]
    fn unknown_risk_falls_back_to_medium() {
        let odd = CalculatorForm {
            risk: "reckless".into(),
            ..Default::default()
        };
        assert_eq!(odd.projection(), CalculatorForm::default().projection());
    }

    #[test]
    fn chat_log_ignores_blank_messages() {
        let log = Rc::new(ChatLog::default())
            .reduce(ChatAction::Post {
                sender: "You".into(),
                content: "  hello ".into(),
            })
            .reduce(ChatAction::Post {
                sender: "You".into(),
                content: "   ".into(),
            });
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].content, "hello");
    }

    #[test]
    fn replies_cycle_through_canned_answers() {
        assert_eq!(pick_reply(0), SUPPORT_REPLIES[0]);
        assert_eq!(pick_reply(5), SUPPORT_REPLIES[1]);
        assert_eq!(pick_reply(255), SUPPORT_REPLIES[3]);
    }
}
