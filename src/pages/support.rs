use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use super::{input_value, modal, select_value, submit_button, textarea_value, use_config, use_notifier};
use crate::config::AppConfig;
use crate::data::sample_faqs;
use crate::dom;
use crate::filter::{visibility, FaqSearch};
use crate::page_shell;
use crate::submission::{drive_submission, simulated, Delay, SubmitLabels, SubmitPhase, TimerDelay};
use crate::support_api::{failure_message, send_support_email, ticket_created_message, ticket_reference};

const EMAIL_LABELS: SubmitLabels = SubmitLabels::new("Send Email", "Sending...");
const TICKET_LABELS: SubmitLabels = SubmitLabels::new("Create Ticket", "Creating...");

const PRIORITIES: [&str; 4] = ["low", "medium", "high", "urgent"];

#[derive(Clone, Debug, PartialEq)]
pub struct TicketForm {
    pub subject: String,
    pub priority: String,
    pub description: String,
}

impl Default for TicketForm {
    fn default() -> Self {
        TicketForm {
            subject: String::new(),
            priority: PRIORITIES[1].to_string(),
            description: String::new(),
        }
    }
}

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    let notifier = use_notifier();
    let config = use_config();
    let search = use_state(String::new);
    let open_faq = use_state(|| None::<usize>);
    let email_open = use_state(|| false);
    let email_phase = use_state(SubmitPhase::default);
    let ticket_open = use_state(|| false);
    let ticket_phase = use_state(SubmitPhase::default);
    let ticket = use_state(TicketForm::default);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| search.set(input_value(e)))
    };

    let on_live_chat = {
        let notifier = notifier.clone();
        let wait = AppConfig::millis(config.timings.support_chat_ms);
        Callback::from(move |_| {
            notifier.info("Connecting you to a support agent...");
            let notifier = notifier.clone();
            spawn_local(async move {
                TimerDelay.wait(wait).await;
                notifier.success("Connected! A support agent will be with you shortly.");
            });
        })
    };

    let open = |handle: &UseStateHandle<bool>, value: bool| {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.set(value))
    };

    let on_email_submit = {
        let notifier = notifier.clone();
        let email_open = email_open.clone();
        let email_phase = email_phase.clone();
        let followup = AppConfig::millis(config.timings.ticket_followup_ms);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !dom::form_is_valid(&e) {
                return;
            }
            let form = match e.target_dyn_into::<HtmlFormElement>() {
                Some(form) => form,
                None => {
                    log::debug!("email support form not found");
                    return;
                }
            };
            if let Err(err) = email_phase.begin() {
                log::debug!("{}", err);
                return;
            }
            let notifier = notifier.clone();
            let email_open = email_open.clone();
            let email_phase = email_phase.clone();
            spawn_local(async move {
                let outcome = drive_submission(|p| email_phase.set(p), send_support_email(&form)).await;
                match outcome {
                    Ok(response) => {
                        email_open.set(false);
                        notifier.success(response.message.clone());
                        form.reset();
                        if let Some(message) = response.followup_message() {
                            TimerDelay.wait(followup).await;
                            notifier.info(message);
                        }
                    }
                    Err(err) => {
                        log::error!("support email failed: {}", err);
                        notifier.error(failure_message(&err));
                    }
                }
            });
        })
    };

    let on_ticket_subject = {
        let ticket = ticket.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*ticket).clone();
            next.subject = input_value(e);
            ticket.set(next);
        })
    };
    let on_ticket_priority = {
        let ticket = ticket.clone();
        Callback::from(move |e: Event| {
            let mut next = (*ticket).clone();
            next.priority = select_value(e);
            ticket.set(next);
        })
    };
    let on_ticket_description = {
        let ticket = ticket.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*ticket).clone();
            next.description = textarea_value(e);
            ticket.set(next);
        })
    };

    let on_ticket_submit = {
        let notifier = notifier.clone();
        let ticket = ticket.clone();
        let ticket_open = ticket_open.clone();
        let ticket_phase = ticket_phase.clone();
        let wait = AppConfig::millis(config.timings.ticket_ms);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !dom::form_is_valid(&e) {
                return;
            }
            if let Err(err) = ticket_phase.begin() {
                log::debug!("{}", err);
                return;
            }
            let notifier = notifier.clone();
            let ticket = ticket.clone();
            let ticket_open = ticket_open.clone();
            let ticket_phase = ticket_phase.clone();
            spawn_local(async move {
                let reference = drive_submission(
                    |p| ticket_phase.set(p),
                    simulated(&TimerDelay, wait, ticket_reference()),
                )
                .await;
                ticket_open.set(false);
                log::info!("created support ticket {}", reference);
                notifier.success(ticket_created_message(&reference));
                ticket.set(TicketForm::default());
            });
        })
    };

    let faqs = sample_faqs();
    let shown = visibility(&faqs, &FaqSearch((*search).clone()));

    let email_form = html! {
        <form id="emailSupportForm" action={config.support_email_action.clone()} method="post" enctype="multipart/form-data" onsubmit={on_email_submit}>
            <div class="mb-3">
                <label class="form-label">{"Subject"}</label>
                <input name="subject" class="form-control" required=true />
            </div>
            <div class="mb-3">
                <label class="form-label">{"Category"}</label>
                <select name="category" class="form-select" required=true>
                    <option value="">{"Select category"}</option>
                    <option value="account">{"Account"}</option>
                    <option value="deposit">{"Deposits"}</option>
                    <option value="withdrawal">{"Withdrawals"}</option>
                    <option value="investment">{"Investments"}</option>
                    <option value="other">{"Other"}</option>
                </select>
            </div>
            <div class="mb-3">
                <label class="form-label">{"Message"}</label>
                <textarea name="message" class="form-control" rows="5" required=true></textarea>
            </div>
            <div class="mb-3">
                <label class="form-label">{"Attachment"}</label>
                <input name="attachment" type="file" class="form-control" />
            </div>
            <div id="emailSubmitBtn">
                { submit_button(EMAIL_LABELS, *email_phase, false, "btn btn-primary w-100") }
            </div>
        </form>
    };

    let ticket_form = html! {
        <form id="newTicketForm" onsubmit={on_ticket_submit}>
            <div class="mb-3">
                <label class="form-label">{"Subject"}</label>
                <input class="form-control" required=true value={ticket.subject.clone()} oninput={on_ticket_subject} />
            </div>
            <div class="mb-3">
                <label class="form-label">{"Priority"}</label>
                <select class="form-select" onchange={on_ticket_priority}>
                    { for PRIORITIES.iter().map(|p| html! {
                        <option value={*p} selected={ticket.priority == *p}>{ *p }</option>
                    }) }
                </select>
            </div>
            <div class="mb-3">
                <label class="form-label">{"Description"}</label>
                <textarea class="form-control" rows="4" required=true value={ticket.description.clone()} oninput={on_ticket_description}></textarea>
            </div>
            { submit_button(TICKET_LABELS, *ticket_phase, false, "btn btn-primary w-100") }
        </form>
    };

    page_shell(
        "Support",
        html! {
            <button type="button" class="btn btn-primary" onclick={open(&ticket_open, true)}>{"New Ticket"}</button>
        },
        html! {
            <>
                <div class="row g-3 mb-4">
                    <div class="col-md-4">
                        <div class="card h-100 text-center">
                            <div class="card-body">
                                <h6>{"Live Chat"}</h6>
                                <p class="text-muted small">{"Talk to an agent in real time"}</p>
                                <button type="button" class="btn btn-outline-primary" onclick={on_live_chat}>{"Start Chat"}</button>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-4">
                        <div class="card h-100 text-center">
                            <div class="card-body">
                                <h6>{"Email Support"}</h6>
                                <p class="text-muted small">{"We reply within 24 hours"}</p>
                                <button type="button" class="btn btn-outline-primary" onclick={open(&email_open, true)}>{"Send Email"}</button>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-4">
                        <div class="card h-100 text-center">
                            <div class="card-body">
                                <h6>{"Support Ticket"}</h6>
                                <p class="text-muted small">{"Track an issue end to end"}</p>
                                <button type="button" class="btn btn-outline-primary" onclick={open(&ticket_open, true)}>{"Create Ticket"}</button>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-header">
                        <h6 class="mb-2">{"Frequently Asked Questions"}</h6>
                        <input id="faqSearch" class="form-control" placeholder="Search FAQs..." value={(*search).clone()} oninput={on_search} />
                    </div>
                    <div class="accordion accordion-flush">
                        { for faqs.iter().enumerate().filter(|(i, _)| shown[*i]).map(|(i, faq)| {
                            let expanded = *open_faq == Some(i);
                            let open_faq = open_faq.clone();
                            let toggle = Callback::from(move |_| {
                                open_faq.set(if *open_faq == Some(i) { None } else { Some(i) })
                            });
                            html! {
                                <div class="accordion-item">
                                    <h2 class="accordion-header">
                                        <button type="button" class={classes!("accordion-button", (!expanded).then_some("collapsed"))} onclick={toggle}>
                                            { faq.question }
                                        </button>
                                    </h2>
                                    if expanded {
                                        <div class="accordion-collapse show">
                                            <div class="accordion-body">{ faq.answer }</div>
                                        </div>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </div>
                { modal("Email Support", *email_open, open(&email_open, false), email_form) }
                { modal("New Support Ticket", *ticket_open, open(&ticket_open, false), ticket_form) }
            </>
        },
    )
}
