use yew::prelude::*;

use super::{input_value, modal, select_value, use_config, use_notifier};
use crate::data::{sample_transactions, TransactionRow};
use crate::filter::{visible_rows, TransactionFilter};
use crate::format::format_currency;
use crate::page_shell;

const TYPE_OPTIONS: [(&str, &str); 5] = [
    ("", "All Types"),
    ("deposit", "Deposit"),
    ("withdrawal", "Withdrawal"),
    ("investment", "Investment"),
    ("profit", "Profit"),
];

const STATUS_OPTIONS: [(&str, &str); 5] = [
    ("", "All Status"),
    ("completed", "Completed"),
    ("pending", "Pending"),
    ("active", "Active"),
    ("failed", "Failed"),
];

const DATE_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Time"),
    ("7", "Last 7 Days"),
    ("30", "Last 30 Days"),
    ("90", "Last 90 Days"),
];

fn status_badge(status: &str) -> &'static str {
    match status {
        "Completed" => "bg-success",
        "Pending" => "bg-warning",
        "Failed" => "bg-danger",
        _ => "bg-info",
    }
}

fn filter_select(
    id: &'static str,
    options: &[(&'static str, &'static str)],
    current: &str,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <select id={id} class="form-select" {onchange}>
            { for options.iter().map(|(value, label)| html! {
                <option value={*value} selected={current == *value}>{ *label }</option>
            }) }
        </select>
    }
}

fn detail_view(row: &TransactionRow, symbol: &str) -> Html {
    let fields = [
        ("Transaction ID", row.id.to_string()),
        ("Date", format!("{} {}", row.date, row.time)),
        ("Type", row.kind.to_string()),
        ("Description", row.description.to_string()),
        ("Method", row.method.to_string()),
        ("Amount", format_currency(row.amount, symbol)),
        ("Status", row.status.to_string()),
    ];
    html! {
        <dl class="row mb-0">
            { for fields.into_iter().map(|(label, value)| html! {
                <>
                    <dt class="col-5 text-muted">{ label }</dt>
                    <dd class="col-7">{ value }</dd>
                </>
            }) }
        </dl>
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let notifier = use_notifier();
    let config = use_config();
    let symbol = config.currency_symbol();
    let filter = use_state(|| TransactionFilter {
        date: "all".to_string(),
        ..Default::default()
    });
    let viewing = use_state(|| None::<&'static str>);

    let on_kind = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.kind = select_value(e);
            filter.set(next);
        })
    };
    let on_status = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.status = select_value(e);
            filter.set(next);
        })
    };
    let on_date = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.date = select_value(e);
            filter.set(next);
        })
    };
    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.search = input_value(e);
            filter.set(next);
        })
    };

    let on_export = Callback::from(move |_| {
        log::info!("transaction export requested");
        notifier.info("Transaction export started. You will receive an email when ready.");
    });

    let on_close = {
        let viewing = viewing.clone();
        Callback::from(move |_| viewing.set(None))
    };

    let rows = sample_transactions();
    let visible = visible_rows(&rows, &*filter);
    let selected = viewing.and_then(|id| rows.iter().find(|r| r.id == id));
    let detail = selected
        .map(|row| detail_view(row, symbol))
        .unwrap_or_else(|| html! {});

    page_shell(
        "Transactions",
        html! {
            <button type="button" class="btn btn-outline-primary" onclick={on_export}>{"Export"}</button>
        },
        html! {
            <>
                <div class="card mb-4">
                    <div class="card-body row g-3">
                        <div class="col-md-3">{ filter_select("typeFilter", &TYPE_OPTIONS, &filter.kind, on_kind) }</div>
                        <div class="col-md-3">{ filter_select("statusFilter", &STATUS_OPTIONS, &filter.status, on_status) }</div>
                        <div class="col-md-3">{ filter_select("dateFilter", &DATE_OPTIONS, &filter.date, on_date) }</div>
                        <div class="col-md-3">
                            <input id="searchFilter" class="form-control" placeholder="Search transactions..."
                                value={filter.search.clone()} oninput={on_search} />
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="table-responsive">
                        <table class="table transaction-table mb-0">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Status"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                if visible.is_empty() {
                                    <tr><td colspan="6" class="text-center text-muted py-4">{"No transactions match your filters"}</td></tr>
                                }
                                { for visible.iter().map(|row| {
                                    let viewing = viewing.clone();
                                    let id = row.id;
                                    html! {
                                        <tr key={row.id}>
                                            <td class="transaction-date"><div>{ row.date }</div><small class="text-muted">{ row.time }</small></td>
                                            <td class="transaction-type"><span>{ row.kind }</span></td>
                                            <td>{ row.description }</td>
                                            <td class={if row.amount < 0.0 { "text-danger" } else { "text-success" }}>{ format_currency(row.amount, symbol) }</td>
                                            <td><span class={classes!("badge", status_badge(row.status))}>{ row.status }</span></td>
                                            <td>
                                                <button type="button" class="btn btn-sm btn-outline-secondary"
                                                    onclick={Callback::from(move |_| viewing.set(Some(id)))}>{"View"}</button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
                { modal("Transaction Details", selected.is_some(), on_close, detail) }
            </>
        },
    )
}
