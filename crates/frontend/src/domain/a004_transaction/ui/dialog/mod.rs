use contracts::domain::a004_transaction::aggregate::{
    sort_by_date, SortOrder, Transaction, TransactionKind,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_transaction::api::fetch_transactions;
use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::format_transaction_date;
use crate::shared::number_format::format_usd_or_na;

fn kind_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Credit => "txn-chip txn-chip--credit",
        TransactionKind::Debit => "txn-chip txn-chip--debit",
        TransactionKind::Other => "txn-chip",
    }
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Credit => "Credit",
        TransactionKind::Debit => "Debit",
        TransactionKind::Other => "Trade",
    }
}

/// Выписка по счёту: загружается при открытии, сортируется по дате
#[component]
pub fn TransactionsDialog(
    open: RwSignal<bool>,
    #[prop(into)] account_no: Signal<Option<String>>,
) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let client = StoredValue::new(client);

    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sort_order = RwSignal::new(SortOrder::default());
    // последний запрос; ответы на предыдущие отбрасываются
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let Some(account) = account_no.get() else {
            return;
        };

        request_seq.update_value(|seq| *seq += 1);
        let seq = request_seq.get_value();
        let client = client.get_value();
        transactions.set(Vec::new());
        error.set(None);
        loading.set(true);
        sort_order.set(SortOrder::default());

        spawn_local(async move {
            let result = fetch_transactions(&client, &account).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(items) => transactions.set(items),
                Err(e) => {
                    log::error!("transactions for {} failed: {}", account, e);
                    error.set(Some("Failed to fetch transactions. Please try again.".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let sorted = move || {
        let mut items = transactions.get();
        sort_by_date(&mut items, sort_order.get());
        items
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        <div class="txn-dialog__title">
                            <span>"Transaction History"</span>
                            <span class="txn-dialog__subtitle">
                                {move || format!("Account: {}", account_no.get().unwrap_or_default())}
                            </span>
                        </div>
                    </DialogTitle>
                    <DialogContent>
                        <Show when=move || loading.get()>
                            <div class="txn-dialog__loading">
                                <Spinner />
                                <span>"Loading transactions..."</span>
                            </div>
                        </Show>
                        {move || error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}
                        <Show when=move || !loading.get() && error.get().is_none()>
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| sort_order.update(|order| *order = order.toggled())
                                        >
                                            "Date"
                                            {move || sort_order.get().indicator()}
                                        </th>
                                        <th class="table__header-cell">"Transaction Code"</th>
                                        <th class="table__header-cell">"Type"</th>
                                        <th class="table__header-cell table__header-cell--right">"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let rows = sorted();
                                        if rows.is_empty() {
                                            return view! {
                                                <tr>
                                                    <td class="table__cell table__cell--empty" colspan="4">
                                                        <div>"No transactions found"</div>
                                                        <div class="text-secondary">
                                                            "This account doesn't have any transactions yet."
                                                        </div>
                                                    </td>
                                                </tr>
                                            }.into_any();
                                        }
                                        rows.into_iter().map(|txn| {
                                            let kind = txn.kind();
                                            let date = format_transaction_date(txn.date.as_deref(), txn.timestamp_millis());
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{date}</td>
                                                    <td class="table__cell">
                                                        <span class=kind_class(kind)>
                                                            {txn.transaction_code.clone().unwrap_or_else(|| "N/A".to_string())}
                                                        </span>
                                                    </td>
                                                    <td class="table__cell">
                                                        {kind_label(kind)}
                                                        {txn.symbol.clone().map(|s| format!(" · {}", s.to_uppercase()))}
                                                    </td>
                                                    <td class="table__cell table__cell--right">{format_usd_or_na(txn.amount)}</td>
                                                </tr>
                                            }
                                        }).collect_view().into_any()
                                    }}
                                </tbody>
                            </table>
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
