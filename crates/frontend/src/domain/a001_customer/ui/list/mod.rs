use contracts::domain::a001_customer::aggregate::Customer;
use contracts::shared::filters::SearchFilter;
use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::a001_customer::api::CustomersSource;
use crate::domain::a004_transaction::ui::dialog::TransactionsDialog;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::paginated_list::{spawn_load, ListLoader};

/// Таблица клиентов с серверной пагинацией и поиском
#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    let loader = ListLoader::new(CustomersSource::new(client), config.page_size);
    let search = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let selected_account = RwSignal::new(None::<String>);
    let open_transactions = move |account: String| {
        selected_account.set(Some(account));
        dialog_open.set(true);
    };

    // новый поиск всегда с первой страницы
    let on_search = Callback::new(move |text: String| {
        search.set(text.clone());
        spawn_load(loader.reload(SearchFilter::new(text)));
    });

    spawn_load(loader.reload(SearchFilter::default()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon("customers")}
                    <h1 class="header__title">"Customers"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || loader.total_count().to_string()}
                    </Badge>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search
                        on_change=on_search
                        delay_ms=config.customer_search_debounce_ms
                        placeholder="Search customers by name, email, or username..."
                    />
                </div>
            </div>

            {move || loader.error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Failed to fetch customers. {}", e)}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| spawn_load(loader.retry())>
                        "Retry"
                    </Button>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Contact"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Accounts"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !loader.is_loading()
                            fallback=|| view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="4"><Spinner /></td>
                                </tr>
                            }
                        >
                            {move || {
                                let rows = loader.items();
                                if rows.is_empty() && loader.error().is_none() {
                                    return view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="4">
                                                <div>"No customers found"</div>
                                                <div class="text-secondary">"Try adjusting your search criteria"</div>
                                            </td>
                                        </tr>
                                    }.into_any();
                                }
                                let filter = search.get_untracked();
                                rows.into_iter()
                                    .map(|customer| customer_row(customer, &filter, open_transactions))
                                    .collect_view()
                                    .into_any()
                            }}
                        </Show>
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || loader.page_no())
                total_count=Signal::derive(move || loader.total_count())
                page_size=Signal::derive(move || loader.page_size())
                on_page_change=Callback::new(move |page| spawn_load(loader.load_page(page)))
                on_page_size_change=Callback::new(move |size| spawn_load(loader.set_page_size(size)))
                page_size_options=config.page_size_options.clone()
                disabled=Signal::derive(move || loader.is_loading())
            />

            <TransactionsDialog open=dialog_open account_no=selected_account />
        </div>
    }
}

fn customer_row(
    customer: Customer,
    filter: &str,
    open_transactions: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let accounts = customer.accounts.clone();
    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="customer-cell">
                    <span class="avatar">{customer.initial()}</span>
                    <div>
                        <div class="customer-cell__name">{highlight_matches(&customer.name, filter)}</div>
                        <div class="text-secondary">{format!("@{}", customer.username)}</div>
                    </div>
                </div>
            </td>
            <td class="table__cell">{highlight_matches(&customer.email, filter)}</td>
            <td class="table__cell">{customer.address_label().to_string()}</td>
            <td class="table__cell">
                {if accounts.is_empty() {
                    view! { <span class="text-secondary">"No accounts"</span> }.into_any()
                } else {
                    view! {
                        <div class="chip-list">
                            {accounts.into_iter().map(|account| {
                                let label = account.clone();
                                view! {
                                    <button
                                        class="chip chip--clickable"
                                        title="View transactions"
                                        on:click=move |_| open_transactions(account.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </td>
        </tr>
    }
}
