use contracts::shared::filters::SearchFilter;
use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::a002_product::api::ProductsSource;
use crate::domain::a004_transaction::ui::dialog::TransactionsDialog;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::paginated_list::{spawn_load, ListLoader};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    let loader = ListLoader::new(ProductsSource::new(client), config.page_size);
    let search = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let selected_account = RwSignal::new(None::<String>);

    let on_search = Callback::new(move |text: String| {
        search.set(text.clone());
        spawn_load(loader.reload(SearchFilter::new(text)));
    });

    spawn_load(loader.reload(SearchFilter::default()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon("products")}
                    <h1 class="header__title">"Products"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search
                        on_change=on_search
                        delay_ms=config.search_debounce_ms
                        placeholder="Search products by name or email..."
                    />
                </div>
            </div>

            {move || loader.error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Failed to fetch products. {}", e)}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| spawn_load(loader.retry())>
                        "Retry"
                    </Button>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Account ID"</th>
                            <th class="table__header-cell">"Product"</th>
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
                                                <div>"No products found"</div>
                                                <div class="text-secondary">"Try a different search"</div>
                                            </td>
                                        </tr>
                                    }.into_any();
                                }
                                let filter = search.get_untracked();
                                rows.into_iter().map(|product| {
                                    let account = product.account_id.clone();
                                    let account_label = account.clone().unwrap_or_else(|| "N/A".to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{highlight_matches(&product.name, &filter)}</td>
                                            <td class="table__cell">{highlight_matches(&product.email, &filter)}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="chip chip--clickable"
                                                    disabled=account.is_none()
                                                    title="View transactions"
                                                    on:click=move |_| {
                                                        if let Some(account) = account.clone() {
                                                            selected_account.set(Some(account));
                                                            dialog_open.set(true);
                                                        }
                                                    }
                                                >
                                                    {account_label}
                                                </button>
                                            </td>
                                            <td class="table__cell">
                                                <span class="chip">{product.product.clone().unwrap_or_else(|| "N/A".to_string())}</span>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
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
