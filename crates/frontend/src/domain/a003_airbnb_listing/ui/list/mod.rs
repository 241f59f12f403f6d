//! Airbnb listings: card grid with infinite scroll and a filter drawer.
//!
//! The first page is a Replace load; scrolling near the bottom appends the
//! next page. Apply/Clear in the drawer start over from page 0 with the
//! applied filters only.

pub mod card;
pub mod filter_drawer;

use contracts::shared::listing::ListingItem as _;
use contracts::shared::filters::FilterState;
use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::a003_airbnb_listing::api::AirbnbListingsSource;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;
use crate::shared::paginated_list::{
    scroll_to_top, spawn_load, use_infinite_scroll, use_scroll_to_top_visible, FilterCoordinator,
    ListLoader, ScrollTrigger,
};
use card::ListingCard;
use filter_drawer::FilterDrawer;

/// Scroll offset after which the "back to top" button appears, px
const SCROLL_TOP_BUTTON_OFFSET: f64 = 300.0;

fn results_label(shown: usize, total: usize) -> String {
    match total {
        0 => "No listings".to_string(),
        1 => "1 listing".to_string(),
        _ if shown < total => format!("Showing {} of {} listings", shown, total),
        _ => format!("{} listings", total),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AirbnbListingList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    let loader = ListLoader::new(AirbnbListingsSource::new(client), config.page_size);
    let filters = RwSignal::new(FilterCoordinator::default());
    let drawer_open = RwSignal::new(false);

    use_infinite_scroll(loader, ScrollTrigger::from_config(&config));
    let show_scroll_top = use_scroll_to_top_visible(SCROLL_TOP_BUTTON_OFFSET);

    let on_apply = Callback::new(move |applied: FilterState| {
        scroll_to_top();
        spawn_load(loader.reload(applied));
    });

    let open_drawer = move |_| {
        // незавершённые правки с прошлого раза не переносятся
        filters.update(|f| f.discard());
        drawer_open.set(true);
    };

    spawn_load(loader.reload(FilterState::default()));

    view! {
        <div class="page page--listings">
            <div class="header">
                <div class="header__content">
                    {icon("home")}
                    <h1 class="header__title">"Airbnb Listings"</h1>
                    <span class="text-secondary">
                        {move || results_label(loader.len(), loader.total_count())}
                    </span>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=open_drawer>
                        {icon("filter")}
                        "Filters"
                        {move || {
                            let count = filters.with(|f| f.active_filter_count());
                            (count > 0).then(|| view! {
                                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                                    {count.to_string()}
                                </Badge>
                            })
                        }}
                    </Button>
                </div>
            </div>

            // ошибка первой страницы: данных нет
            {move || {
                let error = loader.error()?;
                loader.append_error().is_none().then(|| view! {
                    <div class="error-panel">
                        <div class="error-panel__title">"Failed to fetch listings"</div>
                        <div class="error-panel__text">{error}</div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| spawn_load(loader.retry())>
                            {icon("refresh")}
                            "Retry"
                        </Button>
                    </div>
                })
            }}

            <Show when=move || loader.is_loading()>
                <div class="listings-loading">
                    <Spinner />
                    <span>"Loading listings..."</span>
                </div>
            </Show>

            <div class="listing-grid">
                <For
                    each=move || loader.items()
                    key=|listing| listing.key().to_string()
                    children=|listing| view! { <ListingCard listing=listing /> }
                />
            </div>

            <Show when=move || {
                loader.len() == 0 && !loader.is_loading() && loader.error().is_none()
            }>
                <div class="empty-state">
                    <div class="empty-state__title">"No listings found"</div>
                    <div class="text-secondary">"Try adjusting your filters"</div>
                </div>
            </Show>

            <Show when=move || loader.is_loading_more()>
                <div class="listings-loading listings-loading--more">
                    <Spinner />
                    <span>"Loading more..."</span>
                </div>
            </Show>

            // ошибка догрузки: данные остаются, показываем полосу с повтором
            {move || loader.append_error().map(|error| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Couldn't load more listings. {}", error)}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| spawn_load(loader.retry())>
                        "Retry"
                    </Button>
                </div>
            })}

            <Show when=move || {
                loader.len() > 0 && !loader.has_more() && !loader.is_loading() && loader.error().is_none()
            }>
                <div class="listings-end text-secondary">"You've reached the end of the list"</div>
            </Show>

            <Show when=move || show_scroll_top.get()>
                <button class="scroll-top-button" title="Back to top" on:click=move |_| scroll_to_top()>
                    {icon("arrow-up")}
                </button>
            </Show>

            <FilterDrawer open=drawer_open filters=filters on_apply=on_apply />
        </div>
    }
}
