use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of pages for `total_count` items; at least one
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// "21–40 of 45"; "0 of 0" for an empty table
pub fn range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0 of 0".to_string();
    }
    let first = (page * page_size + 1).min(total_count);
    let last = ((page + 1) * page_size).min(total_count);
    format!("{}–{} of {}", first, last, total_count)
}

/// PaginationControls component - table paging with rows-per-page selector
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,

    /// Buttons are disabled while a page is loading
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let pages = move || total_pages(total_count.get(), page_size.get());
    let at_start = move || disabled.get() || current_page.get() == 0;
    let at_end = move || disabled.get() || current_page.get() + 1 >= pages();

    view! {
        <div class="pagination-controls">
            <span class="pagination-label">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < pages() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(pages() - 1)
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
