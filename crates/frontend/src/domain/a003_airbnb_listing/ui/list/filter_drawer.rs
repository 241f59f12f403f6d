use contracts::shared::filters::{FilterState, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, MAX_RATING};
use leptos::prelude::*;
use thaw::*;

use crate::shared::number_format::format_usd;
use crate::shared::paginated_list::FilterCoordinator;

/// Parses a number input; an empty or broken value falls back to `default`
fn parse_or(raw: &str, default: f64) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(default)
}

/// Фильтры объявлений. Правки живут в pending, пока не нажата Apply.
#[component]
pub fn FilterDrawer(
    open: RwSignal<bool>,
    filters: RwSignal<FilterCoordinator>,
    /// Получает применённые фильтры (Apply или Clear)
    on_apply: Callback<FilterState>,
) -> impl IntoView {
    let pending = move || filters.with(|f| f.pending().clone());

    let apply = move |_| {
        if let Some(applied) = filters.try_update(|f| f.apply()) {
            open.set(false);
            on_apply.run(applied);
        }
    };

    let clear = move |_| {
        if let Some(cleared) = filters.try_update(|f| f.clear()) {
            open.set(false);
            on_apply.run(cleared);
        }
    };

    let cancel = move |_| {
        filters.update(|f| f.discard());
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Filters"</DialogTitle>
                    <DialogContent>
                        <div class="filter-form">
                            <div class="form-group">
                                <label for="filter-search">"Search"</label>
                                <input
                                    id="filter-search"
                                    type="text"
                                    placeholder="Name, description, location..."
                                    prop:value=move || pending().search_text
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        filters.update(|f| f.set_search_text(text));
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label>
                                    {move || {
                                        let range = pending().price_range;
                                        format!("Price per night: {} – {}", format_usd(range.min), format_usd(range.max))
                                    }}
                                </label>
                                <div class="filter-form__row">
                                    <input
                                        type="number"
                                        min=DEFAULT_PRICE_MIN.to_string()
                                        max=DEFAULT_PRICE_MAX.to_string()
                                        step="10"
                                        prop:value=move || pending().price_range.min.to_string()
                                        on:change=move |ev| {
                                            let min = parse_or(&event_target_value(&ev), DEFAULT_PRICE_MIN);
                                            filters.update(|f| {
                                                let max = f.pending().price_range.max;
                                                f.set_price_range(min, max);
                                            });
                                        }
                                    />
                                    <span>"–"</span>
                                    <input
                                        type="number"
                                        min=DEFAULT_PRICE_MIN.to_string()
                                        max=DEFAULT_PRICE_MAX.to_string()
                                        step="10"
                                        prop:value=move || pending().price_range.max.to_string()
                                        on:change=move |ev| {
                                            let max = parse_or(&event_target_value(&ev), DEFAULT_PRICE_MAX);
                                            filters.update(|f| {
                                                let min = f.pending().price_range.min;
                                                f.set_price_range(min, max);
                                            });
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label>
                                    {move || {
                                        let rating = pending().minimum_rating;
                                        if rating > 0.0 {
                                            format!("Minimum rating: {:.1}+", rating)
                                        } else {
                                            "Minimum rating: any".to_string()
                                        }
                                    }}
                                </label>
                                <input
                                    type="range"
                                    min="0"
                                    max=MAX_RATING.to_string()
                                    step="0.5"
                                    prop:value=move || pending().minimum_rating.to_string()
                                    on:input=move |ev| {
                                        let rating = parse_or(&event_target_value(&ev), 0.0);
                                        filters.update(|f| f.set_minimum_rating(rating));
                                    }
                                />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=clear>"Clear all"</Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=cancel>"Cancel"</Button>
                        <Button appearance=ButtonAppearance::Primary on_click=apply>"Apply"</Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
