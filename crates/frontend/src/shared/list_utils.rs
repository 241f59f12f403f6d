/// Утилиты для списков: поиск с debounce и подсветка совпадений
use leptos::prelude::*;

use crate::shared::debounce::Debouncer;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of `filter` occurrences in `text`; empty when there is nothing to mark
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter = filter.trim();
    // ASCII lowercasing keeps byte offsets aligned with the original text
    if filter.is_empty() || !filter.is_ascii() {
        return Vec::new();
    }
    let filter_lower = filter.to_ascii_lowercase();
    let text_lower = text.to_ascii_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Поле поиска с debounce и кнопкой очистки.
///
/// `on_change` получает значение после паузы в `delay_ms`; очистка срабатывает сразу.
#[component]
pub fn SearchInput(
    /// Текущее применённое значение (для подсветки поля)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    delay_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new_local(Debouncer::new(delay_ms, move |text: String| {
        on_change.run(text);
    }));

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        debouncer.update_value(|debouncer| debouncer.call(new_value));
    };

    let clear_filter = move |_| {
        debouncer.update_value(|debouncer| debouncer.cancel());
        input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Elizabeth Ray", "ray"), vec![(10, 13)]);
        assert_eq!(match_ranges("abcabc", "ABC"), vec![(0, 3), (3, 6)]);
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("anything", "  ").is_empty());
        assert!(match_ranges("anything", "zzz").is_empty());
    }
}
