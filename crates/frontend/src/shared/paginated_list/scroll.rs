//! Infinite scroll: window scroll events → debounced check → `load_next`.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::loader::{ListLoader, ListingSource};
use super::state::ListState;
use crate::config::AppConfig;
use crate::shared::debounce::Debouncer;

/// Window scroll metrics, px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollPosition {
    pub fn distance_to_bottom(&self) -> f64 {
        (self.document_height - self.scroll_top - self.viewport_height).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub threshold_px: f64,
    pub debounce_ms: u32,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self {
            threshold_px: 200.0,
            debounce_ms: 100,
        }
    }
}

impl ScrollTrigger {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            threshold_px: config.scroll_threshold_px,
            debounce_ms: config.scroll_debounce_ms,
        }
    }

    /// Near the bottom, more data available, nothing in flight, no error shown
    pub fn should_load_more<T, F: Clone>(&self, position: &ScrollPosition, state: &ListState<T, F>) -> bool {
        position.distance_to_bottom() <= self.threshold_px && state.can_load_more()
    }
}

pub fn current_scroll_position() -> Option<ScrollPosition> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollPosition {
        scroll_top,
        viewport_height,
        document_height,
    })
}

/// Loads the next page when the window is scrolled near the bottom.
/// The listener and the pending timer are released with the owning scope.
pub fn use_infinite_scroll<S: ListingSource>(loader: ListLoader<S>, trigger: ScrollTrigger) {
    let state = loader.state();
    let debouncer = StoredValue::new_local(Debouncer::new(
        trigger.debounce_ms,
        move |position: ScrollPosition| {
            let ready = state.with_untracked(|state| trigger.should_load_more(&position, state));
            if ready {
                spawn_local(async move {
                    loader.load_next().await;
                });
            }
        },
    ));

    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some(position) = current_scroll_position() {
            debouncer.update_value(|debouncer| debouncer.call(position));
        }
    });

    on_cleanup(move || {
        handle.remove();
        debouncer.try_update_value(|debouncer| debouncer.cancel());
    });
}

/// `true` once the page is scrolled further than `offset_px`
pub fn use_scroll_to_top_visible(offset_px: f64) -> ReadSignal<bool> {
    let visible = RwSignal::new(false);
    let handle = window_event_listener(ev::scroll, move |_| {
        let scrolled = current_scroll_position()
            .map(|position| position.scroll_top > offset_px)
            .unwrap_or(false);
        if scrolled != visible.get_untracked() {
            visible.set(scrolled);
        }
    });
    on_cleanup(move || handle.remove());
    visible.read_only()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paginated_list::state::LoadMode;
    use contracts::shared::listing::ListingPage;

    fn position(scroll_top: f64) -> ScrollPosition {
        ScrollPosition {
            scroll_top,
            viewport_height: 800.0,
            document_height: 3000.0,
        }
    }

    fn state_with(count: u32, total: usize) -> ListState<u32, ()> {
        let mut state = ListState::default();
        let ticket = state.begin(LoadMode::Replace, 0, &()).unwrap();
        state.finish(&ticket, Ok(ListingPage::new((0..count).collect(), Some(total), 0)));
        state
    }

    #[test]
    fn test_distance_to_bottom() {
        assert_eq!(position(1000.0).distance_to_bottom(), 1200.0);
        assert_eq!(position(2500.0).distance_to_bottom(), 0.0);
    }

    #[test]
    fn test_triggers_only_near_bottom() {
        let trigger = ScrollTrigger::default();
        let state = state_with(20, 45);
        assert!(!trigger.should_load_more(&position(1000.0), &state));
        assert!(trigger.should_load_more(&position(2000.0), &state));
        assert!(trigger.should_load_more(&position(2200.0), &state));
    }

    #[test]
    fn test_no_trigger_without_more_data_or_while_busy() {
        let trigger = ScrollTrigger::default();
        let bottom = position(2200.0);

        assert!(!trigger.should_load_more(&bottom, &state_with(45, 45)));

        let mut in_flight = state_with(20, 45);
        in_flight.begin(LoadMode::Append, 1, &()).unwrap();
        assert!(!trigger.should_load_more(&bottom, &in_flight));

        let mut failed = state_with(20, 45);
        let ticket = failed.begin(LoadMode::Append, 1, &()).unwrap();
        failed.finish(
            &ticket,
            Err(crate::shared::api_utils::FetchError::Status(502)),
        );
        assert!(!trigger.should_load_more(&bottom, &failed));
    }
}
