use contracts::shared::dashboard_section::DashboardSection;
use leptos::ev;
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::routes::routes::AppView;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<AppView>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(AppView::default()),
            left_open: RwSignal::new(true),
        }
    }

    fn current_path() -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    /// Связывает текущий экран с адресной строкой: начальный экран берётся из
    /// pathname, дальнейшие переходы пишутся в history, кнопка "назад" читается
    /// через popstate.
    pub fn init_router_integration(&self) {
        let initial = AppView::from_path(&Self::current_path());
        log::debug!("initial view {:?}", initial);
        self.view.set(initial);

        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            let view = AppView::from_path(&Self::current_path());
            if this.view.get_untracked() != view {
                this.view.set(view);
            }
        });
        on_cleanup(move || handle.remove());

        Effect::new(move |_| {
            let new_path = this.view.get().path();

            // Only update URL if it actually changed
            if Self::current_path() != new_path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_path),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, view: AppView) {
        log::debug!("navigate: {:?}", view);
        self.view.set(view);
    }

    pub fn open_section(&self, section: DashboardSection) {
        self.navigate(AppView::Dashboard(section));
    }

    pub fn active_section(&self) -> Option<DashboardSection> {
        self.view.with(|v| v.section())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
