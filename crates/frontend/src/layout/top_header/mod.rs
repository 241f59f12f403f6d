//! Верхняя панель: переключатель навигации, заголовок и выход.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppView;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    // сессии на клиенте нет, выход просто возвращает на логин
    let logout = move |_| {
        log::info!("logout");
        ctx.navigate(AppView::Login);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__section">
                    {move || ctx.active_section().map(|s| s.title()).unwrap_or_default()}
                </span>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
