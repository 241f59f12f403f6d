//! Навигация по разделам панели

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::dashboard_section::DashboardSection;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            {DashboardSection::ALL.into_iter().map(|section| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active_section() == Some(section)
                        on:click=move |_| ctx.open_section(section)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(section.icon())}
                            <span>{section.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
