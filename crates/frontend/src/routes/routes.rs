use contracts::shared::dashboard_section::DashboardSection;
use leptos::prelude::*;

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_airbnb_listing::ui::list::AirbnbListingList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::registration::RegistrationPage;
// Router-компоненты не используем: текущий экран живёт в сигнале контекста

/// Экран приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Login,
    Registration,
    Dashboard(DashboardSection),
}

impl Default for AppView {
    fn default() -> Self {
        AppView::Login
    }
}

impl AppView {
    /// Экран по `location.pathname`. Всё незнакомое ведёт на логин.
    pub fn from_path(path: &str) -> Self {
        let normalized = path.trim().trim_end_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "" | "/login" | "/user/login" => AppView::Login,
            "/register" | "/registration" | "/user/register" | "/user/registration" => {
                AppView::Registration
            }
            p if p == "/dashboard" || p.starts_with("/dashboard/") => {
                AppView::Dashboard(DashboardSection::from_path(p))
            }
            _ => AppView::Login,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppView::Login => "/login".to_string(),
            AppView::Registration => "/register".to_string(),
            AppView::Dashboard(section) => section.path(),
        }
    }

    pub fn section(&self) -> Option<DashboardSection> {
        match self {
            AppView::Dashboard(section) => Some(*section),
            _ => None,
        }
    }
}

#[component]
fn DashboardPage(section: DashboardSection) -> impl IntoView {
    match section {
        DashboardSection::Customers => view! { <CustomerList /> }.into_any(),
        DashboardSection::Products => view! { <ProductList /> }.into_any(),
        DashboardSection::Airbnb => view! { <AirbnbListingList /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // при смене раздела страница пересоздаётся вместе со своим состоянием
    let section = Memo::new(move |_| ctx.view.get().section().unwrap_or_default());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { {move || view! { <DashboardPage section=section.get() /> }} }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let is_dashboard = Memo::new(move |_| ctx.view.get().section().is_some());
    let is_registration = Memo::new(move |_| ctx.view.get() == AppView::Registration);

    view! {
        <Show
            when=move || is_dashboard.get()
            fallback=move || view! {
                <Show when=move || is_registration.get() fallback=|| view! { <LoginPage /> }>
                    <RegistrationPage />
                </Show>
            }
        >
            <MainLayout />
        </Show>
    }
}
