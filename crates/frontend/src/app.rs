use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_base);

    provide_context(ApiClient::from_config(&config));
    provide_context(config);
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
