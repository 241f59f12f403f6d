use contracts::shared::dashboard_section::DashboardSection;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppView;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let client = StoredValue::new(client);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            error_message.set(Some(e));
            return;
        }

        is_loading.set(true);
        error_message.set(None);
        let client = client.get_value();

        spawn_local(async move {
            match api::login(&client, &request).await {
                Ok(_) => {
                    log::info!("login successful");
                    ctx.navigate(AppView::Dashboard(DashboardSection::default()));
                }
                Err(e) => {
                    error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <div class="login-info">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(AppView::Registration);
                    }>
                        "Create an account"
                    </a>
                </div>
            </div>
        </div>
    }
}
