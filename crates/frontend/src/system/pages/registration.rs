use contracts::system::auth::RegistrationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppView;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::api;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let client = StoredValue::new(client);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let success_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = RegistrationRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            error_message.set(Some(e));
            return;
        }

        is_loading.set(true);
        error_message.set(None);
        success_message.set(None);
        let client = client.get_value();

        spawn_local(async move {
            match api::register(&client, &request).await {
                Ok(_) => {
                    success_message.set(Some("Registration successful. You can log in now.".to_string()));
                    password.set(String::new());
                }
                Err(e) => {
                    error_message.set(Some(format!("Registration failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Create an account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">
                        {move || success_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

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
                            placeholder="Choose a password"
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
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(AppView::Login);
                    }>
                        "Already have an account? Login"
                    </a>
                </div>
            </div>
        </div>
    }
}
