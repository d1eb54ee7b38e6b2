use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, context::AuthState, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_sign_in = move |_| {
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::sign_in().await {
                Ok(account) => {
                    storage::save_session(&account);

                    // Flipping the gate switches the app to MainLayout.
                    set_auth_state.set(AuthState {
                        authenticated: true,
                        account: Some(account),
                    });

                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Retail Planner"</h1>
                <h2>"Sign in to continue"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    class="button button--primary"
                    on:click=on_sign_in
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
