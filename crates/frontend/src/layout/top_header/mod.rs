use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::{api, context::use_auth, context::AuthState, storage};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let handle_sign_out = move |_| {
        storage::clear_session();
        set_auth_state.set(AuthState::default());
        spawn_local(async move {
            if let Err(e) = api::sign_out().await {
                log::error!("{e}");
            }
        });
    };

    view! {
        <header class="top-header">
            <button
                class="button button--icon top-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>

            <div class="top-header__title">{"Retail Planner"}</div>

            <div class="top-header__account">
                {move || auth_state.get().account.unwrap_or_default()}
                <button
                    class="button button--icon"
                    title="Sign out"
                    on:click=handle_sign_out
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
